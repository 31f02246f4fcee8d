//! Implementations of the `incline` subcommands.

pub mod complete;
pub mod index;
pub mod init;
pub mod ls;
pub mod shared;
