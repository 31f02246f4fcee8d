//! CLI structure for incline.

pub mod args;
pub mod commands;
