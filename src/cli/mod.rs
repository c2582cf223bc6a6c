//! Command-line interface module.

mod args;
pub mod build;
pub mod menu;
pub mod serve;
pub mod validate;

pub use args::{BuildArgs, Cli, Commands, DEFAULT_CONFIG, MenuArgs, ServeArgs, ValidateArgs};
