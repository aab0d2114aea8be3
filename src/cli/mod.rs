//! Command-line interface module.

mod args;
pub mod emit;
pub mod init;
pub mod query;
pub mod validate;

pub use args::{Cli, Commands, EmitArgs, EmitFormat, QueryArgs, ValidateArgs};
