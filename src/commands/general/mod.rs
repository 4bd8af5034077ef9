/// Submodule defining the `h` command.
pub mod help;
/// Submodule defining the `ping` command.
pub mod ping;
/// Submodule defining the `s` command.
pub mod stats;

use crate::{CommandResult, Context};
