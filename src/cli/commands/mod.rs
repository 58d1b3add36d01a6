pub mod auth;
pub mod options;
pub mod shell;

pub use auth::{auth_command, OfflineApi};
pub use options::{defaults_command, dump_command, options_command, OptionsCommands};
pub use shell::shell_command;
