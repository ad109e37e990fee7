// ABOUTME: Version, prompt, and REPL banner constants

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const PROMPT: &str = "> ";
pub const HISTORY_FILE: &str = ".datascript_history";

pub const WELCOME_MESSAGE: &str = "DataScript";
pub const WELCOME_HINT: &str = "Press Ctrl+D to exit";
