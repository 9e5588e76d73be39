use std::path::PathBuf;

/// Longest expression, in tokens, a single line may hold.
pub const DEFAULT_MAX_TOKENS: usize = 100;

pub const HISTORY_FILE: &str = ".intcalc_history";

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Config {
    pub max_tokens: usize,
    /// Where the REPL keeps its history, None disables it.
    pub history_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_tokens: DEFAULT_MAX_TOKENS,
            history_path: dirs::home_dir().map(|home| home.join(HISTORY_FILE)),
        }
    }
}

impl Config {
    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn without_history(mut self) -> Self {
        self.history_path = None;
        self
    }
}
