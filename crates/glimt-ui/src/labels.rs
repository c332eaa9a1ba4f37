#![forbid(unsafe_code)]

//! Localized prompt strings.
//!
//! String-table loading is the embedding application's concern; these are
//! the English defaults.

/// The strings the prompt renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    /// Login field label.
    pub login: String,
    /// Password field label.
    pub password: String,
    /// First function-key hint.
    pub f1: String,
    /// Second function-key hint.
    pub f2: String,
    /// Numlock indicator.
    pub numlock: String,
    /// Capslock indicator.
    pub capslock: String,
    /// Status line shown when the console device cannot be read.
    pub err_console_dev: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            login: "login:".into(),
            password: "password:".into(),
            f1: "F1 shutdown".into(),
            f2: "F2 reboot".into(),
            numlock: "numlock".into(),
            capslock: "capslock".into(),
            err_console_dev: "failed to access console device".into(),
        }
    }
}
