//! Error surface of the portable loader.

use thiserror::Error;

/// Errors reported by the portable loader and its backends.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DlError {
    /// Every candidate filename was probed and none produced a module.
    #[error("shared module `{name}` not found")]
    NotFound {
        /// The library name the probe started from.
        name: String,
    },

    /// A backend with symbol visibility could not resolve a name.
    #[error("undefined symbol `{name}`")]
    SymbolNotFound {
        /// The symbol that failed to resolve.
        name: String,
    },
}
