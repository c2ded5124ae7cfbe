//! The `virtual-dl` crate provides the uniform dynamic-loader interface
//! the runtime uses to probe, open, and resolve shared modules, together
//! with the backend for WebAssembly hosts.
//!
//! On WebAssembly the backend is deliberately inert: the host driver
//! performs the actual module load, and every probe through this crate
//! declines by returning an absent handle. What the backend does answer
//! is the platform naming shape (prefix, suffix order, system directory)
//! used to build candidate filenames, and the translation from portable
//! load flags to the host loader's native flags.

#![deny(missing_docs, trivial_numeric_casts, unused_extern_crates)]
#![warn(unused_import_braces)]

mod backend;
mod error;
mod flags;
mod probe;
pub mod wasm;

pub use crate::backend::{DlBackend, DlErrorSink, DlSymbol, ModuleHandle};
pub use crate::error::DlError;
pub use crate::flags::DlFlags;
pub use crate::probe::{candidates, open_library, resolve_symbol};

cfg_if::cfg_if! {
    if #[cfg(target_family = "wasm")] {
        /// The loader backend for the platform this crate is built for.
        pub type PlatformDl = crate::wasm::WasmDl;
    }
}
