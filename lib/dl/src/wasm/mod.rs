//! Loader backend for WebAssembly hosts.
//!
//! Loading a module on these hosts is the host driver's job, not ours:
//! every open here declines with an absent handle and the caller falls
//! through to the driver. The backend still answers the two questions
//! the portable loader needs from a platform: what candidate filenames
//! look like, and how portable load flags map onto the host loader's
//! native flags.

pub mod host;

use crate::backend::{DlBackend, DlErrorSink, DlSymbol, ModuleHandle};
use crate::flags::DlFlags;

/// Filename prefix for shared modules. WebAssembly modules have none.
pub const SO_PREFIX: &str = "";

/// Candidate suffixes in probe order: the module extension first, then
/// the empty sentinel so the bare name is tried as given.
pub const SO_SUFFIXES: &[&str] = &[".wasm", ""];

/// The WebAssembly-host loader backend.
///
/// Stateless; every operation is pure in its arguments.
#[derive(Debug, Default, Clone, Copy)]
pub struct WasmDl;

impl WasmDl {
    /// Creates the backend.
    pub fn new() -> Self {
        Self
    }
}

impl DlBackend for WasmDl {
    fn so_prefix(&self) -> &'static str {
        SO_PREFIX
    }

    fn so_suffixes(&self) -> &'static [&'static str] {
        SO_SUFFIXES
    }

    fn system_dir(&self) -> Option<&'static str> {
        // The host exposes no standard library directory.
        None
    }

    fn convert_flags(&self, flags: DlFlags, native: u32) -> u32 {
        host::convert_flags(flags, native)
    }

    fn open_file(&self, file: &str, native: u32, _sink: &mut DlErrorSink) -> Option<ModuleHandle> {
        // The actual load happens in the host driver; declining is the
        // caller's cue to take that path.
        tracing::trace!(file, native, "wasm backend declining open");
        None
    }

    fn close_handle(&self, _module: Option<ModuleHandle>, _sink: &mut DlErrorSink) {}

    fn lookup_symbol(&self, _module: ModuleHandle, _name: &str) -> Option<DlSymbol> {
        None
    }

    fn current_error_string(&self) -> String {
        String::new()
    }
}
