//! Candidate-name construction and the portable open loop.

use tracing::trace;

use crate::backend::{DlBackend, DlErrorSink, DlSymbol, ModuleHandle};
use crate::error::DlError;
use crate::flags::DlFlags;

/// Builds the ordered list of filenames to probe for `name`.
///
/// For each backend suffix the candidate is `prefix + name + suffix`,
/// so the preferred extensioned form comes first and the empty sentinel
/// suffix tries the name as given. When the backend has a system
/// directory the same shapes are repeated under it after the bare
/// candidates.
pub fn candidates<B: DlBackend + ?Sized>(backend: &B, name: &str) -> Vec<String> {
    let prefix = backend.so_prefix();
    let mut out = Vec::new();

    for suffix in backend.so_suffixes() {
        out.push(format!("{prefix}{name}{suffix}"));
    }

    if let Some(dir) = backend.system_dir() {
        for suffix in backend.so_suffixes() {
            out.push(format!("{dir}/{prefix}{name}{suffix}"));
        }
    }

    out
}

/// Opens `name` through `backend`, probing each candidate filename in
/// order.
///
/// Portable `flags` are translated once and layered over the `native`
/// baseline. A backend that declines every candidate yields
/// [`DlError::NotFound`]; on hosts where the backend is inert that is
/// the caller's cue to hand the name to the host driver instead.
#[tracing::instrument(level = "trace", skip(backend, sink))]
pub fn open_library<B: DlBackend + ?Sized>(
    backend: &B,
    name: &str,
    flags: DlFlags,
    native: u32,
    sink: &mut DlErrorSink,
) -> Result<ModuleHandle, DlError> {
    let native = backend.convert_flags(flags, native);

    for candidate in candidates(backend, name) {
        trace!(candidate = candidate.as_str(), "probing");
        if let Some(handle) = backend.open_file(&candidate, native, sink) {
            return Ok(handle);
        }
    }

    Err(DlError::NotFound {
        name: name.to_string(),
    })
}

/// Resolves `name` inside `module`, reporting a miss as an error.
pub fn resolve_symbol<B: DlBackend + ?Sized>(
    backend: &B,
    module: ModuleHandle,
    name: &str,
) -> Result<DlSymbol, DlError> {
    backend
        .lookup_symbol(module, name)
        .ok_or_else(|| DlError::SymbolNotFound {
            name: name.to_string(),
        })
}
