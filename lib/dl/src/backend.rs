//! The uniform interface every loader backend presents to the runtime.

use std::num::NonZeroUsize;

use crate::error::DlError;
use crate::flags::DlFlags;

/// Opaque handle to a loaded module.
///
/// Handles are minted by whichever component actually performed the load
/// and are never interpreted here. On hosts where the backend defers
/// loading to a host driver, no handle is ever produced by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModuleHandle(NonZeroUsize);

impl ModuleHandle {
    /// Wraps a raw, non-null handle address.
    pub fn from_raw(raw: usize) -> Option<Self> {
        NonZeroUsize::new(raw).map(Self)
    }

    /// The raw address this handle wraps.
    pub fn as_raw(self) -> usize {
        self.0.get()
    }
}

/// Opaque address of a resolved symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DlSymbol(NonZeroUsize);

impl DlSymbol {
    /// Wraps a raw, non-null symbol address.
    pub fn from_raw(raw: usize) -> Option<Self> {
        NonZeroUsize::new(raw).map(Self)
    }

    /// The raw address this symbol wraps.
    pub fn as_raw(self) -> usize {
        self.0.get()
    }
}

/// Caller-owned sink for errors reported along the open path.
///
/// The sink travels with every open and close so a backend that fails a
/// real load attempt has somewhere to put the failure. Backends that
/// never load anything themselves leave it untouched.
#[derive(Debug, Default)]
pub struct DlErrorSink {
    error: Option<DlError>,
}

impl DlErrorSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `error`, replacing any earlier one.
    pub fn record(&mut self, error: DlError) {
        self.error = Some(error);
    }

    /// True while no error has been recorded.
    pub fn is_clear(&self) -> bool {
        self.error.is_none()
    }

    /// Takes the recorded error out of the sink, leaving it clear.
    pub fn take(&mut self) -> Option<DlError> {
        self.error.take()
    }
}

/// A platform dynamic-loader backend.
///
/// The portable loader is polymorphic over this trait: richer platforms
/// implement the operations on top of a system loader, while hosts that
/// load by other means satisfy the same interface with inert bodies and
/// let the caller fall through to the host-driver path.
pub trait DlBackend {
    /// Conventional filename prefix for shared modules on this platform.
    fn so_prefix(&self) -> &'static str;

    /// Candidate filename suffixes, in probe order.
    ///
    /// The probe loop tries suffixes front to back, so the preferred
    /// form comes first. The list always carries an empty sentinel so
    /// the name is also tried as given.
    fn so_suffixes(&self) -> &'static [&'static str];

    /// System directory probed after the unqualified candidates, if the
    /// platform has one.
    fn system_dir(&self) -> Option<&'static str>;

    /// Translates portable `flags` into this host's native loader flags,
    /// layered over the caller-supplied `native` baseline.
    fn convert_flags(&self, flags: DlFlags, native: u32) -> u32;

    /// Attempts to open `file` with already-translated `native` flags.
    ///
    /// `None` means the backend declined to load, which is an inert
    /// success rather than an error: the caller is expected to try the
    /// host-driver path next. Failures of a real load attempt are
    /// recorded in `sink`.
    fn open_file(&self, file: &str, native: u32, sink: &mut DlErrorSink) -> Option<ModuleHandle>;

    /// Releases `module`.
    ///
    /// Must tolerate an absent handle; backends with nothing to release
    /// do nothing.
    fn close_handle(&self, module: Option<ModuleHandle>, sink: &mut DlErrorSink);

    /// Resolves `name` inside `module`, or `None` when the backend has
    /// no visibility into the module's symbols.
    fn lookup_symbol(&self, module: ModuleHandle, name: &str) -> Option<DlSymbol>;

    /// The backend's pending error message as a freshly allocated owned
    /// string. Empty means no error is pending.
    fn current_error_string(&self) -> String;
}
