//! Portable load flags understood by the cross-platform loader.

use bitflags::bitflags;

bitflags! {
    /// Flags a caller passes to the portable loader when opening a module.
    ///
    /// Binding defaults to immediate resolution; `LAZY` requests deferred
    /// binding. Scope defaults to `LOCAL`. Backends whose host has no
    /// corresponding concepts are free to ignore the whole set.
    pub struct DlFlags: u32 {
        /// Resolve symbols on first use instead of at load time.
        const LAZY = 1 << 0;
        /// Keep the module's symbols out of the global namespace.
        const LOCAL = 1 << 1;
        /// Publish the module's symbols to the global namespace.
        const GLOBAL = 1 << 2;
    }
}
