//! Native flag translation for the two WebAssembly host families.
//!
//! Emscripten ships a dlfcn-style system loader, so portable flags map
//! onto its `RTLD_*` bits. WASI has no loader-flag semantics at all and
//! the caller's baseline passes through untouched. Which translation the
//! platform backend uses is a property of the build target, selected at
//! the bottom of this module; both variants are plain functions compiled
//! everywhere so either can be exercised directly.

use crate::flags::DlFlags;

/// Translation for hosts with a dlfcn-style system loader (Emscripten).
pub mod dlfcn {
    use super::DlFlags;

    /// Host bit for lazy symbol binding.
    pub const RTLD_LAZY: u32 = 0x1;
    /// Host bit for immediate symbol binding.
    pub const RTLD_NOW: u32 = 0x2;
    /// Host bit publishing symbols to the global namespace.
    pub const RTLD_GLOBAL: u32 = 0x100;
    /// Host value for local scope. Zero, as in the host's musl libc.
    pub const RTLD_LOCAL: u32 = 0x0;

    /// Layers the host bits implied by `flags` over the `native`
    /// baseline. Baseline bits are always preserved.
    ///
    /// Specifying both `GLOBAL` and `LOCAL` defaults to local scope.
    pub fn convert_flags(flags: DlFlags, native: u32) -> u32 {
        let mut out = native;

        if flags.contains(DlFlags::GLOBAL) && !flags.contains(DlFlags::LOCAL) {
            out |= RTLD_GLOBAL;
        } else {
            out |= RTLD_LOCAL;
        }

        if flags.contains(DlFlags::LAZY) {
            out |= RTLD_LAZY;
        } else {
            out |= RTLD_NOW;
        }

        out
    }
}

/// Translation for minimal hosts without loader-flag semantics (WASI).
pub mod minimal {
    use super::DlFlags;

    /// Returns `native` unchanged. The host defines no bits for the
    /// portable flags to map onto, so ignoring them is the contract,
    /// not a gap.
    pub fn convert_flags(_flags: DlFlags, native: u32) -> u32 {
        native
    }
}

cfg_if::cfg_if! {
    if #[cfg(all(target_family = "wasm", target_os = "wasi"))] {
        pub use self::minimal::convert_flags;
    } else {
        pub use self::dlfcn::convert_flags;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{dlfcn, minimal};
    use crate::flags::DlFlags;

    #[test]
    fn global_maps_to_global_scope_and_now_binding() {
        assert_eq!(
            dlfcn::convert_flags(DlFlags::GLOBAL, 0),
            dlfcn::RTLD_GLOBAL | dlfcn::RTLD_NOW
        );
    }

    #[test]
    fn local_wins_when_both_scopes_are_requested() {
        let out = dlfcn::convert_flags(DlFlags::GLOBAL | DlFlags::LOCAL | DlFlags::LAZY, 0x1000);
        assert_eq!(out, 0x1000 | dlfcn::RTLD_LOCAL | dlfcn::RTLD_LAZY);
        assert_eq!(out & dlfcn::RTLD_GLOBAL, 0);
    }

    #[test]
    fn empty_flags_default_to_local_now() {
        assert_eq!(
            dlfcn::convert_flags(DlFlags::empty(), 0),
            dlfcn::RTLD_LOCAL | dlfcn::RTLD_NOW
        );
    }

    #[test]
    fn lazy_requests_lazy_binding() {
        let out = dlfcn::convert_flags(DlFlags::LAZY, 0);
        assert_eq!(out & dlfcn::RTLD_LAZY, dlfcn::RTLD_LAZY);
        assert_eq!(out & dlfcn::RTLD_NOW, 0);
    }

    #[test]
    fn baseline_bits_survive_translation() {
        let out = dlfcn::convert_flags(DlFlags::GLOBAL, 0x2A00_0000);
        assert_eq!(out & 0x2A00_0000, 0x2A00_0000);
    }

    #[test]
    fn minimal_host_passes_the_baseline_through() {
        let everything = DlFlags::GLOBAL | DlFlags::LOCAL | DlFlags::LAZY;
        for flags in [DlFlags::empty(), DlFlags::LAZY, everything] {
            assert_eq!(minimal::convert_flags(flags, 0x2A), 0x2A);
        }
    }
}
