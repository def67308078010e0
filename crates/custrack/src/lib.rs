//! Top-level facade crate for custrack.
//!
//! Re-exports the core model/metrics and the report library so users can depend on a single crate.

pub mod core {
    pub use custrack_core::*;
}

pub mod report {
    pub use custrack_report::*;
}
