//! Session-scoped derivation services.
//!
//! [`DashboardService`] wires the pipeline together:
//! catalog -> loader -> aligner -> filter -> composer. Every view is a pure
//! derivation of (selected file, selected interval, selected toggles), so
//! the presentation layer can recompute on every control change; the only
//! mutable state here is an explicit keyed cache of loaded series.

pub mod view;

pub use view::{DashboardService, DashboardView, RawPoint, ViewRequest};
