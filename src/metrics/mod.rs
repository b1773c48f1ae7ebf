//! Operation counters for every bounded structure (feature `metrics`).
//!
//! Each structure owns a plain counter struct from [`metrics_impl`] and bumps
//! it through the recorder traits in [`traits`]. Counters are read out as
//! `Copy` snapshots ([`snapshot`]) and can be published with the Prometheus
//! text [`exporter`].

pub mod cell;
pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;
