//! Shared test utilities for the graphgen crates.
//!
//! - [`tracing`] captures spans and events so suites can assert on the
//!   generators' instrumentation.
//! - [`profile`] reads the environment overrides that tune property-test
//!   runs.

pub mod profile;
pub mod tracing;
