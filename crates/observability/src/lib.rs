//! Tracing and logging setup shared by the dashboard crates.

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Initialize a subscriber that writes through the test harness' capture.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_for_tests() {
    tracing::init_for_tests();
}

/// Tracing configuration (filters, layers).
pub mod tracing;
