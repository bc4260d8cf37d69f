//! Tracing and logging setup shared by the armory binaries.

/// Initialize process-wide observability (tracing/logging).
///
/// Diagnostics go to stderr so stdout stays reserved for rendered report
/// text. This is safe to call multiple times; subsequent calls become
/// no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, layers).
pub mod tracing;
