//! Utility modules.

/// Single-line excerpts of response bodies for logs and error details.
pub mod excerpt;
