//! Upstream provider implementations

pub mod google;

// Re-export for convenience
pub use google::GeminiClient;
