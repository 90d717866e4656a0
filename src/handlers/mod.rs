// Handler modules
pub mod check;
pub mod thresholds;

// Re-export all handler functions
pub use check::{CheckOptions, handle_check};
pub use thresholds::handle_thresholds;
