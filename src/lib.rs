pub mod cascade;
pub mod config;
pub mod report;

// Re-export vision types for convenience
pub use facedet_vision::{annotate, detector, window, Detector, DetectorError, Region};
