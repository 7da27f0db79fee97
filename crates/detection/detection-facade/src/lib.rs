//! Flux Detection Facade
//!
//! Unified re-exports for the detection module.
//!
//! This facade provides a single entry point to all detection functionality:
//! - `AnomalyDetector` / `OnsetDetector` traits and the data model from SPI
//! - Configuration types from API
//! - Detector implementations from Core

// Re-export everything from SPI
pub use detection_spi::*;

// Re-export everything from API
pub use detection_api::*;

// Re-export everything from Core
pub use detection_core::*;
