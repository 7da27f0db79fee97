//! Flux Detection Core
//!
//! Implementations for spike detection, background-relative anomaly
//! detection, quiet-background filtering, and CUSUM onset detection.

mod background;
mod intervals;
mod noise;
mod onset;
mod spike;
mod stats;

pub use background::*;
pub use intervals::*;
pub use noise::*;
pub use onset::*;
pub use spike::*;
pub use stats::*;
