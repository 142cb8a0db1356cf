//! Core application primitives (runtime, throttling, reports)

pub mod report;
pub mod runtime;
pub mod throttle;

pub use report::*;
pub use runtime::*;
pub use throttle::*;
