//! Domain models for the Krishi Sevak advisory service

mod advisory;
mod crop;
mod mandi;
mod weather;

pub use advisory::*;
pub use crop::*;
pub use mandi::*;
pub use weather::*;
