//! Domain models for the Farm Advisor service

mod advisory;
mod farmer;
mod soil;
mod weather;

pub use advisory::*;
pub use farmer::*;
pub use soil::*;
pub use weather::*;
