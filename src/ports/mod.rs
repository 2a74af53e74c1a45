//! Ports (trait boundaries) between the game core and its drivers.
//!
//! The traits are owned by the domain; move policies and event sinks are
//! adapters implementing them.

pub mod observer;
pub mod strategy;

pub use observer::Observer;
pub use strategy::Strategy;
