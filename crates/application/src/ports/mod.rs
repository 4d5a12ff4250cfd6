//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external
//! systems. Each port is a trait implemented by an adapter in the
//! infrastructure layer.

mod api;
mod clock;

pub use api::VariableGroupApi;
pub use clock::Clock;
