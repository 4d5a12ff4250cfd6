//! Libvar Domain - Core business types
//!
//! This crate defines the domain model for the Libvar toolkit:
//! variable libraries fetched from a remote service, the identity and
//! credential used to reach it, and the client configuration.
//! All types here are pure Rust with no I/O dependencies.

pub mod config;
pub mod credential;
pub mod error;
pub mod identity;
pub mod library;

pub use config::ClientConfig;
pub use credential::Credential;
pub use error::{ConfigError, ConfigResult};
pub use identity::ProjectIdentity;
pub use library::{VariableLibrary, VariableValue};
