//! Libvar Application - Fetching and substitution logic
//!
//! This crate holds the two cooperating cores of the toolkit:
//!
//! - [`fetcher::LibraryFetcher`] retrieves variable libraries from the
//!   remote service through the [`ports::VariableGroupApi`] port, with an
//!   in-memory per-identity cache.
//! - [`substitution`] scans text for `#{key}#` tokens and substitutes
//!   matching values from a chosen library.
//!
//! Neither core touches host state: the host supplies identity,
//! credential, and text, and renders the returned results and errors.

pub mod error;
pub mod fetcher;
pub mod ports;
pub mod substitution;

pub use error::{ApiError, ApiResult};
pub use fetcher::LibraryFetcher;
pub use substitution::{SubstitutionResult, TokenReference, parse_tokens, substitute};
