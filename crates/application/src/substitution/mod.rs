//! Token substitution module
//!
//! Provides parsing and substitution of `#{key}#` tokens in text.
//!
//! # Usage
//!
//! ```
//! use libvar_application::substitution::substitute;
//! use libvar_domain::VariableLibrary;
//!
//! let library = VariableLibrary::new(1, "Staging", [("name", "Alice")]);
//!
//! let result = substitute("Hello #{name}#, age #{age}#", &library);
//! assert_eq!(result.text, "Hello Alice, age #{age}#");
//! assert!(result.replaced.contains("name"));
//! assert!(result.missing.contains("age"));
//! ```

pub mod engine;
pub mod parser;

pub use engine::{SubstitutionResult, substitute};
pub use parser::{TokenReference, extract_token_keys, has_tokens, parse_tokens};
