//! Token substitution engine
//!
//! Applies a variable library to text containing `#{key}#` tokens.
//! Pure and side-effect free: the caller owns applying the returned
//! text to a live document.

use std::collections::BTreeSet;

use libvar_domain::VariableLibrary;

use super::parser::parse_tokens;

/// Result of substituting one library into one block of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionResult {
    /// The fully substituted text.
    pub text: String,

    /// Keys that were found in the text and replaced from the library.
    /// A key occurring in several tokens is recorded once.
    pub replaced: BTreeSet<String>,

    /// Keys that were found in the text but absent from the library.
    /// Their tokens are left verbatim in the output.
    pub missing: BTreeSet<String>,
}

impl SubstitutionResult {
    /// Creates a result for input with no tokens at all.
    #[must_use]
    pub fn no_tokens(input: &str) -> Self {
        Self {
            text: input.to_string(),
            replaced: BTreeSet::new(),
            missing: BTreeSet::new(),
        }
    }

    /// Returns true if the text contained no tokens at all.
    ///
    /// Distinct from "tokens found but none resolved", which reports a
    /// non-empty [`Self::missing`] set.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.replaced.is_empty() && self.missing.is_empty()
    }

    /// Returns true if every token found was replaced.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Returns the count of distinct replaced keys.
    #[must_use]
    pub fn replaced_count(&self) -> usize {
        self.replaced.len()
    }

    /// Returns the count of distinct missing keys.
    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.missing.len()
    }
}

/// Substitutes every `#{key}#` token in `input` with the matching value
/// from `library`.
///
/// Tokens whose key the library knows are replaced with the value
/// string; unknown tokens are left verbatim, delimiters included. Every
/// occurrence is substituted independently, but each key is recorded
/// only once in the appropriate set. Replacement values are not
/// rescanned for tokens.
#[must_use]
pub fn substitute(input: &str, library: &VariableLibrary) -> SubstitutionResult {
    let references = parse_tokens(input);

    if references.is_empty() {
        return SubstitutionResult::no_tokens(input);
    }

    let mut replaced = BTreeSet::new();
    let mut missing = BTreeSet::new();
    let mut text = String::with_capacity(input.len());
    let mut last_end = 0;

    for token in &references {
        // Append text before this token
        text.push_str(&input[last_end..token.span.start]);

        if let Some(value) = library.value_of(&token.key) {
            text.push_str(value);
            replaced.insert(token.key.clone());
        } else {
            // Keep the original #{key}# for unknown keys
            text.push_str(&input[token.span.clone()]);
            missing.insert(token.key.clone());
        }

        last_end = token.span.end;
    }

    // Append remaining text after the last token
    text.push_str(&input[last_end..]);

    SubstitutionResult {
        text,
        replaced,
        missing,
    }
}
