//! Token parser for `#{key}#` syntax
//!
//! Parses text to extract token references with their positions.
//!
//! The grammar is deliberately minimal: a token is any non-greedy span
//! between the literal delimiters `#{` and `}#`. The key is taken
//! verbatim — no trimming, no escaping, case-sensitive. Because the
//! match is non-greedy, a token closes at the FIRST `}#` after its
//! opener, even when a human would read the surrounding text as one
//! larger token. That early-close behavior is part of the contract and
//! must not be "fixed". Tokens never span a line break.

use std::ops::Range;

/// Opening delimiter of a token.
pub const OPEN: &str = "#{";

/// Closing delimiter of a token.
pub const CLOSE: &str = "}#";

/// A parsed token reference in a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenReference {
    /// The key between the delimiters, verbatim. May be empty.
    pub key: String,

    /// Byte range in the original string covering the whole token,
    /// delimiters included.
    pub span: Range<usize>,
}

impl TokenReference {
    /// Creates a new token reference.
    #[must_use]
    pub fn new(key: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            key: key.into(),
            span,
        }
    }
}

/// Parses a string and extracts all token references.
///
/// Tokens are matched left-to-right and never overlap; scanning resumes
/// immediately after each closing delimiter.
///
/// # Examples
///
/// ```
/// use libvar_application::substitution::parse_tokens;
///
/// let refs = parse_tokens("Hello #{name}#, age #{age}#");
/// assert_eq!(refs.len(), 2);
/// assert_eq!(refs[0].key, "name");
/// assert_eq!(refs[1].key, "age");
/// ```
#[must_use]
pub fn parse_tokens(input: &str) -> Vec<TokenReference> {
    let mut references = Vec::new();
    let mut pos = 0;

    while let Some(open_offset) = input[pos..].find(OPEN) {
        let open = pos + open_offset;
        let key_start = open + OPEN.len();

        // Non-greedy: the token closes at the first `}#` after the opener.
        let Some(close_offset) = input[key_start..].find(CLOSE) else {
            // No closer anywhere after this point, so no later opener can
            // close either.
            break;
        };
        let close = key_start + close_offset;
        let key = &input[key_start..close];

        if key.contains('\n') || key.contains('\r') {
            // Tokens do not span line breaks. Retry from just past the
            // opener, so an opener inside the rejected span still counts.
            pos = key_start;
            continue;
        }

        let end = close + CLOSE.len();
        references.push(TokenReference::new(key, open..end));
        pos = end;
    }

    references
}

/// Returns true if the input contains at least one well-formed token.
#[must_use]
pub fn has_tokens(input: &str) -> bool {
    !parse_tokens(input).is_empty()
}

/// Extracts just the token keys from the input, in order of appearance,
/// duplicates included.
#[must_use]
pub fn extract_token_keys(input: &str) -> Vec<String> {
    parse_tokens(input).into_iter().map(|r| r.key).collect()
}
