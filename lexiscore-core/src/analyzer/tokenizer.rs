//! Streaming tokenizer module.
//!
//! Tokenization is an external collaborator of the scoring pipeline: the
//! pipeline only requires something that splits normalized text into an
//! ordered sequence of token strings. The [`Tokenize`] trait is that seam;
//! [`WhitespaceTokenizer`] is the default implementation.
//!
//! ## The input contract
//!
//! Implementations receive **pre-normalized** input:
//! - No leading or trailing whitespace
//! - No consecutive spaces between words
//!
//! The default tokenizer checks this contract with debug assertions.

use core::str;
use memchr::memchr_iter;

/// Splits normalized text into an ordered sequence of tokens.
///
/// Tokens are emitted left to right via a callback, as slices of the
/// input where the implementation allows it - no intermediate collection.
pub trait Tokenize {
    /// Tokenizes `normalized` and emits each token in order.
    fn tokenize<'a, F>(&self, normalized: &'a str, emit: F)
    where
        F: FnMut(&'a str);
}

/// Zero-allocation ASCII-space tokenizer.
///
/// Performs a single forward scan for space bytes (0x20); each non-space
/// run between them is emitted as a token. Tokens are slices of the input
/// string, never copies.
///
/// # Example
///
/// ```
/// use lexiscore_core::analyzer::{Tokenize, WhitespaceTokenizer};
///
/// let mut tokens = Vec::new();
/// WhitespaceTokenizer.tokenize("hello <URL> world", |t| tokens.push(t));
/// assert_eq!(tokens, ["hello", "<URL>", "world"]);
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct WhitespaceTokenizer;

impl Tokenize for WhitespaceTokenizer {
    #[inline]
    fn tokenize<'a, F>(&self, normalized: &'a str, mut emit: F)
    where
        F: FnMut(&'a str),
    {
        let bytes = normalized.as_bytes();

        debug_assert!(
            bytes.first().is_none_or(|&b| b != b' '),
            "tokenizer: leading whitespace - normalizer contract violated"
        );

        debug_assert!(
            bytes.last().is_none_or(|&b| b != b' '),
            "tokenizer: trailing whitespace - normalizer contract violated"
        );

        if bytes.is_empty() {
            return;
        }

        let mut start = 0usize;
        for i in memchr_iter(b' ', bytes) {
            if start < i {
                // SAFETY: `normalized` is valid UTF-8. We split only on ASCII
                // space (0x20), which is never a continuation byte, so
                // `bytes[start..i]` is always a valid UTF-8 subslice.
                let text = unsafe { str::from_utf8_unchecked(&bytes[start..i]) };
                emit(text);
            }
            start = i + 1;
        }

        if start < bytes.len() {
            // SAFETY: same invariants as above - `start` was set to `i + 1`
            // after an ASCII space byte.
            let text = unsafe { str::from_utf8_unchecked(&bytes[start..]) };
            emit(text);
        }
    }
}
