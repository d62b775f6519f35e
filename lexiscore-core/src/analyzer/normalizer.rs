//! Text normalization module.
//!
//! Rewrites raw documents into the canonical whitespace/placeholder form
//! the rest of the pipeline expects. Social-media artifacts (user handles,
//! URLs, newlines) are rewritten to stable placeholder tokens so they score
//! as single vocabulary items instead of unbounded surface forms.

use fancy_regex::Regex as FancyRegex;
use regex::Regex;

/// Placeholder token emitted for newlines.
pub const NEWLINE_TOKEN: &str = "<NEWLINE>";
/// Placeholder token emitted for user handles.
pub const USER_TOKEN: &str = "<USER>";
/// Placeholder token emitted for URLs.
pub const URL_TOKEN: &str = "<URL>";

/// User-handle grammar: an `@` not preceded by a word/sigil character,
/// followed by either exactly 20 handle characters not followed by another
/// `@`, or 1-19 handle characters whose run is not terminated by an `@`.
/// The trailing-`@` exclusions keep email-like and chained-mention text
/// from matching. Requires lookaround, hence `fancy-regex`.
const HANDLE_PATTERN: &str = r"(?<![A-Za-z0-9_!@#$%&*])@(([A-Za-z0-9_]){20}(?!@))|(?<![A-Za-z0-9_!@#$%&*])@(([A-Za-z0-9_]){1,19})(?![A-Za-z0-9_]*@)";

/// Canonicalizing text normalizer.
///
/// Applies an ordered pipeline of rewrites; each pass operates on the
/// previous pass's output, and the order matters:
///
/// 1. Runs of 2+ whitespace characters collapse to a single space.
/// 2. Runs of 5+ periods collapse to exactly four (`"...."`).
/// 3. Leading and trailing whitespace is stripped.
/// 4. A newline together with its surrounding whitespace becomes
///    `" <NEWLINE> "`.
/// 5. User-handle mentions become `<USER>`.
/// 6. Maximal non-whitespace runs beginning with `http` become `<URL>`.
///
/// Placeholder passes run after whitespace normalization so the emitted
/// tokens are surrounded by single spaces.
///
/// # Examples
///
/// ```
/// use lexiscore_core::analyzer::TextNormalizer;
///
/// let n = TextNormalizer::new();
/// assert_eq!(
///     n.normalize("check out http://example.com now @johndoe123"),
///     "check out <URL> now <USER>"
/// );
/// ```
#[derive(Debug)]
pub struct TextNormalizer {
    mult_space: Regex,
    mult_dots: Regex,
    newlines: Regex,
    handle: FancyRegex,
    url: Regex,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextNormalizer {
    /// Creates a normalizer with all patterns compiled.
    pub fn new() -> Self {
        Self {
            mult_space: Regex::new(r"\s\s+").expect("whitespace pattern"),
            mult_dots: Regex::new(r"\.\.\.\.\.+").expect("dot-run pattern"),
            newlines: Regex::new(r"\s*\n\s*").expect("newline pattern"),
            handle: FancyRegex::new(HANDLE_PATTERN).expect("handle pattern"),
            url: Regex::new(r"http\S+").expect("url pattern"),
        }
    }

    /// Normalizes a document. Pure and total: inputs with nothing to
    /// rewrite come back unchanged (modulo a fresh allocation).
    pub fn normalize(&self, input: &str) -> String {
        let text = self.mult_space.replace_all(input, " ");
        let text = self.mult_dots.replace_all(&text, "....");
        let text = text.trim();
        let text = self.newlines.replace_all(text, " <NEWLINE> ");
        let text = self.replace_handles(&text);
        self.url.replace_all(&text, URL_TOKEN).into_owned()
    }

    /// Handle replacement via explicit match iteration.
    ///
    /// `fancy-regex` matching is fallible (backtracking limits), so matches
    /// are consumed one at a time; on a match error the remainder of the
    /// text is passed through unmodified.
    fn replace_handles(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for m in self.handle.find_iter(text) {
            let Ok(m) = m else { break };
            out.push_str(&text[last..m.start()]);
            out.push_str(USER_TOKEN);
            last = m.end();
        }
        out.push_str(&text[last..]);
        out
    }
}
