//! Quote- and parenthesis-aware text scanning.
//!
//! Every component that transforms SQL text goes through this module to
//! avoid corrupting string literals. A single automaton ([`ScanState`])
//! drives three consumers:
//!
//! - [`MaskedText`] - replaces each literal with a `__STRING_<n>__`
//!   placeholder and restores the originals after formatting
//! - [`split_top_level`] - splits on a delimiter only outside literals and
//!   at parenthesis depth zero
//! - [`collapse_whitespace`] - collapses whitespace runs outside literals
//!
//! # Escaping
//!
//! A doubled quote of the enclosing kind (`''` or `""`) is an escaped quote
//! and keeps the literal open. Quote kinds never escape each other: a
//! single quote is plain content inside a double-quoted literal and vice
//! versa. An unterminated literal extends to end of input; its content is
//! still captured so masking never loses text.

use smallvec::SmallVec;

/// Literal store for a masked statement (typically a handful per statement)
pub type LiteralVec = SmallVec<[String; 4]>;

/// Segments produced by [`split_top_level`]
pub type SegmentVec = SmallVec<[String; 8]>;

/// Which kind of literal the scan position is inside, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Quote {
    #[default]
    Outside,
    InSingle,
    InDouble
}

/// Scan state threaded through one left-to-right pass.
///
/// The single enum makes the quote states mutually exclusive by
/// construction. `paren_depth` is tracked only outside literals and clamps
/// at zero on unmatched closing parens.
#[derive(Debug, Clone, Copy, Default)]
struct ScanState {
    quote:       Quote,
    paren_depth: usize
}

/// Result of consuming one scan step.
#[derive(Debug, Clone, Copy)]
struct Step {
    /// Characters covered: 2 for a doubled-quote escape, 1 otherwise
    len:        usize,
    /// Whether the covered characters are literal text (quotes included)
    in_literal: bool
}

impl ScanState {
    /// Advance over `current`, peeking `next` for doubled-quote escapes.
    fn step(&mut self, current: char, next: Option<char>) -> Step {
        match self.quote {
            Quote::Outside => match current {
                '\'' => {
                    self.quote = Quote::InSingle;
                    Step { len: 1, in_literal: true }
                }
                '"' => {
                    self.quote = Quote::InDouble;
                    Step { len: 1, in_literal: true }
                }
                '(' => {
                    self.paren_depth += 1;
                    Step { len: 1, in_literal: false }
                }
                ')' => {
                    self.paren_depth = self.paren_depth.saturating_sub(1);
                    Step { len: 1, in_literal: false }
                }
                _ => Step { len: 1, in_literal: false }
            },
            Quote::InSingle if current == '\'' => {
                if next == Some('\'') {
                    Step { len: 2, in_literal: true }
                } else {
                    self.quote = Quote::Outside;
                    Step { len: 1, in_literal: true }
                }
            }
            Quote::InDouble if current == '"' => {
                if next == Some('"') {
                    Step { len: 2, in_literal: true }
                } else {
                    self.quote = Quote::Outside;
                    Step { len: 1, in_literal: true }
                }
            }
            _ => Step { len: 1, in_literal: true }
        }
    }

    fn in_literal(&self) -> bool {
        self.quote != Quote::Outside
    }
}

/// A statement with its string literals masked out.
///
/// Masked text is safe for regex-based rewriting: no pattern can match
/// into literal content. [`restore`](Self::restore) substitutes the
/// originals back in placeholder index order.
#[derive(Debug, Clone)]
pub struct MaskedText {
    text:     String,
    literals: LiteralVec
}

impl MaskedText {
    /// Mask every literal in `sql`, quotes included.
    pub fn mask(sql: &str) -> Self {
        let chars: Vec<char> = sql.chars().collect();
        let mut state = ScanState::default();
        let mut text = String::with_capacity(sql.len());
        let mut literals = LiteralVec::new();
        let mut current = String::new();
        let mut i = 0;

        while i < chars.len() {
            let was_inside = state.in_literal();
            let step = state.step(chars[i], chars.get(i + 1).copied());
            if step.in_literal {
                current.extend(&chars[i..i + step.len]);
                if was_inside && !state.in_literal() {
                    text.push_str(&placeholder(literals.len()));
                    literals.push(std::mem::take(&mut current));
                }
            } else {
                text.push(chars[i]);
            }
            i += step.len;
        }

        // Unterminated literal runs to end of input
        if !current.is_empty() {
            text.push_str(&placeholder(literals.len()));
            literals.push(current);
        }

        Self { text, literals }
    }

    /// Masked text with literals replaced by placeholders.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Captured literal texts, in placeholder index order.
    pub fn literals(&self) -> &[String] {
        &self.literals
    }

    /// Replace each placeholder with its original literal.
    pub fn restore(&self, formatted: &str) -> String {
        let mut restored = formatted.to_string();
        for (index, literal) in self.literals.iter().enumerate() {
            restored = restored.replace(&placeholder(index), literal);
        }
        restored
    }
}

fn placeholder(index: usize) -> String {
    format!("__STRING_{}__", index)
}

/// Split `text` on `delimiter`, honoring literals and parenthesis nesting.
///
/// The delimiter only separates segments when the scan position is outside
/// both literal kinds and at parenthesis depth zero. Delimiters inside
/// literals or argument lists stay segment content.
pub fn split_top_level(text: &str, delimiter: char) -> SegmentVec {
    let chars: Vec<char> = text.chars().collect();
    let mut state = ScanState::default();
    let mut segments = SegmentVec::new();
    let mut current = String::new();
    let mut i = 0;

    while i < chars.len() {
        let step = state.step(chars[i], chars.get(i + 1).copied());
        if !step.in_literal && chars[i] == delimiter && state.paren_depth == 0 {
            segments.push(std::mem::take(&mut current));
        } else {
            current.extend(&chars[i..i + step.len]);
        }
        i += step.len;
    }
    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

/// Collapse whitespace runs outside literals to a single space and trim.
pub fn collapse_whitespace(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut state = ScanState::default();
    let mut collapsed = String::with_capacity(text.len());
    let mut last_was_space = false;
    let mut i = 0;

    while i < chars.len() {
        let step = state.step(chars[i], chars.get(i + 1).copied());
        if step.in_literal {
            collapsed.extend(&chars[i..i + step.len]);
            last_was_space = false;
        } else if chars[i].is_whitespace() {
            if !last_was_space {
                collapsed.push(' ');
                last_was_space = true;
            }
        } else {
            collapsed.push(chars[i]);
            last_was_space = false;
        }
        i += step.len;
    }

    collapsed.trim().to_string()
}
