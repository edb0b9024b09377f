//! Errors raised while building selectors.

use thiserror::Error;

use super::SelectorPartKind;

/// A rejected selector construction step.
///
/// Construction is fail-fast: the builder that produced the error is left
/// untouched, and callers restart from that (still valid) value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// A part was appended after a part that must come later.
    #[error(
        "selector parts must appear in the order element, id, class, attribute, pseudo-class, pseudo-element (got {attempted} after {previous})"
    )]
    Order {
        /// The kind the caller tried to append.
        attempted: SelectorPartKind,
        /// The kind most recently appended to the builder.
        previous: SelectorPartKind,
    },

    /// An element, id, or pseudo-element was appended a second time.
    #[error("this part may occur at most once: {0}")]
    Repeat(SelectorPartKind),

    /// A combinator token other than `' '`, `'+'`, `'~'` or `'>'`.
    #[error("invalid combinator {0:?}, expected one of ' ', '+', '~', '>'")]
    InvalidCombinator(String),
}
