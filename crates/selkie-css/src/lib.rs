//! Immutable CSS selector builder for the selkie workspace.
//!
//! # Scope
//!
//! This crate implements:
//! - **Compound selectors** ([§ 4.2](https://www.w3.org/TR/selectors-4/#compound))
//!   - Type, ID, class, attribute, pseudo-class and pseudo-element parts
//!   - Canonical part ordering, with element, ID and pseudo-element allowed once
//!
//! - **Complex selectors** ([§ 4.3](https://www.w3.org/TR/selectors-4/#complex))
//!   - Descendant, child, next-sibling and subsequent-sibling combinators
//!   - Arbitrary nesting of combined selectors
//!
//! # Not Implemented
//!
//! - Parsing selector text
//! - Validating identifiers and attribute expressions
//! - Specificity and matching against a document
//!
//! # Example
//!
//! ```
//! use selkie_css::{combine, element, stringify};
//!
//! let left = element("div").id("main")?;
//! let right = element("table").id("data")?;
//! assert_eq!(stringify(&combine(&left, "+", &right)?), "div#main + table#data");
//! # Ok::<(), selkie_css::SelectorError>(())
//! ```

/// CSS selector construction per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod selector;

// Re-exports for convenience
pub use selector::{Combinator, SelectorBuilder, SelectorError, SelectorPartKind};

/// Start a selector with a type selector, e.g. `div`.
#[must_use]
pub fn element(value: &str) -> SelectorBuilder {
    SelectorBuilder::with_part(SelectorPartKind::Element, value)
}

/// Start a selector with an ID selector, e.g. `#main`.
#[must_use]
pub fn id(value: &str) -> SelectorBuilder {
    SelectorBuilder::with_part(SelectorPartKind::Id, value)
}

/// Start a selector with a class selector, e.g. `.container`.
#[must_use]
pub fn class(value: &str) -> SelectorBuilder {
    SelectorBuilder::with_part(SelectorPartKind::Class, value)
}

/// Start a selector with an attribute selector, e.g. `[href]`.
#[must_use]
pub fn attr(value: &str) -> SelectorBuilder {
    SelectorBuilder::with_part(SelectorPartKind::Attribute, value)
}

/// Start a selector with a pseudo-class, e.g. `:hover`.
#[must_use]
pub fn pseudo_class(value: &str) -> SelectorBuilder {
    SelectorBuilder::with_part(SelectorPartKind::PseudoClass, value)
}

/// Start a selector with a pseudo-element, e.g. `::before`.
#[must_use]
pub fn pseudo_element(value: &str) -> SelectorBuilder {
    SelectorBuilder::with_part(SelectorPartKind::PseudoElement, value)
}

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// Join two selectors with a combinator token, producing
/// `"<left> <combinator> <right>"`.
///
/// # Errors
///
/// Returns [`SelectorError::InvalidCombinator`] unless `combinator` is exactly
/// one of `" "`, `"+"`, `"~"` or `">"`.
pub fn combine(
    left: &SelectorBuilder,
    combinator: &str,
    right: &SelectorBuilder,
) -> Result<SelectorBuilder, SelectorError> {
    let combinator = combinator.parse::<Combinator>()?;
    Ok(left.combine_with(combinator, right))
}

/// Render a selector to text.
#[must_use]
pub fn stringify(builder: &SelectorBuilder) -> String {
    builder.stringify()
}
