//! Immutable selector builder.

use std::fmt;

use selkie_common::warning::warn_once;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use super::{Combinator, SelectorError, SelectorPartKind};

/// Set of part kinds already present in the current compound selector.
///
/// Serialized as the list of kind names, in canonical order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<SelectorPartKind>", from = "Vec<SelectorPartKind>")]
struct PartSet(u8);

impl PartSet {
    const fn bit(kind: SelectorPartKind) -> u8 {
        1 << kind as u8
    }

    const fn contains(self, kind: SelectorPartKind) -> bool {
        self.0 & Self::bit(kind) != 0
    }

    const fn with(self, kind: SelectorPartKind) -> Self {
        Self(self.0 | Self::bit(kind))
    }
}

impl From<PartSet> for Vec<SelectorPartKind> {
    fn from(set: PartSet) -> Self {
        SelectorPartKind::iter().filter(|&kind| set.contains(kind)).collect()
    }
}

impl From<Vec<SelectorPartKind>> for PartSet {
    fn from(kinds: Vec<SelectorPartKind>) -> Self {
        kinds.into_iter().fold(Self::default(), Self::with)
    }
}

/// Wire form of [`SelectorBuilder`]; `parts` may be omitted.
#[derive(Deserialize)]
struct SelectorSnapshot {
    text: String,
    last_kind: Option<SelectorPartKind>,
    #[serde(default)]
    parts: PartSet,
}

impl From<SelectorSnapshot> for SelectorBuilder {
    fn from(snapshot: SelectorSnapshot) -> Self {
        // The last part is always present in its own compound.
        let seen = snapshot
            .last_kind
            .map_or(snapshot.parts, |kind| snapshot.parts.with(kind));
        Self {
            text: snapshot.text,
            last_kind: snapshot.last_kind,
            seen,
        }
    }
}

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// A partially or fully built selector.
///
/// Every append borrows `self` and returns a new value, so a builder can be
/// reused as the prefix of several selectors:
///
/// ```
/// use selkie_css::element;
///
/// let link = element("a");
/// let png = link.attr(r#"href$=".png""#)?;
/// let focused = link.pseudo_class("focus")?;
/// assert_eq!(png.stringify(), r#"a[href$=".png"]"#);
/// assert_eq!(focused.stringify(), "a:focus");
/// # Ok::<(), selkie_css::SelectorError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "SelectorSnapshot")]
pub struct SelectorBuilder {
    text: String,
    last_kind: Option<SelectorPartKind>,
    #[serde(rename = "parts")]
    seen: PartSet,
}

impl SelectorBuilder {
    /// An empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            last_kind: None,
            seen: PartSet(0),
        }
    }

    /// Append a part of `kind` with the given `value`.
    ///
    /// The value is written verbatim between the kind's prefix and suffix; its
    /// content is not validated.
    ///
    /// # Errors
    ///
    /// - [`SelectorError::Repeat`] if `kind` may occur only once and is
    ///   the last appended part or already present in the current compound
    ///   selector.
    /// - [`SelectorError::Order`] if a part that must come after `kind` has
    ///   already been appended.
    pub fn append(&self, kind: SelectorPartKind, value: &str) -> Result<Self, SelectorError> {
        if kind.is_unique() && (self.last_kind == Some(kind) || self.seen.contains(kind)) {
            return Err(SelectorError::Repeat(kind));
        }
        if let Some(previous) = self.last_kind.filter(|&previous| previous > kind) {
            return Err(SelectorError::Order {
                attempted: kind,
                previous,
            });
        }

        Ok(self.extended(kind, value))
    }

    /// A builder holding a single part.
    ///
    /// Any kind may start a selector, so this cannot fail.
    #[must_use]
    pub fn with_part(kind: SelectorPartKind, value: &str) -> Self {
        Self::new().extended(kind, value)
    }

    /// Write the fragment for `kind` after the current text, without validation.
    fn extended(&self, kind: SelectorPartKind, value: &str) -> Self {
        if value.is_empty() {
            warn_once("CSS", &format!("empty {kind} value appended to selector"));
        }

        let prefix = kind.prefix();
        let suffix = kind.suffix();
        let mut text =
            String::with_capacity(self.text.len() + prefix.len() + value.len() + suffix.len());
        text.push_str(&self.text);
        text.push_str(prefix);
        text.push_str(value);
        text.push_str(suffix);

        Self {
            text,
            last_kind: Some(kind),
            seen: self.seen.with(kind),
        }
    }

    /// Append a type selector, e.g. `div`.
    ///
    /// # Errors
    ///
    /// See [`SelectorBuilder::append`].
    pub fn element(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(SelectorPartKind::Element, value)
    }

    /// Append an ID selector, rendered as `#value`.
    ///
    /// # Errors
    ///
    /// See [`SelectorBuilder::append`].
    pub fn id(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(SelectorPartKind::Id, value)
    }

    /// Append a class selector, rendered as `.value`.
    ///
    /// # Errors
    ///
    /// See [`SelectorBuilder::append`].
    pub fn class(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(SelectorPartKind::Class, value)
    }

    /// Append an attribute selector, rendered as `[value]`.
    ///
    /// # Errors
    ///
    /// See [`SelectorBuilder::append`].
    pub fn attr(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(SelectorPartKind::Attribute, value)
    }

    /// Append a pseudo-class, rendered as `:value`.
    ///
    /// # Errors
    ///
    /// See [`SelectorBuilder::append`].
    pub fn pseudo_class(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(SelectorPartKind::PseudoClass, value)
    }

    /// Append a pseudo-element, rendered as `::value`.
    ///
    /// # Errors
    ///
    /// See [`SelectorBuilder::append`].
    pub fn pseudo_element(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(SelectorPartKind::PseudoElement, value)
    }

    /// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
    ///
    /// Join `self` and `right` as `"<self> <combinator> <right>"`.
    ///
    /// No ordering checks are made across the combinator. The result continues
    /// the right operand's compound selector, so further appends extend the
    /// subject of the complex selector.
    #[must_use]
    pub fn combine_with(&self, combinator: Combinator, right: &Self) -> Self {
        if self.is_empty() || right.is_empty() {
            warn_once("CSS", &format!("combining an empty selector with '{combinator}'"));
        }

        Self {
            text: format!("{} {combinator} {}", self.text, right.text),
            last_kind: right.last_kind,
            seen: right.seen,
        }
    }

    /// Render the selector text. Calling this does not alter the builder.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.text.clone()
    }

    /// The selector text built so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The kind of the most recently appended part.
    #[must_use]
    pub const fn last_kind(&self) -> Option<SelectorPartKind> {
        self.last_kind
    }

    /// Whether nothing has been written yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
