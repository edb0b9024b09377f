//! CSS selector construction
//!
//! This module builds compound and complex selector text from typed parts,
//! enforcing the order in which simple selectors may appear within a compound
//! selector per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).

mod builder;
mod error;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

pub use builder::SelectorBuilder;
pub use error::SelectorError;

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// The kinds of simple selector (and pseudo-element) that can make up a
/// compound selector, declared in canonical order. The derived `Ord` is the
/// canonical rank: a compound selector lists its parts in non-decreasing order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum SelectorPartKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Example: `div`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Example: `#main`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Example: `.container`
    Class,

    /// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Example: `[href$=".png"]`
    Attribute,

    /// [§ 3.5 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Example: `:focus`
    PseudoClass,

    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Example: `::before`
    PseudoElement,
}

impl SelectorPartKind {
    /// Text written before the part's value.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Element => "",
            Self::Id => "#",
            Self::Class => ".",
            Self::Attribute => "[",
            Self::PseudoClass => ":",
            Self::PseudoElement => "::",
        }
    }

    /// Text written after the part's value.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Attribute => "]",
            _ => "",
        }
    }

    /// Whether the part may occur at most once in a compound selector.
    #[must_use]
    pub const fn is_unique(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }
}

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    ///
    /// Token: `' '`
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    ///
    /// Token: `'>'`
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    ///
    /// Token: `'+'`
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    ///
    /// Token: `'~'`
    SubsequentSibling,
}

impl Combinator {
    /// The single-character token for this combinator.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Combinator {
    type Err = SelectorError;

    /// Only the exact tokens are accepted; surrounding whitespace is not trimmed,
    /// since `" "` is itself the descendant token.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            " " => Ok(Self::Descendant),
            ">" => Ok(Self::Child),
            "+" => Ok(Self::NextSibling),
            "~" => Ok(Self::SubsequentSibling),
            other => Err(SelectorError::InvalidCombinator(other.to_string())),
        }
    }
}
