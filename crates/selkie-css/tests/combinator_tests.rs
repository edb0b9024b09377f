//! Integration tests for joining selectors with combinators.

use selkie_common::warning::was_warned;
use selkie_css::{
    Combinator, SelectorBuilder, SelectorError, SelectorPartKind, class, combine, element,
    stringify,
};
use strum::IntoEnumIterator;

#[test]
fn test_combine_next_sibling() {
    let left = element("div").id("main").unwrap();
    let right = element("table").id("data").unwrap();
    let combined = combine(&left, "+", &right).unwrap();
    assert_eq!(stringify(&combined), "div#main + table#data");
}

#[test]
fn test_combine_each_token() {
    let a = element("a");
    let b = element("b");
    for combinator in Combinator::iter() {
        let token = combinator.token();
        let combined = combine(&a, token, &b).unwrap();
        assert_eq!(combined.stringify(), format!("a {token} b"));
    }
}

#[test]
fn test_descendant_keeps_single_space_token_padding() {
    let combined = combine(&element("nav"), " ", &element("a")).unwrap();
    assert_eq!(combined.stringify(), "nav   a");
}

#[test]
fn test_nested_combine_renders_inner_first() {
    let a = element("div").id("main").unwrap();
    let b = element("a").class("link").unwrap();
    let c = element("span").pseudo_element("before").unwrap();

    let inner = combine(&b, "~", &c).unwrap();
    let outer = combine(&a, "+", &inner).unwrap();
    assert_eq!(stringify(&outer), "div#main + a.link ~ span::before");

    let left_nested = combine(&combine(&a, ">", &b).unwrap(), " ", &c).unwrap();
    assert_eq!(stringify(&left_nested), "div#main > a.link   span::before");
}

#[test]
fn test_combine_leaves_operands_unchanged() {
    let left = element("ul");
    let right = element("li");
    let _combined = combine(&left, ">", &right).unwrap();
    assert_eq!(left.stringify(), "ul");
    assert_eq!(right.stringify(), "li");
}

#[test]
fn test_combine_rejects_invalid_combinator() {
    let a = element("a");
    let b = element("b");
    for token in ["", "|", ">>", " + ", "x"] {
        assert_eq!(
            combine(&a, token, &b),
            Err(SelectorError::InvalidCombinator(token.to_string())),
            "token {token:?}"
        );
    }
}

#[test]
fn test_combine_accepts_empty_operands() {
    let empty = SelectorBuilder::new();
    let combined = combine(&empty, ">", &class("child")).unwrap();
    assert_eq!(combined.stringify(), " > .child");
    assert!(was_warned("CSS", "combining an empty selector with '>'"));
}

#[test]
fn test_combined_selector_extends_right_compound() {
    let combined = combine(&class("menu"), ">", &element("li")).unwrap();
    assert_eq!(combined.last_kind(), Some(SelectorPartKind::Element));

    let extended = combined.pseudo_class("hover").unwrap();
    assert_eq!(extended.stringify(), ".menu > li:hover");

    // The left compound's ordering state does not carry over.
    let generated = element("p").pseudo_element("after").unwrap();
    let after_pseudo = combine(&generated, "~", &SelectorBuilder::new()).unwrap();
    assert_eq!(after_pseudo.last_kind(), None);
    assert_eq!(after_pseudo.element("em").unwrap().stringify(), "p::after ~ em");
}

#[test]
fn test_combine_with_matches_string_form() {
    let left = element("h1");
    let right = element("p");
    assert_eq!(
        left.combine_with(Combinator::SubsequentSibling, &right),
        combine(&left, "~", &right).unwrap()
    );
}
