use crate::FontSize;

use std::str::FromStr;

use googletest::prelude::*;

#[test]
fn given_age_boundaries_when_for_age_then_children_and_seniors_get_large() {
    assert_that!(FontSize::for_age(1), eq(FontSize::Large));
    assert_that!(FontSize::for_age(12), eq(FontSize::Large));
    assert_that!(FontSize::for_age(13), eq(FontSize::Medium));
    assert_that!(FontSize::for_age(40), eq(FontSize::Medium));
    assert_that!(FontSize::for_age(64), eq(FontSize::Medium));
    assert_that!(FontSize::for_age(65), eq(FontSize::Large));
    assert_that!(FontSize::for_age(101), eq(FontSize::Large));
}

#[test]
fn test_font_size_as_str() {
    assert_eq!(FontSize::Small.as_str(), "small");
    assert_eq!(FontSize::Medium.as_str(), "medium");
    assert_eq!(FontSize::Large.as_str(), "large");
}

#[test]
fn test_font_size_from_str() {
    assert_eq!(FontSize::from_str("small").unwrap(), FontSize::Small);
    assert_eq!(FontSize::from_str("large").unwrap(), FontSize::Large);
    assert!(FontSize::from_str("huge").is_err());
    assert!(FontSize::from_str("Large").is_err());
}

#[test]
fn test_font_size_serializes_snake_case() {
    let json = serde_json::to_string(&FontSize::Medium).unwrap();
    assert_eq!(json, "\"medium\"");
}
