use super::blank_profile;
use crate::{FONT_SIZE_SETTING, FontSize, ProfileUpdate, Settings};

use googletest::prelude::*;
use serde_json::json;

fn settings(value: serde_json::Value) -> Settings {
    value.as_object().cloned().unwrap()
}

#[test]
fn given_absent_fields_when_applied_then_profile_is_untouched() {
    let mut profile = blank_profile();
    profile.name = "Hanako".to_string();
    let before = profile.clone();

    ProfileUpdate::default().apply_local_changes(&mut profile);

    assert_that!(profile, eq(&before));
}

#[test]
fn given_scalar_fields_when_applied_then_they_overwrite() {
    let mut profile = blank_profile();
    let update = ProfileUpdate {
        name: Some("Taro".to_string()),
        name_kana: Some("タロウ".to_string()),
        sex: Some("male".to_string()),
        ..Default::default()
    };

    update.apply_local_changes(&mut profile);

    assert_that!(profile.name, eq("Taro"));
    assert_that!(profile.name_kana, eq("タロウ"));
    assert_that!(profile.sex, eq("male"));
}

#[test]
fn given_two_settings_updates_when_applied_in_turn_then_keys_are_merged() {
    let mut profile = blank_profile();

    ProfileUpdate {
        settings: Some(settings(json!({"a": 1}))),
        ..Default::default()
    }
    .apply_local_changes(&mut profile);
    ProfileUpdate {
        settings: Some(settings(json!({"b": 2}))),
        ..Default::default()
    }
    .apply_local_changes(&mut profile);

    assert_that!(profile.settings, eq(&settings(json!({"a": 1, "b": 2}))));
}

#[test]
fn given_unset_age_when_first_age_entered_then_font_size_defaults_from_age() {
    let mut profile = blank_profile();

    ProfileUpdate {
        age: Some(10),
        ..Default::default()
    }
    .apply_local_changes(&mut profile);

    assert_that!(profile.age, eq(10));
    assert_that!(profile.font_size(), some(eq(FontSize::Large)));
}

#[test]
fn given_age_already_set_when_age_changes_then_font_size_is_sticky() {
    let mut profile = blank_profile();
    profile.age = 10;
    profile.set_font_size(FontSize::Small);

    ProfileUpdate {
        age: Some(70),
        ..Default::default()
    }
    .apply_local_changes(&mut profile);

    assert_that!(profile.age, eq(70));
    assert_that!(profile.font_size(), some(eq(FontSize::Small)));
}

#[test]
fn given_first_age_and_explicit_font_size_when_applied_then_explicit_choice_wins() {
    let mut profile = blank_profile();

    ProfileUpdate {
        age: Some(30),
        settings: Some(settings(json!({"font_size": "large"}))),
        ..Default::default()
    }
    .apply_local_changes(&mut profile);

    assert_that!(profile.font_size(), some(eq(FontSize::Large)));
}

#[test]
fn given_zero_age_when_applied_to_unset_profile_then_no_font_default() {
    let mut profile = blank_profile();

    ProfileUpdate {
        age: Some(0),
        ..Default::default()
    }
    .apply_local_changes(&mut profile);

    assert_that!(profile.settings.contains_key(FONT_SIZE_SETTING), eq(false));
}

#[test]
fn given_email_in_update_when_applied_locally_then_email_is_not_touched() {
    let mut profile = blank_profile();
    let update = ProfileUpdate {
        email: Some("new@x.com".to_string()),
        ..Default::default()
    };

    update.apply_local_changes(&mut profile);

    assert_that!(profile.email, eq("a@x.com"));
    assert_that!(update.email_change(&profile), some(eq("new@x.com")));
}

#[test]
fn given_same_email_when_checking_change_then_none() {
    let profile = blank_profile();
    let update = ProfileUpdate {
        email: Some("a@x.com".to_string()),
        ..Default::default()
    };

    assert_that!(update.email_change(&profile), none());
}

#[test]
fn given_camel_case_json_when_deserialized_then_fields_map() {
    let update: ProfileUpdate =
        serde_json::from_str(r#"{"nameKana": "ハナコ", "age": 70, "email": null}"#).unwrap();

    assert_that!(update.name_kana, some(eq("ハナコ")));
    assert_that!(update.age, some(eq(70)));
    assert_that!(update.email, none());
    assert_that!(update.name, none());
}

#[test]
fn given_negative_age_when_deserialized_then_rejected() {
    let result = serde_json::from_str::<ProfileUpdate>(r#"{"age": -1}"#);
    assert!(result.is_err());
}
