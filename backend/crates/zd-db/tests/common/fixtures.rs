#![allow(dead_code)]

use zd_core::NewProfile;

/// Creates a NewProfile with a uid-derived email
pub fn create_test_new_profile(idp_uid: &str) -> NewProfile {
    NewProfile::new(idp_uid, format!("{}@example.com", idp_uid))
}
