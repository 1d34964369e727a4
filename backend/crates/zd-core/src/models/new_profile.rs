/// Fields required to create a profile; everything else starts at its zero value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProfile {
    pub idp_uid: String,
    pub email: String,
}

impl NewProfile {
    pub fn new(idp_uid: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            idp_uid: idp_uid.into(),
            email: email.into(),
        }
    }
}
