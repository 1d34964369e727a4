use std::fmt;

/// Outcome of a best-effort side effect that failed without failing the operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncWarning {
    VerificationEmailFailed { reason: String },
    CompensationFailed { uid: String, reason: String },
}

impl fmt::Display for SyncWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VerificationEmailFailed { reason } => {
                write!(f, "verification email not sent: {}", reason)
            }
            Self::CompensationFailed { uid, reason } => {
                write!(f, "identity {} left without profile: {}", uid, reason)
            }
        }
    }
}
