use airone_core::AppError;
use serde::{Deserialize, Serialize};

/// Permission level granted on an ACL-protected object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum AclType {
    /// No access.
    Nothing,
    /// Read-only access.
    Readable,
    /// Read and write access.
    Writable,
    /// Full control including permission management.
    Full,
}

impl AclType {
    /// Returns the backend wire value.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Nothing => 1,
            Self::Readable => 2,
            Self::Writable => 4,
            Self::Full => 8,
        }
    }
}

impl TryFrom<u8> for AclType {
    type Error = AppError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Nothing),
            2 => Ok(Self::Readable),
            4 => Ok(Self::Writable),
            8 => Ok(Self::Full),
            _ => Err(AppError::Validation(format!(
                "unknown acl permission value '{value}'"
            ))),
        }
    }
}

impl From<AclType> for u8 {
    fn from(value: AclType) -> Self {
        value.code()
    }
}
