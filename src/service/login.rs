use crate::db::CatalogStore;
use crate::types::Credential;
use subtle::ConstantTimeEq;

/// Looks up stored credentials by username.
pub trait CredentialSource: Send + Sync {
    fn find_credential(&self, username: &str) -> Option<&Credential>;
}

impl CredentialSource for CatalogStore {
    fn find_credential(&self, username: &str) -> Option<&Credential> {
        CatalogStore::find_credential(self, username)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginVerdict {
    Accepted,
    /// Username or password absent or empty.
    MissingField,
    InvalidCredentials,
}

/// Field presence is checked before any lookup; either field missing gives
/// `MissingField` regardless of the other.
pub fn validate<S>(source: &S, username: Option<&str>, password: Option<&str>) -> LoginVerdict
where
    S: CredentialSource + ?Sized,
{
    let (Some(username), Some(password)) = (non_empty(username), non_empty(password)) else {
        return LoginVerdict::MissingField;
    };

    match source.find_credential(username) {
        Some(stored) if bool::from(stored.password.as_bytes().ct_eq(password.as_bytes())) => {
            LoginVerdict::Accepted
        }
        _ => LoginVerdict::InvalidCredentials,
    }
}

fn non_empty(field: Option<&str>) -> Option<&str> {
    field.filter(|f| !f.is_empty())
}
