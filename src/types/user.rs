use serde::{Deserialize, Serialize};

/// Stored username/password pair, compared verbatim at login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

/// One entry of `users.json`.
///
/// Accepts either the full profile shape, where the credential sits under
/// `login`, or a flat `{ "username", "password" }` record. Other profile
/// fields are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum UserRecord {
    Profile { login: Credential },
    Flat(Credential),
}

impl From<UserRecord> for Credential {
    fn from(record: UserRecord) -> Self {
        match record {
            UserRecord::Profile { login } => login,
            UserRecord::Flat(cred) => cred,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_record_yields_login_credential() {
        let record: UserRecord = serde_json::from_str(
            r#"{
                "gender": "female",
                "name": { "first": "susanna", "last": "richards" },
                "email": "susanna.richards@example.com",
                "login": { "username": "yellowleopard753", "password": "jonjon", "sha1": "abc" }
            }"#,
        )
        .unwrap();

        let cred = Credential::from(record);
        assert_eq!(cred.username, "yellowleopard753");
        assert_eq!(cred.password, "jonjon");
    }

    #[test]
    fn flat_record_is_accepted() {
        let record: UserRecord =
            serde_json::from_str(r#"{ "username": "fake", "password": "password" }"#).unwrap();
        assert_eq!(
            Credential::from(record),
            Credential {
                username: "fake".into(),
                password: "password".into()
            }
        );
    }
}
