//! User record types as they travel over the wire.
//!
//! The remote store speaks camelCase JSON and names the identifier `_id`, so
//! the serde attributes here are part of the external contract, not styling.
//! [`User`] is what the server returns; [`UserDraft`] is what the client
//! sends — the same six fields with no identifier, because identifiers are
//! minted server-side only.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A stored user record, including its server-assigned identifier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
    #[serde(default)]
    pub gender: Gender,
}

/// The mutation payload for create and update requests.
///
/// Serializes to exactly `{firstName, lastName, email, password,
/// confirmPassword, gender}` — the body shape shared by `POST /users` and
/// `PUT /users/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub gender: Gender,
}

/// Gender selection. `Unspecified` is the empty select option; it serializes
/// as `""` and is also the fallback for wire values we don't recognize.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
    #[default]
    Unspecified,
}

impl Gender {
    /// The wire/form value: "male", "female", "other", or "" for unspecified.
    pub fn as_value(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
            Gender::Unspecified => "",
        }
    }

    /// Parse a form value. Anything unrecognized maps to `Unspecified`.
    pub fn from_value(value: &str) -> Self {
        match value {
            "male" => Gender::Male,
            "female" => Gender::Female,
            "other" => Gender::Other,
            _ => Gender::Unspecified,
        }
    }

    pub fn is_unspecified(self) -> bool {
        self == Gender::Unspecified
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_value())
    }
}

impl Serialize for Gender {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_value())
    }
}

impl<'de> Deserialize<'de> for Gender {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Gender::from_value(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_deserializes_from_wire_shape() {
        let json = r#"{
            "_id": "6421b1",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "password": "Abc123",
            "confirmPassword": "Abc123",
            "gender": "female"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "6421b1");
        assert_eq!(user.first_name, "Ada");
        assert_eq!(user.last_name, "Lovelace");
        assert_eq!(user.gender, Gender::Female);
    }

    #[test]
    fn user_tolerates_missing_credential_fields() {
        let json = r#"{"_id":"1","firstName":"A","lastName":"B","email":"a@b.c"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.password.is_empty());
        assert!(user.confirm_password.is_empty());
        assert_eq!(user.gender, Gender::Unspecified);
    }

    #[test]
    fn unknown_gender_falls_back_to_unspecified() {
        let json = r#"{"_id":"1","firstName":"A","lastName":"B","email":"a@b.c","gender":"none-of-these"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.gender, Gender::Unspecified);
    }

    #[test]
    fn draft_serializes_camel_case_without_id() {
        let draft = UserDraft {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            password: "Abc123".into(),
            confirm_password: "Abc123".into(),
            gender: Gender::Female,
        };

        let value = serde_json::to_value(&draft).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 6);
        assert_eq!(object["firstName"], "Ada");
        assert_eq!(object["confirmPassword"], "Abc123");
        assert_eq!(object["gender"], "female");
        assert!(!object.contains_key("_id"));
    }

    #[test]
    fn gender_value_round_trip() {
        for gender in [Gender::Male, Gender::Female, Gender::Other, Gender::Unspecified] {
            assert_eq!(Gender::from_value(gender.as_value()), gender);
        }
        assert_eq!(Gender::from_value("MALE"), Gender::Unspecified);
    }
}
