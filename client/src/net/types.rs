//! Wire DTOs for the portal backend.
//!
//! DESIGN
//! ======
//! The backend speaks camelCase JSON and is loose about identifiers (`id` or
//! `_id`, string or number) and about envelopes (`[...]` vs `{"courses":
//! [...]}`). The deserializers here absorb that so the rest of the client sees
//! one shape per record.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::ApiError;
use crate::util::role::Role;

/// A record type served under a CRUD collection path.
pub trait Resource: DeserializeOwned + Serialize + Clone + PartialEq + Send + Sync + 'static {
    /// Collection path, e.g. `/courses`.
    const PATH: &'static str;
    /// Plural display label.
    const LABEL: &'static str;

    fn id(&self) -> &str;
}

/// The signed-in user (also the row type of `/users`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Empty when the backend omits it; never used for access decisions.
    #[serde(default, alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    /// Raw role tag as sent by the backend.
    #[serde(default, deserialize_with = "deserialize_role_tag")]
    pub role: Option<String>,
    /// Any further profile fields (phone, address, ...), kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    /// Parsed role, `None` when absent or unrecognized.
    #[must_use]
    pub fn role_kind(&self) -> Option<Role> {
        self.role.as_deref().and_then(Role::parse)
    }

    /// `"First Last"`, falling back to the email when both names are blank.
    #[must_use]
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let name = name.trim();
        if name.is_empty() { self.email.clone() } else { name.to_owned() }
    }

    /// Fill a missing or blank role with the lowest-privilege role.
    #[must_use]
    pub fn with_default_role(mut self) -> Self {
        if self.role.as_deref().is_none_or(|r| r.trim().is_empty()) {
            self.role = Some(Role::LOWEST_PRIVILEGE.as_str().to_owned());
        }
        self
    }
}

impl Resource for UserProfile {
    const PATH: &'static str = "/users";
    const LABEL: &'static str = "Users";

    fn id(&self) -> &str {
        &self.id
    }
}

/// A course offered by the school.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, alias = "name")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Instructor display name, if the backend includes it.
    #[serde(default)]
    pub instructor: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl Resource for Course {
    const PATH: &'static str = "/courses";
    const LABEL: &'static str = "Courses";

    fn id(&self) -> &str {
        &self.id
    }
}

/// A role definition managed by administrators.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleRecord {
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Resource for RoleRecord {
    const PATH: &'static str = "/roles";
    const LABEL: &'static str = "Roles";

    fn id(&self) -> &str {
        &self.id
    }
}

/// A payment or donation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// ISO-8601 timestamp as sent by the backend.
    #[serde(default, alias = "createdAt")]
    pub date: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

impl Resource for Transaction {
    const PATH: &'static str = "/transactions";
    const LABEL: &'static str = "Transactions";

    fn id(&self) -> &str {
        &self.id
    }
}

/// `POST /login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// `POST /register` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

/// `PUT /users/{id}` body used by the profile editor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
}

/// `POST /courses` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
}

/// `POST /roles` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewRole {
    pub name: String,
    pub description: String,
}

/// `POST /transactions` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewTransaction {
    pub amount: f64,
    pub description: String,
}

/// Decode a list body: a bare array, or an object wrapping one array.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when no array is found or rows do not match `R`.
pub fn decode_list<R: DeserializeOwned>(body: &str) -> Result<Vec<R>, ApiError> {
    let value: Value = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    let rows = match value {
        Value::Array(_) => value,
        Value::Object(map) => map
            .into_iter()
            .map(|(_, v)| v)
            .find(Value::is_array)
            .ok_or_else(|| ApiError::Decode("no array in list response".to_owned()))?,
        other => return Err(ApiError::Decode(format!("expected list, got {other}"))),
    };
    serde_json::from_value(rows).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode a single record: an object with exactly one key wrapping it
/// (`{"user": {...}}`), or the bare object.
///
/// The wrapper is tried first because records with flattened extras would
/// otherwise swallow it as an unknown field. A wrapper holding `null` is an
/// error rather than an empty record.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when neither form matches `R`.
pub fn decode_record<R: DeserializeOwned>(body: &str) -> Result<R, ApiError> {
    let value: Value = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if let Value::Object(map) = &value {
        if map.len() == 1 {
            match map.iter().next() {
                Some((_, inner @ Value::Object(_))) => {
                    return serde_json::from_value(inner.clone()).map_err(|e| ApiError::Decode(e.to_string()));
                }
                Some((key, Value::Null)) => return Err(ApiError::Decode(format!("`{key}` record is null"))),
                _ => {}
            }
        }
    }
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
    }
}

/// Accept `"Admin"` or `{"name": "Admin"}`. Anything else (`null`, a numeric
/// role id) reads as no role, so the lowest-privilege default applies.
fn deserialize_role_tag<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Object(map) => Ok(map.get("name").and_then(Value::as_str).map(str::to_owned)),
        _ => Ok(None),
    }
}
