use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::contract::model::{NewUser, User, UserPatch};
use crate::domain::error::DomainError;

/// REST DTO for user representation with serde/utoipa
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(title = "Usuario")]
pub struct UserDto {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "fechaN")]
    pub birth_date: NaiveDate,
    #[serde(rename = "genero")]
    pub gender: String,
    #[serde(rename = "rfc")]
    pub tax_id: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// REST DTO for creating a new user.
///
/// Every field is optional at the wire level so a missing one is reported as a
/// field validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[schema(title = "CrearUsuario")]
pub struct CreateUserReq {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, rename = "telefono")]
    pub phone: Option<String>,
    #[serde(
        default,
        rename = "fechaN",
        deserialize_with = "birth_date::deserialize_opt"
    )]
    #[schema(value_type = Option<String>, format = Date, example = "1990-05-10")]
    pub birth_date: Option<NaiveDate>,
    #[serde(default, rename = "genero")]
    pub gender: Option<String>,
    #[serde(default, rename = "rfc")]
    pub tax_id: Option<String>,
}

/// REST DTO for updating a user (partial).
///
/// The outer `Option` is whether the field was sent at all; an explicit `null`
/// arrives as `Some(None)` and is rejected when converting to a [`UserPatch`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[schema(title = "ActualizarUsuario")]
pub struct UpdateUserReq {
    #[serde(default, deserialize_with = "sent")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "sent")]
    #[schema(value_type = Option<String>)]
    pub email: Option<Option<String>>,
    #[serde(default, rename = "telefono", deserialize_with = "sent")]
    #[schema(value_type = Option<String>)]
    pub phone: Option<Option<String>>,
    #[serde(
        default,
        rename = "fechaN",
        deserialize_with = "birth_date::deserialize_sent"
    )]
    #[schema(value_type = Option<String>, format = Date, example = "1990-05-10")]
    pub birth_date: Option<Option<NaiveDate>>,
    #[serde(default, rename = "genero", deserialize_with = "sent")]
    #[schema(value_type = Option<String>)]
    pub gender: Option<Option<String>>,
    #[serde(default, rename = "rfc", deserialize_with = "sent")]
    #[schema(value_type = Option<String>)]
    pub tax_id: Option<Option<String>>,
}

/// Only runs for keys present in the body, so `null` becomes `Some(None)`.
fn sent<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Plain confirmation body, e.g. after a delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// Conversion implementations between REST DTOs and contract models

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            birth_date: user.birth_date,
            gender: user.gender,
            tax_id: user.tax_id,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl TryFrom<CreateUserReq> for NewUser {
    type Error = DomainError;

    fn try_from(req: CreateUserReq) -> Result<Self, Self::Error> {
        Ok(Self {
            name: req.name.ok_or_else(|| DomainError::required("name"))?,
            email: req.email.ok_or_else(|| DomainError::required("email"))?,
            phone: req.phone.ok_or_else(|| DomainError::required("telefono"))?,
            birth_date: req
                .birth_date
                .ok_or_else(|| DomainError::required("fechaN"))?,
            gender: req.gender.ok_or_else(|| DomainError::required("genero"))?,
            tax_id: req.tax_id.ok_or_else(|| DomainError::required("rfc"))?,
        })
    }
}

impl TryFrom<UpdateUserReq> for UserPatch {
    type Error = DomainError;

    fn try_from(req: UpdateUserReq) -> Result<Self, Self::Error> {
        Ok(Self {
            name: not_null(req.name, "name")?,
            email: not_null(req.email, "email")?,
            phone: not_null(req.phone, "telefono")?,
            birth_date: not_null(req.birth_date, "fechaN")?,
            gender: not_null(req.gender, "genero")?,
            tax_id: not_null(req.tax_id, "rfc")?,
        })
    }
}

/// A field sent as `null` would clear a required value.
fn not_null<T>(value: Option<Option<T>>, field: &str) -> Result<Option<T>, DomainError> {
    match value {
        Some(None) => Err(DomainError::required(field)),
        other => Ok(other.flatten()),
    }
}

/// Birth dates arrive either as a calendar date (`1990-05-10`, what an HTML date
/// input submits) or as an RFC 3339 timestamp of that day's UTC midnight
/// (`1990-05-10T00:00:00.000Z`). A timestamp with any other time of day is
/// rejected since the stored value is a plain date.
pub mod birth_date {
    use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
    use serde::{Deserialize, Deserializer};

    pub fn parse(raw: &str) -> Result<NaiveDate, String> {
        let raw = raw.trim();
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Ok(date);
        }
        let instant = DateTime::parse_from_rfc3339(raw)
            .map_err(|_| {
                format!("invalid date '{raw}', expected YYYY-MM-DD or an RFC 3339 timestamp")
            })?
            .with_timezone(&Utc);
        if instant.time() != NaiveTime::MIN {
            return Err(format!(
                "invalid date '{raw}', a timestamp must be midnight UTC"
            ));
        }
        Ok(instant.date_naive())
    }

    pub fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| parse(&raw).map_err(serde::de::Error::custom))
            .transpose()
    }

    pub fn deserialize_sent<'de, D>(deserializer: D) -> Result<Option<Option<NaiveDate>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_opt(deserializer).map(Some)
    }
}
