use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque record identifier shared by colleges and PG listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub String);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollegeCategory {
    Engineering,
    Medical,
    Arts,
    Commerce,
    Law,
}

impl CollegeCategory {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Engineering,
            Self::Medical,
            Self::Arts,
            Self::Commerce,
            Self::Law,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Engineering => "Engineering",
            Self::Medical => "Medical",
            Self::Arts => "Arts",
            Self::Commerce => "Commerce",
            Self::Law => "Law",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupancy {
    Boys,
    Girls,
    #[serde(rename = "Co-ed")]
    CoEd,
}

impl Occupancy {
    pub const fn ordered() -> [Self; 3] {
        [Self::Boys, Self::Girls, Self::CoEd]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Boys => "Boys",
            Self::Girls => "Girls",
            Self::CoEd => "Co-ed",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Optional fields may be absent in source data; an active filter on an absent field rejects
/// the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct College {
    /// Blank on records submitted for insertion; the store assigns one.
    #[serde(default)]
    pub id: EntityId,
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default, rename = "type")]
    pub category: Option<CollegeCategory>,
    #[serde(default)]
    pub rating: Option<f32>,
    /// Annual fee in whole rupees.
    #[serde(default)]
    pub fees: Option<u64>,
    #[serde(default)]
    pub avg_package: Option<u64>,
    #[serde(default)]
    pub highest_package: Option<u64>,
    #[serde(default)]
    pub placement_percentage: Option<u8>,
    #[serde(default)]
    pub courses: Vec<String>,
    #[serde(default)]
    pub facilities: Vec<String>,
    #[serde(default)]
    pub recruiters: Vec<String>,
    #[serde(default)]
    pub campus_area: Option<String>,
    #[serde(default)]
    pub contact: ContactDetails,
}

impl College {
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_common(&self.id, &self.name)?;
        validate_rating(&self.id, self.rating)?;
        if let Some(pct) = self.placement_percentage {
            if pct > 100 {
                return Err(DomainError::PlacementOutOfRange {
                    id: self.id.clone(),
                    value: pct,
                });
            }
        }
        Ok(())
    }
}

/// Paying-guest accommodation listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pg {
    #[serde(default)]
    pub id: EntityId,
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub city: Option<String>,
    /// Monthly rent in whole rupees.
    #[serde(default)]
    pub rent: Option<u64>,
    #[serde(default, rename = "type")]
    pub occupancy: Option<Occupancy>,
    #[serde(default)]
    pub facilities: Vec<String>,
    #[serde(default)]
    pub nearby_colleges: Vec<String>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub contact: ContactDetails,
}

impl Pg {
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_common(&self.id, &self.name)?;
        validate_rating(&self.id, self.rating)
    }
}

fn validate_common(id: &EntityId, name: &str) -> Result<(), DomainError> {
    if id.0.trim().is_empty() {
        return Err(DomainError::MissingId);
    }
    if name.trim().is_empty() {
        return Err(DomainError::MissingName { id: id.clone() });
    }
    Ok(())
}

fn validate_rating(id: &EntityId, rating: Option<f32>) -> Result<(), DomainError> {
    match rating {
        Some(value) if !(0.0..=5.0).contains(&value) => Err(DomainError::RatingOutOfRange {
            id: id.clone(),
            value,
        }),
        _ => Ok(()),
    }
}

/// Role carried by the current session; only the embedding pages consult it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Anonymous,
    User,
    Admin,
}

impl Role {
    /// Signed-in accounts whose email mentions "admin" get the admin role.
    pub fn for_email(email: &str) -> Self {
        if email.contains("admin") {
            Self::Admin
        } else {
            Self::User
        }
    }

    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "admin" => Self::Admin,
            "user" => Self::User,
            _ => Self::Anonymous,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Anonymous => "anonymous",
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("record id must not be blank")]
    MissingId,
    #[error("record {id} must have a name")]
    MissingName { id: EntityId },
    #[error("record {id} has rating {value}, expected 0.0 to 5.0")]
    RatingOutOfRange { id: EntityId, value: f32 },
    #[error("college {id} has placement percentage {value}, expected 0 to 100")]
    PlacementOutOfRange { id: EntityId, value: u8 },
}
