//! Search criteria accepted by the character PLOD finder.
//!
//! Criteria arrive as an arbitrary JSON object. Only properties that exist
//! on [`CharacterPlod`] may be used; anything else is rejected and the
//! offending property name is reported back to the caller.

use std::fmt;

use serde_json::{Map, Value};

use super::{CharacterPlod, CharacterPlodId};

/// Reasons a criteria object cannot be used for a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CriteriaError {
    /// The property does not exist on the record schema.
    UnknownProperty { property: String },
    /// The property exists but its value has the wrong shape.
    InvalidValue { property: String },
}

impl CriteriaError {
    /// Name of the property that made the criteria unusable.
    pub fn property(&self) -> &str {
        match self {
            Self::UnknownProperty { property } | Self::InvalidValue { property } => {
                property.as_str()
            }
        }
    }
}

impl fmt::Display for CriteriaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownProperty { property } => {
                write!(f, "unknown character PLOD property `{property}`")
            }
            Self::InvalidValue { property } => {
                write!(f, "invalid value for character PLOD property `{property}`")
            }
        }
    }
}

impl std::error::Error for CriteriaError {}

/// Exact-match filter over character PLOD records.
///
/// An empty criteria object matches every record.
///
/// # Examples
/// ```
/// use plod_backend::domain::SearchCriteria;
/// use serde_json::json;
///
/// let criteria = json!({"name": "Darth Vader"});
/// let parsed = SearchCriteria::from_json(criteria.as_object().expect("object"))
///     .expect("known property");
/// assert_eq!(parsed.name(), Some("Darth Vader"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    id: Option<CharacterPlodId>,
    name: Option<String>,
    plod: Option<i32>,
    description: Option<Option<String>>,
}

impl SearchCriteria {
    /// Parse a criteria object, rejecting unknown or mistyped properties.
    ///
    /// Properties are checked in key order so the reported property is
    /// deterministic for a given body.
    pub fn from_json(object: &Map<String, Value>) -> Result<Self, CriteriaError> {
        let mut criteria = Self::default();
        for (key, value) in object {
            match key.as_str() {
                "id" | "_id" => criteria.id = Some(parse_id(key, value)?),
                "name" => criteria.name = Some(parse_string(key, value)?),
                "plod" => criteria.plod = Some(parse_plod(key, value)?),
                "description" => criteria.description = Some(parse_description(key, value)?),
                _ => {
                    return Err(CriteriaError::UnknownProperty {
                        property: key.clone(),
                    });
                }
            }
        }
        Ok(criteria)
    }

    /// Identifier filter, if any.
    pub fn id(&self) -> Option<CharacterPlodId> {
        self.id
    }

    /// Name filter, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// PLOD filter, if any.
    pub fn plod(&self) -> Option<i32> {
        self.plod
    }

    /// Description filter. `Some(None)` matches records without one.
    pub fn description(&self) -> Option<Option<&str>> {
        self.description.as_ref().map(Option::as_deref)
    }

    /// Returns `true` when no property is constrained.
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.name.is_none() && self.plod.is_none() && self.description.is_none()
    }

    /// Returns `true` when the record satisfies every constrained property.
    pub fn matches(&self, record: &CharacterPlod) -> bool {
        self.id.is_none_or(|id| id == record.id())
            && self.name.as_deref().is_none_or(|name| name == record.name())
            && self.plod.is_none_or(|plod| plod == record.plod())
            && self
                .description()
                .is_none_or(|description| description == record.description())
    }
}

fn invalid(key: &str) -> CriteriaError {
    CriteriaError::InvalidValue {
        property: key.to_owned(),
    }
}

fn parse_id(key: &str, value: &Value) -> Result<CharacterPlodId, CriteriaError> {
    value
        .as_str()
        .and_then(|raw| CharacterPlodId::parse(raw).ok())
        .ok_or_else(|| invalid(key))
}

fn parse_string(key: &str, value: &Value) -> Result<String, CriteriaError> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| invalid(key))
}

fn parse_plod(key: &str, value: &Value) -> Result<i32, CriteriaError> {
    let number = match value {
        Value::Number(number) => number.as_i64(),
        Value::String(raw) => raw.trim().parse::<i64>().ok(),
        _ => None,
    };
    number
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| invalid(key))
}

fn parse_description(key: &str, value: &Value) -> Result<Option<String>, CriteriaError> {
    match value {
        Value::Null => Ok(None),
        Value::String(text) => Ok(Some(text.clone())),
        _ => Err(invalid(key)),
    }
}
