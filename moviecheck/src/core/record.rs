//! Typed movie record normalized from one entry of the catalogue `results` array.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::core::error::StructuralError;

/// Three observable states of a record's `poster_path` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "lowercase")]
pub enum PosterPath {
    /// Key not present in the source object.
    Absent,
    /// Key present but `null` or an empty string.
    Null,
    /// Non-empty string.
    Present(String),
}

impl PosterPath {
    pub fn as_present(&self) -> Option<&str> {
        match self {
            PosterPath::Present(path) => Some(path),
            PosterPath::Absent | PosterPath::Null => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieRecord {
    pub id: i64,
    pub title: String,
    /// Empty means "unclassified", not "zero genres".
    pub genre_ids: Vec<i64>,
    pub poster_path: PosterPath,
}

impl MovieRecord {
    /// Normalize a raw JSON value.
    ///
    /// `id` and `title` are required. A missing `genre_ids` key is read as
    /// the unclassified sentinel.
    pub fn from_value(value: &Value) -> Result<Self, StructuralError> {
        let object = value.as_object().ok_or(StructuralError::NotAnObject)?;

        let id = match object.get("id") {
            None => return Err(StructuralError::MissingField("id")),
            Some(raw) => raw.as_i64().ok_or_else(|| StructuralError::InvalidField {
                field: "id",
                reason: format!("expected integer, got {raw}"),
            })?,
        };

        let title = match object.get("title") {
            None => return Err(StructuralError::MissingField("title")),
            Some(Value::String(title)) => title.clone(),
            Some(raw) => {
                return Err(StructuralError::InvalidField {
                    field: "title",
                    reason: format!("expected string, got {raw}"),
                });
            }
        };
        if title.is_empty() {
            return Err(StructuralError::EmptyTitle);
        }

        Ok(Self {
            id,
            title,
            genre_ids: parse_genre_ids(object)?,
            poster_path: parse_poster_path(object)?,
        })
    }

    /// Sum of `genre_ids`; zero for the unclassified sentinel.
    ///
    /// Accumulates in `i128` so no combination of `i64` ids can overflow.
    pub fn genre_score(&self) -> i128 {
        self.genre_ids.iter().map(|&id| i128::from(id)).sum()
    }

    pub fn is_unclassified(&self) -> bool {
        self.genre_ids.is_empty()
    }
}

fn parse_genre_ids(object: &Map<String, Value>) -> Result<Vec<i64>, StructuralError> {
    let Some(raw) = object.get("genre_ids") else {
        return Ok(Vec::new());
    };
    let items = raw.as_array().ok_or_else(|| StructuralError::InvalidField {
        field: "genre_ids",
        reason: format!("expected array, got {raw}"),
    })?;
    items
        .iter()
        .map(|item| {
            item.as_i64().ok_or_else(|| StructuralError::InvalidField {
                field: "genre_ids",
                reason: format!("expected integer element, got {item}"),
            })
        })
        .collect()
}

fn parse_poster_path(object: &Map<String, Value>) -> Result<PosterPath, StructuralError> {
    match object.get("poster_path") {
        None => Ok(PosterPath::Absent),
        Some(Value::Null) => Ok(PosterPath::Null),
        Some(Value::String(path)) if path.is_empty() => Ok(PosterPath::Null),
        Some(Value::String(path)) => Ok(PosterPath::Present(path.clone())),
        Some(raw) => Err(StructuralError::InvalidField {
            field: "poster_path",
            reason: format!("expected string or null, got {raw}"),
        }),
    }
}

/// Compact reference to a record used in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordRef {
    pub id: i64,
    pub title: String,
}

impl From<&MovieRecord> for RecordRef {
    fn from(record: &MovieRecord) -> Self {
        Self {
            id: record.id,
            title: record.title.clone(),
        }
    }
}
