use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::models::{Card, NewCard};

/// Data transfer object for creating a new card
///
/// Every field is optional on the wire: a missing key or an explicit `null`
/// becomes an empty string. Unknown keys are ignored.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CreateCardDto {
    #[serde(deserialize_with = "null_as_empty")]
    pub subject: String,

    #[serde(deserialize_with = "null_as_empty")]
    pub task_name: String,

    #[serde(deserialize_with = "null_as_empty")]
    pub color: String,

    #[serde(deserialize_with = "null_as_empty")]
    pub deadline: String,

    #[serde(deserialize_with = "null_as_empty")]
    pub task_info_link: String,

    #[serde(deserialize_with = "null_as_empty")]
    pub task_submission_link: String,

    #[serde(deserialize_with = "null_as_empty")]
    pub task_enrollment_link: String,
}

impl CreateCardDto {
    /// Decodes a request body
    ///
    /// Only a JSON object (or a bare `null`, read as an empty request) is
    /// accepted. Keys match field names case-insensitively; an exact match
    /// wins over a folded one, and a repeated key keeps its last value.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        match serde_json::from_slice::<Value>(body)? {
            Value::Null => Ok(Self::default()),
            Value::Object(map) => Self::deserialize(Value::Object(fold_keys(map))),
            other => Err(serde_json::Error::custom(format!(
                "expected a JSON object, found {}",
                json_kind(&other)
            ))),
        }
    }
}

fn fold_keys(map: Map<String, Value>) -> Map<String, Value> {
    let mut folded = Map::with_capacity(map.len());
    let mut exact = Vec::new();
    for (key, value) in map {
        let lower = key.to_lowercase();
        if lower == key {
            exact.push((key, value));
        } else {
            folded.entry(lower).or_insert(value);
        }
    }
    for (key, value) in exact {
        folded.insert(key, value);
    }
    folded
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<CreateCardDto> for NewCard {
    fn from(dto: CreateCardDto) -> Self {
        NewCard {
            subject: dto.subject,
            task_name: dto.task_name,
            color: dto.color,
            deadline: dto.deadline,
            task_info_link: dto.task_info_link,
            task_submission_link: dto.task_submission_link,
            task_enrollment_link: dto.task_enrollment_link,
        }
    }
}

/// Response envelope for endpoints that return a single card
///
/// Failures are reported as `{"card": null}`.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct CardResponse {
    pub card: Option<Card>,
}

impl CardResponse {
    pub fn empty() -> Self {
        Self { card: None }
    }
}

impl From<Card> for CardResponse {
    fn from(card: Card) -> Self {
        Self { card: Some(card) }
    }
}
