//! The CloudEvent delivered when an object is finalized in a bucket.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ExtractionError;

pub const BUCKET: &str = "bucket";
pub const NAME: &str = "name";
pub const METAGENERATION: &str = "metageneration";
pub const SIZE: &str = "size";
pub const CONTENT_TYPE: &str = "contentType";
pub const TIME_CREATED: &str = "timeCreated";
pub const UPDATED: &str = "updated";

/// Rendered in place of a payload value that is missing or null.
pub const ABSENT: &str = "None";

/// Structured-mode CloudEvent for a finalized storage object.
///
/// Every attribute is kept as raw JSON so a malformed event, whether an
/// attribute is missing or has the wrong type, still reaches the handler
/// and is reported there instead of being rejected by the runtime's
/// deserializer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StorageEvent {
    #[serde(default)]
    id: Option<Value>,
    #[serde(rename = "type", default)]
    event_type: Option<Value>,
    #[serde(default)]
    source: Option<Value>,
    #[serde(default)]
    specversion: Option<Value>,
    #[serde(default)]
    subject: Option<Value>,
    #[serde(default)]
    time: Option<Value>,
    #[serde(default)]
    data: Option<Value>,
}

fn identity<'a>(value: &'a Option<Value>, name: &'static str) -> Result<&'a str, ExtractionError> {
    match value {
        Some(Value::String(s)) => Ok(s.as_str()),
        None | Some(Value::Null) => Err(ExtractionError::MissingIdentity(name)),
        Some(_) => Err(ExtractionError::InvalidIdentity(name)),
    }
}

fn text(value: &Option<Value>) -> Option<&str> {
    value.as_ref().and_then(Value::as_str)
}

impl StorageEvent {
    pub fn new(id: impl Into<String>, event_type: impl Into<String>, data: Map<String, Value>) -> Self {
        StorageEvent {
            id: Some(Value::String(id.into())),
            event_type: Some(Value::String(event_type.into())),
            data: Some(Value::Object(data)),
            ..Default::default()
        }
    }

    pub fn id(&self) -> Result<&str, ExtractionError> {
        identity(&self.id, "id")
    }

    pub fn event_type(&self) -> Result<&str, ExtractionError> {
        identity(&self.event_type, "type")
    }

    // Context attributes below are informational; non-string values read as absent.

    pub fn source(&self) -> Option<&str> {
        text(&self.source)
    }

    pub fn specversion(&self) -> Option<&str> {
        text(&self.specversion)
    }

    pub fn subject(&self) -> Option<&str> {
        text(&self.subject)
    }

    pub fn time(&self) -> Option<&str> {
        text(&self.time)
    }

    /// The object metadata carried in `data`.
    pub fn payload(&self) -> Result<Payload<'_>, ExtractionError> {
        match &self.data {
            Some(Value::Object(fields)) => Ok(Payload { fields }),
            _ => Err(ExtractionError::MissingPayload),
        }
    }
}

/// Read-only view over the object attributes of a [`StorageEvent`].
#[derive(Debug, Clone, Copy)]
pub struct Payload<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> Payload<'a> {
    /// Looks up `key`; a missing key or an explicit null yields `None`.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields.get(key).filter(|v| !v.is_null())
    }

    /// Renders `key` for a log line, falling back to [`ABSENT`].
    pub fn render(&self, key: &str) -> String {
        match self.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Bool(true)) => "True".to_string(),
            Some(Value::Bool(false)) => "False".to_string(),
            Some(other) => other.to_string(),
            None => ABSENT.to_string(),
        }
    }
}
