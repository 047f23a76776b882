use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::errors::{Error, Result};

/// Opaque artist identifier, passed to the catalog verbatim
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtistId(String);

impl ArtistId {
    pub fn new(id: impl Into<String>) -> Self {
        ArtistId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ArtistId {
    fn from(id: &str) -> Self {
        ArtistId::new(id)
    }
}

impl From<String> for ArtistId {
    fn from(id: String) -> Self {
        ArtistId(id)
    }
}

/// One element of the catalog `results` list. The schema belongs to the remote
/// service, so fields are kept as raw JSON values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtistRecord(Map<String, Value>);

impl ArtistRecord {
    pub fn artist_name(&self) -> Option<&str> {
        self.0.get("artistName").and_then(Value::as_str)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for ArtistRecord {
    fn from(fields: Map<String, Value>) -> Self {
        ArtistRecord(fields)
    }
}

/// Outcome of a lookup that reached the catalog and got a well-formed answer
#[derive(Debug, Clone, PartialEq)]
pub enum ArtistLookup {
    Found(ArtistRecord),
    NotFound,
}

impl ArtistLookup {
    pub fn into_record(self) -> Option<ArtistRecord> {
        match self {
            ArtistLookup::Found(record) => Some(record),
            ArtistLookup::NotFound => None,
        }
    }
}

/// Decoded catalog document: `{ "results": [ ... ] }`
#[derive(Debug)]
pub struct CatalogResponse {
    results: Vec<Value>,
}

impl CatalogResponse {
    // Invalid UTF-8 is a decode error, never lossily replaced
    pub fn from_body(body: &[u8]) -> Result<Self> {
        let document: Value = serde_json::from_slice(body)?;
        Self::try_from(document)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    // Only the first result is consumed, the rest are dropped unchecked
    pub fn into_first(self) -> Result<ArtistLookup> {
        match self.results.into_iter().next() {
            None => Ok(ArtistLookup::NotFound),
            Some(Value::Object(fields)) => Ok(ArtistLookup::Found(ArtistRecord::from(fields))),
            Some(other) => Err(Error::MalformedResponse(format!(
                "first result is {} instead of an object",
                json_kind(&other)
            ))),
        }
    }
}

impl TryFrom<Value> for CatalogResponse {
    type Error = Error;

    fn try_from(document: Value) -> Result<Self> {
        let mut root = match document {
            Value::Object(root) => root,
            other => {
                return Err(Error::MalformedResponse(format!(
                    "document is {} instead of an object",
                    json_kind(&other)
                )));
            }
        };
        match root.remove("results") {
            Some(Value::Array(results)) => Ok(CatalogResponse { results }),
            Some(other) => Err(Error::MalformedResponse(format!(
                "`results` is {} instead of an array",
                json_kind(&other)
            ))),
            None => Err(Error::MalformedResponse("missing `results` key".into())),
        }
    }
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
