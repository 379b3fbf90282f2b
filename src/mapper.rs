//! Conversion of untyped JSON into the entities in [`api`](../api/index.html).
//!
//! Every entity has a stateless mapper implementing [`Mapper`](trait.Mapper.html).
//! Required fields are all-or-nothing: a single missing or mistyped one fails
//! the whole entity with `MappingError::IncompleteModel`. Optional
//! sub-entities and array elements are the opposite: a failure there is
//! logged and the value is dropped.

mod account;
mod application;
mod attachment;
mod fields;
mod mention;
mod notification;
mod status;
mod tag;

pub use self::account::AccountMapper;
pub use self::application::ApplicationMapper;
pub use self::attachment::AttachmentMapper;
pub use self::fields::{Fields, parse_date, parse_url};
pub use self::mention::MentionMapper;
pub use self::notification::NotificationMapper;
pub use self::status::StatusMapper;
pub use self::tag::TagMapper;

use error::MappingError;
use serde_json::{self, Map, Value};

pub type JsonObject = Map<String, Value>;
pub type MapResult<T> = ::std::result::Result<T, MappingError>;

pub trait Mapper {
    type Model;

    fn map_json(&self, json: &JsonObject) -> MapResult<Self::Model>;

    /// Decodes `data` and maps the resulting object. Bytes that do not hold a
    /// JSON object fail with `InvalidJson` before any field is inspected.
    fn map_data(&self, data: &[u8]) -> MapResult<Self::Model> {
        match serde_json::from_slice(data) {
            Ok(Value::Object(json)) => self.map_json(&json),
            Ok(_) | Err(_) => Err(MappingError::InvalidJson),
        }
    }

    /// Maps every element that is an object and maps successfully, dropping
    /// the rest. Never fails as a whole.
    fn map_array(&self, values: &[Value]) -> Vec<Self::Model> {
        values
            .iter()
            .enumerate()
            .filter_map(|(index, value)| match value.as_object().map(|json| self.map_json(json)) {
                Some(Ok(model)) => Some(model),
                Some(Err(e)) => {
                    debug!("dropping array element {}: {}", index, e);
                    None
                }
                None => {
                    debug!("dropping array element {}: not an object", index);
                    None
                }
            })
            .collect()
    }

    /// Maps an optional sub-object; absence, a non-object value or a mapping
    /// failure all yield `None`.
    fn map_optional(&self, value: Option<&Value>) -> Option<Self::Model> {
        let json = match value {
            Some(&Value::Object(ref json)) => json,
            _ => return None,
        };

        match self.map_json(json) {
            Ok(model) => Some(model),
            Err(e) => {
                debug!("discarding optional object: {}", e);
                None
            }
        }
    }
}

/// Turns an extracted field into a required one.
pub trait Required<T> {
    fn required(self) -> MapResult<T>;
}

impl<T> Required<T> for Option<T> {
    fn required(self) -> MapResult<T> {
        self.ok_or(MappingError::IncompleteModel)
    }
}
