use api::DateTime;
use chrono::{self, Utc};
use serde_json::Value;
use url::Url;

use super::JsonObject;

/// Parses an RFC 3339 timestamp such as `2017-04-17T12:01:45.203Z`.
pub fn parse_date(value: &str) -> Option<DateTime> {
    chrono::DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|date| date.with_timezone(&Utc))
}

/// Parses an absolute URL.
pub fn parse_url(value: &str) -> Option<Url> {
    Url::parse(value).ok()
}

/// Strictly typed field access over a JSON object. A field of the wrong JSON
/// type reads as absent, as does a string that fails secondary parsing.
#[derive(Clone, Copy, Debug)]
pub struct Fields<'a> {
    json: &'a JsonObject,
}

impl<'a> Fields<'a> {
    pub fn new(json: &'a JsonObject) -> Self {
        Fields { json }
    }

    pub fn value(&self, key: &str) -> Option<&'a Value> {
        self.json.get(key)
    }

    pub fn str(&self, key: &str) -> Option<&'a str> {
        self.value(key).and_then(Value::as_str)
    }

    pub fn string(&self, key: &str) -> Option<String> {
        self.str(key).map(str::to_string)
    }

    pub fn int(&self, key: &str) -> Option<i64> {
        self.value(key).and_then(Value::as_i64)
    }

    pub fn bool(&self, key: &str) -> Option<bool> {
        self.value(key).and_then(Value::as_bool)
    }

    pub fn date(&self, key: &str) -> Option<DateTime> {
        self.str(key).and_then(parse_date)
    }

    pub fn url(&self, key: &str) -> Option<Url> {
        self.str(key).and_then(parse_url)
    }

    pub fn object(&self, key: &str) -> Option<&'a JsonObject> {
        self.value(key).and_then(Value::as_object)
    }

    pub fn array(&self, key: &str) -> Option<&'a [Value]> {
        self.value(key).and_then(Value::as_array).map(Vec::as_slice)
    }
}
