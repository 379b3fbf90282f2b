use std::error::Error as StdError;
use std::fmt;

/// Failure of a single mapping call.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MappingError {
    /// The input bytes are not a JSON object.
    InvalidJson,
    /// A required field is missing, mistyped or unparseable.
    IncompleteModel,
}

impl fmt::Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            MappingError::InvalidJson => f.write_str("input is not a JSON object"),
            MappingError::IncompleteModel => f.write_str("JSON is missing a required field"),
        }
    }
}

impl StdError for MappingError {
    fn description(&self) -> &str {
        match *self {
            MappingError::InvalidJson => "invalid JSON",
            MappingError::IncompleteModel => "incomplete model",
        }
    }
}

error_chain!{
    foreign_links {
        Mapping(MappingError);
    }

    errors {
        Utf8 {
            description("invalid UTF-8 string")
        }
        JsonDecode(value: String) {
            description("invalid JSON")
            display("could not map JSON:\n{}", value)
        }
        UnknownEventType(value: String) {
            description("unknown event type")
            display("unknown event type returned from API: {}", value)
        }
        IllegalState(expected: &'static str, actual: String) {
            description("streaming API is in an unexpected state")
            display("expected `{}` from API, received `{}`", expected, actual)
        }
        InvalidNumber(value: String) {
            description("received invalid number from API")
            display("could not parse {} as an integer", value)
        }
    }
}
