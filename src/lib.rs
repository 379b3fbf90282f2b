#![recursion_limit = "1024"]

//! Typed, validated models for Mastodon REST API payloads.
//!
//! ```
//! extern crate mastomap;
//!
//! use mastomap::mapper::{Mapper, TagMapper};
//! use mastomap::MappingError;
//!
//! # fn main() {
//! let tag = TagMapper
//!     .map_data(br#"{"name": "rust", "url": "https://mastodon.social/tags/rust"}"#)
//!     .unwrap();
//! assert_eq!(tag.name(), "rust");
//!
//! assert_eq!(TagMapper.map_data(b""), Err(MappingError::InvalidJson));
//! # }
//! ```

extern crate chrono;
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[cfg_attr(test, macro_use)]
extern crate serde_json;
extern crate url;

pub mod error;
pub mod api;
pub mod mapper;
pub mod timeline;

pub use error::MappingError;
