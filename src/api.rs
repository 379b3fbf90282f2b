//! Typed entities of the Mastodon REST API.
//!
//! Entities are only ever built by their mapper in [`mapper`](../mapper/index.html)
//! and expose read-only accessors.

pub mod v1;

pub use self::v1::{Account, Application, Attachment, AttachmentType, Mention, Notification,
                   NotificationType, Status, Tag, Visibility};

use chrono;

pub type DateTime = chrono::DateTime<chrono::Utc>;
pub type StatusId = i64;
pub type AccountId = i64;
pub type MentionId = i64;
pub type AttachmentId = i64;
pub type NotificationId = i64;
