use super::{AccountId, AttachmentId, DateTime, MentionId, NotificationId, StatusId};
use url::Url;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Unlisted,
    Private,
    Direct,
}

impl Visibility {
    pub fn from_api(value: &str) -> Option<Visibility> {
        match value {
            "public" => Some(Visibility::Public),
            "unlisted" => Some(Visibility::Unlisted),
            "private" => Some(Visibility::Private),
            "direct" => Some(Visibility::Direct),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentType {
    Image,
    Video,
    Gifv,
    Unknown,
}

impl AttachmentType {
    pub fn from_api(value: &str) -> Option<AttachmentType> {
        match value {
            "image" => Some(AttachmentType::Image),
            "video" => Some(AttachmentType::Video),
            "gifv" => Some(AttachmentType::Gifv),
            "unknown" => Some(AttachmentType::Unknown),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    Mention,
    Reblog,
    Favourite,
    Follow,
}

impl NotificationType {
    pub fn from_api(value: &str) -> Option<NotificationType> {
        match value {
            "mention" => Some(NotificationType::Mention),
            "reblog" => Some(NotificationType::Reblog),
            "favourite" => Some(NotificationType::Favourite),
            "follow" => Some(NotificationType::Follow),
            _ => None,
        }
    }
}

/// A post on a timeline. A reblog embeds the reblogged status by value.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Status {
    pub(crate) id: StatusId,
    pub(crate) created_at: DateTime,
    pub(crate) in_reply_to_id: Option<String>,
    pub(crate) in_reply_to_account_id: Option<String>,
    pub(crate) sensitive: bool,
    pub(crate) spoiler_text: Option<String>,
    pub(crate) visibility: Visibility,
    pub(crate) application: Option<Application>,
    pub(crate) account: Account,
    pub(crate) media_attachments: Vec<Attachment>,
    pub(crate) mentions: Vec<Mention>,
    pub(crate) tags: Vec<Tag>,
    pub(crate) uri: String,
    pub(crate) content: String,
    pub(crate) url: Url,
    pub(crate) reblogs_count: i64,
    pub(crate) favourites_count: i64,
    pub(crate) reblog: Option<Box<Status>>,
    pub(crate) favourited: bool,
    pub(crate) reblogged: bool,
    pub(crate) language: Option<String>,
}

impl Status {
    pub fn id(&self) -> StatusId {
        self.id
    }

    pub fn created_at(&self) -> &DateTime {
        &self.created_at
    }

    pub fn in_reply_to_id(&self) -> Option<&str> {
        self.in_reply_to_id.as_ref().map(String::as_str)
    }

    pub fn in_reply_to_account_id(&self) -> Option<&str> {
        self.in_reply_to_account_id.as_ref().map(String::as_str)
    }

    pub fn sensitive(&self) -> bool {
        self.sensitive
    }

    pub fn spoiler_text(&self) -> Option<&str> {
        self.spoiler_text.as_ref().map(String::as_str)
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn application(&self) -> Option<&Application> {
        self.application.as_ref()
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn media_attachments(&self) -> &[Attachment] {
        &self.media_attachments
    }

    pub fn mentions(&self) -> &[Mention] {
        &self.mentions
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// HTML body of the status.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn reblogs_count(&self) -> i64 {
        self.reblogs_count
    }

    pub fn favourites_count(&self) -> i64 {
        self.favourites_count
    }

    pub fn reblog(&self) -> Option<&Status> {
        self.reblog.as_ref().map(|reblog| &**reblog)
    }

    pub fn favourited(&self) -> bool {
        self.favourited
    }

    pub fn reblogged(&self) -> bool {
        self.reblogged
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_ref().map(String::as_str)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Account {
    pub(crate) id: AccountId,
    pub(crate) username: String,
    pub(crate) acct: String,
    pub(crate) display_name: String,
    pub(crate) locked: bool,
    pub(crate) created_at: DateTime,
    pub(crate) followers_count: i64,
    pub(crate) following_count: i64,
    pub(crate) statuses_count: i64,
    pub(crate) note: String,
    pub(crate) url: Url,
    pub(crate) avatar: Url,
    pub(crate) avatar_static: Option<Url>,
    pub(crate) header: Url,
    pub(crate) header_static: Option<Url>,
}

impl Account {
    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// `username` for local accounts, `username@domain` for remote ones.
    pub fn acct(&self) -> &str {
        &self.acct
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn locked(&self) -> bool {
        self.locked
    }

    pub fn created_at(&self) -> &DateTime {
        &self.created_at
    }

    pub fn followers_count(&self) -> i64 {
        self.followers_count
    }

    pub fn following_count(&self) -> i64 {
        self.following_count
    }

    pub fn statuses_count(&self) -> i64 {
        self.statuses_count
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn avatar(&self) -> &Url {
        &self.avatar
    }

    pub fn avatar_static(&self) -> Option<&Url> {
        self.avatar_static.as_ref()
    }

    pub fn header(&self) -> &Url {
        &self.header
    }

    pub fn header_static(&self) -> Option<&Url> {
        self.header_static.as_ref()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Mention {
    pub(crate) id: MentionId,
    pub(crate) url: Url,
    pub(crate) username: String,
    pub(crate) acct: String,
}

impl Mention {
    pub fn id(&self) -> MentionId {
        self.id
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn acct(&self) -> &str {
        &self.acct
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tag {
    pub(crate) name: String,
    pub(crate) url: Url,
}

impl Tag {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Application {
    pub(crate) name: String,
    pub(crate) website: Option<Url>,
}

impl Application {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn website(&self) -> Option<&Url> {
        self.website.as_ref()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Attachment {
    pub(crate) id: AttachmentId,
    #[serde(rename = "type")]
    pub(crate) media_type: AttachmentType,
    pub(crate) url: Url,
    pub(crate) remote_url: Option<Url>,
    pub(crate) preview_url: Url,
    pub(crate) text_url: Option<Url>,
}

impl Attachment {
    pub fn id(&self) -> AttachmentId {
        self.id
    }

    pub fn media_type(&self) -> AttachmentType {
        self.media_type
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn remote_url(&self) -> Option<&Url> {
        self.remote_url.as_ref()
    }

    pub fn preview_url(&self) -> &Url {
        &self.preview_url
    }

    pub fn text_url(&self) -> Option<&Url> {
        self.text_url.as_ref()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Notification {
    pub(crate) id: NotificationId,
    #[serde(rename = "type")]
    pub(crate) notification_type: NotificationType,
    pub(crate) created_at: DateTime,
    pub(crate) account: Account,
    pub(crate) status: Option<Status>,
}

impl Notification {
    pub fn id(&self) -> NotificationId {
        self.id
    }

    pub fn notification_type(&self) -> NotificationType {
        self.notification_type
    }

    pub fn created_at(&self) -> &DateTime {
        &self.created_at
    }

    /// The account that triggered the notification.
    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }
}
