use api::{Status, Visibility};

use super::{AccountMapper, ApplicationMapper, AttachmentMapper, Fields, JsonObject, MapResult,
            Mapper, MentionMapper, Required, TagMapper};

/// Maps a status together with its account, attachments, mentions, tags,
/// application and reblogged status.
#[derive(Clone, Copy, Debug, Default)]
pub struct StatusMapper;

impl Mapper for StatusMapper {
    type Model = Status;

    fn map_json(&self, json: &JsonObject) -> MapResult<Status> {
        let fields = Fields::new(json);

        let id = fields.int("id").required()?;
        let created_at = fields.date("created_at").required()?;
        let sensitive = fields.bool("sensitive").required()?;
        let visibility = fields
            .str("visibility")
            .and_then(Visibility::from_api)
            .required()?;
        let account = AccountMapper.map_json(fields.object("account").required()?)?;
        let media_attachments = fields.array("media_attachments").required()?;
        let mentions = fields.array("mentions").required()?;
        let tags = fields.array("tags").required()?;
        let uri = fields.string("uri").required()?;
        let content = fields.string("content").required()?;
        let url = fields.url("url").required()?;
        let reblogs_count = fields.int("reblogs_count").required()?;
        let favourites_count = fields.int("favourites_count").required()?;

        let status = Status {
            id,
            created_at,
            in_reply_to_id: fields.string("in_reply_to_id"),
            in_reply_to_account_id: fields.string("in_reply_to_account_id"),
            sensitive,
            spoiler_text: fields.string("spoiler_text"),
            visibility,
            application: ApplicationMapper.map_optional(fields.value("application")),
            account,
            media_attachments: AttachmentMapper.map_array(media_attachments),
            mentions: MentionMapper.map_array(mentions),
            tags: TagMapper.map_array(tags),
            uri,
            content,
            url,
            reblogs_count,
            favourites_count,
            reblog: StatusMapper
                .map_optional(fields.value("reblog"))
                .map(Box::new),
            favourited: fields.bool("favourited").unwrap_or(false),
            reblogged: fields.bool("reblogged").unwrap_or(false),
            language: fields.string("language"),
        };

        trace!("mapped status {} by {}", status.id, status.account.acct());
        Ok(status)
    }
}
