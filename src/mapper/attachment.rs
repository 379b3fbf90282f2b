use api::{Attachment, AttachmentType};

use super::{Fields, JsonObject, MapResult, Mapper, Required};

#[derive(Clone, Copy, Debug, Default)]
pub struct AttachmentMapper;

impl Mapper for AttachmentMapper {
    type Model = Attachment;

    fn map_json(&self, json: &JsonObject) -> MapResult<Attachment> {
        let fields = Fields::new(json);

        Ok(Attachment {
            id: fields.int("id").required()?,
            media_type: fields.str("type").and_then(AttachmentType::from_api).required()?,
            url: fields.url("url").required()?,
            remote_url: fields.url("remote_url"),
            preview_url: fields.url("preview_url").required()?,
            text_url: fields.url("text_url"),
        })
    }
}
