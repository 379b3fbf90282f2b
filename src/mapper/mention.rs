use api::Mention;

use super::{Fields, JsonObject, MapResult, Mapper, Required};

#[derive(Clone, Copy, Debug, Default)]
pub struct MentionMapper;

impl Mapper for MentionMapper {
    type Model = Mention;

    fn map_json(&self, json: &JsonObject) -> MapResult<Mention> {
        let fields = Fields::new(json);

        Ok(Mention {
            id: fields.int("id").required()?,
            url: fields.url("url").required()?,
            username: fields.string("username").required()?,
            acct: fields.string("acct").required()?,
        })
    }
}
