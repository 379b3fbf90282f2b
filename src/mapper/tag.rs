use api::Tag;

use super::{Fields, JsonObject, MapResult, Mapper, Required};

#[derive(Clone, Copy, Debug, Default)]
pub struct TagMapper;

impl Mapper for TagMapper {
    type Model = Tag;

    fn map_json(&self, json: &JsonObject) -> MapResult<Tag> {
        let fields = Fields::new(json);

        Ok(Tag {
            name: fields.string("name").required()?,
            url: fields.url("url").required()?,
        })
    }
}
