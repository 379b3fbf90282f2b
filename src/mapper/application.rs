use api::Application;

use super::{Fields, JsonObject, MapResult, Mapper, Required};

#[derive(Clone, Copy, Debug, Default)]
pub struct ApplicationMapper;

impl Mapper for ApplicationMapper {
    type Model = Application;

    fn map_json(&self, json: &JsonObject) -> MapResult<Application> {
        let fields = Fields::new(json);

        Ok(Application {
            name: fields.string("name").required()?,
            website: fields.url("website"),
        })
    }
}
