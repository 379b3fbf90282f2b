use api::{Notification, NotificationType};

use super::{AccountMapper, Fields, JsonObject, MapResult, Mapper, Required, StatusMapper};

#[derive(Clone, Copy, Debug, Default)]
pub struct NotificationMapper;

impl Mapper for NotificationMapper {
    type Model = Notification;

    fn map_json(&self, json: &JsonObject) -> MapResult<Notification> {
        let fields = Fields::new(json);

        Ok(Notification {
            id: fields.int("id").required()?,
            notification_type: fields
                .str("type")
                .and_then(NotificationType::from_api)
                .required()?,
            created_at: fields.date("created_at").required()?,
            account: AccountMapper.map_json(fields.object("account").required()?)?,
            status: StatusMapper.map_optional(fields.value("status")),
        })
    }
}
