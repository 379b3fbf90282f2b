use api::Account;

use super::{Fields, JsonObject, MapResult, Mapper, Required};

#[derive(Clone, Copy, Debug, Default)]
pub struct AccountMapper;

impl Mapper for AccountMapper {
    type Model = Account;

    fn map_json(&self, json: &JsonObject) -> MapResult<Account> {
        let fields = Fields::new(json);

        Ok(Account {
            id: fields.int("id").required()?,
            username: fields.string("username").required()?,
            acct: fields.string("acct").required()?,
            display_name: fields.string("display_name").required()?,
            locked: fields.bool("locked").required()?,
            created_at: fields.date("created_at").required()?,
            followers_count: fields.int("followers_count").required()?,
            following_count: fields.int("following_count").required()?,
            statuses_count: fields.int("statuses_count").required()?,
            note: fields.string("note").required()?,
            url: fields.url("url").required()?,
            avatar: fields.url("avatar").required()?,
            avatar_static: fields.url("avatar_static"),
            header: fields.url("header").required()?,
            header_static: fields.url("header_static"),
        })
    }
}
