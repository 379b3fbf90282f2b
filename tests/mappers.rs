extern crate mastomap;
extern crate serde_json;

use mastomap::MappingError;
use mastomap::api::{AttachmentType, NotificationType, Visibility};
use mastomap::mapper::{JsonObject, Mapper, NotificationMapper, StatusMapper, TagMapper};
use serde_json::Value;

const STATUS: &str = include_str!("fixtures/status.json");
const STATUS_WITH_APPLICATION: &str = include_str!("fixtures/status_with_application.json");
const STATUS_WITH_ATTACHMENTS: &str = include_str!("fixtures/status_with_attachments.json");
const STATUS_WITH_INVALID_ATTACHMENTS: &str =
    include_str!("fixtures/status_with_invalid_attachments.json");
const STATUS_WITH_MENTIONS: &str = include_str!("fixtures/status_with_mentions.json");
const STATUS_WITH_TAGS: &str = include_str!("fixtures/status_with_tags.json");
const STATUS_WITH_REBLOG: &str = include_str!("fixtures/status_with_reblog.json");
const TAG: &str = include_str!("fixtures/tag.json");
const INCOMPLETE: &str = include_str!("fixtures/incomplete.json");
const NOTIFICATION: &str = include_str!("fixtures/notification.json");

fn json(fixture: &str) -> JsonObject {
    match serde_json::from_str(fixture).unwrap() {
        Value::Object(json) => json,
        other => panic!("fixture is not an object: {}", other),
    }
}

#[test]
fn status_empty_data_is_invalid_json() {
    assert_eq!(StatusMapper.map_data(b""), Err(MappingError::InvalidJson));
}

#[test]
fn status_truncated_data_is_invalid_json() {
    let data = &STATUS.as_bytes()[..STATUS.len() / 2];

    assert_eq!(StatusMapper.map_data(data), Err(MappingError::InvalidJson));
}

#[test]
fn status_incomplete_data_is_incomplete_model() {
    assert_eq!(
        StatusMapper.map_data(INCOMPLETE.as_bytes()),
        Err(MappingError::IncompleteModel)
    );
    assert_eq!(
        StatusMapper.map_json(&json(INCOMPLETE)),
        Err(MappingError::IncompleteModel)
    );
}

#[test]
fn status_fields_match_source() {
    let source = json(STATUS);
    let status = StatusMapper.map_data(STATUS.as_bytes()).unwrap();

    assert_eq!(Some(status.id()), source["id"].as_i64());
    assert_eq!(status.created_at().to_rfc3339(), "2017-04-17T12:01:45.203+00:00");
    assert_eq!(Some(status.sensitive()), source["sensitive"].as_bool());
    assert_eq!(status.visibility(), Visibility::Public);
    assert_eq!(Some(status.account().id()), source["account"]["id"].as_i64());
    assert_eq!(
        Some(status.account().username()),
        source["account"]["username"].as_str()
    );
    assert_eq!(Some(status.uri()), source["uri"].as_str());
    assert_eq!(Some(status.content()), source["content"].as_str());
    assert_eq!(Some(status.url().as_str()), source["url"].as_str());
    assert_eq!(Some(status.reblogs_count()), source["reblogs_count"].as_i64());
    assert_eq!(
        Some(status.favourites_count()),
        source["favourites_count"].as_i64()
    );
}

#[test]
fn status_data_and_json_produce_same_model() {
    let fixtures = [
        STATUS,
        STATUS_WITH_APPLICATION,
        STATUS_WITH_ATTACHMENTS,
        STATUS_WITH_INVALID_ATTACHMENTS,
        STATUS_WITH_MENTIONS,
        STATUS_WITH_TAGS,
        STATUS_WITH_REBLOG,
    ];

    for fixture in fixtures.iter() {
        let source = json(fixture);
        let reencoded = serde_json::to_vec(&source).unwrap();

        let from_json = StatusMapper.map_json(&source).unwrap();
        assert_eq!(StatusMapper.map_data(fixture.as_bytes()), Ok(from_json.clone()));
        assert_eq!(StatusMapper.map_data(&reencoded), Ok(from_json));
    }
}

#[test]
fn status_without_application_has_none() {
    let status = StatusMapper.map_json(&json(STATUS)).unwrap();

    assert!(status.application().is_none());
}

#[test]
fn status_with_application_maps_it() {
    let status = StatusMapper.map_json(&json(STATUS_WITH_APPLICATION)).unwrap();
    let application = status.application().unwrap();

    assert_eq!(application.name(), "Tusky");
    assert_eq!(
        application.website().map(|url| url.as_str()),
        Some("https://tusky.keylesspalace.com/")
    );
    assert!(status.favourited());
    assert!(!status.reblogged());
}

#[test]
fn status_without_attachments_has_empty_list() {
    let status = StatusMapper.map_json(&json(STATUS)).unwrap();

    assert!(status.media_attachments().is_empty());
}

#[test]
fn status_with_attachments_maps_them() {
    let status = StatusMapper.map_json(&json(STATUS_WITH_ATTACHMENTS)).unwrap();
    let types = status
        .media_attachments()
        .iter()
        .map(|attachment| attachment.media_type())
        .collect::<Vec<_>>();

    assert_eq!(
        types,
        vec![AttachmentType::Image, AttachmentType::Video, AttachmentType::Gifv]
    );
    assert!(status.sensitive());
    assert_eq!(status.spoiler_text(), Some("cat pictures"));
}

#[test]
fn status_with_one_invalid_attachment_keeps_the_other_two() {
    let status = StatusMapper
        .map_json(&json(STATUS_WITH_INVALID_ATTACHMENTS))
        .unwrap();
    let ids = status
        .media_attachments()
        .iter()
        .map(|attachment| attachment.id())
        .collect::<Vec<_>>();

    assert_eq!(ids, vec![200, 202]);
}

#[test]
fn status_without_mentions_has_empty_list() {
    let status = StatusMapper.map_json(&json(STATUS)).unwrap();

    assert!(status.mentions().is_empty());
}

#[test]
fn status_with_mentions_maps_them() {
    let status = StatusMapper.map_json(&json(STATUS_WITH_MENTIONS)).unwrap();
    let accts = status
        .mentions()
        .iter()
        .map(|mention| mention.acct())
        .collect::<Vec<_>>();

    assert_eq!(accts, vec!["halcy", "dtluna", "ThisIsMissEm"]);
    assert_eq!(status.in_reply_to_id(), Some("3517000"));
    assert_eq!(status.in_reply_to_account_id(), Some("2"));
    assert_eq!(status.visibility(), Visibility::Unlisted);
}

#[test]
fn status_without_tags_has_empty_list() {
    let status = StatusMapper.map_json(&json(STATUS)).unwrap();

    assert!(status.tags().is_empty());
}

#[test]
fn status_with_tags_maps_them() {
    let status = StatusMapper.map_json(&json(STATUS_WITH_TAGS)).unwrap();
    let names = status.tags().iter().map(|tag| tag.name()).collect::<Vec<_>>();

    assert_eq!(names, vec!["mastodon", "release", "opensource"]);
}

#[test]
fn status_without_reblog_has_none() {
    let status = StatusMapper.map_json(&json(STATUS)).unwrap();

    assert!(status.reblog().is_none());
}

#[test]
fn status_with_reblog_maps_it_recursively() {
    let source = json(STATUS_WITH_REBLOG);
    let status = StatusMapper.map_json(&source).unwrap();
    let reblogged = StatusMapper
        .map_json(source["reblog"].as_object().unwrap())
        .unwrap();

    assert_eq!(status.reblog(), Some(&reblogged));
    assert_eq!(status.reblog().map(|reblog| reblog.id()), Some(3517834));
    assert!(status.reblogged());
}

#[test]
fn status_without_flags_defaults_them_to_false() {
    let source = json(STATUS);
    assert!(!source.contains_key("favourited"));
    assert!(!source.contains_key("reblogged"));

    let status = StatusMapper.map_json(&source).unwrap();

    assert!(!status.favourited());
    assert!(!status.reblogged());
}

#[test]
fn status_missing_any_required_field_is_incomplete() {
    let required = [
        "id",
        "created_at",
        "sensitive",
        "visibility",
        "account",
        "media_attachments",
        "mentions",
        "tags",
        "uri",
        "content",
        "url",
        "reblogs_count",
        "favourites_count",
    ];

    for key in required.iter() {
        let mut source = json(STATUS);
        source.remove(*key);

        assert_eq!(
            StatusMapper.map_json(&source),
            Err(MappingError::IncompleteModel),
            "status without `{}` should not map",
            key
        );
    }
}

#[test]
fn tag_empty_data_is_invalid_json() {
    assert_eq!(TagMapper.map_data(b""), Err(MappingError::InvalidJson));
}

#[test]
fn tag_incomplete_json_is_incomplete_model() {
    assert_eq!(
        TagMapper.map_data(INCOMPLETE.as_bytes()),
        Err(MappingError::IncompleteModel)
    );
}

#[test]
fn tag_round_trips_name_and_url() {
    let source = json(TAG);
    let tag = TagMapper.map_data(TAG.as_bytes()).unwrap();

    assert_eq!(Some(tag.name()), source["name"].as_str());
    assert_eq!(Some(tag.url().as_str()), source["url"].as_str());
    assert_eq!(TagMapper.map_json(&source), Ok(tag));
}

#[test]
fn notification_embeds_status() {
    let notification = NotificationMapper
        .map_data(NOTIFICATION.as_bytes())
        .unwrap();
    let status = StatusMapper.map_data(STATUS.as_bytes()).unwrap();

    assert_eq!(notification.notification_type(), NotificationType::Mention);
    assert_eq!(notification.account(), status.account());
    assert_eq!(notification.status(), Some(&status));
}

#[test]
fn mapped_models_serialize_with_api_names() {
    let status = StatusMapper.map_json(&json(STATUS_WITH_ATTACHMENTS)).unwrap();
    let value = serde_json::to_value(&status).unwrap();

    assert_eq!(value["visibility"], "public");
    assert_eq!(value["media_attachments"][2]["type"], "gifv");
    assert_eq!(value["url"], "https://mastodon.social/@Gargron/3517834");
}
