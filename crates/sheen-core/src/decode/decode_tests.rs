#![allow(non_snake_case)]

use super::*;
use crate::test_fixtures::{Language, Owner, Repo, repo_json};
use serde_json::json;
use test_case::test_case;

fn object(value: JsonValue) -> JsonObject {
    match value {
        JsonValue::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

// Decodable tests

#[test]
fn Decodable___repo_scenario___decodes_all_fields() {
    let repo = Repo::decode(&repo_json()).unwrap();

    assert_eq!(repo.id, 1);
    assert_eq!(repo.name, "Gloss");
    assert_eq!(repo.description.as_deref(), Some("desc"));
    assert_eq!(repo.url.as_str(), "http://x/");
    assert_eq!(repo.owner.id, 2);
    assert_eq!(repo.owner.login, "a");
    assert_eq!(repo.owner_url.as_str(), "http://y/");
    assert_eq!(repo.language, None);
}

#[test_case("id")]
#[test_case("name")]
#[test_case("html_url")]
#[test_case("owner")]
fn Decodable___missing_required_field___returns_none(key: &str) {
    let mut json = repo_json();
    json.as_object_mut().unwrap().remove(key);

    assert!(Repo::decode(&json).is_none());
}

#[test]
fn Decodable___missing_required_nested_path___returns_none() {
    let mut json = repo_json();
    json["owner"].as_object_mut().unwrap().remove("html_url");

    assert!(Repo::decode(&json).is_none());
}

#[test]
fn Decodable___missing_optional_field___leaves_none() {
    let mut json = repo_json();
    json.as_object_mut().unwrap().remove("description");

    let repo = Repo::decode(&json).unwrap();

    assert_eq!(repo.description, None);
}

#[test]
fn Decodable___null_optional_field___leaves_none() {
    let mut json = repo_json();
    json["description"] = JsonValue::Null;

    let repo = Repo::decode(&json).unwrap();

    assert_eq!(repo.description, None);
}

#[test]
fn Decodable___required_field_wrong_type___returns_none() {
    let mut json = repo_json();
    json["id"] = json!("one");

    assert!(Repo::decode(&json).is_none());
}

#[test]
fn Decodable___optional_field_wrong_type___leaves_none() {
    let mut json = repo_json();
    json["description"] = json!(42);

    let repo = Repo::decode(&json).unwrap();

    assert_eq!(repo.description, None);
}

#[test]
fn Decodable___failing_nested_object___fails_parent() {
    let mut json = repo_json();
    json["owner"] = json!({"id": 2});

    assert!(Repo::decode(&json).is_none());
}

#[test]
fn Decodable___extra_keys___are_ignored() {
    let mut json = repo_json();
    json["stargazers_count"] = json!(900);

    assert!(Repo::decode(&json).is_some());
}

#[test]
fn Decodable___parsed_enum___decodes_known_value() {
    let mut json = repo_json();
    json["language"] = json!("Swift");

    let repo = Repo::decode(&json).unwrap();

    assert_eq!(repo.language, Some(Language::Swift));
}

#[test]
fn Decodable___parsed_enum_unknown_value___leaves_none() {
    let mut json = repo_json();
    json["language"] = json!("Cobol");

    let repo = Repo::decode(&json).unwrap();

    assert_eq!(repo.language, None);
}

#[test_case(json!([1, 2]))]
#[test_case(json!("repo"))]
#[test_case(json!(null))]
fn Decodable___non_object_input___returns_none(value: JsonValue) {
    assert!(Owner::decode(&value).is_none());
}

#[test]
fn Decodable___from_slice___decodes_text() {
    let owner = Owner::from_slice(br#"{"id": 5, "login": "b"}"#).unwrap();

    assert_eq!(owner.id, 5);
    assert_eq!(owner.html_url, None);
}

#[test]
fn Decodable___from_slice_malformed___returns_syntax_error() {
    let result = Owner::from_slice(b"not json");

    assert!(matches!(result, Err(DecodeError::Syntax(_))));
}

#[test]
fn Decodable___from_slice_array___returns_not_an_object() {
    let result = Owner::from_slice(b"[]");

    assert_eq!(
        result.unwrap_err(),
        DecodeError::NotAnObject {
            found: JsonKind::Array
        }
    );
}

#[test]
fn Decodable___from_slice_missing_field___returns_rejected_with_value() {
    let result = Owner::from_slice(br#"{"id": 5}"#);

    let err = result.unwrap_err();
    assert!(matches!(err, DecodeError::Rejected { type_name: "Owner", .. }));
    assert_eq!(err.value(), Some(&json!({"id": 5})));
}

// FromJsonValue tests

#[test]
fn FromJsonValue___u8_out_of_range___returns_none() {
    assert_eq!(u8::from_json_value(&json!(300)), None);
}

#[test]
fn FromJsonValue___u64_negative___returns_none() {
    assert_eq!(u64::from_json_value(&json!(-1)), None);
}

#[test]
fn FromJsonValue___i64_from_float___returns_none() {
    assert_eq!(i64::from_json_value(&json!(1.5)), None);
}

#[test]
fn FromJsonValue___f64_from_integer___converts() {
    assert_eq!(f64::from_json_value(&json!(3)), Some(3.0));
}

#[test_case(json!(1e300))]
#[test_case(json!(-1e300))]
fn FromJsonValue___f32_out_of_range___returns_none(value: JsonValue) {
    assert_eq!(f32::from_json_value(&value), None);
}

#[test]
fn FromJsonValue___f32_in_range___converts() {
    assert_eq!(f32::from_json_value(&json!(2.5)), Some(2.5));
}

#[derive(Debug, PartialEq)]
struct Reading {
    level: f32,
}

impl Decodable for Reading {
    fn from_json(json: &JsonObject) -> Option<Self> {
        Some(Self {
            level: Decoder::new(json).field("level")?,
        })
    }
}

impl crate::Encodable for Reading {
    fn to_json(&self) -> JsonObject {
        crate::Encoder::new().field("level", &self.level).build()
    }
}

#[test]
fn Decodable___f32_overflow___is_rejected_not_saturated() {
    assert_eq!(Reading::decode(&json!({"level": 1e300})), None);
}

#[test]
fn Decodable___f32_field___survives_encode_round_trip() {
    let reading = Reading::decode(&json!({"level": 3.4e38})).unwrap();

    assert_eq!(Reading::decode(&crate::Encodable::encode(&reading)), Some(reading));
}

#[test]
fn FromJsonValue___vec_with_bad_element___returns_none() {
    assert_eq!(Vec::<String>::from_json_value(&json!(["a", 1])), None);
}

#[test]
fn FromJsonValue___vec_of_strings___converts() {
    let tags = Vec::<String>::from_json_value(&json!(["a", "b"]));

    assert_eq!(tags, Some(vec!["a".to_string(), "b".to_string()]));
}

#[test]
fn FromJsonValue___invalid_url___returns_none() {
    assert_eq!(url::Url::from_json_value(&json!("not a url")), None);
}

// Decoder tests

#[test]
fn Decoder___nested_array___drops_undecodable_elements() {
    let json = object(json!({
        "owners": [{"id": 1, "login": "a"}, {"bad": true}, {"id": 3, "login": "c"}]
    }));
    let decoder = Decoder::new(&json);

    let owners: Vec<Owner> = decoder.nested_array("owners").unwrap();

    let logins: Vec<&str> = owners.iter().map(|o| o.login.as_str()).collect();
    assert_eq!(logins, vec!["a", "c"]);
}

#[test]
fn Decoder___nested_array_not_an_array___returns_none() {
    let json = object(json!({"owners": {"id": 1, "login": "a"}}));
    let decoder = Decoder::new(&json);

    assert!(decoder.nested_array::<Owner>("owners").is_none());
}

#[test]
fn Decoder___nested_map_with_bad_value___returns_none() {
    let json = object(json!({"by_login": {"a": {"id": 1, "login": "a"}, "b": {"id": 2}}}));
    let decoder = Decoder::new(&json);

    assert!(decoder.nested_map::<Owner>("by_login").is_none());
}

#[test]
fn Decoder___nested_map___decodes_every_value() {
    let json = object(json!({"by_login": {"a": {"id": 1, "login": "a"}}}));
    let decoder = Decoder::new(&json);

    let map = decoder.nested_map::<Owner>("by_login").unwrap();

    assert_eq!(map["a"].id, 1);
}

#[test]
fn Decoder___with_delimiter___uses_custom_key_paths() {
    let json = object(json!({"owner": {"login": "a"}}));
    let decoder = Decoder::new(&json).with_delimiter('/');

    assert_eq!(decoder.field::<String>("owner/login").as_deref(), Some("a"));
}

#[test]
fn Decoder___contains___treats_null_as_absent() {
    let json = object(json!({"a": null, "b": 1}));
    let decoder = Decoder::new(&json);

    assert!(!decoder.contains("a"));
    assert!(decoder.contains("b"));
    assert!(!decoder.contains("c"));
}

#[test]
fn Decoder___with___applies_custom_conversion() {
    let json = object(json!({"size": "42kb"}));
    let decoder = Decoder::new(&json);

    let size = decoder.with("size", |v| v.as_str()?.strip_suffix("kb")?.parse::<u32>().ok());

    assert_eq!(size, Some(42));
}
