#![allow(non_snake_case)]

use super::*;
use crate::error::TransportError;
use serde_json::json;
use sheen_core::{Decoder, JsonObject};

#[derive(Debug, PartialEq)]
struct Item {
    id: u64,
    label: Option<String>,
}

impl Decodable for Item {
    fn from_json(json: &JsonObject) -> Option<Self> {
        let decoder = Decoder::new(json);
        Some(Self {
            id: decoder.field("id")?,
            label: decoder.field("label"),
        })
    }
}

fn serializer() -> ResponseSerializer {
    ResponseSerializer::new()
}

// serialize_unit tests

#[test]
fn ResponseSerializer___unit_with_transport_error___fails_with_transport() {
    let response = TransportResponse::failed(TransportError::connect("dns lookup failed"));

    let result = serializer().serialize_unit(&response);

    assert_eq!(
        result,
        Err(NetworkError::Transport(TransportError::connect(
            "dns lookup failed"
        )))
    );
}

#[test]
fn ResponseSerializer___unit_with_garbage_body___succeeds_without_parsing() {
    let response = TransportResponse::ok("not json");

    assert_eq!(serializer().serialize_unit(&response), Ok(()));
}

#[test]
fn ResponseSerializer___unit_with_error_status___succeeds_by_default() {
    let response = TransportResponse::new(500, None);

    assert_eq!(serializer().serialize_unit(&response), Ok(()));
}

#[test]
fn ResponseSerializer___status_validation___rejects_non_2xx() {
    let response = TransportResponse::new(404, Some(b"missing".to_vec()));

    let result = serializer()
        .with_status_validation(true)
        .serialize_object::<Item>(&response);

    assert_eq!(
        result,
        Err(NetworkError::Status {
            status: 404,
            payload: "missing".to_string()
        })
    );
}

#[test]
fn ResponseSerializer___status_validation___transport_error_wins() {
    let response = TransportResponse::failed(TransportError::timeout("30s"));

    let result = serializer()
        .with_status_validation(true)
        .serialize_unit(&response);

    assert!(matches!(result, Err(NetworkError::Transport(_))));
}

// serialize_object tests

#[test]
fn ResponseSerializer___object_with_transport_error___never_parses() {
    let mut response = TransportResponse::failed(TransportError::connect("dns"));
    response.body = Some(b"{\"id\": 1}".to_vec());

    let result = serializer().serialize_object::<Item>(&response);

    assert!(matches!(result, Err(NetworkError::Transport(_))));
}

#[test]
fn ResponseSerializer___object_with_invalid_json___fails_with_parse_and_payload() {
    let response = TransportResponse::ok("not json");

    let result = serializer().serialize_object::<Item>(&response);

    match result {
        Err(NetworkError::Parse { payload, .. }) => assert_eq!(payload, "not json"),
        other => panic!("expected parse failure, got {other:?}"),
    }
}

#[test]
fn ResponseSerializer___object_with_empty_body___fails_with_parse() {
    let response = TransportResponse::new(204, None);

    let result = serializer().serialize_object::<Item>(&response);

    assert!(matches!(result, Err(NetworkError::Parse { .. })));
}

#[test]
fn ResponseSerializer___object_valid___decodes() {
    let response = TransportResponse::ok(r#"{"id": 7, "label": "seven"}"#);

    let item = serializer().serialize_object::<Item>(&response).unwrap();

    assert_eq!(
        item,
        Item {
            id: 7,
            label: Some("seven".to_string())
        }
    );
}

#[test]
fn ResponseSerializer___object_missing_required___fails_with_decode_and_value() {
    let response = TransportResponse::ok(r#"{"label": "no id"}"#);

    let result = serializer().serialize_object::<Item>(&response);

    assert_eq!(result, Err(NetworkError::decode(json!({"label": "no id"}))));
}

#[test]
fn ResponseSerializer___object_given_array___fails_with_decode() {
    let response = TransportResponse::ok(r#"[{"id": 1}]"#);

    let result = serializer().serialize_object::<Item>(&response);

    assert_eq!(result, Err(NetworkError::decode(json!([{"id": 1}]))));
}

// serialize_array tests

#[test]
fn ResponseSerializer___array_mixed___keeps_decodable_elements() {
    let response = TransportResponse::ok(r#"[{"id": 1, "label": "one"}, {"bad": true}, {"id": 3}]"#);

    let items = serializer().serialize_array::<Item>(&response).unwrap();

    assert_eq!(
        items,
        vec![
            Item {
                id: 1,
                label: Some("one".to_string())
            },
            Item { id: 3, label: None },
        ]
    );
}

#[test]
fn ResponseSerializer___array_all_bad___succeeds_empty() {
    let response = TransportResponse::ok(r#"[{"bad": true}, 4, "x"]"#);

    let items = serializer().serialize_array::<Item>(&response).unwrap();

    assert!(items.is_empty());
}

#[test]
fn ResponseSerializer___array_given_object___fails_with_decode() {
    let response = TransportResponse::ok(r#"{"id": 1}"#);

    let result = serializer().serialize_array::<Item>(&response);

    assert_eq!(result, Err(NetworkError::decode(json!({"id": 1}))));
}

#[test]
fn ResponseSerializer___array_with_invalid_json___fails_with_parse() {
    let response = TransportResponse::ok("[{");

    let result = serializer().serialize_array::<Item>(&response);

    assert!(matches!(result, Err(NetworkError::Parse { .. })));
}

#[test]
fn ResponseSerializer___serialize_json___returns_parsed_value() {
    let response = TransportResponse::ok(r#"{"a": [1, 2]}"#);

    let value = serializer().serialize_json(&response).unwrap();

    assert_eq!(value, json!({"a": [1, 2]}));
}
