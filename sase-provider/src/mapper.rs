//! Mapping between Terraform attribute values and API JSON
//!
//! Each schema attribute names its API field through `provider_name`, so the
//! same walk serves every resource. The typed models in `models` sit at the
//! end of the chain: deserializing the mapped JSON into a model is what
//! rejects malformed requests, including two variants of one union.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value as Json};

use sase_core::provider::ProviderError;
use sase_core::resource::{Attributes, Value};
use sase_core::schema::{AttributeSchema, AttributeType, ResourceSchema};

#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("configuration cannot be converted into an API request")]
    Request(#[source] serde_json::Error),

    #[error("API response cannot be converted into state")]
    Response(#[source] serde_json::Error),
}

impl From<MapError> for ProviderError {
    fn from(err: MapError) -> Self {
        match err {
            MapError::Request(_) => ProviderError::invalid_config("Invalid request").with_cause(err),
            MapError::Response(_) => ProviderError::mapping("Invalid response").with_cause(err),
        }
    }
}

/// Build the request object for a resource from its attributes
pub fn to_model<M: DeserializeOwned>(
    schema: &ResourceSchema,
    attributes: &Attributes,
) -> Result<M, MapError> {
    let body = attributes_to_json(schema.attributes.values(), attributes);
    serde_json::from_value(Json::Object(body)).map_err(MapError::Request)
}

/// Attributes for every schema field present in an API object
pub fn from_model<M: Serialize>(schema: &ResourceSchema, model: &M) -> Result<Attributes, MapError> {
    match serde_json::to_value(model).map_err(MapError::Response)? {
        Json::Object(body) => Ok(json_to_attributes(schema.attributes.values(), &body)),
        other => Err(MapError::Response(serde::de::Error::custom(format!(
            "expected a JSON object, got {}",
            other
        )))),
    }
}

/// Convert configured attributes into a JSON object keyed by API field names.
///
/// Computed-only attributes and attributes without an API name are skipped.
pub fn attributes_to_json<'a>(
    fields: impl IntoIterator<Item = &'a AttributeSchema>,
    values: &Attributes,
) -> Map<String, Json> {
    let mut body = Map::new();
    for field in fields {
        if !field.is_configurable() {
            continue;
        }
        let Some(api_name) = &field.provider_name else {
            continue;
        };
        if let Some(value) = values.get(&field.name)
            && let Some(json) = value_to_json(&field.attr_type, value)
        {
            body.insert(api_name.clone(), json);
        }
    }
    body
}

/// JSON for one attribute value; `None` means the field is left out
///
/// A `true` flag becomes `{}`. A `false` flag and a nested object with
/// nothing set are omitted.
pub fn value_to_json(attr_type: &AttributeType, value: &Value) -> Option<Json> {
    to_json(attr_type, value, true)
}

fn to_json(attr_type: &AttributeType, value: &Value, omit_empty: bool) -> Option<Json> {
    match (attr_type, value) {
        (AttributeType::Flag, Value::Bool(true)) => Some(Json::Object(Map::new())),
        (AttributeType::Flag, _) => None,
        (AttributeType::Object(fields), Value::Map(map)) => {
            let body = attributes_to_json(fields, map);
            if body.is_empty() && omit_empty {
                None
            } else {
                Some(Json::Object(body))
            }
        }
        (AttributeType::List(inner), Value::List(items)) => Some(Json::Array(
            items
                .iter()
                .filter_map(|item| to_json(inner, item, false))
                .collect(),
        )),
        (AttributeType::Map(inner), Value::Map(map)) => Some(Json::Object(
            map.iter()
                .filter_map(|(k, v)| to_json(inner, v, false).map(|j| (k.clone(), j)))
                .collect(),
        )),
        (AttributeType::Float, Value::Int(n)) => Some(Json::from(*n as f64)),
        (_, value) => Some(value.to_json()),
    }
}

/// Convert an API JSON object into attributes, following the schema
pub fn json_to_attributes<'a>(
    fields: impl IntoIterator<Item = &'a AttributeSchema>,
    body: &Map<String, Json>,
) -> Attributes {
    let mut attributes = Attributes::new();
    for field in fields {
        let Some(api_name) = &field.provider_name else {
            continue;
        };
        if let Some(json) = body.get(api_name)
            && let Some(value) = json_to_value(&field.attr_type, json)
        {
            attributes.insert(field.name.clone(), value);
        }
    }
    attributes
}

/// Attribute value for one JSON field; `None` for null or a shape the schema does not expect
pub fn json_to_value(attr_type: &AttributeType, json: &Json) -> Option<Value> {
    match (attr_type, json) {
        (_, Json::Null) => None,
        (AttributeType::Flag, _) => Some(Value::Bool(true)),
        (AttributeType::Object(fields), Json::Object(body)) => {
            Some(Value::Map(json_to_attributes(fields, body)))
        }
        (AttributeType::List(inner), Json::Array(items)) => Some(Value::List(
            items
                .iter()
                .filter_map(|item| json_to_value(inner, item))
                .collect(),
        )),
        (AttributeType::Map(inner), Json::Object(body)) => Some(Value::Map(
            body.iter()
                .filter_map(|(k, v)| json_to_value(inner, v).map(|v| (k.clone(), v)))
                .collect(),
        )),
        (AttributeType::String, Json::String(s)) => Some(Value::String(s.clone())),
        (AttributeType::String, Json::Number(n)) => Some(Value::String(n.to_string())),
        (AttributeType::String, Json::Bool(b)) => Some(Value::String(b.to_string())),
        (AttributeType::Int, Json::Number(n)) => n.as_i64().map(Value::Int),
        (AttributeType::Float, Json::Number(n)) => n.as_f64().map(Value::Float),
        (AttributeType::Bool, Json::Bool(b)) => Some(Value::Bool(*b)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Empty;
    use crate::models::anti_spyware_profiles::{Action, Rule};
    use sase_core::provider::ErrorKind;
    use sase_core::schema::types;
    use serde_json::json;

    fn action_type() -> AttributeType {
        AttributeType::Object(vec![
            AttributeSchema::new("alert", AttributeType::Flag).with_provider_name("alert"),
            AttributeSchema::new("drop", AttributeType::Flag).with_provider_name("drop"),
            AttributeSchema::new(
                "block_ip",
                AttributeType::Object(vec![
                    AttributeSchema::new("track_by", AttributeType::String)
                        .with_provider_name("track_by"),
                    AttributeSchema::new("duration", AttributeType::Int)
                        .with_provider_name("duration"),
                ]),
            )
            .with_provider_name("block_ip"),
        ])
    }

    fn rule_schema() -> ResourceSchema {
        ResourceSchema::new("rule")
            .attribute(
                AttributeSchema::new("object_id", AttributeType::String).computed(),
            )
            .attribute(
                AttributeSchema::new("name", AttributeType::String)
                    .required()
                    .with_provider_name("name"),
            )
            .attribute(AttributeSchema::new("action", action_type()).with_provider_name("action"))
            .attribute(
                AttributeSchema::new("severity", types::string_list())
                    .with_provider_name("severity"),
            )
            .attribute(
                AttributeSchema::new("threat_name", AttributeType::String)
                    .with_provider_name("threat_name"),
            )
    }

    fn attrs(pairs: Vec<(&str, Value)>) -> Attributes {
        pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
    }

    #[test]
    fn true_flag_becomes_empty_object() {
        let config = attrs(vec![
            ("name", Value::from("critical")),
            (
                "action",
                Value::Map(attrs(vec![
                    ("alert", Value::Bool(true)),
                    ("drop", Value::Bool(false)),
                ])),
            ),
        ]);
        let body = attributes_to_json(rule_schema().attributes.values(), &config);
        assert_eq!(
            Json::Object(body),
            json!({"name": "critical", "action": {"alert": {}}})
        );
    }

    #[test]
    fn object_with_only_false_flags_is_omitted() {
        let config = attrs(vec![
            ("name", Value::from("critical")),
            ("action", Value::Map(attrs(vec![("alert", Value::Bool(false))]))),
        ]);
        let body = attributes_to_json(rule_schema().attributes.values(), &config);
        assert!(!body.contains_key("action"));
    }

    #[test]
    fn computed_attributes_are_not_sent() {
        let config = attrs(vec![
            ("name", Value::from("critical")),
            ("object_id", Value::from("abc")),
        ]);
        let body = attributes_to_json(rule_schema().attributes.values(), &config);
        assert_eq!(Json::Object(body), json!({"name": "critical"}));
    }

    #[test]
    fn present_flag_reads_as_true() {
        let body = json!({
            "name": "critical",
            "action": {"drop": {}},
            "severity": ["high"],
            "packet_capture": "disable"
        });
        let Json::Object(body) = body else {
            unreachable!()
        };
        let state = json_to_attributes(rule_schema().attributes.values(), &body);
        let action = state["action"].as_map().unwrap();
        assert_eq!(action.get("drop"), Some(&Value::Bool(true)));
        assert_eq!(action.get("alert"), None);
        assert!(!state.contains_key("packet_capture"));
        assert_eq!(state["severity"], Value::List(vec![Value::from("high")]));
    }

    #[test]
    fn string_attribute_accepts_scalars() {
        assert_eq!(
            json_to_value(&AttributeType::String, &json!(8080)),
            Some(Value::from("8080"))
        );
        assert_eq!(json_to_value(&AttributeType::Int, &json!("x")), None);
        assert_eq!(json_to_value(&AttributeType::String, &Json::Null), None);
    }

    #[test]
    fn typed_model_round_trip() {
        let config = attrs(vec![
            ("name", Value::from("critical")),
            (
                "action",
                Value::Map(attrs(vec![(
                    "block_ip",
                    Value::Map(attrs(vec![
                        ("track_by", Value::from("source")),
                        ("duration", Value::Int(120)),
                    ])),
                )])),
            ),
        ]);
        let rule: Rule = to_model(&rule_schema(), &config).unwrap();
        assert!(matches!(rule.action, Some(Action::BlockIp(ref b)) if b.duration == 120));

        let back = from_model(&rule_schema(), &rule).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn two_flags_fail_model_conversion() {
        let config = attrs(vec![
            ("name", Value::from("critical")),
            (
                "action",
                Value::Map(attrs(vec![
                    ("alert", Value::Bool(true)),
                    ("drop", Value::Bool(true)),
                ])),
            ),
        ]);
        let err = to_model::<Rule>(&rule_schema(), &config).unwrap_err();
        assert!(matches!(err, MapError::Request(_)));
        let err: ProviderError = err.into();
        assert_eq!(err.kind, ErrorKind::InvalidConfig);
    }

    #[test]
    fn single_flag_builds_model() {
        let config = attrs(vec![
            ("name", Value::from("critical")),
            ("action", Value::Map(attrs(vec![("alert", Value::Bool(true))]))),
        ]);
        let rule: Rule = to_model(&rule_schema(), &config).unwrap();
        assert_eq!(rule.action, Some(Action::Alert(Empty {})));
    }

    #[test]
    fn float_attribute_accepts_integer_config() {
        assert_eq!(
            value_to_json(&AttributeType::Float, &Value::Int(100)),
            Some(json!(100.0))
        );
    }
}
