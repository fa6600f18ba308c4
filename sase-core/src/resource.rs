//! Resource - Attribute values and the state of a managed object

use std::collections::HashMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Attribute value of a resource
///
/// A nested block is a `Map` keyed by the nested schema's attribute names.
/// There is no null variant: an absent key means the attribute is unset.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    List(Vec<Value>),
    Map(HashMap<String, Value>),
}

/// Attributes of a resource, keyed by Terraform attribute name
pub type Attributes = HashMap<String, Value>;

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub(crate) fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "String",
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::Bool(_) => "Bool",
            Value::List(_) => "List",
            Value::Map(_) => "Map",
        }
    }

    /// Convert a JSON value into an attribute value.
    ///
    /// Returns `None` for JSON null. Null entries inside arrays and objects are dropped.
    pub fn from_json(json: &serde_json::Value) -> Option<Value> {
        match json {
            serde_json::Value::Null => None,
            serde_json::Value::Bool(b) => Some(Value::Bool(*b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(Value::Int(i))
                } else {
                    n.as_f64().map(Value::Float)
                }
            }
            serde_json::Value::String(s) => Some(Value::String(s.clone())),
            serde_json::Value::Array(items) => {
                Some(Value::List(items.iter().filter_map(Value::from_json).collect()))
            }
            serde_json::Value::Object(obj) => Some(Value::Map(
                obj.iter()
                    .filter_map(|(k, v)| Value::from_json(v).map(|v| (k.clone(), v)))
                    .collect(),
            )),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Int(n) => serde_json::Value::from(*n),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::List(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Map(map) => serde_json::Value::Object(
                map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect(),
            ),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = serde_json::Value::deserialize(deserializer)?;
        Value::from_json(&json).ok_or_else(|| D::Error::custom("null is not an attribute value"))
    }
}

/// Current state of a resource or data source as last seen by the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    /// Terraform type name (e.g., "sase_addresses")
    pub resource_type: String,
    /// Composite ID built from the identifying attributes
    pub identifier: Option<String>,
    pub attributes: Attributes,
    /// Whether the remote object exists
    pub exists: bool,
}

impl State {
    pub fn not_found(resource_type: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            identifier: None,
            attributes: HashMap::new(),
            exists: false,
        }
    }

    pub fn existing(resource_type: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            resource_type: resource_type.into(),
            identifier: None,
            attributes,
            exists: true,
        }
    }

    /// Set the identifier and mirror it into the `id` attribute
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        let identifier = identifier.into();
        self.attributes
            .insert("id".to_string(), Value::String(identifier.clone()));
        self.identifier = Some(identifier);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// The composite ID, falling back to the `id` attribute for hand-written state
    pub fn id(&self) -> Option<&str> {
        self.identifier
            .as_deref()
            .or_else(|| self.attributes.get("id").and_then(Value::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trip_keeps_nested_blocks() {
        let json = serde_json::json!({
            "name": "default",
            "rules": [{"name": "r1", "action": {"alert": {}}}],
            "lifetime": {"hours": 8},
            "ratio": 0.5,
            "description": null
        });

        let value = Value::from_json(&json).unwrap();
        let map = value.as_map().unwrap();
        assert!(!map.contains_key("description"));
        assert_eq!(map.get("ratio"), Some(&Value::Float(0.5)));

        let rules = map.get("rules").and_then(Value::as_list).unwrap();
        let action = rules[0].as_map().unwrap().get("action").unwrap();
        assert_eq!(action, &Value::Map(HashMap::from([("alert".to_string(), Value::Map(HashMap::new()))])));
    }

    #[test]
    fn null_is_not_a_value() {
        assert_eq!(Value::from_json(&serde_json::Value::Null), None);
        let result: Result<Value, _> = serde_json::from_str("null");
        assert!(result.is_err());
    }

    #[test]
    fn with_identifier_sets_id_attribute() {
        let state = State::existing("sase_addresses", HashMap::new()).with_identifier("Shared:abc");
        assert_eq!(state.identifier.as_deref(), Some("Shared:abc"));
        assert_eq!(state.attribute("id"), Some(&Value::String("Shared:abc".to_string())));
    }

    #[test]
    fn id_falls_back_to_attribute() {
        let mut attrs = HashMap::new();
        attrs.insert("id".to_string(), Value::from("Shared:abc"));
        let state = State::existing("sase_addresses", attrs);
        assert_eq!(state.id(), Some("Shared:abc"));
        assert_eq!(State::not_found("sase_addresses").id(), None);
    }

    #[test]
    fn state_serializes_as_plain_json() {
        let state = State::existing(
            "sase_tags",
            HashMap::from([("name".to_string(), Value::from("prod"))]),
        )
        .with_identifier("Shared:1");
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["attributes"]["name"], "prod");
        let back: State = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }
}
