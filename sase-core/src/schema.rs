//! Schema - Define type schemas for resources and data sources
//!
//! Providers declare a schema for each resource type. Configurations are
//! validated against it before planning, and the provider uses the
//! `provider_name` of each attribute to map values to and from the API.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::Serialize;

use crate::resource::{Attributes, Value};

/// Attribute type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum AttributeType {
    String,
    Int,
    Float,
    Bool,
    /// Presence flag: `true` is sent as an empty JSON object, `false` is omitted
    Flag,
    List(Box<AttributeType>),
    Map(Box<AttributeType>),
    /// Nested block with its own attributes
    Object(Vec<AttributeSchema>),
}

impl AttributeType {
    /// Check if a value conforms to this type
    pub fn validate(&self, value: &Value) -> Result<(), TypeError> {
        match (self, value) {
            (AttributeType::String, Value::String(_)) => Ok(()),
            (AttributeType::Int, Value::Int(_)) => Ok(()),
            (AttributeType::Float, Value::Float(_) | Value::Int(_)) => Ok(()),
            (AttributeType::Bool | AttributeType::Flag, Value::Bool(_)) => Ok(()),

            (AttributeType::List(inner), Value::List(items)) => {
                for (i, item) in items.iter().enumerate() {
                    inner.validate(item).map_err(|e| TypeError::ListItemError {
                        index: i,
                        inner: Box::new(e),
                    })?;
                }
                Ok(())
            }

            (AttributeType::Map(inner), Value::Map(map)) => {
                for (k, v) in map {
                    inner.validate(v).map_err(|e| TypeError::MapValueError {
                        key: k.clone(),
                        inner: Box::new(e),
                    })?;
                }
                Ok(())
            }

            (AttributeType::Object(fields), Value::Map(map)) => {
                let mut errors = Vec::new();
                validate_attributes(fields.iter(), map, &mut errors);
                match errors.into_iter().next() {
                    Some(e) => Err(e),
                    None => Ok(()),
                }
            }

            _ => Err(TypeError::TypeMismatch {
                expected: self.type_name(),
                got: value.type_name().to_string(),
            }),
        }
    }

    fn type_name(&self) -> String {
        match self {
            AttributeType::String => "String".to_string(),
            AttributeType::Int => "Int".to_string(),
            AttributeType::Float => "Float".to_string(),
            AttributeType::Bool => "Bool".to_string(),
            AttributeType::Flag => "Flag".to_string(),
            AttributeType::List(inner) => format!("List<{}>", inner.type_name()),
            AttributeType::Map(inner) => format!("Map<{}>", inner.type_name()),
            AttributeType::Object(_) => "Object".to_string(),
        }
    }

    /// Nested attributes of an object type, looking through lists and maps
    pub fn object_fields(&self) -> Option<&[AttributeSchema]> {
        match self {
            AttributeType::Object(fields) => Some(fields),
            AttributeType::List(inner) | AttributeType::Map(inner) => inner.object_fields(),
            _ => None,
        }
    }

    fn into_computed(self) -> Self {
        match self {
            AttributeType::List(inner) => AttributeType::List(Box::new(inner.into_computed())),
            AttributeType::Map(inner) => AttributeType::Map(Box::new(inner.into_computed())),
            AttributeType::Object(fields) => AttributeType::Object(
                fields.into_iter().map(AttributeSchema::into_computed).collect(),
            ),
            other => other,
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// Type error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TypeError {
    #[error("Type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },

    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    #[error("Required attribute '{name}' is missing")]
    MissingRequired { name: String },

    #[error("Unknown attribute '{name}'")]
    UnknownAttribute { name: String },

    #[error("Attribute '{name}' is computed and cannot be configured")]
    ComputedAttributeSet { name: String },

    #[error("List item at index {index}: {inner}")]
    ListItemError { index: usize, inner: Box<TypeError> },

    #[error("Map value for key '{key}': {inner}")]
    MapValueError { key: String, inner: Box<TypeError> },

    #[error("Attribute '{name}': {inner}")]
    AttributeError { name: String, inner: Box<TypeError> },
}

impl TypeError {
    /// Top-level attribute this error refers to
    pub fn attribute(&self) -> Option<&str> {
        match self {
            TypeError::MissingRequired { name }
            | TypeError::UnknownAttribute { name }
            | TypeError::ComputedAttributeSet { name }
            | TypeError::AttributeError { name, .. } => Some(name),
            _ => None,
        }
    }
}

/// Value validator attached to an attribute
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Validator {
    /// String (or each string of a list) must be one of the values
    OneOf(Vec<String>),
    /// Inclusive integer range
    Between(i64, i64),
    FloatBetween(f64, f64),
    LengthAtMost(usize),
    LengthAtLeast(usize),
    /// Maximum number of list elements
    SizeAtMost(usize),
    /// String must match the regular expression
    Matches(String),
    /// Exactly one of the nested attributes must be set; a `false` flag is unset
    ExactlyOneOf(Vec<String>),
}

impl Validator {
    pub fn one_of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Validator::OneOf(values.into_iter().map(Into::into).collect())
    }

    pub fn exactly_one_of<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Validator::ExactlyOneOf(fields.into_iter().map(Into::into).collect())
    }

    pub fn check(&self, value: &Value) -> Result<(), String> {
        match (self, value) {
            (Validator::OneOf(_), Value::String(s)) => self.check_string(s),
            (Validator::Between(min, max), Value::Int(n)) => {
                if n < min || n > max {
                    Err(format!("value must be between {} and {}, got {}", min, max, n))
                } else {
                    Ok(())
                }
            }
            (Validator::FloatBetween(_, _), Value::Int(n)) => self.check(&Value::Float(*n as f64)),
            (Validator::FloatBetween(min, max), Value::Float(f)) => {
                let f = *f;
                if f < *min || f > *max {
                    Err(format!("value must be between {} and {}, got {}", min, max, f))
                } else {
                    Ok(())
                }
            }
            (
                Validator::LengthAtMost(_) | Validator::LengthAtLeast(_) | Validator::Matches(_),
                Value::String(s),
            ) => self.check_string(s),
            (Validator::SizeAtMost(max), Value::List(items)) => {
                if items.len() > *max {
                    Err(format!(
                        "list must contain at most {} elements, got {}",
                        max,
                        items.len()
                    ))
                } else {
                    Ok(())
                }
            }
            (Validator::ExactlyOneOf(fields), Value::Map(map)) => {
                let set: Vec<&str> = fields
                    .iter()
                    .filter(|f| match map.get(f.as_str()) {
                        None | Some(Value::Bool(false)) => false,
                        Some(_) => true,
                    })
                    .map(String::as_str)
                    .collect();
                if set.len() == 1 {
                    Ok(())
                } else {
                    Err(format!(
                        "exactly one of [{}] must be set, got {}",
                        fields.join(", "),
                        if set.is_empty() {
                            "none".to_string()
                        } else {
                            format!("[{}]", set.join(", "))
                        }
                    ))
                }
            }
            // String validators apply element-wise to string lists
            (
                Validator::OneOf(_)
                | Validator::LengthAtMost(_)
                | Validator::LengthAtLeast(_)
                | Validator::Matches(_),
                Value::List(items),
            ) => {
                for item in items {
                    if let Value::String(s) = item {
                        self.check_string(s)?;
                    }
                }
                Ok(())
            }
            // Type mismatches are reported by the type check
            _ => Ok(()),
        }
    }

    fn check_string(&self, s: &str) -> Result<(), String> {
        match self {
            Validator::OneOf(values) => {
                if values.iter().any(|v| v == s) {
                    Ok(())
                } else {
                    Err(format!(
                        "value must be one of: {}, got '{}'",
                        values.join(", "),
                        s
                    ))
                }
            }
            Validator::LengthAtMost(max) => {
                let len = s.chars().count();
                if len > *max {
                    Err(format!("string length must be at most {}, got {}", max, len))
                } else {
                    Ok(())
                }
            }
            Validator::LengthAtLeast(min) => {
                let len = s.chars().count();
                if len < *min {
                    Err(format!("string length must be at least {}, got {}", min, len))
                } else {
                    Ok(())
                }
            }
            Validator::Matches(pattern) => {
                let re = regex::Regex::new(pattern)
                    .map_err(|e| format!("invalid pattern '{}': {}", pattern, e))?;
                if re.is_match(s) {
                    Ok(())
                } else {
                    Err(format!("value '{}' must match pattern {}", s, pattern))
                }
            }
            _ => Ok(()),
        }
    }
}

/// Whether an attribute is set by the user, the provider, or either
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeConstraint {
    Required,
    Optional,
    Computed,
    OptionalComputed,
}

/// Attribute schema
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeSchema {
    pub name: String,
    pub attr_type: AttributeType,
    pub constraint: AttributeConstraint,
    /// Value planned when the configuration leaves the attribute null
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// API JSON field name; attributes without one are not sent to or read from the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
    pub sensitive: bool,
    /// Changing the value destroys and recreates the resource
    pub requires_replace: bool,
}

impl AttributeSchema {
    pub fn new(name: impl Into<String>, attr_type: AttributeType) -> Self {
        Self {
            name: name.into(),
            attr_type,
            constraint: AttributeConstraint::Optional,
            default: None,
            description: None,
            provider_name: None,
            validators: Vec::new(),
            sensitive: false,
            requires_replace: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.constraint = AttributeConstraint::Required;
        self
    }

    pub fn computed(mut self) -> Self {
        self.constraint = AttributeConstraint::Computed;
        self
    }

    /// Default value; the attribute becomes optional and computed
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self.constraint = AttributeConstraint::OptionalComputed;
        self
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn with_provider_name(mut self, name: impl Into<String>) -> Self {
        self.provider_name = Some(name.into());
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    pub fn requires_replace(mut self) -> Self {
        self.requires_replace = true;
        self
    }

    pub fn is_required(&self) -> bool {
        self.constraint == AttributeConstraint::Required
    }

    pub fn is_computed(&self) -> bool {
        matches!(
            self.constraint,
            AttributeConstraint::Computed | AttributeConstraint::OptionalComputed
        )
    }

    /// Whether the user may set this attribute
    pub fn is_configurable(&self) -> bool {
        self.constraint != AttributeConstraint::Computed
    }

    /// Type check and run validators
    pub fn check(&self, value: &Value) -> Result<(), TypeError> {
        self.attr_type.validate(value)?;
        for validator in &self.validators {
            validator
                .check(value)
                .map_err(|message| TypeError::ValidationFailed { message })?;
        }
        Ok(())
    }

    /// Read-only copy, as used by data sources
    pub fn into_computed(self) -> Self {
        Self {
            attr_type: self.attr_type.into_computed(),
            constraint: AttributeConstraint::Computed,
            default: None,
            validators: Vec::new(),
            requires_replace: false,
            ..self
        }
    }
}

fn validate_attributes<'a>(
    schemas: impl Iterator<Item = &'a AttributeSchema>,
    values: &HashMap<String, Value>,
    errors: &mut Vec<TypeError>,
) {
    let mut known = Vec::new();
    for schema in schemas {
        known.push(schema.name.as_str());
        match values.get(&schema.name) {
            None => {
                if schema.is_required() && schema.default.is_none() {
                    errors.push(TypeError::MissingRequired {
                        name: schema.name.clone(),
                    });
                }
            }
            Some(_) if !schema.is_configurable() => {
                errors.push(TypeError::ComputedAttributeSet {
                    name: schema.name.clone(),
                });
            }
            Some(value) => {
                if let Err(e) = schema.check(value) {
                    errors.push(TypeError::AttributeError {
                        name: schema.name.clone(),
                        inner: Box::new(e),
                    });
                }
            }
        }
    }

    let mut unknown: Vec<&String> = values
        .keys()
        .filter(|k| !known.contains(&k.as_str()))
        .collect();
    unknown.sort();
    for name in unknown {
        errors.push(TypeError::UnknownAttribute { name: name.clone() });
    }
}

/// Resource schema
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResourceSchema {
    pub resource_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub attributes: BTreeMap<String, AttributeSchema>,
    /// Checks over the whole attribute map, such as top-level `ExactlyOneOf`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
}

impl ResourceSchema {
    pub fn new(resource_type: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            description: None,
            attributes: BTreeMap::new(),
            validators: Vec::new(),
        }
    }

    pub fn attribute(mut self, schema: AttributeSchema) -> Self {
        self.attributes.insert(schema.name.clone(), schema);
        self
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    pub fn get(&self, name: &str) -> Option<&AttributeSchema> {
        self.attributes.get(name)
    }

    /// Read-only copy of every attribute
    pub fn into_computed(self) -> Self {
        Self {
            attributes: self
                .attributes
                .into_iter()
                .map(|(name, attr)| (name, attr.into_computed()))
                .collect(),
            validators: Vec::new(),
            ..self
        }
    }

    /// Validate a configuration, collecting every problem found
    pub fn validate(&self, attributes: &Attributes) -> Result<(), Vec<TypeError>> {
        let mut errors = Vec::new();
        validate_attributes(self.attributes.values(), attributes, &mut errors);
        if !self.validators.is_empty() {
            let whole = Value::Map(attributes.clone());
            for validator in &self.validators {
                if let Err(message) = validator.check(&whole) {
                    errors.push(TypeError::ValidationFailed { message });
                }
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Helper functions for common types
pub mod types {
    use super::*;

    pub fn string_list() -> AttributeType {
        AttributeType::List(Box::new(AttributeType::String))
    }

    pub fn object_list(fields: Vec<AttributeSchema>) -> AttributeType {
        AttributeType::List(Box::new(AttributeType::Object(fields)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action_type() -> AttributeType {
        AttributeType::Object(vec![
            AttributeSchema::new("alert", AttributeType::Flag),
            AttributeSchema::new("drop", AttributeType::Flag),
            AttributeSchema::new(
                "block_ip",
                AttributeType::Object(vec![
                    AttributeSchema::new("duration", AttributeType::Int)
                        .with_validator(Validator::Between(1, 3600)),
                ]),
            ),
        ])
    }

    fn rules_schema() -> ResourceSchema {
        ResourceSchema::new("sase_test")
            .attribute(AttributeSchema::new("id", AttributeType::String).computed())
            .attribute(
                AttributeSchema::new("folder", AttributeType::String)
                    .required()
                    .with_validator(Validator::one_of(["Shared", "Mobile Users"])),
            )
            .attribute(
                AttributeSchema::new("name", AttributeType::String)
                    .required()
                    .with_validator(Validator::LengthAtMost(8)),
            )
            .attribute(
                AttributeSchema::new("action", action_type())
                    .with_validator(Validator::exactly_one_of(["alert", "drop", "block_ip"])),
            )
            .attribute(AttributeSchema::new("limit", AttributeType::Int).with_default(200))
    }

    fn attrs(pairs: Vec<(&str, Value)>) -> Attributes {
        pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
    }

    #[test]
    fn validate_string_type() {
        let t = AttributeType::String;
        assert!(t.validate(&Value::String("hello".to_string())).is_ok());
        assert!(t.validate(&Value::Int(42)).is_err());
    }

    #[test]
    fn float_accepts_integers() {
        assert!(AttributeType::Float.validate(&Value::Int(3)).is_ok());
        assert!(AttributeType::Float.validate(&Value::Float(2.5)).is_ok());
        assert!(AttributeType::Int.validate(&Value::Float(2.5)).is_err());
    }

    #[test]
    fn validate_list_item() {
        let t = types::string_list();
        let err = t
            .validate(&Value::List(vec![Value::from("a"), Value::Int(1)]))
            .unwrap_err();
        assert!(matches!(err, TypeError::ListItemError { index: 1, .. }));
    }

    #[test]
    fn valid_configuration() {
        let config = attrs(vec![
            ("folder", Value::from("Shared")),
            ("name", Value::from("default")),
            (
                "action",
                Value::Map(attrs(vec![("alert", Value::Bool(true)), ("drop", Value::Bool(false))])),
            ),
        ]);
        assert!(rules_schema().validate(&config).is_ok());
    }

    #[test]
    fn missing_required_attribute() {
        let errors = rules_schema()
            .validate(&attrs(vec![("name", Value::from("default"))]))
            .unwrap_err();
        assert_eq!(
            errors,
            vec![TypeError::MissingRequired {
                name: "folder".to_string()
            }]
        );
    }

    #[test]
    fn computed_and_unknown_attributes_are_rejected() {
        let config = attrs(vec![
            ("folder", Value::from("Shared")),
            ("name", Value::from("default")),
            ("id", Value::from("Shared:1")),
            ("colour", Value::from("red")),
        ]);
        let errors = rules_schema().validate(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].attribute(), Some("id"));
        assert_eq!(
            errors[1],
            TypeError::UnknownAttribute {
                name: "colour".to_string()
            }
        );
    }

    #[test]
    fn one_of_and_length_validators() {
        let config = attrs(vec![
            ("folder", Value::from("Elsewhere")),
            ("name", Value::from("much-too-long")),
        ]);
        let errors = rules_schema().validate(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        let text: Vec<String> = errors.iter().map(ToString::to_string).collect();
        assert!(text[0].contains("must be one of: Shared, Mobile Users"));
        assert!(text[1].contains("at most 8"));
    }

    #[test]
    fn exactly_one_action_flag() {
        let both = attrs(vec![
            ("folder", Value::from("Shared")),
            ("name", Value::from("default")),
            (
                "action",
                Value::Map(attrs(vec![("alert", Value::Bool(true)), ("drop", Value::Bool(true))])),
            ),
        ]);
        let errors = rules_schema().validate(&both).unwrap_err();
        assert!(errors[0].to_string().contains("got [alert, drop]"));

        let none = Value::Map(attrs(vec![("alert", Value::Bool(false))]));
        assert!(Validator::exactly_one_of(["alert", "drop"]).check(&none).is_err());
    }

    #[test]
    fn nested_validators_run() {
        let config = attrs(vec![
            ("folder", Value::from("Shared")),
            ("name", Value::from("default")),
            (
                "action",
                Value::Map(attrs(vec![(
                    "block_ip",
                    Value::Map(attrs(vec![("duration", Value::Int(0))])),
                )])),
            ),
        ]);
        let errors = rules_schema().validate(&config).unwrap_err();
        assert!(errors[0].to_string().contains("between 1 and 3600"));
    }

    #[test]
    fn schema_level_exactly_one_of() {
        let schema = ResourceSchema::new("sase_addresses")
            .attribute(AttributeSchema::new("ip_netmask", AttributeType::String))
            .attribute(AttributeSchema::new("fqdn", AttributeType::String))
            .with_validator(Validator::exactly_one_of(["ip_netmask", "fqdn"]));
        assert!(
            schema
                .validate(&attrs(vec![("fqdn", Value::from("example.com"))]))
                .is_ok()
        );
        let errors = schema
            .validate(&attrs(vec![
                ("fqdn", Value::from("example.com")),
                ("ip_netmask", Value::from("10.0.0.0/8")),
            ]))
            .unwrap_err();
        assert!(errors[0].to_string().contains("got [ip_netmask, fqdn]"));
        assert!(schema.into_computed().validators.is_empty());
    }

    #[test]
    fn one_of_applies_to_each_list_element() {
        let v = Validator::one_of(["tcp", "udp"]);
        assert!(v.check(&Value::List(vec![Value::from("tcp")])).is_ok());
        assert!(v.check(&Value::List(vec![Value::from("tcp"), Value::from("icmp")])).is_err());
    }

    #[test]
    fn matches_validator() {
        let v = Validator::Matches("^[0-9a-zA-Z._-]+$".to_string());
        assert!(v.check(&Value::from("web-servers_1")).is_ok());
        assert!(v.check(&Value::from("web servers")).is_err());
    }

    #[test]
    fn into_computed_strips_constraints() {
        let schema = rules_schema().into_computed();
        let folder = schema.get("folder").unwrap();
        assert_eq!(folder.constraint, AttributeConstraint::Computed);
        assert!(folder.validators.is_empty());
        assert!(schema.get("limit").unwrap().default.is_none());

        let fields = schema.get("action").unwrap().attr_type.object_fields().unwrap();
        assert!(fields.iter().all(|f| f.constraint == AttributeConstraint::Computed));
    }
}
