//! Plan - Compute the desired attributes of a resource before applying
//!
//! Planning is pure: defaults are filled in, computed values are carried
//! over from prior state and replacement-triggering changes are detected.
//! No side effects occur until the plan is applied.

use std::fmt;

use crate::resource::{Attributes, State, Value};
use crate::schema::{AttributeSchema, AttributeType, ResourceSchema};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanAction {
    Create,
    Update,
    /// Delete the existing object and create a new one
    Replace,
    NoOp,
}

impl fmt::Display for PlanAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlanAction::Create => "create",
            PlanAction::Update => "update in-place",
            PlanAction::Replace => "destroy and then create replacement",
            PlanAction::NoOp => "no changes",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub action: PlanAction,
    pub planned: Attributes,
    /// Attributes whose change forces replacement, sorted by name
    pub requires_replace: Vec<String>,
}

/// Plan a resource change from its configuration and prior state
pub fn plan_resource(schema: &ResourceSchema, config: &Attributes, prior: Option<&State>) -> Plan {
    let mut planned = config.clone();
    apply_defaults(schema.attributes.values(), &mut planned);

    let Some(prior) = prior.filter(|p| p.exists) else {
        return Plan {
            action: PlanAction::Create,
            planned,
            requires_replace: Vec::new(),
        };
    };

    let requires_replace: Vec<String> = schema
        .attributes
        .values()
        .filter(|attr| attr.requires_replace)
        .filter(|attr| prior.attributes.get(&attr.name) != planned.get(&attr.name))
        .map(|attr| attr.name.clone())
        .collect();

    if !requires_replace.is_empty() {
        return Plan {
            action: PlanAction::Replace,
            planned,
            requires_replace,
        };
    }

    // Use state for unknown: computed values survive an in-place update
    for attr in schema.attributes.values().filter(|a| a.is_computed()) {
        if !planned.contains_key(&attr.name)
            && let Some(value) = prior.attributes.get(&attr.name)
        {
            planned.insert(attr.name.clone(), value.clone());
        }
    }

    let action = if planned == prior.attributes {
        PlanAction::NoOp
    } else {
        PlanAction::Update
    };

    Plan {
        action,
        planned,
        requires_replace,
    }
}

/// Fill null attributes that declare a default, recursing into nested blocks.
///
/// Integers given for Float attributes are widened so they compare equal to
/// the value read back from the API.
pub fn apply_defaults<'a>(
    schemas: impl Iterator<Item = &'a AttributeSchema>,
    values: &mut Attributes,
) {
    for schema in schemas {
        match values.get_mut(&schema.name) {
            None => {
                if let Some(default) = &schema.default {
                    values.insert(schema.name.clone(), default.clone());
                }
            }
            Some(value) => apply_nested_defaults(&schema.attr_type, value),
        }
    }
}

fn apply_nested_defaults(attr_type: &AttributeType, value: &mut Value) {
    if let (AttributeType::Float, &Value::Int(n)) = (attr_type, &*value) {
        *value = Value::Float(n as f64);
        return;
    }
    match (attr_type, value) {
        (AttributeType::Object(fields), Value::Map(map)) => apply_defaults(fields.iter(), map),
        (AttributeType::List(inner), Value::List(items)) => {
            for item in items {
                apply_nested_defaults(inner, item);
            }
        }
        (AttributeType::Map(inner), Value::Map(map)) => {
            for item in map.values_mut() {
                apply_nested_defaults(inner, item);
            }
        }
        _ => {}
    }
}
