//! Composite resource IDs
//!
//! Terraform IDs are built by joining identifying fields with [`ID_SEPARATOR`]
//! and split back apart when a resource is read, updated, deleted or imported.

use std::collections::HashMap;

use crate::resource::{Attributes, Value};

/// Separator between the tokens of a composite ID
pub const ID_SEPARATOR: &str = ":";

/// Separator used inside a single token to carry a list of strings
pub const LIST_SEPARATOR: &str = ",";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    #[error("Expected {expected} tokens in ID '{id}', got {actual}")]
    TokenCount {
        id: String,
        expected: usize,
        actual: usize,
    },

    #[error("ID token '{name}' is empty in '{id}'")]
    EmptyToken { id: String, name: String },
}

/// Join tokens into a composite ID
pub fn encode<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(ID_SEPARATOR)
}

/// Split a composite ID, requiring exactly `expected` tokens
pub fn decode(id: &str, expected: usize) -> Result<Vec<String>, IdError> {
    let tokens: Vec<String> = id.split(ID_SEPARATOR).map(str::to_string).collect();
    if tokens.len() != expected {
        return Err(IdError::TokenCount {
            id: id.to_string(),
            expected,
            actual: tokens.len(),
        });
    }
    Ok(tokens)
}

pub fn encode_string_slice<S: AsRef<str>>(values: &[S]) -> String {
    values
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

/// Inverse of [`encode_string_slice`]; the empty string is the empty list
pub fn decode_string_slice(value: &str) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    value.split(LIST_SEPARATOR).map(str::to_string).collect()
}

/// Ordered attribute names that make up a resource type's ID.
///
/// The same descriptor drives both directions, so the join order used on
/// create always matches the split order used on read, update and delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdFormat {
    fields: &'static [&'static str],
}

impl IdFormat {
    pub const fn new(fields: &'static [&'static str]) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &'static [&'static str] {
        self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Build the ID from attribute values.
    ///
    /// Missing attributes become empty tokens, integers are written in
    /// decimal and string lists go through [`encode_string_slice`].
    pub fn encode(&self, attributes: &Attributes) -> String {
        let tokens: Vec<String> = self
            .fields
            .iter()
            .map(|field| match attributes.get(*field) {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Int(n)) => n.to_string(),
                Some(Value::List(items)) => {
                    let strings: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
                    encode_string_slice(&strings)
                }
                _ => String::new(),
            })
            .collect();
        encode(&tokens)
    }

    /// Split the ID into named tokens. Empty tokens are left out of the result.
    pub fn decode(&self, id: &str) -> Result<IdTokens, IdError> {
        let tokens = decode(id, self.fields.len())?;
        let values = self
            .fields
            .iter()
            .zip(tokens)
            .filter(|(_, token)| !token.is_empty())
            .map(|(field, token)| (*field, token))
            .collect();
        Ok(IdTokens {
            id: id.to_string(),
            values,
        })
    }
}

/// Named tokens of a decoded ID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdTokens {
    id: String,
    values: HashMap<&'static str, String>,
}

impl IdTokens {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Token that must not be empty
    pub fn require(&self, name: &str) -> Result<&str, IdError> {
        self.get(name).ok_or_else(|| IdError::EmptyToken {
            id: self.id.clone(),
            name: name.to_string(),
        })
    }

    /// Copy the tokens into an attribute map as strings
    pub fn write_into(&self, attributes: &mut Attributes) {
        for (name, value) in &self.values {
            attributes.insert(name.to_string(), Value::String(value.clone()));
        }
    }
}
