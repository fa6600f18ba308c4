//! SASE resource and data source schemas
//!
//! The object-specific attributes come from `generated`. This module adds
//! the identifying attributes every object shares and derives the three
//! schemas (resource, single data source, list data source) from one config.

pub mod generated;

use sase_core::id::IdFormat;
use sase_core::schema::{AttributeSchema, AttributeType, ResourceSchema, Validator, types};

pub use generated::{SaseSchemaConfig, Scope};

/// Folders an object can live in
pub const FOLDERS: &[&str] = &[
    "Shared",
    "Mobile Users",
    "Remote Networks",
    "Service Connections",
    "Mobile Users Container",
    "Mobile Users Explicit Proxy",
];

pub const DEFAULT_LIST_LIMIT: i64 = 200;
pub const MAX_LIST_LIMIT: i64 = 5000;

/// ID of an object in a folder, also used by single-object data sources
pub const FOLDER_ID: IdFormat = IdFormat::new(&["folder", "object_id"]);
const POSITION_ID: IdFormat = IdFormat::new(&["position", "folder", "object_id"]);
const FOLDER_LIST_ID: IdFormat = IdFormat::new(&["limit", "offset", "name", "folder"]);
const GLOBAL_LIST_ID: IdFormat = IdFormat::new(&["limit", "offset", "name"]);

impl Scope {
    /// Composite ID of a resource in this scope
    pub fn id_format(&self) -> IdFormat {
        match self {
            Scope::Folder | Scope::Global => FOLDER_ID,
            Scope::Position => POSITION_ID,
        }
    }

    /// Composite ID of a list data source in this scope
    pub fn list_id_format(&self) -> IdFormat {
        match self {
            Scope::Folder | Scope::Position => FOLDER_LIST_ID,
            Scope::Global => GLOBAL_LIST_ID,
        }
    }
}

pub fn id_attribute() -> AttributeSchema {
    AttributeSchema::new("id", AttributeType::String)
        .computed()
        .with_description("The Terraform ID.")
}

pub fn object_id_attribute() -> AttributeSchema {
    AttributeSchema::new("object_id", AttributeType::String)
        .computed()
        .with_description("The object's UUID.")
        .with_provider_name("id")
}

pub fn folder_attribute() -> AttributeSchema {
    AttributeSchema::new("folder", AttributeType::String)
        .required()
        .with_description("The folder of the item.")
        .with_validator(Validator::one_of(FOLDERS.iter().copied()))
        .requires_replace()
}

pub fn position_attribute() -> AttributeSchema {
    AttributeSchema::new("position", AttributeType::String)
        .required()
        .with_description("The position of a security rule.")
        .with_validator(Validator::one_of(["pre", "post"]))
        .requires_replace()
}

/// Schema of the managed resource
pub fn resource_schema(config: &SaseSchemaConfig) -> ResourceSchema {
    let schema = config
        .schema
        .clone()
        .attribute(id_attribute())
        .attribute(object_id_attribute());
    match config.scope {
        Scope::Folder => schema.attribute(folder_attribute()),
        Scope::Position => schema
            .attribute(folder_attribute())
            .attribute(position_attribute()),
        Scope::Global => schema,
    }
}

/// Schema of the data source that reads one object by UUID
pub fn data_source_schema(config: &SaseSchemaConfig) -> ResourceSchema {
    config
        .schema
        .clone()
        .into_computed()
        .attribute(id_attribute())
        .attribute(
            AttributeSchema::new("object_id", AttributeType::String)
                .required()
                .with_description("The object's UUID."),
        )
        .attribute(
            AttributeSchema::new("folder", AttributeType::String)
                .with_description("The folder of the item.")
                .with_validator(Validator::one_of(FOLDERS.iter().copied())),
        )
}

/// Attributes of one entry in a list data source's `data`
pub fn list_item_schema(config: &SaseSchemaConfig) -> ResourceSchema {
    let schema = config.schema.clone().into_computed();
    match config.scope {
        Scope::Global => schema,
        Scope::Folder | Scope::Position => schema.attribute(object_id_attribute()),
    }
}

/// Schema of the data source that lists objects
pub fn list_data_source_schema(config: &SaseSchemaConfig) -> ResourceSchema {
    let item = list_item_schema(config);
    let schema = ResourceSchema::new(config.list_type_name)
        .with_description(format!(
            "Retrieves a listing of config items for {}.",
            config.type_name
        ))
        .attribute(id_attribute())
        .attribute(
            AttributeSchema::new("limit", AttributeType::Int)
                .with_default(DEFAULT_LIST_LIMIT)
                .with_description("The max count in result entry (count per page).")
                .with_validator(Validator::Between(1, MAX_LIST_LIMIT)),
        )
        .attribute(
            AttributeSchema::new("offset", AttributeType::Int)
                .with_default(0)
                .with_description("The offset of the result entry.")
                .with_validator(Validator::Between(0, i64::MAX)),
        )
        .attribute(
            AttributeSchema::new("name", AttributeType::String)
                .with_description("The name of the entry."),
        )
        .attribute(
            AttributeSchema::new(
                "data",
                types::object_list(item.attributes.into_values().collect()),
            )
            .computed()
            .with_description("The data."),
        )
        .attribute(
            AttributeSchema::new("total", AttributeType::Int)
                .computed()
                .with_description("The total number of items."),
        );
    match config.scope {
        Scope::Folder => schema.attribute(
            AttributeSchema::new("folder", AttributeType::String)
                .required()
                .with_description("The folder of the entry.")
                .with_validator(Validator::one_of(FOLDERS.iter().copied())),
        ),
        Scope::Position => schema
            .attribute(
                AttributeSchema::new("folder", AttributeType::String)
                    .required()
                    .with_description("The folder of the entry.")
                    .with_validator(Validator::one_of(FOLDERS.iter().copied())),
            )
            .attribute(
                AttributeSchema::new("position", AttributeType::String)
                    .with_description("The position of a security rule.")
                    .with_validator(Validator::one_of(["pre", "post"])),
            ),
        Scope::Global => schema,
    }
}

/// Attributes accepted in the provider configuration block
pub fn provider_schema() -> ResourceSchema {
    ResourceSchema::new("sase")
        .with_description("Provider for Prisma SASE configuration.")
        .attribute(
            AttributeSchema::new("host", AttributeType::String)
                .with_description("The hostname of the API. Environment variable: SASE_HOST."),
        )
        .attribute(
            AttributeSchema::new("auth_url", AttributeType::String).with_description(
                "The OAuth2 token URL. Environment variable: SASE_AUTH_URL.",
            ),
        )
        .attribute(
            AttributeSchema::new("client_id", AttributeType::String)
                .with_description("The client ID. Environment variable: SASE_CLIENT_ID."),
        )
        .attribute(
            AttributeSchema::new("client_secret", AttributeType::String)
                .sensitive()
                .with_description("The client secret. Environment variable: SASE_CLIENT_SECRET."),
        )
        .attribute(
            AttributeSchema::new("scope", AttributeType::String)
                .with_description("The client scope (tsg_id:<id>). Environment variable: SASE_SCOPE."),
        )
        .attribute(
            AttributeSchema::new("protocol", AttributeType::String)
                .with_description("The protocol of the API. Environment variable: SASE_PROTOCOL.")
                .with_validator(Validator::one_of(["https", "http"])),
        )
        .attribute(
            AttributeSchema::new("port", AttributeType::Int)
                .with_description("The port number to use; 0 keeps the protocol default. Environment variable: SASE_PORT.")
                .with_validator(Validator::Between(0, 65535)),
        )
        .attribute(
            AttributeSchema::new("timeout", AttributeType::Int)
                .with_description("Request timeout in seconds. Environment variable: SASE_TIMEOUT.")
                .with_validator(Validator::Between(1, 3600)),
        )
        .attribute(
            AttributeSchema::new("headers", AttributeType::Map(Box::new(AttributeType::String)))
                .with_description("Custom HTTP headers sent with every API request."),
        )
        .attribute(
            AttributeSchema::new("skip_verify_certificate", AttributeType::Bool).with_description(
                "Skip TLS certificate verification. Environment variable: SASE_SKIP_VERIFY_CERTIFICATE.",
            ),
        )
        .attribute(
            AttributeSchema::new("logging", types::string_list())
                .with_description("Logging categories. Environment variable: SASE_LOGGING.")
                .with_validator(Validator::one_of(["quiet", "action", "path", "send", "receive"])),
        )
        .attribute(
            AttributeSchema::new("auth_file", AttributeType::String).with_description(
                "Path to a JSON file holding provider settings. Environment variable: SASE_AUTH_FILE.",
            ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use sase_core::resource::{Attributes, Value};
    use sase_core::schema::AttributeConstraint;

    fn config(scope: Scope) -> SaseSchemaConfig {
        SaseSchemaConfig {
            type_name: "sase_things",
            list_type_name: "sase_things_list",
            scope,
            schema: ResourceSchema::new("sase_things").attribute(
                AttributeSchema::new("name", AttributeType::String)
                    .required()
                    .with_provider_name("name"),
            ),
        }
    }

    #[test]
    fn position_scope_adds_position() {
        let schema = resource_schema(&config(Scope::Position));
        assert!(schema.get("position").unwrap().requires_replace);
        assert!(schema.get("folder").unwrap().requires_replace);
        assert_eq!(Scope::Position.id_format().fields(), ["position", "folder", "object_id"]);
    }

    #[test]
    fn data_source_requires_object_id() {
        let schema = data_source_schema(&config(Scope::Folder));
        assert!(schema.get("object_id").unwrap().is_required());
        assert_eq!(
            schema.get("name").unwrap().constraint,
            AttributeConstraint::Computed
        );
        assert!(!schema.get("folder").unwrap().is_required());
    }

    #[test]
    fn list_schema_defaults() {
        let schema = list_data_source_schema(&config(Scope::Folder));
        assert_eq!(schema.resource_type, "sase_things_list");
        assert_eq!(schema.get("limit").unwrap().default, Some(Value::Int(200)));
        assert_eq!(schema.get("offset").unwrap().default, Some(Value::Int(0)));
        let item = schema.get("data").unwrap().attr_type.object_fields().unwrap();
        assert!(item.iter().any(|f| f.name == "object_id"));
        assert!(schema.get("position").is_none());
    }

    #[test]
    fn folder_must_be_known() {
        let schema = resource_schema(&config(Scope::Folder));
        let attrs: Attributes = [
            ("name".to_string(), Value::from("x")),
            ("folder".to_string(), Value::from("Nowhere")),
        ]
        .into();
        assert!(schema.validate(&attrs).is_err());
    }
}
