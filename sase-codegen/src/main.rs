//! OpenAPI Schema to SASE Schema Code Generator
//!
//! This tool generates Rust schema code for sase-provider from the component
//! schemas of the Prisma SASE config OpenAPI document.
//!
//! Usage:
//!   # Generate from file
//!   sase-codegen --file openapi.json --schema addresses --type-name sase_addresses
//!
//!   # Position-scoped rules, written straight into the provider
//!   sase-codegen --file openapi.json --schema app-override-rules \
//!     --type-name sase_app_override_rules --scope position \
//!     --output sase-provider/src/schemas/generated/app_override_rules.rs

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use heck::ToSnakeCase;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::io::{self, Read};

/// Properties every object shares; the provider adds these itself
const IDENTIFYING_PROPERTIES: &[&str] = &["id", "folder", "snippet", "device", "position"];

#[derive(Parser, Debug)]
#[command(name = "sase-codegen")]
#[command(about = "Generate SASE schema code from OpenAPI component schemas")]
struct Args {
    /// Component schema name (e.g., addresses)
    #[arg(long)]
    schema: String,

    /// Terraform type name (e.g., sase_addresses)
    #[arg(long)]
    type_name: String,

    /// Where objects of this type live
    #[arg(long, value_enum, default_value_t = ScopeArg::Folder)]
    scope: ScopeArg,

    /// Input file (reads from stdin if not specified)
    #[arg(long)]
    file: Option<String>,

    /// Output file (writes to stdout if not specified)
    #[arg(long, short)]
    output: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ScopeArg {
    Folder,
    Position,
    Global,
}

impl ScopeArg {
    fn variant(self) -> &'static str {
        match self {
            ScopeArg::Folder => "Scope::Folder",
            ScopeArg::Position => "Scope::Position",
            ScopeArg::Global => "Scope::Global",
        }
    }
}

/// The parts of an OpenAPI document the generator reads
#[derive(Debug, Deserialize)]
struct OpenApiDoc {
    components: Components,
}

#[derive(Debug, Deserialize)]
struct Components {
    #[serde(default)]
    schemas: HashMap<String, OaSchema>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OaSchema {
    #[serde(rename = "type")]
    schema_type: Option<String>,
    description: Option<String>,
    #[serde(default)]
    properties: BTreeMap<String, OaSchema>,
    #[serde(default)]
    required: Vec<String>,
    items: Option<Box<OaSchema>>,
    #[serde(rename = "$ref")]
    ref_path: Option<String>,
    #[serde(rename = "enum")]
    enum_values: Option<Vec<serde_json::Value>>,
    min_length: Option<u64>,
    max_length: Option<u64>,
    max_items: Option<u64>,
    minimum: Option<f64>,
    maximum: Option<f64>,
    pattern: Option<String>,
    #[serde(default)]
    one_of: Vec<OaSchema>,
    #[serde(default)]
    read_only: bool,
    default: Option<serde_json::Value>,
}

impl OaSchema {
    fn is_object(&self) -> bool {
        self.schema_type.as_deref() == Some("object")
            || !self.properties.is_empty()
            || !self.one_of.is_empty()
    }

    /// Names of the properties that belong to `oneOf` branches
    fn one_of_names(&self) -> Vec<String> {
        let names: BTreeSet<String> = self
            .one_of
            .iter()
            .flat_map(|branch| {
                branch
                    .properties
                    .keys()
                    .chain(branch.required.iter())
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .collect();
        names.into_iter().collect()
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Read OpenAPI JSON
    let doc_json = if let Some(file_path) = &args.file {
        std::fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path))?
    } else {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        buffer
    };

    let doc: OpenApiDoc =
        serde_json::from_str(&doc_json).context("Failed to parse OpenAPI document")?;

    let code = generate_schema_code(&doc, &args.schema, &args.type_name, args.scope)?;

    if let Some(output_path) = &args.output {
        std::fs::write(output_path, &code)
            .with_context(|| format!("Failed to write to: {}", output_path))?;
        eprintln!("Generated: {}", output_path);
    } else {
        println!("{}", code);
    }

    Ok(())
}

fn generate_schema_code(
    doc: &OpenApiDoc,
    component: &str,
    type_name: &str,
    scope: ScopeArg,
) -> Result<String> {
    let Some(resource) = type_name.strip_prefix("sase_") else {
        bail!("Type name must start with 'sase_': {}", type_name);
    };
    let schema = doc
        .components
        .schemas
        .get(component)
        .with_context(|| format!("No component schema named '{}'", component))?;

    let mut generator = Generator::new(doc);
    let mut body = String::new();

    let attributes: Vec<(&String, &OaSchema)> = merged_properties(schema)
        .into_iter()
        .filter(|(name, _)| !IDENTIFYING_PROPERTIES.contains(&name.as_str()))
        .collect();

    let description = schema
        .description
        .as_deref()
        .map(|d| escape(d, 200))
        .unwrap_or_else(|| format!("{} objects.", component));
    let terminator = if attributes.is_empty() && schema.one_of.is_empty() {
        ","
    } else {
        ""
    };
    body.push_str(&format!(
        "        .with_description(\"{}\"){}\n",
        description, terminator
    ));

    for (i, &(name, prop)) in attributes.iter().enumerate() {
        let required = schema.required.contains(name);
        let attr = generator.attribute(None, name, prop, required, 12)?;
        let closing = if i + 1 == attributes.len() && schema.one_of.is_empty() {
            "        ),\n"
        } else {
            "        )\n"
        };
        body.push_str(&format!("        .attribute(\n{},\n{}", attr, closing));
    }
    if !schema.one_of.is_empty() {
        body.push_str(&format!(
            "        .with_validator({}),\n",
            exactly_one_of(&schema.one_of_names())
        ));
    }

    let mut code = String::new();
    let validator_import = if body.contains("Validator::")
        || generator.helpers.iter().any(|h| h.contains("Validator::"))
    {
        ", Validator"
    } else {
        ""
    };
    code.push_str(&format!(
        r#"//! {resource} schema definition for Prisma SASE
//!
//! Auto-generated from OpenAPI schema: {component}
//!
//! DO NOT EDIT MANUALLY - regenerate with sase-codegen

use super::{{SaseSchemaConfig, Scope}};
use sase_core::schema::{{AttributeSchema, AttributeType, ResourceSchema{validator_import}}};

/// Returns the schema config for {type_name} ({component})
pub fn {resource}_config() -> SaseSchemaConfig {{
    SaseSchemaConfig {{
        type_name: "{type_name}",
        list_type_name: "{type_name}_list",
        scope: {scope},
        schema: ResourceSchema::new("{type_name}")
"#,
        scope = scope.variant(),
    ));
    code.push_str(&body);
    code.push_str("    }\n}\n");

    for helper in &generator.helpers {
        code.push('\n');
        code.push_str(helper);
    }

    Ok(code)
}

/// Own properties plus those of `oneOf` branches
fn merged_properties(schema: &OaSchema) -> BTreeMap<&String, &OaSchema> {
    let mut properties: BTreeMap<&String, &OaSchema> = schema.properties.iter().collect();
    for branch in &schema.one_of {
        properties.extend(branch.properties.iter());
    }
    properties
}

struct Generator<'a> {
    doc: &'a OpenApiDoc,
    /// Helper functions for nested objects, in discovery order
    helpers: Vec<String>,
}

impl<'a> Generator<'a> {
    fn new(doc: &'a OpenApiDoc) -> Self {
        Self {
            doc,
            helpers: Vec::new(),
        }
    }

    /// Follow `$ref` to `#/components/schemas/<name>`
    fn resolve(&self, schema: &'a OaSchema) -> Result<&'a OaSchema> {
        let Some(ref_path) = &schema.ref_path else {
            return Ok(schema);
        };
        let name = ref_path
            .strip_prefix("#/components/schemas/")
            .with_context(|| format!("Unsupported $ref: {}", ref_path))?;
        let target = self
            .doc
            .components
            .schemas
            .get(name)
            .with_context(|| format!("Unresolved $ref: {}", ref_path))?;
        self.resolve(target)
    }

    /// Generate one `AttributeSchema` expression, without a trailing comma
    fn attribute(
        &mut self,
        parent: Option<&str>,
        prop_name: &str,
        prop: &'a OaSchema,
        required: bool,
        indent: usize,
    ) -> Result<String> {
        let prop = self.resolve(prop)?;
        let attr_name = prop_name.to_snake_case();
        let path = match parent {
            Some(parent) => format!("{}_{}", parent, attr_name),
            None => attr_name.clone(),
        };
        let attr_type = self.attribute_type(&path, prop)?;

        let pad = " ".repeat(indent);
        let chain = " ".repeat(indent + 4);
        let mut code = format!("{}AttributeSchema::new(\"{}\", {})", pad, attr_name, attr_type);

        if prop.read_only {
            code.push_str(&format!("\n{}.computed()", chain));
        } else if required {
            code.push_str(&format!("\n{}.required()", chain));
        }
        if let Some(desc) = &prop.description {
            code.push_str(&format!("\n{}.with_description(\"{}\")", chain, escape(desc, 150)));
        }
        code.push_str(&format!("\n{}.with_provider_name(\"{}\")", chain, prop_name));
        for validator in self.validators(prop)? {
            code.push_str(&format!("\n{}.with_validator({})", chain, validator));
        }
        if let Some(default) = prop.default.as_ref().and_then(default_literal) {
            code.push_str(&format!("\n{}.with_default({})", chain, default));
        }
        Ok(code)
    }

    fn attribute_type(&mut self, path: &str, prop: &'a OaSchema) -> Result<String> {
        let prop = self.resolve(prop)?;
        if prop.enum_values.is_some() {
            return Ok("AttributeType::String".to_string());
        }
        let attr_type = match prop.schema_type.as_deref() {
            Some("string") => "AttributeType::String".to_string(),
            Some("integer") => "AttributeType::Int".to_string(),
            Some("number") => "AttributeType::Float".to_string(),
            Some("boolean") => "AttributeType::Bool".to_string(),
            Some("array") => {
                let item_type = match &prop.items {
                    Some(items) => self.attribute_type(path, items)?,
                    None => "AttributeType::String".to_string(),
                };
                format!("AttributeType::List(Box::new({}))", item_type)
            }
            _ if prop.is_object() => {
                if merged_properties(prop).is_empty() {
                    "AttributeType::Flag".to_string()
                } else {
                    self.object_type(path, prop)?
                }
            }
            _ => "AttributeType::String".to_string(),
        };
        Ok(attr_type)
    }

    /// Emit a helper function for a nested object and return a call to it
    fn object_type(&mut self, path: &str, prop: &'a OaSchema) -> Result<String> {
        let fn_name = format!("{}_type", path);
        let slot = self.helpers.len();
        self.helpers.push(String::new());

        let mut fields = Vec::new();
        for (name, field) in merged_properties(prop) {
            let required = prop.required.contains(name);
            fields.push(self.attribute(Some(path), name, field, required, 8)?);
        }
        let mut helper = format!(
            "fn {}() -> AttributeType {{\n    AttributeType::Object(vec![\n",
            fn_name
        );
        for field in fields {
            helper.push_str(&field);
            helper.push_str(",\n");
        }
        helper.push_str("    ])\n}\n");
        self.helpers[slot] = helper;
        Ok(format!("{}()", fn_name))
    }

    fn validators(&self, prop: &'a OaSchema) -> Result<Vec<String>> {
        let mut validators = Vec::new();
        // Constraints on array items apply to every element
        let (scalar, max_items) = match (&prop.items, prop.schema_type.as_deref()) {
            (Some(items), Some("array")) => (self.resolve(items)?, prop.max_items),
            _ => (prop, None),
        };

        if let Some(values) = &scalar.enum_values {
            let values: Vec<String> = values
                .iter()
                .filter_map(|v| v.as_str())
                .map(|v| format!("\"{}\"", v))
                .collect();
            validators.push(format!("Validator::one_of([{}])", values.join(", ")));
        }
        if let Some(min) = scalar.min_length {
            validators.push(format!("Validator::LengthAtLeast({})", min));
        }
        if let Some(max) = scalar.max_length {
            validators.push(format!("Validator::LengthAtMost({})", max));
        }
        if let Some(pattern) = &scalar.pattern {
            validators.push(format!(
                "Validator::Matches(\"{}\".to_string())",
                pattern.replace('\\', "\\\\").replace('"', "\\\"")
            ));
        }
        if scalar.minimum.is_some() || scalar.maximum.is_some() {
            validators.push(range_validator(scalar));
        }
        if let Some(max) = max_items {
            validators.push(format!("Validator::SizeAtMost({})", max));
        }
        if !scalar.one_of.is_empty() {
            validators.push(exactly_one_of(&scalar.one_of_names()));
        }
        Ok(validators)
    }
}

fn range_validator(prop: &OaSchema) -> String {
    if prop.schema_type.as_deref() == Some("number") {
        let min = prop.minimum.map_or("f64::MIN".to_string(), |m| format!("{:?}", m));
        let max = prop.maximum.map_or("f64::MAX".to_string(), |m| format!("{:?}", m));
        format!("Validator::FloatBetween({}, {})", min, max)
    } else {
        let min = prop.minimum.map_or("i64::MIN".to_string(), |m| (m as i64).to_string());
        let max = prop.maximum.map_or("i64::MAX".to_string(), |m| (m as i64).to_string());
        format!("Validator::Between({}, {})", min, max)
    }
}

fn exactly_one_of(names: &[String]) -> String {
    let names: Vec<String> = names
        .iter()
        .map(|n| format!("\"{}\"", n.to_snake_case()))
        .collect();
    format!("Validator::exactly_one_of([{}])", names.join(", "))
}

fn default_literal(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(format!("\"{}\"", s.replace('"', "\\\""))),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        serde_json::Value::Number(n) if n.is_i64() => Some(n.to_string()),
        serde_json::Value::Number(n) => n.as_f64().map(|f| format!("{:?}", f)),
        _ => None,
    }
}

/// Escape a description for a Rust string literal, truncated to `max` characters
fn escape(text: &str, max: usize) -> String {
    let escaped = text
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', " ")
        .replace("  ", " ");
    if escaped.chars().count() > max {
        let truncated: String = escaped.chars().take(max).collect();
        format!("{}...", truncated.trim_end_matches('\\'))
    } else {
        escaped
    }
}
