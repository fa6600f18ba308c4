use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use sase_core::diagnostics::{Diagnostics, Severity};
use sase_core::lifecycle::ProviderServer;
use sase_core::plan::{Plan, PlanAction};
use sase_core::resource::{Attributes, State, Value};
use sase_provider::config::{DEFAULT_HOST, DEFAULT_PROTOCOL};
use sase_provider::{ProviderConfig, SaseClient, SaseProvider};

#[derive(Parser)]
#[command(name = "sase")]
#[command(about = "Manage Prisma SASE configuration objects", long_about = None)]
struct Cli {
    #[command(flatten)]
    provider: ProviderArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Provider settings; anything left unset falls back to the auth file and defaults
#[derive(Args)]
struct ProviderArgs {
    /// API hostname
    #[arg(long, global = true, env = "SASE_HOST")]
    host: Option<String>,

    /// OAuth2 client ID
    #[arg(long, global = true, env = "SASE_CLIENT_ID")]
    client_id: Option<String>,

    /// OAuth2 client secret
    #[arg(long, global = true, env = "SASE_CLIENT_SECRET", hide_env_values = true)]
    client_secret: Option<String>,

    /// OAuth2 scope (e.g., "tsg_id:1234567890")
    #[arg(long, global = true, env = "SASE_SCOPE")]
    scope: Option<String>,

    /// JSON file with provider settings
    #[arg(long, global = true, env = "SASE_AUTH_FILE")]
    auth_file: Option<String>,
}

impl ProviderArgs {
    fn into_config(self) -> ProviderConfig {
        ProviderConfig {
            host: self.host,
            client_id: self.client_id,
            client_secret: self.client_secret,
            scope: self.scope,
            auth_file: self.auth_file,
            ..Default::default()
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print resource and data source schemas as JSON
    Schema {
        /// Only print this resource or data source type
        #[arg(long = "type")]
        type_name: Option<String>,
    },
    /// Validate a resource configuration file
    Validate {
        #[arg(long = "type")]
        type_name: String,
        /// Path to a JSON attribute map
        config: PathBuf,
    },
    /// Show what apply would do, without calling the API
    Plan {
        #[arg(long = "type")]
        type_name: String,
        /// Path to a JSON attribute map
        config: PathBuf,
        /// Path to the state file
        #[arg(long)]
        state: Option<PathBuf>,
    },
    /// Create, update or replace the resource to match the configuration
    Apply {
        #[arg(long = "type")]
        type_name: String,
        /// Path to a JSON attribute map
        config: PathBuf,
        /// Path to the state file, written after apply
        #[arg(long, default_value = "sase.state.json")]
        state: PathBuf,
    },
    /// Re-read the resource and update the state file
    Refresh {
        #[arg(long = "type")]
        type_name: String,
        #[arg(long, default_value = "sase.state.json")]
        state: PathBuf,
    },
    /// Delete the resource recorded in the state file
    Destroy {
        #[arg(long = "type")]
        type_name: String,
        #[arg(long, default_value = "sase.state.json")]
        state: PathBuf,

        /// Skip confirmation prompt (auto-approve)
        #[arg(long)]
        auto_approve: bool,
    },
    /// Import an existing object by ID into a state file
    Import {
        #[arg(long = "type")]
        type_name: String,
        /// Composite ID (e.g., "Shared:<uuid>")
        id: String,
        #[arg(long, default_value = "sase.state.json")]
        state: PathBuf,
    },
    /// Read a data source and print its state
    Data {
        #[arg(long = "type")]
        type_name: String,
        /// Path to a JSON attribute map
        config: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let provider = cli.provider;

    let result = match cli.command {
        Commands::Schema { type_name } => run_schema(type_name.as_deref()),
        Commands::Validate { type_name, config } => run_validate(&type_name, &config),
        Commands::Plan {
            type_name,
            config,
            state,
        } => run_plan(&type_name, &config, state.as_deref()),
        Commands::Apply {
            type_name,
            config,
            state,
        } => run_apply(provider, &type_name, &config, &state).await,
        Commands::Refresh { type_name, state } => run_refresh(provider, &type_name, &state).await,
        Commands::Destroy {
            type_name,
            state,
            auto_approve,
        } => run_destroy(provider, &type_name, &state, auto_approve).await,
        Commands::Import {
            type_name,
            id,
            state,
        } => run_import(provider, &type_name, &id, &state).await,
        Commands::Data { type_name, config } => run_data(provider, &type_name, &config).await,
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

/// Server for commands that never reach the API
fn offline_server() -> Result<ProviderServer> {
    let base_url = format!("{}://{}", DEFAULT_PROTOCOL, DEFAULT_HOST);
    let client = SaseClient::with_base_url("", base_url)?;
    Ok(ProviderServer::new(SaseProvider::new(client)))
}

async fn connect(args: ProviderArgs) -> Result<ProviderServer> {
    let config = ProviderConfig::load(args.into_config())?;
    let provider = SaseProvider::from_config(&config)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e.detail()))
        .context("Failed to configure provider")?;
    Ok(ProviderServer::new(provider))
}

fn run_schema(type_name: Option<&str>) -> Result<()> {
    let server = offline_server()?;
    let json = match type_name {
        None => serde_json::to_string_pretty(&server.schemas())?,
        Some(name) => {
            let schema = server
                .resource_schema(name)
                .or_else(|| server.data_source_schema(name))
                .with_context(|| format!("Unknown resource or data source type '{}'", name))?;
            serde_json::to_string_pretty(&schema)?
        }
    };
    println!("{}", json);
    Ok(())
}

fn run_validate(type_name: &str, config: &Path) -> Result<()> {
    let config = read_attributes(config)?;
    let diagnostics = offline_server()?.validate_resource_config(type_name, &config);
    report(&diagnostics)?;
    println!("{}", "Configuration is valid.".green().bold());
    Ok(())
}

fn run_plan(type_name: &str, config: &Path, state: Option<&Path>) -> Result<()> {
    let config = read_attributes(config)?;
    let prior = match state {
        Some(path) => read_state(path)?,
        None => None,
    };
    let response = offline_server()?.plan_resource_change(type_name, &config, prior.as_ref());
    report(&response.diagnostics)?;
    let plan = response.plan.context("Planning produced no plan")?;
    print_plan(type_name, &plan, prior.as_ref());
    Ok(())
}

async fn run_apply(args: ProviderArgs, type_name: &str, config: &Path, state: &Path) -> Result<()> {
    let config = read_attributes(config)?;
    let prior = read_state(state)?;
    let server = connect(args).await?;

    let response = server.plan_resource_change(type_name, &config, prior.as_ref());
    report(&response.diagnostics)?;
    let plan = response.plan.context("Planning produced no plan")?;
    print_plan(type_name, &plan, prior.as_ref());

    let response = match (plan.action, prior.as_ref()) {
        (PlanAction::NoOp, _) => return Ok(()),
        (PlanAction::Create, _) | (_, None) => server.apply_create(type_name, &plan.planned).await,
        (PlanAction::Update, Some(prior)) => {
            server.apply_update(type_name, prior, &plan.planned).await
        }
        (PlanAction::Replace, Some(prior)) => {
            report(&server.apply_delete(type_name, prior).await)?;
            write_state(state, None)?;
            server.apply_create(type_name, &plan.planned).await
        }
    };
    write_state(state, response.new_state.as_ref())?;
    report(&response.diagnostics)?;
    println!("{}", "Apply complete!".green().bold());
    Ok(())
}

async fn run_refresh(args: ProviderArgs, type_name: &str, state: &Path) -> Result<()> {
    let current = read_state(state)?
        .with_context(|| format!("No state in {}", state.display()))?;
    let server = connect(args).await?;
    let response = server.read_resource(type_name, &current).await;
    write_state(state, response.new_state.as_ref())?;
    report(&response.diagnostics)?;
    if response.new_state.is_none() {
        println!(
            "{}",
            "Remote object no longer exists, removed from state.".yellow()
        );
    }
    Ok(())
}

async fn run_destroy(
    args: ProviderArgs,
    type_name: &str,
    state: &Path,
    auto_approve: bool,
) -> Result<()> {
    let Some(prior) = read_state(state)? else {
        println!("{}", "No resources in state.".yellow());
        return Ok(());
    };
    println!(
        "{} {} {}",
        "-".red().bold(),
        type_name.cyan().bold(),
        prior.id().unwrap_or_default().red()
    );

    if !auto_approve && !confirm("Do you really want to destroy this resource?")? {
        println!("{}", "Destroy cancelled.".yellow());
        return Ok(());
    }

    let server = connect(args).await?;
    report(&server.apply_delete(type_name, &prior).await)?;
    write_state(state, None)?;
    println!("{}", "Destroy complete!".green().bold());
    Ok(())
}

async fn run_import(args: ProviderArgs, type_name: &str, id: &str, state: &Path) -> Result<()> {
    if read_state(state)?.is_some() {
        bail!("{} already holds a resource", state.display());
    }
    let server = connect(args).await?;
    let response = server.import_resource(type_name, id).await;
    report(&response.diagnostics)?;
    write_state(state, response.new_state.as_ref())?;
    println!("{} {}", "Imported".green().bold(), id);
    Ok(())
}

async fn run_data(args: ProviderArgs, type_name: &str, config: &Path) -> Result<()> {
    let config = read_attributes(config)?;
    let server = connect(args).await?;
    let response = server.read_data_source(type_name, &config).await;
    report(&response.diagnostics)?;
    let state = response.new_state.context("Data source returned no state")?;
    println!("{}", serde_json::to_string_pretty(&state)?);
    Ok(())
}

fn read_attributes(path: &Path) -> Result<Attributes> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid attributes in {}", path.display()))
}

/// State recorded in a state file; a missing file means nothing is tracked
fn read_state(path: &Path) -> Result<Option<State>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let state = serde_json::from_str(&content)
        .with_context(|| format!("Invalid state in {}", path.display()))?;
    Ok(Some(state))
}

fn write_state(path: &Path, state: Option<&State>) -> Result<()> {
    match state {
        Some(state) => {
            let json = serde_json::to_string_pretty(state)?;
            fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
        }
        None if path.exists() => {
            fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))
        }
        None => Ok(()),
    }
}

/// Print diagnostics; fail if any of them is an error
fn report(diagnostics: &Diagnostics) -> Result<()> {
    for diagnostic in diagnostics.iter() {
        let text = diagnostic.to_string();
        match diagnostic.severity {
            Severity::Error => eprintln!("{}", text.red()),
            Severity::Warning => eprintln!("{}", text.yellow()),
        }
    }
    if diagnostics.has_error() {
        bail!("operation failed with {} error(s)", diagnostics.errors().count());
    }
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} Only 'yes' will be accepted: ", prompt.bold());
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(answer.trim() == "yes")
}

fn print_plan(type_name: &str, plan: &Plan, prior: Option<&State>) {
    let symbol = match plan.action {
        PlanAction::NoOp => {
            println!("{}", "No changes. Infrastructure is up-to-date.".green());
            return;
        }
        PlanAction::Create => "+".green(),
        PlanAction::Update => "~".yellow(),
        PlanAction::Replace => "-/+".red(),
    };
    println!(
        "{} {} will be {}",
        symbol.bold(),
        type_name.cyan().bold(),
        plan.action
    );

    let mut keys: Vec<&String> = plan.planned.keys().collect();
    keys.sort_by(|a, b| match (a.as_str(), b.as_str()) {
        ("name", _) => std::cmp::Ordering::Less,
        (_, "name") => std::cmp::Ordering::Greater,
        _ => a.cmp(b),
    });
    for key in keys {
        let new_value = &plan.planned[key];
        let old_value = prior.and_then(|p| p.attribute(key));
        if old_value == Some(new_value) {
            continue;
        }
        let marker = if plan.requires_replace.contains(key) {
            " (forces replacement)".red().to_string()
        } else {
            String::new()
        };
        match old_value {
            Some(old) => println!(
                "    {}: {} → {}{}",
                key,
                format_value(old).red(),
                format_value(new_value).green(),
                marker
            ),
            None => println!("    {}: {}{}", key, format_value(new_value).green(), marker),
        }
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{}\"", s),
        Value::Int(n) => n.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::List(items) => {
            let strs: Vec<_> = items.iter().map(format_value).collect();
            format!("[{}]", strs.join(", "))
        }
        Value::Map(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let strs: Vec<_> = entries
                .into_iter()
                .map(|(k, v)| format!("{}: {}", k, format_value(v)))
                .collect();
            format!("{{{}}}", strs.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        assert_eq!(read_state(&path).unwrap(), None);

        let attributes: Attributes = [("name".to_string(), Value::from("web"))]
            .into_iter()
            .collect();
        let state = State::existing("sase_addresses", attributes).with_identifier("Shared:abc-123");
        write_state(&path, Some(&state)).unwrap();
        assert_eq!(read_state(&path).unwrap(), Some(state));

        write_state(&path, None).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn error_diagnostics_fail_the_command() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.add_warning("Deprecated", "use something else");
        assert!(report(&diagnostics).is_ok());
        diagnostics.add_error("Error in parsing ID", "Expected 2 tokens in ID 'Shared', got 1");
        assert!(report(&diagnostics).is_err());
    }

    #[test]
    fn maps_format_in_key_order() {
        let map: Attributes = [
            ("seconds".to_string(), Value::Int(3600)),
            ("days".to_string(), Value::Int(1)),
        ]
        .into_iter()
        .collect();
        assert_eq!(format_value(&Value::Map(map)), "{days: 1, seconds: 3600}");
    }

    #[test]
    fn secret_flag_hides_env_value() {
        use clap::CommandFactory;
        let command = Cli::command();
        let secret = command
            .get_arguments()
            .find(|a| a.get_id() == "client_secret")
            .unwrap();
        assert!(secret.is_hide_env_values_set());
    }
}
