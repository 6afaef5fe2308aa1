//! # Check Subcommand
//!
//! `jsv check --schema order.schema.json --document order.json --at '$.total'`
//!
//! The value at `--at` is validated against the schema's
//! `exclusiveMaximum`. The same `$`-path syntax selects the value and
//! writes dynamic bounds, and the path is reported as the message location.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use jsv_core::{Node, ReferencePath};
use jsv_schema::{
    ExclusiveMaximumValidator, ParentSchema, ValidationConfig, ValidationContext,
    ValidationMessage,
};

/// Arguments for the check subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Schema object holding `exclusiveMaximum` (JSON or YAML).
    #[arg(long)]
    pub schema: PathBuf,

    /// Document to validate (JSON or YAML).
    #[arg(long)]
    pub document: PathBuf,

    /// `$`-path of the value to check.
    #[arg(long, default_value = "$")]
    pub at: String,

    /// Location of the keyword reported in messages.
    #[arg(long, default_value = "#/exclusiveMaximum")]
    pub schema_path: String,

    /// Validation config file (JSON or YAML).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Treat numeric strings as numbers, overriding the config file.
    #[arg(long)]
    pub type_loose: bool,

    /// Output format for reported messages.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One message per line.
    Text,
    /// The message set as a JSON array.
    Json,
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

/// Load a JSON or YAML file as a [`Node`] tree.
pub fn load_node(path: &Path) -> Result<Node> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    let node = if is_yaml(path) {
        Node::from_yaml_str(&content)
    } else {
        Node::from_json_str(&content)
    };
    node.with_context(|| format!("cannot parse {}", path.display()))
}

/// Load the validation config, then apply command-line overrides.
pub fn load_config(path: Option<&Path>, type_loose: bool) -> Result<ValidationConfig> {
    let mut config = match path {
        None => ValidationConfig::default(),
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("cannot read config {}", path.display()))?;
            if is_yaml(path) {
                serde_yaml::from_str(&content)
                    .with_context(|| format!("invalid config {}", path.display()))?
            } else {
                serde_json::from_str(&content)
                    .with_context(|| format!("invalid config {}", path.display()))?
            }
        }
    };
    if type_loose {
        config.type_loose = true;
    }
    Ok(config)
}

/// Validate the value at `at` in `document` against `schema`.
pub fn check_document(
    schema: &Node,
    document: &Node,
    at: &str,
    schema_path: &str,
    config: ValidationConfig,
) -> Result<BTreeSet<ValidationMessage>> {
    let Some(path) = ReferencePath::parse(at) else {
        bail!("--at must be a `$` path, got '{at}'");
    };
    let parent = ParentSchema::new(schema.clone());
    let validator =
        ExclusiveMaximumValidator::from_parent(schema_path, &parent, ValidationContext::shared(config))
            .context("cannot compile exclusiveMaximum")?;
    tracing::debug!(rule = validator.rule().variant_name(), at, "compiled schema keyword");

    let candidate = path.resolve(document);
    if candidate.is_missing() {
        tracing::warn!(at, "no value at path; nothing to check");
    }
    Ok(validator.validate(candidate, document, at))
}

/// Render messages for stdout.
pub fn render(messages: &BTreeSet<ValidationMessage>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(messages
            .iter()
            .map(|m| format!("[{}] {}", m.code(), m))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            serde_json::to_string_pretty(messages).context("cannot serialize messages")
        }
    }
}

/// Run `jsv check`. Exit code 1 when violations were reported.
pub fn run(args: &CheckArgs) -> Result<ExitCode> {
    let schema = load_node(&args.schema)?;
    let document = load_node(&args.document)?;
    let config = load_config(args.config.as_deref(), args.type_loose)?;

    let messages = check_document(&schema, &document, &args.at, &args.schema_path, config)?;
    let output = render(&messages, args.format)?;
    if !output.is_empty() {
        println!("{output}");
    }

    tracing::info!(violations = messages.len(), "check finished");
    if messages.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}
