//! Command-line front end for stylecraft.
//!
//! The binary is a thin wrapper: [`Cli`] is parsed with clap and handed to
//! [`run`], which returns the text to print. Keeping the work in the library
//! lets tests drive every subcommand without spawning a process.
//!
//! ```text
//! stylecraft resolve button --set size=sm --class w-full
//! stylecraft resolve select --slot trigger --output json
//! stylecraft merge "h-10 rounded-md" h-8
//! stylecraft explain hover:bg-primary -mb-px fade-in
//! stylecraft list --dir ./styles
//! ```

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use stylecraft::{Catalog, GroupTable, Selection, StyleDefinition, StyleRegistry};

/// Resolve variant-based component styles into class strings.
#[derive(Debug, Parser)]
#[command(name = "stylecraft", version, about)]
pub struct Cli {
    /// Read definitions from a YAML or JSON collection document
    #[arg(long, global = true, value_name = "PATH", conflicts_with = "dir")]
    pub file: Option<PathBuf>,

    /// Read one definition per file from a directory
    #[arg(long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Extend the property-group table with rules from a YAML file
    #[arg(long, global = true, value_name = "PATH")]
    pub groups: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve a component definition
    Resolve {
        /// Definition name
        name: String,

        /// Choose an option for an axis
        #[arg(long = "set", value_name = "AXIS=OPTION", value_parser = parse_pair)]
        set: Vec<(String, String)>,

        /// Override classes applied to every slot
        #[arg(long, value_name = "TOKENS")]
        class: Option<String>,

        /// Resolve only this slot
        #[arg(long, value_name = "SLOT")]
        slot: Option<String>,

        /// Override classes applied to one slot
        #[arg(long = "slot-class", value_name = "SLOT=TOKENS", value_parser = parse_pair)]
        slot_class: Vec<(String, String)>,

        /// Print the ordered tokens before merging
        #[arg(long)]
        tokens: bool,
    },

    /// Merge token groups, later tokens winning
    Merge {
        #[arg(id = "tokens", required = true, value_name = "TOKENS")]
        groups: Vec<String>,
    },

    /// Show the conflict key of each token
    Explain {
        #[arg(id = "tokens", required = true, value_name = "TOKENS")]
        groups: Vec<String>,
    },

    /// List definitions with their axes and slots
    List,
}

fn parse_pair(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}

/// Runs a parsed command line and returns the text to print.
///
/// # Errors
///
/// Returns an error if definitions or the group table cannot be loaded, or if
/// resolution fails.
pub fn run(cli: &Cli) -> anyhow::Result<String> {
    let catalog = load_catalog(cli)?;

    match &cli.command {
        Command::Resolve {
            name,
            set,
            class,
            slot,
            slot_class,
            tokens,
        } => {
            let mut selection = Selection::new();
            for (axis, option) in set {
                selection = selection.with(axis.as_str(), option);
            }
            if let Some(class) = class {
                selection = selection.with_class(class);
            }
            if let Some(slot) = slot {
                selection = selection.with_slot(slot.as_str());
            }
            for (slot, class) in slot_class {
                selection = selection.with_slot_class(slot.as_str(), class);
            }

            if *tokens {
                let definition = catalog.definition(name)?;
                let resolved = catalog
                    .resolver()
                    .resolve_tokens(definition, &selection)
                    .with_context(|| format!("failed to resolve '{name}'"))?;
                let parts: Vec<SlotTokens> = resolved
                    .iter()
                    .map(|(slot, tokens)| SlotTokens {
                        slot: slot.to_string(),
                        tokens: tokens.to_vec(),
                    })
                    .collect();
                let text = parts
                    .iter()
                    .map(|part| labelled(&part.slot, &part.tokens.join(" ")))
                    .collect::<Vec<_>>()
                    .join("\n");
                return render(cli.output, &parts, text);
            }

            let style = catalog
                .resolve(name, &selection)
                .with_context(|| format!("failed to resolve '{name}'"))?;
            let text = style
                .iter()
                .map(|(slot, class)| labelled(slot, class))
                .collect::<Vec<_>>()
                .join("\n");
            render(cli.output, &style, text)
        }

        Command::Merge { groups } => {
            let class = catalog.resolver().merger().merge(groups);
            render(cli.output, &Merged { class: &class }, class.clone())
        }

        Command::Explain { groups } => {
            let merger = catalog.resolver().merger();
            let explained: Vec<Explained> = groups
                .iter()
                .flat_map(|group| group.split_whitespace())
                .map(|token| Explained {
                    token: token.to_string(),
                    group: merger.explain(token),
                })
                .collect();
            let text = explained
                .iter()
                .map(|e| format!("{}\t{}", e.token, e.group.as_deref().unwrap_or("-")))
                .collect::<Vec<_>>()
                .join("\n");
            render(cli.output, &explained, text)
        }

        Command::List => {
            let summaries: Vec<DefinitionSummary> = catalog
                .registry()
                .iter()
                .map(|(name, definition)| DefinitionSummary::new(name, definition))
                .collect();
            let text = summaries
                .iter()
                .map(DefinitionSummary::to_text)
                .collect::<Vec<_>>()
                .join("\n");
            render(cli.output, &summaries, text)
        }
    }
}

fn load_catalog(cli: &Cli) -> anyhow::Result<Catalog> {
    let catalog = match (&cli.file, &cli.dir) {
        (Some(path), _) => Catalog::from_registry(load_document(path)?),
        (None, Some(dir)) => {
            let mut registry = StyleRegistry::new();
            registry
                .load_dir(dir)
                .with_context(|| format!("failed to load definitions from {}", dir.display()))?;
            Catalog::from_registry(registry)
        }
        (None, None) => Catalog::builtin()?,
    };

    match &cli.groups {
        Some(path) => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let mut table = GroupTable::builtin();
            table
                .extend_from_yaml(&source)
                .with_context(|| format!("invalid group table {}", path.display()))?;
            tracing::debug!(rules = table.len(), "group table extended");
            Ok(catalog.with_table(table)?)
        }
        None => Ok(catalog),
    }
}

fn load_document(path: &Path) -> anyhow::Result<StyleRegistry> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let mut registry = StyleRegistry::new();
    let loaded = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => registry.add_json_document(&source),
        Some("yaml" | "yml") => registry.add_yaml_document(&source),
        _ => bail!(
            "unsupported definition file {} (expected .yaml, .yml or .json)",
            path.display()
        ),
    };
    loaded.with_context(|| format!("failed to load definitions from {}", path.display()))?;
    Ok(registry)
}

fn render<T: Serialize + ?Sized>(
    format: OutputFormat,
    value: &T,
    text: String,
) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Text => text,
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?.trim_end().to_string(),
    })
}

/// `class` for unslotted output, `slot: class` otherwise.
fn labelled(slot: &str, class: &str) -> String {
    if slot.is_empty() {
        class.to_string()
    } else {
        format!("{slot}: {class}")
    }
}

#[derive(Serialize)]
struct Merged<'a> {
    class: &'a str,
}

#[derive(Serialize)]
struct SlotTokens {
    slot: String,
    tokens: Vec<String>,
}

#[derive(Serialize)]
struct Explained {
    token: String,
    group: Option<String>,
}

#[derive(Serialize)]
struct AxisSummary {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    slot: Option<String>,
    options: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    default: Option<String>,
}

impl AxisSummary {
    fn collect(slot: Option<&str>, definition: &StyleDefinition) -> Vec<Self> {
        definition
            .variants()
            .iter()
            .map(|axis| AxisSummary {
                name: axis.name().to_string(),
                slot: slot.map(str::to_string),
                options: axis.option_names().map(str::to_string).collect(),
                default: definition.default_for(axis.name()).map(str::to_string),
            })
            .collect()
    }

    fn to_text(&self) -> String {
        let options: Vec<String> = self
            .options
            .iter()
            .map(|option| {
                if self.default.as_deref() == Some(option.as_str()) {
                    format!("{option}*")
                } else {
                    option.clone()
                }
            })
            .collect();
        match &self.slot {
            Some(slot) => format!("  {slot}.{}: {}", self.name, options.join(" ")),
            None => format!("  {}: {}", self.name, options.join(" ")),
        }
    }
}

#[derive(Serialize)]
struct DefinitionSummary {
    name: String,
    axes: Vec<AxisSummary>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    slots: Vec<String>,
}

impl DefinitionSummary {
    fn new(name: &str, definition: &StyleDefinition) -> Self {
        let mut axes = AxisSummary::collect(None, definition);
        for (slot, slot_definition) in definition.slots() {
            axes.extend(AxisSummary::collect(Some(slot), slot_definition));
        }
        Self {
            name: name.to_string(),
            axes,
            slots: definition
                .slot_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    fn to_text(&self) -> String {
        let mut lines = vec![self.name.clone()];
        lines.extend(self.axes.iter().map(AxisSummary::to_text));
        if !self.slots.is_empty() {
            lines.push(format!("  slots: {}", self.slots.join(" ")));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn run_args(args: &[&str]) -> anyhow::Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("stylecraft").chain(args.iter().copied()))?;
        run(&cli)
    }

    // =========================================================================
    // Argument parsing tests
    // =========================================================================

    #[test]
    fn test_parse_pair() {
        assert_eq!(
            parse_pair("size=sm"),
            Ok(("size".to_string(), "sm".to_string()))
        );
        assert_eq!(
            parse_pair("root=w-64 gap-2"),
            Ok(("root".to_string(), "w-64 gap-2".to_string()))
        );
        assert!(parse_pair("size").is_err());
        assert!(parse_pair("=sm").is_err());
    }

    #[test]
    fn test_file_and_dir_conflict() {
        let result = Cli::try_parse_from(["stylecraft", "list", "--file", "a.yaml", "--dir", "d"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_requires_tokens() {
        assert!(Cli::try_parse_from(["stylecraft", "merge"]).is_err());
    }

    // =========================================================================
    // Resolve tests
    // =========================================================================

    #[test]
    fn test_resolve_builtin() {
        let out = run_args(&["resolve", "color-swatch", "--set", "shape=circle"]).unwrap();
        assert_eq!(out, "rounded-full border-secondary shadow-sm h-8 w-8");
    }

    #[test]
    fn test_resolve_slot_text() {
        let out = run_args(&["resolve", "select", "--slot", "error", "--class", "text-xs"]).unwrap();
        assert_eq!(out, "error: text-xs text-danger");
    }

    #[test]
    fn test_resolve_slot_class_json() {
        let out = run_args(&[
            "resolve",
            "select",
            "--slot",
            "root",
            "--slot-class",
            "root=gap-4",
            "--output",
            "json",
        ])
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["root"], "flex w-full flex-col gap-4");
    }

    #[test]
    fn test_resolve_tokens() {
        let out = run_args(&["resolve", "tabs", "--set", "orientation=vertical", "--tokens"]).unwrap();
        assert_eq!(out, "flex flex-row gap-4");
    }

    #[test]
    fn test_resolve_unknown_option() {
        let err = run_args(&["resolve", "button", "--set", "size=xl"]).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("failed to resolve 'button'"));
        assert!(msg.contains("unknown option 'xl'"));
    }

    // =========================================================================
    // Merge and explain tests
    // =========================================================================

    #[test]
    fn test_merge() {
        let out = run_args(&["merge", "h-10 rounded-md", "h-8"]).unwrap();
        assert_eq!(out, "h-8 rounded-md");
    }

    #[test]
    fn test_merge_yaml() {
        let out = run_args(&["merge", "px-2 px-4", "--output", "yaml"]).unwrap();
        assert_eq!(out, "class: px-4");
    }

    #[test]
    fn test_explain() {
        let out = run_args(&["explain", "hover:bg-primary fade-in"]).unwrap();
        assert_eq!(out, "hover:bg-primary\thover:background-color\nfade-in\t-");
    }

    #[test]
    fn test_explain_with_groups_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("groups.yaml");
        fs::write(
            &path,
            "- stem: fade\n  cases:\n    - group: animation-fade\n",
        )
        .unwrap();
        let out = run_args(&["explain", "fade-in", "--groups", path.to_str().unwrap()]).unwrap();
        assert_eq!(out, "fade-in\tanimation-fade");
    }

    // =========================================================================
    // Definition source tests
    // =========================================================================

    #[test]
    fn test_list_builtin() {
        let out = run_args(&["list"]).unwrap();
        assert!(out.contains("button\n  variant: primary* secondary outline destructive link\n  size: sm md* lg"));
        assert!(out.contains("switch-track\n  isSelected: false* true"));
        assert!(out.contains("  slots: root label trigger popover listbox description error"));
    }

    #[test]
    fn test_list_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("styles.json");
        fs::write(
            &path,
            r#"{"badge": {"base": "px-2", "variants": {"tone": {"info": "bg-info", "warn": "bg-warning"}}}}"#,
        )
        .unwrap();
        let out = run_args(&["list", "--file", path.to_str().unwrap()]).unwrap();
        assert_eq!(out, "badge\n  tone: info warn");
    }

    #[test]
    fn test_resolve_from_dir() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("forms")).unwrap();
        fs::write(temp.path().join("forms/field.yaml"), "base: flex flex-col gap-1\n").unwrap();
        let out = run_args(&[
            "resolve",
            "forms/field",
            "--class",
            "gap-3",
            "--dir",
            temp.path().to_str().unwrap(),
        ])
        .unwrap();
        assert_eq!(out, "flex flex-col gap-3");
    }

    #[test]
    fn test_unsupported_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("styles.toml");
        fs::write(&path, "").unwrap();
        let err = run_args(&["list", "--file", path.to_str().unwrap()]).unwrap_err();
        assert!(err.to_string().contains("unsupported definition file"));
    }
}
