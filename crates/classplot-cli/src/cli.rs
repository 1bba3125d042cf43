//! Command-line interface for the classplot utility
//!
//! Loads a JSON model, compiles its classes and writes PlantUML text.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::{debug, info};

use classplot::compiler::GraphNode;
use classplot::core::logging::init_logging;
use classplot::model::LoadedModel;

/// Classplot - Compile class hierarchies into PlantUML diagrams
#[derive(Parser)]
#[command(name = "classplot")]
#[command(about = "Compile class hierarchy models into PlantUML class diagrams")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a model to PlantUML
    Render {
        /// Model file (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file for the diagram (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Do not attach public API notes
        #[arg(long)]
        no_notes: bool,

        /// Wrap the diagram in @startuml / @enduml
        #[arg(long)]
        enclose: bool,
    },

    /// List the compiled graph nodes
    Inspect {
        /// Model file (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Check that a model loads and compiles
    Validate {
        /// Model file (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

/// One line of `inspect` output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeSummary {
    pub name: String,
    pub kind: &'static str,
    /// Not reachable from any scope
    pub anonymous: bool,
    pub parent: Option<String>,
    pub members: usize,
    pub public: usize,
    pub interfaces: Vec<String>,
}

impl NodeSummary {
    fn from_node(node: &GraphNode) -> Self {
        match node {
            GraphNode::Class(class) => Self {
                name: class.name.to_string(),
                kind: "class",
                anonymous: class.name.is_anonymous(),
                parent: class.parent.as_ref().map(ToString::to_string),
                members: class.members.len(),
                public: class.public_surface.len(),
                interfaces: class.interfaces.iter().map(ToString::to_string).collect(),
            },
            GraphNode::Interface(interface) => Self {
                name: interface.name.to_string(),
                kind: "interface",
                anonymous: interface.name.is_anonymous(),
                parent: None,
                members: interface.required.len(),
                public: 0,
                interfaces: Vec::new(),
            },
        }
    }
}

/// Main CLI application
#[derive(Default)]
pub struct ClassplotApp;

impl ClassplotApp {
    pub fn new() -> Self {
        Self
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over flags
        let log_level = std::env::var("CLASSPLOT_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| cli.log_level.as_str().to_string());
        let log_format = std::env::var("CLASSPLOT_LOG_FORMAT")
            .ok()
            .unwrap_or_else(|| cli.log_format.as_str().to_string());

        if let Err(e) = init_logging(Some(&log_level), Some(&log_format)) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Classplot v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Render {
                input,
                output,
                no_notes,
                enclose,
            } => self.render_command(input, output, !no_notes, enclose, cli.verbose),
            Commands::Inspect { input, json } => self.inspect_command(input, json, cli.verbose),
            Commands::Validate { input } => self.validate_command(input, cli.verbose),
        }
    }

    fn render_command(
        &self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        notes: bool,
        enclose: bool,
        verbose: bool,
    ) -> Result<()> {
        let content = self.read_input(input)?;
        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let diagram = self.render_model(&content, notes, enclose)?;
        debug!(bytes = diagram.len(), "Rendered diagram");
        self.write_output(output, &diagram)
    }

    /// Render model text. Passing `notes = false` drops notes even if the model enables them.
    pub fn render_model(&self, content: &str, notes: bool, enclose: bool) -> Result<String> {
        let model = LoadedModel::from_json(content)?;
        let mut compiler = model.compiler()?;
        if !notes {
            compiler.disable_notes();
        }
        compiler.set_enclose(enclose);
        Ok(compiler.render()?)
    }

    fn inspect_command(&self, input: Option<PathBuf>, json: bool, verbose: bool) -> Result<()> {
        let content = self.read_input(input)?;
        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let nodes = self.inspect_model(&content)?;
        if json {
            println!("{}", serde_json::to_string_pretty(&nodes)?);
        } else {
            for node in &nodes {
                println!("{}", describe(node));
            }
            println!();
            println!("Total: {} node(s)", nodes.len());
        }
        Ok(())
    }

    pub fn inspect_model(&self, content: &str) -> Result<Vec<NodeSummary>> {
        let model = LoadedModel::from_json(content)?;
        let mut compiler = model.compiler()?;
        let graph = compiler.compile_all()?;
        info!(nodes = graph.len(), "Compiled model");
        let nodes = graph.nodes().map(NodeSummary::from_node).collect();
        Ok(nodes)
    }

    fn validate_command(&self, input: Option<PathBuf>, verbose: bool) -> Result<()> {
        let content = self.read_input(input)?;
        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        match self.inspect_model(&content) {
            Ok(nodes) => {
                println!("✓ Valid model ({} node(s))", nodes.len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Invalid model: {}", e);
                Err(e)
            }
        }
    }

    /// Read input from file or stdin
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            Some(path) if path.to_string_lossy() != "-" => fs::read_to_string(&path)
                .map_err(|e| anyhow!("Failed to read input file '{}': {}", path.display(), e)),
            _ => {
                let mut content = String::new();
                io::stdin().read_to_string(&mut content)?;
                Ok(content)
            }
        }
    }

    /// Write output to file or stdout
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        match output {
            Some(path) if path.to_string_lossy() != "-" => {
                fs::write(&path, content)
                    .map_err(|e| anyhow!("Failed to write output file '{}': {}", path.display(), e))?;
            }
            _ => {
                print!("{}", content);
                io::stdout().flush()?;
            }
        }
        Ok(())
    }
}

fn describe(node: &NodeSummary) -> String {
    let mut line = format!("{:<9} {}", node.kind, node.name);
    if node.anonymous {
        line.push_str(" (unscoped)");
    }
    if let Some(parent) = &node.parent {
        line.push_str(&format!(" extends {}", parent));
    }
    if !node.interfaces.is_empty() {
        line.push_str(&format!(" implements {}", node.interfaces.join(", ")));
    }
    line.push_str(&format!(" ({} member(s), {} public)", node.members, node.public));
    line
}
