//! Arbor - prints a Gmail label list as a folder tree
//!
//! Reads a label list (a Gmail `labels.list` response or a bare array of
//! records) and renders the label hierarchy with bubbled unread counts.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use labels::{LabelTreeBuilder, RootOrder, TreeOptions, order_roots};
use log::{error, info};
use std::collections::HashSet;
use std::path::PathBuf;

mod render;
mod source;

#[derive(Parser, Debug)]
#[command(name = "arbor", about = "Render a Gmail label list as a folder tree")]
struct Cli {
    /// Label list JSON file (reads stdin when omitted or "-")
    #[arg(value_name = "PATH")]
    input: Option<PathBuf>,

    /// Only show labels whose name contains this text, plus their parents
    #[arg(short, long)]
    search: Option<String>,

    /// Top-level ordering (defaults to the configured order)
    #[arg(long, value_enum)]
    root_order: Option<RootOrderArg>,

    /// Tree options file (defaults to label-tree.json in the config directory)
    #[arg(long, value_name = "PATH")]
    options: Option<PathBuf>,

    /// Expand only these paths; everything is expanded when omitted
    #[arg(long = "expand", value_name = "PATH")]
    expanded: Vec<String>,

    /// Print the tree as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RootOrderArg {
    Alphabetical,
    UnreadFirst,
}

impl From<RootOrderArg> for RootOrder {
    fn from(arg: RootOrderArg) -> Self {
        match arg {
            RootOrderArg::Alphabetical => RootOrder::Alphabetical,
            RootOrderArg::UnreadFirst => RootOrder::UnreadFirst,
        }
    }
}

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let options = match &cli.options {
        Some(path) => TreeOptions::from_file(path)?,
        None => {
            // Bootstrap config directory
            if let Err(e) = config::init() {
                error!("Failed to initialize config directory: {}", e);
            }
            TreeOptions::load()?
        }
    };

    let labels = source::read_labels(cli.input.as_deref())?;
    info!("Loaded {} labels", labels.len());

    let builder = LabelTreeBuilder::from_options(&options);
    let mut nodes = builder.build(&labels, cli.search.as_deref());

    let root_order = cli.root_order.map(RootOrder::from).unwrap_or(options.root_order);
    order_roots(&mut nodes, root_order);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&nodes)?);
    } else {
        let expanded: Option<HashSet<String>> =
            (!cli.expanded.is_empty()).then(|| cli.expanded.into_iter().collect());
        print!("{}", render::render_text(&nodes, expanded.as_ref()));
    }
    Ok(())
}
