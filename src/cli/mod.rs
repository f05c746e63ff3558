use std::path::PathBuf;

use clap::Parser;
use tracing::debug;

use crate::core::package::Package;
use crate::core::validate::is_valid_name;
use crate::error::{PkgDepsError, Result};
use crate::graph::builder::load_graph;
use crate::graph::ops::{transitive_dependencies, StrategyKind};
use crate::graph::render::{render_json, render_text};
use crate::util::{logging, output};

#[derive(Parser, Debug)]
#[command(name = "pkgdeps")]
#[command(about = "Print the transitive dependencies of packages", long_about = None)]
pub struct Cli {
    /// Dependency file, one `package -> dep1 dep2 ...` declaration per line
    pub file: Option<PathBuf>,
    /// Packages to resolve, printed in the order given
    pub packages: Vec<String>,
    #[arg(
        long,
        value_enum,
        env = "PKGDEPS_STRATEGY",
        default_value_t = StrategyKind::Iterative
    )]
    pub strategy: StrategyKind,
    /// Print direct dependencies only
    #[arg(long)]
    pub direct: bool,
    #[arg(long)]
    pub json: bool,
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
    #[arg(short, long)]
    pub quiet: bool,
    #[arg(long, env = "NO_COLOR", value_parser = clap::builder::FalseyValueParser::new())]
    pub no_color: bool,
}

pub fn run() {
    let cli = Cli::parse();
    let color = !cli.no_color;
    output::set_color(color);
    logging::init(cli.verbose, cli.quiet, color);

    if let Err(err) = dispatch(cli) {
        output::error(&err.to_string());
        std::process::exit(1);
    }
}

pub fn dispatch(cli: Cli) -> Result<()> {
    let path = cli.file.as_ref().ok_or(PkgDepsError::Usage)?;
    validate_package_names(&cli.packages)?;

    let graph = load_graph(path)?;
    if cli.packages.is_empty() {
        return Ok(());
    }
    let strategy = cli.strategy.strategy();

    let results: Vec<(String, Vec<Package>)> = cli
        .packages
        .iter()
        .map(|name| {
            let package = Package::new(name.as_str());
            let deps = if cli.direct {
                graph.direct_dependencies(&package)
            } else {
                transitive_dependencies(&graph, &package, strategy)
            };
            debug!(package = %package, count = deps.len(), direct = cli.direct, "resolved");
            (name.clone(), deps)
        })
        .collect();

    let rendered = if cli.json {
        let mut doc = render_json(&results)?;
        doc.push('\n');
        doc
    } else {
        render_text(&results)
    };
    output::print(&rendered)?;
    Ok(())
}

/// Rejects the first query name outside the identifier grammar, before any
/// file access.
pub fn validate_package_names(names: &[String]) -> Result<()> {
    match names.iter().find(|name| !is_valid_name(name)) {
        Some(name) => Err(PkgDepsError::InvalidPackageName(name.clone())),
        None => Ok(()),
    }
}
