use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use launchmap::{config, graph, models, render};

#[derive(Parser)]
#[command(name = "lmap")]
#[command(about = "Inspect launch files and feature-model configurations")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the dependency-respecting evaluation order of a launch file
    Order {
        /// Path to a launch file (JSON)
        file: PathBuf,
    },
    /// Render a launch file's nested action tree
    Tree {
        /// Path to a launch file (JSON)
        file: PathBuf,
    },
    /// List everything that transitively depends on an action
    Deps {
        /// Path to a launch file (JSON)
        file: PathBuf,
        /// Action id to query
        action: String,
    },
    /// Instantiate a feature model and list its arguments with defaults
    Args {
        /// Path to a feature model description (JSON)
        file: PathBuf,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "launchmap=info".into()),
    );
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_launch_file(path: &Path) -> anyhow::Result<models::LaunchFile> {
    let text = std::fs::read_to_string(path)?;
    let file: models::LaunchFile = serde_json::from_str(&text)?;
    tracing::debug!("loaded launch file '{}' ({})", file.name, file.id);
    Ok(file)
}

fn load_feature_model(path: &Path) -> anyhow::Result<models::FeatureModelDescription> {
    let text = std::fs::read_to_string(path)?;
    let fm: models::FeatureModelDescription = serde_json::from_str(&text)?;
    if let Err((feature, arg)) = fm.validate() {
        tracing::warn!(
            "feature model '{}': default of argument '{}' in '{}' is not a known value",
            fm.id,
            arg,
            feature
        );
    }
    Ok(fm)
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Order { file } => {
            let launch = load_launch_file(&file)?;
            let graph = graph::build(&launch)?;
            let order = graph::topological_order(&graph)?;
            for id in &order {
                // Builder output always resolves.
                if let Some(node) = graph.get(id) {
                    println!("{}  [{}] {}", id, node.kind.as_str(), node.name);
                }
            }
        }
        Commands::Tree { file } => {
            let launch = load_launch_file(&file)?;
            print!("{}", render::render_tree(&launch));
        }
        Commands::Deps { file, action } => {
            let launch = load_launch_file(&file)?;
            let graph = graph::build(&launch)?;
            let dependents = graph::dependents(&graph, &action)?;
            if dependents.is_empty() {
                println!("Nothing depends on '{}'.", action);
            } else {
                println!("Actions depending on '{}':", action);
                for id in &dependents {
                    println!("  {}", id);
                }
            }
        }
        Commands::Args { file } => {
            let fm = load_feature_model(&file)?;
            let instance = config::instantiate_model(&fm);
            for desc in &fm.launch {
                println!("{} ({})", desc.name, desc.id);
                for arg in &desc.args {
                    let current = instance
                        .launch
                        .get(&desc.id)
                        .and_then(|l| l.args.get(&arg.id))
                        .map(|a| a.value.as_str())
                        .unwrap_or_default();
                    if arg.known_values.is_empty() {
                        println!("  {} = {:?}", arg.name, current);
                    } else {
                        println!(
                            "  {} = {:?} (one of: {})",
                            arg.name,
                            current,
                            arg.known_values.join(", ")
                        );
                    }
                }
            }
        }
    }

    Ok(())
}
