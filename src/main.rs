//! route-table CLI.
//!
//! Builds the route table from a routes directory and lets an operator
//! list it, match request URIs against it, check it for excluded routes,
//! or watch it reload as route files change.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use route_table::config::{load_config, RegistryConfig, RouteWatcher};
use route_table::discovery::discover;
use route_table::observability::init_logging;
use route_table::routing::{normalize, RouteDescriptor, SharedRouteTable};

#[derive(Parser)]
#[command(name = "route-table")]
#[command(about = "Discover and match routes declared in route files", long_about = None)]
struct Cli {
    /// Configuration file (TOML). Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Routes directory, overriding the configured one.
    #[arg(short, long)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List routes in match order
    List {
        #[arg(long)]
        json: bool,
    },
    /// Normalize a request URI and match it against the table
    Match {
        uri: String,

        /// Mount prefix to strip, overriding the configured one
        #[arg(long)]
        subdir: Option<String>,

        #[arg(long)]
        json: bool,
    },
    /// Report skipped route files and rejected templates
    Check,
    /// Watch the routes directory and reload on change
    Watch,
}

#[tokio::main]
async fn main() -> route_table::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RegistryConfig::default(),
    };
    if let Some(dir) = cli.dir {
        config.discovery.routes_dir = dir;
    }

    init_logging(&config.observability.log_level)?;

    tracing::debug!(
        routes_dir = %config.discovery.routes_dir.display(),
        subdir = %config.matching.subdir,
        auth_default = config.defaults.auth,
        "Configuration loaded"
    );

    let (table, skipped) = discover(&config)?.into_table();

    match cli.command {
        Commands::List { json } => {
            let routes: Vec<&RouteDescriptor> = table.routes().collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&routes)?);
            } else {
                for route in routes {
                    println!("{}", describe(route));
                }
            }
        }
        Commands::Match { uri, subdir, json } => {
            let subdir = subdir.unwrap_or_else(|| config.matching.subdir.clone());
            let path = normalize(&uri, &subdir);

            match table.at(&path) {
                Ok(matched) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&matched)?);
                    } else {
                        println!("{}", describe(matched.route));
                        for (name, value) in matched.params.iter() {
                            println!("  {} = {}", name, value);
                        }
                    }
                }
                Err(e) => {
                    eprintln!("{}: {}", e, path);
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Commands::Check => {
            for skip in &skipped {
                match skip.entry {
                    Some(entry) => {
                        println!("{} [route #{}]: {}", skip.file.display(), entry, skip.reason)
                    }
                    None => println!("{}: {}", skip.file.display(), skip.reason),
                }
            }
            for rejected in table.rejected() {
                println!(
                    "{} ({}): {}",
                    rejected.descriptor.name, rejected.descriptor.path, rejected.error
                );
            }

            println!(
                "{} routes, {} skipped, {} rejected",
                table.len(),
                skipped.len(),
                table.rejected().len()
            );

            if !skipped.is_empty() || !table.rejected().is_empty() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Watch => {
            let shared = Arc::new(SharedRouteTable::new(table));
            let (watcher, mut updates) = RouteWatcher::new(config.clone(), shared.clone());
            let _watcher = watcher.run()?;

            let ctrl_c = tokio::signal::ctrl_c();
            tokio::pin!(ctrl_c);

            loop {
                tokio::select! {
                    update = updates.recv() => match update {
                        Some(table) => tracing::info!(
                            routes = table.len(),
                            rejected = table.rejected().len(),
                            "Route table reloaded"
                        ),
                        None => break,
                    },
                    _ = &mut ctrl_c => {
                        tracing::info!("Shutting down watcher");
                        break;
                    }
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn describe(route: &RouteDescriptor) -> String {
    let mut line = format!("{:<7} {:<32} {}", route.verb.as_str(), route.path, route.name);

    if !route.controller.is_empty() {
        line.push_str(" -> ");
        line.push_str(&route.controller);
        if let Some(method) = &route.method {
            line.push('#');
            line.push_str(method);
        }
    }
    if route.auth {
        line.push_str(" [auth]");
    }
    if route.admin {
        line.push_str(" [admin]");
    }

    line
}
