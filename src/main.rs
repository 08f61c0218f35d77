use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;

use scaffold_cli::bootstrap::checks::SystemHost;
use scaffold_cli::bootstrap::{BootstrapOptions, prepare};
use scaffold_cli::config::default_registry;
use scaffold_cli::version::registries::NpmRegistry;
use scaffold_cli::version::resolver::VersionResolver;

#[derive(Parser, Debug)]
#[command(name = "scaffold-cli")]
#[command(version, about = "Scaffolding command-line tool")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Registry base URL (overrides --original)
    #[arg(long, global = true, value_name = "URL")]
    registry: Option<String>,

    /// Use the upstream npm registry instead of the mirror
    #[arg(long, global = true)]
    original: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// List every published version of a package
    Versions { package: String },
    /// Print the latest published version of a package
    Latest { package: String },
    /// Print the newest published version above a base version
    Next {
        package: String,
        base_version: String,
    },
}

impl Cli {
    fn registry_url(&self) -> String {
        self.registry
            .clone()
            .unwrap_or_else(|| default_registry(self.original).to_string())
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let _log_guard = scaffold_cli::log::init(cli.debug)?;

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let resolver = VersionResolver::new(NpmRegistry::new(&cli.registry_url()));

    match cli.command {
        None => match prepare(&BootstrapOptions::default(), &SystemHost, &resolver).await {
            Ok(_) => Ok(ExitCode::SUCCESS),
            Err(e) => {
                error!("{}", e);
                error!("scaffold-cli bootstrap failed");
                Ok(ExitCode::FAILURE)
            }
        },
        Some(Command::Versions { package }) => {
            for version in resolver.list_versions(&package).await? {
                println!("{}", version);
            }
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Latest { package }) => {
            print_optional(resolver.resolve_latest_version(&package).await?);
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Next {
            package,
            base_version,
        }) => {
            print_optional(resolver.resolve_next_version(&base_version, &package).await?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn print_optional(version: Option<String>) {
    match version {
        Some(version) => println!("{}", version),
        None => eprintln!("No matching version published"),
    }
}
