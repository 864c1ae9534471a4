use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use version_badge::badge::server::create_router;
use version_badge::config::Config;
use version_badge::logging::init_logging;
use version_badge::platform::{GitPlatform, RepoReference};
use version_badge::version::clients::GitHubClient;
use version_badge::version::engine::VersionInferenceEngine;

#[derive(Parser)]
#[command(name = "version-badge")]
#[command(version, about = "Release version badges for hosted repositories")]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve badges over HTTP (default)
    Serve {
        /// Address to listen on, overriding the configuration
        #[arg(long)]
        bind: Option<String>,
    },
    /// Print the inferred version of a repository
    Infer {
        /// Git platform (e.g., "github")
        platform: String,
        owner: String,
        repo: String,
        /// Project directory; reads its manifest instead of the latest tag
        #[arg(long)]
        path: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let _guard = init_logging(&config.logging)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    match cli.command {
        None => runtime.block_on(serve(config, None)),
        Some(Command::Serve { bind }) => runtime.block_on(serve(config, bind)),
        Some(Command::Infer {
            platform,
            owner,
            repo,
            path,
        }) => runtime.block_on(infer(config, &platform, &owner, &repo, path.as_deref())),
    }
}

fn create_engine(config: &Config) -> Arc<VersionInferenceEngine> {
    let client = GitHubClient::new(&config.github.api_base_url, &config.github.raw_base_url);
    Arc::new(VersionInferenceEngine::new(
        Arc::new(client),
        &config.inference.branch,
    ))
}

async fn serve(config: Config, bind: Option<String>) -> anyhow::Result<()> {
    let address = bind.unwrap_or_else(|| config.server.bind_address.clone());
    let router = create_router(create_engine(&config));

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    tracing::info!("Server listening on {}", address);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
    }
}

async fn infer(
    config: Config,
    platform: &str,
    owner: &str,
    repo: &str,
    path: Option<&str>,
) -> anyhow::Result<()> {
    let platform: GitPlatform = platform.parse().map_err(anyhow::Error::msg)?;
    let repo = RepoReference::new(platform, owner, repo, path)?;

    match create_engine(&config).infer_version(&repo).await {
        Ok(version) => {
            println!("{}", version);
            Ok(())
        }
        Err(e) => anyhow::bail!("{} (HTTP {})", e, e.category().status_code().as_u16()),
    }
}
