mod publish;
mod routes;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "jpost")]
#[command(about = "Route journal entries to social platforms")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the archetype route table
    Routes {
        /// Only show routes for this platform (tiktok, threads, linkedin, twitter)
        #[arg(long)]
        platform: Option<String>,
    },
    /// Format an entry for its platform without posting it
    Preview(EntryArgs),
    /// Format an entry and post it
    Post {
        #[command(flatten)]
        entry: EntryArgs,
        /// Use the platform's native API instead of its webhook (twitter, linkedin)
        #[arg(long)]
        direct: bool,
    },
}

#[derive(Debug, Clone, Args)]
pub(crate) struct EntryArgs {
    /// Archetype key, e.g. coding-tips
    pub(crate) archetype: String,
    /// Entry text; read from stdin when omitted
    #[arg(long)]
    pub(crate) content: Option<String>,
    /// Hashtag to use instead of the route's defaults; repeatable
    #[arg(long = "hashtag")]
    pub(crate) hashtags: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = jpost_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let table = jpost_core::route_table_for(&config)?;

    match cli.command {
        Commands::Routes { platform } => routes::run_routes(&table, platform.as_deref())?,
        Commands::Preview(entry) => publish::run_preview(&table, &entry)?,
        Commands::Post { entry, direct } => {
            publish::run_post(&table, &config, &entry, direct).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests;
