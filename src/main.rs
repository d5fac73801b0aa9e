use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use pokedex::config::ServerConfig;
use pokedex::server::{AppState, create_router};
use pokedex::store::{SqliteStore, Store};

#[derive(Parser)]
#[command(name = "pokedex")]
#[command(about = "A Pokemon records API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database schema and seed lookup tables
    Init {
        /// Path of the SQLite database
        #[arg(long, env = "POKEDEX_DATABASE", default_value = "./data/pokedex.db")]
        database: PathBuf,

        /// Skip inserting colors, shapes and types
        #[arg(long)]
        no_seed: bool,
    },

    /// Start the server
    Serve {
        /// TOML file with server settings; flags override its values
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long, short)]
        port: Option<u16>,

        /// Path of the SQLite database
        #[arg(long, env = "POKEDEX_DATABASE")]
        database: Option<PathBuf>,

        /// Enable debug logging
        #[arg(long)]
        debug: bool,
    },
}

fn init_tracing(debug: bool) -> anyhow::Result<()> {
    let directive = if debug { "pokedex=debug" } else { "pokedex=info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .init();
    Ok(())
}

fn open_store(database: &Path) -> anyhow::Result<SqliteStore> {
    if let Some(parent) = database.parent() {
        fs::create_dir_all(parent)?;
    }
    let store = SqliteStore::new(database)?;
    store.initialize()?;
    Ok(store)
}

fn run_init(database: &Path, no_seed: bool) -> anyhow::Result<()> {
    let store = open_store(database)?;
    if !no_seed {
        store.seed_lookups()?;
    }
    info!("Initialized database at {}", database.display());
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { database, no_seed } => {
            init_tracing(false)?;
            run_init(&database, no_seed)?;
        }
        Commands::Serve {
            config,
            host,
            port,
            database,
            debug,
        } => {
            let mut config = match config {
                Some(path) => ServerConfig::from_file(path)?,
                None => ServerConfig::default(),
            };
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(database) = database {
                config.database = database;
            }
            config.debug |= debug;

            init_tracing(config.debug)?;

            let store = open_store(&config.database)?;
            info!("Using database {}", config.database.display());

            let state = Arc::new(AppState {
                store: Arc::new(store),
                default_per_page: config.default_per_page,
            });

            let app = create_router(state);
            let addr = config.socket_addr()?;

            info!("Starting server on {}", addr);

            let listener = tokio::net::TcpListener::bind(addr).await?;
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
