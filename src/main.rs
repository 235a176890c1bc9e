use clap::{Parser, Subcommand};
use podrss::{config::Config, routes::create_router, utils::init_logger, AppState};
use tokio::net::TcpListener;
use tracing::info;

/// Search podcasts by name and get their RSS feed links
#[derive(Parser, Debug)]
#[command(name = "podrss")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server (search API and web page)
    Serve,
    /// Search from the terminal through a running server
    Tui {
        /// Base URL of the search server
        #[arg(long, env = "PROXY_URL")]
        proxy: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(config).await,
        Commands::Tui { proxy } => {
            // No subscriber here: log lines would corrupt the alternate screen
            let proxy_url = proxy.unwrap_or(config.client.proxy_url);
            podrss::tui::run(&proxy_url).await
        }
    }
}

async fn serve(config: Config) -> anyhow::Result<()> {
    init_logger();
    info!("Configuration loaded: {:?}", config.server);

    let addr = config.bind_address();
    let state = AppState::new(config);
    let app = create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
