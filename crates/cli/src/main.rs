//! `customers-api` CLI entry-point.
//!
//! Available sub-commands:
//! - `serve` — start the HTTP API server.
//! - `ping`  — connect to the database and print its current time.

use clap::{Parser, Subcommand};
use tracing::info;

use db::DbConfig;

#[derive(Parser)]
#[command(
    name = "customers-api",
    about = "CRUD HTTP API over the clientes table",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the REST API server.
    Serve {
        /// Listen address; defaults to 0.0.0.0:$PORT (or port 3000).
        #[arg(long)]
        bind: Option<String>,
    },
    /// Create the connection pool and print the database server time.
    Ping,
}

/// Listen address from the `PORT` environment variable, port 3000 fallback.
fn default_bind() -> String {
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    format!("0.0.0.0:{port}")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { bind } => {
            let bind = bind.unwrap_or_else(default_bind);
            info!("Starting API server on {bind}");
            let config = DbConfig::from_env()?;
            let pool = db::pool::create_pool(&config, 10).await?;
            api::serve(&bind, pool).await?;
        }
        Command::Ping => {
            let config = DbConfig::from_env()?;
            let pool = db::pool::create_pool(&config, 1).await?;
            let server_time = db::pool::ping(&pool).await?;
            println!("{server_time}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_accepts_an_explicit_bind_address() {
        let cli = Cli::try_parse_from(["customers-api", "serve", "--bind", "127.0.0.1:8080"])
            .expect("should parse");
        match cli.command {
            Command::Serve { bind } => assert_eq!(bind.as_deref(), Some("127.0.0.1:8080")),
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn ping_takes_no_arguments() {
        let cli = Cli::try_parse_from(["customers-api", "ping"]).expect("should parse");
        assert!(matches!(cli.command, Command::Ping));
    }
}
