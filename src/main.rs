use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use vulcand_client::{Backend, Frontend, Server, VulcandClient};

/// Command-line access to the Vulcand control API
#[derive(Parser, Debug)]
#[command(name = "vulcand-client")]
#[command(about = "Manage Vulcand backends, servers and frontends")]
struct Args {
    /// Vulcand API address as host:port
    #[arg(long, short = 'a', global = true, default_value = "localhost:8182")]
    api_url: String,

    /// Extra request header as NAME=VALUE. May be repeated.
    #[arg(long = "header", short = 'H', global = true, value_parser = parse_header)]
    headers: Vec<(String, String)>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all backends
    ListBackends,
    /// Show one backend
    GetBackend { backend_id: String },
    /// Create or update a backend from a JSON file
    UpsertBackend { file: PathBuf },
    /// Delete a backend
    DeleteBackend { backend_id: String },
    /// List the servers of a backend
    ListServers { backend_id: String },
    /// Show one server of a backend
    GetServer {
        backend_id: String,
        server_id: String,
    },
    /// Create or update a server of a backend from a JSON file
    UpsertServer { backend_id: String, file: PathBuf },
    /// Delete a server from a backend
    DeleteServer {
        backend_id: String,
        server_id: String,
    },
    /// List all frontends
    ListFrontends,
    /// Show one frontend
    GetFrontend { frontend_id: String },
    /// Create or update a frontend from a JSON file
    UpsertFrontend { file: PathBuf },
    /// Delete a frontend
    DeleteFrontend { frontend_id: String },
}

fn parse_header(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("Invalid header '{}'. Expected NAME=VALUE", raw)),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // stdout carries the JSON results, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let client = args
        .headers
        .into_iter()
        .fold(VulcandClient::new(), |client, (name, value)| {
            client.with_header(name, value)
        });

    tracing::debug!("Using Vulcand API at {}", args.api_url);

    handle_command(&client, &args.api_url, args.command).await
}

async fn handle_command(
    client: &VulcandClient,
    api_url: &str,
    cmd: Command,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Command::ListBackends => print_json(&client.list_backends(api_url).await?),
        Command::GetBackend { backend_id } => {
            print_json(&client.get_backend_by_id(api_url, &backend_id).await?)
        }
        Command::UpsertBackend { file } => {
            let backend: Backend = read_json(&file)?;
            print_json(&client.upsert_backend(api_url, &backend).await?)
        }
        Command::DeleteBackend { backend_id } => {
            client.delete_backend_by_id(api_url, &backend_id).await?;
            tracing::info!("Deleted backend {}", backend_id);
            Ok(())
        }
        Command::ListServers { backend_id } => {
            print_json(&client.list_servers(api_url, &backend_id).await?)
        }
        Command::GetServer {
            backend_id,
            server_id,
        } => print_json(
            &client
                .get_server_by_id(api_url, &backend_id, &server_id)
                .await?,
        ),
        Command::UpsertServer { backend_id, file } => {
            let server: Server = read_json(&file)?;
            print_json(&client.upsert_server(api_url, &backend_id, &server).await?)
        }
        Command::DeleteServer {
            backend_id,
            server_id,
        } => {
            client
                .delete_server_by_id(api_url, &backend_id, &server_id)
                .await?;
            tracing::info!("Deleted server {} from backend {}", server_id, backend_id);
            Ok(())
        }
        Command::ListFrontends => print_json(&client.list_frontends(api_url).await?),
        Command::GetFrontend { frontend_id } => {
            print_json(&client.get_frontend_by_id(api_url, &frontend_id).await?)
        }
        Command::UpsertFrontend { file } => {
            let frontend: Frontend = read_json(&file)?;
            print_json(&client.upsert_frontend(api_url, &frontend).await?)
        }
        Command::DeleteFrontend { frontend_id } => {
            client.delete_frontend_by_id(api_url, &frontend_id).await?;
            tracing::info!("Deleted frontend {}", frontend_id);
            Ok(())
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, Box<dyn std::error::Error>> {
    let raw = std::fs::read(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    Ok(serde_json::from_slice(&raw)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
