//! Ringside server binary.
//!
//! Reads `config.toml` (or the path given with `--config`) layered with
//! `RINGSIDE_*` environment variables, opens the SQLite store and serves the
//! JSON API over HTTP. The `export` and `import` subcommands move a whole
//! dataset in and out of the store without starting the server.
//!
//! # Password hash generation
//!
//! To generate the argon2 PHC string for `auth_password_hash` in config.toml:
//!
//! ```
//! cargo run -p ringside-server -- hash-password
//! ```

use std::{
  fs,
  io::{self, BufRead, Write},
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use ringside_core::{OwnerId, service::dataset};
use ringside_server::{ServerConfig, auth};
use ringside_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Ringside wrestling promotion tracker")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  #[command(subcommand)]
  command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
  /// Serve the HTTP API (the default).
  Serve,
  /// Print the argon2 hash for a password entered on stdin and exit.
  HashPassword,
  /// Write one owner's whole dataset as JSON.
  Export {
    /// Owner to export; defaults to `auth_username`.
    #[arg(long)]
    owner:  Option<String>,
    /// Output file; stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,
  },
  /// Replay a dataset JSON file into one owner's records.
  Import {
    /// Owner to import into; defaults to `auth_username`.
    #[arg(long)]
    owner: Option<String>,
    file:  PathBuf,
  },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Logs go to stderr so `export` can write JSON to stdout.
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  match cli.command.unwrap_or(Command::Serve) {
    Command::Serve => {
      let (server_cfg, store) = setup(&cli.config).await?;
      serve(server_cfg, store).await
    }
    // Helper mode: hash a password and exit.
    Command::HashPassword => {
      let password = read_password()?;
      let hash = auth::hash_password(&password)
        .map_err(|e| anyhow::anyhow!("argon2 error: {e}"))?;
      println!("{hash}");
      Ok(())
    }
    Command::Export { owner, output } => {
      let (server_cfg, store) = setup(&cli.config).await?;
      let owner = owner_or_default(owner, &server_cfg);
      let data = dataset::export(&store, &owner)
        .await
        .context("failed to export dataset")?;
      let json = serde_json::to_string_pretty(&data)?;
      match output {
        Some(path) => fs::write(&path, json)
          .with_context(|| format!("failed to write {path:?}"))?,
        None => println!("{json}"),
      }
      Ok(())
    }
    Command::Import { owner, file } => {
      let (server_cfg, store) = setup(&cli.config).await?;
      let owner = owner_or_default(owner, &server_cfg);
      let text = fs::read_to_string(&file)
        .with_context(|| format!("failed to read {file:?}"))?;
      let document: serde_json::Value =
        serde_json::from_str(&text).context("import file is not valid JSON")?;
      let report = dataset::import(&store, &owner, &document)
        .await
        .context("failed to import dataset")?;
      println!("{}", serde_json::to_string_pretty(&report)?);
      Ok(())
    }
  }
}

async fn setup(config_path: &Path) -> anyhow::Result<(ServerConfig, SqliteStore)> {
  let server_cfg = load_config(config_path)?;
  let store = open_store(&server_cfg).await?;
  Ok((server_cfg, store))
}

async fn serve(server_cfg: ServerConfig, store: SqliteStore) -> anyhow::Result<()> {
  anyhow::ensure!(
    !server_cfg.auth_password_hash.is_empty(),
    "auth_password_hash is not set; generate one with `ringside hash-password`"
  );

  let app = ringside_server::router(Arc::new(store), Arc::new(server_cfg.auth()));
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

fn load_config(path: &Path) -> anyhow::Result<ServerConfig> {
  let settings = config::Config::builder()
    .set_default("host", "127.0.0.1")?
    .set_default("port", 8080_i64)?
    .set_default("store_path", "~/.local/share/ringside/ringside.db")?
    .set_default("auth_username", "admin")?
    .add_source(config::File::from(path.to_path_buf()).required(false))
    .add_source(config::Environment::with_prefix("RINGSIDE"))
    .build()
    .context("failed to read config file")?;

  settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")
}

async fn open_store(server_cfg: &ServerConfig) -> anyhow::Result<SqliteStore> {
  // Expand `~` in store path.
  let store_path = expand_tilde(&server_cfg.store_path);
  if let Some(parent) = store_path.parent()
    && !parent.as_os_str().is_empty()
  {
    fs::create_dir_all(parent)
      .with_context(|| format!("failed to create {parent:?}"))?;
  }

  SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))
}

fn owner_or_default(owner: Option<String>, server_cfg: &ServerConfig) -> OwnerId {
  OwnerId::from(owner.unwrap_or_else(|| server_cfg.auth_username.clone()))
}

/// Read a password line from stdin. The input is echoed.
fn read_password() -> anyhow::Result<String> {
  let stdin = io::stdin();
  eprint!("Password: ");
  io::stderr().flush().ok();
  let mut line = String::new();
  stdin.lock().read_line(&mut line)?;
  Ok(
    line
      .trim_end_matches('\n')
      .trim_end_matches('\r')
      .to_string(),
  )
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
