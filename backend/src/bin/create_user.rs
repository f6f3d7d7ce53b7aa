//! Register a user in the configured database.
//!
//! The HTTP surface has no registration route, so accounts are created here.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io;
use std::sync::Arc;

use authgate::domain::{UserRecord, UserStore};
use authgate::outbound::connect_user_repository;
use authgate::outbound::hashing::BcryptPasswordHasher;
use authgate::settings::ServerSettings;
use clap::Parser;
use ortho_config::OrthoConfig;
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};
use zeroize::Zeroizing;

/// `create-user` command arguments.
#[derive(Clone, Parser)]
#[command(
    name = "create-user",
    about = "Hash a password and store a new user for the login endpoint",
    version
)]
struct CliArgs {
    /// Login name; must not already exist.
    #[arg(long, value_name = "name")]
    username: String,
    /// Plaintext password; only its bcrypt hash is stored.
    #[arg(long, value_name = "secret")]
    password: String,
    /// Database connection URL. Falls back to `AUTHGATE_DATABASE_URL`.
    #[arg(long = "database-url", value_name = "url")]
    database_url: Option<String>,
}

fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main())
}

async fn async_main() -> io::Result<()> {
    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    let database_url = resolve_database_url(args.database_url)?;
    let password = Zeroizing::new(args.password);

    let repository = connect_user_repository(Some(&database_url))
        .await
        .map_err(|error| io::Error::other(format!("connect user store: {error}")))?;
    let store = UserStore::new(repository, Arc::new(BcryptPasswordHasher::default()));

    match store
        .create(&UserRecord::new(args.username, password.as_str()))
        .await
    {
        Ok(created) => {
            println!("{}", created.message());
            Ok(())
        }
        Err(failure) => Err(io::Error::other(failure.message().to_owned())),
    }
}

/// Prefer the flag; otherwise read `AUTHGATE_DATABASE_URL` through the shared
/// settings. An in-memory store would discard the user on exit, so a URL is
/// required.
fn resolve_database_url(flag: Option<String>) -> io::Result<String> {
    if let Some(url) = flag.filter(|url| !url.trim().is_empty()) {
        return Ok(url);
    }

    let settings = ServerSettings::load_from_iter([OsString::from("create-user")])
        .map_err(|error| io::Error::other(format!("load settings: {error}")))?;
    settings.database_url().map(str::to_owned).ok_or_else(|| {
        io::Error::other("missing database URL: pass --database-url or set AUTHGATE_DATABASE_URL")
    })
}
