mod api;
mod auth;
mod config;
mod dashboard;
mod session;
mod types;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use api::{BotApi, HttpApiClient};
use auth::{AuthGate, SUBMIT_BUSY_LABEL};
use config::Settings;
use dashboard::poller::fetch_bot_status;
use dashboard::{compose, BotControl, DataPoller, SnapshotStore, APP_VERSION, LOADING};
use session::{Session, SessionStore};
use types::Credentials;

#[derive(Parser)]
#[command(name = "trinkenbot-dash")]
#[command(author = "Trinkenbot")]
#[command(version = "2.0.0")]
#[command(about = "Terminal dashboard for the Trinkenbot XT.com arbitrage bot", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in with XT.com API keys and store the session token
    Login {
        /// XT.com API key
        #[arg(long)]
        api_key: String,
        /// XT.com API secret
        #[arg(long)]
        api_secret: String,
        /// Dashboard password
        #[arg(long)]
        password: String,
    },
    /// Watch the live dashboard in the terminal
    Dashboard,
    /// Show the current bot status
    Status,
    /// Start the bot if it is stopped, stop it if it is running
    Toggle,
    /// Forget the stored session token
    Logout,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    dotenvy::dotenv().ok();

    let settings = Settings::load(cli.config.as_deref())?;
    if let Err(problems) = settings.validate() {
        for problem in &problems {
            error!("{}", problem);
        }
        return Err(anyhow!("configuration is invalid"));
    }

    info!("Trinkenbot Dashboard {}", APP_VERSION);

    match cli.command {
        Commands::Login {
            api_key,
            api_secret,
            password,
        } => {
            run_login(&settings, Credentials::new(api_key, api_secret, password)).await?;
        }
        Commands::Dashboard => run_dashboard(&settings).await?,
        Commands::Status => show_status(&settings).await?,
        Commands::Toggle => toggle_bot(&settings).await?,
        Commands::Logout => run_logout(&settings)?,
    }

    Ok(())
}

async fn run_login(settings: &Settings, credentials: Credentials) -> Result<()> {
    let session = Arc::new(SessionStore::open(settings.session_path())?);
    let api: Arc<dyn BotApi> = Arc::new(HttpApiClient::new(
        settings.backend_url.clone(),
        settings.control_api_key.clone(),
    ));
    let gate = AuthGate::new(api, session);

    println!("{}", SUBMIT_BUSY_LABEL);
    let outcome = gate.submit(&credentials).await?;

    match outcome.message {
        Some(message) => println!("{}", message),
        None => println!("Вхід успішний"),
    }
    if let Some(count) = outcome.futures_count {
        println!("Доступно ф'ючерсних пар: {}", count);
    }

    Ok(())
}

async fn run_dashboard(settings: &Settings) -> Result<()> {
    let session = restored_session(settings)?;
    let api = authed_client(settings, session.token);

    let store = SnapshotStore::new();
    let mut refreshes = store.subscribe();
    let poller = DataPoller::start(Arc::clone(&api), store.clone(), settings.poll_interval());

    println!("{}", LOADING);

    loop {
        tokio::select! {
            event = refreshes.recv() => {
                match event {
                    Ok(_) | Err(RecvError::Lagged(_)) => redraw(&store).await,
                    Err(RecvError::Closed) => break,
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutting down...");
                break;
            }
        }
    }

    poller.stop();
    Ok(())
}

async fn redraw(store: &SnapshotStore) {
    let data = store.view_data().await;
    // Loading screen stays up until the first dashboard fetch settles.
    if !data.settled {
        return;
    }
    let view = compose(data.dashboard.as_ref(), data.status.as_ref(), data.refreshed_at);
    println!("\x1B[2J\x1B[1;1H{}", view);
}

async fn show_status(settings: &Settings) -> Result<()> {
    let session = restored_session(settings)?;
    let api = authed_client(settings, session.token);

    let status = api.bot_status().await?;
    let view = compose(None, Some(&status), None);

    println!("🤖 Статус бота");
    println!("  {}", view.bot.indicator);
    println!("  Сканується пар: {}", view.bot.pairs_scanned);
    println!("  Час роботи: {}", view.bot.uptime);
    println!("  XT.com: {}", view.bot.xt_connection);

    Ok(())
}

async fn toggle_bot(settings: &Settings) -> Result<()> {
    let session = restored_session(settings)?;
    let api = authed_client(settings, session.token);

    // The toggle direction comes from the last known status.
    let store = SnapshotStore::new();
    fetch_bot_status(Arc::clone(&api), store.clone()).await;

    let control = BotControl::new(Arc::clone(&api), store.clone());
    let outcome = control.toggle().await?;

    if let Some(message) = outcome.ack.message {
        println!("{}", message);
    }
    let status = store.status().await;
    let view = compose(None, status.as_ref(), None);
    println!("{}", view.bot.indicator);

    Ok(())
}

fn run_logout(settings: &Settings) -> Result<()> {
    let store = SessionStore::open(settings.session_path())?;
    store.logout()?;
    println!("Сесію завершено");
    Ok(())
}

fn restored_session(settings: &Settings) -> Result<Session> {
    let store = SessionStore::open(settings.session_path())?;
    store
        .restore()?
        .ok_or_else(|| anyhow!("Немає збереженої сесії. Спочатку виконайте: trinkenbot-dash login"))
}

fn authed_client(settings: &Settings, token: String) -> Arc<dyn BotApi> {
    Arc::new(
        HttpApiClient::new(settings.backend_url.clone(), settings.control_api_key.clone())
            .with_session_token(token),
    )
}
