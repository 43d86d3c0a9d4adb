// # phonebook - terminal contact client
//
// Thin integration layer: all contact logic lives in phonebook-core, all
// HTTP in phonebook-http. This binary is responsible for:
// 1. Reading configuration from environment variables
// 2. Initializing logging and the runtime
// 3. Wiring the HTTP API and the stdin confirmation into the app
// 4. Running the line-oriented terminal session
//
// ## Configuration
//
// - `PHONEBOOK_API_URL`: Contacts collection URL
//   (default `http://localhost:3001/api/contacts`)
// - `PHONEBOOK_NOTIFICATION_SECS`: How long status messages stay visible (default 10)
// - `PHONEBOOK_LOG_LEVEL`: trace, debug, info, warn, error (default warn)
//
// Logs go to stderr so they do not interleave with the contact list.
//
// ## Example
//
// ```bash
// export PHONEBOOK_API_URL=http://localhost:3001/api/contacts
// phonebook
// > add Arto Hellas 040-123456
// > search art
// > delete 1
// ```

mod command;
mod render;
mod terminal;

use anyhow::{Context, Result};
use phonebook_core::{PhonebookApp, PhonebookConfig};
use phonebook_http::HttpContactApi;
use std::env;
use std::process::ExitCode;
use tracing::{Level, debug, error, info};
use tracing_subscriber::FmtSubscriber;

/// Exit codes for different termination scenarios
#[derive(Debug, Clone, Copy)]
enum PhonebookExitCode {
    /// Normal exit (quit or end of input)
    CleanShutdown = 0,
    /// Configuration error or startup failure
    ConfigError = 1,
    /// Runtime error (unexpected failure)
    RuntimeError = 2,
}

impl From<PhonebookExitCode> for ExitCode {
    fn from(code: PhonebookExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// Application configuration
struct Config {
    api_url: String,
    notification_secs: u64,
    log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    fn from_env() -> Result<Self> {
        let notification_secs = match env::var("PHONEBOOK_NOTIFICATION_SECS") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PHONEBOOK_NOTIFICATION_SECS is not a number: {}", raw))?,
            Err(_) => 10,
        };

        Ok(Self {
            api_url: env::var("PHONEBOOK_API_URL")
                .unwrap_or_else(|_| phonebook_core::config::DEFAULT_API_URL.to_string()),
            notification_secs,
            log_level: env::var("PHONEBOOK_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string()),
        })
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        if !(1..=3600).contains(&self.notification_secs) {
            anyhow::bail!(
                "PHONEBOOK_NOTIFICATION_SECS must be between 1 and 3600 seconds. Got: {}",
                self.notification_secs
            );
        }

        match self.log_level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => anyhow::bail!(
                "PHONEBOOK_LOG_LEVEL '{}' is not valid. \
                Valid levels: trace, debug, info, warn, error",
                self.log_level
            ),
        }

        self.to_phonebook_config()
            .validate()
            .context("PHONEBOOK_API_URL is not usable")?;

        Ok(())
    }

    /// Build the core configuration
    fn to_phonebook_config(&self) -> PhonebookConfig {
        let mut config = PhonebookConfig::new().with_base_url(self.api_url.clone());
        config.notifications.display_secs = self.notification_secs;
        config
    }

    fn level(&self) -> Level {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "error" => Level::ERROR,
            _ => Level::WARN,
        }
    }
}

fn main() -> ExitCode {
    // Load configuration from environment
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {:#}", e);
            return PhonebookExitCode::ConfigError.into();
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("Configuration validation error: {:#}", e);
        return PhonebookExitCode::ConfigError.into();
    }

    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.level())
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return PhonebookExitCode::ConfigError.into();
    }

    info!("Starting phonebook against {}", config.api_url);

    // Single-threaded: every action runs to completion before the next
    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            return PhonebookExitCode::RuntimeError.into();
        }
    };

    let result = rt.block_on(async {
        if let Err(e) = run_session(config).await {
            error!("Session error: {:#}", e);
            PhonebookExitCode::RuntimeError
        } else {
            PhonebookExitCode::CleanShutdown
        }
    });

    // A pending stdin read must not hold up exit
    rt.shutdown_background();

    result.into()
}

/// Wire the app and run the terminal session
async fn run_session(config: Config) -> Result<()> {
    let phonebook_config = config.to_phonebook_config();

    let api = HttpContactApi::from_config(&phonebook_config.api)
        .context("Failed to create contacts API client")?;

    let input = terminal::stdin_lines();
    let confirm = terminal::LineConfirm::new(input.clone());

    let (mut app, mut events) =
        PhonebookApp::new(Box::new(api), Box::new(confirm), &phonebook_config)
            .context("Failed to create application state")?;

    tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            debug!("App event: {:?}", event);
        }
    });

    let mut stdout = std::io::stdout();
    println!("{}", command::help());
    terminal::run(&mut app, input, &mut stdout).await;

    info!("Session ended");
    Ok(())
}
