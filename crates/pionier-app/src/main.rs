use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;

use pionier_app::config::{default_config_path, load_config};
use pionier_app::service::App;
use pionier_core::language::{Language, ALL_LANGUAGES};
use pionier_core::validate::TranslationRequest;

#[derive(Parser)]
#[command(name = "pionier", about = "Personal translation assistant")]
struct Cli {
    /// Config file path. Defaults to the per-user config directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Translate one text and log it to history.
    Translate {
        #[arg(long)]
        user: String,
        #[arg(long, env = "PIONIER_PASSWORD", hide_env_values = true)]
        password: String,
        /// Source language (code or display name).
        #[arg(long, value_name = "LANG")]
        from: Language,
        /// Target language (code or display name).
        #[arg(long, value_name = "LANG")]
        to: Language,
        /// Text to translate. Read from stdin when omitted.
        text: Option<String>,
    },
    /// Show translation history, grouped by date.
    History {
        #[arg(long)]
        user: String,
        #[arg(long, env = "PIONIER_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// List the supported languages.
    Languages,
    /// Hash a password for the config's user table.
    HashPassword { password: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Languages => {
            for lang in ALL_LANGUAGES {
                println!("{}  {}", lang.code(), lang.display_name());
            }
            Ok(())
        }
        Command::HashPassword { password } => {
            let hash = pionier_auth::credentials::hash_password(&password)
                .map_err(|e| eyre::eyre!("{e}"))?;
            println!("{hash}");
            Ok(())
        }
        Command::Translate {
            user,
            password,
            from,
            to,
            text,
        } => {
            let app = build_app(cli.config).await?;
            let text = match text {
                Some(text) => text,
                None => std::io::read_to_string(std::io::stdin())?,
            };

            let session = app
                .login(&user, &password)
                .await
                .map_err(|_| eyre::eyre!("Nieprawidłowe dane logowania!"))?;

            let request = TranslationRequest {
                text,
                source: from,
                target: to,
            };
            let result = app.translate(session.token, request).await;
            app.logout(session.token).await;

            let record = result.map_err(|e| eyre::eyre!("{e}"))?;
            println!("{}", record.translation);
            Ok(())
        }
        Command::History { user, password } => {
            let app = build_app(cli.config).await?;
            let session = app
                .login(&user, &password)
                .await
                .map_err(|_| eyre::eyre!("Nieprawidłowe dane logowania!"))?;

            let result = app.history(session.token).await;
            app.logout(session.token).await;

            let groups = result.map_err(|e| eyre::eyre!("{e}"))?;
            if groups.is_empty() {
                println!("Brak historii.");
                return Ok(());
            }
            for group in groups {
                println!("📅 {}", group.date);
                for record in &group.records {
                    println!("  ⏰ {}", record.timestamp.time());
                    println!("  📄 {}: {}", record.source_lang, record.original);
                    println!("  🔊 {}: {}", record.target_lang, record.translation);
                }
            }
            Ok(())
        }
    }
}

async fn build_app(config_path: Option<PathBuf>) -> Result<App> {
    let path = match config_path {
        Some(path) => path,
        None => default_config_path()?,
    };
    let config = load_config(&path)?;
    Ok(App::from_config(config).await)
}
