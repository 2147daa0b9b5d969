//! Resolve a display language and render one catalog message.
//!
//! Usage:
//!   catalog-i18n [--summary] [--accept-language <prefs>] <message-key> [name=value ...]
//!
//! Examples:
//!   catalog-i18n --accept-language "fr-FR, fr;q=0.9" greeting name=Ann
//!   catalog-i18n --summary
//!
//! Optional environment variables:
//! - I18N_DEFAULT_LANGUAGE (defaults to en)
//! - I18N_ACCEPT_LANGUAGE (used when --accept-language is not given)
//! - I18N_LOG_LEVEL (defaults to info)

use anyhow::{bail, Context, Result};
use catalog_i18n::config::Config;
use catalog_i18n::i18n::{
    parse_user_language_preferences, select_most_suitable_language, ParameterizedMessage,
    Parameters, StringDatabase,
};
use tracing::{info, warn};

/// Parsed command line
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    summary: bool,
    accept_language: Option<String>,
    message_key: Option<String>,
    params: Parameters,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliArgs> {
    let mut cli = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--summary" => cli.summary = true,
            "--accept-language" => {
                let value = args
                    .next()
                    .context("--accept-language requires a value")?;
                cli.accept_language = Some(value);
            }
            _ if cli.message_key.is_none() => cli.message_key = Some(arg),
            _ => {
                let Some((name, value)) = arg.split_once('=') else {
                    bail!("Expected name=value parameter, got '{}'", arg);
                };
                cli.params.insert(name.to_string(), value.to_string());
            }
        }
    }

    Ok(cli)
}

/// Render a message, degrading to its raw key if the key is unknown.
fn render_or_key(db: &StringDatabase, message: &ParameterizedMessage, lang: &str) -> String {
    match message.get_text(db, lang) {
        Ok(text) => text,
        Err(e) => {
            warn!("Failed to render '{}': {}", message.message_key(), e);
            message.message_key().to_string()
        }
    }
}

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("catalog_i18n={}", config.log_level).parse()?),
        )
        .init();

    let cli = parse_args(std::env::args().skip(1))?;

    let db = StringDatabase::compiled(&config.default_language)
        .context("Failed to build string database")?;

    if cli.summary {
        println!("{}", serde_json::to_string_pretty(&db.summary())?);
        return Ok(());
    }

    let Some(message_key) = cli.message_key else {
        bail!("Usage: catalog-i18n [--summary] [--accept-language <prefs>] <message-key> [name=value ...]");
    };

    let accept_language = cli.accept_language.unwrap_or(config.accept_language);
    let prefs = parse_user_language_preferences(&accept_language);
    let lang = select_most_suitable_language(&db, &prefs);
    info!(
        "Resolved '{}' to language '{}' ({} candidates)",
        accept_language,
        lang,
        prefs.len()
    );

    let message = ParameterizedMessage::with_params(message_key, cli.params);
    println!("{}\t{}", lang, render_or_key(&db, &message, &lang));

    Ok(())
}
