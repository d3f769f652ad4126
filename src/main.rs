use anyhow::Result;
use kitap_bot::bot;
use kitap_bot::config::AppConfig;
use kitap_bot::errors::error_logging;
use kitap_bot::localization;
use kitap_bot::preferences::PreferenceStore;
use kitap_bot::search::CatalogClient;
use std::sync::Arc;
use std::time::Duration;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file first
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load and validate configuration early
    let config = AppConfig::from_env().map_err(|e| {
        error_logging::log_config_error(&e, "environment", "load");
        e
    })?;
    config.validate().map_err(|e| {
        error_logging::log_config_error(&e, "environment", "validate");
        e
    })?;

    info!(
        catalog_base_url = %config.catalog.base_url,
        result_limit = config.catalog.result_limit,
        "Configuration loaded"
    );

    // Initialize localization manager
    let localization_manager = localization::create_localization_manager()?;

    // Shared HTTP client with an explicit timeout; used for both the
    // Telegram API and the catalog searches.
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.bot.http_timeout_secs))
        .build()?;

    let catalog = Arc::new(CatalogClient::new(
        client.clone(),
        config.catalog.base_url.clone(),
    ));
    let preferences = Arc::new(PreferenceStore::new());

    let bot = Bot::with_client(config.bot.token.clone(), client);

    // Drop any webhook left over from a previous deployment so long
    // polling can take over.
    bot.delete_webhook().drop_pending_updates(true).await?;

    info!(
        http_timeout_secs = config.bot.http_timeout_secs,
        "Bot initialized, starting dispatcher"
    );

    let result_limit = config.catalog.result_limit;

    // Set up the dispatcher with shared state
    let handler = dptree::entry().branch(Update::filter_message().endpoint({
        let store = Arc::clone(&preferences);
        let catalog = Arc::clone(&catalog);
        let localization = Arc::clone(&localization_manager);
        move |bot: Bot, msg: Message| {
            let store = Arc::clone(&store);
            let catalog = Arc::clone(&catalog);
            let localization = Arc::clone(&localization);
            async move {
                bot::message_handler(bot, msg, store, catalog, localization, result_limit).await
            }
        }
    }));

    Dispatcher::builder(bot, handler)
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
