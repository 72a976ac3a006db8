use std::sync::Arc;

use eyre::{Context, Result};
use fde_dashboard::app::services::{EventService, FeedService};
use fde_dashboard::backend::new_store;
use fde_dashboard::config::constants::SHUTDOWN_TIMEOUT;
use fde_dashboard::config::{Configuration, init_logger, verbose};
use fde_dashboard::issues::{IssueBoard, KeywordSets};
use fde_dashboard::{
    app::{App, destruct_terminal_for_panic},
    cli::Command,
};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> Result<()> {
    let cmd = Command::new();
    if cmd.version() {
        cmd.print_version();
        return Ok(());
    }

    std::panic::set_hook(Box::new(|panic_info| {
        destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    let config = cmd.get_config()?;
    Configuration::init(config.clone())?;

    init_logger(&config.log)?;
    verbose!("[+] Logger initialized");

    let keywords = KeywordSets::from_config(&config.keywords).wrap_err("loading keywords")?;
    verbose!(
        "[+] Keywords: {} stop words, {} technical, {} business",
        config
            .keywords
            .stop_words
            .as_ref()
            .map(|w| w.len().to_string())
            .unwrap_or_else(|| "default".to_string()),
        keywords.technical().len(),
        keywords.business().len()
    );

    let mut board = IssueBoard::new(keywords)
        .with_fallback_title(&config.dashboard.fallback_title)
        .with_dedup_by_id(config.dashboard.dedup_by_id);

    verbose!("[+] Initializing ticket store...");
    let store = new_store(&config.store).wrap_err("initializing ticket store")?;

    if cmd.snapshot() {
        match store.load_all().await {
            Ok(rows) => board.load(rows),
            Err(err) => {
                log::error!("Failed to load tickets: {}", err);
                eprintln!("Failed to load tickets: {}", err);
            }
        }
        println!(
            "{}",
            serde_json::to_string_pretty(board.views()).wrap_err("encoding board")?
        );
        return Ok(());
    }

    let mut events = EventService::default();
    let token = CancellationToken::new();

    let feed = FeedService::new(store, Arc::new(events.event_tx()), token.clone());
    let feed_handle = tokio::spawn(async move {
        if let Err(err) = feed.run().await {
            log::error!("Feed stopped: {}", err);
        }
    });

    let mut app = App::new(&mut events, board, &config.dashboard, token.clone());
    if let Err(err) = app.run().await {
        eprintln!("Error: {}", err);
    }

    token.cancel();
    match tokio::time::timeout(SHUTDOWN_TIMEOUT, feed_handle).await {
        Ok(Ok(_)) => {}
        Ok(Err(err)) => log::error!("Feed task error: {}", err),
        Err(_) => eprintln!("Shutdown timeout reached"),
    }

    Ok(())
}
