use serenity::http::Http;
use std::sync::Arc;

use gamewatch::{
    config::Config,
    error::AppError,
    fetcher::{
        steam::{SteamFeed, SteamNewsFetcher},
        steam_store::SteamStoreLookup,
    },
    notifier::{discord::DiscordNotifier, NotificationSink},
    scheduler::{
        clock::SystemClock, coordinator::WatcherCoordinator, release::ReleaseScheduler,
        watcher::PollingWatcher,
    },
    startup,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_logging();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client(config.fetch_timeout)?;
    let discord_http = Arc::new(Http::new(&config.discord_bot_token));

    let sink: Arc<dyn NotificationSink> =
        Arc::new(DiscordNotifier::new(db.clone(), discord_http));

    let release = ReleaseScheduler::new(db.clone(), sink.clone(), Arc::new(SystemClock))
        .with_lookup(Arc::new(SteamStoreLookup::new(
            http_client.clone(),
            config.steam_store_url.clone(),
        )))
        .with_schedule(config.release_check_cron.clone())
        .with_upcoming_days(config.release_upcoming_days)
        .with_lookup_timeout(config.fetch_timeout);

    let coordinator = WatcherCoordinator::new(Arc::new(release)).await?;

    let feeds = [
        (SteamFeed::Internal, config.steam_internal_check_interval),
        (SteamFeed::External, config.steam_external_check_interval),
    ];

    for (feed, check_interval) in feeds {
        let fetcher =
            SteamNewsFetcher::new(http_client.clone(), config.steam_api_url.clone(), feed);

        coordinator
            .add_watcher(
                PollingWatcher::new(db.clone(), Arc::new(fetcher), sink.clone(), check_interval)
                    .with_fetch_timeout(config.fetch_timeout),
            )
            .await?;
    }

    coordinator.start_all().await?;

    tracing::info!("Watching for game updates, press Ctrl-C to stop");

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }

    tracing::info!("Shutting down");

    coordinator.stop_all().await
}
