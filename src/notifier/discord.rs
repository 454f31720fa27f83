//! Discord delivery of game notifications.
//!
//! Resolves the destinations subscribed to a game and posts the embed to each one,
//! either as the bot in a channel or through the guild's webhook. A failing destination
//! is logged and counted; delivery continues with the next one.

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use serenity::{
    all::{ChannelId, CreateEmbed, CreateMessage, ExecuteWebhook, Webhook},
    http::Http,
};
use std::sync::Arc;

use crate::{
    data::destination::DestinationRepository,
    error::AppError,
    model::{
        destination::{Destination, DestinationTarget},
        game::{Game, SourceType},
        news::NewsItem,
    },
    notifier::{builder, DeliveryReport, NotificationSink},
};

pub struct DiscordNotifier {
    db: DatabaseConnection,
    http: Arc<Http>,
}

impl DiscordNotifier {
    /// Creates a new DiscordNotifier.
    ///
    /// # Arguments
    /// - `db` - Database connection used to resolve subscribed destinations
    /// - `http` - Discord HTTP client for sending messages and executing webhooks
    pub fn new(db: DatabaseConnection, http: Arc<Http>) -> Self {
        Self { db, http }
    }

    /// Sends `embed` to every destination subscribed to `game`.
    async fn deliver(
        &self,
        game: &Game,
        content: Option<String>,
        embed: CreateEmbed,
    ) -> Result<DeliveryReport, AppError> {
        let destinations = DestinationRepository::new(&self.db)
            .get_subscribed_to_game(game.id)
            .await?;

        let mut report = DeliveryReport::default();

        for destination in &destinations {
            match self
                .send_to(destination, content.as_deref(), embed.clone())
                .await
            {
                Ok(()) => report.delivered += 1,
                Err(e) => {
                    tracing::warn!(
                        "Failed to deliver notification for game {} ({}) to guild {}: {}",
                        game.id,
                        game.name,
                        destination.guild_id,
                        e
                    );
                    report.failed += 1;
                }
            }
        }

        tracing::debug!(
            "Delivered notification for game {} to {}/{} destinations",
            game.id,
            report.delivered,
            destinations.len()
        );

        Ok(report)
    }

    async fn send_to(
        &self,
        destination: &Destination,
        content: Option<&str>,
        embed: CreateEmbed,
    ) -> Result<(), AppError> {
        match &destination.target {
            DestinationTarget::Channel(channel_id) => {
                let mut message = CreateMessage::new().embed(embed);
                if let Some(content) = content {
                    message = message.content(content);
                }

                ChannelId::new(*channel_id)
                    .send_message(&self.http, message)
                    .await?;
            }
            DestinationTarget::Webhook(url) => {
                let webhook = Webhook::from_url(&self.http, url).await?;

                let mut execute = ExecuteWebhook::new().embed(embed);
                if let Some(content) = content {
                    execute = execute.content(content);
                }

                webhook.execute(&self.http, false, execute).await?;
            }
        }

        Ok(())
    }
}

#[async_trait]
impl NotificationSink for DiscordNotifier {
    async fn notify_update(
        &self,
        game: &Game,
        source_type: SourceType,
        item: &NewsItem,
    ) -> Result<DeliveryReport, AppError> {
        let embed = builder::update_embed(game, source_type, item)?;

        self.deliver(game, Some(format!("**.:New {} update:.**", game.name)), embed)
            .await
    }

    async fn notify_released_today(&self, game: &Game) -> Result<DeliveryReport, AppError> {
        let embed = builder::released_today_embed(game)?;

        self.deliver(game, None, embed).await
    }

    async fn notify_releasing_soon(
        &self,
        game: &Game,
        release_date: NaiveDate,
    ) -> Result<DeliveryReport, AppError> {
        let embed = builder::releasing_soon_embed(game, release_date)?;

        self.deliver(game, None, embed).await
    }

    async fn notify_release_date_changed(
        &self,
        game: &Game,
        old_date: NaiveDate,
        new_date: NaiveDate,
    ) -> Result<DeliveryReport, AppError> {
        let embed = builder::release_date_changed_embed(game, old_date, new_date)?;

        self.deliver(game, None, embed).await
    }
}
