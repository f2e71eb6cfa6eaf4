pub mod axum_server;
pub mod error_reporter;
pub mod internal;

use std::sync::Arc;

use teloxide::requests::Requester;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::bots::{
    get_bot_commands, BotContext, BotSettings, CommandTable, TelegramClient, Texts,
    UpdateDispatcher,
};
use crate::config::{self, Config};

use self::axum_server::{start_axum_server, AppState};

pub fn bot_settings(config: &Config, bot_username: Option<String>) -> BotSettings {
    let commands = match &config.enabled_commands {
        Some(v) => CommandTable::new(v.iter().copied()),
        None => CommandTable::all(),
    };

    BotSettings {
        texts: Texts::for_language(config.language),
        bot_username,
        commands,
        website_url: config.website_url.clone(),
        demo_photo: config.demo_photo.clone(),
        villa_photos: config.villa_photos.clone(),
        photo_delay: config.photo_delay,
    }
}

pub async fn start(shutdown: CancellationToken) -> anyhow::Result<()> {
    let config = &*config::CONFIG;

    let bot = internal::build_bot(&config.bot_token, config.telegram_bot_api.clone());

    let bot_username = match bot.get_me().await {
        Ok(me) => me.user.username.clone(),
        Err(err) => {
            warn!(error = %err, "Cannot fetch bot username");
            None
        }
    };
    let settings = bot_settings(config, bot_username);

    info!(
        language = %config.language,
        commands = settings.commands.commands().len(),
        "Start bot"
    );

    internal::set_commands(&bot, get_bot_commands(&settings)).await;

    if let Some(url) = &config.webhook_url {
        internal::set_webhook(&bot, url.clone()).await;
    }

    let ctx = BotContext::new(Arc::new(TelegramClient::new(bot)), settings);

    let state = AppState {
        dispatcher: Arc::new(UpdateDispatcher::new(ctx)),
        shutdown,
        log_raw_updates: config.log_raw_updates,
    };

    start_axum_server(state, config.webhook_port).await
}
