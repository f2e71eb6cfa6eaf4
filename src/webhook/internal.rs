use teloxide::adaptors::throttle::Limits;
use teloxide::requests::{Requester, RequesterExt};
use teloxide::types::BotCommand;
use teloxide::Bot;
use tracing::{error, info};
use url::Url;

use crate::bots::client::TelegramBot;

pub fn build_bot(token: &str, api_url: Url) -> TelegramBot {
    Bot::new(token)
        .set_api_url(api_url)
        .throttle(Limits::default())
        .cache_me()
}

pub async fn set_webhook(bot: &TelegramBot, url: Url) {
    info!(url = %url, "Set webhook");

    if let Err(err) = bot.set_webhook(url).await {
        error!(error = %err, "Cannot set webhook");
    }
}

pub async fn set_commands(bot: &TelegramBot, commands: Vec<BotCommand>) {
    let result = if commands.is_empty() {
        bot.delete_my_commands().await
    } else {
        bot.set_my_commands(commands).await
    };

    if let Err(err) = result {
        error!(error = %err, "Cannot publish bot commands");
    }
}
