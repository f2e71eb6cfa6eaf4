pub mod client;
pub mod dispatcher;
pub mod errors;
pub mod keyboards;
pub mod modules;
pub mod texts;

#[cfg(test)]
pub mod testing;

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use teloxide::types::BotCommand;
use url::Url;

pub use self::client::{BotApi, PhotoSource, SendOptions, SentMessage, TelegramClient};
pub use self::dispatcher::UpdateDispatcher;
pub use self::modules::commands::{Command, CommandTable};
pub use self::texts::{Language, Texts};

pub type BotHandlerInternal<T = ()> = Result<T, Box<dyn Error + Send + Sync>>;

/// Per-deployment data; the handlers themselves never change between deployments.
#[derive(Debug)]
pub struct BotSettings {
    pub texts: &'static Texts,
    /// Username from `getMe`, used to accept `/command@username`.
    pub bot_username: Option<String>,
    pub commands: CommandTable,
    pub website_url: Url,
    pub demo_photo: PhotoSource,
    pub villa_photos: Vec<PhotoSource>,
    pub photo_delay: Duration,
}

/// What every handler gets: the outbound client and the deployment settings.
#[derive(Clone)]
pub struct BotContext {
    pub api: Arc<dyn BotApi>,
    pub settings: Arc<BotSettings>,
}

impl BotContext {
    pub fn new(api: Arc<dyn BotApi>, settings: BotSettings) -> Self {
        Self {
            api,
            settings: Arc::new(settings),
        }
    }

    pub fn texts(&self) -> &'static Texts {
        self.settings.texts
    }
}

pub fn get_bot_commands(settings: &BotSettings) -> Vec<BotCommand> {
    settings
        .commands
        .commands()
        .iter()
        .map(|command| BotCommand {
            command: command.to_string(),
            description: settings.texts.command_description(*command).to_string(),
        })
        .collect()
}
