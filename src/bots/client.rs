//! Outbound side of the bot: the handful of Bot API calls the handlers use.
//!
//! Handlers only see [`BotApi`]; [`TelegramClient`] backs it with teloxide in
//! production and tests substitute a recording fake.

use std::path::PathBuf;

use async_trait::async_trait;
use teloxide::{
    adaptors::{CacheMe, Throttle},
    prelude::*,
    types::{
        CallbackQueryId, ChatAction, InlineQueryId, InlineQueryResult, InputFile, InputMedia,
        InputMediaPhoto, InputPollOption, MessageId, ParseMode, ReplyMarkup,
    },
};
use url::Url;

pub type ClientError = Box<dyn std::error::Error + Send + Sync>;

/// Metadata of a message the bot has just sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentMessage {
    pub chat_id: ChatId,
    pub message_id: MessageId,
}

impl From<&Message> for SentMessage {
    fn from(message: &Message) -> Self {
        Self {
            chat_id: message.chat.id,
            message_id: message.id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoSource {
    Url(Url),
    File(PathBuf),
}

impl PhotoSource {
    /// Treats anything that parses as an http(s) URL as remote, everything else
    /// as a local path.
    pub fn parse(value: &str) -> Self {
        match Url::parse(value) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => PhotoSource::Url(url),
            _ => PhotoSource::File(PathBuf::from(value)),
        }
    }

    fn into_input_file(self) -> InputFile {
        match self {
            PhotoSource::Url(url) => InputFile::url(url),
            PhotoSource::File(path) => InputFile::file(path),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SendOptions {
    pub reply_markup: Option<ReplyMarkup>,
    pub parse_mode: Option<ParseMode>,
}

impl SendOptions {
    pub fn markup(reply_markup: impl Into<ReplyMarkup>) -> Self {
        Self {
            reply_markup: Some(reply_markup.into()),
            parse_mode: None,
        }
    }

    pub fn html(mut self) -> Self {
        self.parse_mode = Some(ParseMode::Html);
        self
    }
}

#[async_trait]
pub trait BotApi: Send + Sync {
    async fn send_message(
        &self,
        chat_id: ChatId,
        text: String,
        options: SendOptions,
    ) -> Result<SentMessage, ClientError>;

    async fn send_photo(
        &self,
        chat_id: ChatId,
        photo: PhotoSource,
        caption: Option<String>,
    ) -> Result<SentMessage, ClientError>;

    async fn send_media_group(
        &self,
        chat_id: ChatId,
        photos: Vec<PhotoSource>,
    ) -> Result<Vec<SentMessage>, ClientError>;

    async fn send_poll(
        &self,
        chat_id: ChatId,
        question: String,
        options: Vec<String>,
        is_anonymous: bool,
    ) -> Result<SentMessage, ClientError>;

    async fn answer_callback_query(&self, query_id: CallbackQueryId) -> Result<(), ClientError>;

    async fn answer_inline_query(
        &self,
        query_id: InlineQueryId,
        results: Vec<InlineQueryResult>,
        cache_time: u32,
    ) -> Result<(), ClientError>;

    async fn export_chat_invite_link(&self, chat_id: ChatId) -> Result<String, ClientError>;

    async fn send_chat_action(&self, chat_id: ChatId, action: ChatAction)
        -> Result<(), ClientError>;
}

pub type TelegramBot = CacheMe<Throttle<Bot>>;

pub struct TelegramClient {
    bot: TelegramBot,
}

impl TelegramClient {
    pub fn new(bot: TelegramBot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl BotApi for TelegramClient {
    async fn send_message(
        &self,
        chat_id: ChatId,
        text: String,
        options: SendOptions,
    ) -> Result<SentMessage, ClientError> {
        let mut request = self.bot.send_message(chat_id, text);

        if let Some(reply_markup) = options.reply_markup {
            request = request.reply_markup(reply_markup);
        }
        if let Some(parse_mode) = options.parse_mode {
            request = request.parse_mode(parse_mode);
        }

        let message = request.await?;
        Ok(SentMessage::from(&message))
    }

    async fn send_photo(
        &self,
        chat_id: ChatId,
        photo: PhotoSource,
        caption: Option<String>,
    ) -> Result<SentMessage, ClientError> {
        let mut request = self.bot.send_photo(chat_id, photo.into_input_file());

        if let Some(caption) = caption {
            request = request.caption(caption);
        }

        let message = request.await?;
        Ok(SentMessage::from(&message))
    }

    async fn send_media_group(
        &self,
        chat_id: ChatId,
        photos: Vec<PhotoSource>,
    ) -> Result<Vec<SentMessage>, ClientError> {
        let media: Vec<InputMedia> = photos
            .into_iter()
            .map(|photo| InputMedia::Photo(InputMediaPhoto::new(photo.into_input_file())))
            .collect();

        let messages = self.bot.send_media_group(chat_id, media).await?;
        Ok(messages.iter().map(SentMessage::from).collect())
    }

    async fn send_poll(
        &self,
        chat_id: ChatId,
        question: String,
        options: Vec<String>,
        is_anonymous: bool,
    ) -> Result<SentMessage, ClientError> {
        let options: Vec<InputPollOption> = options.into_iter().map(InputPollOption::new).collect();

        let message = self
            .bot
            .send_poll(chat_id, question, options)
            .is_anonymous(is_anonymous)
            .await?;
        Ok(SentMessage::from(&message))
    }

    async fn answer_callback_query(&self, query_id: CallbackQueryId) -> Result<(), ClientError> {
        self.bot.answer_callback_query(query_id).await?;
        Ok(())
    }

    async fn answer_inline_query(
        &self,
        query_id: InlineQueryId,
        results: Vec<InlineQueryResult>,
        cache_time: u32,
    ) -> Result<(), ClientError> {
        self.bot
            .answer_inline_query(query_id, results)
            .cache_time(cache_time)
            .await?;
        Ok(())
    }

    async fn export_chat_invite_link(&self, chat_id: ChatId) -> Result<String, ClientError> {
        Ok(self.bot.export_chat_invite_link(chat_id).await?)
    }

    async fn send_chat_action(
        &self,
        chat_id: ChatId,
        action: ChatAction,
    ) -> Result<(), ClientError> {
        self.bot.send_chat_action(chat_id, action).await?;
        Ok(())
    }
}
