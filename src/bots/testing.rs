//! Test doubles shared by the handler tests: a [`BotApi`] that records every
//! call instead of talking to Telegram, and updates built from Bot API JSON.

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use teloxide::types::{
    CallbackQuery, CallbackQueryId, Chat, ChatAction, ChatId, InlineQueryId, InlineQueryResult,
    Message, MessageId, Update,
};

use super::client::{BotApi, ClientError, PhotoSource, SendOptions, SentMessage};
use super::{texts::ENGLISH, BotContext, BotSettings, CommandTable};

#[derive(Debug, Clone)]
pub enum Call {
    SendMessage {
        chat_id: ChatId,
        text: String,
        options: SendOptions,
    },
    SendPhoto {
        chat_id: ChatId,
        photo: PhotoSource,
        caption: Option<String>,
    },
    SendMediaGroup {
        chat_id: ChatId,
        photos: Vec<PhotoSource>,
    },
    SendPoll {
        chat_id: ChatId,
        question: String,
        options: Vec<String>,
        is_anonymous: bool,
    },
    AnswerCallbackQuery {
        query_id: String,
    },
    AnswerInlineQuery {
        query_id: String,
        results: Vec<InlineQueryResult>,
        cache_time: u32,
    },
    ExportChatInviteLink {
        chat_id: ChatId,
    },
    SendChatAction {
        chat_id: ChatId,
        action: ChatAction,
    },
}

pub struct RecordingClient {
    calls: Mutex<Vec<Call>>,
    next_message_id: AtomicI32,
    invite_link: Option<String>,
    fail_sends: bool,
}

impl RecordingClient {
    pub fn new() -> Arc<Self> {
        Self::build(Some("https://t.me/+abc123".to_string()), false)
    }

    pub fn with_invite_link(link: &str) -> Arc<Self> {
        Self::build(Some(link.to_string()), false)
    }

    /// Invite link export fails; everything else succeeds.
    pub fn failing_invite_link() -> Arc<Self> {
        Self::build(None, false)
    }

    /// Every outbound call is recorded and then fails.
    pub fn failing() -> Arc<Self> {
        Self::build(None, true)
    }

    fn build(invite_link: Option<String>, fail_sends: bool) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(vec![]),
            next_message_id: AtomicI32::new(1),
            invite_link,
            fail_sends,
        })
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Texts of every `send_message` call, in order.
    pub fn sent_texts(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::SendMessage { text, .. } => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn answered_callbacks(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::AnswerCallbackQuery { query_id } => Some(query_id),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) -> Result<(), ClientError> {
        self.calls.lock().unwrap().push(call);

        if self.fail_sends {
            return Err("Bad Gateway".into());
        }
        Ok(())
    }

    fn sent(&self, chat_id: ChatId) -> SentMessage {
        SentMessage {
            chat_id,
            message_id: MessageId(self.next_message_id.fetch_add(1, Ordering::SeqCst)),
        }
    }
}

#[async_trait]
impl BotApi for RecordingClient {
    async fn send_message(
        &self,
        chat_id: ChatId,
        text: String,
        options: SendOptions,
    ) -> Result<SentMessage, ClientError> {
        self.record(Call::SendMessage {
            chat_id,
            text,
            options,
        })?;
        Ok(self.sent(chat_id))
    }

    async fn send_photo(
        &self,
        chat_id: ChatId,
        photo: PhotoSource,
        caption: Option<String>,
    ) -> Result<SentMessage, ClientError> {
        self.record(Call::SendPhoto {
            chat_id,
            photo,
            caption,
        })?;
        Ok(self.sent(chat_id))
    }

    async fn send_media_group(
        &self,
        chat_id: ChatId,
        photos: Vec<PhotoSource>,
    ) -> Result<Vec<SentMessage>, ClientError> {
        let count = photos.len();
        self.record(Call::SendMediaGroup { chat_id, photos })?;
        Ok((0..count).map(|_| self.sent(chat_id)).collect())
    }

    async fn send_poll(
        &self,
        chat_id: ChatId,
        question: String,
        options: Vec<String>,
        is_anonymous: bool,
    ) -> Result<SentMessage, ClientError> {
        self.record(Call::SendPoll {
            chat_id,
            question,
            options,
            is_anonymous,
        })?;
        Ok(self.sent(chat_id))
    }

    async fn answer_callback_query(&self, query_id: CallbackQueryId) -> Result<(), ClientError> {
        self.record(Call::AnswerCallbackQuery {
            query_id: query_id.to_string(),
        })
    }

    async fn answer_inline_query(
        &self,
        query_id: InlineQueryId,
        results: Vec<InlineQueryResult>,
        cache_time: u32,
    ) -> Result<(), ClientError> {
        self.record(Call::AnswerInlineQuery {
            query_id: query_id.to_string(),
            results,
            cache_time,
        })
    }

    async fn export_chat_invite_link(&self, chat_id: ChatId) -> Result<String, ClientError> {
        self.record(Call::ExportChatInviteLink { chat_id })?;

        match &self.invite_link {
            Some(link) => Ok(link.clone()),
            None => Err("Bad Request: not enough rights to manage chat invite link".into()),
        }
    }

    async fn send_chat_action(
        &self,
        chat_id: ChatId,
        action: ChatAction,
    ) -> Result<(), ClientError> {
        self.record(Call::SendChatAction { chat_id, action })
    }
}

pub fn settings() -> BotSettings {
    BotSettings {
        texts: &ENGLISH,
        bot_username: Some("villa_bot".to_string()),
        commands: CommandTable::all(),
        website_url: url::Url::parse("https://example.com").unwrap(),
        demo_photo: PhotoSource::parse("https://example.com/bot.gif"),
        villa_photos: vec![
            PhotoSource::parse("https://example.com/villa-1.jpg"),
            PhotoSource::parse("https://example.com/villa-2.jpg"),
            PhotoSource::parse("https://example.com/villa-3.jpg"),
        ],
        photo_delay: Duration::ZERO,
    }
}

pub fn context(client: Arc<RecordingClient>) -> BotContext {
    BotContext::new(client, settings())
}

/// Goes through text like the webhook does, so flattened update kinds see
/// borrowed keys.
pub fn parse<T: DeserializeOwned>(value: Value) -> T {
    serde_json::from_str(&value.to_string()).unwrap()
}

pub const USER_ID: i64 = 42;
pub const GROUP_ID: i64 = -1001;

pub fn user_json() -> Value {
    json!({ "id": USER_ID, "is_bot": false, "first_name": "Sara", "language_code": "en" })
}

pub fn private_chat_json() -> Value {
    json!({ "id": USER_ID, "type": "private", "first_name": "Sara" })
}

pub fn group_chat_json() -> Value {
    json!({ "id": GROUP_ID, "type": "group", "title": "Villa owners" })
}

pub fn supergroup_chat_json() -> Value {
    json!({ "id": -1002, "type": "supergroup", "title": "Villa owners club" })
}

pub fn private_chat() -> Chat {
    parse(private_chat_json())
}

pub fn group_chat() -> Chat {
    parse(group_chat_json())
}

pub fn supergroup_chat() -> Chat {
    parse(supergroup_chat_json())
}

pub fn message_json(chat: Value, text: Option<&str>) -> Value {
    let mut message = json!({
        "message_id": 7,
        "date": 1_700_000_000,
        "chat": chat,
        "from": user_json(),
    });

    match text {
        Some(text) => message["text"] = json!(text),
        None => {
            message["photo"] = json!([{
                "file_id": "photo-file",
                "file_unique_id": "photo-unique",
                "width": 90,
                "height": 90,
                "file_size": 1024
            }])
        }
    }

    message
}

pub fn message(chat: Value, text: Option<&str>) -> Message {
    parse(message_json(chat, text))
}

pub fn private_text(text: &str) -> Message {
    message(private_chat_json(), Some(text))
}

pub fn group_text(text: &str) -> Message {
    message(group_chat_json(), Some(text))
}

pub fn callback_query_json(data: Option<&str>) -> Value {
    let mut query = json!({
        "id": "cq-1",
        "from": user_json(),
        "chat_instance": "chat-instance",
        "message": message_json(private_chat_json(), Some("Main menu:")),
    });

    if let Some(data) = data {
        query["data"] = json!(data);
    }

    query
}

pub fn callback_query(data: Option<&str>) -> CallbackQuery {
    parse(callback_query_json(data))
}

pub fn inline_query_json() -> Value {
    json!({ "id": "iq-1", "from": user_json(), "query": "villa", "offset": "" })
}

pub fn chosen_inline_result_json() -> Value {
    json!({ "result_id": "2", "from": user_json(), "query": "villa" })
}

pub fn poll_json() -> Value {
    json!({
        "id": "poll-1",
        "question": "Which programming language do you prefer?",
        "options": [
            { "text": "Hello", "voter_count": 1 },
            { "text": "World!", "voter_count": 0 }
        ],
        "total_voter_count": 1,
        "is_closed": false,
        "is_anonymous": false,
        "type": "regular",
        "allows_multiple_answers": false
    })
}

pub fn poll_answer_json() -> Value {
    json!({ "poll_id": "poll-1", "user": user_json(), "option_ids": [1] })
}

/// Wraps `payload` in an update under the given field name.
pub fn update_json(field: &str, payload: Value) -> Value {
    let mut update = json!({ "update_id": 100 });
    update[field] = payload;
    update
}

pub fn update(field: &str, payload: Value) -> Update {
    parse(update_json(field, payload))
}
