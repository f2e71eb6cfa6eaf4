use teloxide::types::{
    CallbackQuery, ChosenInlineResult, InlineQuery, Message, Poll, PollAnswer, Update, UpdateKind,
};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use super::{
    errors::Cancelled,
    modules::{callback, inline, message, polls},
    BotContext, BotHandlerInternal,
};

/// The single category an update is routed to.
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    Message(&'a Message),
    CallbackQuery(&'a CallbackQuery),
    InlineQuery(&'a InlineQuery),
    ChosenInlineResult(&'a ChosenInlineResult),
    Poll(&'a Poll),
    PollAnswer(&'a PollAnswer),
    Unrecognized,
}

impl Event<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            Event::Message(_) => "message",
            Event::CallbackQuery(_) => "callback_query",
            Event::InlineQuery(_) => "inline_query",
            Event::ChosenInlineResult(_) => "chosen_inline_result",
            Event::Poll(_) => "poll",
            Event::PollAnswer(_) => "poll_answer",
            Event::Unrecognized => "unrecognized",
        }
    }
}

/// Edited messages are handled exactly like new ones; every kind without a
/// dedicated handler (channel posts, member updates, unparsable payloads) is
/// `Unrecognized`.
pub fn classify(update: &Update) -> Event<'_> {
    match &update.kind {
        UpdateKind::Message(message) | UpdateKind::EditedMessage(message) => {
            Event::Message(message)
        }
        UpdateKind::CallbackQuery(query) => Event::CallbackQuery(query),
        UpdateKind::InlineQuery(query) => Event::InlineQuery(query),
        UpdateKind::ChosenInlineResult(result) => Event::ChosenInlineResult(result),
        UpdateKind::Poll(poll) => Event::Poll(poll),
        UpdateKind::PollAnswer(answer) => Event::PollAnswer(answer),
        _ => Event::Unrecognized,
    }
}

pub struct UpdateDispatcher {
    ctx: BotContext,
}

impl UpdateDispatcher {
    pub fn new(ctx: BotContext) -> Self {
        Self { ctx }
    }

    /// Runs exactly one category handler for `update`.
    ///
    /// Handler failures are logged here and never returned; the only error is
    /// an already-cancelled token, checked before anything is sent.
    pub async fn handle_update(
        &self,
        update: Update,
        cancel: &CancellationToken,
    ) -> BotHandlerInternal {
        if cancel.is_cancelled() {
            return Err(Box::new(Cancelled));
        }

        let event = classify(&update);
        info!(update_id = update.id.0, kind = event.name(), "Processing update");

        if let Err(err) = self.route(event, &update).await {
            error!(
                update_id = update.id.0,
                kind = event.name(),
                error = %err,
                "Error while handling update"
            );
        }

        Ok(())
    }

    async fn route(&self, event: Event<'_>, update: &Update) -> BotHandlerInternal {
        match event {
            Event::Message(msg) => message::message_handler(msg, &self.ctx).await,
            Event::CallbackQuery(query) => callback::callback_query_handler(query, &self.ctx).await,
            Event::InlineQuery(query) => inline::inline_query_handler(query, &self.ctx).await,
            Event::ChosenInlineResult(result) => {
                inline::chosen_inline_result_handler(result);
                Ok(())
            }
            Event::Poll(poll) => {
                polls::poll_handler(poll);
                Ok(())
            }
            Event::PollAnswer(answer) => {
                polls::poll_answer_handler(answer);
                Ok(())
            }
            Event::Unrecognized => {
                warn!(update_id = update.id.0, kind = ?update.kind, "Unknown update type");
                Ok(())
            }
        }
    }
}
