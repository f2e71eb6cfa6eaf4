use teloxide::types::{CallbackQuery, ChatId};
use tracing::{info, warn};

use crate::bots::{
    keyboards, modules::callback_data::CallbackCommand, BotContext, BotHandlerInternal,
    SendOptions, SentMessage,
};

/// The chat the pressed button lives in, or the presser's private chat for
/// buttons on inline-mode messages.
fn reply_chat_id(cq: &CallbackQuery) -> ChatId {
    cq.message
        .as_ref()
        .map(|message| message.chat().id)
        .unwrap_or_else(|| ChatId::from(cq.from.id))
}

pub async fn callback_query_handler(cq: &CallbackQuery, ctx: &BotContext) -> BotHandlerInternal {
    info!(from = cq.from.id.0, data = ?cq.data, "Received callback query");

    if let Err(err) = ctx.api.answer_callback_query(cq.id.clone()).await {
        warn!(error = %err, "Cannot answer callback query");
    }

    let data = match &cq.data {
        Some(v) => v,
        None => return Ok(()),
    };

    let chat_id = reply_chat_id(cq);

    let sent = match data.parse::<CallbackCommand>() {
        Ok(command) => {
            send_selection(chat_id, command, ctx).await?;
            send_main_menu(chat_id, ctx).await?
        }
        Err(_) => invalid_command_handler(chat_id, ctx).await?,
    };

    info!(
        chat_id = sent.chat_id.0,
        message_id = sent.message_id.0,
        "Callback reply sent"
    );

    Ok(())
}

async fn send_selection(
    chat_id: ChatId,
    command: CallbackCommand,
    ctx: &BotContext,
) -> BotHandlerInternal {
    let texts = ctx.texts();

    let text = match command {
        CallbackCommand::ViewProperties => texts.properties,
        CallbackCommand::RequestConsultation => texts.consultation,
        CallbackCommand::ContactUs => texts.contact,
        CallbackCommand::ViewVillaPhotos => return send_villa_photos(chat_id, ctx).await,
    };

    ctx.api
        .send_message(chat_id, text.to_string(), SendOptions::default())
        .await?;

    Ok(())
}

/// Albums need at least two items, so a single photo goes out on its own.
async fn send_villa_photos(chat_id: ChatId, ctx: &BotContext) -> BotHandlerInternal {
    let photos = &ctx.settings.villa_photos;

    match photos.as_slice() {
        [] => {
            ctx.api
                .send_message(
                    chat_id,
                    ctx.texts().no_photos.to_string(),
                    SendOptions::default(),
                )
                .await?;
        }
        [photo] => {
            ctx.api.send_photo(chat_id, photo.clone(), None).await?;
        }
        _ => {
            ctx.api.send_media_group(chat_id, photos.clone()).await?;
        }
    }

    Ok(())
}

async fn send_main_menu(chat_id: ChatId, ctx: &BotContext) -> BotHandlerInternal<SentMessage> {
    let texts = ctx.texts();

    ctx.api
        .send_message(
            chat_id,
            texts.menu_prompt.to_string(),
            SendOptions::markup(keyboards::main_menu(texts, &ctx.settings.website_url)),
        )
        .await
}

async fn invalid_command_handler(
    chat_id: ChatId,
    ctx: &BotContext,
) -> BotHandlerInternal<SentMessage> {
    let texts = ctx.texts();

    ctx.api
        .send_message(
            chat_id,
            texts.invalid_command.to_string(),
            SendOptions::markup(keyboards::main_menu(texts, &ctx.settings.website_url)),
        )
        .await
}
