use teloxide::types::{ChatAction, KeyboardRemove, Message};
use tracing::{error, info};

use crate::bots::{
    errors::DeliberateFailure,
    keyboards,
    modules::commands::{command_token, strip_bot_mention, Command},
    BotContext, BotHandlerInternal, SendOptions, SentMessage,
};

pub async fn message_handler(message: &Message, ctx: &BotContext) -> BotHandlerInternal {
    info!(
        chat_id = message.chat.id.0,
        message_id = message.id.0,
        from = ?message.from.as_ref().map(|user| user.id),
        "Received message"
    );

    let text = match message.text() {
        Some(v) if !v.is_empty() => v,
        _ => return Ok(()),
    };

    let sent = route_command(message, text, ctx).await?;
    info!(
        chat_id = sent.chat_id.0,
        message_id = sent.message_id.0,
        "Message sent"
    );

    Ok(())
}

async fn route_command(
    message: &Message,
    text: &str,
    ctx: &BotContext,
) -> BotHandlerInternal<SentMessage> {
    let token = strip_bot_mention(command_token(text), ctx.settings.bot_username.as_deref());

    let command = match ctx.settings.commands.lookup(token) {
        Some(v) => v,
        None => return usage_handler(message, ctx).await,
    };

    // Only group-scoped commands can be rejected.
    if !command.scope().allows(&message.chat) {
        let text = ctx.texts().groups_only.to_string();
        return send_text(message, ctx, text, SendOptions::default()).await;
    }

    match command {
        Command::Start | Command::Help => start_handler(message, ctx).await,
        Command::Photo => photo_handler(message, ctx).await,
        Command::InlineButtons => inline_buttons_handler(message, ctx).await,
        Command::Keyboard => reply_keyboard_handler(message, ctx).await,
        Command::Remove => remove_keyboard_handler(message, ctx).await,
        Command::Request => request_contact_handler(message, ctx).await,
        Command::InlineMode => inline_mode_handler(message, ctx).await,
        Command::Poll => poll_handler(message, ctx, false).await,
        Command::PollAnonymous => poll_handler(message, ctx, true).await,
        Command::Throw => Err(Box::new(DeliberateFailure {
            text: ctx.texts().deliberate_failure,
        })),
        Command::CreateLink => create_link_handler(message, ctx).await,
    }
}

async fn send_text(
    message: &Message,
    ctx: &BotContext,
    text: String,
    options: SendOptions,
) -> BotHandlerInternal<SentMessage> {
    ctx.api.send_message(message.chat.id, text, options).await
}

pub async fn start_handler(message: &Message, ctx: &BotContext) -> BotHandlerInternal<SentMessage> {
    let texts = ctx.texts();
    let name = message
        .from
        .as_ref()
        .map(|user| user.first_name.as_str())
        .unwrap_or(texts.default_name);

    send_text(
        message,
        ctx,
        texts.welcome.replace("{name}", name),
        SendOptions::markup(keyboards::main_menu(texts, &ctx.settings.website_url)),
    )
    .await
}

pub async fn usage_handler(message: &Message, ctx: &BotContext) -> BotHandlerInternal<SentMessage> {
    send_text(
        message,
        ctx,
        format_usage(ctx),
        SendOptions::markup(KeyboardRemove::new()).html(),
    )
    .await
}

fn format_usage(ctx: &BotContext) -> String {
    let texts = ctx.texts();
    let commands = ctx.settings.commands.commands();
    let width = commands
        .iter()
        .map(|command| command.token().chars().count())
        .max()
        .unwrap_or_default();

    let lines: Vec<String> = commands
        .iter()
        .map(|command| {
            format!(
                "- {:<width$} : {}",
                command.token(),
                texts.command_description(*command)
            )
        })
        .collect();

    format!("{}\n{}", texts.usage_title, lines.join("\n"))
}

async fn photo_handler(message: &Message, ctx: &BotContext) -> BotHandlerInternal<SentMessage> {
    ctx.api
        .send_chat_action(message.chat.id, ChatAction::UploadPhoto)
        .await?;

    tokio::time::sleep(ctx.settings.photo_delay).await;

    ctx.api
        .send_photo(
            message.chat.id,
            ctx.settings.demo_photo.clone(),
            Some(ctx.texts().photo_caption.to_string()),
        )
        .await
}

async fn inline_buttons_handler(
    message: &Message,
    ctx: &BotContext,
) -> BotHandlerInternal<SentMessage> {
    let texts = ctx.texts();

    send_text(
        message,
        ctx,
        texts.choose_option.to_string(),
        SendOptions::markup(keyboards::inline_buttons(texts, &ctx.settings.website_url)),
    )
    .await
}

async fn reply_keyboard_handler(
    message: &Message,
    ctx: &BotContext,
) -> BotHandlerInternal<SentMessage> {
    let texts = ctx.texts();

    send_text(
        message,
        ctx,
        texts.choose_option.to_string(),
        SendOptions::markup(keyboards::reply_options(texts)),
    )
    .await
}

async fn remove_keyboard_handler(
    message: &Message,
    ctx: &BotContext,
) -> BotHandlerInternal<SentMessage> {
    send_text(
        message,
        ctx,
        ctx.texts().keyboard_removed.to_string(),
        SendOptions::markup(KeyboardRemove::new()),
    )
    .await
}

async fn request_contact_handler(
    message: &Message,
    ctx: &BotContext,
) -> BotHandlerInternal<SentMessage> {
    let texts = ctx.texts();

    send_text(
        message,
        ctx,
        texts.share_prompt.to_string(),
        SendOptions::markup(keyboards::share_contact_or_location(texts)),
    )
    .await
}

async fn inline_mode_handler(
    message: &Message,
    ctx: &BotContext,
) -> BotHandlerInternal<SentMessage> {
    let texts = ctx.texts();

    send_text(
        message,
        ctx,
        texts.inline_mode_prompt.to_string(),
        SendOptions::markup(keyboards::inline_mode(texts)),
    )
    .await
}

async fn poll_handler(
    message: &Message,
    ctx: &BotContext,
    is_anonymous: bool,
) -> BotHandlerInternal<SentMessage> {
    let texts = ctx.texts();

    ctx.api
        .send_poll(
            message.chat.id,
            texts.poll_question.to_string(),
            texts.poll_options.iter().map(|o| o.to_string()).collect(),
            is_anonymous,
        )
        .await
}

async fn create_link_handler(
    message: &Message,
    ctx: &BotContext,
) -> BotHandlerInternal<SentMessage> {
    let texts = ctx.texts();

    let text = match ctx.api.export_chat_invite_link(message.chat.id).await {
        Ok(link) => texts.invite_link.replace("{link}", &link),
        Err(err) => {
            error!(chat_id = message.chat.id.0, error = %err, "Cannot export invite link");
            texts.invite_link_failed.to_string()
        }
    };

    send_text(message, ctx, text, SendOptions::default()).await
}
