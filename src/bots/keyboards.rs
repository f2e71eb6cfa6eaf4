use teloxide::types::{
    ButtonRequest, InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup,
};

use super::{modules::callback_data::CallbackCommand, texts::Texts};

fn callback_button(text: &str, data: CallbackCommand) -> InlineKeyboardButton {
    InlineKeyboardButton::callback(text, data.to_string())
}

/// Two rows of two callback buttons plus a website row.
pub fn main_menu(texts: &Texts, website_url: &url::Url) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![
            callback_button(texts.menu_view_properties, CallbackCommand::ViewProperties),
            callback_button(
                texts.menu_request_consultation,
                CallbackCommand::RequestConsultation,
            ),
        ],
        vec![
            callback_button(texts.menu_view_villa_photos, CallbackCommand::ViewVillaPhotos),
            callback_button(texts.menu_contact_us, CallbackCommand::ContactUs),
        ],
        vec![InlineKeyboardButton::url(
            texts.website_button,
            website_url.clone(),
        )],
    ])
}

pub fn inline_buttons(texts: &Texts, website_url: &url::Url) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![
        callback_button(texts.inline_button, CallbackCommand::ViewProperties),
        InlineKeyboardButton::url(texts.website_button, website_url.clone()),
    ]])
}

pub fn inline_mode(texts: &Texts) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![
        InlineKeyboardButton::switch_inline_query_current_chat(texts.inline_mode_button, ""),
    ]])
}

pub fn reply_options(texts: &Texts) -> KeyboardMarkup {
    let [first, second, third, fourth] = texts.reply_options;

    KeyboardMarkup::new(vec![
        vec![KeyboardButton::new(first), KeyboardButton::new(second)],
        vec![KeyboardButton::new(third), KeyboardButton::new(fourth)],
    ])
    .resize_keyboard()
}

pub fn share_contact_or_location(texts: &Texts) -> KeyboardMarkup {
    KeyboardMarkup::new(vec![vec![
        KeyboardButton::new(texts.share_contact).request(ButtonRequest::Contact),
        KeyboardButton::new(texts.share_location).request(ButtonRequest::Location),
    ]])
    .resize_keyboard()
}
