pub mod callback;
pub mod callback_data;
pub mod commands;
pub mod inline;
pub mod message;
pub mod polls;
