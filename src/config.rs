use std::time::Duration;

use once_cell::sync::Lazy;

use crate::bots::{Command, Language, PhotoSource};

pub struct Config {
    pub telegram_bot_api: reqwest::Url,
    pub bot_token: String,

    pub webhook_url: Option<reqwest::Url>,
    pub webhook_port: u16,

    pub language: Language,
    pub enabled_commands: Option<Vec<Command>>,

    pub website_url: reqwest::Url,
    pub demo_photo: PhotoSource,
    pub villa_photos: Vec<PhotoSource>,
    pub photo_delay: Duration,

    pub log_raw_updates: bool,

    pub sentry_dsn: Option<String>,
}

fn get_env(env: &'static str) -> String {
    std::env::var(env).unwrap_or_else(|_| panic!("Cannot get the {env} env variable"))
}

fn get_env_or(env: &'static str, default: &str) -> String {
    std::env::var(env).unwrap_or_else(|_| default.to_string())
}

fn get_optional_env(env: &'static str) -> Option<String> {
    std::env::var(env).ok().filter(|v| !v.trim().is_empty())
}

fn parse_url(env: &'static str, value: &str) -> reqwest::Url {
    reqwest::Url::parse(value)
        .unwrap_or_else(|_| panic!("Cannot parse url from {env} env variable"))
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|v| !v.is_empty())
}

pub fn parse_commands(value: &str) -> Vec<Command> {
    split_list(value)
        .map(|name| {
            name.trim_start_matches('/')
                .parse::<Command>()
                .unwrap_or_else(|_| panic!("Unknown command {name:?} in BOT_COMMANDS"))
        })
        .collect()
}

pub fn parse_photos(value: &str) -> Vec<PhotoSource> {
    split_list(value).map(PhotoSource::parse).collect()
}

const DEFAULT_DEMO_PHOTO: &str = "https://telegrambots.github.io/book/docs/photo-ara.jpg";

const DEFAULT_VILLA_PHOTOS: &str = "https://images.unsplash.com/photo-1613490493576-7fde63acd811,\
https://images.unsplash.com/photo-1580587771525-78b9dba3b914,\
https://images.unsplash.com/photo-1512917774080-9991f1c4c750";

impl Config {
    pub fn load() -> Config {
        Config {
            telegram_bot_api: parse_url(
                "TELEGRAM_BOT_API_ROOT",
                &get_env_or("TELEGRAM_BOT_API_ROOT", "https://api.telegram.org"),
            ),
            bot_token: get_env("BOT_TOKEN"),

            webhook_url: get_optional_env("WEBHOOK_URL").map(|v| parse_url("WEBHOOK_URL", &v)),
            webhook_port: get_env_or("WEBHOOK_PORT", "8080")
                .parse()
                .unwrap_or_else(|_| panic!("Cannot parse port from WEBHOOK_PORT env variable")),

            language: get_env_or("BOT_LANGUAGE", "en")
                .parse()
                .unwrap_or_else(|_| panic!("BOT_LANGUAGE must be one of: en, fa")),
            enabled_commands: get_optional_env("BOT_COMMANDS").map(|v| parse_commands(&v)),

            website_url: parse_url("WEBSITE_URL", &get_env_or("WEBSITE_URL", "https://github.com")),
            demo_photo: PhotoSource::parse(&get_env_or("DEMO_PHOTO", DEFAULT_DEMO_PHOTO)),
            villa_photos: parse_photos(&get_env_or("VILLA_PHOTOS", DEFAULT_VILLA_PHOTOS)),
            photo_delay: Duration::from_millis(
                get_env_or("PHOTO_DELAY_MS", "2000")
                    .parse()
                    .unwrap_or_else(|_| panic!("Cannot parse PHOTO_DELAY_MS env variable")),
            ),

            log_raw_updates: matches!(
                get_env_or("LOG_RAW_UPDATES", "false").to_lowercase().as_str(),
                "1" | "true" | "yes"
            ),

            sentry_dsn: get_optional_env("SENTRY_DSN"),
        }
    }
}

pub static CONFIG: Lazy<Config> = Lazy::new(Config::load);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_commands_accepts_slashes_and_spaces() {
        let commands = parse_commands("/start, help ,create_link,");

        assert_eq!(
            commands,
            vec![Command::Start, Command::Help, Command::CreateLink]
        );
    }

    #[test]
    #[should_panic(expected = "Unknown command")]
    fn parse_commands_rejects_unknown_names() {
        parse_commands("start,teleport");
    }

    #[test]
    fn parse_photos_splits_urls_and_paths() {
        let photos = parse_photos("https://example.com/a.jpg, Files/bot.gif");

        assert_eq!(photos.len(), 2);
        assert!(matches!(photos[0], PhotoSource::Url(_)));
        assert_eq!(photos[1], PhotoSource::File("Files/bot.gif".into()));
    }
}
