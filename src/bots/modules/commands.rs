use std::collections::HashMap;

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use teloxide::types::Chat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Command {
    Start,
    Help,
    Photo,
    InlineButtons,
    Keyboard,
    Remove,
    Request,
    InlineMode,
    Poll,
    PollAnonymous,
    Throw,
    CreateLink,
}

/// Where a command may be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatScope {
    Any,
    Groups,
}

impl ChatScope {
    pub fn allows(self, chat: &Chat) -> bool {
        match self {
            ChatScope::Any => true,
            ChatScope::Groups => chat.is_group() || chat.is_supergroup(),
        }
    }
}

impl Command {
    /// The exact token a user types, e.g. `/poll_anonymous`.
    pub fn token(self) -> String {
        format!("/{self}")
    }

    pub fn scope(self) -> ChatScope {
        match self {
            Command::CreateLink => ChatScope::Groups,
            _ => ChatScope::Any,
        }
    }
}

/// Token to command lookup, built once at startup.
#[derive(Debug, Clone)]
pub struct CommandTable {
    commands: Vec<Command>,
    by_token: HashMap<String, Command>,
}

impl CommandTable {
    pub fn new(commands: impl IntoIterator<Item = Command>) -> Self {
        let mut table = CommandTable {
            commands: vec![],
            by_token: HashMap::new(),
        };

        for command in commands {
            if table.by_token.insert(command.token(), command).is_none() {
                table.commands.push(command);
            }
        }

        table
    }

    pub fn all() -> Self {
        Self::new(Command::iter())
    }

    /// Case-sensitive; the token must include its `/` prefix.
    pub fn lookup(&self, token: &str) -> Option<Command> {
        self.by_token.get(token).copied()
    }

    /// Enabled commands in registration order.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::all()
    }
}

/// Everything before the first whitespace character, or the whole text.
pub fn command_token(text: &str) -> &str {
    match text.find(char::is_whitespace) {
        Some(index) => &text[..index],
        None => text,
    }
}

/// Drops a trailing `@username` naming this bot. Telegram appends it to
/// commands picked from the menu in groups; mentions of other bots are kept.
pub fn strip_bot_mention<'a>(token: &'a str, bot_username: Option<&str>) -> &'a str {
    match (token.split_once('@'), bot_username) {
        (Some((command, mention)), Some(username)) if mention.eq_ignore_ascii_case(username) => {
            command
        }
        _ => token,
    }
}
