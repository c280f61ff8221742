use std::rc::Rc;

use once_cell::sync::Lazy;
use regex::Regex;
use yew::Reducible;

pub const WELCOME: &str = "Suasdey! 👋 How can I help you today?";
pub const PRICE_REPLY: &str = "Our projects start from $500. Would you like to book a call?";
pub const GREETING_REPLY: &str = "Hello there! ready to build something amazing?";
pub const DEFAULT_REPLY: &str = "Thanks for reaching out! Our team will get back to you shortly.";

// First match wins. Patterns are unanchored, so "this" counts as a greeting.
static RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"(?i)price|cost|quote", PRICE_REPLY),
        (r"(?i)hello|hi|hey", GREETING_REPLY),
    ]
    .into_iter()
    .filter_map(|(pattern, reply)| Regex::new(pattern).ok().map(|re| (re, reply)))
    .collect()
});

pub fn bot_reply(text: &str) -> &'static str {
    RULES
        .iter()
        .find(|(re, _)| re.is_match(text))
        .map(|(_, reply)| *reply)
        .unwrap_or(DEFAULT_REPLY)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn class(self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Chat {
    pub open: bool,
    pub has_welcomed: bool,
    pub messages: Vec<ChatMessage>,
}

pub enum ChatAction {
    Toggle,
    Post(ChatMessage),
}

impl Chat {
    /// Whether toggling from this state opens the panel for the first time.
    pub fn toggle_needs_welcome(&self) -> bool {
        !self.open && !self.has_welcomed
    }
}

impl Reducible for Chat {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: ChatAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ChatAction::Toggle => {
                next.open = !self.open;
                next.has_welcomed |= next.open;
            }
            ChatAction::Post(message) => next.messages.push(message),
        }
        Rc::new(next)
    }
}

/// Trimmed outgoing text, or `None` when there is nothing to send.
pub fn outgoing(input: &str) -> Option<String> {
    let text = input.trim();
    (!text.is_empty()).then(|| text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_replies() {
        assert_eq!(bot_reply("What is the price?"), PRICE_REPLY);
        assert_eq!(bot_reply("hey there"), GREETING_REPLY);
        assert_eq!(bot_reply("tell me more"), DEFAULT_REPLY);
    }

    #[test]
    fn anything_else_reads_as_greeting() {
        // "anyt-hi-ng" trips the unanchored greeting rule.
        assert_eq!(bot_reply("anything else"), GREETING_REPLY);
    }

    #[test]
    fn price_beats_greeting() {
        assert_eq!(bot_reply("Hi, can I get a QUOTE?"), PRICE_REPLY);
    }

    #[test]
    fn greeting_matches_inside_words() {
        assert_eq!(bot_reply("This is great"), GREETING_REPLY);
    }

    #[test]
    fn blank_input_is_ignored() {
        assert_eq!(outgoing("   \t"), None);
        assert_eq!(outgoing("  hello "), Some("hello".to_string()));
    }

    #[test]
    fn welcome_scheduled_once() {
        let chat = Rc::new(Chat::default());
        assert!(chat.toggle_needs_welcome());
        let opened = chat.reduce(ChatAction::Toggle);
        assert!(opened.open);
        assert!(opened.has_welcomed);
        let closed = opened.reduce(ChatAction::Toggle);
        assert!(!closed.open);
        assert!(!closed.toggle_needs_welcome());
        let reopened = closed.reduce(ChatAction::Toggle);
        assert!(reopened.open);
        assert!(reopened.has_welcomed);
    }

    #[test]
    fn posts_append_in_order() {
        let chat = Rc::new(Chat::default())
            .reduce(ChatAction::Post(ChatMessage { text: "hi".into(), sender: Sender::User }))
            .reduce(ChatAction::Post(ChatMessage {
                text: bot_reply("hi").into(),
                sender: Sender::Bot,
            }));
        let senders: Vec<_> = chat.messages.iter().map(|m| m.sender.class()).collect();
        assert_eq!(senders, ["user", "bot"]);
    }
}
