use super::{MessageCard, Tone};

pub const LOADING_TEXT: &str = "Loading messages...";
pub const EMPTY_TEXT: &str = "No messages yet. Be the first!";
pub const LOAD_ERROR_TEXT: &str = "Error loading messages. Please try again.";

/// The feed shows either one placeholder paragraph or a list of cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feed {
    Placeholder { text: String, tone: Tone },
    Cards(Vec<MessageCard>),
}

impl Default for Feed {
    fn default() -> Self {
        Feed::Cards(Vec::new())
    }
}

impl Feed {
    pub fn loading() -> Self {
        Self::placeholder(LOADING_TEXT, Tone::Neutral)
    }

    pub fn empty() -> Self {
        Self::placeholder(EMPTY_TEXT, Tone::Neutral)
    }

    pub fn load_error() -> Self {
        Self::placeholder(LOAD_ERROR_TEXT, Tone::Error)
    }

    fn placeholder(text: &str, tone: Tone) -> Self {
        Feed::Placeholder {
            text: text.to_string(),
            tone,
        }
    }

    pub fn cards(&self) -> &[MessageCard] {
        match self {
            Feed::Cards(cards) => cards,
            Feed::Placeholder { .. } => &[],
        }
    }

    pub fn placeholder_text(&self) -> Option<&str> {
        match self {
            Feed::Placeholder { text, .. } => Some(text),
            Feed::Cards(_) => None,
        }
    }

    /// Puts `card` on top. A placeholder is cleared first.
    pub fn prepend(&mut self, card: MessageCard) {
        match self {
            Feed::Cards(cards) => cards.insert(0, card),
            Feed::Placeholder { .. } => *self = Feed::Cards(vec![card]),
        }
    }
}
