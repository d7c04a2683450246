//! Plain-text rendering of the page for the terminal front end

use std::fmt::Write;

use crate::page::{Feed, StatusLine, Tone};

pub fn render_status(status: &StatusLine) -> Option<String> {
    if status.text.is_empty() {
        return None;
    }

    let marker = match status.tone {
        Tone::Neutral => "..",
        Tone::Success => "ok",
        Tone::Error => "!!",
    };
    Some(format!("[{}] {}", marker, status.text))
}

pub fn render_feed(feed: &Feed) -> String {
    let mut out = String::new();

    match feed {
        Feed::Placeholder { text, tone } => {
            let prefix = if *tone == Tone::Error { "!! " } else { "" };
            let _ = writeln!(out, "{}{}", prefix, text);
        }
        Feed::Cards(cards) => {
            for card in cards {
                for line in card.text.lines() {
                    let _ = writeln!(out, "  {}", line);
                }
                let _ = writeln!(out, "    -- {}, {}", card.author, card.date);
                out.push('\n');
            }
        }
    }

    out
}
