use chrono::{DateTime, Local, TimeZone, Utc};
use guestbook_core::Message;
use std::fmt::Display;

/// What a date with no usable timestamp renders as.
pub const INVALID_DATE: &str = "Invalid Date";

const DATE_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// One rendered entry of the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageCard {
    pub text: String,
    pub author: String,
    pub date: String,
}

impl MessageCard {
    pub fn from_message(message: &Message) -> Self {
        Self::from_message_in(message, &Local)
    }

    pub fn from_message_in<Tz>(message: &Message, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            text: message.message.clone(),
            author: message.name.clone(),
            date: format_date_in(message.created_at, tz),
        }
    }
}

/// `3/5/2024, 2:07:09 PM` in the given zone.
pub fn format_date_in<Tz>(ts: Option<DateTime<Utc>>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match ts {
        Some(ts) => ts.with_timezone(tz).format(DATE_FORMAT).to_string(),
        None => INVALID_DATE.to_string(),
    }
}
