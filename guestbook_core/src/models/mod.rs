pub mod message;
pub mod timestamp;

pub use message::{ApiMessage, Message, Submission};
