pub mod guestbook_service;

pub use guestbook_service::GuestbookService;
