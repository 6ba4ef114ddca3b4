pub mod user;
pub mod waitlist_entry;
