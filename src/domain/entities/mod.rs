pub mod waitlist_entry;
pub mod year_of_study;
