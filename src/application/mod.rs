pub mod search;
pub mod write_entry;
