pub mod timestamp;
pub mod vector;
