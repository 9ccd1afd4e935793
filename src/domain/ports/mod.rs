pub mod embedding_port;
pub mod entry_repository;
