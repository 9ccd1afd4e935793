pub mod entry_store;
pub mod migrations;
pub mod vector_functions;
