//! Listening-history dataset loaded from CSV and served from memory.

pub mod csv_loader;
mod memory_repository;

pub use csv_loader::DatasetError;
pub use memory_repository::InMemoryTrackRepository;
