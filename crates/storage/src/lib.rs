pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use error::{Result, StorageError};
pub use repository::{InMemoryReceiptRepository, ReceiptRepository};
