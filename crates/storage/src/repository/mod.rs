pub mod receipt;

pub use receipt::{InMemoryReceiptRepository, ReceiptRepository};
