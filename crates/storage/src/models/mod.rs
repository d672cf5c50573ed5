pub mod receipt;
pub mod receipt_id;

pub use receipt::{Item, Receipt};
pub use receipt_id::ReceiptId;
