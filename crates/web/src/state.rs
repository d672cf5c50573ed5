use std::sync::Arc;

use storage::{InMemoryReceiptRepository, ReceiptRepository};

#[derive(Clone)]
pub struct AppState {
    pub receipts: Arc<dyn ReceiptRepository>,
}

impl AppState {
    pub fn new(receipts: Arc<dyn ReceiptRepository>) -> Self {
        Self { receipts }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryReceiptRepository::new()))
    }
}
