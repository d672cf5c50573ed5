use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::Result;
use crate::models::{Receipt, ReceiptId};

/// Keyed storage for accepted receipts.
#[async_trait::async_trait]
pub trait ReceiptRepository: Send + Sync {
    /// Stores the receipt under a freshly minted identifier.
    async fn put(&self, receipt: Receipt) -> Result<ReceiptId>;

    async fn get(&self, id: &ReceiptId) -> Result<Option<Receipt>>;
}

/// Process-lifetime receipt store.
#[derive(Debug, Default)]
pub struct InMemoryReceiptRepository {
    receipts: RwLock<HashMap<ReceiptId, Receipt>>,
}

impl InMemoryReceiptRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.receipts.read()?.len())
    }
}

#[async_trait::async_trait]
impl ReceiptRepository for InMemoryReceiptRepository {
    async fn put(&self, receipt: Receipt) -> Result<ReceiptId> {
        let mut receipts = self.receipts.write()?;

        let mut id = ReceiptId::generate();
        while receipts.contains_key(&id) {
            id = ReceiptId::generate();
        }
        receipts.insert(id.clone(), receipt);

        Ok(id)
    }

    async fn get(&self, id: &ReceiptId) -> Result<Option<Receipt>> {
        Ok(self.receipts.read()?.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;

    fn receipt(retailer: &str) -> Receipt {
        Receipt {
            retailer: retailer.to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            items: vec![Item::new("Pepsi", "1.25")],
            total: "1.25".to_string(),
        }
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let repo = InMemoryReceiptRepository::new();
        let id = repo.put(receipt("Target")).await.unwrap();

        let stored = repo.get(&id).await.unwrap();
        assert_eq!(stored, Some(receipt("Target")));
    }

    #[tokio::test]
    async fn test_get_unknown_id() {
        let repo = InMemoryReceiptRepository::new();
        let id = ReceiptId::parse("does-not-exist").unwrap();

        assert_eq!(repo.get(&id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_each_put_gets_a_fresh_id() {
        let repo = InMemoryReceiptRepository::new();
        let first = repo.put(receipt("Target")).await.unwrap();
        let second = repo.put(receipt("Target")).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(repo.len().unwrap(), 2);
    }

    #[tokio::test]
    async fn test_usable_as_trait_object() {
        let repo: std::sync::Arc<dyn ReceiptRepository> =
            std::sync::Arc::new(InMemoryReceiptRepository::new());
        let id = repo.put(receipt("Walgreens")).await.unwrap();

        let stored = repo.get(&id).await.unwrap().unwrap();
        assert_eq!(stored.retailer, "Walgreens");
    }
}
