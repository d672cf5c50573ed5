use storage::{
    ReceiptRepository, StorageError,
    models::{Receipt, ReceiptId},
    services::{points, validation},
};

use crate::error::WebResult;

/// Validate and store a receipt, returning its new identifier
pub async fn process_receipt(
    repo: &dyn ReceiptRepository,
    receipt: Receipt,
) -> WebResult<ReceiptId> {
    validation::validate_receipt(&receipt)?;

    let id = repo.put(receipt).await?;
    tracing::info!("Stored receipt {}", id);

    Ok(id)
}

/// Look up a stored receipt and score it
pub async fn get_points(repo: &dyn ReceiptRepository, id: &str) -> WebResult<u64> {
    let id = ReceiptId::parse(id)?;

    let receipt = repo.get(&id).await?.ok_or(StorageError::NotFound)?;

    Ok(points::calculate_points(&receipt))
}
