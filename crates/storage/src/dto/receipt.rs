use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::ReceiptId;

/// Returned after a receipt has been accepted and stored
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProcessReceiptResponse {
    #[schema(value_type = String, example = "7fb1377b-b223-49d9-a31a-5a02701dd310")]
    pub id: ReceiptId,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PointsResponse {
    #[serde(rename = "Points")]
    #[schema(example = 28)]
    pub points: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "OK")]
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
