use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::services::validation::{self, ReceiptValidationError};

/// Opaque identifier under which a receipt is stored.
///
/// Identifiers are minted as UUID v4 strings, but lookups accept any
/// non-empty token without whitespace so that the repository, not the
/// parser, decides whether the receipt exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(String);

impl ReceiptId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn parse(id: &str) -> Result<Self, ReceiptValidationError> {
        validation::validate_receipt_id(id)?;
        Ok(Self(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
