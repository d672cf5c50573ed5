//! Format checks applied to a receipt before it is accepted for storage.
//!
//! Checks run in a fixed order and stop at the first violation, so the
//! error always names a single field.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::models::Receipt;

// Whitespace in the text patterns is ASCII only: tab, newline, form feed,
// carriage return and space.

static RETAILER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9\t\n\x0C\r \-&]+$").expect("retailer pattern is valid"));

static AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]{2}$").expect("amount pattern is valid"));

static SHORT_DESCRIPTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9\t\n\x0C\r \-]+$").expect("short description pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReceiptValidationError {
    #[error("invalid format for retailer")]
    InvalidRetailer,

    #[error("invalid format for total")]
    InvalidTotal,

    #[error("items array must contain at least one item")]
    NoItems,

    #[error("invalid format for item shortDescription")]
    InvalidShortDescription,

    #[error("invalid format for item price")]
    InvalidPrice,

    #[error("invalid format for ID")]
    InvalidId,
}

pub fn validate_receipt(receipt: &Receipt) -> Result<(), ReceiptValidationError> {
    if !RETAILER_RE.is_match(&receipt.retailer) {
        return Err(ReceiptValidationError::InvalidRetailer);
    }
    if !AMOUNT_RE.is_match(&receipt.total) {
        return Err(ReceiptValidationError::InvalidTotal);
    }
    if receipt.items.is_empty() {
        return Err(ReceiptValidationError::NoItems);
    }

    for item in &receipt.items {
        if !SHORT_DESCRIPTION_RE.is_match(&item.short_description) {
            return Err(ReceiptValidationError::InvalidShortDescription);
        }
        if !AMOUNT_RE.is_match(&item.price) {
            return Err(ReceiptValidationError::InvalidPrice);
        }
    }

    Ok(())
}

/// Guards repository lookups: an identifier is a single non-empty token.
pub fn validate_receipt_id(id: &str) -> Result<(), ReceiptValidationError> {
    if id.is_empty() || id.chars().any(char::is_whitespace) {
        return Err(ReceiptValidationError::InvalidId);
    }
    Ok(())
}
