use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// One line entry on a receipt.
///
/// `price` stays textual so that the exact representation submitted by the
/// client can be checked for format before it is ever read as a number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    #[schema(example = "Mountain Dew 12PK")]
    pub short_description: String,
    #[schema(example = "6.49")]
    pub price: String,
}

/// A purchase receipt submitted for scoring.
///
/// Absent fields decode to empty values so that incomplete bodies are
/// rejected by receipt validation with a field-specific message rather than
/// by the JSON decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Receipt {
    #[schema(example = "M&M Corner Market")]
    pub retailer: String,
    /// `YYYY-MM-DD`
    #[schema(example = "2022-01-01")]
    pub purchase_date: String,
    /// 24-hour `HH:MM`
    #[schema(example = "13:01")]
    pub purchase_time: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub items: Vec<Item>,
    #[schema(example = "35.35")]
    pub total: String,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

/// `"items": null` decodes like an absent list.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Item>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Item>>::deserialize(deserializer)?.unwrap_or_default())
}
