use crate::model::{Amount, AmountError};
use chrono::{NaiveDate, NaiveTime};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// The JSON shape of a receipt as it is submitted by a client.
///
/// Every field arrives as a string so that amounts keep their exact decimal text. Use
/// `Receipt::try_from` to validate a payload into a `Receipt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[schemars(title = "Receipt")]
pub struct ReceiptPayload {
    /// The name of the retailer or store the receipt is from.
    pub retailer: String,
    /// The date of the purchase printed on the receipt, e.g. `2022-01-01`.
    pub purchase_date: String,
    /// The time of the purchase printed on the receipt, 24-hour time, e.g. `13:01`.
    pub purchase_time: String,
    /// The purchased items. At least one is required.
    pub items: Vec<ItemPayload>,
    /// The total amount paid on the receipt, e.g. `35.35`.
    pub total: String,
}

/// The JSON shape of a single line item on a submitted receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[schemars(title = "Item")]
pub struct ItemPayload {
    /// The short product description for the item.
    pub short_description: String,
    /// The total price paid for this item, e.g. `6.49`.
    pub price: String,
}

/// The reasons a submitted receipt can be rejected.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("The receipt could not be read: {0}")]
    Malformed(String),

    #[error("The receipt must contain at least one item")]
    NoItems,

    #[error("purchaseDate '{0}' is not a calendar date in YYYY-MM-DD form")]
    InvalidDate(String),

    #[error("purchaseTime '{0}' is not a 24-hour time in HH:MM form")]
    InvalidTime(String),

    #[error("{field} is not a valid amount: {source}")]
    InvalidAmount {
        field: String,
        #[source]
        source: AmountError,
    },
}

impl From<serde_json::Error> for ValidationError {
    fn from(e: serde_json::Error) -> Self {
        ValidationError::Malformed(e.to_string())
    }
}

/// A single validated line item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    short_description: String,
    price: Amount,
}

impl Item {
    /// The description exactly as submitted.
    pub fn short_description(&self) -> &str {
        &self.short_description
    }

    /// The description with leading and trailing whitespace removed.
    pub fn trimmed_description(&self) -> &str {
        self.short_description.trim()
    }

    pub fn price(&self) -> Amount {
        self.price
    }
}

/// A validated receipt. It can only be constructed from a `ReceiptPayload` that passed every
/// check, so the point rules never see malformed data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    retailer: String,
    purchase_date: NaiveDate,
    purchase_time: NaiveTime,
    items: Vec<Item>,
    total: Amount,
}

impl Receipt {
    /// Parses and validates a JSON document in the `ReceiptPayload` shape.
    pub fn from_json(json: &str) -> Result<Self, ValidationError> {
        let payload: ReceiptPayload = serde_json::from_str(json)?;
        Self::try_from(payload)
    }

    pub fn retailer(&self) -> &str {
        &self.retailer
    }

    pub fn purchase_date(&self) -> NaiveDate {
        self.purchase_date
    }

    pub fn purchase_time(&self) -> NaiveTime {
        self.purchase_time
    }

    /// The items in the order they were submitted. Never empty.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn total(&self) -> Amount {
        self.total
    }
}

impl TryFrom<ReceiptPayload> for Receipt {
    type Error = ValidationError;

    fn try_from(payload: ReceiptPayload) -> Result<Self, Self::Error> {
        let ReceiptPayload {
            retailer,
            purchase_date,
            purchase_time,
            items,
            total,
        } = payload;

        if items.is_empty() {
            return Err(ValidationError::NoItems);
        }

        let purchase_date = NaiveDate::parse_from_str(&purchase_date, DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidDate(purchase_date.clone()))?;
        let purchase_time = NaiveTime::parse_from_str(&purchase_time, TIME_FORMAT)
            .map_err(|_| ValidationError::InvalidTime(purchase_time.clone()))?;

        let items = items
            .into_iter()
            .enumerate()
            .map(|(ix, item)| {
                Ok(Item {
                    price: parse_amount(&format!("items[{ix}].price"), &item.price)?,
                    short_description: item.short_description,
                })
            })
            .collect::<Result<Vec<_>, ValidationError>>()?;

        let total = parse_amount("total", &total)?;

        Ok(Self {
            retailer,
            purchase_date,
            purchase_time,
            items,
            total,
        })
    }
}

fn parse_amount(field: &str, value: &str) -> Result<Amount, ValidationError> {
    Amount::from_str(value).map_err(|source| ValidationError::InvalidAmount {
        field: field.to_string(),
        source,
    })
}
