//! Types that represent the core data model, such as `Receipt` and `Amount`.
mod amount;
mod receipt;

pub use amount::{Amount, AmountError};
pub use receipt::{Item, ItemPayload, Receipt, ReceiptPayload, ValidationError};
