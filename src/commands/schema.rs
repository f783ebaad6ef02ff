use crate::commands::Out;
use crate::model::ReceiptPayload;
use crate::Result;
use serde_json::Value;

/// Returns the JSON Schema of a submitted receipt.
pub async fn schema() -> Result<Out<Value>> {
    let schema = serde_json::to_value(schemars::schema_for!(ReceiptPayload))?;
    Ok(Out::new("JSON Schema for a submitted receipt", schema))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_schema_describes_receipt() {
        let out = schema().await.unwrap();
        let schema = out.structure().unwrap();
        assert_eq!(schema["title"], "Receipt");
        assert!(schema["properties"]["purchaseDate"].is_object());
        assert!(schema["properties"]["items"].is_object());
    }
}
