use crate::commands::Out;
use crate::model::Receipt;
use crate::points::{self, Points};
use crate::Result;
use anyhow::Context;
use std::path::Path;
use tracing::debug;

/// Reads the receipt in the JSON file at `path` and scores it. Nothing is stored.
pub async fn points(path: &Path) -> Result<Out<Points>> {
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read the receipt at {}", path.display()))?;
    let receipt = Receipt::from_json(&json)
        .with_context(|| format!("The receipt at {} is invalid", path.display()))?;
    debug!(
        "Scoring a receipt from '{}' with {} items",
        receipt.retailer(),
        receipt.items().len()
    );

    let scored = points::breakdown(&receipt);
    let message = format!(
        "The receipt from '{}' is worth {} points",
        receipt.retailer(),
        scored.total()
    );
    Ok(Out::new(message, scored))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::points::Rule;
    use crate::test::{CORNER_MARKET_JSON, TARGET_JSON};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_points_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("target.json");
        std::fs::write(&path, TARGET_JSON).unwrap();

        let out = points(&path).await.unwrap();
        assert_eq!(out.message(), "The receipt from 'Target' is worth 28 points");
        let breakdown = out.structure().unwrap();
        assert_eq!(breakdown.total(), 28);
        assert_eq!(breakdown.get(Rule::ItemPairs), 10);
    }

    #[tokio::test]
    async fn test_points_from_second_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("corner-market.json");
        std::fs::write(&path, CORNER_MARKET_JSON).unwrap();

        let out = points(&path).await.unwrap();
        assert_eq!(out.structure().unwrap().total(), 109);
    }

    #[tokio::test]
    async fn test_points_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = points(&dir.path().join("missing.json")).await;
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("Failed to read the receipt"), "{message}");
    }

    #[tokio::test]
    async fn test_points_invalid_receipt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("invalid.json");
        let json = TARGET_JSON.replace("2022-01-01", "2022-02-30");
        std::fs::write(&path, json).unwrap();

        let result = points(&path).await;
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("is invalid"), "{message}");
        assert!(message.contains("2022-02-30"), "{message}");
    }
}
