//! The individual point rules. Each function looks at the whole receipt and returns its own
//! contribution, independent of every other rule.

use crate::model::Receipt;
use chrono::{Datelike, Timelike};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

const ROUND_DOLLAR_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const POINTS_PER_ITEM_PAIR: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;

/// 14:00 inclusive to 16:00 exclusive.
const AFTERNOON_HOURS: std::ops::Range<u32> = 14..16;

/// One point for every alphanumeric character in the retailer name.
pub(super) fn retailer_name(receipt: &Receipt) -> u64 {
    receipt
        .retailer()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .count() as u64
}

/// 50 points if the total is a round dollar amount with no cents.
pub(super) fn round_dollar_total(receipt: &Receipt) -> u64 {
    if receipt.total().is_whole() {
        ROUND_DOLLAR_POINTS
    } else {
        0
    }
}

/// 25 points if the total is a multiple of `0.25`.
pub(super) fn quarter_multiple_total(receipt: &Receipt) -> u64 {
    if receipt.total().is_multiple_of(Decimal::new(25, 2)) {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    }
}

/// 5 points for every two items on the receipt.
pub(super) fn item_pairs(receipt: &Receipt) -> u64 {
    (receipt.items().len() / 2) as u64 * POINTS_PER_ITEM_PAIR
}

/// For each item whose trimmed description length is a multiple of 3, the price multiplied by
/// `0.2` and rounded up to the nearest integer. An empty description has length 0 and qualifies,
/// though it can only earn points through its price.
///
/// Prices are below one trillion, so each item earns at most 200 billion points. The sum
/// saturates at `u64::MAX` rather than wrapping.
pub(super) fn item_descriptions(receipt: &Receipt) -> u64 {
    let factor = Decimal::new(2, 1);
    receipt
        .items()
        .iter()
        .filter(|item| item.trimmed_description().chars().count() % 3 == 0)
        .map(|item| {
            (item.price().value() * factor)
                .ceil()
                .to_u64()
                .unwrap_or(u64::MAX)
        })
        .fold(0, u64::saturating_add)
}

/// 6 points if the day in the purchase date is odd.
pub(super) fn odd_purchase_day(receipt: &Receipt) -> u64 {
    if receipt.purchase_date().day() % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    }
}

/// 10 points if the time of purchase is after 2:00pm and before 4:00pm.
pub(super) fn afternoon_purchase(receipt: &Receipt) -> u64 {
    if AFTERNOON_HOURS.contains(&receipt.purchase_time().hour()) {
        AFTERNOON_POINTS
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{item, receipt, receipt_with_items, receipt_with_total};

    #[test]
    fn test_retailer_counts_letters_and_digits_only() {
        let r = receipt("M&M Corner Market", "2022-03-20", "14:33", "9.00");
        assert_eq!(retailer_name(&r), 14);

        let r = receipt("Target", "2022-03-20", "14:33", "9.00");
        assert_eq!(retailer_name(&r), 6);

        let r = receipt("7-Eleven #42", "2022-03-20", "14:33", "9.00");
        assert_eq!(retailer_name(&r), 9);
    }

    #[test]
    fn test_retailer_without_alphanumerics() {
        let r = receipt(" &-- ", "2022-03-20", "14:33", "9.00");
        assert_eq!(retailer_name(&r), 0);
    }

    #[test]
    fn test_retailer_counts_non_ascii_characters() {
        let r = receipt("Café 7", "2022-03-20", "14:33", "9.00");
        assert_eq!(retailer_name(&r), 5);

        let r = receipt("Åhléns № ٣", "2022-03-20", "14:33", "9.00");
        assert_eq!(retailer_name(&r), 7);
    }

    #[test]
    fn test_round_dollar_and_quarter_boundaries() {
        let r = receipt_with_total("100.00");
        assert_eq!(round_dollar_total(&r) + quarter_multiple_total(&r), 75);

        let r = receipt_with_total("100.10");
        assert_eq!(round_dollar_total(&r) + quarter_multiple_total(&r), 0);

        let r = receipt_with_total("100.25");
        assert_eq!(round_dollar_total(&r), 0);
        assert_eq!(quarter_multiple_total(&r), 25);
    }

    #[test]
    fn test_round_dollar_without_fraction_digits() {
        let r = receipt_with_total("10");
        assert_eq!(round_dollar_total(&r), 50);
        assert_eq!(quarter_multiple_total(&r), 25);
    }

    #[test]
    fn test_decimal_totals_that_break_floats() {
        // 0.1 + 0.2 style representation error must not leak into the quarter rule.
        for (total, expected) in [("0.30", 0), ("0.75", 25), ("1234567.75", 25), ("0.01", 0)] {
            let r = receipt_with_total(total);
            assert_eq!(quarter_multiple_total(&r), expected, "total {total}");
        }
    }

    #[test]
    fn test_item_pairs() {
        let one = receipt_with_items(vec![item("a", "1.00")]);
        assert_eq!(item_pairs(&one), 0);

        let two = receipt_with_items(vec![item("a", "1.00"); 2]);
        assert_eq!(item_pairs(&two), 5);

        let five = receipt_with_items(vec![item("a", "1.00"); 5]);
        assert_eq!(item_pairs(&five), 10);
    }

    #[test]
    fn test_item_descriptions_length_not_multiple_of_three() {
        let r = receipt_with_items(vec![item("Gatorade", "2.25"), item("Pepsi - 12-oz", "1.25")]);
        assert_eq!(item_descriptions(&r), 0);
    }

    #[test]
    fn test_item_descriptions_rounds_up() {
        let r = receipt_with_items(vec![item("Ninechars", "10.00")]);
        assert_eq!(item_descriptions(&r), 2);

        let r = receipt_with_items(vec![item("Emils Cheese Pizza", "12.25")]);
        assert_eq!(item_descriptions(&r), 3);

        let r = receipt_with_items(vec![item("Dasani", "1.00")]);
        assert_eq!(item_descriptions(&r), 1);
    }

    #[test]
    fn test_item_descriptions_trims_whitespace() {
        let r = receipt_with_items(vec![item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00")]);
        assert_eq!(item_descriptions(&r), 3);
    }

    #[test]
    fn test_item_descriptions_empty_description_qualifies() {
        let r = receipt_with_items(vec![item("   ", "4.99")]);
        assert_eq!(item_descriptions(&r), 1);

        let r = receipt_with_items(vec![item("", "0.00")]);
        assert_eq!(item_descriptions(&r), 0);
    }

    #[test]
    fn test_item_descriptions_exact_product_is_not_rounded() {
        let r = receipt_with_items(vec![item("abc", "5.00")]);
        assert_eq!(item_descriptions(&r), 1);
    }

    #[test]
    fn test_item_descriptions_counts_characters_not_bytes() {
        // Three characters in four bytes.
        let r = receipt_with_items(vec![item("Thé", "5.00")]);
        assert_eq!(item_descriptions(&r), 1);

        // Four characters in five bytes.
        let r = receipt_with_items(vec![item("Café", "5.00")]);
        assert_eq!(item_descriptions(&r), 0);
    }

    #[test]
    fn test_item_descriptions_largest_prices() {
        let r = receipt_with_items(vec![item("abc", "999999999999.99")]);
        assert_eq!(item_descriptions(&r), 200_000_000_000);

        let r = receipt_with_items(vec![item("abc", "999999999999.99"); 2]);
        assert_eq!(item_descriptions(&r), 400_000_000_000);
    }

    #[test]
    fn test_odd_purchase_day() {
        assert_eq!(odd_purchase_day(&receipt("a", "2022-01-01", "13:01", "1.00")), 6);
        assert_eq!(odd_purchase_day(&receipt("a", "2022-01-31", "13:01", "1.00")), 6);
        assert_eq!(odd_purchase_day(&receipt("a", "2022-03-20", "13:01", "1.00")), 0);
    }

    #[test]
    fn test_afternoon_purchase_window() {
        for (time, expected) in [
            ("13:59", 0),
            ("14:00", 10),
            ("14:33", 10),
            ("15:59", 10),
            ("16:00", 0),
            ("02:30", 0),
        ] {
            let r = receipt("a", "2022-01-02", time, "1.00");
            assert_eq!(afternoon_purchase(&r), expected, "time {time}");
        }
    }
}
