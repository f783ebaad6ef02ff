//! The point calculator.
//!
//! A receipt's score is the sum of several independent rules, each of which contributes a
//! non-negative number of points. The score is a pure function of the receipt, so it is
//! recomputed on every request rather than stored.

mod rules;

use crate::model::Receipt;
use serde::{Deserialize, Serialize, Serializer};
use tracing::trace;

/// Identifies one of the point rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// One point for every alphanumeric character in the retailer name.
    RetailerName,
    /// 50 points if the total is a round dollar amount with no cents.
    RoundDollarTotal,
    /// 25 points if the total is a multiple of `0.25`.
    QuarterMultipleTotal,
    /// 5 points for every two items on the receipt.
    ItemPairs,
    /// `ceil(price * 0.2)` for each item whose trimmed description length is a multiple of 3.
    ItemDescriptions,
    /// 6 points if the day in the purchase date is odd.
    OddPurchaseDay,
    /// 10 points if the time of purchase is in `[14:00, 16:00)`.
    AfternoonPurchase,
}

serde_plain::derive_display_from_serialize!(Rule);
serde_plain::derive_fromstr_from_deserialize!(Rule);

impl Rule {
    /// Every rule, in the order they are evaluated and reported.
    pub const ALL: [Rule; 7] = [
        Rule::RetailerName,
        Rule::RoundDollarTotal,
        Rule::QuarterMultipleTotal,
        Rule::ItemPairs,
        Rule::ItemDescriptions,
        Rule::OddPurchaseDay,
        Rule::AfternoonPurchase,
    ];

    /// Evaluates this rule alone against `receipt`.
    pub fn apply(self, receipt: &Receipt) -> u64 {
        match self {
            Rule::RetailerName => rules::retailer_name(receipt),
            Rule::RoundDollarTotal => rules::round_dollar_total(receipt),
            Rule::QuarterMultipleTotal => rules::quarter_multiple_total(receipt),
            Rule::ItemPairs => rules::item_pairs(receipt),
            Rule::ItemDescriptions => rules::item_descriptions(receipt),
            Rule::OddPurchaseDay => rules::odd_purchase_day(receipt),
            Rule::AfternoonPurchase => rules::afternoon_purchase(receipt),
        }
    }
}

/// The points a receipt earned, broken down by rule. Serializes as
/// `{"points": <total>, "rules": [{"rule": "<name>", "points": <n>}, ...]}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Points {
    rules: Vec<RulePoints>,
}

/// The points earned from a single rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RulePoints {
    pub rule: Rule,
    pub points: u64,
}

impl Points {
    /// The sum of every rule's contribution, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.rules
            .iter()
            .map(|r| r.points)
            .fold(0, u64::saturating_add)
    }

    /// The contribution of `rule`.
    pub fn get(&self, rule: Rule) -> u64 {
        self.rules
            .iter()
            .find(|r| r.rule == rule)
            .map(|r| r.points)
            .unwrap_or_default()
    }

    /// Each rule's contribution, in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &RulePoints> {
        self.rules.iter()
    }
}

impl Serialize for Points {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(Serialize)]
        struct Repr<'a> {
            points: u64,
            rules: &'a [RulePoints],
        }
        Repr {
            points: self.total(),
            rules: &self.rules,
        }
        .serialize(serializer)
    }
}

/// Evaluates every rule against `receipt` and records each contribution.
pub fn breakdown(receipt: &Receipt) -> Points {
    let rules = Rule::ALL
        .into_iter()
        .map(|rule| {
            let points = rule.apply(receipt);
            trace!("Rule {rule} awarded {points} points");
            RulePoints { rule, points }
        })
        .collect();
    Points { rules }
}

/// Computes the total points awarded to `receipt`.
pub fn score(receipt: &Receipt) -> u64 {
    breakdown(receipt).total()
}
