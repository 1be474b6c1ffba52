//! Record types for synthesized customer activity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Synthetic account number drawn from the seeded pool.
pub type AccountId = i64;

/// City codes used by the demo bank's branch network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum City {
    Bom,
    Del,
    Blr,
    Cal,
    Maa,
    Goi,
    Cok,
    Hyd,
    Pnq,
    Sxr,
    Trv,
    Amd,
    Zer,
}

impl City {
    /// Every city a generator may draw from.
    pub const ALL: [City; 13] = [
        City::Bom,
        City::Del,
        City::Blr,
        City::Cal,
        City::Maa,
        City::Goi,
        City::Cok,
        City::Hyd,
        City::Pnq,
        City::Sxr,
        City::Trv,
        City::Amd,
        City::Zer,
    ];

    /// Database string form, matching the `city` column.
    pub fn code(&self) -> &'static str {
        match self {
            City::Bom => "BOM",
            City::Del => "DEL",
            City::Blr => "BLR",
            City::Cal => "CAL",
            City::Maa => "MAA",
            City::Goi => "GOI",
            City::Cok => "COK",
            City::Hyd => "HYD",
            City::Pnq => "PNQ",
            City::Sxr => "SXR",
            City::Trv => "TRV",
            City::Amd => "AMD",
            City::Zer => "ZER",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Transaction categories, matching the `transaction_type` enum column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Credit,
    Debit,
    NonMonetary,
}

impl TransactionType {
    pub const ALL: [TransactionType; 3] = [
        TransactionType::Credit,
        TransactionType::Debit,
        TransactionType::NonMonetary,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            TransactionType::Credit => "CREDIT",
            TransactionType::Debit => "DEBIT",
            TransactionType::NonMonetary => "NON_MONETARY",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// App features a session may exercise, matching the `feature_used` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    #[serde(rename = "FUNDTRANSFER")]
    FundTransfer,
    #[serde(rename = "UPITRANSACTION")]
    UpiTransaction,
    #[serde(rename = "ENQUIRY")]
    Enquiry,
    #[serde(rename = "FOREX")]
    Forex,
    #[serde(rename = "MF-INVEST")]
    MutualFund,
    #[serde(rename = "CAPITALMARKET-INVEST")]
    CapitalMarket,
    #[serde(rename = "FD-INVEST")]
    FixedDeposit,
    #[serde(rename = "PENSIONFUND-INVEST")]
    PensionFund,
}

impl Feature {
    pub const ALL: [Feature; 8] = [
        Feature::FundTransfer,
        Feature::UpiTransaction,
        Feature::Enquiry,
        Feature::Forex,
        Feature::MutualFund,
        Feature::CapitalMarket,
        Feature::FixedDeposit,
        Feature::PensionFund,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Feature::FundTransfer => "FUNDTRANSFER",
            Feature::UpiTransaction => "UPITRANSACTION",
            Feature::Enquiry => "ENQUIRY",
            Feature::Forex => "FOREX",
            Feature::MutualFund => "MF-INVEST",
            Feature::CapitalMarket => "CAPITALMARKET-INVEST",
            Feature::FixedDeposit => "FD-INVEST",
            Feature::PensionFund => "PENSIONFUND-INVEST",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Exact two-fraction-digit amount, stored as integer cents.
///
/// Serialized as cents; Display renders the `DECIMAL(8,2)` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonetaryValue(i64);

impl MonetaryValue {
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for MonetaryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// One synthesized activity event, ready for insertion into the sink.
///
/// The row timestamp is assigned server-side; the record carries none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub account_id: AccountId,
    pub city: City,
    pub transaction_type: TransactionType,
    pub monetary_value: MonetaryValue,
    /// Session length in seconds.
    pub time_in_app_secs: i16,
    pub feature_used: Feature,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_domain_codes_are_distinct() {
        let cities: HashSet<_> = City::ALL.iter().map(|c| c.code()).collect();
        assert_eq!(cities.len(), 13);

        let types: HashSet<_> = TransactionType::ALL.iter().map(|t| t.code()).collect();
        assert_eq!(types.len(), 3);

        let features: HashSet<_> = Feature::ALL.iter().map(|s| s.code()).collect();
        assert_eq!(features.len(), 8);
    }

    #[test]
    fn test_monetary_value_display() {
        assert_eq!(MonetaryValue::from_cents(10_000).to_string(), "100.00");
        assert_eq!(MonetaryValue::from_cents(999_999).to_string(), "9999.99");
        assert_eq!(MonetaryValue::from_cents(1_000_000).to_string(), "10000.00");
        assert_eq!(MonetaryValue::from_cents(10_205).to_string(), "102.05");
    }
}
