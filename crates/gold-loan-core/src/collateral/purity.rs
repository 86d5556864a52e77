//! Gold purity grades and their fineness multipliers.
//!
//! The table is closed: a grade outside 24K / 22K / 18K / 14K is a lookup
//! failure, never a silent default to pure gold.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::GoldLoanError;
use crate::GoldLoanResult;

/// Version tag of the fineness table. Bump when a multiplier changes.
pub const PURITY_TABLE_VERSION: &str = "fineness-v1";

/// Karat grade of pledged gold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PurityGrade {
    K24,
    K22,
    K18,
    K14,
}

impl PurityGrade {
    pub const ALL: [PurityGrade; 4] = [
        PurityGrade::K24,
        PurityGrade::K22,
        PurityGrade::K18,
        PurityGrade::K14,
    ];

    /// Fraction of the alloy that is pure gold.
    pub fn fineness(self) -> Decimal {
        match self {
            PurityGrade::K24 => dec!(1.000),
            PurityGrade::K22 => dec!(0.916),
            PurityGrade::K18 => dec!(0.750),
            PurityGrade::K14 => dec!(0.585),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PurityGrade::K24 => "24K",
            PurityGrade::K22 => "22K",
            PurityGrade::K18 => "18K",
            PurityGrade::K14 => "14K",
        }
    }
}

impl fmt::Display for PurityGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PurityGrade {
    type Err = GoldLoanError;

    /// Accepts "22K", "22k" and "22 K". Anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_uppercase();
        PurityGrade::ALL
            .into_iter()
            .find(|g| g.as_str() == normalised)
            .ok_or_else(|| GoldLoanError::UnknownPurityGrade(s.to_string()))
    }
}

impl TryFrom<String> for PurityGrade {
    type Error = GoldLoanError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PurityGrade> for String {
    fn from(grade: PurityGrade) -> Self {
        grade.as_str().to_string()
    }
}

/// Look up the fineness multiplier for a grade given as text.
pub fn purity_multiplier(grade: &str) -> GoldLoanResult<Decimal> {
    grade.parse::<PurityGrade>().map(PurityGrade::fineness)
}

/// One row of the published purity table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurityTableEntry {
    pub grade: PurityGrade,
    pub fineness: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurityTable {
    pub version: String,
    pub entries: Vec<PurityTableEntry>,
}

/// The full grade-to-fineness table, purest first.
pub fn purity_table() -> PurityTable {
    PurityTable {
        version: PURITY_TABLE_VERSION.to_string(),
        entries: PurityGrade::ALL
            .into_iter()
            .map(|grade| PurityTableEntry {
                grade,
                fineness: grade.fineness(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fineness_table_values() {
        assert_eq!(purity_multiplier("24K").unwrap(), dec!(1));
        assert_eq!(purity_multiplier("22K").unwrap(), dec!(0.916));
        assert_eq!(purity_multiplier("18K").unwrap(), dec!(0.75));
        assert_eq!(purity_multiplier("14K").unwrap(), dec!(0.585));
    }

    #[test]
    fn test_parse_is_case_and_space_insensitive() {
        assert_eq!("22k".parse::<PurityGrade>().unwrap(), PurityGrade::K22);
        assert_eq!(" 18 K ".parse::<PurityGrade>().unwrap(), PurityGrade::K18);
    }

    #[test]
    fn test_unknown_grade_is_lookup_failure() {
        for bad in ["20K", "", "24", "pure", "916"] {
            match purity_multiplier(bad) {
                Err(GoldLoanError::UnknownPurityGrade(g)) => assert_eq!(g, bad),
                other => panic!("expected lookup failure for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_serde_uses_karat_labels() {
        let json = serde_json::to_string(&PurityGrade::K22).unwrap();
        assert_eq!(json, "\"22K\"");
        let back: PurityGrade = serde_json::from_str("\"14K\"").unwrap();
        assert_eq!(back, PurityGrade::K14);
    }

    #[test]
    fn test_serde_rejects_unknown_grade() {
        let err = serde_json::from_str::<PurityGrade>("\"21K\"").unwrap_err();
        assert!(err.to_string().contains("Unknown purity grade"));
    }

    #[test]
    fn test_table_is_ordered_purest_first() {
        let table = purity_table();
        assert_eq!(table.version, PURITY_TABLE_VERSION);
        let finenesses: Vec<Decimal> = table.entries.iter().map(|e| e.fineness).collect();
        assert_eq!(finenesses, vec![dec!(1), dec!(0.916), dec!(0.75), dec!(0.585)]);
    }
}
