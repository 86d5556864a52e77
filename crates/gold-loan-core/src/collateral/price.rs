//! Spot gold price sources.
//!
//! The engine never fetches prices itself. A caller resolves a [`SpotQuote`]
//! from a [`SpotPriceProvider`] first and hands the rate to the engine.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::GoldLoanError;
use crate::types::Money;
use crate::GoldLoanResult;

/// Reference spot rate per gram of 24K gold used when no live feed is wired in.
pub const DEFAULT_SPOT_RATE: Money = dec!(5832.50);

/// A single spot observation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotQuote {
    /// Currency per gram of pure gold.
    pub rate_per_gram: Money,
    /// Where the quote came from (e.g. "fixed", "feed").
    pub source: String,
    pub as_of: DateTime<Utc>,
}

/// Capability returning the current spot gold rate.
pub trait SpotPriceProvider {
    fn spot_quote(&self) -> GoldLoanResult<SpotQuote>;
}

/// Provider returning the same rate on every call.
#[derive(Debug, Clone)]
pub struct FixedSpotPrice {
    rate_per_gram: Money,
}

impl FixedSpotPrice {
    pub fn new(rate_per_gram: Money) -> GoldLoanResult<Self> {
        ensure_positive(rate_per_gram)?;
        Ok(Self { rate_per_gram })
    }

    pub fn rate_per_gram(&self) -> Money {
        self.rate_per_gram
    }
}

impl Default for FixedSpotPrice {
    fn default() -> Self {
        Self {
            rate_per_gram: DEFAULT_SPOT_RATE,
        }
    }
}

impl SpotPriceProvider for FixedSpotPrice {
    fn spot_quote(&self) -> GoldLoanResult<SpotQuote> {
        Ok(SpotQuote {
            rate_per_gram: self.rate_per_gram,
            source: "fixed".to_string(),
            as_of: Utc::now(),
        })
    }
}

/// Fetch a quote and check it honours the positive-rate contract.
pub fn resolve_spot_rate(provider: &dyn SpotPriceProvider) -> GoldLoanResult<SpotQuote> {
    let quote = provider.spot_quote()?;
    ensure_positive(quote.rate_per_gram)?;
    Ok(quote)
}

pub(crate) fn ensure_positive(rate: Decimal) -> GoldLoanResult<()> {
    if rate <= Decimal::ZERO {
        return Err(GoldLoanError::InvalidSpotPrice {
            rate,
            reason: "spot rate must be positive".into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenFeed;

    impl SpotPriceProvider for BrokenFeed {
        fn spot_quote(&self) -> GoldLoanResult<SpotQuote> {
            Err(GoldLoanError::PriceUnavailable("feed timed out".into()))
        }
    }

    struct ZeroFeed;

    impl SpotPriceProvider for ZeroFeed {
        fn spot_quote(&self) -> GoldLoanResult<SpotQuote> {
            Ok(SpotQuote {
                rate_per_gram: Decimal::ZERO,
                source: "zero".into(),
                as_of: Utc::now(),
            })
        }
    }

    #[test]
    fn test_default_fixed_price() {
        let quote = FixedSpotPrice::default().spot_quote().unwrap();
        assert_eq!(quote.rate_per_gram, dec!(5832.50));
        assert_eq!(quote.source, "fixed");
    }

    #[test]
    fn test_fixed_price_rejects_non_positive() {
        assert!(FixedSpotPrice::new(Decimal::ZERO).is_err());
        assert!(FixedSpotPrice::new(dec!(-1)).is_err());
        assert_eq!(FixedSpotPrice::new(dec!(6000)).unwrap().rate_per_gram(), dec!(6000));
    }

    #[test]
    fn test_resolve_propagates_provider_failure() {
        let err = resolve_spot_rate(&BrokenFeed).unwrap_err();
        assert!(matches!(err, GoldLoanError::PriceUnavailable(_)));
    }

    #[test]
    fn test_resolve_rejects_zero_quote() {
        let err = resolve_spot_rate(&ZeroFeed).unwrap_err();
        assert!(matches!(err, GoldLoanError::InvalidSpotPrice { .. }));
    }
}
