use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::Rate;

/// Loss given default for gold-backed exposure.
///
/// Pledged gold is assumed auctionable at 80% recovery. This is a policy
/// constant; change it here if recovery assumptions change.
pub const GOLD_LOAN_LGD: Rate = dec!(0.20);

pub fn loss_given_default() -> Rate {
    GOLD_LOAN_LGD
}

/// Recovery rate implied by [`GOLD_LOAN_LGD`].
pub fn recovery_rate() -> Rate {
    Decimal::ONE - GOLD_LOAN_LGD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lgd_is_twenty_percent() {
        assert_eq!(loss_given_default(), dec!(0.2));
        assert_eq!(recovery_rate(), dec!(0.8));
    }
}
