//! Minted-amount conversion between the reward stream and the treasury

use crate::errors::EconomicsError;
use crate::types::{ConversionConfig, MintedSplit};
use lumen_types::{Apportionment, MicroLMN};

/// Split a freshly minted amount between the reward bucket (streamed to
/// participants) and the treasury bucket. Truncation loss is retained by
/// the treasury.
pub fn split_minted(
    minted_amount: MicroLMN,
    config: &ConversionConfig,
) -> Result<MintedSplit, EconomicsError> {
    let split = Apportionment::split(
        minted_amount,
        config.reward_multiplier as u128,
        config.multiplier_denominator as u128,
    )
    .ok_or(EconomicsError::CalculationOverflow("reward bucket"))?;

    Ok(MintedSplit {
        reward_bucket: split.computed_side,
        treasury_bucket: split.remainder_side,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_is_exact() {
        let config = ConversionConfig::new(5000, 10_000).unwrap();
        let split = split_minted(1001, &config).unwrap();

        assert_eq!(split.reward_bucket, 500);
        // Treasury absorbs the truncation remainder
        assert_eq!(split.treasury_bucket, 501);
        assert_eq!(split.reward_bucket + split.treasury_bucket, 1001);
    }

    #[test]
    fn zero_multiplier_routes_everything_to_treasury() {
        let config = ConversionConfig::new(0, 10_000).unwrap();
        let split = split_minted(1000, &config).unwrap();
        assert_eq!(split.reward_bucket, 0);
        assert_eq!(split.treasury_bucket, 1000);
    }

    #[test]
    fn full_multiplier_routes_everything_to_rewards() {
        let config = ConversionConfig::new(10_000, 10_000).unwrap();
        let split = split_minted(1000, &config).unwrap();
        assert_eq!(split.reward_bucket, 1000);
        assert_eq!(split.treasury_bucket, 0);
    }
}
