//! Configuration and result types for the emission and fee-splitting math

use crate::errors::EconomicsError;
use lumen_types::{lmn_to_micro, MicroLMN};
use serde::{Deserialize, Serialize};

/// Canonical basis-point denominator for incentive ratios
pub const FEE_DENOMINATOR: u64 = 10_000;

/// Immutable emission curve configuration.
///
/// The curve decays in `total_cliffs` discrete steps; each step lowers the
/// per-unit mint multiplier until the hard cap is reached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmissionSchedule {
    /// Absolute cap on mintable supply in micro-LMN
    pub max_supply_micro: MicroLMN,
    /// Supply considered already minted at genesis, excluded from
    /// emissions accounting
    pub initial_mint_micro: MicroLMN,
    /// Number of decay steps in the schedule
    pub total_cliffs: u64,
    /// Supply width of one cliff: `max_supply_micro / total_cliffs`,
    /// truncating (the remainder is permanently unmintable)
    reduction_per_cliff: MicroLMN,
}

impl EmissionSchedule {
    /// Build a schedule, validating the cliff geometry.
    pub fn new(
        max_supply_micro: MicroLMN,
        initial_mint_micro: MicroLMN,
        total_cliffs: u64,
    ) -> Result<Self, EconomicsError> {
        if total_cliffs == 0 {
            return Err(EconomicsError::InvalidParameter("total_cliffs"));
        }
        let reduction_per_cliff = max_supply_micro / total_cliffs as u128;
        if reduction_per_cliff == 0 {
            return Err(EconomicsError::InvalidParameter("reduction_per_cliff"));
        }
        Ok(Self {
            max_supply_micro,
            initial_mint_micro,
            total_cliffs,
            reduction_per_cliff,
        })
    }

    /// Supply width of one cliff step
    pub fn reduction_per_cliff(&self) -> MicroLMN {
        self.reduction_per_cliff
    }
}

impl Default for EmissionSchedule {
    fn default() -> Self {
        // 100M LMN cap over 1000 cliffs, nothing pre-minted
        let max_supply_micro = lmn_to_micro(100_000_000);
        let total_cliffs = 1000;
        Self {
            max_supply_micro,
            initial_mint_micro: 0,
            total_cliffs,
            reduction_per_cliff: max_supply_micro / total_cliffs as u128,
        }
    }
}

/// Incentive ratios applied when splitting an incoming fee.
///
/// Both ratios are expressed in basis points of `fee_denominator`; whatever
/// they leave uncovered is the protocol share handled by the collaborator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct IncentiveConfig {
    /// Locker incentive in basis points
    pub lock_incentive_bps: u64,
    /// Staker incentive in basis points
    pub staker_incentive_bps: u64,
    /// Basis-point denominator (canonically 10_000)
    pub fee_denominator: u64,
}

impl IncentiveConfig {
    /// Build an incentive config, validating the ratio bounds.
    pub fn new(
        lock_incentive_bps: u64,
        staker_incentive_bps: u64,
        fee_denominator: u64,
    ) -> Result<Self, EconomicsError> {
        if fee_denominator == 0 {
            return Err(EconomicsError::InvalidParameter("fee_denominator"));
        }
        let total = lock_incentive_bps
            .checked_add(staker_incentive_bps)
            .ok_or(EconomicsError::CalculationOverflow("total incentives"))?;
        if total > fee_denominator {
            return Err(EconomicsError::InvalidParameter(
                "lock + staker incentives exceed fee denominator",
            ));
        }
        Ok(Self {
            lock_incentive_bps,
            staker_incentive_bps,
            fee_denominator,
        })
    }

    /// Combined incentive ratio in basis points
    pub fn total_incentives_bps(&self) -> u64 {
        // Bounded by fee_denominator after validation
        self.lock_incentive_bps + self.staker_incentive_bps
    }
}

impl Default for IncentiveConfig {
    fn default() -> Self {
        Self {
            // 10% to lockers, 4.5% to stakers, remainder to the protocol
            lock_incentive_bps: 1000,
            staker_incentive_bps: 450,
            fee_denominator: FEE_DENOMINATOR,
        }
    }
}

/// Ratio applied when splitting a minted amount between the reward
/// stream and the treasury.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConversionConfig {
    /// Reward share numerator
    pub reward_multiplier: u64,
    /// Reward share denominator
    pub multiplier_denominator: u64,
}

impl ConversionConfig {
    /// Build a conversion config, validating `multiplier <= denominator`.
    pub fn new(
        reward_multiplier: u64,
        multiplier_denominator: u64,
    ) -> Result<Self, EconomicsError> {
        if multiplier_denominator == 0 {
            return Err(EconomicsError::InvalidParameter("multiplier_denominator"));
        }
        if reward_multiplier > multiplier_denominator {
            return Err(EconomicsError::InvalidParameter(
                "reward_multiplier exceeds multiplier_denominator",
            ));
        }
        Ok(Self {
            reward_multiplier,
            multiplier_denominator,
        })
    }
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            // 50/50 between reward stream and treasury
            reward_multiplier: 5000,
            multiplier_denominator: 10_000,
        }
    }
}

/// Result of splitting an incoming fee amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSplit {
    /// Portion of value creation eligible for minting new supply
    pub eligible_for_mint: MicroLMN,
    /// Locker incentive portion of the fee
    pub lock_incentive: MicroLMN,
    /// Staker incentive portion of the fee (absorbs the truncation remainder)
    pub staker_incentive: MicroLMN,
}

/// Result of splitting a minted amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintedSplit {
    /// Portion streamed to stake-weighted participants
    pub reward_bucket: MicroLMN,
    /// Portion retained by the treasury (absorbs the truncation remainder)
    pub treasury_bucket: MicroLMN,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_rejects_zero_cliffs() {
        assert!(matches!(
            EmissionSchedule::new(1_000, 0, 0),
            Err(EconomicsError::InvalidParameter("total_cliffs"))
        ));
    }

    #[test]
    fn schedule_rejects_cap_smaller_than_cliff_count() {
        // 5 / 10 truncates to zero supply per cliff
        assert!(matches!(
            EmissionSchedule::new(5, 0, 10),
            Err(EconomicsError::InvalidParameter("reduction_per_cliff"))
        ));
    }

    #[test]
    fn schedule_derives_reduction_per_cliff() {
        let schedule = EmissionSchedule::new(500, 0, 5).unwrap();
        assert_eq!(schedule.reduction_per_cliff(), 100);

        // Truncating division: the 3 μLMN remainder is unmintable
        let schedule = EmissionSchedule::new(503, 0, 5).unwrap();
        assert_eq!(schedule.reduction_per_cliff(), 100);
    }

    #[test]
    fn incentive_config_bounds() {
        assert!(IncentiveConfig::new(1000, 450, 10_000).is_ok());
        assert!(IncentiveConfig::new(9000, 1001, 10_000).is_err());
        assert!(IncentiveConfig::new(1, 1, 0).is_err());
    }

    #[test]
    fn conversion_config_bounds() {
        assert!(ConversionConfig::new(10_000, 10_000).is_ok());
        assert!(ConversionConfig::new(10_001, 10_000).is_err());
        assert!(ConversionConfig::new(0, 0).is_err());
    }

    #[test]
    fn configs_round_trip_through_serde() {
        let schedule = EmissionSchedule::default();
        let json = serde_json::to_string(&schedule).unwrap();
        let restored: EmissionSchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(schedule, restored);
    }
}
