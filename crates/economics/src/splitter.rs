//! Fee splitting into mint-eligible and incentive portions

use crate::errors::EconomicsError;
use crate::types::{FeeSplit, IncentiveConfig};
use lumen_types::{mul_div_u128, Apportionment, MicroLMN};

/// Split an incoming fee into the portion eligible for minting and the two
/// incentive buckets.
///
/// The truncation remainder of the incentive division always lands in the
/// staker bucket, so `lock_incentive + staker_incentive == fee_amount`
/// holds exactly.
pub fn split_fee(
    fee_amount: MicroLMN,
    config: &IncentiveConfig,
) -> Result<FeeSplit, EconomicsError> {
    let total_incentives = config.total_incentives_bps() as u128;
    if total_incentives == 0 {
        return Err(EconomicsError::DivisionByZero("total incentives"));
    }

    // The fee is the incentive share of the total value created; scale it
    // back up to recover the full farmed amount.
    let total_farmed = mul_div_u128(fee_amount, config.fee_denominator as u128, total_incentives)
        .ok_or(EconomicsError::CalculationOverflow("total farmed"))?;
    // total_incentives <= fee_denominator, so total_farmed >= fee_amount
    let eligible_for_mint = total_farmed
        .checked_sub(fee_amount)
        .ok_or(EconomicsError::CalculationOverflow("eligible for mint"))?;

    let incentives = Apportionment::split(
        fee_amount,
        config.lock_incentive_bps as u128,
        total_incentives,
    )
    .ok_or(EconomicsError::CalculationOverflow("lock incentive"))?;

    Ok(FeeSplit {
        eligible_for_mint,
        lock_incentive: incentives.computed_side,
        staker_incentive: incentives.remainder_side,
    })
}
