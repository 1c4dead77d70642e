//! Fee-event pipeline: split, mint, convert, and queue in one step

use crate::errors::TreasuryError;
use crate::reward_pool::RewardPool;
use lumen_economics::{
    compute_mint_amount, split_fee, split_minted, ConversionConfig, EmissionSchedule, FeeSplit,
    IncentiveConfig,
};
use lumen_types::{MicroLMN, Timestamp};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Everything a fee event produced, for the collaborator to enact
/// (token issuance, incentive transfers, treasury credit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeOutcome {
    /// Incentive apportionment of the fee itself
    pub fee_split: FeeSplit,
    /// New supply the fee is worth under the emission curve
    pub minted: MicroLMN,
    /// Minted portion queued into the streaming pool
    pub reward_bucket: MicroLMN,
    /// Minted portion retained by the treasury
    pub treasury_bucket: MicroLMN,
}

/// Process one observed fee event end to end.
///
/// Splits the fee, computes the mint for the eligible portion, converts
/// the minted amount into reward and treasury buckets, and queues the
/// reward bucket into `pool`. The queue step is skipped when the bucket
/// is zero, so an exhausted emission schedule degrades to pure fee
/// accounting.
pub fn process_fee_event(
    schedule: &EmissionSchedule,
    incentives: &IncentiveConfig,
    conversion: &ConversionConfig,
    pool: &mut RewardPool,
    total_supply: MicroLMN,
    fee_amount: MicroLMN,
    now: Timestamp,
) -> Result<FeeOutcome, TreasuryError> {
    let fee_split = split_fee(fee_amount, incentives)?;
    let minted = compute_mint_amount(total_supply, fee_split.eligible_for_mint, schedule)?;
    let minted_split = split_minted(minted, conversion)?;

    if minted_split.reward_bucket > 0 {
        pool.queue_new_rewards(minted_split.reward_bucket, now)?;
    }

    info!(
        target: "treasury",
        fee = fee_amount,
        eligible = fee_split.eligible_for_mint,
        minted,
        reward = minted_split.reward_bucket,
        treasury = minted_split.treasury_bucket,
        "Fee event processed"
    );

    Ok(FeeOutcome {
        fee_split,
        minted,
        reward_bucket: minted_split.reward_bucket,
        treasury_bucket: minted_split.treasury_bucket,
    })
}
