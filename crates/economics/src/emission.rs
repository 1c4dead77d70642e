//! Cliff-decaying emission curve with hard supply cap enforcement

use crate::errors::EconomicsError;
use crate::types::EmissionSchedule;
use lumen_types::MicroLMN;
use tracing::debug;

/// Compute how much new supply an observed input amount is worth under the
/// emission curve, never exceeding the remaining headroom below the cap.
///
/// `total_supply` is the collaborator-tracked current minted supply; this
/// core only reads it. The result is always in `[0, remaining_to_cap]`.
pub fn compute_mint_amount(
    total_supply: MicroLMN,
    input_amount: MicroLMN,
    schedule: &EmissionSchedule,
) -> Result<MicroLMN, EconomicsError> {
    // Supply below the genesis mint signals a caller or configuration error
    let emissions_minted = total_supply.checked_sub(schedule.initial_mint_micro).ok_or(
        EconomicsError::SupplyBelowGenesis {
            total_supply,
            initial_mint: schedule.initial_mint_micro,
        },
    )?;

    let total_cliffs = schedule.total_cliffs as u128;
    let cliff = emissions_minted / schedule.reduction_per_cliff();
    if cliff >= total_cliffs {
        debug!(
            target: "economics",
            total_supply,
            "Emission schedule exhausted, nothing mintable"
        );
        return Ok(0);
    }

    // Per-cliff decaying multiplier, measured in the same denominator as
    // total_cliffs. Tuning constants and truncation order are load-bearing.
    let reduction = (total_cliffs - cliff) * 5 / 2 + 700;
    let raw_amount = input_amount
        .checked_mul(reduction)
        .ok_or(EconomicsError::CalculationOverflow("raw mint amount"))?
        / total_cliffs;

    // cliff < total_cliffs guarantees emissions_minted < max_supply_micro
    let remaining_to_cap = schedule.max_supply_micro - emissions_minted;
    Ok(raw_amount.min(remaining_to_cap))
}
