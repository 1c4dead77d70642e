//! LUMEN canonical units and checked integer math
//!
//! Defines the monetary unit, participant/epoch identifiers, and the
//! overflow-checked helpers shared by the incentive accounting crates.
//!
//! ## Units
//! - 1 LMN = 100,000,000 μLMN (8 decimals, Bitcoin-style)
//! - All incentive accounting uses μLMN (u128 intermediate math)
//! - NO floating point allowed in amount computation

use serde::{Deserialize, Serialize};

// =============================================================================
// CANONICAL UNITS
// =============================================================================

/// Number of micro-LMN per LMN (8 decimal places)
pub const MICRO_PER_LMN: u128 = 100_000_000;

/// Amount in micro-LMN (smallest unit, 8 decimals)
pub type MicroLMN = u128;

/// Participant identifier (opaque 32-byte key assigned by the collaborator)
pub type ParticipantId = [u8; 32];

/// Fixed-width time bucket index used by the reward audit ledger
pub type EpochIndex = u64;

/// Caller-supplied timestamp in seconds (wall-clock or block time)
pub type Timestamp = u64;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checked addition for micro-LMN amounts
#[inline]
pub fn checked_add_micro(a: MicroLMN, b: MicroLMN) -> Option<MicroLMN> {
    a.checked_add(b)
}

/// Checked subtraction for micro-LMN amounts
#[inline]
pub fn checked_sub_micro(a: MicroLMN, b: MicroLMN) -> Option<MicroLMN> {
    a.checked_sub(b)
}

/// Safe multiplication followed by truncating division using u128 intermediate.
/// Returns None if the divisor is zero or the product overflows.
#[inline]
pub fn mul_div_u128(n: u128, mul: u128, div: u128) -> Option<u128> {
    if div == 0 {
        return None;
    }
    n.checked_mul(mul).map(|product| product / div)
}

/// Convert LMN to micro-LMN (saturating)
#[inline]
pub const fn lmn_to_micro(lmn: u64) -> MicroLMN {
    (lmn as u128).saturating_mul(MICRO_PER_LMN)
}

/// Convert micro-LMN to whole LMN (truncating)
#[inline]
pub const fn micro_to_lmn(micro: MicroLMN) -> u128 {
    micro / MICRO_PER_LMN
}

/// Compute the epoch bucket for a timestamp given a fixed epoch width.
/// Uses integer division - epoch 0 starts at t = 0.
///
/// The caller guarantees `duration > 0` (reward pools validate it at
/// construction).
#[inline]
pub const fn epoch_index(timestamp: Timestamp, duration: u64) -> EpochIndex {
    timestamp / duration
}

/// Inclusive start timestamp of a given epoch
#[inline]
pub const fn epoch_start(epoch: EpochIndex, duration: u64) -> Timestamp {
    epoch.saturating_mul(duration)
}

/// Exclusive end timestamp of a given epoch
#[inline]
pub const fn epoch_end(epoch: EpochIndex, duration: u64) -> Timestamp {
    epoch.saturating_add(1).saturating_mul(duration)
}

// =============================================================================
// AMOUNT PAIR
// =============================================================================

/// A two-way apportionment of an amount, with the truncation remainder
/// always carried by `remainder_side`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Apportionment {
    /// Portion computed by `amount * numerator / denominator` (truncating)
    pub computed_side: MicroLMN,
    /// `amount - computed_side`; absorbs the truncation remainder
    pub remainder_side: MicroLMN,
}

impl Apportionment {
    /// Split `amount` by `numerator / denominator`, assigning the truncation
    /// remainder to the other side. Returns None on zero denominator or
    /// intermediate overflow.
    pub fn split(amount: MicroLMN, numerator: u128, denominator: u128) -> Option<Self> {
        let computed_side = mul_div_u128(amount, numerator, denominator)?;
        let remainder_side = amount.checked_sub(computed_side)?;
        Some(Self {
            computed_side,
            remainder_side,
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
