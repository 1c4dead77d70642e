//! Epoch Reward Streaming Pool
//!
//! Stateful accrual engine that streams queued reward deposits linearly to
//! virtual-balance holders over fixed-duration periods.
//!
//! ## Key Invariants
//! - Balances are reported by the collaborator, never custodied here
//! - Every mutating call settles the global accumulator first
//! - A call either commits its full state delta or mutates nothing
//! - Unstreamed remainder of an active period rolls into the next rate
//! - The epoch ledger is append-only and never feeds back into streaming
//!
//! `now` is always supplied by the caller, which makes the pool fully
//! deterministic and replayable given identical call sequences.

use crate::errors::TreasuryError;
use lumen_types::{epoch_index, EpochIndex, MicroLMN, ParticipantId, Timestamp};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info};

/// Fixed-point scale for the reward-per-token accumulator
pub const REWARD_PRECISION: u128 = 1_000_000_000_000_000_000;

/// Per-participant accrual checkpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantState {
    /// Stake weight reported by the collaborator
    pub virtual_balance: MicroLMN,
    /// Accumulator value at the participant's last settlement
    pub reward_per_token_paid: u128,
    /// Accrued but unclaimed reward
    pub accrued: MicroLMN,
}

/// Serializable summary of a pool, for the collaborator's persistence
/// and reporting layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolSnapshot {
    pub duration: u64,
    pub period_finish: Timestamp,
    pub reward_rate: MicroLMN,
    pub last_update_time: Timestamp,
    pub reward_per_token_stored: u128,
    pub total_virtual_balance: MicroLMN,
    pub streaming_balance: MicroLMN,
    pub participant_count: usize,
    pub total_queued: MicroLMN,
}

/// Streaming reward pool for one reward-token / participant-set pair.
///
/// Single-writer: concurrent callers must be serialized by the
/// collaborator, one state-changing call at a time per pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardPool {
    /// Fixed streaming period and epoch width in seconds
    duration: u64,
    /// Timestamp at which the active reward rate stops applying
    period_finish: Timestamp,
    /// Amount streamed per second while the period is active
    reward_rate: MicroLMN,
    /// Accumulator checkpoint time
    last_update_time: Timestamp,
    /// Global reward-per-token accumulator, scaled by `REWARD_PRECISION`
    reward_per_token_stored: u128,
    /// Sum of all reported virtual balances
    total_virtual_balance: MicroLMN,
    /// Queued minus claimed; the funding ceiling for the rate guard
    streaming_balance: MicroLMN,
    /// Lazily created, never destroyed
    participants: HashMap<ParticipantId, ParticipantState>,
    /// Append-only audit ledger: epoch bucket -> total queued in it
    epoch_rewards: BTreeMap<EpochIndex, MicroLMN>,
}

impl RewardPool {
    /// Create an idle pool with the given epoch width.
    pub fn new(duration: u64) -> Result<Self, TreasuryError> {
        if duration == 0 {
            return Err(TreasuryError::ZeroDuration);
        }
        Ok(Self {
            duration,
            period_finish: 0,
            reward_rate: 0,
            last_update_time: 0,
            reward_per_token_stored: 0,
            total_virtual_balance: 0,
            streaming_balance: 0,
            participants: HashMap::new(),
            epoch_rewards: BTreeMap::new(),
        })
    }

    // -------------------------------------------------------------------------
    // Accumulator
    // -------------------------------------------------------------------------

    /// Project the reward-per-token accumulator forward to `now` without
    /// mutating anything. Streaming stops at `period_finish`; zero-balance
    /// windows do not advance the accumulator.
    fn reward_per_token(&self, now: Timestamp) -> Result<u128, TreasuryError> {
        if now < self.last_update_time {
            return Err(TreasuryError::CalculationOverflow(
                "accumulator time regression",
            ));
        }
        if self.total_virtual_balance == 0 {
            return Ok(self.reward_per_token_stored);
        }

        let applicable = now.min(self.period_finish);
        let elapsed = applicable.saturating_sub(self.last_update_time) as u128;
        let accrued = elapsed
            .checked_mul(self.reward_rate)
            .and_then(|streamed| streamed.checked_mul(REWARD_PRECISION))
            .ok_or(TreasuryError::CalculationOverflow("reward per token"))?
            / self.total_virtual_balance;

        self.reward_per_token_stored
            .checked_add(accrued)
            .ok_or(TreasuryError::CalculationOverflow("accumulator"))
    }

    /// Reward accrued to a participant under an already-projected
    /// accumulator value.
    fn settled_accrued(
        &self,
        state: &ParticipantState,
        reward_per_token: u128,
    ) -> Result<MicroLMN, TreasuryError> {
        let delta = reward_per_token
            .checked_sub(state.reward_per_token_paid)
            .ok_or(TreasuryError::CalculationOverflow("checkpoint regression"))?;
        let pending = delta
            .checked_mul(state.virtual_balance)
            .ok_or(TreasuryError::CalculationOverflow("pending reward"))?
            / REWARD_PRECISION;
        state
            .accrued
            .checked_add(pending)
            .ok_or(TreasuryError::CalculationOverflow("accrued reward"))
    }

    // -------------------------------------------------------------------------
    // Mutating operations
    // -------------------------------------------------------------------------

    /// Queue a new reward deposit and restart the streaming period at `now`.
    ///
    /// The unstreamed remainder of an active period rolls into the new rate.
    /// Rejects the deposit when the implied payout over one period would
    /// exceed queued-minus-claimed funding (precondition, not a clamp).
    pub fn queue_new_rewards(
        &mut self,
        amount: MicroLMN,
        now: Timestamp,
    ) -> Result<(), TreasuryError> {
        let reward_per_token = self.reward_per_token(now)?;

        let leftover = if now < self.period_finish {
            ((self.period_finish - now) as u128)
                .checked_mul(self.reward_rate)
                .ok_or(TreasuryError::CalculationOverflow("leftover reward"))?
        } else {
            0
        };
        let new_rate = amount
            .checked_add(leftover)
            .ok_or(TreasuryError::CalculationOverflow("queued reward"))?
            / self.duration as u128;

        let funded = self
            .streaming_balance
            .checked_add(amount)
            .ok_or(TreasuryError::CalculationOverflow("streaming balance"))?;
        let required = new_rate
            .checked_mul(self.duration as u128)
            .ok_or(TreasuryError::CalculationOverflow("required funding"))?;
        if required > funded {
            return Err(TreasuryError::RewardRateOverflow { required, funded });
        }

        let period_finish = now
            .checked_add(self.duration)
            .ok_or(TreasuryError::CalculationOverflow("period finish"))?;
        let epoch = epoch_index(now, self.duration);
        let bucket = self
            .epoch_rewards
            .get(&epoch)
            .copied()
            .unwrap_or(0)
            .checked_add(amount)
            .ok_or(TreasuryError::CalculationOverflow("epoch bucket"))?;

        // Commit
        self.reward_per_token_stored = reward_per_token;
        self.streaming_balance = funded;
        self.reward_rate = new_rate;
        self.period_finish = period_finish;
        self.last_update_time = now;
        self.epoch_rewards.insert(epoch, bucket);

        info!(
            target: "treasury",
            amount,
            rate = self.reward_rate,
            period_finish,
            epoch,
            "Reward queued into streaming pool"
        );
        Ok(())
    }

    /// Record a participant's new virtual balance, settling accruals up to
    /// `now` first.
    ///
    /// The collaborator must call this on every deposit, withdraw, or
    /// transfer that changes a participant's weight; the pool never
    /// observes balance changes on its own.
    pub fn report_balance_change(
        &mut self,
        participant: ParticipantId,
        new_balance: MicroLMN,
        now: Timestamp,
    ) -> Result<(), TreasuryError> {
        let reward_per_token = self.reward_per_token(now)?;
        let applicable = now.min(self.period_finish);

        let state = self
            .participants
            .get(&participant)
            .cloned()
            .unwrap_or_default();
        let accrued = self.settled_accrued(&state, reward_per_token)?;

        let new_total = self
            .total_virtual_balance
            .checked_sub(state.virtual_balance)
            .and_then(|t| t.checked_add(new_balance))
            .ok_or(TreasuryError::CalculationOverflow("total virtual balance"))?;

        // Commit
        self.reward_per_token_stored = reward_per_token;
        self.last_update_time = applicable;
        self.total_virtual_balance = new_total;
        self.participants.insert(
            participant,
            ParticipantState {
                virtual_balance: new_balance,
                reward_per_token_paid: reward_per_token,
                accrued,
            },
        );

        debug!(
            target: "treasury",
            participant = ?participant,
            new_balance,
            total = new_total,
            "Virtual balance reported"
        );
        Ok(())
    }

    /// Settle a participant and pay out everything accrued so far.
    /// Returns the claimable amount; the collaborator performs the
    /// actual transfer.
    pub fn claim(
        &mut self,
        participant: ParticipantId,
        now: Timestamp,
    ) -> Result<MicroLMN, TreasuryError> {
        let reward_per_token = self.reward_per_token(now)?;
        let applicable = now.min(self.period_finish);

        let state = self
            .participants
            .get(&participant)
            .cloned()
            .unwrap_or_default();
        let payout = self.settled_accrued(&state, reward_per_token)?;
        let streaming_balance = self
            .streaming_balance
            .checked_sub(payout)
            .ok_or(TreasuryError::CalculationOverflow("streaming balance"))?;

        // Commit
        self.reward_per_token_stored = reward_per_token;
        self.last_update_time = applicable;
        self.streaming_balance = streaming_balance;
        self.participants.insert(
            participant,
            ParticipantState {
                virtual_balance: state.virtual_balance,
                reward_per_token_paid: reward_per_token,
                accrued: 0,
            },
        );

        if payout > 0 {
            info!(
                target: "treasury",
                participant = ?participant,
                payout,
                "Reward claimed"
            );
        }
        Ok(payout)
    }

    // -------------------------------------------------------------------------
    // Read-only surface
    // -------------------------------------------------------------------------

    /// What `claim` would return at `now`, without mutating anything.
    pub fn pending_reward(
        &self,
        participant: &ParticipantId,
        now: Timestamp,
    ) -> Result<MicroLMN, TreasuryError> {
        let reward_per_token = self.reward_per_token(now)?;
        let state = self
            .participants
            .get(participant)
            .cloned()
            .unwrap_or_default();
        self.settled_accrued(&state, reward_per_token)
    }

    /// Total queued into a given epoch bucket
    pub fn epoch_reward(&self, epoch: EpochIndex) -> MicroLMN {
        self.epoch_rewards.get(&epoch).copied().unwrap_or(0)
    }

    /// Full epoch audit ledger, ordered by epoch index
    pub fn epoch_ledger(&self) -> &BTreeMap<EpochIndex, MicroLMN> {
        &self.epoch_rewards
    }

    /// Participant checkpoint, if one has ever been reported
    pub fn participant(&self, participant: &ParticipantId) -> Option<&ParticipantState> {
        self.participants.get(participant)
    }

    pub fn duration(&self) -> u64 {
        self.duration
    }

    pub fn period_finish(&self) -> Timestamp {
        self.period_finish
    }

    pub fn reward_rate(&self) -> MicroLMN {
        self.reward_rate
    }

    pub fn total_virtual_balance(&self) -> MicroLMN {
        self.total_virtual_balance
    }

    /// Queued minus claimed funding ledger
    pub fn streaming_balance(&self) -> MicroLMN {
        self.streaming_balance
    }

    /// Whether a streaming period is active at `now`
    pub fn is_streaming(&self, now: Timestamp) -> bool {
        now < self.period_finish
    }

    /// Serializable summary for persistence and reporting
    pub fn snapshot(&self) -> PoolSnapshot {
        PoolSnapshot {
            duration: self.duration,
            period_finish: self.period_finish,
            reward_rate: self.reward_rate,
            last_update_time: self.last_update_time,
            reward_per_token_stored: self.reward_per_token_stored,
            total_virtual_balance: self.total_virtual_balance,
            streaming_balance: self.streaming_balance,
            participant_count: self.participants.len(),
            total_queued: self.epoch_rewards.values().sum(),
        }
    }
}
