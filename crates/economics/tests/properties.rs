//! Algebraic properties of the emission and splitting math

use lumen_economics::{
    compute_mint_amount, split_fee, split_minted, ConversionConfig, EmissionSchedule,
    IncentiveConfig,
};
use proptest::prelude::*;

fn test_schedule() -> EmissionSchedule {
    EmissionSchedule::new(1_000_000, 0, 10).expect("valid schedule")
}

proptest! {
    #[test]
    fn mint_never_exceeds_remaining_cap(
        total_supply in 0u128..2_000_000,
        input in 0u128..1_000_000_000,
    ) {
        let schedule = test_schedule();
        let minted = compute_mint_amount(total_supply, input, &schedule).unwrap();
        let remaining = schedule.max_supply_micro.saturating_sub(total_supply);
        prop_assert!(minted <= remaining);
    }

    #[test]
    fn mint_is_non_increasing_in_supply(
        supply in 0u128..1_000_000,
        delta in 0u128..1_000_000,
        input in 0u128..1_000_000,
    ) {
        let schedule = test_schedule();
        let lower = compute_mint_amount(supply, input, &schedule).unwrap();
        let higher = compute_mint_amount(supply + delta, input, &schedule).unwrap();
        prop_assert!(higher <= lower);
    }

    #[test]
    fn mint_is_zero_after_exhaustion(
        excess in 0u128..10_000_000,
        input in 0u128..1_000_000,
    ) {
        let schedule = test_schedule();
        let minted = compute_mint_amount(1_000_000 + excess, input, &schedule).unwrap();
        prop_assert_eq!(minted, 0);
    }

    #[test]
    fn fee_split_conserves_the_fee(
        fee in 0u128..(u64::MAX as u128),
        lock in 0u64..=10_000,
        staker in 0u64..=10_000,
    ) {
        prop_assume!(lock + staker > 0 && lock + staker <= 10_000);
        let config = IncentiveConfig::new(lock, staker, 10_000).unwrap();
        let split = split_fee(fee, &config).unwrap();
        prop_assert_eq!(split.lock_incentive + split.staker_incentive, fee);
    }

    #[test]
    fn minted_split_conserves_the_mint(
        minted in 0u128..(u64::MAX as u128),
        multiplier in 0u64..=10_000,
    ) {
        let config = ConversionConfig::new(multiplier, 10_000).unwrap();
        let split = split_minted(minted, &config).unwrap();
        prop_assert_eq!(split.reward_bucket + split.treasury_bucket, minted);
    }
}
