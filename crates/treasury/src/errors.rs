use lumen_economics::EconomicsError;
use lumen_types::MicroLMN;
use thiserror::Error;

/// Errors that can occur while queueing, streaming, or claiming rewards.
#[derive(Debug, Error)]
pub enum TreasuryError {
    #[error("reward rate requires {required} μLMN over the period but only {funded} is funded")]
    RewardRateOverflow {
        required: MicroLMN,
        funded: MicroLMN,
    },

    #[error("reward pool duration must be greater than zero")]
    ZeroDuration,

    #[error("a reward pool is already registered under this id")]
    DuplicatePool,

    #[error("no reward pool registered under this id")]
    UnknownPool,

    #[error("arithmetic overflow while performing treasury calculation: {0}")]
    CalculationOverflow(&'static str),

    #[error(transparent)]
    Economics(#[from] EconomicsError),
}
