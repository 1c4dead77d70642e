use lumen_types::MicroLMN;
use thiserror::Error;

/// Errors that can occur while computing emissions and fee apportionment.
#[derive(Debug, Error)]
pub enum EconomicsError {
    #[error("invalid economics parameter: {0}")]
    InvalidParameter(&'static str),

    #[error("division by zero while computing {0}")]
    DivisionByZero(&'static str),

    #[error("total supply {total_supply} is below the genesis mint {initial_mint}")]
    SupplyBelowGenesis {
        total_supply: MicroLMN,
        initial_mint: MicroLMN,
    },

    #[error("arithmetic overflow while performing economics calculation: {0}")]
    CalculationOverflow(&'static str),
}
