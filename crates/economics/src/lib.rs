//! LUMEN Economics Module
//!
//! Implements the incentive-accounting math for fee-driven emissions:
//! - Cliff-decaying emission curve with a hard supply cap
//! - Fee splitting into mint-eligible and incentive portions
//! - Minted-amount conversion into reward and treasury buckets
//!
//! All operations are total functions over validated configuration; every
//! division truncates toward zero and every remainder has a documented owner.

pub mod conversion;
pub mod emission;
pub mod errors;
pub mod splitter;
pub mod types;

pub use conversion::*;
pub use emission::*;
pub use errors::*;
pub use splitter::*;
pub use types::*;

/// Module version for API introspection
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
