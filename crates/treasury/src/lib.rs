//! LUMEN Treasury Module
//!
//! Streams queued reward deposits to stake-weighted participants over
//! fixed-duration epochs using virtual-balance accounting. Custody of
//! funds stays with the collaborator; this module tracks entitlements.

pub mod errors;
pub mod pipeline;
pub mod registry;
pub mod reward_pool;

pub use errors::*;
pub use pipeline::*;
pub use registry::*;
pub use reward_pool::*;
