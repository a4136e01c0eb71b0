//! Error types for battle operations
//!
//! This module provides no_std compatible error types using enums
//! instead of String-based errors, so they can be SCALE encoded.

use core::fmt;

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;

#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

/// Errors raised by the combat engine and its helpers
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(tag = "type", rename_all = "camelCase"))]
pub enum BattleError {
    /// An integer draw was requested with a bound that is not a positive integer
    InvalidArgument { max_exclusive: u64 },
    /// A stored battle record could not be decoded
    Decode,
}

impl fmt::Display for BattleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleError::InvalidArgument { max_exclusive } => write!(
                f,
                "maxExclusive must be a positive integer (got {})",
                max_exclusive
            ),
            BattleError::Decode => write!(f, "battle record is not valid SCALE data"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BattleError {}

/// Result type alias for battle operations
pub type BattleResult<T> = Result<T, BattleError>;
