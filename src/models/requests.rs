use serde::{Deserialize, Serialize};

use crate::{core::PEG_COUNT, error::GameError};

/// Raw path parameters of a move request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveParams {
    /// Source peg as written in the URL
    pub from: String,
    /// Destination peg as written in the URL
    pub to: String,
}

/// Validated move request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    pub from: usize,
    pub to: usize,
}

impl MoveRequest {
    /// Validate both peg parameters
    ///
    /// # Arguments
    ///
    /// * `params` - Raw path parameters
    ///
    /// # Returns
    ///
    /// The parsed move, or an error naming the first bad parameter
    pub fn new(params: MoveParams) -> Result<Self, GameError> {
        Ok(Self {
            from: Self::validate_peg("from", &params.from)?,
            to: Self::validate_peg("to", &params.to)?,
        })
    }

    /// Parse a peg index
    ///
    /// # Validation Rules
    ///
    /// - Digits only (no sign, no whitespace)
    /// - Value must be 0, 1 or 2; leading zeros are allowed
    pub fn validate_peg(name: &'static str, raw: &str) -> Result<usize, GameError> {
        let invalid = || GameError::InvalidPeg {
            name,
            value: raw.to_string(),
        };

        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        // Digit strings too long for usize are out of range anyway
        match raw.parse::<usize>() {
            Ok(peg) if peg < PEG_COUNT => Ok(peg),
            _ => Err(invalid()),
        }
    }
}
