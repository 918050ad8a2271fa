use cosmwasm_std::{from_json, Binary};
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum InstructionError {
    #[error("Malformed swap instruction: {0}")]
    Malformed(String),

    #[error("Swap instruction sells {found}, expected {expected}")]
    SellTokenMismatch { expected: String, found: String },
}

// Only the fields we check up front. Everything else stays opaque.
#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum InstructionHeader {
    TransformTokens { sell_token: String },
}

/// Partially decoded swap instruction.
///
/// `sell_token` is read out of the payload itself, so it cannot disagree with what the
/// exchange will actually be asked to sell. `payload` is forwarded untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct SwapInstruction {
    pub sell_token: String,
    pub payload: Binary,
}

impl SwapInstruction {
    pub fn decode(payload: Binary) -> Result<Self, InstructionError> {
        let header: InstructionHeader =
            from_json(&payload).map_err(|e| InstructionError::Malformed(e.to_string()))?;

        let sell_token = match header {
            InstructionHeader::TransformTokens { sell_token } => sell_token,
        };

        if sell_token.is_empty() {
            return Err(InstructionError::Malformed("empty sell token".to_string()));
        }

        Ok(SwapInstruction {
            sell_token,
            payload,
        })
    }

    /// Fails unless the instruction sells `expected`.
    pub fn ensure_sells(&self, expected: &str) -> Result<(), InstructionError> {
        if self.sell_token != expected {
            return Err(InstructionError::SellTokenMismatch {
                expected: expected.to_string(),
                found: self.sell_token.clone(),
            });
        }
        Ok(())
    }
}
