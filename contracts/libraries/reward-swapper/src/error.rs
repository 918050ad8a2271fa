use thiserror::Error;
use valence_library_utils::error::LibraryError;
use valence_swap_utils::InstructionError;

/// Reasons a registry update, approval or swap is refused.
#[derive(Error, Debug, PartialEq)]
pub enum RewardSwapperError {
    #[error("Zero address")]
    ZeroAddress,

    #[error("Not a reward token: {0}")]
    NotRewardToken(String),

    #[error("Invalid instruction: {0}")]
    InvalidInstruction(#[from] InstructionError),

    #[error("Swap failed: {0}")]
    SwapFailed(String),

    #[error("Invalid target token: swap did not increase the {0} balance")]
    InvalidTargetToken(String),
}

impl From<RewardSwapperError> for LibraryError {
    fn from(err: RewardSwapperError) -> Self {
        LibraryError::ExecutionError(err.to_string())
    }
}
