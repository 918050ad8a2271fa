pub mod aggregator;
pub mod instruction;
pub mod token;

pub use instruction::{InstructionError, SwapInstruction};
