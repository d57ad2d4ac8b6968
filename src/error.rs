use core::fmt::{Display, Formatter};

/// Failures reported by list mutations and hook registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// The allocator could not provide memory for a node.
    AllocFailed,
    /// The walk ran off the end of the chain before reaching `index`.
    OutOfBounds { index: usize },
    /// A registration was attempted without a function.
    MissingHook,
}

impl Display for ListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ListError::AllocFailed => write!(f, "node allocation failed"),
            ListError::OutOfBounds { index } => write!(f, "index {} is out of bounds", index),
            ListError::MissingHook => write!(f, "no hook function was supplied"),
        }
    }
}

impl core::error::Error for ListError {}
