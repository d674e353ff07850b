//! Error macros for algokit

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::AlgoError::UsageError($msg.to_string()))
    };
}

/// Macro for rejecting a node identifier that is not registered
#[macro_export]
macro_rules! bail_unknown_node {
    ($node:expr) => {
        return Err($crate::error::AlgoError::unknown_node($node))
    };
}
