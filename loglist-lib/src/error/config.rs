//! Configuration errors

/// Invalid [`ListConfig`](crate::ListConfig) values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("load-more increment must be greater than zero")]
    ZeroIncrement,

    #[error("compact list must show at least one row")]
    ZeroCompactRows,
}
