/// Type alias for Result with anyhow::Error as the error type.
/// Used everywhere outside of the typed configuration errors in `shared::error`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
