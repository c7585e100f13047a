use crate::record::BlockKind;

/// Alias for `Result<T, BlockError>`.
pub type BlockResult<T> = Result<T, BlockError>;

/// Errors that can occur when transforming a block.
#[derive(Debug, thiserror::Error)]
pub enum BlockError {
    /// A rotation step outside `{0, 1, 2}` was requested.
    #[error("invalid rotation step: {0} (expected 0, 1 or 2)")]
    InvalidRotationStep(i64),

    /// The operation is not defined for blocks of this kind.
    #[error("unsupported block kind: {0}")]
    UnsupportedKind(BlockKind),

    /// The block name is too short or holds characters outside `[A-Za-z0-9]`.
    #[error("malformed block name: \"{0}\"")]
    MalformedName(String),

    /// The block declares a kind but carries no body for it.
    #[error("{0} block has no body")]
    MissingBody(BlockKind),

    /// A fixed-size grid does not have its fixed dimensions.
    #[error("{grid} grid must hold {expected} cells, found {found}")]
    GridShape {
        /// Which grid was malformed.
        grid: &'static str,
        /// The fixed cell count for this grid.
        expected: usize,
        /// The cell count actually present.
        found: usize,
    },

    /// The wire document could not be decoded or encoded.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
