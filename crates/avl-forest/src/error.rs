use thiserror::Error;

/// Structural problem reported by [`crate::avl::assert_avl_tree`].
///
/// Keys are carried as their `Debug` text so the error stays independent of
/// the tree's key type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantError {
    #[error("height mismatch at {key}: stored {stored}, expected {expected}")]
    HeightMismatch {
        key: String,
        stored: u32,
        expected: u32,
    },
    #[error("AVL balance violated at {key}: bf={bf}")]
    BalanceViolated { key: String, bf: i32 },
    #[error("node order violated: {prev} before {next}")]
    OrderViolated { prev: String, next: String },
}
