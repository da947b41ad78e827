//! Crate error type.

/// Errors raised while building or booting the page controller.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("nav has {navs} items but there are {sections} sections")]
    NavMismatch { navs: usize, sections: usize },
    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("dom error: {0}")]
    Dom(String),
}
