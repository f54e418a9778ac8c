use thiserror::Error;

use crate::index::Index;

/// Errors raised while decoding or encoding a persisted move tree.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate node at {0:?}")]
    DuplicateIndex(Index),

    #[error("sentinel {0:?} has no node")]
    MissingSentinel(Index),

    #[error("synthesized sentinel {0:?} collides with an existing node")]
    SentinelCollision(Index),

    #[error("node {from:?} links to missing node {to:?}")]
    DanglingLink { from: Index, to: Index },

    #[error("node {child:?} names {parent:?} as parent but is not one of its continuations")]
    UnlinkedChild { parent: Index, child: Index },
}
