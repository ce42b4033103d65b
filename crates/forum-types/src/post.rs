//! Forum content types as they appear on the wire.

use serde::{Deserialize, Serialize};

use crate::WalletAddress;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub id: String,
    pub author: WalletAddress,
    pub content: String,
}

/// A top-level post. `id`, `author` and `content` never change after
/// creation; vote counters only grow and replies are append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub author: WalletAddress,
    pub content: String,
    pub upvotes: u64,
    pub downvotes: u64,
    pub replies: Vec<Reply>,
}

impl Post {
    /// Fresh post with zero votes and no replies.
    pub fn new(id: String, author: WalletAddress, content: String) -> Self {
        Self {
            id,
            author,
            content,
            upvotes: 0,
            downvotes: 0,
            replies: Vec::new(),
        }
    }
}
