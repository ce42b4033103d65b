//! In-memory post store. Insertion order is display order.

use crate::Error;
use forum_types::{Post, Reply, WalletAddress};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Vote direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vote {
    Up,
    Down,
}

/// All posts, oldest first. Lookups are linear scans by id.
#[derive(Default)]
pub struct PostStore {
    posts: RwLock<Vec<Post>>,
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

impl PostStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read_posts(&self) -> RwLockReadGuard<'_, Vec<Post>> {
        self.posts.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_posts(&self) -> RwLockWriteGuard<'_, Vec<Post>> {
        self.posts.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Append a new post with zero votes and no replies.
    pub fn create_post(&self, author: &WalletAddress, content: String) -> Post {
        let post = Post::new(new_id(), author.clone(), content);
        self.write_posts().push(post.clone());
        post
    }

    /// Append a reply to `post_id`. The store is untouched on `PostNotFound`.
    pub fn add_reply(
        &self,
        post_id: &str,
        author: &WalletAddress,
        content: String,
    ) -> Result<Reply, Error> {
        let mut posts = self.write_posts();
        let post = posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or(Error::PostNotFound)?;
        let reply = Reply {
            id: new_id(),
            author: author.clone(),
            content,
        };
        post.replies.push(reply.clone());
        Ok(reply)
    }

    /// Increment one counter of `post_id` by exactly one and return the post.
    pub fn vote(&self, post_id: &str, vote: Vote) -> Result<Post, Error> {
        let mut posts = self.write_posts();
        let post = posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or(Error::PostNotFound)?;
        match vote {
            Vote::Up => post.upvotes = post.upvotes.saturating_add(1),
            Vote::Down => post.downvotes = post.downvotes.saturating_add(1),
        }
        Ok(post.clone())
    }

    pub fn get(&self, post_id: &str) -> Option<Post> {
        self.read_posts().iter().find(|p| p.id == post_id).cloned()
    }

    /// Snapshot of every post in insertion order.
    pub fn list(&self) -> Vec<Post> {
        self.read_posts().clone()
    }

    pub fn len(&self) -> usize {
        self.read_posts().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
