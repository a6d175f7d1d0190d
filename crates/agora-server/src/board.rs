// File: src/board.rs
// Purpose: In-memory forum state, synchronized by the application layer

use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Clone)]
pub struct Post {
    pub author: String,
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct ForumThread {
    pub name: String,
    pub posts: Vec<Post>,
}

/// The shared thread list. The routing core holds no mutable state; the
/// mutual-exclusion discipline for application data lives here.
pub struct Board {
    threads: Mutex<Vec<ForumThread>>,
}

impl Board {
    pub fn new() -> Self {
        Self {
            threads: Mutex::new(Vec::new()),
        }
    }

    /// A board with a starter thread, so a fresh server has something to show.
    pub fn seeded() -> Self {
        let board = Self::new();
        board.create_thread("general");
        board.add_post(
            "general",
            Post {
                author: "agora".to_string(),
                body: "Welcome to the board.".to_string(),
            },
        );
        board
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ForumThread>> {
        // A poisoned lock still holds consistent data for this structure;
        // recover rather than take the whole server down.
        self.threads.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Snapshot of all threads, in creation order.
    pub fn threads(&self) -> Vec<ForumThread> {
        self.lock().clone()
    }

    /// Creates a thread. Returns false when the name is already taken.
    pub fn create_thread(&self, name: &str) -> bool {
        let mut threads = self.lock();
        if threads.iter().any(|t| t.name == name) {
            return false;
        }
        threads.push(ForumThread {
            name: name.to_string(),
            posts: Vec::new(),
        });
        true
    }

    /// Snapshot of one thread's posts. None when the thread does not exist.
    pub fn posts_of(&self, name: &str) -> Option<Vec<Post>> {
        self.lock()
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.posts.clone())
    }

    /// Appends a post. Returns false when the thread does not exist.
    pub fn add_post(&self, thread: &str, post: Post) -> bool {
        let mut threads = self.lock();
        match threads.iter_mut().find(|t| t.name == thread) {
            Some(t) => {
                t.posts.push(post);
                true
            }
            None => false,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_thread_rejects_duplicates() {
        let board = Board::new();
        assert!(board.create_thread("general"));
        assert!(!board.create_thread("general"));
        assert_eq!(board.threads().len(), 1);
    }

    #[test]
    fn test_add_post_to_missing_thread_fails() {
        let board = Board::new();
        let post = Post {
            author: "a".to_string(),
            body: "b".to_string(),
        };
        assert!(!board.add_post("nope", post));
    }

    #[test]
    fn test_posts_preserve_order() {
        let board = Board::new();
        board.create_thread("general");
        for body in ["first", "second"] {
            board.add_post(
                "general",
                Post {
                    author: "a".to_string(),
                    body: body.to_string(),
                },
            );
        }
        let posts = board.posts_of("general").unwrap();
        assert_eq!(posts[0].body, "first");
        assert_eq!(posts[1].body, "second");
    }

    #[test]
    fn test_seeded_board_has_welcome_post() {
        let board = Board::seeded();
        let posts = board.posts_of("general").unwrap();
        assert_eq!(posts.len(), 1);
    }
}
