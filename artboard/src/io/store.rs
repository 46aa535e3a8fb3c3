//! Store abstraction for board data.
//!
//! The [`Store`] trait is the collaborator boundary: actions call it, the
//! navigator never does. Every method may fail; callers propagate the error.
//! Mutations are committed before the method returns.

use anyhow::Result;

use crate::core::types::{
    ArtId, ArtSummary, ArtistId, ArtistSummary, CommentScope, CommentSummary, NewArt, NewArtist,
    NewThread, ThreadId, ThreadOrder, ThreadSummary, UserId, UserIdentity,
};

pub trait Store {
    /// Find a user by exact name.
    fn lookup_user(&mut self, name: &str) -> Result<Option<UserIdentity>>;

    fn create_user(&mut self, name: &str) -> Result<UserId>;

    fn list_threads(&mut self, order: &ThreadOrder) -> Result<Vec<ThreadSummary>>;

    /// Title of the thread, if it exists.
    fn get_thread(&mut self, id: ThreadId) -> Result<Option<String>>;

    /// Add `delta` to the thread's upvotes and return the new count.
    fn adjust_thread_votes(&mut self, id: ThreadId, delta: i64) -> Result<i64>;

    fn list_artists(&mut self) -> Result<Vec<ArtistSummary>>;

    fn insert_artist(&mut self, artist: &NewArtist) -> Result<ArtistId>;

    fn list_art(&mut self) -> Result<Vec<ArtSummary>>;

    fn insert_art(&mut self, art: &NewArt) -> Result<ArtId>;

    fn insert_thread(&mut self, thread: &NewThread) -> Result<ThreadId>;

    fn list_comments(&mut self, scope: CommentScope) -> Result<Vec<CommentSummary>>;

    /// Title of the art piece a thread discusses.
    fn thread_art_title(&mut self, id: ThreadId) -> Result<Option<String>>;

    /// Name of the artist behind the art piece a thread discusses.
    fn thread_artist_name(&mut self, id: ThreadId) -> Result<Option<String>>;

    /// Commit anything still pending. Called once at shutdown.
    fn flush(&mut self) -> Result<()>;
}
