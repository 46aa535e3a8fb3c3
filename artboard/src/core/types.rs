//! Shared domain types for the board core.
//!
//! These mirror the rows the store hands back and the records actions build
//! before inserting. They carry no behaviour beyond formatting.

use std::fmt;

use chrono::NaiveDate;

macro_rules! row_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

row_id!(UserId);
row_id!(ThreadId);
row_id!(ArtId);
row_id!(ArtistId);
row_id!(CommentId);

/// An authenticated (or viewed) board user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    pub id: UserId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadSummary {
    pub id: ThreadId,
    pub title: String,
    pub upvotes: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentSummary {
    pub id: CommentId,
    pub text: String,
    pub upvotes: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistSummary {
    pub id: ArtistId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtSummary {
    pub id: ArtId,
    pub title: String,
}

/// Which threads to list, and in what order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThreadOrder {
    /// All threads, most upvoted first.
    TopVotes,
    /// All threads, newest art piece first (undated art last).
    Newest,
    /// Threads whose art was made by the named artist.
    ByArtist(String),
    /// Threads started by a user, most upvoted first.
    ByCreator(UserId),
}

/// Which comments to list. Always most upvoted first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentScope {
    Thread(ThreadId),
    Poster(UserId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArtist {
    pub name: String,
    pub birth_date: NaiveDate,
    /// `None` while the artist is alive.
    pub death_date: Option<NaiveDate>,
    pub portrait_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArt {
    pub title: String,
    pub created: Option<NaiveDate>,
    pub img_url: String,
    pub artist_id: ArtistId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewThread {
    pub title: String,
    pub art_id: ArtId,
    pub creator: UserId,
}
