//! Action registry: the side-effecting operations bound to menu nodes.
//!
//! Every action reads what it needs from the console or the session, talks to
//! the store, and returns the path the navigator should move to. Actions are
//! the only code allowed to change the [`Session`].

pub mod account;
pub mod browse;
pub mod compose;
pub mod profile;
pub mod thread;

use anyhow::Result;
use tracing::instrument;

use crate::core::listing::ListingRow;
use crate::core::menu::Action;
use crate::core::path::MenuPath;
use crate::core::session::Session;
use crate::io::console::Console;
use crate::io::screen::Screen;
use crate::io::store::Store;

/// Everything an action may touch, lent for one invocation.
pub struct ActionContext<'a, S, C> {
    pub session: &'a mut Session,
    pub store: &'a mut S,
    pub screen: &'a mut Screen<C>,
}

impl<S: Store, C: Console> ActionContext<'_, S, C> {
    /// Screen title line with the current login status.
    pub fn header(&mut self, title: &str) -> Result<()> {
        self.screen.header(title, self.session)
    }

    /// Print a listing table and pause.
    pub fn show_listing<R: Into<ListingRow>>(&mut self, rows: Vec<R>) -> Result<()> {
        self.screen
            .listing(rows.into_iter().map(Into::into).collect())?;
        self.screen.notify("")
    }
}

/// Run `action` and return the next path.
#[instrument(skip(ctx))]
pub fn invoke<S: Store, C: Console>(
    action: Action,
    ctx: &mut ActionContext<'_, S, C>,
) -> Result<MenuPath> {
    match action {
        Action::Login => account::login(ctx),
        Action::CreateAccount => account::create_account(ctx),
        Action::Logout => account::logout(ctx),
        Action::ShowTopThreads => browse::show_top_threads(ctx),
        Action::ShowThreadsWithArtist => browse::show_threads_with_artist(ctx),
        Action::ShowNewestThreads => browse::show_newest_threads(ctx),
        Action::MakeThread => compose::make_thread(ctx),
        Action::OpenThread => thread::open_thread(ctx),
        Action::ShowThreadArt => thread::show_thread_art(ctx),
        Action::ShowThreadArtist => thread::show_thread_artist(ctx),
        Action::ShowTopComments => thread::show_top_comments(ctx),
        Action::UpvoteThread => thread::upvote_thread(ctx),
        Action::DownvoteThread => thread::downvote_thread(ctx),
        Action::LeaveThread => thread::leave_thread(ctx),
        Action::ViewUser => profile::view_user(ctx),
        Action::ShowCommentsByUser => profile::show_comments_by_user(ctx),
        Action::ShowPostsByUser => profile::show_posts_by_user(ctx),
        Action::LeaveUser => profile::leave_user(ctx),
    }
}
