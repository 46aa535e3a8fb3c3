//! The open-thread context: entering, inspecting, voting and leaving.

use anyhow::Result;
use tracing::{debug, info};

use super::ActionContext;
use crate::core::path::MenuPath;
use crate::core::types::{CommentScope, ThreadId};
use crate::io::console::Console;
use crate::io::store::Store;

pub fn open_thread<S: Store, C: Console>(ctx: &mut ActionContext<'_, S, C>) -> Result<MenuPath> {
    ctx.header("Open Thread")?;
    let answer = ctx.screen.ask("thread id: ")?;

    let found = match answer.trim().parse::<i64>() {
        Ok(raw) => {
            let id = ThreadId(raw);
            ctx.store.get_thread(id)?.map(|title| (id, title))
        }
        Err(_) => None,
    };
    let Some((id, title)) = found else {
        ctx.screen.notify("There is no thread with that id")?;
        return Ok(MenuPath::logged_in());
    };

    debug!(%id, title = %title, "entering thread");
    ctx.session.enter_thread(id, title)?;
    Ok(MenuPath::in_thread())
}

pub fn show_thread_art<S: Store, C: Console>(
    ctx: &mut ActionContext<'_, S, C>,
) -> Result<MenuPath> {
    ctx.header("Thread Art")?;
    let (thread, _) = ctx.session.require_open_thread()?;
    let title = ctx.store.thread_art_title(thread)?;
    ctx.screen.notify(
        title
            .as_deref()
            .unwrap_or("No art piece is recorded for this thread"),
    )?;
    Ok(MenuPath::in_thread())
}

pub fn show_thread_artist<S: Store, C: Console>(
    ctx: &mut ActionContext<'_, S, C>,
) -> Result<MenuPath> {
    ctx.header("Thread Artist")?;
    let (thread, _) = ctx.session.require_open_thread()?;
    let name = ctx.store.thread_artist_name(thread)?;
    ctx.screen.notify(
        name.as_deref()
            .unwrap_or("No artist is recorded for this thread"),
    )?;
    Ok(MenuPath::in_thread())
}

pub fn show_top_comments<S: Store, C: Console>(
    ctx: &mut ActionContext<'_, S, C>,
) -> Result<MenuPath> {
    ctx.header("Comments")?;
    let (thread, _) = ctx.session.require_open_thread()?;
    let comments = ctx.store.list_comments(CommentScope::Thread(thread))?;
    ctx.show_listing(comments)?;
    Ok(MenuPath::in_thread())
}

pub fn upvote_thread<S: Store, C: Console>(
    ctx: &mut ActionContext<'_, S, C>,
) -> Result<MenuPath> {
    update_votes(ctx, 1)?;
    Ok(MenuPath::in_thread())
}

pub fn downvote_thread<S: Store, C: Console>(
    ctx: &mut ActionContext<'_, S, C>,
) -> Result<MenuPath> {
    update_votes(ctx, -1)?;
    Ok(MenuPath::in_thread())
}

pub fn leave_thread<S: Store, C: Console>(
    ctx: &mut ActionContext<'_, S, C>,
) -> Result<MenuPath> {
    if let Some(left) = ctx.session.leave_thread() {
        debug!(?left, "left thread");
    }
    Ok(MenuPath::logged_in())
}

fn update_votes<S: Store, C: Console>(ctx: &mut ActionContext<'_, S, C>, delta: i64) -> Result<()> {
    ctx.header("Upvoting!")?;
    let (thread, _) = ctx.session.require_open_thread()?;
    let upvotes = ctx.store.adjust_thread_votes(thread, delta)?;
    info!(%thread, delta, upvotes, "thread votes changed");
    ctx.screen
        .notify(&format!("upvote count is now {}", upvotes))
}
