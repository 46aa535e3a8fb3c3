//! Thread listings reachable from the logged-in menu.

use anyhow::Result;

use super::ActionContext;
use crate::core::path::MenuPath;
use crate::core::types::ThreadOrder;
use crate::io::console::Console;
use crate::io::store::Store;

pub fn show_top_threads<S: Store, C: Console>(
    ctx: &mut ActionContext<'_, S, C>,
) -> Result<MenuPath> {
    ctx.header("Top Threads")?;
    let threads = ctx.store.list_threads(&ThreadOrder::TopVotes)?;
    ctx.show_listing(threads)?;
    Ok(MenuPath::logged_in())
}

pub fn show_threads_with_artist<S: Store, C: Console>(
    ctx: &mut ActionContext<'_, S, C>,
) -> Result<MenuPath> {
    ctx.header("Find Threads With Artist")?;
    let artist = ctx.screen.ask("Which artist? : ")?;
    let threads = ctx
        .store
        .list_threads(&ThreadOrder::ByArtist(artist.trim().to_string()))?;
    if threads.is_empty() {
        ctx.screen
            .notify("Sorry there are no threads with that artist :(")?;
    } else {
        ctx.show_listing(threads)?;
    }
    Ok(MenuPath::logged_in())
}

pub fn show_newest_threads<S: Store, C: Console>(
    ctx: &mut ActionContext<'_, S, C>,
) -> Result<MenuPath> {
    ctx.header("Newest Art Thread")?;
    let threads = ctx.store.list_threads(&ThreadOrder::Newest)?;
    ctx.show_listing(threads)?;
    Ok(MenuPath::logged_in())
}
