//! The viewed-profile context.

use anyhow::Result;
use tracing::debug;

use super::ActionContext;
use crate::core::path::MenuPath;
use crate::core::types::{CommentScope, ThreadOrder};
use crate::io::console::Console;
use crate::io::store::Store;

pub fn view_user<S: Store, C: Console>(ctx: &mut ActionContext<'_, S, C>) -> Result<MenuPath> {
    ctx.header("User")?;
    let answer = ctx.screen.ask("Enter a user name: ")?;

    let Some(user) = ctx.store.lookup_user(answer.trim())? else {
        ctx.screen.say("there is no user with that name")?;
        return Ok(MenuPath::logged_in());
    };

    debug!(user = %user.name, "viewing profile");
    ctx.session.enter_profile(user.id, user.name)?;
    Ok(MenuPath::in_profile())
}

pub fn show_comments_by_user<S: Store, C: Console>(
    ctx: &mut ActionContext<'_, S, C>,
) -> Result<MenuPath> {
    let (user, name) = ctx.session.require_viewed_profile()?;
    let title = format!("Comments By {}", name);
    ctx.header(&title)?;
    let comments = ctx.store.list_comments(CommentScope::Poster(user))?;
    ctx.show_listing(comments)?;
    Ok(MenuPath::in_profile())
}

pub fn show_posts_by_user<S: Store, C: Console>(
    ctx: &mut ActionContext<'_, S, C>,
) -> Result<MenuPath> {
    let (user, name) = ctx.session.require_viewed_profile()?;
    let title = format!("Threads By {}", name);
    ctx.header(&title)?;
    let threads = ctx.store.list_threads(&ThreadOrder::ByCreator(user))?;
    ctx.show_listing(threads)?;
    Ok(MenuPath::in_profile())
}

pub fn leave_user<S: Store, C: Console>(ctx: &mut ActionContext<'_, S, C>) -> Result<MenuPath> {
    if let Some(left) = ctx.session.leave_profile() {
        debug!(?left, "left profile");
    }
    Ok(MenuPath::logged_in())
}
