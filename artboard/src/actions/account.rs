//! Login, account creation and logout.

use anyhow::Result;
use tracing::info;

use super::ActionContext;
use crate::core::path::MenuPath;
use crate::core::types::UserIdentity;
use crate::io::console::Console;
use crate::io::store::Store;

pub fn login<S: Store, C: Console>(ctx: &mut ActionContext<'_, S, C>) -> Result<MenuPath> {
    ctx.header("Login")?;
    let answer = ctx.screen.ask("Enter Username: ")?;
    let username = answer.trim();

    match ctx.store.lookup_user(username)? {
        Some(identity) => {
            log_user_in(ctx, identity)?;
            Ok(MenuPath::logged_in())
        }
        None => {
            info!(username, "login for unknown user");
            ctx.screen
                .notify("That username is not registered, maybe create a new account?")?;
            Ok(MenuPath::logged_out())
        }
    }
}

pub fn create_account<S: Store, C: Console>(
    ctx: &mut ActionContext<'_, S, C>,
) -> Result<MenuPath> {
    ctx.header("Create Account")?;
    let answer = ctx.screen.ask("Enter Username: ")?;
    let username = answer.trim();

    if username.is_empty() {
        ctx.screen.notify("A username cannot be empty")?;
        return Ok(MenuPath::logged_out());
    }
    if ctx.store.lookup_user(username)?.is_some() {
        ctx.screen
            .notify("Sorry this username is taken, try logging in with this username")?;
        return Ok(MenuPath::logged_out());
    }

    let id = ctx.store.create_user(username)?;
    log_user_in(
        ctx,
        UserIdentity {
            id,
            name: username.to_string(),
        },
    )?;
    Ok(MenuPath::logged_in())
}

pub fn logout<S: Store, C: Console>(ctx: &mut ActionContext<'_, S, C>) -> Result<MenuPath> {
    ctx.screen.notify("Logging Out")?;
    if let Some(identity) = ctx.session.identity() {
        info!(user = %identity.name, "user logged out");
    }
    ctx.session.log_out();
    Ok(MenuPath::logged_out())
}

fn log_user_in<S: Store, C: Console>(
    ctx: &mut ActionContext<'_, S, C>,
    identity: UserIdentity,
) -> Result<()> {
    ctx.screen.notify(&format!("Welcome {}", identity.name))?;
    info!(user = %identity.name, id = %identity.id, "user logged in");
    ctx.session.log_in(identity);
    Ok(())
}
