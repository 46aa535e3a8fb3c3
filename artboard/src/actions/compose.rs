//! Thread creation, including the art piece and artist it may need.
//!
//! Each insert is committed on its own: abandoning the flow half-way (closed
//! input, store failure) leaves any artist or art piece already created.

use anyhow::Result;
use tracing::{debug, info};

use super::ActionContext;
use crate::core::path::MenuPath;
use crate::core::types::{ArtId, ArtistId, NewArt, NewArtist, NewThread};
use crate::io::console::Console;
use crate::io::screen::Screen;
use crate::io::store::Store;

pub fn make_thread<S: Store, C: Console>(ctx: &mut ActionContext<'_, S, C>) -> Result<MenuPath> {
    ctx.header("Create Thread")?;
    let creator = ctx.session.require_identity()?.id;
    let title = ctx.screen.ask("Thread Title: ")?;

    let art_id = if ctx.screen.confirm("Is this a new art piece? (Y/N): ")? {
        insert_new_art(ctx)?
    } else {
        let pieces = ctx.store.list_art()?;
        let offered = pieces.into_iter().map(|art| (art.id, art.title));
        match pick_existing(ctx.screen, "Is this the art piece?", offered)? {
            Some(id) => id,
            None => {
                ctx.screen.notify("I guess it's a new art piece... ")?;
                insert_new_art(ctx)?
            }
        }
    };

    let thread = ctx.store.insert_thread(&NewThread {
        title,
        art_id,
        creator,
    })?;
    info!(%thread, %art_id, "thread created");
    ctx.screen.notify("Thread Created!")?;
    Ok(MenuPath::logged_in())
}

/// Collect a new art piece (and, if needed, its artist) and insert it.
fn insert_new_art<S: Store, C: Console>(ctx: &mut ActionContext<'_, S, C>) -> Result<ArtId> {
    let title = ctx.screen.ask("Art Piece Title: ")?;
    let created = ctx
        .screen
        .ask_optional_date("When was this piece created? (YYYY-MM-DD or NULL): ")?;
    let img_url = ctx.screen.ask("image url: ")?;

    let artist_id = if ctx.screen.confirm("Is this a new artist? (Y/N): ")? {
        insert_new_artist(ctx)?
    } else {
        let artists = ctx.store.list_artists()?;
        let offered = artists.into_iter().map(|artist| (artist.id, artist.name));
        match pick_existing(ctx.screen, "Is this the artist?", offered)? {
            Some(id) => id,
            None => {
                ctx.screen.notify("I guess it's a new artist... ")?;
                insert_new_artist(ctx)?
            }
        }
    };

    ctx.store.insert_art(&NewArt {
        title,
        created,
        img_url,
        artist_id,
    })
}

fn insert_new_artist<S: Store, C: Console>(
    ctx: &mut ActionContext<'_, S, C>,
) -> Result<ArtistId> {
    let name = ctx.screen.ask("Artist Name: ")?;
    let birth_date = ctx.screen.ask_date("artist birth date? (YYYY-MM-DD): ")?;
    let death_date = ctx
        .screen
        .ask_optional_date("artist death date? (YYYY-MM-DD or NULL alive): ")?;
    let portrait_url = ctx.screen.ask("artist portrait url: ")?;

    ctx.store.insert_artist(&NewArtist {
        name,
        birth_date,
        death_date,
        portrait_url,
    })
}

/// Offer each existing record in turn until one is accepted.
fn pick_existing<C: Console, T: Copy + std::fmt::Display>(
    screen: &mut Screen<C>,
    question: &str,
    offered: impl Iterator<Item = (T, String)>,
) -> Result<Option<T>> {
    for (id, label) in offered {
        if screen.confirm(&format!("{} {} (Y/N):", question, label))? {
            debug!(%id, "existing record picked");
            return Ok(Some(id));
        }
    }
    Ok(None)
}
