//! SQLite-backed [`Store`].

use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Params, params};
use tracing::{debug, info, instrument};

use crate::core::types::{
    ArtId, ArtSummary, ArtistId, ArtistSummary, CommentId, CommentScope, CommentSummary, NewArt,
    NewArtist, NewThread, ThreadId, ThreadOrder, ThreadSummary, UserId, UserIdentity,
};
use crate::io::store::Store;

const SCHEMA: &str = include_str!("../../schema/board.sql");

const THREAD_COLUMNS: &str = "SELECT T.thread_id, T.title, T.upvotes FROM Thread AS T";

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the board database at `path` and ensure the schema.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("open database {}", path.display()))?;
        info!(path = %path.display(), "opened board database");
        Self::with_connection(conn)
    }

    /// Fresh private database, used by tests and demos.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("open in-memory database")?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")
            .context("enable foreign keys")?;
        conn.execute_batch(SCHEMA).context("create board schema")?;
        Ok(Self { conn })
    }

    /// Post a comment. The client never writes comments itself; fixtures and
    /// imports do.
    pub fn insert_comment(
        &mut self,
        thread: ThreadId,
        poster: UserId,
        text: &str,
        upvotes: i64,
    ) -> Result<CommentId> {
        self.conn
            .execute(
                "INSERT INTO Comment (text, upvotes, thread_id, poster_id) VALUES (?1, ?2, ?3, ?4)",
                params![text, upvotes, thread.0, poster.0],
            )
            .context("insert comment")?;
        Ok(CommentId(self.conn.last_insert_rowid()))
    }

    fn query_threads<P: Params>(&self, sql: &str, params: P) -> Result<Vec<ThreadSummary>> {
        let mut stmt = self.conn.prepare(sql).context("prepare thread query")?;
        let rows = stmt
            .query_map(params, |row| {
                Ok(ThreadSummary {
                    id: ThreadId(row.get(0)?),
                    title: row.get(1)?,
                    upvotes: row.get(2)?,
                })
            })
            .context("run thread query")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("read thread rows")?;
        Ok(rows)
    }

    fn query_optional_text(&self, sql: &str, id: i64) -> Result<Option<String>> {
        self.conn
            .query_row(sql, params![id], |row| row.get(0))
            .optional()
            .context("run lookup query")
    }
}

fn date_text(date: Option<NaiveDate>) -> Option<String> {
    date.map(|date| date.format("%Y-%m-%d").to_string())
}

impl Store for SqliteStore {
    fn lookup_user(&mut self, name: &str) -> Result<Option<UserIdentity>> {
        self.conn
            .query_row(
                "SELECT U.uid, U.name FROM User AS U WHERE U.name = ?1 LIMIT 1",
                params![name],
                |row| {
                    Ok(UserIdentity {
                        id: UserId(row.get(0)?),
                        name: row.get(1)?,
                    })
                },
            )
            .optional()
            .with_context(|| format!("look up user '{}'", name))
    }

    #[instrument(skip(self))]
    fn create_user(&mut self, name: &str) -> Result<UserId> {
        self.conn
            .execute("INSERT INTO User (name) VALUES (?1)", params![name])
            .with_context(|| format!("insert user '{}'", name))?;
        let id = UserId(self.conn.last_insert_rowid());
        debug!(%id, "user created");
        Ok(id)
    }

    fn list_threads(&mut self, order: &ThreadOrder) -> Result<Vec<ThreadSummary>> {
        debug!(?order, "listing threads");
        match order {
            ThreadOrder::TopVotes => self.query_threads(
                &format!("{THREAD_COLUMNS} ORDER BY T.upvotes DESC, T.thread_id"),
                [],
            ),
            ThreadOrder::Newest => self.query_threads(
                &format!(
                    "{THREAD_COLUMNS} JOIN Art ON T.art_id_topic = Art.art_id \
                     ORDER BY Art.date DESC, T.thread_id"
                ),
                [],
            ),
            ThreadOrder::ByArtist(name) => self.query_threads(
                &format!(
                    "{THREAD_COLUMNS} JOIN Art ON T.art_id_topic = Art.art_id \
                     JOIN Artist AS A ON Art.artist_id = A.artist_id \
                     WHERE A.name = ?1 ORDER BY T.thread_id"
                ),
                params![name],
            ),
            ThreadOrder::ByCreator(user) => self.query_threads(
                &format!(
                    "{THREAD_COLUMNS} WHERE T.thread_creator_id = ?1 \
                     ORDER BY T.upvotes DESC, T.thread_id"
                ),
                params![user.0],
            ),
        }
    }

    fn get_thread(&mut self, id: ThreadId) -> Result<Option<String>> {
        self.query_optional_text("SELECT T.title FROM Thread AS T WHERE T.thread_id = ?1", id.0)
    }

    #[instrument(skip(self))]
    fn adjust_thread_votes(&mut self, id: ThreadId, delta: i64) -> Result<i64> {
        let tx = self.conn.transaction().context("begin vote update")?;
        let changed = tx
            .execute(
                "UPDATE Thread SET upvotes = upvotes + ?1 WHERE thread_id = ?2",
                params![delta, id.0],
            )
            .context("update thread votes")?;
        if changed == 0 {
            bail!("thread {} not found", id);
        }
        let upvotes: i64 = tx
            .query_row(
                "SELECT upvotes FROM Thread WHERE thread_id = ?1",
                params![id.0],
                |row| row.get(0),
            )
            .context("read thread votes")?;
        tx.commit().context("commit vote update")?;
        debug!(upvotes, "thread votes updated");
        Ok(upvotes)
    }

    fn list_artists(&mut self) -> Result<Vec<ArtistSummary>> {
        let mut stmt = self
            .conn
            .prepare("SELECT A.artist_id, A.name FROM Artist AS A ORDER BY A.artist_id")
            .context("prepare artist query")?;
        let rows = stmt
            .query_map([], |row| {
                Ok(ArtistSummary {
                    id: ArtistId(row.get(0)?),
                    name: row.get(1)?,
                })
            })
            .context("run artist query")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("read artist rows")?;
        Ok(rows)
    }

    #[instrument(skip_all, fields(name = %artist.name))]
    fn insert_artist(&mut self, artist: &NewArtist) -> Result<ArtistId> {
        self.conn
            .execute(
                "INSERT INTO Artist (name, birth_date, death_date, portrait_url) \
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    artist.name,
                    date_text(Some(artist.birth_date)),
                    date_text(artist.death_date),
                    artist.portrait_url
                ],
            )
            .context("insert artist")?;
        Ok(ArtistId(self.conn.last_insert_rowid()))
    }

    fn list_art(&mut self) -> Result<Vec<ArtSummary>> {
        let mut stmt = self
            .conn
            .prepare("SELECT A.art_id, A.title FROM Art AS A ORDER BY A.art_id")
            .context("prepare art query")?;
        let rows = stmt
            .query_map([], |row| {
                Ok(ArtSummary {
                    id: ArtId(row.get(0)?),
                    title: row.get(1)?,
                })
            })
            .context("run art query")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("read art rows")?;
        Ok(rows)
    }

    #[instrument(skip_all, fields(title = %art.title, artist = %art.artist_id))]
    fn insert_art(&mut self, art: &NewArt) -> Result<ArtId> {
        self.conn
            .execute(
                "INSERT INTO Art (title, date, img_url, artist_id) VALUES (?1, ?2, ?3, ?4)",
                params![
                    art.title,
                    date_text(art.created),
                    art.img_url,
                    art.artist_id.0
                ],
            )
            .context("insert art")?;
        Ok(ArtId(self.conn.last_insert_rowid()))
    }

    #[instrument(skip_all, fields(title = %thread.title, art = %thread.art_id))]
    fn insert_thread(&mut self, thread: &NewThread) -> Result<ThreadId> {
        self.conn
            .execute(
                "INSERT INTO Thread (title, upvotes, art_id_topic, thread_creator_id) \
                 VALUES (?1, 0, ?2, ?3)",
                params![thread.title, thread.art_id.0, thread.creator.0],
            )
            .context("insert thread")?;
        Ok(ThreadId(self.conn.last_insert_rowid()))
    }

    fn list_comments(&mut self, scope: CommentScope) -> Result<Vec<CommentSummary>> {
        let (filter, id) = match scope {
            CommentScope::Thread(thread) => ("C.thread_id", thread.0),
            CommentScope::Poster(user) => ("C.poster_id", user.0),
        };
        let sql = format!(
            "SELECT C.comment_id, C.text, C.upvotes FROM Comment AS C \
             WHERE {filter} = ?1 ORDER BY C.upvotes DESC, C.comment_id"
        );
        let mut stmt = self.conn.prepare(&sql).context("prepare comment query")?;
        let rows = stmt
            .query_map(params![id], |row| {
                Ok(CommentSummary {
                    id: CommentId(row.get(0)?),
                    text: row.get(1)?,
                    upvotes: row.get(2)?,
                })
            })
            .context("run comment query")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("read comment rows")?;
        Ok(rows)
    }

    fn thread_art_title(&mut self, id: ThreadId) -> Result<Option<String>> {
        self.query_optional_text(
            "SELECT A.title FROM Thread AS T JOIN Art AS A ON T.art_id_topic = A.art_id \
             WHERE T.thread_id = ?1",
            id.0,
        )
    }

    fn thread_artist_name(&mut self, id: ThreadId) -> Result<Option<String>> {
        self.query_optional_text(
            "SELECT A.name FROM Thread AS T JOIN Art ON T.art_id_topic = Art.art_id \
             JOIN Artist AS A ON A.artist_id = Art.artist_id WHERE T.thread_id = ?1",
            id.0,
        )
    }

    fn flush(&mut self) -> Result<()> {
        if !self.conn.is_autocommit() {
            self.conn
                .execute_batch("COMMIT")
                .context("commit pending transaction")?;
        }
        debug!("store flushed");
        Ok(())
    }
}
