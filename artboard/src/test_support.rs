//! Test-only helpers: scripted console, call-recording store and seeded boards.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::core::types::{
    ArtId, ArtSummary, ArtistId, ArtistSummary, CommentScope, CommentSummary, NewArt, NewArtist,
    NewThread, ThreadId, ThreadOrder, ThreadSummary, UserId, UserIdentity,
};
use crate::driver::Driver;
use crate::io::config::DisplayConfig;
use crate::io::console::Console;
use crate::io::screen::Screen;
use crate::io::sqlite::SqliteStore;
use crate::io::store::Store;

pub const ALICE: &str = "alice";
pub const BOB: &str = "bob";
pub const MONET: &str = "Claude Monet";
pub const KAHLO: &str = "Frida Kahlo";
pub const WATER_LILIES: &str = "Water Lilies";
pub const TWO_FRIDAS: &str = "The Two Fridas";
/// "Lilies at dusk": Water Lilies, started by alice, 5 upvotes.
pub const LILIES_THREAD: ThreadId = ThreadId(1);
/// "Double portraits": The Two Fridas, started by bob, 9 upvotes.
pub const PORTRAITS_THREAD: ThreadId = ThreadId(2);

/// Console that replays queued input lines and records all output.
///
/// Once the queue is empty, reads report end of input.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    output: Vec<String>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            output: Vec::new(),
            transcript: Vec::new(),
        }
    }

    /// Lines written with `write_line`, in order.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Output lines and answered prompts interleaved, newline-joined.
    pub fn transcript(&self) -> String {
        self.transcript.join("\n")
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Number of output lines equal to `line`.
    pub fn count_lines(&self, line: &str) -> usize {
        self.output.iter().filter(|out| out.as_str() == line).count()
    }
}

impl Console for ScriptedConsole {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.output.push(line.to_string());
        self.transcript.push(line.to_string());
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        let answer = self.inputs.pop_front();
        match &answer {
            Some(line) => self.transcript.push(format!("{}{}", prompt, line)),
            None => self.transcript.push(format!("{}<end of input>", prompt)),
        }
        Ok(answer)
    }
}

/// Display settings that never wait for Enter, keeping scripts short.
pub fn quiet_display() -> DisplayConfig {
    DisplayConfig {
        pause_on_notice: false,
        ..DisplayConfig::default()
    }
}

/// Store wrapper that records the name of every collaborator call.
pub struct RecordingStore<S> {
    inner: S,
    calls: Vec<&'static str>,
}

impl<S: Store> RecordingStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            calls: Vec::new(),
        }
    }

    pub fn calls(&self) -> &[&'static str] {
        &self.calls
    }

    pub fn count(&self, name: &str) -> usize {
        self.calls.iter().filter(|call| **call == name).count()
    }

    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    fn record(&mut self, name: &'static str) -> &mut S {
        self.calls.push(name);
        &mut self.inner
    }
}

impl<S: Store> Store for RecordingStore<S> {
    fn lookup_user(&mut self, name: &str) -> Result<Option<UserIdentity>> {
        self.record("lookup_user").lookup_user(name)
    }

    fn create_user(&mut self, name: &str) -> Result<UserId> {
        self.record("create_user").create_user(name)
    }

    fn list_threads(&mut self, order: &ThreadOrder) -> Result<Vec<ThreadSummary>> {
        self.record("list_threads").list_threads(order)
    }

    fn get_thread(&mut self, id: ThreadId) -> Result<Option<String>> {
        self.record("get_thread").get_thread(id)
    }

    fn adjust_thread_votes(&mut self, id: ThreadId, delta: i64) -> Result<i64> {
        self.record("adjust_thread_votes")
            .adjust_thread_votes(id, delta)
    }

    fn list_artists(&mut self) -> Result<Vec<ArtistSummary>> {
        self.record("list_artists").list_artists()
    }

    fn insert_artist(&mut self, artist: &NewArtist) -> Result<ArtistId> {
        self.record("insert_artist").insert_artist(artist)
    }

    fn list_art(&mut self) -> Result<Vec<ArtSummary>> {
        self.record("list_art").list_art()
    }

    fn insert_art(&mut self, art: &NewArt) -> Result<ArtId> {
        self.record("insert_art").insert_art(art)
    }

    fn insert_thread(&mut self, thread: &NewThread) -> Result<ThreadId> {
        self.record("insert_thread").insert_thread(thread)
    }

    fn list_comments(&mut self, scope: CommentScope) -> Result<Vec<CommentSummary>> {
        self.record("list_comments").list_comments(scope)
    }

    fn thread_art_title(&mut self, id: ThreadId) -> Result<Option<String>> {
        self.record("thread_art_title").thread_art_title(id)
    }

    fn thread_artist_name(&mut self, id: ThreadId) -> Result<Option<String>> {
        self.record("thread_artist_name").thread_artist_name(id)
    }

    fn flush(&mut self) -> Result<()> {
        self.record("flush").flush()
    }
}

/// In-memory board with two users, two artists, two art pieces, two threads
/// and three comments. Ids are deterministic (see the constants above).
pub fn seeded_store() -> Result<SqliteStore> {
    let mut store = SqliteStore::open_in_memory()?;
    seed(&mut store)?;
    Ok(store)
}

fn seed(store: &mut SqliteStore) -> Result<()> {
    let alice = store.create_user(ALICE)?;
    let bob = store.create_user(BOB)?;

    let monet = store.insert_artist(&NewArtist {
        name: MONET.to_string(),
        birth_date: date(1840, 11, 14)?,
        death_date: Some(date(1926, 12, 5)?),
        portrait_url: "https://example.org/monet.jpg".to_string(),
    })?;
    let kahlo = store.insert_artist(&NewArtist {
        name: KAHLO.to_string(),
        birth_date: date(1907, 7, 6)?,
        death_date: Some(date(1954, 7, 13)?),
        portrait_url: "https://example.org/kahlo.jpg".to_string(),
    })?;

    let lilies = store.insert_art(&NewArt {
        title: WATER_LILIES.to_string(),
        created: Some(date(1906, 1, 1)?),
        img_url: "https://example.org/lilies.jpg".to_string(),
        artist_id: monet,
    })?;
    let fridas = store.insert_art(&NewArt {
        title: TWO_FRIDAS.to_string(),
        created: Some(date(1939, 1, 1)?),
        img_url: "https://example.org/fridas.jpg".to_string(),
        artist_id: kahlo,
    })?;

    let lilies_thread = store.insert_thread(&NewThread {
        title: "Lilies at dusk".to_string(),
        art_id: lilies,
        creator: alice,
    })?;
    store.adjust_thread_votes(lilies_thread, 5)?;
    let portraits_thread = store.insert_thread(&NewThread {
        title: "Double portraits".to_string(),
        art_id: fridas,
        creator: bob,
    })?;
    store.adjust_thread_votes(portraits_thread, 9)?;

    store.insert_comment(lilies_thread, alice, "The light!", 7)?;
    store.insert_comment(lilies_thread, bob, "Too blue", 2)?;
    store.insert_comment(portraits_thread, alice, "Mirror image", 3)?;
    Ok(())
}

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .with_context(|| format!("invalid fixture date {year}-{month}-{day}"))
}

/// Driver over `store` fed by `inputs`, with pausing disabled.
pub fn scripted_driver<S: Store>(store: S, inputs: &[&str]) -> Result<Driver<S, ScriptedConsole>> {
    let screen = Screen::new(ScriptedConsole::new(inputs.iter().copied()), quiet_display());
    Driver::new(store, screen)
}

/// File-backed board database in a temporary directory.
pub struct TestDb {
    dir: tempfile::TempDir,
    path: PathBuf,
}

impl TestDb {
    /// Create the database file and seed it like [`seeded_store`].
    pub fn seeded() -> Result<Self> {
        let dir = tempfile::tempdir().context("create temp dir")?;
        let path = dir.path().join("board.db");
        let mut store = SqliteStore::open(&path)?;
        seed(&mut store)?;
        store.flush()?;
        Ok(Self { dir, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}
