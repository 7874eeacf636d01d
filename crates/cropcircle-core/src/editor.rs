use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::EditorConfig;
use crate::error::{AvatarError, Result};
use crate::intake::{spawn_decode, ImageFile, SourceImage};
use crate::session::EditSession;
use crate::task::{InFlight, Pending};
use crate::viewport::PanResponse;

/// Result of completing a load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The decoded image replaced the current session.
    Loaded,
    /// A newer load was started meanwhile; this result was discarded.
    Superseded,
}

/// Entry point for the avatar editor: at most one session at a time.
///
/// Loading and exporting are one-shot background operations. Starting a new
/// load supersedes any earlier one still decoding; only one export may be in
/// flight at a time. An export stays in flight until its [`Pending`] is
/// completed or dropped.
pub struct AvatarEditor {
    config: EditorConfig,
    session: Option<EditSession>,
    load_generation: u64,
    export_generation: u64,
    exporting: Arc<AtomicBool>,
}

impl AvatarEditor {
    pub fn new(config: EditorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            session: None,
            load_generation: 0,
            export_generation: 0,
            exporting: Arc::new(AtomicBool::new(false)),
        })
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut EditSession> {
        self.session.as_mut()
    }

    /// Validate `file` and start decoding it in the background.
    ///
    /// Type and size problems are reported here and leave the editor untouched.
    pub fn begin_load(&mut self, file: ImageFile) -> Result<Pending<SourceImage>> {
        let generation = self.load_generation + 1;
        let pending = spawn_decode(file, &self.config.intake, generation)?;
        self.load_generation = generation;
        Ok(pending)
    }

    /// Wait for a decode started by [`begin_load`](Self::begin_load) and install it.
    pub fn complete_load(&mut self, pending: Pending<SourceImage>) -> Result<LoadOutcome> {
        let generation = pending.generation();
        let result = pending.wait();
        self.install(generation, result)
    }

    /// Non-blocking variant of [`complete_load`](Self::complete_load).
    ///
    /// Returns `Ok(None)` while the decode is still running.
    pub fn poll_load(&mut self, pending: &Pending<SourceImage>) -> Result<Option<LoadOutcome>> {
        match pending.try_take() {
            Some(result) => self.install(pending.generation(), result).map(Some),
            None => Ok(None),
        }
    }

    /// Validate, decode and install `file`, blocking until done.
    pub fn load(&mut self, file: ImageFile) -> Result<()> {
        let pending = self.begin_load(file)?;
        self.complete_load(pending).map(|_| ())
    }

    fn install(&mut self, generation: u64, result: Result<SourceImage>) -> Result<LoadOutcome> {
        if generation != self.load_generation {
            tracing::warn!(
                generation,
                current = self.load_generation,
                "Discarding superseded decode"
            );
            return Ok(LoadOutcome::Superseded);
        }

        let source = result?;
        let session = EditSession::new(source, self.config.output.clone())?;
        self.close();
        tracing::info!(
            width = session.source().width(),
            height = session.source().height(),
            min_zoom = session.bounds().min_zoom,
            fit_zoom = session.bounds().fit_zoom,
            "Edit session started"
        );
        self.session = Some(session);
        Ok(LoadOutcome::Loaded)
    }

    /// Drop the current session, releasing any pointer capture it holds.
    pub fn close(&mut self) -> PanResponse {
        match self.session.take() {
            Some(mut session) => session.release_capture(),
            None => PanResponse::Ignored,
        }
    }

    /// Render and encode the current session on the calling thread.
    pub fn export(&self) -> Result<Vec<u8>> {
        self.require_session()?.export()
    }

    /// Start an export on a worker thread.
    pub fn begin_export(&mut self) -> Result<Pending<Vec<u8>>> {
        let request = self.require_session()?.export_request();
        let guard = InFlight::acquire(&self.exporting)
            .ok_or_else(|| AvatarError::Export("an export is already in progress".into()))?;
        let generation = self.export_generation + 1;
        let pending = request.spawn(generation)?.hold(guard);
        self.export_generation = generation;
        Ok(pending)
    }

    /// Wait for an export started by [`begin_export`](Self::begin_export).
    pub fn complete_export(&mut self, pending: Pending<Vec<u8>>) -> Result<Vec<u8>> {
        pending.wait()
    }

    pub fn is_exporting(&self) -> bool {
        self.exporting.load(Ordering::Acquire)
    }

    fn require_session(&self) -> Result<&EditSession> {
        self.session
            .as_ref()
            .ok_or_else(|| AvatarError::Export("no image loaded".into()))
    }
}
