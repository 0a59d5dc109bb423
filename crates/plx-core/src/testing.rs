//! In-memory fakes for the ports, shared by the unit tests in this crate.

use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use plx_types::context::SkippedFile;
use plx_types::error::{EditorError, WorkspaceError};
use plx_types::llm::{InferenceError, InferenceReply, InferenceRequest};
use plx_types::session::EditorSignal;
use plx_types::slot::Slot;

use crate::editor::{CollectTargets, DisplayTargets, Editor};
use crate::llm::client::InferenceClient;
use crate::service::fs::FileSystem;
use crate::session::reporter::SessionReporter;
use crate::workspace::Workspace;

/// Shared counter that survives the fake being moved into a session.
#[derive(Debug, Clone, Default)]
pub struct Counter(Arc<AtomicUsize>);

impl Counter {
    pub fn incr(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

pub type SlotBuffers = Arc<Mutex<HashMap<Slot, String>>>;

/// Workspace backed by a shared in-memory map.
///
/// The buffers are shared with [`ScriptedEditor`] so the fake editor can
/// "type" into the prompt and file-selection slots.
pub struct MemoryWorkspace {
    buffers: SlotBuffers,
    paths: HashMap<Slot, PathBuf>,
    releases: Counter,
    fail_writes_to: Option<Slot>,
}

impl MemoryWorkspace {
    pub fn new() -> Self {
        let paths = Slot::ALL
            .iter()
            .map(|slot| (*slot, PathBuf::from("/mem").join(slot.file_name())))
            .collect();
        let buffers = Slot::ALL.iter().map(|slot| (*slot, String::new())).collect();
        Self {
            buffers: Arc::new(Mutex::new(buffers)),
            paths,
            releases: Counter::default(),
            fail_writes_to: None,
        }
    }

    /// Make every write to `slot` fail, to inject unexpected errors.
    pub fn failing_writes_to(mut self, slot: Slot) -> Self {
        self.fail_writes_to = Some(slot);
        self
    }

    pub fn buffers(&self) -> SlotBuffers {
        Arc::clone(&self.buffers)
    }

    pub fn release_counter(&self) -> Counter {
        self.releases.clone()
    }
}

impl Workspace for MemoryWorkspace {
    fn path(&self, slot: Slot) -> &Path {
        &self.paths[&slot]
    }

    async fn read(&self, slot: Slot) -> Result<String, WorkspaceError> {
        Ok(self.buffers.lock().unwrap().get(&slot).cloned().unwrap_or_default())
    }

    async fn write(&self, slot: Slot, content: &str) -> Result<(), WorkspaceError> {
        if self.fail_writes_to == Some(slot) {
            return Err(WorkspaceError::Write {
                slot,
                message: "injected failure".to_string(),
            });
        }
        self.buffers.lock().unwrap().insert(slot, content.to_string());
        Ok(())
    }

    fn release(&mut self) {
        self.releases.incr();
        self.buffers.lock().unwrap().clear();
    }
}

/// One scripted collect-phase outcome.
#[derive(Debug, Clone)]
pub enum CollectStep {
    /// Write the prompt and selection slots, then exit 0.
    Send { prompt: String, files: String },
    /// Exit with the given code.
    Stop(Option<i32>),
    /// Fail to launch.
    Fail,
    /// Panic inside the editor call.
    Panic,
}

impl CollectStep {
    pub fn send(prompt: &str) -> Self {
        CollectStep::Send {
            prompt: prompt.to_string(),
            files: String::new(),
        }
    }

    pub fn send_with_files(prompt: &str, files: &[&str]) -> Self {
        CollectStep::Send {
            prompt: prompt.to_string(),
            files: files.join("\n"),
        }
    }
}

/// Editor that replays a script of collect outcomes.
///
/// When the script runs out it exits with code 1.
pub struct ScriptedEditor {
    steps: Mutex<VecDeque<CollectStep>>,
    buffers: SlotBuffers,
    collects: Counter,
    displays: Counter,
    /// Output slot contents observed at each display phase.
    displayed: Arc<Mutex<Vec<String>>>,
    /// Prompt slot contents observed when each collect phase starts.
    prompts_seen: Arc<Mutex<Vec<String>>>,
    /// History slot contents observed when each collect phase starts.
    histories_seen: Arc<Mutex<Vec<String>>>,
}

impl ScriptedEditor {
    pub fn new(buffers: SlotBuffers, steps: Vec<CollectStep>) -> Self {
        Self {
            steps: Mutex::new(steps.into()),
            buffers,
            collects: Counter::default(),
            displays: Counter::default(),
            displayed: Arc::new(Mutex::new(Vec::new())),
            prompts_seen: Arc::new(Mutex::new(Vec::new())),
            histories_seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn collect_counter(&self) -> Counter {
        self.collects.clone()
    }

    pub fn display_counter(&self) -> Counter {
        self.displays.clone()
    }

    pub fn displayed(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.displayed)
    }

    pub fn prompts_seen(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.prompts_seen)
    }

    pub fn histories_seen(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.histories_seen)
    }

    fn slot(&self, slot: Slot) -> String {
        self.buffers
            .lock()
            .unwrap()
            .get(&slot)
            .cloned()
            .unwrap_or_default()
    }
}

impl Editor for ScriptedEditor {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn collect(&self, _targets: &CollectTargets<'_>) -> Result<EditorSignal, EditorError> {
        self.collects.incr();
        let prompt = self.slot(Slot::Prompt);
        self.prompts_seen.lock().unwrap().push(prompt);
        let history = self.slot(Slot::History);
        self.histories_seen.lock().unwrap().push(history);
        let step = self.steps.lock().unwrap().pop_front();
        match step.unwrap_or(CollectStep::Stop(Some(1))) {
            CollectStep::Send { prompt, files } => {
                let mut buffers = self.buffers.lock().unwrap();
                buffers.insert(Slot::Prompt, prompt);
                buffers.insert(Slot::FileSelection, files);
                Ok(EditorSignal::Send)
            }
            CollectStep::Stop(code) => Ok(EditorSignal::from_exit_code(code)),
            CollectStep::Fail => Err(EditorError::Launch {
                program: "scripted".to_string(),
                message: "injected failure".to_string(),
            }),
            CollectStep::Panic => panic!("injected editor panic"),
        }
    }

    async fn display(&self, _targets: &DisplayTargets<'_>) -> Result<(), EditorError> {
        self.displays.incr();
        let output = self.slot(Slot::Output);
        self.displayed.lock().unwrap().push(output);
        Ok(())
    }
}

/// Inference client that replays scripted results and records requests.
///
/// When the script runs out every call fails.
pub struct ScriptedClient {
    results: Mutex<VecDeque<Result<InferenceReply, InferenceError>>>,
    requests: Arc<Mutex<Vec<InferenceRequest>>>,
}

impl ScriptedClient {
    pub fn new(results: Vec<Result<InferenceReply, InferenceError>>) -> Self {
        Self {
            results: Mutex::new(results.into()),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn replying(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|t| Ok(reply(t))).collect())
    }

    pub fn always_failing() -> Self {
        Self::new(Vec::new())
    }

    pub fn requests(&self) -> Arc<Mutex<Vec<InferenceRequest>>> {
        Arc::clone(&self.requests)
    }
}

pub fn reply(text: &str) -> InferenceReply {
    InferenceReply {
        text: text.to_string(),
        diagnostic: "scripted".to_string(),
    }
}

pub fn connection_error() -> InferenceError {
    InferenceError::Connection {
        url: "http://localhost:11434".to_string(),
        message: "connection refused".to_string(),
    }
}

impl InferenceClient for ScriptedClient {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn generate(&self, request: &InferenceRequest) -> Result<InferenceReply, InferenceError> {
        self.requests.lock().unwrap().push(request.clone());
        let next = self.results.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Err(connection_error()))
    }
}

/// In-memory file set for assembler tests.
#[derive(Default)]
pub struct MemoryFs {
    files: HashMap<PathBuf, Option<String>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), Some(content.to_string()));
        self
    }

    /// A path that exists but fails to read.
    pub fn with_unreadable(mut self, path: &str) -> Self {
        self.files.insert(PathBuf::from(path), None);
        self
    }
}

impl FileSystem for MemoryFs {
    async fn read_file(&self, path: &Path) -> Result<String, std::io::Error> {
        match self.files.get(path) {
            Some(Some(content)) => Ok(content.clone()),
            Some(None) => Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "stream did not contain valid UTF-8",
            )),
            None => Err(std::io::Error::from(std::io::ErrorKind::NotFound)),
        }
    }

    async fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }
}

/// Reporter that records every event as a short string.
#[derive(Default)]
pub struct RecordingReporter {
    events: Arc<Mutex<Vec<String>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.events)
    }

    fn record(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl SessionReporter for RecordingReporter {
    fn file_skipped(&self, skipped: &SkippedFile) {
        self.record(format!("skipped {}", skipped.path));
    }

    fn query_started(&self, model: &str) {
        self.record(format!("querying {model}"));
    }

    fn query_finished(&self, reply: &InferenceReply) {
        self.record(format!("replied {}", reply.text));
    }

    fn query_failed(&self, error: &InferenceError) {
        self.record(format!("failed {error}"));
    }

    fn stopped(&self, code: Option<i32>) {
        self.record(format!("stopped {code:?}"));
    }
}
