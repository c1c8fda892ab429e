//! Shared fixtures: scripted console, recording collaborator, temp inputs

#![allow(dead_code)]

use std::io::{self, BufRead, Cursor, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Condvar, Mutex};

use file_converter::config::ports::{AppConfig, ToolPaths};
use file_converter::facade::conversion_facade::ConversionFacade;
use file_converter::facade::traits::i_conversion::ConversionFacadeTrait;
use file_converter::models::conversion::{ConversionJob, RunOutcome};
use file_converter::service::error::ConvertError;
use file_converter::service::traits::i_service::CollaboratorServiceTrait;
use file_converter::utils::utils::ConsoleOutput;
use tokio::runtime::Runtime;

/// In-memory writer whose contents stay readable after being handed to the console
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).to_string()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Collaborator that records jobs instead of touching the filesystem
#[derive(Default)]
pub struct RecordingCollaborator {
    jobs: Mutex<Vec<ConversionJob>>,
    fail: bool,
}

impl RecordingCollaborator {
    pub fn failing() -> Self {
        RecordingCollaborator {
            jobs: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn jobs(&self) -> Vec<ConversionJob> {
        let mut jobs = self.jobs.lock().unwrap().clone();
        jobs.sort_by(|a, b| a.input_path.cmp(&b.input_path));
        jobs
    }
}

impl CollaboratorServiceTrait for RecordingCollaborator {
    fn execute(&self, job: &ConversionJob) -> Result<String, ConvertError> {
        self.jobs.lock().unwrap().push(job.clone());
        if self.fail {
            return Err(ConvertError::Pdf("scripted failure".to_string()));
        }
        Ok(format!("recorded {}", job.input_path.display()))
    }
}

/// Collaborator whose jobs stay blocked until the test opens the gate
#[derive(Default)]
pub struct GatedCollaborator {
    open: Mutex<bool>,
    opened: Condvar,
    finished: AtomicUsize,
}

impl GatedCollaborator {
    pub fn open(&self) {
        *self.open.lock().unwrap() = true;
        self.opened.notify_all();
    }

    pub fn finished(&self) -> usize {
        self.finished.load(Ordering::SeqCst)
    }
}

impl CollaboratorServiceTrait for GatedCollaborator {
    fn execute(&self, job: &ConversionJob) -> Result<String, ConvertError> {
        let mut open = self.open.lock().unwrap();
        while !*open {
            open = self.opened.wait(open).unwrap();
        }
        drop(open);
        self.finished.fetch_add(1, Ordering::SeqCst);
        Ok(format!("released {}", job.input_path.display()))
    }
}

pub fn test_config(input: &Path) -> AppConfig {
    AppConfig {
        input: input.to_path_buf(),
        log_level: "info".to_string(),
        jpeg_quality: 80,
        tools: ToolPaths {
            ffmpeg: "ffmpeg".to_string(),
            chromium: "chromium".to_string(),
            unrar: "unrar".to_string(),
        },
    }
}

pub fn test_runtime() -> Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .build()
        .unwrap()
}

pub struct RunResult {
    pub outcome: RunOutcome,
    pub console: String,
}

/// Runs the walker over `input` with scripted operator answers
pub fn run_walker(
    config: AppConfig,
    collaborator: Arc<dyn CollaboratorServiceTrait>,
    answers: &str,
) -> RunResult {
    let mut input = Cursor::new(answers.as_bytes().to_vec());
    run_walker_with_input(config, collaborator, &mut input)
}

pub fn run_walker_with_input(
    config: AppConfig,
    collaborator: Arc<dyn CollaboratorServiceTrait>,
    input: &mut dyn BufRead,
) -> RunResult {
    let runtime = test_runtime();
    let buffer = SharedBuffer::default();
    let mut facade = ConversionFacade::new(
        config,
        collaborator,
        runtime.handle().clone(),
        ConsoleOutput::from_writer(buffer.clone()),
    );
    let outcome = facade.run(input).unwrap();
    RunResult {
        outcome,
        console: buffer.contents(),
    }
}

/// Operator input that fails on every read
pub struct BrokenInput;

impl Read for BrokenInput {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "stdin unavailable"))
    }
}

pub fn touch(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"placeholder").unwrap();
    path
}

/// Lists a directory's file names, sorted, for before/after comparisons
pub fn dir_listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}
