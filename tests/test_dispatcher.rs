//! Tests for conversion dispatch against the capability table

mod common;

use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use common::{
    dir_listing, test_runtime, touch, GatedCollaborator, RecordingCollaborator, SharedBuffer,
};
use file_converter::facade::dispatcher::{DispatchOutcome, Dispatcher, UNSUPPORTED_MESSAGE};
use file_converter::models::capability::Capability;
use file_converter::models::format::TargetFormat;
use file_converter::utils::utils::ConsoleOutput;

#[test]
fn test_unsupported_pair_reports_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let file = touch(dir.path(), "song.mp3");
    let before = dir_listing(dir.path());

    let runtime = test_runtime();
    let buffer = SharedBuffer::default();
    let collaborator = Arc::new(RecordingCollaborator::default());
    let mut dispatcher = Dispatcher::new(
        collaborator.clone(),
        runtime.handle().clone(),
        ConsoleOutput::from_writer(buffer.clone()),
    );

    let outcome = dispatcher.dispatch("mp3", TargetFormat::Png, &file).unwrap();
    dispatcher.wait_all();

    assert_eq!(outcome, DispatchOutcome::Unsupported);
    assert_eq!(dispatcher.pending(), 0);
    assert!(collaborator.jobs().is_empty());
    assert_eq!(buffer.contents(), format!("{}\n", UNSUPPORTED_MESSAGE));
    assert_eq!(dir_listing(dir.path()), before);
}

#[test]
fn test_hit_passes_computed_output_path() {
    let runtime = test_runtime();
    let buffer = SharedBuffer::default();
    let collaborator = Arc::new(RecordingCollaborator::default());
    let mut dispatcher = Dispatcher::new(
        collaborator.clone(),
        runtime.handle().clone(),
        ConsoleOutput::from_writer(buffer.clone()),
    );

    let input = PathBuf::from("/d/photo.png");
    let outcome = dispatcher.dispatch("png", TargetFormat::Jpg, &input).unwrap();
    dispatcher.wait_all();

    assert_eq!(outcome, DispatchOutcome::Started(Capability::ImageRecode));
    let jobs = collaborator.jobs();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].input_path, input);
    assert_eq!(jobs[0].output_path, Some(PathBuf::from("/d/photo_converted.jpg")));
    assert!(buffer.contents().contains("recorded /d/photo.png"));
}

#[test]
fn test_pdf_text_has_no_output_path() {
    let runtime = test_runtime();
    let collaborator = Arc::new(RecordingCollaborator::default());
    let mut dispatcher = Dispatcher::new(
        collaborator.clone(),
        runtime.handle().clone(),
        ConsoleOutput::from_writer(SharedBuffer::default()),
    );

    dispatcher
        .dispatch("pdf", TargetFormat::Txt, &PathBuf::from("/d/report.pdf"))
        .unwrap();
    dispatcher.wait_all();

    let jobs = collaborator.jobs();
    assert_eq!(jobs[0].capability, Capability::PdfText);
    assert_eq!(jobs[0].output_path, None);
}

#[test]
fn test_collaborator_failure_is_reported_with_label() {
    let runtime = test_runtime();
    let buffer = SharedBuffer::default();
    let mut dispatcher = Dispatcher::new(
        Arc::new(RecordingCollaborator::failing()),
        runtime.handle().clone(),
        ConsoleOutput::from_writer(buffer.clone()),
    );

    let outcome = dispatcher
        .dispatch("zip", TargetFormat::Folder, &PathBuf::from("/d/a.zip"))
        .unwrap();
    dispatcher.wait_all();

    assert_eq!(outcome, DispatchOutcome::Started(Capability::ZipExtract));
    assert!(buffer
        .contents()
        .contains("Error extracting ZIP: PDF parse error: scripted failure"));
}

#[test]
fn test_dispatch_returns_while_work_is_still_blocked() {
    let runtime = test_runtime();
    let buffer = SharedBuffer::default();
    let collaborator = Arc::new(GatedCollaborator::default());
    let mut dispatcher = Dispatcher::new(
        collaborator.clone(),
        runtime.handle().clone(),
        ConsoleOutput::from_writer(buffer.clone()),
    );

    // A dispatcher that waited would only get past the loop once this fires
    let _fallback = {
        let collaborator = collaborator.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_secs(5));
            collaborator.open();
        })
    };

    for name in ["a.png", "b.png", "c.png"] {
        let outcome = dispatcher
            .dispatch("png", TargetFormat::Jpg, &PathBuf::from(name))
            .unwrap();
        assert_eq!(outcome, DispatchOutcome::Started(Capability::ImageRecode));
    }
    assert_eq!(collaborator.finished(), 0);
    assert_eq!(dispatcher.pending(), 3);
    assert!(!buffer.contents().contains("released"));

    collaborator.open();
    dispatcher.wait_all();

    assert_eq!(collaborator.finished(), 3);
    assert_eq!(dispatcher.pending(), 0);
    assert_eq!(buffer.contents().matches("released").count(), 3);
}
