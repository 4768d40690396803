use std::path::PathBuf;

use super::*;
use crate::{
    graph::{
        attrs::{EdgeDefaults, GraphAttrs, NodeDefaults, NodeStyle},
        state::GraphState,
    },
    render::dot::DotEngine,
};

fn scratch(name: &str) -> String {
    let dir = PathBuf::from("target").join("unit_sequencer").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    format!("{}/", dir.display())
}

fn scene() -> Scene {
    let mut g = GraphState::new(
        GraphAttrs::default(),
        NodeDefaults::default(),
        EdgeDefaults::default(),
    );
    g.draw("5", Some("3"), None, NodeStyle::Filled);
    g.scene().clone()
}

#[test]
fn compute_file_path_is_bit_exact() {
    assert_eq!(
        compute_file_path("/tmp/", "bst_graph", 5, ".png"),
        PathBuf::from("/tmp/bst_graph00005.png")
    );
    assert_eq!(
        compute_file_path("", "f", 123_456, ".svg"),
        PathBuf::from("f123456.svg")
    );

    let seq = FrameSequencer::new(SequencerOpts {
        dir: "/tmp/".to_owned(),
        ..SequencerOpts::default()
    })
    .unwrap();
    assert_eq!(seq.file_path(5), PathBuf::from("/tmp/bst_graph00005.png"));
    assert_eq!(seq.frame_count(), 0);
    assert!(seq.current_file_path().is_none());
}

#[test]
fn options_are_validated() {
    assert!(
        FrameSequencer::new(SequencerOpts {
            duplicate_frames: 0,
            ..SequencerOpts::default()
        })
        .is_err()
    );
    assert!(
        FrameSequencer::new(SequencerOpts {
            extension: String::new(),
            ..SequencerOpts::default()
        })
        .is_err()
    );

    let mut seq = FrameSequencer::new(SequencerOpts::default()).unwrap();
    assert!(seq.set_duplicate_frames(0).is_err());
    seq.set_duplicate_frames(4).unwrap();
    assert_eq!(seq.opts().duplicate_frames, 4);
}

#[test]
fn emit_writes_identical_duplicates_with_consecutive_counters() {
    let dir = scratch("dupes");
    let mut seq = FrameSequencer::new(SequencerOpts {
        dir: dir.clone(),
        extension: ".dot".to_owned(),
        duplicate_frames: 3,
        start_count: 10,
        ..SequencerOpts::default()
    })
    .unwrap();

    let last = seq.emit(&mut DotEngine, &scene()).unwrap();
    assert_eq!(seq.frame_count(), 13);
    assert_eq!(seq.frames_written(), 3);
    assert_eq!(last, seq.file_path(13));
    assert_eq!(seq.current_file_path(), Some(last.as_path()));

    let first = std::fs::read(seq.file_path(11)).unwrap();
    assert_eq!(first, std::fs::read(seq.file_path(12)).unwrap());
    assert_eq!(first, std::fs::read(seq.file_path(13)).unwrap());
    assert!(!seq.file_path(10).exists());
    assert!(!seq.file_path(14).exists());
}

#[test]
fn counter_is_monotonic_across_emits() {
    let dir = scratch("monotonic");
    let mut seq = FrameSequencer::new(SequencerOpts {
        dir,
        extension: ".dot".to_owned(),
        ..SequencerOpts::default()
    })
    .unwrap();
    let a = seq.emit(&mut DotEngine, &scene()).unwrap();
    seq.set_duplicate_frames(2).unwrap();
    let b = seq.emit(&mut DotEngine, &scene()).unwrap();
    assert_eq!(a, seq.file_path(1));
    assert_eq!(b, seq.file_path(3));
    assert_eq!(seq.frame_count(), 3);
}

#[test]
fn failed_write_reports_counter_and_keeps_count() {
    let dir = PathBuf::from("target").join("unit_sequencer").join("blocked");
    std::fs::create_dir_all(&dir).unwrap();
    let blocker = dir.join("not_a_dir");
    std::fs::write(&blocker, b"x").unwrap();

    let mut seq = FrameSequencer::new(SequencerOpts {
        dir: format!("{}/", blocker.display()),
        extension: ".dot".to_owned(),
        start_count: 41,
        ..SequencerOpts::default()
    })
    .unwrap();

    let err = seq.emit(&mut DotEngine, &scene()).unwrap_err();
    match &err {
        TreevizError::RenderWrite { frame, path, .. } => {
            assert_eq!(*frame, 42);
            assert_eq!(path, &seq.file_path(42));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(seq.frame_count(), 41);
    assert!(seq.current_file_path().is_none());
}

#[test]
fn failed_duplicate_keeps_the_copies_already_written() {
    let dir = scratch("partial");
    let mut seq = FrameSequencer::new(SequencerOpts {
        dir,
        extension: ".dot".to_owned(),
        duplicate_frames: 3,
        start_count: 7,
        ..SequencerOpts::default()
    })
    .unwrap();
    // A directory where the second copy should go makes that write fail.
    std::fs::create_dir_all(seq.file_path(9)).unwrap();

    let err = seq.emit(&mut DotEngine, &scene()).unwrap_err();
    assert_eq!(err.failed_frame(), Some(9));
    assert_eq!(seq.frame_count(), 8);
    assert_eq!(seq.frames_written(), 1);
    assert_eq!(seq.current_file_path(), Some(seq.file_path(8).as_path()));
    assert!(seq.file_path(8).is_file());
    assert!(!seq.file_path(10).exists());
}

#[test]
fn counter_overflow_is_a_validation_error() {
    let dir = scratch("overflow");
    let mut seq = FrameSequencer::new(SequencerOpts {
        dir,
        extension: ".dot".to_owned(),
        start_count: u64::MAX,
        ..SequencerOpts::default()
    })
    .unwrap();

    let err = seq.emit(&mut DotEngine, &scene()).unwrap_err();
    assert!(matches!(err, TreevizError::Validation(_)));
    assert_eq!(seq.frame_count(), u64::MAX);
    assert!(seq.current_file_path().is_none());
}
