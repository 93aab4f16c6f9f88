//! Walker and driver behavior against a scripted in-memory lister.

use std::collections::HashMap;
use std::sync::atomic::AtomicBool;

use ftpfind::pipeline::{Filter, Walk, run_find};
use ftpfind::remote::{ListedItem, Lister};
use ftpfind::sink::Sink;
use ftpfind::types::{Entry, EntryKind, Facts, FindOpts, OutputFormat};
use ftpfind::FindError;

// --- test doubles ---

struct MockLister {
    tree: HashMap<String, Vec<ListedItem>>,
    fail_on: Option<String>,
    calls: Vec<String>,
}

impl MockLister {
    fn new(tree: Vec<(&str, Vec<ListedItem>)>) -> Self {
        Self {
            tree: tree
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
            fail_on: None,
            calls: Vec::new(),
        }
    }

    fn failing_on(mut self, path: &str) -> Self {
        self.fail_on = Some(path.to_string());
        self
    }
}

impl Lister for MockLister {
    fn list(&mut self, path: &str) -> Result<Vec<ListedItem>, FindError> {
        self.calls.push(path.to_string());
        if self.fail_on.as_deref() == Some(path) {
            return Err(FindError::remote(
                path,
                std::io::Error::other("connection reset"),
            ));
        }
        Ok(self.tree.get(path).cloned().unwrap_or_default())
    }
}

#[derive(Default)]
struct VecSink {
    rendered: Vec<(String, OutputFormat)>,
}

impl VecSink {
    fn paths(&self) -> Vec<&str> {
        self.rendered.iter().map(|(p, _)| p.as_str()).collect()
    }
}

impl Sink for VecSink {
    fn render(&mut self, entry: &Entry, format: OutputFormat) {
        self.rendered.push((entry.path.clone(), format));
    }
}

fn item(name: &str, kind: EntryKind, modify: Option<&str>) -> ListedItem {
    let mut facts = Facts::new();
    if let Some(m) = modify {
        facts.insert("modify".to_string(), m.to_string());
    }
    ListedItem {
        name: name.to_string(),
        kind,
        facts,
    }
}

fn file(name: &str) -> ListedItem {
    item(name, EntryKind::File, Some("20240315120000"))
}

fn dir(name: &str) -> ListedItem {
    item(name, EntryKind::Dir, Some("20240315120000"))
}

fn opts(limit: Option<usize>) -> FindOpts {
    FindOpts {
        limit,
        ..FindOpts::default()
    }
}

fn not_cancelled() -> AtomicBool {
    AtomicBool::new(false)
}

// --- walker ordering ---

#[test]
fn test_walk_depth_first_interleaved() {
    // /a holds f1, then subdir b (holding f2), then f3: files come out in
    // discovery order with the subtree in place, not grouped by depth.
    let mut lister = MockLister::new(vec![
        ("/", vec![dir("a")]),
        ("/a", vec![file("f1"), dir("b"), file("f3")]),
        ("/a/b", vec![file("f2")]),
    ]);
    let paths: Vec<String> = Walk::new(&mut lister, "/")
        .map(|r| r.unwrap().path)
        .collect();
    assert_eq!(paths, vec!["/a/f1", "/a/b/f2", "/a/f3"]);
}

#[test]
fn test_walk_yields_only_files() {
    let mut lister = MockLister::new(vec![
        (
            "/",
            vec![
                file("plain"),
                item("link", EntryKind::Other, None),
                dir("empty"),
            ],
        ),
        ("/empty", vec![]),
    ]);
    let paths: Vec<String> = Walk::new(&mut lister, "/")
        .map(|r| r.unwrap().path)
        .collect();
    // Directories are recursion points only; Other entries are dropped.
    assert_eq!(paths, vec!["/plain"]);
}

#[test]
fn test_walk_lists_directories_on_demand() {
    let mut lister = MockLister::new(vec![
        ("/", vec![file("f1"), dir("sub")]),
        ("/sub", vec![file("f2")]),
    ]);
    let mut walk = Walk::new(&mut lister, "/");
    assert_eq!(walk.next().unwrap().unwrap().path, "/f1");
    drop(walk);
    // f1 came out of the root listing alone; /sub was never touched.
    assert_eq!(lister.calls, vec!["/"]);
}

#[test]
fn test_walk_error_is_fatal_and_fuses() {
    let mut lister = MockLister::new(vec![
        ("/", vec![file("f1"), dir("a"), file("f2")]),
        ("/a", vec![]),
    ])
    .failing_on("/a");
    let mut walk = Walk::new(&mut lister, "/");
    assert_eq!(walk.next().unwrap().unwrap().path, "/f1");
    let err = walk.next().unwrap().unwrap_err();
    assert!(matches!(err, FindError::RemoteListing { .. }));
    assert_eq!(err.path(), Some("/a"));
    // Fused: f2 is never reached after the failure.
    assert!(walk.next().is_none());
}

// --- driver: filters and formats ---

#[test]
fn test_driver_no_filters_forwards_every_file() {
    let mut lister = MockLister::new(vec![(
        "/",
        vec![file("a"), file("b"), file("c")],
    )]);
    let mut sink = VecSink::default();
    let n = run_find(&mut lister, &opts(None), &[], &mut sink, &not_cancelled()).unwrap();
    assert_eq!(n, 3);
    assert_eq!(sink.paths(), vec!["/a", "/b", "/c"]);
}

#[test]
fn test_driver_passes_output_format_through() {
    let mut lister = MockLister::new(vec![("/", vec![file("a")])]);
    let mut sink = VecSink::default();
    let o = FindOpts {
        format: OutputFormat::Full,
        ..FindOpts::default()
    };
    run_find(&mut lister, &o, &[], &mut sink, &not_cancelled()).unwrap();
    assert_eq!(sink.rendered, vec![("/a".to_string(), OutputFormat::Full)]);
}

#[test]
fn test_driver_pattern_filter_drops_non_matches() {
    let mut lister = MockLister::new(vec![(
        "/",
        vec![file("keep.log"), file("skip.txt"), file("also.log")],
    )]);
    let chain = vec![Filter::Pattern(regex::Regex::new(r"\.log$").unwrap())];
    let mut sink = VecSink::default();
    let n = run_find(&mut lister, &opts(None), &chain, &mut sink, &not_cancelled()).unwrap();
    assert_eq!(n, 2);
    assert_eq!(sink.paths(), vec!["/keep.log", "/also.log"]);
}

#[test]
fn test_driver_short_circuit_shields_date_filter() {
    // The entry carries no modify fact, so the date filter would be a hard
    // error if it ever ran; the pattern filter rejecting first must keep it
    // from running.
    let mut lister = MockLister::new(vec![(
        "/",
        vec![item("plain.txt", EntryKind::File, None)],
    )]);
    let chain = vec![
        Filter::Pattern(regex::Regex::new("nomatch").unwrap()),
        Filter::Date(ftpfind::DateRange {
            start: chrono::NaiveDateTime::MIN,
            stop: chrono::NaiveDateTime::MAX,
        }),
    ];
    let mut sink = VecSink::default();
    let n = run_find(&mut lister, &opts(None), &chain, &mut sink, &not_cancelled()).unwrap();
    assert_eq!(n, 0);
}

#[test]
fn test_driver_missing_modify_fact_aborts_run() {
    let mut lister = MockLister::new(vec![(
        "/",
        vec![file("ok"), item("bad", EntryKind::File, None)],
    )]);
    let chain = vec![Filter::Date(ftpfind::DateRange {
        start: chrono::NaiveDateTime::MIN,
        stop: chrono::NaiveDateTime::MAX,
    })];
    let mut sink = VecSink::default();
    let err = run_find(&mut lister, &opts(None), &chain, &mut sink, &not_cancelled()).unwrap_err();
    assert!(matches!(err, FindError::MetadataParse { .. }));
    // Streaming: the match before the failure already went out.
    assert_eq!(sink.paths(), vec!["/ok"]);
}

// --- driver: limit semantics ---

#[test]
fn test_limit_forwards_exactly_two_of_five() {
    let mut lister = MockLister::new(vec![(
        "/",
        vec![file("a"), file("b"), file("c"), file("d"), file("e")],
    )]);
    let mut sink = VecSink::default();
    let n = run_find(&mut lister, &opts(Some(2)), &[], &mut sink, &not_cancelled()).unwrap();
    assert_eq!(n, 2);
    assert_eq!(sink.paths(), vec!["/a", "/b"]);
    // One flat directory, one listing; nothing pulled beyond need.
    assert_eq!(lister.calls, vec!["/"]);
}

#[test]
fn test_limit_stops_before_descending_further() {
    // The break needs a third pulled entry; with /c still in the root
    // listing, the stop happens before the walk ever reaches /deep.
    let mut lister = MockLister::new(vec![
        ("/", vec![file("a"), file("b"), file("c"), dir("deep")]),
        ("/deep", vec![file("d")]),
    ]);
    let mut sink = VecSink::default();
    run_find(&mut lister, &opts(Some(2)), &[], &mut sink, &not_cancelled()).unwrap();
    assert_eq!(sink.paths(), vec!["/a", "/b"]);
    assert_eq!(lister.calls, vec!["/"]);
}

#[test]
fn test_limit_break_pulls_one_entry_past_the_matches() {
    // When the directory sits right behind the last forwarded match, the
    // third pulled entry is /deep/c, so producing it lists /deep first and
    // only then does the limit fire. Same as stopping a generator one pull
    // late; the extra listing is part of the preserved semantics.
    let mut lister = MockLister::new(vec![
        ("/", vec![file("a"), file("b"), dir("deep")]),
        ("/deep", vec![file("c")]),
    ]);
    let mut sink = VecSink::default();
    run_find(&mut lister, &opts(Some(2)), &[], &mut sink, &not_cancelled()).unwrap();
    assert_eq!(sink.paths(), vec!["/a", "/b"]);
    assert_eq!(lister.calls, vec!["/", "/deep"]);
}

#[test]
fn test_limit_zero_on_matching_first_entry_forwards_nothing() {
    // Historical edge, preserved: the running index of the first pulled
    // entry is 0, so limit 0 ends the run before anything is forwarded.
    let mut lister = MockLister::new(vec![("/", vec![file("a"), file("b")])]);
    let mut sink = VecSink::default();
    let n = run_find(&mut lister, &opts(Some(0)), &[], &mut sink, &not_cancelled()).unwrap();
    assert_eq!(n, 0);
    assert!(sink.paths().is_empty());
}

#[test]
fn test_limit_zero_never_fires_when_first_entry_is_filtered() {
    // Historical edge, preserved: the index only meets limit 0 on the very
    // first pulled entry. If that one is filtered out, later matches all
    // carry a higher index and the limit never triggers.
    let mut lister = MockLister::new(vec![(
        "/",
        vec![file("skip.txt"), file("keep1.log"), file("keep2.log")],
    )]);
    let chain = vec![Filter::Pattern(regex::Regex::new(r"\.log$").unwrap())];
    let mut sink = VecSink::default();
    let n = run_find(&mut lister, &opts(Some(0)), &chain, &mut sink, &not_cancelled()).unwrap();
    assert_eq!(n, 2);
    assert_eq!(sink.paths(), vec!["/keep1.log", "/keep2.log"]);
}

#[test]
fn test_limit_counts_pulled_entries_not_matches() {
    // Index 0 (skip.txt) is filtered; keep1 at index 1, keep2 at index 2.
    // Limit 2 fires when keep2's index equals it, so only keep1 goes out.
    let mut lister = MockLister::new(vec![(
        "/",
        vec![file("skip.txt"), file("keep1.log"), file("keep2.log")],
    )]);
    let chain = vec![Filter::Pattern(regex::Regex::new(r"\.log$").unwrap())];
    let mut sink = VecSink::default();
    let n = run_find(&mut lister, &opts(Some(2)), &chain, &mut sink, &not_cancelled()).unwrap();
    assert_eq!(n, 1);
    assert_eq!(sink.paths(), vec!["/keep1.log"]);
}

// --- driver: failure and cancellation ---

#[test]
fn test_listing_failure_aborts_with_partial_output() {
    let mut lister = MockLister::new(vec![
        ("/", vec![file("early"), dir("broken")]),
        ("/broken", vec![file("never")]),
    ])
    .failing_on("/broken");
    let mut sink = VecSink::default();
    let err = run_find(&mut lister, &opts(None), &[], &mut sink, &not_cancelled()).unwrap_err();
    assert!(matches!(err, FindError::RemoteListing { .. }));
    assert_eq!(sink.paths(), vec!["/early"]);
}

#[test]
fn test_cancellation_checked_before_first_pull() {
    let mut lister = MockLister::new(vec![("/", vec![file("a")])]);
    let mut sink = VecSink::default();
    let cancelled = AtomicBool::new(true);
    let n = run_find(&mut lister, &opts(None), &[], &mut sink, &cancelled).unwrap();
    assert_eq!(n, 0);
    // The loop exits before demanding anything from the walk.
    assert!(lister.calls.is_empty());
}
