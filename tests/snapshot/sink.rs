use std::fs;

use stock_report::snapshot::report::{Headline, HeadlineSection, ReportContent};
use stock_report::{Report, ReportError, SnapshotSink};

use tempfile::tempdir;

fn sample() -> Report {
    let item = Headline {
        title: "咖啡期貨創新高".into(),
        url: "https://example.com/1".into(),
        description: None,
        lang: Some("zh".into()),
    };
    Report {
        updated_at: "2024-01-02T22:30:00+08:00".into(),
        timezone: "Asia/Taipei".into(),
        content: ReportContent::Headlines {
            source: None,
            summary: "1. 咖啡期貨創新高".into(),
            sections: vec![HeadlineSection {
                name: "main".into(),
                lang: Some("zh".into()),
                items: vec![item.clone()],
            }],
            news: vec![item],
        },
        ok: true,
        errors: None,
    }
}

#[test]
fn write_replaces_the_file_and_leaves_no_temp() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested/out/report.json");
    let sink = SnapshotSink::new(&path);

    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "old contents").unwrap();
    sink.write(&sample()).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with('{'));
    assert!(!dir.path().join("nested/out/report.json.tmp").exists());
    let names: Vec<_> = fs::read_dir(path.parent().unwrap())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(names, vec![std::ffi::OsString::from("report.json")]);
}

#[test]
fn write_creates_missing_directories() {
    let dir = tempdir().unwrap();
    let sink = SnapshotSink::new(dir.path().join("a/b/c.json"));
    sink.write(&sample()).unwrap();
    assert!(dir.path().join("a/b/c.json").is_file());
}

#[test]
fn previous_report_reads_back() {
    let dir = tempdir().unwrap();
    let sink = SnapshotSink::new(dir.path().join("r.json"));
    let report = sample();

    sink.write(&report).unwrap();
    let back = sink.load_previous().unwrap().expect("file exists");

    assert_eq!(back, report);
    assert_eq!(back.section("main").map(|s| s.items.len()), Some(1));
    assert!(back.section("other").is_none());
}

#[test]
fn missing_previous_is_none() {
    let dir = tempdir().unwrap();
    let sink = SnapshotSink::new(dir.path().join("absent.json"));
    assert!(sink.load_previous().unwrap().is_none());
}

#[test]
fn corrupt_previous_is_a_json_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "[1, 2").unwrap();

    let err = SnapshotSink::new(&path).load_previous().unwrap_err();
    assert!(matches!(err, ReportError::Json(_)), "got {err:?}");
}
