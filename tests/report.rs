use final_newline::{FixOutcome, FixRecord, NewlineError, ReportWriter};
use std::fs;
use std::path::Path;

#[test]
fn appends_one_json_line_per_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs").join("report.jsonl");
    let writer = ReportWriter::new(&path, 1024 * 1024);

    writer
        .append(&FixRecord::success(Path::new("a.txt"), FixOutcome::Appended, 1, b"a\n"))
        .unwrap();
    let err = NewlineError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
    writer
        .append(&FixRecord::failure(Path::new("b.txt"), &err))
        .unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let records: Vec<FixRecord> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].outcome, Some(FixOutcome::Appended));
    assert_eq!(records[0].path, Path::new("a.txt"));
    assert!(records[1].is_failure());
    assert_ne!(records[0].event_id, records[1].event_id);
}

#[test]
fn oversized_report_is_rotated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.jsonl");
    fs::write(&path, vec![b'x'; 64]).unwrap();

    let writer = ReportWriter::new(&path, 16);
    writer
        .append(&FixRecord::success(
            Path::new("c.txt"),
            FixOutcome::AlreadyTerminated,
            2,
            b"c\n",
        ))
        .unwrap();

    let rotated: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().contains("rotated_"))
        .collect();
    assert_eq!(rotated.len(), 1);
    assert_eq!(fs::read(rotated[0].path()).unwrap(), vec![b'x'; 64]);

    let current = fs::read_to_string(&path).unwrap();
    assert_eq!(current.lines().count(), 1);
}

#[test]
fn repeated_rotations_keep_every_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.jsonl");
    let writer = ReportWriter::new(&path, 16);

    for name in ["a.txt", "b.txt", "c.txt", "d.txt"] {
        writer
            .append(&FixRecord::success(
                Path::new(name),
                FixOutcome::Appended,
                1,
                b"x\n",
            ))
            .unwrap();
    }

    let mut files = 0;
    let mut records = 0;
    for entry in fs::read_dir(dir.path()).unwrap() {
        let text = fs::read_to_string(entry.unwrap().path()).unwrap();
        files += 1;
        records += text.lines().count();
    }
    assert_eq!(files, 4);
    assert_eq!(records, 4);
}
