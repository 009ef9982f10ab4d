use snaptree::{
    snapshot, write_snapshot, OutputFormat, SnapshotBuilder, SnapshotDocument, SnapshotError,
};
use std::fs;
use std::path::Path;
use tempfile::tempdir;
fn scenario(root: &Path) {
    fs::write(root.join("a.txt"), "hello").unwrap();
    fs::create_dir(root.join("b")).unwrap();
    fs::write(root.join("b/c.py"), "print(1)\n\n").unwrap();
    fs::create_dir(root.join("node_modules")).unwrap();
    fs::write(root.join("node_modules/x.js"), "module.exports = 1;").unwrap();
}
#[test]
fn integration_full_flow() {
    let dir = tempdir().unwrap();
    scenario(dir.path());
    let options = SnapshotBuilder::new(dir.path()).build();
    let written = write_snapshot(&options, OutputFormat::Text).unwrap();
    assert_eq!(written.file_name().unwrap(), "project_snapshot.txt");
    let text = fs::read_to_string(&written).unwrap();
    let expected = format!(
        "Project structure:\n\n\
         ├── b\n\
         │   └── c.py\n\
         ├── node_modules [skipped]\n\
         └── a.txt\n\n\n\
         ======= a.txt =======\nhello\n\n\
         ======= {} =======\nprint(1)\n",
        Path::new("b").join("c.py").display()
    );
    assert_eq!(text, expected);
    assert!(!text.contains("x.js"));
}
#[test]
fn integration_skipped_extension_only_in_tree() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("logo.png"), [0x89u8, b'P', b'N', b'G']).unwrap();
    fs::write(dir.path().join("notes.md"), "# notes").unwrap();
    let document = snapshot(&SnapshotBuilder::new(dir.path()).build()).unwrap();
    assert!(document.tree.iter().any(|line| line.ends_with("logo.png")));
    let text = document.render_text();
    assert!(!text.contains("======= logo.png ======="));
    assert!(text.contains("======= notes.md =======\n# notes\n"));
}
#[test]
fn integration_idempotent() {
    let dir = tempdir().unwrap();
    let out = tempdir().unwrap();
    scenario(dir.path());
    let options = SnapshotBuilder::new(dir.path())
        .output(out.path().join("snap.txt"))
        .build();
    let first = write_snapshot(&options, OutputFormat::Text).unwrap();
    let first_text = fs::read(&first).unwrap();
    let second = write_snapshot(&options, OutputFormat::Text).unwrap();
    assert_eq!(first, second);
    assert_eq!(first_text, fs::read(&second).unwrap());
}
#[test]
fn integration_output_in_root_is_listed_but_not_dumped() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "hello").unwrap();
    let options = SnapshotBuilder::new(dir.path()).build();
    write_snapshot(&options, OutputFormat::Text).unwrap();
    let rerun = snapshot(&options).unwrap();
    assert_eq!(rerun.tree, vec!["├── a.txt", "└── project_snapshot.txt"]);
    assert_eq!(rerun.files.len(), 1);
}
#[test]
fn integration_lossy_content() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("latin1.txt"), b"caf\xe9  \n").unwrap();
    let document = snapshot(&SnapshotBuilder::new(dir.path()).build()).unwrap();
    assert_eq!(document.files.len(), 1);
    assert_eq!(document.files[0].content, "caf\u{FFFD}");
    assert!(document.files[0].lossy);
}
#[test]
fn integration_invalid_root() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing");
    let options = SnapshotBuilder::new(&missing).build();
    let err = write_snapshot(&options, OutputFormat::Text).unwrap_err();
    assert!(matches!(err, SnapshotError::InvalidRoot { .. }));
    assert!(!missing.join("project_snapshot.txt").exists());

    let file = dir.path().join("plain.txt");
    fs::write(&file, "x").unwrap();
    let err = snapshot(&SnapshotBuilder::new(&file).build()).unwrap_err();
    assert!(matches!(err, SnapshotError::InvalidRoot { .. }));
}
#[test]
fn integration_empty_root() {
    let dir = tempdir().unwrap();
    let document = snapshot(&SnapshotBuilder::new(dir.path()).build()).unwrap();
    assert_eq!(document.render_text(), "Project structure:\n\n\n");
}
#[test]
fn integration_json_output() {
    let dir = tempdir().unwrap();
    let out = tempdir().unwrap();
    scenario(dir.path());
    let options = SnapshotBuilder::new(dir.path())
        .output(out.path().join("snap.json"))
        .build();
    let written = write_snapshot(&options, OutputFormat::Json).unwrap();
    let parsed: SnapshotDocument =
        serde_json::from_str(&fs::read_to_string(written).unwrap()).unwrap();
    assert_eq!(parsed.tree.len(), 4);
    assert_eq!(parsed.files.len(), 2);
    assert_eq!(parsed.files[0].content, "hello");
}
#[test]
fn integration_extra_exclusions() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("target")).unwrap();
    fs::write(dir.path().join("target/out.txt"), "built").unwrap();
    fs::write(dir.path().join("main.rs"), "fn main() {}").unwrap();
    let options = SnapshotBuilder::new(dir.path()).exclude_dir("target").build();
    let document = snapshot(&options).unwrap();
    assert_eq!(document.tree, vec!["├── target [skipped]", "└── main.rs"]);
    assert_eq!(document.files.len(), 1);
}
#[test]
fn integration_stale_default_snapshot_not_dumped() {
    let dir = tempdir().unwrap();
    let out = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "hello").unwrap();
    fs::write(dir.path().join("project_snapshot.txt"), "STALE SNAPSHOT").unwrap();
    let options = SnapshotBuilder::new(dir.path())
        .output(out.path().join("snap.txt"))
        .build();
    let document = snapshot(&options).unwrap();
    assert!(document.tree.iter().any(|line| line.ends_with("project_snapshot.txt")));
    let names: Vec<_> = document.files.iter().map(|f| f.path.clone()).collect();
    assert_eq!(names, vec![std::path::PathBuf::from("a.txt")]);
    assert!(!document.render_text().contains("STALE SNAPSHOT"));
}
