use camino::{Utf8Path, Utf8PathBuf};
use cloudguard_cache::{CacheError, DataSource, SourceKey, load_file};
use cloudguard_types::Partition;
use tempfile::TempDir;

fn write_dump(dir: &Utf8Path, content: &str) -> Utf8PathBuf {
    let path = dir.join("collection.json");
    std::fs::write(&path, content).expect("write dump");
    path
}

fn tempdir() -> (TempDir, Utf8PathBuf) {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf8 path");
    (temp, root)
}

#[test]
fn load_file_reads_collector_dump() {
    let (_temp, root) = tempdir();
    let path = write_dump(
        &root,
        r#"{
  "projects": { "get": { "global": { "data": [ { "name": "proj1" } ] } } },
  "clusters.kubernetes": { "list": {
    "us-central1": { "data": [ { "name": "c1", "ipAllocationPolicy": { "useIpAliases": true } } ] }
  } }
}"#,
    );

    let cache = load_file(&path).expect("load");
    assert_eq!(cache.len(), 2);

    let key = SourceKey::new("projects", "get", Partition::global());
    let entry = futures::executor::block_on(cache.get(&key)).expect("project entry");
    assert_eq!(entry.records().map(<[_]>::len), Some(1));
}

#[test]
fn load_file_reports_missing_path() {
    let (_temp, root) = tempdir();
    let missing = root.join("nope.json");

    let err = load_file(&missing).expect_err("missing file");
    match err {
        CacheError::Io { path, .. } => assert_eq!(path, missing),
        other => panic!("expected io error, got {other:?}"),
    }
}
