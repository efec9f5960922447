use std::fs;
use std::path::PathBuf;

const UPDATE_VAR: &str = "TREESTRESS_UPDATE_SNAPSHOTS";

fn snapshot_path(name: &str) -> PathBuf {
    [env!("CARGO_MANIFEST_DIR"), "tests", "snapshots", name]
        .iter()
        .collect()
}

/// Compare `actual` against `tests/snapshots/<name>`, or rewrite it when
/// `TREESTRESS_UPDATE_SNAPSHOTS` is set.
pub fn assert_snapshot(name: &str, actual: &str) {
    let path = snapshot_path(name);
    if std::env::var_os(UPDATE_VAR).is_some() {
        fs::write(&path, actual).expect("write snapshot");
        return;
    }

    let expected = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("cannot read snapshot {}: {}", path.display(), err));
    assert_eq!(
        expected.replace("\r\n", "\n"),
        actual.replace("\r\n", "\n"),
        "report differs from {} (set {}=1 to regenerate)",
        path.display(),
        UPDATE_VAR
    );
}
