//! Parse, build and write a fixture to an on-disk store.

use std::path::{Path, PathBuf};

use godb_config::SourceConfig;
use godb_core::ids::IdPattern;
use godb_db::error::DatabaseError;
use godb_db::{GoDb, write_staged};
use godb_graph::{NoopObserver, OntologyBuild, build_ontology};
use godb_parser::OboHeader;
use pretty_assertions::assert_eq;

fn load_fixture() -> (OntologyBuild, OboHeader) {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("small_dag.obo");
    let mut stanzas = godb_parser::open(&path).unwrap();
    let records = stanzas.by_ref().collect::<Result<Vec<_>, _>>().unwrap();
    let header = stanzas.into_header();
    (
        build_ontology(records, &IdPattern::default(), &NoopObserver),
        header,
    )
}

fn leftovers(dir: &Path) -> Vec<String> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with(".godb-"))
        .collect()
}

#[tokio::test]
async fn writes_complete_store() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("go.sqlite");
    let (build, header) = load_fixture();

    let summary = write_staged(&target, &build, &header, &SourceConfig::default())
        .await
        .unwrap();
    assert_eq!(summary.terms, 10);
    assert_eq!(summary.obsolete, 1);
    assert_eq!(summary.count("go_bp_offspring"), Some(6));
    assert!(leftovers(dir.path()).is_empty());

    let db = GoDb::open_local(&target).await.unwrap();
    assert_eq!(db.row_count("go_term").await.unwrap(), 10);
    assert_eq!(db.row_count("go_bp_parents").await.unwrap(), 6);
    assert_eq!(db.row_count("go_bp_offspring").await.unwrap(), 6);
    assert_eq!(db.row_count("go_mf_offspring").await.unwrap(), 1);
    assert_eq!(db.row_count("go_cc_offspring").await.unwrap(), 1);
    assert_eq!(db.row_count("go_synonym").await.unwrap(), 2);

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(&target).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }
}

#[tokio::test]
async fn replaces_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("go.sqlite");
    std::fs::write(&target, b"not a database").unwrap();
    let (build, header) = load_fixture();

    write_staged(&target, &build, &header, &SourceConfig::default())
        .await
        .unwrap();

    let db = GoDb::open_local(&target).await.unwrap();
    assert_eq!(db.row_count("go_obsolete").await.unwrap(), 1);
}

#[tokio::test]
async fn unwritable_destination_leaves_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("missing").join("go.sqlite");
    let (build, header) = load_fixture();

    let err = write_staged(&target, &build, &header, &SourceConfig::default())
        .await
        .unwrap_err();
    assert!(matches!(err, DatabaseError::Staging { .. }));
    assert!(!target.exists());
    assert!(leftovers(dir.path()).is_empty());
}
