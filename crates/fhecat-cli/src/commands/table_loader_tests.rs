use std::io::Write;
use std::path::Path;

use fhecat_core::TableError;

use super::table_loader::{LoadError, load_table};

fn write_table(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn loads_table_from_file() {
    let file = write_table(
        r#"{"version": 1, "types": [{"type": "Bool", "value": 0, "bitLength": 2, "clearMatchingType": "bool"}]}"#,
    );

    let table = load_table(file.path()).unwrap();
    assert_eq!(table.types.len(), 1);
    assert_eq!(table.types[0].name, "Bool");
    assert!(table.types[0].supported_operators.is_empty());
}

#[test]
fn loads_builtin_table_copy() {
    let file = write_table(fhecat_core::BUILTIN_TABLE_JSON);

    let table = load_table(file.path()).unwrap();
    assert_eq!(table.entry_count(), 120);
}

#[test]
fn rejects_unsupported_version() {
    let file = write_table(r#"{"version": 2, "types": []}"#);

    let err = load_table(file.path()).unwrap_err();
    assert!(matches!(
        err,
        LoadError::Table {
            source: TableError::UnsupportedVersion { found: 2, expected: 1 },
            ..
        }
    ));
}

#[test]
fn rejects_malformed_json() {
    let file = write_table(r#"{"version": 1, "types": [{"type": "Bool"}]}"#);

    let err = load_table(file.path()).unwrap_err();
    assert!(matches!(
        err,
        LoadError::Table {
            source: TableError::Json(_),
            ..
        }
    ));
}

#[test]
fn missing_file_names_path() {
    let err = load_table(Path::new("/nonexistent/types.json")).unwrap_err();

    assert!(matches!(err, LoadError::Read { .. }));
    assert!(
        err.to_string()
            .starts_with("failed to read '/nonexistent/types.json'")
    );
}
