use super::Config;
use crate::toc::ColumnSplit;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

#[test]
fn test_empty_file_gives_defaults() {
    let cfg = Config::parse("").unwrap();
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.selector, "h1, h2");
    assert_eq!(cfg.column_capacity, 24);
    assert_eq!(cfg.column_split(), ColumnSplit::AfterAppend);
    assert_eq!(cfg.panel_ids().trigger, "toc_button");
    assert_eq!(cfg.panel_ids().panel, "toc");
}

#[test]
fn test_partial_file_overrides_some_keys() {
    let cfg = Config::parse("selector = \"h2, h3\"\nnumerate = true\nstrict_columns = true\n").unwrap();
    assert_eq!(cfg.selector, "h2, h3");
    assert!(cfg.numerate);
    assert_eq!(cfg.column_split(), ColumnSplit::AtCapacity);
    assert_eq!(cfg.id_prefix, "toc_e");
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "column_capacity = 10\npanel_id = \"outline\"").unwrap();

    let cfg = Config::load_from(file.path());
    assert_eq!(cfg.column_capacity, 10);
    assert_eq!(cfg.panel_id, "outline");
}

#[test]
fn test_missing_or_invalid_file_falls_back() {
    let missing = Config::load_from(Path::new("/nonexistent/tocbar.toml"));
    assert_eq!(missing, Config::default());

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "column_capacity = \"many\"").unwrap();
    assert_eq!(Config::load_from(file.path()), Config::default());
}
