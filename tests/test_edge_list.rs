/// File-based tests for edge list reading
use anyhow::Result;
use flate2::write::GzEncoder;
use flate2::Compression;
use shipgraph::edge_list::{read_edge_list, ReadOptions};
use shipgraph::{EdgeRecord, Graph};
use std::fs;
use std::io::Write;
use tempfile::TempDir;

#[test]
fn test_read_plain_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("network.txt");
    fs::write(&path, "A,B,4\nB,C,2\nA,C,5\nC,D,1\n")?;

    let records = read_edge_list(&path, &ReadOptions::default())?;
    assert_eq!(records.len(), 4);
    assert_eq!(records[0], EdgeRecord::new("A", "B", 4));

    let graph: Graph = records.into_iter().collect();
    assert!(graph.is_connected());
    assert_eq!(graph.construct_mst(), 7);
    Ok(())
}

#[test]
fn test_read_gzip_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("network.txt.gz");

    let mut encoder = GzEncoder::new(fs::File::create(&path)?, Compression::default());
    encoder.write_all(b"A,B,1\nB,C,2\nA,C,3\n")?;
    encoder.finish()?;

    let records = read_edge_list(&path, &ReadOptions::default())?;
    let graph: Graph = records.into_iter().collect();
    assert_eq!(graph.construct_mst(), 3);
    Ok(())
}

#[test]
fn test_semicolon_delimiter() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("network.csv");
    fs::write(&path, "Hamburg; Rotterdam; 500\nRotterdam; Antwerp; 100\n")?;

    let options = ReadOptions {
        delimiter: ';',
        ..ReadOptions::default()
    };
    let records = read_edge_list(&path, &options)?;
    assert_eq!(records[1], EdgeRecord::new("Rotterdam", "Antwerp", 100));
    Ok(())
}

#[test]
fn test_missing_file_error_names_path() {
    let err = read_edge_list("/nonexistent/network.txt", &ReadOptions::default()).unwrap_err();
    assert!(
        format!("{err:#}").contains("/nonexistent/network.txt"),
        "got: {err:#}"
    );
}

#[test]
fn test_malformed_record_fails_unless_skipped() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("network.txt");
    fs::write(&path, "A,B,4\nB,C\nC,D,1\n")?;

    let err = read_edge_list(&path, &ReadOptions::default()).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("line 2"), "got: {message}");

    let lenient = ReadOptions {
        skip_malformed: true,
        ..ReadOptions::default()
    };
    let records = read_edge_list(&path, &lenient)?;
    assert_eq!(records.len(), 2);
    Ok(())
}
