/// Delimited edge-list input
///
/// One edge per line: `source,destination,weight`. Blank lines and `#` comments are
/// ignored. Records are validated here so the graph never sees malformed input.
use anyhow::{anyhow, bail, Context, Result};
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub use crate::graph::EdgeRecord;
use crate::graph::Weight;

/// Options controlling how edge records are parsed
#[derive(Debug, Clone)]
pub struct ReadOptions {
    pub delimiter: char,
    /// Warn about and drop malformed records instead of failing
    pub skip_malformed: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        ReadOptions {
            delimiter: ',',
            skip_malformed: false,
        }
    }
}

/// Open an edge list, transparently decompressing gzip/bgzip by extension
pub fn open_edge_input<P: AsRef<Path>>(path: P) -> Result<Box<dyn BufRead>> {
    let path = path.as_ref();
    let file = File::open(path)?;

    let is_compressed = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz" || ext == "bgz")
        .unwrap_or(false);

    if is_compressed {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Parse a single `source<delim>destination<delim>weight` record
pub fn parse_record(line: &str, delimiter: char) -> Result<EdgeRecord> {
    let fields: Vec<&str> = line.split(delimiter).map(str::trim).collect();
    if fields.len() != 3 {
        bail!(
            "expected 3 fields (source, destination, weight), found {}",
            fields.len()
        );
    }

    let source = fields[0];
    let destination = fields[1];
    if source.is_empty() || destination.is_empty() {
        bail!("empty node label");
    }

    let weight: Weight = fields[2]
        .parse()
        .map_err(|e| anyhow!("invalid weight '{}': {e}", fields[2]))?;

    Ok(EdgeRecord::new(source, destination, weight))
}

/// Read all edge records from a buffered reader
pub fn read_edges<R: BufRead>(reader: R, options: &ReadOptions) -> Result<Vec<EdgeRecord>> {
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.with_context(|| format!("Failed to read line {line_number}"))?;

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match parse_record(trimmed, options.delimiter) {
            Ok(record) => records.push(record),
            Err(e) if options.skip_malformed => {
                log::warn!("Skipping line {line_number}: {e}");
                skipped += 1;
            }
            Err(e) => return Err(e.context(format!("Malformed edge record on line {line_number}"))),
        }
    }

    log::debug!("Parsed {} edge records ({} skipped)", records.len(), skipped);
    Ok(records)
}

/// Read an edge list file (plain or gzip-compressed)
pub fn read_edge_list<P: AsRef<Path>>(path: P, options: &ReadOptions) -> Result<Vec<EdgeRecord>> {
    let path = path.as_ref();
    let reader = open_edge_input(path)
        .with_context(|| format!("Failed to open edge list {}", path.display()))?;
    let records = read_edges(reader, options)
        .with_context(|| format!("Failed to read edge list {}", path.display()))?;

    log::info!("Read {} edges from {}", records.len(), path.display());
    Ok(records)
}
