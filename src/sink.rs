use std::path::{Path, PathBuf};
use std::{fs, io};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::record::{ListingRecord, LISTING_HEADERS};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CsvWriterConfig {
    #[serde(default = "default_csv_delimiter")]
    pub delimiter: char,
    #[serde(default)]
    pub escape: Option<char>,
    #[serde(default)]
    pub flexible: bool,
    #[serde(default = "default_csv_terminator")]
    pub terminator: CsvTerminator,
}

impl Default for CsvWriterConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            escape: None,
            flexible: false,
            terminator: CsvTerminator::Any('\n'),
        }
    }
}

fn default_csv_delimiter() -> char {
    CsvWriterConfig::default().delimiter
}

fn default_csv_terminator() -> CsvTerminator {
    CsvWriterConfig::default().terminator
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum CsvTerminator {
    CRLF,
    Any(char),
}

impl From<CsvTerminator> for csv::Terminator {
    fn from(source: CsvTerminator) -> Self {
        match source {
            CsvTerminator::CRLF => Self::CRLF,
            CsvTerminator::Any(c) => Self::Any(c as u8),
        }
    }
}

impl From<&CsvWriterConfig> for csv::WriterBuilder {
    fn from(c: &CsvWriterConfig) -> Self {
        let mut builder = csv::WriterBuilder::new();
        // The header row is written explicitly from LISTING_HEADERS.
        builder.has_headers(false);
        builder.delimiter(c.delimiter as u8);
        builder.terminator(c.terminator.into());
        builder.flexible(c.flexible);
        if let Some(escape) = c.escape {
            builder.double_quote(false);
            builder.escape(escape as u8);
        } else {
            builder.double_quote(true);
        }
        builder
    }
}

/// Destination of the final table.
#[derive(Debug, Clone)]
pub enum Dest {
    File(PathBuf),
    Stdout,
}

impl Dest {
    /// When the table itself is written to stdout, user-facing notices must
    /// go to stderr so piped output stays valid CSV.
    pub fn owns_stdout(&self) -> bool {
        matches!(self, Self::Stdout)
    }
}

/// Anything the scraped records can be flushed to. Lets the driver and the
/// extraction logic be tested without touching the filesystem.
pub trait RecordSink {
    fn write_all(&mut self, records: &[ListingRecord]) -> Result<()>;
}

pub enum CsvSink {
    File(csv::Writer<fs::File>),
    Stdout(csv::Writer<io::Stdout>),
}

impl CsvSink {
    pub fn file<P: AsRef<Path>>(path: P, conf: &CsvWriterConfig) -> Result<Self> {
        let wtr = csv::WriterBuilder::from(conf).from_path(path.as_ref())?;
        Ok(Self::File(wtr))
    }

    pub fn stdout(conf: &CsvWriterConfig) -> Self {
        Self::Stdout(csv::WriterBuilder::from(conf).from_writer(io::stdout()))
    }
}

impl RecordSink for CsvSink {
    fn write_all(&mut self, records: &[ListingRecord]) -> Result<()> {
        match self {
            Self::File(wtr) => write_table(wtr, records),
            Self::Stdout(wtr) => write_table(wtr, records),
        }
    }
}

fn write_table<W: io::Write>(wtr: &mut csv::Writer<W>, records: &[ListingRecord]) -> Result<()> {
    wtr.write_record(&*LISTING_HEADERS)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Derives the output file name from the search query, with whitespace
/// normalized to underscores.
pub fn output_path(query: &str) -> PathBuf {
    PathBuf::from(format!("{}.csv", query.trim().replace(' ', "_")))
}

/// Writes header and records to `dest`, or nothing at all when there are no
/// records; no file is created in that case. Returns whether anything was
/// written.
pub fn export(records: &[ListingRecord], dest: &Dest, conf: &CsvWriterConfig) -> Result<bool> {
    if records.is_empty() {
        return Ok(false);
    }
    let mut sink = match dest {
        Dest::File(path) => CsvSink::file(path, conf)?,
        Dest::Stdout => CsvSink::stdout(conf),
    };
    sink.write_all(records)?;
    Ok(true)
}
