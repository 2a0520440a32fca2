use crate::core::instance_header::InstanceHeader;
use crate::core::instances::{DenseInstance, Instance};
use crate::streams::arff::parser::{is_comment_or_empty, parse_header, parse_instance_values};
use crate::streams::stream::Stream;
use std::fs::File;
use std::io::{BufRead, BufReader, Error, Seek, SeekFrom};
use std::path::PathBuf;
use std::sync::Arc;

/// A data row read ahead of time. `line` is 1-based within the data section.
#[derive(Debug)]
struct PendingRow {
    line: usize,
    text: String,
}

/// Reads instances lazily from an ARFF file, one data row at a time.
///
/// One row is always read ahead so that `has_more_instances` does not touch
/// the file. A read error ends the stream.
#[derive(Debug)]
pub struct ArffFileStream {
    path: PathBuf,
    reader: BufReader<File>,
    header: Arc<InstanceHeader>,
    data_start_pos: u64,
    lines_read: usize,
    pending: Option<PendingRow>,
    exhausted: bool,
}

impl Stream for ArffFileStream {
    fn header(&self) -> &InstanceHeader {
        &self.header
    }

    fn has_more_instances(&self) -> bool {
        self.pending.is_some()
    }

    /// Malformed rows are reported on stderr and skipped.
    fn next_instance(&mut self) -> Option<Box<dyn Instance>> {
        while let Some(row) = self.pending.take() {
            if let Err(e) = self.advance() {
                eprintln!("Stopped reading {} after data line {}: {e}", self.path.display(), row.line);
                self.exhausted = true;
            }

            match parse_instance_values(&self.header, &row.text) {
                Ok(values) => {
                    return Some(Box::new(DenseInstance::new(Arc::clone(&self.header), values, 1.0)));
                }
                Err(e) => eprintln!("Skipping data line {} '{}': {e}", row.line, row.text),
            }
        }
        None
    }

    fn restart(&mut self) -> Result<(), Error> {
        let mut reader = BufReader::new(File::open(&self.path)?);
        reader.seek(SeekFrom::Start(self.data_start_pos))?;
        self.reader = reader;
        self.lines_read = 0;
        self.exhausted = false;
        self.advance()
    }
}

impl ArffFileStream {
    /// Opens `path` and parses its header. `class_index` defaults to the last attribute.
    pub fn new(path: PathBuf, class_index: Option<usize>) -> Result<Self, Error> {
        let mut reader = BufReader::new(File::open(&path)?);
        let (header, data_start_pos) = parse_header(&mut reader, class_index)?;

        let mut stream = ArffFileStream {
            path,
            reader,
            header: Arc::new(header),
            data_start_pos,
            lines_read: 0,
            pending: None,
            exhausted: false,
        };
        stream.advance()?;
        Ok(stream)
    }

    /// Reads up to the next data row, skipping comments and blank lines.
    fn advance(&mut self) -> Result<(), Error> {
        self.pending = None;
        let mut text = String::new();
        while !self.exhausted {
            text.clear();
            if self.reader.read_line(&mut text)? == 0 {
                self.exhausted = true;
                break;
            }
            self.lines_read += 1;
            if !is_comment_or_empty(&text) {
                self.pending = Some(PendingRow {
                    line: self.lines_read,
                    text: text.trim().to_string(),
                });
                break;
            }
        }
        Ok(())
    }
}
