//! # File I/O Module
//!
//! This module provides file reading and writing utilities for the processor.
//! It encapsulates synchronous file operations.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

/// File I/O operations for the processor.
///
/// This struct provides static methods for reading and writing files.
pub struct FileIO;

impl FileIO {
  /// Opens a file for line-by-line reading.
  ///
  /// The handle is owned by the returned iterator and closed when it is
  /// dropped, however far it was read.
  pub fn open_lines(path: &Path) -> Result<LossyLines<BufReader<File>>> {
    let file = File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    Ok(LossyLines::new(BufReader::new(file)))
  }

  /// Reads the whole file as raw bytes.
  pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))
  }

  /// Write file content.
  pub fn write_file(path: &Path, content: &[u8]) -> Result<()> {
    std::fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
  }
}

/// Iterator over the lines of a reader.
///
/// Like [`BufRead::lines`], `\n` and `\r\n` terminators are stripped, but
/// invalid UTF-8 is replaced rather than reported, so a stray Latin-1 byte in
/// a header shows up as a mismatch instead of aborting the file.
pub struct LossyLines<R> {
  reader: R,
  buf: Vec<u8>,
}

impl<R: BufRead> LossyLines<R> {
  pub const fn new(reader: R) -> Self {
    Self { reader, buf: Vec::new() }
  }
}

impl<R: BufRead> Iterator for LossyLines<R> {
  type Item = io::Result<String>;

  fn next(&mut self) -> Option<Self::Item> {
    self.buf.clear();
    match self.reader.read_until(b'\n', &mut self.buf) {
      Ok(0) => None,
      Ok(_) => {
        if self.buf.last() == Some(&b'\n') {
          self.buf.pop();
          if self.buf.last() == Some(&b'\r') {
            self.buf.pop();
          }
        }
        Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
      }
      Err(e) => Some(Err(e)),
    }
  }
}
