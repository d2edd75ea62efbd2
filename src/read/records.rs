use std::io::BufRead;

use regex::Regex;

use crate::error::Result;
use crate::read::open_file;
use crate::record::Record;

/// Whitespace separated `key value` pairs.
pub const DEFAULT_REGEX: &str = r"^\s*(?P<key>\S+)\s+(?P<value>\S+)";

/// Reads lines of text into `Record`s.
///
/// Every named capture group of `regex` becomes a text field of the record,
/// named after the group.  Lines where the regex does not match are skipped.
#[derive(Debug, Builder)]
pub struct RecordReader {
    #[builder(default = "self.default_regex()")]
    regex: Regex,
}

impl RecordReaderBuilder {
    fn default_regex(&self) -> Regex {
        Regex::new(DEFAULT_REGEX).expect("default regex compiles")
    }
}

impl Default for RecordReader {
    fn default() -> Self {
        Self {
            regex: RecordReaderBuilder::default().default_regex(),
        }
    }
}

impl RecordReader {
    pub fn read(&self, path: &str) -> Result<Vec<Record>> {
        let mut vec = Vec::new();
        for line in open_file(path)?.lines() {
            match line {
                Ok(as_string) => {
                    if let Some(record) = self.parse_line(&as_string) {
                        vec.push(record);
                    }
                }
                Err(error) => error!("{}", error),
            }
        }
        debug!("Read {} records from {}", vec.len(), path);
        Ok(vec)
    }

    fn parse_line(&self, line: &str) -> Option<Record> {
        let cap = match self.regex.captures(line) {
            Some(cap) => cap,
            None => {
                debug!("Regex does not match '{}'", line);
                return None;
            }
        };
        let mut record = Record::new();
        for name in self.regex.capture_names().flatten() {
            if let Some(m) = cap.name(name) {
                record = record.with(name, m.as_str());
            }
        }
        Some(record)
    }
}
