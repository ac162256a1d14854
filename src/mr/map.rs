use std::io::{Read, Write};

use csv::StringRecord;

use super::KeyValue;

/// Projects wide CSV records down to one key/value pair per record, written
/// as separator-delimited lines in input order.
pub struct Mapper {
    key_index: usize,
    value_index: usize,
    sep: String,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct MapStats {
    pub emitted: u64,
    pub skipped: u64,
}

impl Mapper {
    pub fn new(key_index: usize, value_index: usize, sep: impl Into<String>) -> Mapper {
        Mapper {
            key_index,
            value_index,
            sep: sep.into(),
        }
    }

    fn project(&self, record: &StringRecord) -> Option<KeyValue> {
        let key = record.get(self.key_index)?;
        let value = record.get(self.value_index)?;
        Some(KeyValue {
            key: key.to_string(),
            value: value.to_string(),
        })
    }

    /// One pass over `input` as headerless CSV. Records too narrow to carry
    /// both configured columns are skipped and counted, not fatal; I/O
    /// errors abort the pass.
    pub fn run<R: Read, W: Write>(&self, input: R, output: &mut W) -> Result<MapStats, anyhow::Error> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(input);

        let mut stats = MapStats::default();
        for result in reader.records() {
            let record = match result {
                Ok(record) => record,
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(_) => {
                    stats.skipped += 1;
                    continue;
                }
            };
            match self.project(&record) {
                Some(kv) => {
                    writeln!(output, "{}{}{}", kv.key, self.sep, kv.value)?;
                    stats.emitted += 1;
                }
                None => stats.skipped += 1,
            }
        }
        Ok(stats)
    }
}
