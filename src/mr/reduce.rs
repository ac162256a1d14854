use std::io;
use std::io::{BufRead, Write};

use crate::mragg::Aggregate;

use super::{format_value, parse_kv};

/// Consumes key-sorted `key<SEP>value` lines, folds each run of consecutive
/// lines sharing a key into the configured aggregate, and emits one
/// `key<SEP>result` line per group.
///
/// Sorted input is the hosting framework's contract and is not verified
/// here; with unsorted input a key simply yields one group per run. Only
/// the current key and the accumulator are held, never a whole group.
pub struct Reducer {
    sep: String,
    agg: Box<dyn Aggregate>,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ReduceStats {
    pub groups: u64,
    pub skipped: u64,
}

impl Reducer {
    pub fn new(sep: impl Into<String>, agg: Box<dyn Aggregate>) -> Reducer {
        Reducer {
            sep: sep.into(),
            agg,
        }
    }

    fn emit<W: Write>(&self, output: &mut W, key: &str) -> io::Result<()> {
        writeln!(output, "{}{}{}", key, self.sep, format_value(self.agg.finish()))
    }

    /// Single forward pass. Lines that fail to parse are dropped and
    /// counted; parse failure never masks an I/O error, which aborts.
    /// A group is only emitted after at least one value was pushed into it,
    /// so the accumulator can never finish empty.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<ReduceStats, anyhow::Error> {
        let mut stats = ReduceStats::default();
        let mut current: Option<String> = None;

        for line in input.lines() {
            let line = line?;
            let Some((key, value)) = parse_kv(&line, &self.sep) else {
                stats.skipped += 1;
                continue;
            };
            if current.as_deref() == Some(key.as_str()) {
                self.agg.push(value);
            } else {
                if let Some(prev) = current.take() {
                    self.emit(output, &prev)?;
                    stats.groups += 1;
                }
                self.agg.reset();
                self.agg.push(value);
                current = Some(key);
            }
        }
        if let Some(prev) = current.take() {
            self.emit(output, &prev)?;
            stats.groups += 1;
        }
        Ok(stats)
    }
}
