pub mod map;
pub mod reduce;

/// Default key/value separator for intermediate lines, per the usual
/// streaming convention (the framework's sort stage splits on tab too).
pub const DEFAULT_SEP: &str = "\t";

pub struct KeyValue {
    pub key: String,
    pub value: String,
}

/// Splits a line at the first occurrence of `sep` into a key and a numeric
/// value. Returns `None` when the separator is absent or the remainder does
/// not parse as a float; anything else is not this function's business.
pub fn parse_kv(line: &str, sep: &str) -> Option<(String, f64)> {
    let (key, value) = line.split_once(sep)?;
    let value = value.trim().parse::<f64>().ok()?;
    Some((key.to_string(), value))
}

/// Renders an aggregate value. Debug formatting gives the shortest
/// round-tripping form and keeps a trailing `.0` on integral values, so a
/// mean of one element reproduces its input line exactly.
pub fn format_value(value: f64) -> String {
    format!("{:?}", value)
}
