pub mod basic;
pub mod mean;

/// A per-group accumulator. The reducer resets it when a new group starts,
/// pushes every parsed value of the group, and reads the result once the
/// group ends. `finish` is never called before at least one `push`.
pub trait Aggregate {
    fn reset(&mut self);
    fn push(&mut self, value: f64);
    fn finish(&self) -> f64;
}

pub fn get_aggregate(name: &str) -> Result<Box<dyn Aggregate>, anyhow::Error> {
    match name {
        "mean" => Ok(Box::new(mean::Mean::default())),
        "sum" => Ok(Box::new(basic::Sum::default())),
        "count" => Ok(Box::new(basic::Count::default())),
        "min" => Ok(Box::new(basic::Min::default())),
        "max" => Ok(Box::new(basic::Max::default())),
        _ => Err(anyhow::anyhow!("Unknown aggregate: {}", name)),
    }
}
