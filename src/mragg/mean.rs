use super::Aggregate;

/// Arithmetic mean over a group, as a running sum and count.
#[derive(Default)]
pub struct Mean {
    sum: f64,
    count: u64,
}

impl Aggregate for Mean {
    fn reset(&mut self) {
        self.sum = 0.0;
        self.count = 0;
    }

    fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    fn finish(&self) -> f64 {
        // The reducer never finishes an empty group, but keep the division
        // guarded rather than relying on the caller.
        if self.count == 0 {
            return 0.0;
        }
        self.sum / self.count as f64
    }
}
