use super::Aggregate;

#[derive(Default)]
pub struct Sum {
    sum: f64,
}

impl Aggregate for Sum {
    fn reset(&mut self) {
        self.sum = 0.0;
    }

    fn push(&mut self, value: f64) {
        self.sum += value;
    }

    fn finish(&self) -> f64 {
        self.sum
    }
}

#[derive(Default)]
pub struct Count {
    count: u64,
}

impl Aggregate for Count {
    fn reset(&mut self) {
        self.count = 0;
    }

    fn push(&mut self, _value: f64) {
        self.count += 1;
    }

    fn finish(&self) -> f64 {
        self.count as f64
    }
}

pub struct Min {
    min: f64,
}

impl Default for Min {
    fn default() -> Min {
        Min { min: f64::INFINITY }
    }
}

impl Aggregate for Min {
    fn reset(&mut self) {
        self.min = f64::INFINITY;
    }

    fn push(&mut self, value: f64) {
        self.min = self.min.min(value);
    }

    fn finish(&self) -> f64 {
        self.min
    }
}

pub struct Max {
    max: f64,
}

impl Default for Max {
    fn default() -> Max {
        Max { max: f64::NEG_INFINITY }
    }
}

impl Aggregate for Max {
    fn reset(&mut self) {
        self.max = f64::NEG_INFINITY;
    }

    fn push(&mut self, value: f64) {
        self.max = self.max.max(value);
    }

    fn finish(&self) -> f64 {
        self.max
    }
}
