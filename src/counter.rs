#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    count: u64,
}

impl Counter {
    pub fn increment(&mut self) {
        self.count += 1;
    }

    pub fn value(&self) -> u64 {
        self.count
    }
}
