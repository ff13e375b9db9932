use std::sync::{Arc, Mutex};
use trailwatch::prelude::*;

/// Mock ScanIndicator counting begin/end pairs.
///
/// The overlay contract is that `end` runs on every path out of a scan, so
/// tests assert the two counts stay balanced.
#[derive(Default, Clone)]
pub struct MockScanIndicator {
    begins: Arc<Mutex<Vec<String>>>,
    ends: Arc<Mutex<usize>>,
}

impl MockScanIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_count(&self) -> usize {
        self.begins.lock().unwrap().len()
    }

    pub fn end_count(&self) -> usize {
        *self.ends.lock().unwrap()
    }

    pub fn is_balanced(&self) -> bool {
        self.begin_count() == self.end_count()
    }
}

impl ScanIndicator for MockScanIndicator {
    fn begin(&self, message: &str) {
        self.begins.lock().unwrap().push(message.to_string());
    }

    fn end(&self) {
        *self.ends.lock().unwrap() += 1;
    }
}
