use crate::ports::outbound::ScanIndicator;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;
use std::time::Duration;

/// SpinnerIndicator adapter - the terminal rendition of the blocking
/// "scanning" overlay.
///
/// Uses an indicatif spinner on stderr so it never interleaves with the
/// dashboard output on stdout. `end` always clears the spinner, even after
/// a failed scan.
pub struct SpinnerIndicator {
    spinner: RefCell<Option<ProgressBar>>,
}

impl SpinnerIndicator {
    pub fn new() -> Self {
        Self {
            spinner: RefCell::new(None),
        }
    }
}

impl Default for SpinnerIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanIndicator for SpinnerIndicator {
    fn begin(&self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("   {spinner:.green} {msg}")
                .expect("Failed to set spinner template"),
        );
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));
        *self.spinner.borrow_mut() = Some(spinner);
    }

    fn end(&self) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
        }
    }
}
