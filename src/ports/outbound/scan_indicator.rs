/// ScanIndicator port for the blocking "scanning" overlay.
///
/// `begin` is called before the scan request goes out and `end` is
/// guaranteed to run on both success and failure, so the overlay can never
/// be left up by a failed scan.
pub trait ScanIndicator {
    /// Shows the scanning overlay with a status message.
    fn begin(&self, message: &str);

    /// Clears the overlay unconditionally.
    fn end(&self);
}
