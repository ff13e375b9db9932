use crate::alert_view::domain::AlertRecord;
use crate::alert_view::services::pagination;
use crate::alert_view::services::SummaryCounts;

/// Default number of table rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// The dashboard's single mutable state object.
///
/// Created once per session in the zero state and mutated only through the
/// operations below; rendering and query code receive derived views and
/// never touch the fields directly.
///
/// Invariants:
/// - `current_page` is 1-based and always within `[1, total_pages]`
/// - the scan identity is set only by a successful scan and never cleared
///   within a session
/// - while the scan identity is absent, no alert query may be issued
#[derive(Debug, Clone)]
pub struct ViewState {
    scan_id: Option<String>,
    alerts: Vec<AlertRecord>,
    current_page: usize,
    page_size: usize,
    detail_index: Option<usize>,
}

/// Derived view of the currently visible page.
///
/// Re-derived on every render; nothing here is cached on the state.
#[derive(Debug)]
pub struct PageView<'a> {
    /// Records visible on the current page
    pub records: &'a [AlertRecord],
    pub page: usize,
    pub total_pages: usize,
    /// 0-based index of the first visible record
    pub start: usize,
    /// Exclusive end index of the visible slice
    pub end: usize,
    pub total: usize,
    /// Inclusive page-number window for the pagination buttons
    pub window: (usize, usize),
}

impl PageView<'_> {
    pub fn has_data(&self) -> bool {
        self.total > 0
    }

    pub fn prev_enabled(&self) -> bool {
        self.has_data() && self.page > 1
    }

    pub fn next_enabled(&self) -> bool {
        self.has_data() && self.page < self.total_pages
    }
}

impl ViewState {
    /// Creates the session-start zero state.
    pub fn new(page_size: usize) -> Self {
        Self {
            scan_id: None,
            alerts: Vec::new(),
            current_page: 1,
            page_size: page_size.max(1),
            detail_index: None,
        }
    }

    pub fn scan_id(&self) -> Option<&str> {
        self.scan_id.as_deref()
    }

    /// Records the identity of a freshly completed scan.
    ///
    /// Only the scan controller calls this, and only on a successful scan
    /// response. A `None` identity from a tolerant backend is stored as-is,
    /// leaving later queries unscoped.
    pub fn set_scan_id(&mut self, scan_id: Option<String>) {
        self.scan_id = scan_id;
    }

    /// Drops the loaded collection and resets paging, keeping the page size.
    pub fn reset_to_zero(&mut self) {
        self.alerts.clear();
        self.current_page = 1;
        self.detail_index = None;
    }

    /// Replaces the collection with a freshly fetched one; paging restarts
    /// at page 1.
    pub fn replace_alerts(&mut self, alerts: Vec<AlertRecord>) {
        self.alerts = alerts;
        self.current_page = 1;
        self.detail_index = None;
    }

    pub fn alerts(&self) -> &[AlertRecord] {
        &self.alerts
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Jumps to a page, clamped into the valid range.
    pub fn set_page(&mut self, page: usize) {
        let pages = pagination::total_pages(self.alerts.len(), self.page_size);
        self.current_page = pagination::clamp_page(page, pages);
    }

    /// Advances one page; saturates at the last page.
    pub fn next_page(&mut self) {
        self.set_page(self.current_page + 1);
    }

    /// Steps back one page; saturates at page 1.
    pub fn prev_page(&mut self) {
        self.set_page(self.current_page.saturating_sub(1));
    }

    /// Changes the rows-per-page setting. Always resets to page 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.current_page = 1;
    }

    /// Re-derives the aggregate severity counts from the full collection.
    pub fn summary(&self) -> SummaryCounts {
        SummaryCounts::from_alerts(&self.alerts)
    }

    /// Derives the visible page. The stored page is clamped down first if a
    /// collection or page-size change left it past the end.
    pub fn page_view(&self) -> PageView<'_> {
        let total = self.alerts.len();
        let total_pages = pagination::total_pages(total, self.page_size);
        let page = pagination::clamp_page(self.current_page, total_pages);
        let (start, end) = pagination::slice_bounds(total, page, self.page_size);
        PageView {
            records: &self.alerts[start..end],
            page,
            total_pages,
            start,
            end,
            total,
            window: pagination::page_window(page, total_pages),
        }
    }

    /// Opens the detail view for a 1-based row of the current page.
    ///
    /// Returns the selected record, by reference into the loaded collection
    /// rather than by re-fetch. Out-of-range rows leave the cursor closed.
    pub fn open_detail(&mut self, row: usize) -> Option<&AlertRecord> {
        if row == 0 {
            return None;
        }
        let view = self.page_view();
        let index = view.start + (row - 1);
        if index >= view.end {
            return None;
        }
        self.detail_index = Some(index);
        self.alerts.get(index)
    }

    /// Record currently shown in the detail view, if any.
    pub fn detail_record(&self) -> Option<&AlertRecord> {
        self.detail_index.and_then(|index| self.alerts.get(index))
    }

    pub fn close_detail(&mut self) {
        self.detail_index = None;
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
