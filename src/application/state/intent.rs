use crate::application::dto::FilterSelection;

/// User intents the dashboard reacts to.
///
/// Every interaction surfaces as one of these values and flows through a
/// single dispatch point, keeping the reaction logic testable independent
/// of any rendering surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserIntent {
    /// Trigger a scan of logs staged on the scanning host
    ScanLocal,
    /// Trigger a scan of logs in the cloud object store
    ScanCloud,
    /// Apply a new filter selection and reload
    ApplyFilters(FilterSelection),
    /// Clear all filters and reload
    ResetFilters,
    /// Jump to a specific 1-based page
    GoToPage(usize),
    NextPage,
    PrevPage,
    /// Change rows per page (resets to page 1)
    SetPageSize(usize),
    /// Open the detail view for a 1-based row of the current page
    OpenDetail(usize),
    CloseDetail,
}
