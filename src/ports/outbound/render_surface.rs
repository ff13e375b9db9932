use crate::alert_view::domain::AlertRecord;
use crate::alert_view::services::SummaryCounts;
use crate::application::state::PageView;

/// RenderSurface port - the presentation seam of the dashboard.
///
/// The application core pushes derived state through this trait and never
/// renders anything itself. Each call fully replaces the corresponding
/// region: rendering the same state twice must produce the same visible
/// result, with no accumulation.
pub trait RenderSurface {
    /// Renders the four summary counters.
    ///
    /// Adapters may animate the transition to the new values; the final
    /// displayed values must equal `counts` exactly. Purely cosmetic -
    /// animation never feeds back into state.
    fn render_summary(&self, counts: &SummaryCounts);

    /// Renders the visible page of the alert table, clearing prior rows.
    /// An empty view renders a single placeholder row.
    fn render_table(&self, view: &PageView<'_>);

    /// Renders the pagination control: page buttons, prev/next state, and
    /// the "Showing X-Y of Z" info text (or a no-data message).
    fn render_pagination(&self, view: &PageView<'_>);

    /// Renders the explicit pre-scan zero state: zeroed counters, a
    /// placeholder table row, and disabled navigation.
    fn render_zero_state(&self);

    /// Renders the detail view for one record: pretty-printed raw payload
    /// plus the playbook block when the record carries one.
    fn render_detail(&self, alert: &AlertRecord);

    /// Closes the detail view.
    fn close_detail(&self);

    /// Short user-facing notice tied to an explicit action (scan outcome).
    fn render_notice(&self, message: &str);

    /// Diagnostic for failures that keep the previous state; not shown as
    /// part of the dashboard itself.
    fn render_error(&self, message: &str);
}
