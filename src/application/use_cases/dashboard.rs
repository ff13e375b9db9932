use crate::alert_view::domain::ScanTarget;
use crate::application::dto::{AlertsRequest, FilterSelection};
use crate::application::state::{UserIntent, ViewState};
use crate::application::use_cases::request_sequence::RequestSequence;
use crate::ports::outbound::{AlertGateway, RenderSurface, ScanIndicator};
use crate::shared::error::DashboardError;
use crate::shared::Result;

/// DashboardController - the dashboard's single reaction point.
///
/// Owns the session [`ViewState`] and maps every [`UserIntent`] to a state
/// transition followed by the matching render calls. All infrastructure is
/// injected generically, so the whole reaction logic runs against mocks in
/// tests.
///
/// # Type Parameters
/// * `G` - AlertGateway implementation
/// * `I` - ScanIndicator implementation
/// * `R` - RenderSurface implementation
pub struct DashboardController<G, I, R> {
    gateway: G,
    indicator: I,
    renderer: R,
    state: ViewState,
    filters: FilterSelection,
    requests: RequestSequence,
}

impl<G, I, R> DashboardController<G, I, R>
where
    G: AlertGateway,
    I: ScanIndicator,
    R: RenderSurface,
{
    /// Creates a controller in the session-start zero state.
    pub fn new(gateway: G, indicator: I, renderer: R, page_size: usize) -> Self {
        Self {
            gateway,
            indicator,
            renderer,
            state: ViewState::new(page_size),
            filters: FilterSelection::default(),
            requests: RequestSequence::new(),
        }
    }

    /// Seeds the session's starting filter selection, e.g. a configured
    /// default hours-back window. Later [`UserIntent::ApplyFilters`] and
    /// [`UserIntent::ResetFilters`] replace it like any other selection.
    pub fn with_filters(mut self, filters: FilterSelection) -> Self {
        self.filters = filters;
        self
    }

    /// Current session state, for inspection and tests.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn filters(&self) -> &FilterSelection {
        &self.filters
    }

    /// Renders the initial pre-scan view. Never touches the network: alert
    /// data is only ever fetched after an explicit scan.
    pub fn show_initial(&self) {
        self.renderer.render_zero_state();
    }

    /// Routes one user intent to its state transition.
    pub async fn dispatch(&mut self, intent: UserIntent) -> Result<()> {
        match intent {
            UserIntent::ScanLocal => self.run_scan(ScanTarget::Local).await,
            UserIntent::ScanCloud => self.run_scan(ScanTarget::CloudStore).await,
            UserIntent::ApplyFilters(selection) => {
                self.filters = selection;
                self.load_alerts().await
            }
            UserIntent::ResetFilters => {
                self.filters = FilterSelection::default();
                self.load_alerts().await
            }
            UserIntent::GoToPage(page) => {
                self.state.set_page(page);
                self.render_collection();
                Ok(())
            }
            UserIntent::NextPage => {
                self.state.next_page();
                self.render_collection();
                Ok(())
            }
            UserIntent::PrevPage => {
                self.state.prev_page();
                self.render_collection();
                Ok(())
            }
            UserIntent::SetPageSize(size) => {
                self.state.set_page_size(size);
                self.render_collection();
                Ok(())
            }
            UserIntent::OpenDetail(row) => {
                match self.state.open_detail(row) {
                    Some(alert) => self.renderer.render_detail(alert),
                    None => self
                        .renderer
                        .render_notice("No such row on the current page."),
                }
                Ok(())
            }
            UserIntent::CloseDetail => {
                self.state.close_detail();
                self.renderer.close_detail();
                Ok(())
            }
        }
    }

    /// Triggers a remote scan and, on success, reloads the alert view.
    ///
    /// The scanning indicator is released on every path out of this
    /// function. A failed scan leaves the scan identity and the loaded view
    /// untouched and is never retried automatically.
    pub async fn run_scan(&mut self, target: ScanTarget) -> Result<()> {
        self.indicator
            .begin(&format!("Scanning {}...", target.label()));
        let outcome = self.gateway.trigger_scan(target).await;
        self.indicator.end();

        match outcome {
            Ok(report) => {
                // The only place a scan identity is ever set
                self.state.set_scan_id(report.scan_id.clone());
                self.renderer.render_notice(&format!(
                    "Scan complete. Alerts detected: {}",
                    report.alerts_detected
                ));
                // Scan completion strictly precedes the reload it triggers
                self.load_alerts().await
            }
            Err(error) => {
                self.renderer.render_notice("Error while scanning logs.");
                self.renderer.render_error(
                    &DashboardError::ScanFailed {
                        endpoint: target.endpoint().to_string(),
                        details: error.to_string(),
                    }
                    .to_string(),
                );
                Ok(())
            }
        }
    }

    /// Reloads the alert collection for the active scan and filters.
    ///
    /// With no scan identity this transitions to the zero state without any
    /// network call: unscoped historic data must never be shown. A failed
    /// query logs a diagnostic and preserves the previous view untouched.
    pub async fn load_alerts(&mut self) -> Result<()> {
        if self.state.scan_id().is_none() {
            self.state.reset_to_zero();
            self.renderer.render_zero_state();
            return Ok(());
        }

        let ticket = self.requests.begin();
        let request = AlertsRequest::from_selection(&self.filters, self.state.scan_id());

        match self.gateway.fetch_alerts(&request).await {
            Ok(alerts) => {
                if !self.requests.is_current(ticket) {
                    // A newer request owns the view now; drop this response
                    return Ok(());
                }
                self.state.replace_alerts(alerts);
                self.renderer.render_summary(&self.state.summary());
                self.render_collection();
                Ok(())
            }
            Err(error) => {
                if self.requests.is_current(ticket) {
                    self.renderer.render_error(
                        &DashboardError::AlertQueryFailed {
                            details: error.to_string(),
                        }
                        .to_string(),
                    );
                }
                Ok(())
            }
        }
    }

    /// Repaints the table and pagination from current state. No re-fetch,
    /// no counter re-animation.
    fn render_collection(&self) {
        let view = self.state.page_view();
        self.renderer.render_table(&view);
        self.renderer.render_pagination(&view);
    }
}
