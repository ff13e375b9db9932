mod mock_alert_gateway;
mod mock_render_surface;
mod mock_scan_indicator;

pub use mock_alert_gateway::MockAlertGateway;
pub use mock_render_surface::{MockRenderSurface, RenderEvent};
pub use mock_scan_indicator::MockScanIndicator;
