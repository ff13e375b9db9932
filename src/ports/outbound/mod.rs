/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (network, terminal, etc.).
pub mod alert_gateway;
pub mod render_surface;
pub mod scan_indicator;

pub use alert_gateway::AlertGateway;
pub use render_surface::RenderSurface;
pub use scan_indicator::ScanIndicator;
