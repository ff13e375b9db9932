pub mod counter;
pub mod indicator;
pub mod renderer;

pub use indicator::SpinnerIndicator;
pub use renderer::ConsoleRenderer;
