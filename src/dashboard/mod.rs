//! The rendering core: snapshot in, presentation surface out. No GUI types.

mod renderer;
mod sources;
mod tabs;
mod zones;

pub use renderer::DashboardRenderer;
pub use tabs::TabController;
