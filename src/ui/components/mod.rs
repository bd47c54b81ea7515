// UI Components
pub mod command_bar;
pub mod footer;
pub mod header;
pub mod not_found;
pub mod quick_links;
pub mod radio;
pub mod status_bar;
pub mod warning;

// Re-export components for convenience
pub use command_bar::CommandBar;
pub use footer::PageFooter;
pub use header::PageHeader;
pub use not_found::NotFoundScreen;
pub use quick_links::{LinkItem, QuickLinksBar, QuickLinksDropdown, QuickLinksState, QuickMenu};
pub use radio::RadioGroup;
pub use status_bar::StatusBar;
pub use warning::WarningScreen;
