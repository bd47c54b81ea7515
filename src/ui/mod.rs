// UI Layer
pub mod components;
pub mod i18n;
pub mod layout;
pub mod theme;

// Re-export layout types for convenience
pub use layout::{LayoutManager, LayoutMode};

// Re-export components
pub use components::{
    CommandBar, LinkItem, NotFoundScreen, PageFooter, PageHeader, QuickLinksBar,
    QuickLinksDropdown, QuickLinksState, QuickMenu, RadioGroup, StatusBar, WarningScreen,
};
pub use i18n::{I18n, Language, MessageKey, TextKey};
pub use theme::{Theme, ThemeManager};
