// Data Models
pub mod form;
pub mod option;

pub use form::FormModel;
pub use option::{RadioGroupConfig, RadioOption, SelectionChange};
