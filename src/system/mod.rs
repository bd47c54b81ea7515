// System Layer
pub mod launcher;
pub mod prefs;

pub use launcher::{lang_from_href, locale_href, open_external};
#[allow(unused_imports)]
pub use prefs::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
