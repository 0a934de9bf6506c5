// Static Content Store: profile, links, skills, about text, contact info.
// Constructed once at startup and injected through AppState.

pub mod store;
pub mod validation;

pub use store::ContentStore;
