pub mod favorites;
pub mod history;
pub mod lookup;
pub mod service;
pub mod word;

pub use lookup::LookupResult;
pub use service::LookupService;
pub use word::{Word, WordError};
