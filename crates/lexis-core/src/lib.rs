pub mod dictionary;
pub mod error;
pub mod language;
pub mod preprocess;

pub use lexis_types as types;
