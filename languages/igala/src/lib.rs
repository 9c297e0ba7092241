pub mod dictionary;
pub mod loader;
pub mod pos;
pub mod processor;

pub use dictionary::IgalaDictionary;
pub use loader::IgalaLoader;
pub use pos::PosTagger;
pub use processor::IgalaProcessor;
