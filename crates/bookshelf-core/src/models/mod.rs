pub mod analysis;
pub mod confidence;
pub mod document;
pub mod suggestion;
pub mod term;
