pub mod genetic;
pub mod indicator;
pub mod phenotype;
