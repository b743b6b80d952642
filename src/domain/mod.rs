pub mod assembler;
pub mod feature_row;
pub mod listing;
pub mod pricing;
pub mod variant;
