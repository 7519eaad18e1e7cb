pub mod furniture;
pub mod quotations;
