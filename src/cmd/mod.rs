pub mod hash;
pub mod product;
