pub mod digest;
pub mod error;
pub mod knot;
pub mod ring;
