pub mod movements;
pub mod nutrition;
pub mod records;
pub mod sessions;
pub mod weight;
