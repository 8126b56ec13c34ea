pub mod load_usecase;

pub use load_usecase::{DblpLoader, LoadReport};
