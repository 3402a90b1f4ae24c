pub mod error;
pub mod generator;
pub mod history;
pub mod models;

pub use error::LottoError;
