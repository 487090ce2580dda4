pub mod error;
pub mod flash;
pub mod pages;
pub mod pets;

pub use error::AppError;
