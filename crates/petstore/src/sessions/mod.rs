//! Flash storage backends.

mod inmemory;

pub use inmemory::FlashStore;
