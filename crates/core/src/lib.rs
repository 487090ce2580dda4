//! petstore_core - functional core of the petstore front end.
//!
//! Pure types and functions shared by the web server and the client crate:
//! the pet vocabulary, form parsing and validation, the upstream error
//! taxonomy, and the flash state machine. Nothing in here performs I/O.

pub mod flash;
pub mod pet;
pub mod serde;
pub mod upstream;
