//! Core types for the todolist service.
//!
//! This crate holds the todo record type, the repository trait implemented
//! by the storage backends, and shared serde helpers. It performs no I/O.

pub mod serde;
pub mod storage;
pub mod todo;
