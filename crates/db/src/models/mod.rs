//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - DTOs for inserts where the row has server-generated columns

pub mod comment;
pub mod progress;
pub mod rating;
pub mod session;
pub mod user;
