//! Database models for all entities in the system.
//!
//! This module contains Diesel model definitions for all database tables,
//! including structs for querying, inserting, and updating records.

mod contact;

pub use contact::{Contact, NewContact, UpdateContact};
