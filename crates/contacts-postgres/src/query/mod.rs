//! Database query repositories for all entities in the system.
//!
//! Repositories are traits implemented for [`PgConnection`], so any pooled
//! connection (including [`PgConn`]) can call them directly.
//!
//! [`PgConnection`]: crate::PgConnection
//! [`PgConn`]: crate::PgConn

mod contact;

pub use contact::ContactRepository;
