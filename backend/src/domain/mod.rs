//! Domain primitives and the user store service.
//!
//! Public surface:
//! - [`UserRecord`]: username plus password (plaintext inbound, hash at rest).
//! - [`UserStore`]: lookup, existence, creation and login validation.
//! - [`Envelope`], [`StoreFailure`] and [`FailureKind`]: the tagged outcome
//!   every store operation returns.
//! - [`DomainError`] and [`ErrorCode`]: request-level error payload.
//! - [`TraceId`]: per-request correlation identifier.

pub mod error;
pub mod outcome;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_store;

pub use self::error::{DomainError, ErrorCode};
pub use self::outcome::{Envelope, FailureKind, StoreFailure, StoreResult};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::UserRecord;
pub use self::user_store::UserStore;
