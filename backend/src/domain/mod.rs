//! Domain primitives, ports, and services.
//!
//! Purpose: define the strongly typed user entity, the validation guarding
//! it, and the service orchestrating its lifecycle. Types stay immutable and
//! transport agnostic; inbound adapters own the HTTP-facing DTOs and status
//! mapping.

pub mod error;
pub mod ports;
pub mod user;
pub mod user_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::user::{
    EmailAddress, Password, User, UserDraft, UserId, UserName, UserProfile, UserValidationError,
};
pub use self::user_service::UserService;
