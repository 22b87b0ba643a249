//! Domain ports for the hexagonal boundary.
//!
//! Driving ports describe what inbound adapters may ask of the domain;
//! driven ports describe how the domain expects to reach its collaborators.
//! Each driven port exposes strongly typed errors so adapters map failures
//! into predictable variants instead of returning `anyhow::Result`.

mod user_command;
mod user_repository;

pub use user_command::UserCommand;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
