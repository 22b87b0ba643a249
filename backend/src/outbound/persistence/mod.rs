//! Persistence adapters for the user repository port.

mod memory;

pub use memory::InMemoryUserRepository;
