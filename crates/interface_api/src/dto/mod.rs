//! Request and response DTOs

pub mod actor;
pub mod query;

pub use actor::ActorDto;
pub use query::{FullNameQuery, NameQuery};
