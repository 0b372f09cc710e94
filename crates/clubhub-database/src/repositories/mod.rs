//! PostgreSQL implementations of the store traits.

pub mod board;
pub mod club;
pub mod event;

pub use board::BoardRepository;
pub use club::ClubRepository;
pub use event::EventRepository;
