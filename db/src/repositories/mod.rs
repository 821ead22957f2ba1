pub mod lesson;
pub mod order;

pub use lesson::{LessonRepository, SpaceReservation};
pub use order::OrderRepository;
