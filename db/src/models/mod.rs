pub mod lesson;
pub mod order;

pub use lesson::Lesson;
pub use order::Order;
