//! Pure view-composition rules: what a visitor or administrator sees, in
//! what order, and under which availability rules. Nothing here touches
//! the store.

pub mod likes;
pub mod links;
pub mod ordering;
pub mod rating;
pub mod schedule;

pub use ordering::MoveDirection;
pub use schedule::TripWithDepartures;
