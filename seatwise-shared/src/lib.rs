pub mod ids;
pub mod models;
pub mod pii;

pub use ids::{FamilyId, PassengerId};
pub use models::events::{AllocationEvent, FamilyPlacement};
pub use pii::Masked;
