mod business;
mod feature;

pub use business::{ApprovalStatus, BusinessRecord};
pub use feature::{BoundaryFeature, BoundaryGeometry, Ring};
