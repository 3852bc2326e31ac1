pub mod duplicates;
pub mod operation;
pub mod operation_tracker;
pub mod review_unit;

pub use duplicates::{group_duplicates, package_name};
pub use operation::Operation;
pub use operation_tracker::OperationTracker;
pub use review_unit::{OperationKey, ReviewUnit};
