pub mod aggregate;
pub mod ancestry;
pub mod index;
pub mod monthly;
pub mod period;
pub mod reports;
