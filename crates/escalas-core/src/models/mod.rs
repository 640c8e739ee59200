pub mod category;
pub mod result;
pub mod severity;
