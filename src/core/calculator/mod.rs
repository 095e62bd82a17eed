pub mod aggregate;
pub mod weekly;
