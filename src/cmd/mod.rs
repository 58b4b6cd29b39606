pub mod batch;
pub mod compare;
