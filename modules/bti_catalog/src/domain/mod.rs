pub mod catalog;
pub mod data;
