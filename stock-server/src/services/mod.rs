//! Business rules between the HTTP layer and the store

pub mod catalog;
pub mod stock;
