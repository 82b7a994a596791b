//! Database models: the request structs repositories accept and the rows they return.

pub mod properties;
pub mod reservations;
pub mod users;
