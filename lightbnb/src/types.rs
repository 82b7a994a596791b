//! Identifier types shared across the data-access layer.
//!
//! All tables use `SERIAL` primary keys, so every id is an `i32`. The aliases exist to keep
//! signatures readable (`guest_id: UserId` rather than a bare integer).

pub type UserId = i32;
pub type PropertyId = i32;
pub type ReservationId = i32;

/// Number of rows returned by listing queries when the caller does not ask for a specific limit
pub const DEFAULT_LIMIT: i64 = 10;

/// Filter inputs are given in whole currency units; `cost_per_night` is stored in cents
pub const CENTS_PER_DOLLAR: i64 = 100;
