//! Database repository for reservations.
//!
//! Reservations are created elsewhere; this layer only reads a guest's history.

use crate::db::{errors::Result, models::reservations::ReservationDBResponse};
use crate::types::UserId;
use sqlx::PgConnection;
use tracing::instrument;

pub struct Reservations<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Reservations<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    /// List a guest's completed stays (ended before today), earliest first.
    ///
    /// Each record carries the booked property and its average review rating. Use
    /// [`crate::types::DEFAULT_LIMIT`] when the caller has no preference.
    #[instrument(skip(self), err)]
    pub async fn list_past_for_guest(&mut self, guest_id: UserId, limit: i64) -> Result<Vec<ReservationDBResponse>> {
        let reservations = sqlx::query_as::<_, ReservationDBResponse>(
            r#"
            SELECT
                reservations.id AS reservation_id,
                reservations.guest_id,
                reservations.start_date,
                reservations.end_date,
                properties.*,
                AVG(property_reviews.rating)::float8 AS average_rating
            FROM reservations
            JOIN properties ON reservations.property_id = properties.id
            LEFT JOIN property_reviews ON properties.id = property_reviews.property_id
            WHERE reservations.guest_id = $1
              AND reservations.end_date < CURRENT_DATE
            GROUP BY properties.id, reservations.id
            ORDER BY reservations.start_date ASC, reservations.id ASC
            LIMIT $2
            "#,
        )
        .bind(guest_id)
        .bind(limit)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(reservations)
    }
}
