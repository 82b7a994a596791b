//! Database repository for property listings.
//!
//! Search is the one dynamic query in this layer: [`PropertyFilter`] renders to a [`Statement`]
//! whose `WHERE` and `HAVING` sections contain exactly the filters that were set, each with its own
//! bound parameter.

use crate::db::{
    errors::Result,
    handlers::repository::Repository,
    models::properties::{PropertyCreateDBRequest, PropertyDBResponse, PropertyListing},
    statement::{Clause, Select, Statement},
};
use crate::types::{CENTS_PER_DOLLAR, DEFAULT_LIMIT, PropertyId, UserId};
use serde::Deserialize;
use sqlx::PgConnection;
use tracing::{debug, instrument};

const LISTING_SELECT: &str = "SELECT properties.*, \
     AVG(property_reviews.rating)::float8 AS average_rating, \
     COUNT(property_reviews.rating) AS review_count \
     FROM properties \
     LEFT JOIN property_reviews ON properties.id = property_reviews.property_id";

/// Search options for listing properties
///
/// Prices are whole currency units per night; the stored `cost_per_night` is in cents.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PropertyFilter {
    /// Substring of the city name (case-sensitive). `%` and `_` match themselves.
    pub city: Option<String>,
    pub owner_id: Option<UserId>,
    /// Applied only together with `maximum_price_per_night`
    pub minimum_price_per_night: Option<i64>,
    /// Applied only together with `minimum_price_per_night`
    pub maximum_price_per_night: Option<i64>,
    /// Lowest acceptable average review rating
    pub minimum_rating: Option<f64>,
    pub limit: i64,
}

impl Default for PropertyFilter {
    fn default() -> Self {
        Self {
            city: None,
            owner_id: None,
            minimum_price_per_night: None,
            maximum_price_per_night: None,
            minimum_rating: None,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PropertyFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn owner_id(mut self, owner_id: UserId) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    /// Inclusive price range per night, in whole currency units
    pub fn price_range(mut self, minimum: i64, maximum: i64) -> Self {
        self.minimum_price_per_night = Some(minimum);
        self.maximum_price_per_night = Some(maximum);
        self
    }

    pub fn minimum_rating(mut self, rating: f64) -> Self {
        self.minimum_rating = Some(rating);
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    /// Render the search statement for these options.
    ///
    /// Listings always carry their review aggregates and come back cheapest first, ties broken by
    /// id so repeated searches return the same order.
    pub fn to_statement(&self) -> Statement {
        let mut select = Select::new(LISTING_SELECT);

        if let Some(city) = &self.city {
            select = select.filter(Clause::new("properties.city LIKE", format!("%{}%", escape_like(city))));
        }

        if let Some(owner_id) = self.owner_id {
            select = select.filter(Clause::new("properties.owner_id =", owner_id));
        }

        match (self.minimum_price_per_night, self.maximum_price_per_night) {
            (Some(minimum), Some(maximum)) => {
                select = select
                    .filter(Clause::new(
                        "properties.cost_per_night >=",
                        minimum.saturating_mul(CENTS_PER_DOLLAR),
                    ))
                    .filter(Clause::new(
                        "properties.cost_per_night <=",
                        maximum.saturating_mul(CENTS_PER_DOLLAR),
                    ));
            }
            (None, None) => {}
            (minimum, maximum) => {
                debug!(?minimum, ?maximum, "Ignoring price filter: both bounds are required");
            }
        }

        select = select.group_by("properties.id");

        if let Some(rating) = self.minimum_rating {
            select = select.having(Clause::new("AVG(property_reviews.rating) >=", rating));
        }

        select
            .order_by("properties.cost_per_night ASC, properties.id ASC")
            .limit(self.limit)
            .build()
    }
}

/// Escape LIKE metacharacters; backslash is the Postgres default escape character
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

pub struct Properties<'c> {
    db: &'c mut PgConnection,
}

#[async_trait::async_trait]
impl<'c> Repository for Properties<'c> {
    type CreateRequest = PropertyCreateDBRequest;
    type Response = PropertyListing;
    type Id = PropertyId;

    /// Insert a listing. A new property has no reviews yet, so its aggregates are empty.

    #[instrument(skip(self, request), fields(owner_id = request.owner_id, city = %request.city), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let property = sqlx::query_as::<_, PropertyDBResponse>(
            r#"
            INSERT INTO properties (
                owner_id, title, description, thumbnail_photo_url, cover_photo_url,
                cost_per_night, parking_spaces, number_of_bathrooms, number_of_bedrooms,
                country, street, city, province, post_code
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING *
            "#,
        )
        .bind(request.owner_id)
        .bind(&request.title)
        .bind(&request.description)
        .bind(&request.thumbnail_photo_url)
        .bind(&request.cover_photo_url)
        .bind(request.cost_per_night)
        .bind(request.parking_spaces)
        .bind(request.number_of_bathrooms)
        .bind(request.number_of_bedrooms)
        .bind(&request.country)
        .bind(&request.street)
        .bind(&request.city)
        .bind(&request.province)
        .bind(&request.post_code)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(PropertyListing {
            property,
            average_rating: None,
            review_count: 0,
        })
    }

    #[instrument(skip(self), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let mut statement = Select::new(LISTING_SELECT)
            .filter(Clause::new("properties.id =", id))
            .group_by("properties.id")
            .build();
        let listing = statement.query_as::<PropertyListing>().fetch_optional(&mut *self.db).await?;

        Ok(listing)
    }
}

impl<'c> Properties<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    /// Search listings. An empty filter lists every property, cheapest first, up to the limit.
    #[instrument(skip(self, filter), fields(limit = filter.limit), err)]
    pub async fn search(&mut self, filter: &PropertyFilter) -> Result<Vec<PropertyListing>> {
        let mut statement = filter.to_statement();
        let listings = statement.query_as::<PropertyListing>().fetch_all(&mut *self.db).await?;

        Ok(listings)
    }
}
