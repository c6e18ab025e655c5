use chrono::NaiveDateTime;

/// Star rating given when a review does not specify one.
pub const DEFAULT_STARS: i32 = 5;

/// Domain representation of a customer review, owned by its product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    /// Unique identifier of the review.
    pub id: i32,
    /// Identifier of the reviewed product.
    pub product_id: i32,
    /// Review body.
    pub text: String,
    /// Star rating between 1 and 5.
    pub stars: i32,
    /// Timestamp for when the review record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the review record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    /// Identifier of the reviewed product.
    pub product_id: i32,
    /// Review body.
    pub text: String,
    /// Star rating between 1 and 5.
    pub stars: i32,
}

impl NewReview {
    /// Build a review payload with the default star rating.
    pub fn new(product_id: i32, text: impl Into<String>) -> Self {
        Self {
            product_id,
            text: text.into(),
            stars: DEFAULT_STARS,
        }
    }

    /// Override the star rating, clamping it into the 1..=5 range.
    pub fn with_stars(mut self, stars: i32) -> Self {
        self.stars = stars.clamp(1, 5);
        self
    }
}
