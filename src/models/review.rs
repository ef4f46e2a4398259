// src/models/review.rs
use serde::{ Deserialize, Serialize };

pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Review {
    pub id: i64,
    pub author: String,
    pub content: String,
    pub rating: i64,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub author: String,
    pub content: String,
    pub rating: i64,
}

impl NewReview {
    pub fn new(author: impl Into<String>, content: impl Into<String>, raw_rating: &str) -> Self {
        Self {
            author: author.into(),
            content: content.into(),
            rating: clamp_rating(raw_rating),
        }
    }
}

/// Reads the leading integer of `raw` and clamps it to 1..=5. Anything
/// without a leading integer counts as 1.
pub fn clamp_rating(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    match digits[..end].parse::<i64>() {
        Ok(value) => (sign * value).clamp(MIN_RATING, MAX_RATING),
        // overflowing digit runs are still out of range on one side
        Err(_) if end > 0 => if sign > 0 { MAX_RATING } else { MIN_RATING },
        Err(_) => MIN_RATING,
    }
}
