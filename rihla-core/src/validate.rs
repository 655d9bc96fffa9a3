//! Required-field checks that run before any store call. A rejected input
//! never reaches the network.

use crate::error::ValidationError;
use crate::records::{FeedbackInput, TestimonialInput, TripInput};

fn require_non_blank(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Blank(field));
    }
    Ok(())
}

fn require_rating(rating: i16) -> Result<(), ValidationError> {
    if !(1..=5).contains(&rating) {
        return Err(ValidationError::RatingOutOfRange(rating));
    }
    Ok(())
}

impl FeedbackInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_blank(&self.user_name, "user_name")?;
        require_non_blank(&self.comment, "comment")?;
        require_rating(self.rating)
    }

    /// Trimmed copy the store receives; an empty email becomes absent.
    pub fn normalized(&self) -> FeedbackInput {
        FeedbackInput {
            trip_id: self.trip_id,
            user_name: self.user_name.trim().to_string(),
            user_email: self
                .user_email
                .as_deref()
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .map(str::to_string),
            rating: self.rating,
            comment: self.comment.trim().to_string(),
        }
    }
}

impl TripInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_blank(&self.title, "title")?;
        if self.price < 0.0 {
            return Err(ValidationError::NegativePrice(self.price));
        }
        Ok(())
    }
}

impl TestimonialInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_blank(&self.customer_name, "customer_name")?;
        require_non_blank(&self.testimonial, "testimonial")?;
        require_rating(self.rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn feedback() -> FeedbackInput {
        FeedbackInput {
            trip_id: Uuid::new_v4(),
            user_name: "محمد أحمد".to_string(),
            user_email: None,
            rating: 5,
            comment: "رحلة رائعة".to_string(),
        }
    }

    #[test]
    fn blank_name_or_comment_is_rejected() {
        let mut input = feedback();
        input.user_name = "   ".to_string();
        assert!(matches!(
            input.validate(),
            Err(ValidationError::Blank("user_name"))
        ));

        let mut input = feedback();
        input.comment = "".to_string();
        assert!(matches!(
            input.validate(),
            Err(ValidationError::Blank("comment"))
        ));

        assert!(feedback().validate().is_ok());
    }

    #[test]
    fn rating_outside_one_to_five_is_rejected() {
        for bad in [0, 6, -1] {
            let mut input = feedback();
            input.rating = bad;
            assert!(input.validate().is_err(), "rating {bad} should fail");
        }
    }

    #[test]
    fn normalization_trims_and_drops_empty_email() {
        let mut input = feedback();
        input.user_name = "  سعاد  ".to_string();
        input.user_email = Some("  ".to_string());
        let normalized = input.normalized();
        assert_eq!(normalized.user_name, "سعاد");
        assert_eq!(normalized.user_email, None);
    }

    #[test]
    fn negative_price_is_rejected() {
        let input = TripInput {
            title: "مراكش".to_string(),
            price: -1.0,
            date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            description: String::new(),
            image_url: None,
            program: None,
            is_completed: false,
        };
        assert!(matches!(
            input.validate(),
            Err(ValidationError::NegativePrice(_))
        ));
    }
}
