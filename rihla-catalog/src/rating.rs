use rihla_core::{CompanyTestimonial, Feedback};

/// Anything carrying a 1-5 star rating.
pub trait Rated {
    fn rating(&self) -> i16;
}

impl Rated for Feedback {
    fn rating(&self) -> i16 {
        self.rating
    }
}

impl Rated for CompanyTestimonial {
    fn rating(&self) -> i16 {
        self.rating
    }
}

/// Mean rating of a list, or `None` when the list is empty. Callers hide
/// the statistic entirely in the empty case instead of showing 0.0.
pub fn average<T: Rated>(items: &[T]) -> Option<f64> {
    if items.is_empty() {
        return None;
    }
    let sum: i64 = items.iter().map(|i| i64::from(i.rating())).sum();
    Some(sum as f64 / items.len() as f64)
}

/// One decimal place, matching the site's display format.
pub fn format_average(average: f64) -> String {
    format!("{average:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn feedback(rating: i16) -> Feedback {
        Feedback {
            id: Uuid::new_v4(),
            trip_id: Uuid::new_v4(),
            user_name: "زائر".to_string(),
            user_email: None,
            rating,
            comment: "تعليق".to_string(),
            likes: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn two_feedbacks_rated_four_and_five_average_to_4_5() {
        let items = vec![feedback(4), feedback(5)];
        let avg = average(&items).unwrap();
        assert_eq!(format_average(avg), "4.5");
    }

    #[test]
    fn empty_list_has_no_average() {
        let items: Vec<Feedback> = Vec::new();
        assert_eq!(average(&items), None);
    }

    #[test]
    fn single_item_average_is_its_rating() {
        let items = vec![feedback(3)];
        assert_eq!(format_average(average(&items).unwrap()), "3.0");
    }
}
