//! Outbound WhatsApp deep links. Booking and inquiry both hand the visitor
//! off to a prefilled chat message; nothing is read back.

use chrono::{Datelike, NaiveDate};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

// Same escaping as encodeURIComponent, which the web front end applies
// when it builds these links itself.
const MESSAGE_TEXT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const ARABIC_MONTHS: [&str; 12] = [
    "يناير",
    "فبراير",
    "مارس",
    "أبريل",
    "مايو",
    "يونيو",
    "يوليو",
    "أغسطس",
    "سبتمبر",
    "أكتوبر",
    "نوفمبر",
    "ديسمبر",
];

const ARABIC_WEEKDAYS: [&str; 7] = [
    "الاثنين",
    "الثلاثاء",
    "الأربعاء",
    "الخميس",
    "الجمعة",
    "السبت",
    "الأحد",
];

/// Long Arabic date with Latin numerals, e.g. "الأحد، 1 مارس 2026".
pub fn format_arabic_date(date: NaiveDate) -> String {
    let weekday = ARABIC_WEEKDAYS[date.weekday().num_days_from_monday() as usize];
    let month = ARABIC_MONTHS[date.month0() as usize];
    format!("{weekday}، {} {month} {}", date.day(), date.year())
}

pub fn booking_message(trip_title: &str, departure: NaiveDate) -> String {
    format!(
        "السلام عليكم، أود الحجز في رحلة: {trip_title}\nتاريخ الانطلاق: {}",
        format_arabic_date(departure)
    )
}

pub fn inquiry_message(trip_title: &str) -> String {
    format!("السلام عليكم، أود الاستفسار عن مواعيد رحلة: {trip_title}")
}

/// `https://wa.me/<phone>?text=<escaped text>`. The phone number is digits
/// only, country code included, as wa.me expects.
pub fn whatsapp_link(phone: &str, text: &str) -> String {
    format!(
        "https://wa.me/{phone}?text={}",
        utf8_percent_encode(text, MESSAGE_TEXT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_long_arabic_dates() {
        // 2026-03-01 is a Sunday
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert_eq!(format_arabic_date(date), "الأحد، 1 مارس 2026");
    }

    #[test]
    fn booking_link_escapes_the_template() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let link = whatsapp_link("212660500351", &booking_message("مراكش", date));

        assert!(link.starts_with("https://wa.me/212660500351?text="));
        // the raw template must not leak unescaped separators
        assert!(!link.contains(' '));
        assert!(!link.contains('\n'));
        assert!(link.contains("%20") || link.contains("%0A"));
    }

    #[test]
    fn inquiry_message_carries_the_trip_title() {
        assert!(inquiry_message("شلالات أوزود").contains("شلالات أوزود"));
    }
}
