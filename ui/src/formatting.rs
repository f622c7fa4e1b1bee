//! Display helpers for wash history cells.

use std::fmt::Display;

use api::Vehicle;
use chrono::DateTime;
use chrono::Local;
use chrono::TimeZone;
use chrono::Utc;
use itertools::Itertools;

/// Shown in place of missing vehicle or location detail.
pub const PLACEHOLDER: &str = "—";

pub fn format_date_in<Tz>(timestamp: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    timestamp.with_timezone(tz).format("%Y-%m-%d").to_string()
}

pub fn format_time_in<Tz>(timestamp: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    timestamp.with_timezone(tz).format("%H:%M").to_string()
}

/// Date of a wash in the viewer's local timezone.
pub fn local_date(timestamp: &DateTime<Utc>) -> String {
    format_date_in(timestamp, &Local)
}

/// Time of day of a wash in the viewer's local timezone.
pub fn local_time(timestamp: &DateTime<Utc>) -> String {
    format_time_in(timestamp, &Local)
}

/// The two lines of the vehicle cell: plate, then `brand model (year)`.
pub fn vehicle_summary(vehicle: Option<&Vehicle>) -> (String, Option<String>) {
    let Some(vehicle) = vehicle else {
        return (PLACEHOLDER.to_string(), None);
    };

    let description = [vehicle.brand.trim(), vehicle.model.trim()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .join(" ");
    let detail = match (description.is_empty(), vehicle.year) {
        (true, 0) => None,
        (true, year) => Some(format!("({year})")),
        (false, 0) => Some(description),
        (false, year) => Some(format!("{description} ({year})")),
    };

    let plate = if vehicle.license_plate.trim().is_empty() {
        PLACEHOLDER.to_string()
    } else {
        vehicle.license_plate.trim().to_uppercase()
    };

    (plate, detail)
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;

    use super::*;

    fn vehicle() -> Vehicle {
        Vehicle {
            id: 3,
            license_plate: "abc1d23".to_string(),
            brand: "Fiat".to_string(),
            model: "Uno".to_string(),
            color: "Red".to_string(),
            year: 2019,
        }
    }

    #[test]
    fn date_and_time_come_from_the_same_timestamp() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 23, 45, 0).unwrap();

        assert_eq!(format_date_in(&ts, &Utc), "2024-05-01");
        assert_eq!(format_time_in(&ts, &Utc), "23:45");

        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(format_date_in(&ts, &plus_two), "2024-05-02");
        assert_eq!(format_time_in(&ts, &plus_two), "01:45");
    }

    #[test]
    fn missing_vehicle_uses_placeholder() {
        assert_eq!(vehicle_summary(None), (PLACEHOLDER.to_string(), None));
    }

    #[test]
    fn vehicle_summary_lists_plate_and_model() {
        let (plate, detail) = vehicle_summary(Some(&vehicle()));
        assert_eq!(plate, "ABC1D23");
        assert_eq!(detail.as_deref(), Some("Fiat Uno (2019)"));
    }

    #[test]
    fn vehicle_summary_skips_blank_parts() {
        let mut v = vehicle();
        v.brand = String::new();
        v.year = 0;
        assert_eq!(vehicle_summary(Some(&v)).1.as_deref(), Some("Uno"));

        v.model = " ".to_string();
        v.license_plate = String::new();
        assert_eq!(vehicle_summary(Some(&v)), (PLACEHOLDER.to_string(), None));
    }
}
