//! Wire types for the wash-history listing endpoint.

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::error::FetchError;

/// A vehicle embedded in a wash record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: u64,
    pub license_plate: String,
    pub brand: String,
    pub model: String,
    pub color: String,
    pub year: i32,
}

/// A wash location embedded in a wash record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: u64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
}

impl Location {
    /// Routing path of the detail page for this location.
    pub fn detail_path(&self) -> String {
        format!("/locations/{}", self.id)
    }
}

/// One historical vehicle wash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WashRecord {
    pub id: u64,
    pub vehicle_id: u64,
    pub wash_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub location_id: Option<u64>,
    #[serde(default)]
    pub vehicle: Option<Vehicle>,
    #[serde(default)]
    pub location: Option<Location>,
}

/// One page of wash records plus the number of records across all pages.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageResult {
    #[serde(alias = "items")]
    pub data: Vec<WashRecord>,
    #[serde(alias = "totalCount")]
    pub total: u64,
}

/// A 1-based, offset-style page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

impl PageRequest {
    pub fn new(page: u32, page_size: u32) -> Result<Self, FetchError> {
        if page == 0 || page_size == 0 {
            return Err(FetchError::InvalidPage { page, page_size });
        }
        Ok(Self { page, page_size })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_RECORD: &str = r#"{
        "id": 7,
        "vehicleId": 3,
        "washDate": "2024-05-01T14:30:00Z",
        "createdAt": "2024-05-01T14:31:00Z",
        "updatedAt": "2024-05-01T14:31:00Z",
        "locationId": 2,
        "vehicle": {
            "id": 3,
            "licensePlate": "ABC1D23",
            "brand": "Fiat",
            "model": "Uno",
            "color": "Red",
            "year": 2019
        },
        "location": {
            "id": 2,
            "name": "Downtown",
            "address": "Main St 100",
            "city": "Springfield",
            "state": "SP"
        }
    }"#;

    #[test]
    fn decodes_record_with_embedded_detail() {
        let record: WashRecord = serde_json::from_str(FULL_RECORD).unwrap();

        assert_eq!(record.id, 7);
        assert_eq!(record.location_id, Some(2));
        assert_eq!(record.vehicle.unwrap().license_plate, "ABC1D23");
        assert_eq!(record.location.unwrap().detail_path(), "/locations/2");
    }

    #[test]
    fn optional_fields_may_be_missing_or_null() {
        let json = r#"{
            "id": 1,
            "vehicleId": 3,
            "washDate": "2024-05-01T14:30:00Z",
            "createdAt": "2024-05-01T14:31:00Z",
            "updatedAt": "2024-05-01T14:31:00Z",
            "locationId": null
        }"#;
        let record: WashRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.location_id, None);
        assert!(record.vehicle.is_none());
        assert!(record.location.is_none());
    }

    #[test]
    fn page_result_accepts_alternate_field_names() {
        let json = format!(r#"{{ "items": [{FULL_RECORD}], "totalCount": 25 }}"#);
        let page: PageResult = serde_json::from_str(&json).unwrap();

        assert_eq!(page.data.len(), 1);
        assert_eq!(page.total, 25);
    }

    #[test]
    fn page_request_rejects_zero() {
        assert!(PageRequest::new(0, 10).is_err());
        assert!(PageRequest::new(1, 0).is_err());
        let request = PageRequest::new(3, 10).unwrap();
        assert_eq!((request.page(), request.page_size()), (3, 10));
    }
}
