use serde::{Deserialize, Serialize};

use stockwise_core::{DomainError, DomainResult, Entity, SupplierId};

use crate::component::{non_blank, required};

labelled_enum! {
    /// Supplier relationship status.
    pub enum SupplierStatus {
        Active => "Active",
        Inactive => "Inactive",
        UnderReview => "Under Review",
    }
}

/// A supplier record with its performance metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    /// 0.0 – 5.0 stars.
    pub rating: f64,
    /// Percent of orders delivered on time.
    pub on_time_delivery: f64,
    /// Percent of delivered units found defective.
    pub defect_rate: f64,
    /// Category names this supplier covers. Free-form, not limited to
    /// [`crate::Category`].
    pub components: Vec<String>,
    pub contact: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: String,
    pub lead_time_days: u32,
    pub payment_terms: Option<String>,
    pub status: SupplierStatus,
}

impl Supplier {
    pub fn is_active(&self) -> bool {
        self.status == SupplierStatus::Active
    }
}

impl Entity for Supplier {
    type Id = SupplierId;

    fn id(&self) -> SupplierId {
        self.id
    }
}

/// Request: register a supplier. Name, contact and email are required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewSupplier {
    pub name: String,
    pub contact: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub category: Option<String>,
    pub rating: Option<f64>,
    pub lead_time_days: Option<u32>,
    pub payment_terms: Option<String>,
}

pub const DEFAULT_RATING: f64 = 4.0;
pub const DEFAULT_ON_TIME_DELIVERY: f64 = 95.0;
pub const DEFAULT_DEFECT_RATE: f64 = 0.5;
pub const DEFAULT_SUPPLIER_LEAD_TIME_DAYS: u32 = 7;
pub const GENERAL_CATEGORY: &str = "General";
pub const UNSPECIFIED_LOCATION: &str = "Not specified";

impl NewSupplier {
    /// Validate and build the supplier with default metrics.
    ///
    /// A lead time of zero counts as "not given" and falls back to seven days.
    pub fn into_supplier(self, id: SupplierId) -> DomainResult<Supplier> {
        let name = required(self.name, "name")?;
        let contact = required(self.contact, "contact")?;
        let email = required(self.email, "email")?;

        let rating = self.rating.unwrap_or(DEFAULT_RATING);
        if !(rating.is_finite() && (0.0..=5.0).contains(&rating)) {
            return Err(DomainError::validation("rating must be between 0 and 5"));
        }

        let address = non_blank(self.address);
        let category = non_blank(self.category).unwrap_or_else(|| GENERAL_CATEGORY.to_string());

        Ok(Supplier {
            id,
            name,
            rating,
            on_time_delivery: DEFAULT_ON_TIME_DELIVERY,
            defect_rate: DEFAULT_DEFECT_RATE,
            components: vec![category],
            contact,
            email: Some(email),
            phone: non_blank(self.phone),
            location: address.unwrap_or_else(|| UNSPECIFIED_LOCATION.to_string()),
            lead_time_days: self
                .lead_time_days
                .filter(|d| *d > 0)
                .unwrap_or(DEFAULT_SUPPLIER_LEAD_TIME_DAYS),
            payment_terms: non_blank(self.payment_terms),
            status: SupplierStatus::Active,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> NewSupplier {
        NewSupplier {
            name: "Acme Corporation".into(),
            contact: "John Smith".into(),
            email: "john@acme.com".into(),
            ..NewSupplier::default()
        }
    }

    #[test]
    fn defaults_are_applied() {
        let s = form().into_supplier(SupplierId::new()).unwrap();
        assert_eq!(s.status, SupplierStatus::Active);
        assert_eq!(s.lead_time_days, 7);
        assert_eq!(s.components, vec!["General".to_string()]);
        assert_eq!(s.rating, 4.0);
        assert_eq!(s.defect_rate, 0.5);
        assert_eq!(s.on_time_delivery, 95.0);
        assert_eq!(s.location, "Not specified");
    }

    #[test]
    fn category_and_address_carry_over() {
        let s = NewSupplier {
            category: Some("ICs".into()),
            address: Some("Texas, USA".into()),
            lead_time_days: Some(14),
            ..form()
        }
        .into_supplier(SupplierId::new())
        .unwrap();
        assert_eq!(s.components, vec!["ICs".to_string()]);
        assert_eq!(s.location, "Texas, USA");
        assert_eq!(s.lead_time_days, 14);
    }

    #[test]
    fn zero_lead_time_falls_back_to_default() {
        let s = NewSupplier {
            lead_time_days: Some(0),
            ..form()
        }
        .into_supplier(SupplierId::new())
        .unwrap();
        assert_eq!(s.lead_time_days, 7);
    }

    #[test]
    fn email_is_required() {
        let err = NewSupplier {
            email: String::new(),
            ..form()
        }
        .into_supplier(SupplierId::new())
        .unwrap_err();
        assert_eq!(err, DomainError::missing("email"));
    }

    #[test]
    fn rating_out_of_range_is_rejected() {
        let err = NewSupplier {
            rating: Some(5.5),
            ..form()
        }
        .into_supplier(SupplierId::new())
        .unwrap_err();
        assert!(err.is_validation());
    }
}
