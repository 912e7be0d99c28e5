//! Form draft for the service view.

use contracts::domain::a002_service::{Service, ServiceInput};

use crate::shared::format::parse_decimal;

/// In-progress form state; numeric fields stay free-text until submit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServiceDraft {
    pub name: String,
    pub description: String,
    pub base_price: String,
    pub duration_hours: String,
}

impl ServiceDraft {
    /// Copy an existing record into the draft, numeric fields in their
    /// string form for editing.
    pub fn from_record(service: &Service) -> Self {
        Self {
            name: service.name.clone(),
            description: service.description.clone().unwrap_or_default(),
            base_price: service.base_price.to_string(),
            duration_hours: service.duration_hours.to_string(),
        }
    }

    /// Submit-time coercion into the create/update payload. An empty
    /// description becomes an explicit absent value.
    pub fn to_input(&self) -> Result<ServiceInput, String> {
        let base_price = parse_decimal(&self.base_price)
            .ok_or_else(|| "Base price must be a number".to_string())?;
        let duration_hours = parse_decimal(&self.duration_hours)
            .ok_or_else(|| "Duration must be a number".to_string())?;

        Ok(ServiceInput {
            name: self.name.clone(),
            description: if self.description.is_empty() {
                None
            } else {
                Some(self.description.clone())
            },
            base_price,
            duration_hours,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Service {
        Service {
            id: 1,
            name: "Wash".into(),
            description: Some("Full wash".into()),
            base_price: 20.0,
            duration_hours: 1.5,
        }
    }

    #[test]
    fn test_from_record_stringifies_numbers() {
        let draft = ServiceDraft::from_record(&sample());
        assert_eq!(draft.base_price, "20");
        assert_eq!(draft.duration_hours, "1.5");
    }

    #[test]
    fn test_to_input_coerces() {
        let draft = ServiceDraft {
            name: "Wash".into(),
            description: String::new(),
            base_price: "20.00".into(),
            duration_hours: "1.5".into(),
        };
        let input = draft.to_input().unwrap();
        assert_eq!(input.base_price, 20.0);
        assert_eq!(input.duration_hours, 1.5);
        assert_eq!(input.description, None);
    }

    #[test]
    fn test_to_input_rejects_non_numeric_price() {
        let draft = ServiceDraft {
            name: "Wash".into(),
            base_price: "free".into(),
            duration_hours: "1".into(),
            ..Default::default()
        };
        assert!(draft.to_input().is_err());
    }
}
