//! Form draft and field transitions for the contract view.
//!
//! The one non-trivial rule lives here: choosing a service defaults the
//! final price to that service's base price. It is a named transition
//! on the draft so it can be exercised without rendering anything.

use chrono::NaiveDate;
use contracts::domain::a001_company::Company;
use contracts::domain::a002_service::Service;
use contracts::domain::a003_contract::{Contract, ContractInput, ContractStatus};
use contracts::domain::common::EntityId;

use crate::shared::format::{format_price, parse_decimal};

/// Shown in place of a company or service name whose reference does not
/// resolve within the loaded collection.
pub const LOOKUP_MISS: &str = "N/A";

/// One form field, named. Changes route through [`ContractDraft::apply_change`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    CompanyId,
    ServiceId,
    StartDate,
    EndDate,
    Status,
    FinalPrice,
}

/// In-progress form state; ids, dates and prices stay free-text until
/// submit.
#[derive(Clone, Debug, PartialEq)]
pub struct ContractDraft {
    pub company_id: String,
    pub service_id: String,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
    pub final_price: String,
}

impl Default for ContractDraft {
    fn default() -> Self {
        Self {
            company_id: String::new(),
            service_id: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            status: ContractStatus::Active.as_str().to_string(),
            final_price: String::new(),
        }
    }
}

impl ContractDraft {
    /// Copy an existing record into the draft, numeric and date fields
    /// in their string form for editing.
    pub fn from_record(contract: &Contract) -> Self {
        Self {
            company_id: contract.company_id.to_string(),
            service_id: contract.service_id.to_string(),
            start_date: contract.start_date.to_string(),
            end_date: contract
                .end_date
                .map(|d| d.to_string())
                .unwrap_or_default(),
            status: contract.status.as_str().to_string(),
            final_price: contract.final_price.to_string(),
        }
    }

    /// Apply one field change by name.
    ///
    /// Changing the service to a known id overwrites the final price
    /// with that service's base price, formatted with two decimals; the
    /// price stays independently editable afterward. An unknown service
    /// id is silently ignored, the field change itself still applies.
    pub fn apply_change(&mut self, field: Field, value: String, services: &[Service]) {
        if field == Field::ServiceId && !value.is_empty() {
            let found = value
                .parse::<EntityId>()
                .ok()
                .and_then(|id| services.iter().find(|s| s.id == id));
            if let Some(service) = found {
                self.final_price = format_price(service.base_price);
            }
        }

        match field {
            Field::CompanyId => self.company_id = value,
            Field::ServiceId => self.service_id = value,
            Field::StartDate => self.start_date = value,
            Field::EndDate => self.end_date = value,
            Field::Status => self.status = value,
            Field::FinalPrice => self.final_price = value,
        }
    }

    /// Submit-time coercion into the create/update payload: ids and the
    /// price become numeric, dates become calendar dates, an empty end
    /// date becomes an explicit absent value.
    pub fn to_input(&self) -> Result<ContractInput, String> {
        let company_id = self
            .company_id
            .parse::<EntityId>()
            .map_err(|_| "Select a company".to_string())?;
        let service_id = self
            .service_id
            .parse::<EntityId>()
            .map_err(|_| "Select a service".to_string())?;
        let start_date = parse_date(&self.start_date)
            .ok_or_else(|| "Start date must be a valid date".to_string())?;
        let end_date = if self.end_date.is_empty() {
            None
        } else {
            Some(parse_date(&self.end_date).ok_or_else(|| "End date must be a valid date".to_string())?)
        };
        let status = self.status.parse::<ContractStatus>()?;
        let final_price = parse_decimal(&self.final_price)
            .ok_or_else(|| "Final price must be a number".to_string())?;

        Ok(ContractInput {
            company_id,
            service_id,
            start_date,
            end_date,
            status,
            final_price,
        })
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Resolve a company reference for display. A missing reference renders
/// as a placeholder rather than failing the row.
pub fn company_name(companies: &[Company], id: EntityId) -> String {
    companies
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| LOOKUP_MISS.to_string())
}

/// Resolve a service reference for display, same degradation rule.
pub fn service_name(services: &[Service], id: EntityId) -> String {
    services
        .iter()
        .find(|s| s.id == id)
        .map(|s| s.name.clone())
        .unwrap_or_else(|| LOOKUP_MISS.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wash_service() -> Service {
        Service {
            id: 1,
            name: "Wash".into(),
            description: None,
            base_price: 20.0,
            duration_hours: 1.0,
        }
    }

    #[test]
    fn test_selecting_known_service_defaults_price() {
        let services = vec![wash_service()];
        let mut draft = ContractDraft::default();

        draft.apply_change(Field::ServiceId, "1".into(), &services);

        assert_eq!(draft.service_id, "1");
        assert_eq!(draft.final_price, "20.00");
    }

    #[test]
    fn test_selecting_unknown_service_keeps_price() {
        let services = vec![wash_service()];
        let mut draft = ContractDraft::default();
        draft.final_price = "35.00".into();

        draft.apply_change(Field::ServiceId, "99".into(), &services);

        // field change applied, price untouched
        assert_eq!(draft.service_id, "99");
        assert_eq!(draft.final_price, "35.00");
    }

    #[test]
    fn test_price_stays_editable_after_default() {
        let services = vec![wash_service()];
        let mut draft = ContractDraft::default();

        draft.apply_change(Field::ServiceId, "1".into(), &services);
        draft.apply_change(Field::FinalPrice, "18.50".into(), &services);

        assert_eq!(draft.final_price, "18.50");
    }

    #[test]
    fn test_to_input_coerces_ids_dates_and_price() {
        let services = vec![wash_service()];
        let mut draft = ContractDraft::default();
        draft.apply_change(Field::CompanyId, "5".into(), &services);
        draft.apply_change(Field::ServiceId, "1".into(), &services);
        draft.apply_change(Field::StartDate, "2024-01-01".into(), &services);

        let input = draft.to_input().unwrap();
        assert_eq!(input.company_id, 5);
        assert_eq!(input.service_id, 1);
        assert_eq!(input.start_date.to_string(), "2024-01-01");
        assert_eq!(input.end_date, None);
        assert_eq!(input.status, ContractStatus::Active);
        assert_eq!(input.final_price, 20.0);
    }

    #[test]
    fn test_to_input_rejects_bad_date() {
        let mut draft = ContractDraft::default();
        draft.company_id = "5".into();
        draft.service_id = "1".into();
        draft.start_date = "01/01/2024".into();
        draft.final_price = "20".into();

        assert!(draft.to_input().is_err());
    }

    #[test]
    fn test_from_record_keeps_ongoing_end_date_empty() {
        let contract = Contract {
            id: 3,
            company_id: 5,
            service_id: 1,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: None,
            status: ContractStatus::Active,
            final_price: 20.0,
        };
        let draft = ContractDraft::from_record(&contract);
        assert_eq!(draft.start_date, "2024-01-01");
        assert_eq!(draft.end_date, "");
        assert_eq!(draft.status, "active");
    }

    #[test]
    fn test_lookup_miss_degrades_to_placeholder() {
        let companies = vec![Company {
            id: 5,
            name: "Acme".into(),
            address: "1 Main St".into(),
            phone: "555-0100".into(),
            email: "info@acme.test".into(),
        }];
        assert_eq!(company_name(&companies, 5), "Acme");
        assert_eq!(company_name(&companies, 6), LOOKUP_MISS);
        assert_eq!(service_name(&[], 1), LOOKUP_MISS);
    }
}
