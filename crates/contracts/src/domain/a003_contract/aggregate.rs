use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::common::{Entity, EntityId};

/// Lifecycle state of a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractStatus {
    Active,
    Finished,
    Cancelled,
}

impl ContractStatus {
    pub const ALL: [ContractStatus; 3] = [
        ContractStatus::Active,
        ContractStatus::Finished,
        ContractStatus::Cancelled,
    ];

    /// Wire value (`estado` field).
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractStatus::Active => "active",
            ContractStatus::Finished => "finished",
            ContractStatus::Cancelled => "cancelled",
        }
    }

    /// Capitalized label for select options and table cells.
    pub fn label(&self) -> &'static str {
        match self {
            ContractStatus::Active => "Active",
            ContractStatus::Finished => "Finished",
            ContractStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ContractStatus::Active),
            "finished" => Ok(ContractStatus::Finished),
            "cancelled" => Ok(ContractStatus::Cancelled),
            other => Err(format!("Unknown contract status: {}", other)),
        }
    }
}

/// A contract binding a company to a service, as returned by the backend.
///
/// Date and price fields keep their historical wire names
/// (`fecha_inicio`, `fecha_fin`, `estado`, `precio_final`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contract {
    pub id: EntityId,
    pub company_id: EntityId,
    pub service_id: EntityId,
    #[serde(rename = "fecha_inicio")]
    pub start_date: NaiveDate,
    /// `null` on the wire means the contract is ongoing.
    #[serde(rename = "fecha_fin")]
    pub end_date: Option<NaiveDate>,
    #[serde(rename = "estado")]
    pub status: ContractStatus,
    #[serde(rename = "precio_final")]
    pub final_price: f64,
}

/// Payload for creating or updating a contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractInput {
    pub company_id: EntityId,
    pub service_id: EntityId,
    #[serde(rename = "fecha_inicio")]
    pub start_date: NaiveDate,
    #[serde(rename = "fecha_fin")]
    pub end_date: Option<NaiveDate>,
    #[serde(rename = "estado")]
    pub status: ContractStatus,
    #[serde(rename = "precio_final")]
    pub final_price: f64,
}

impl Entity for Contract {
    type Input = ContractInput;

    fn id(&self) -> EntityId {
        self.id
    }

    fn collection_name() -> &'static str {
        "contracts"
    }

    fn element_name() -> &'static str {
        "contract"
    }

    fn list_name() -> &'static str {
        "contracts"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_values() {
        assert_eq!(ContractStatus::Active.as_str(), "active");
        assert_eq!("cancelled".parse(), Ok(ContractStatus::Cancelled));
        assert!("activo".parse::<ContractStatus>().is_err());
    }

    #[test]
    fn test_input_wire_shape() {
        let input = ContractInput {
            company_id: 5,
            service_id: 1,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: None,
            status: ContractStatus::Active,
            final_price: 20.0,
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "company_id": 5,
                "service_id": 1,
                "fecha_inicio": "2024-01-01",
                "fecha_fin": null,
                "estado": "active",
                "precio_final": 20.0,
            })
        );
    }

    #[test]
    fn test_contract_deserializes_ongoing() {
        let c: Contract = serde_json::from_str(
            r#"{"id":3,"company_id":5,"service_id":1,
                "fecha_inicio":"2024-01-01","fecha_fin":null,
                "estado":"active","precio_final":20.0}"#,
        )
        .unwrap();
        assert_eq!(c.end_date, None);
        assert_eq!(c.status, ContractStatus::Active);
    }
}
