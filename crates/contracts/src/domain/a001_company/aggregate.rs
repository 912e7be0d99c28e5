use serde::{Deserialize, Serialize};

use crate::domain::common::{Entity, EntityId};

/// A client company, as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: EntityId,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

/// Payload for creating or updating a company.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyInput {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

impl Entity for Company {
    type Input = CompanyInput;

    fn id(&self) -> EntityId {
        self.id
    }

    fn collection_name() -> &'static str {
        "companies"
    }

    fn element_name() -> &'static str {
        "company"
    }

    fn list_name() -> &'static str {
        "companies"
    }
}
