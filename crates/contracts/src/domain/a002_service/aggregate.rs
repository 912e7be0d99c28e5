use serde::{Deserialize, Serialize};

use crate::domain::common::{Entity, EntityId};

/// A cleaning service offered to client companies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: EntityId,
    pub name: String,
    /// Absent or empty when the service has no description.
    #[serde(default)]
    pub description: Option<String>,
    pub base_price: f64,
    pub duration_hours: f64,
}

/// Payload for creating or updating a service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub base_price: f64,
    pub duration_hours: f64,
}

impl Entity for Service {
    type Input = ServiceInput;

    fn id(&self) -> EntityId {
        self.id
    }

    fn collection_name() -> &'static str {
        "services"
    }

    fn element_name() -> &'static str {
        "service"
    }

    fn list_name() -> &'static str {
        "services"
    }
}
