use serde::de::DeserializeOwned;
use serde::Serialize;

/// Identifier assigned by the backend on create. Never minted client-side.
pub type EntityId = i32;

/// Common surface of every record the admin screens manage.
///
/// `collection_name` is the URL segment under `/api/`; the two display
/// names feed fallback status messages when the backend returns no
/// structured error.
pub trait Entity: Clone + DeserializeOwned {
    /// Payload accepted by create and update.
    type Input: Serialize;

    fn id(&self) -> EntityId;

    fn collection_name() -> &'static str;
    fn element_name() -> &'static str;
    fn list_name() -> &'static str;
}
