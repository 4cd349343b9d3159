mod memory;

pub use memory::{
    CityRecord, CompanyRecord, GovernmentBodyRecord, InMemoryDirectory, OperatorRecord, YardRecord,
};

use super::domain::{
    CityId, GovernmentBodyId, OperatorId, OperatorWithAssociations, RosterScope, TruckId, YardId,
};

/// Storage abstraction the dispatch service consumes. The retrieval contract
/// for [`find_active_serving_city`](OperatorDirectory::find_active_serving_city):
/// return operators whose status is active and that have at least one
/// city-coverage association whose city is active and whose name contains the
/// fragment case-insensitively, each joined with its owning company's name
/// and its active trucks, yards, and government bodies.
pub trait OperatorDirectory: Send + Sync {
    fn find_active_serving_city(
        &self,
        fragment: &str,
    ) -> Result<Vec<OperatorWithAssociations>, DirectoryError>;

    /// Roster ordered by operator name. `RosterScope::Active` is the regular
    /// view, `RosterScope::Full` the admin view including inactive rows.
    fn list(&self, scope: RosterScope) -> Result<Vec<OperatorWithAssociations>, DirectoryError>;

    /// Single operator with unfiltered associations.
    fn fetch(&self, id: &OperatorId)
        -> Result<Option<OperatorWithAssociations>, DirectoryError>;

    /// Replace the operator's truck set wholesale. Every referenced truck id
    /// must exist; otherwise the set is left unchanged.
    fn replace_trucks(
        &self,
        id: &OperatorId,
        trucks: Vec<TruckId>,
    ) -> Result<OperatorWithAssociations, DirectoryError>;

    /// Replace the operator's city-coverage set wholesale, same validation
    /// rules as [`replace_trucks`](OperatorDirectory::replace_trucks).
    fn replace_coverage(
        &self,
        id: &OperatorId,
        cities: Vec<CityId>,
    ) -> Result<OperatorWithAssociations, DirectoryError>;

    /// Idempotent: attaching an already-linked yard is a no-op.
    fn attach_yard(&self, id: &OperatorId, yard: &YardId) -> Result<(), DirectoryError>;

    /// Detaching an absent link is a no-op.
    fn detach_yard(&self, id: &OperatorId, yard: &YardId) -> Result<(), DirectoryError>;

    fn attach_government_body(
        &self,
        id: &OperatorId,
        body: &GovernmentBodyId,
    ) -> Result<(), DirectoryError>;

    fn detach_government_body(
        &self,
        id: &OperatorId,
        body: &GovernmentBodyId,
    ) -> Result<(), DirectoryError>;
}

/// Error enumeration for directory failures.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("operator not found")]
    OperatorNotFound,
    #[error("unknown {entity} id: {id}")]
    UnknownReference { entity: &'static str, id: String },
    #[error("directory unavailable: {0}")]
    Unavailable(String),
}
