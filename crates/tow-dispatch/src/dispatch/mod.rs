//! Dispatch-eligibility matching: find active operators serving a city and
//! flag, per operator, which of their trucks the operator's license category
//! legally permits towing.
//!
//! The compatibility verdict is a derived view computed on every read; it is
//! never stored on a truck, because the same truck carries different verdicts
//! under operators with different license categories.

pub mod directory;
pub mod domain;
pub mod eligibility;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use directory::{
    CityRecord, CompanyRecord, DirectoryError, GovernmentBodyRecord, InMemoryDirectory,
    OperatorDirectory, OperatorRecord, YardRecord,
};
pub use domain::{
    AnnotatedTruck, CityId, CompanyId, DispatchCandidate, EntityStatus, GovernmentBodyId,
    GovernmentBodySummary, LicenseCategory, OperatorId, OperatorWithAssociations, RosterScope,
    TrailerType, Truck, TruckId, YardId, YardSummary,
};
pub use eligibility::{CompatibilityTable, EligibilityAnnotator, TrailerClasses};
pub use router::dispatch_router;
pub use service::{DispatchService, DispatchServiceError};
