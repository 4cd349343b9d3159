use std::sync::Arc;

use tracing::debug;

use super::directory::{DirectoryError, OperatorDirectory};
use super::domain::{
    CityId, DispatchCandidate, GovernmentBodyId, OperatorId, OperatorWithAssociations,
    RosterScope, TruckId, YardId,
};
use super::eligibility::{CompatibilityTable, EligibilityAnnotator};

/// Facade composing the operator directory with the eligibility annotator.
/// Every read path that carries an operator's trucks goes through
/// [`annotate`](Self::annotate), so the compatibility flag is recomputed on
/// each response and never exposed outside a specific operator's context.
pub struct DispatchService<D> {
    directory: Arc<D>,
    annotator: EligibilityAnnotator,
}

impl<D> DispatchService<D>
where
    D: OperatorDirectory + 'static,
{
    pub fn new(directory: Arc<D>) -> Self {
        Self::with_table(directory, CompatibilityTable::default())
    }

    pub fn with_table(directory: Arc<D>, table: CompatibilityTable) -> Self {
        Self {
            directory,
            annotator: EligibilityAnnotator::new(table),
        }
    }

    /// Active operators serving the given city, trucks annotated with each
    /// operator's own license category. An empty result is a valid answer.
    ///
    /// Callers must reject empty fragments before invoking; the HTTP layer
    /// does so with a 400.
    pub fn search_by_city(
        &self,
        fragment: &str,
    ) -> Result<Vec<DispatchCandidate>, DispatchServiceError> {
        let operators = self.directory.find_active_serving_city(fragment)?;
        debug!(fragment, candidates = operators.len(), "dispatch search completed");
        Ok(operators
            .into_iter()
            .map(|operator| self.annotate(operator))
            .collect())
    }

    pub fn roster(
        &self,
        scope: RosterScope,
    ) -> Result<Vec<DispatchCandidate>, DispatchServiceError> {
        let operators = self.directory.list(scope)?;
        Ok(operators
            .into_iter()
            .map(|operator| self.annotate(operator))
            .collect())
    }

    pub fn operator(&self, id: &OperatorId) -> Result<DispatchCandidate, DispatchServiceError> {
        let operator = self
            .directory
            .fetch(id)?
            .ok_or(DirectoryError::OperatorNotFound)?;
        Ok(self.annotate(operator))
    }

    /// Replace the operator's truck set wholesale and return the fresh
    /// annotated view.
    pub fn assign_trucks(
        &self,
        id: &OperatorId,
        trucks: Vec<TruckId>,
    ) -> Result<DispatchCandidate, DispatchServiceError> {
        let operator = self.directory.replace_trucks(id, trucks)?;
        Ok(self.annotate(operator))
    }

    /// Replace the operator's city-coverage set wholesale.
    pub fn assign_coverage(
        &self,
        id: &OperatorId,
        cities: Vec<CityId>,
    ) -> Result<DispatchCandidate, DispatchServiceError> {
        let operator = self.directory.replace_coverage(id, cities)?;
        Ok(self.annotate(operator))
    }

    pub fn attach_yard(&self, id: &OperatorId, yard: &YardId) -> Result<(), DispatchServiceError> {
        Ok(self.directory.attach_yard(id, yard)?)
    }

    pub fn detach_yard(&self, id: &OperatorId, yard: &YardId) -> Result<(), DispatchServiceError> {
        Ok(self.directory.detach_yard(id, yard)?)
    }

    pub fn attach_government_body(
        &self,
        id: &OperatorId,
        body: &GovernmentBodyId,
    ) -> Result<(), DispatchServiceError> {
        Ok(self.directory.attach_government_body(id, body)?)
    }

    pub fn detach_government_body(
        &self,
        id: &OperatorId,
        body: &GovernmentBodyId,
    ) -> Result<(), DispatchServiceError> {
        Ok(self.directory.detach_government_body(id, body)?)
    }

    fn annotate(&self, operator: OperatorWithAssociations) -> DispatchCandidate {
        let OperatorWithAssociations {
            id,
            name,
            phone,
            license_category,
            status,
            company_name,
            registered_at,
            trucks,
            yards,
            government_bodies,
        } = operator;

        DispatchCandidate {
            id,
            name,
            phone,
            license_category,
            status,
            company_name,
            registered_at,
            trucks: self.annotator.annotate(trucks, license_category),
            yards,
            government_bodies,
        }
    }
}

/// Error raised by the dispatch facade. Retrieval failures pass through
/// unchanged; no retry happens at this layer.
#[derive(Debug, thiserror::Error)]
pub enum DispatchServiceError {
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}
