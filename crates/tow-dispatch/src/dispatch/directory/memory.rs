use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};

use super::super::domain::{
    CityId, CompanyId, EntityStatus, GovernmentBodyId, GovernmentBodySummary, LicenseCategory,
    OperatorId, OperatorWithAssociations, RosterScope, Truck, TruckId, YardId, YardSummary,
};
use super::{DirectoryError, OperatorDirectory};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyRecord {
    pub id: CompanyId,
    pub name: String,
    pub status: EntityStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityRecord {
    pub id: CityId,
    pub name: String,
    pub state: String,
    pub status: EntityStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YardRecord {
    pub id: YardId,
    pub name: String,
    pub phone: Option<String>,
    pub maps_link: Option<String>,
    pub status: EntityStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GovernmentBodyRecord {
    pub id: GovernmentBodyId,
    pub name: String,
    pub status: EntityStatus,
}

/// Stored operator row: scalar fields plus association id lists. Association
/// order is insertion order and is preserved through every view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorRecord {
    pub id: OperatorId,
    pub name: String,
    pub phone: String,
    pub license_category: LicenseCategory,
    pub status: EntityStatus,
    pub company_id: CompanyId,
    pub registered_at: DateTime<Utc>,
    pub truck_ids: Vec<TruckId>,
    pub city_ids: Vec<CityId>,
    pub yard_ids: Vec<YardId>,
    pub government_body_ids: Vec<GovernmentBodyId>,
}

#[derive(Debug, Default)]
struct DirectoryState {
    companies: HashMap<CompanyId, CompanyRecord>,
    cities: HashMap<CityId, CityRecord>,
    yards: HashMap<YardId, YardRecord>,
    government_bodies: HashMap<GovernmentBodyId, GovernmentBodyRecord>,
    trucks: HashMap<TruckId, Truck>,
    operators: HashMap<OperatorId, OperatorRecord>,
}

/// In-memory operator directory used by the service binary and the tests.
/// Implements the full retrieval policy of the trait contract; real
/// persistence stays behind the same trait.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    state: Mutex<DirectoryState>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_company(&self, record: CompanyRecord) {
        let mut state = self.lock();
        state.companies.insert(record.id.clone(), record);
    }

    pub fn add_city(&self, record: CityRecord) {
        let mut state = self.lock();
        state.cities.insert(record.id.clone(), record);
    }

    pub fn add_yard(&self, record: YardRecord) {
        let mut state = self.lock();
        state.yards.insert(record.id.clone(), record);
    }

    pub fn add_government_body(&self, record: GovernmentBodyRecord) {
        let mut state = self.lock();
        state.government_bodies.insert(record.id.clone(), record);
    }

    pub fn add_truck(&self, truck: Truck) {
        let mut state = self.lock();
        state.trucks.insert(truck.id.clone(), truck);
    }

    /// Insert an operator, validating every referenced id so later joins
    /// cannot dangle.
    pub fn add_operator(&self, record: OperatorRecord) -> Result<(), DirectoryError> {
        let mut state = self.lock();

        if !state.companies.contains_key(&record.company_id) {
            return Err(unknown("company", &record.company_id.0));
        }
        for truck_id in &record.truck_ids {
            if !state.trucks.contains_key(truck_id) {
                return Err(unknown("truck", &truck_id.0));
            }
        }
        for city_id in &record.city_ids {
            if !state.cities.contains_key(city_id) {
                return Err(unknown("city", &city_id.0));
            }
        }
        for yard_id in &record.yard_ids {
            if !state.yards.contains_key(yard_id) {
                return Err(unknown("yard", &yard_id.0));
            }
        }
        for body_id in &record.government_body_ids {
            if !state.government_bodies.contains_key(body_id) {
                return Err(unknown("government body", &body_id.0));
            }
        }

        state.operators.insert(record.id.clone(), record);
        Ok(())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, DirectoryState> {
        self.state.lock().expect("directory mutex poisoned")
    }
}

fn unknown(entity: &'static str, id: &str) -> DirectoryError {
    DirectoryError::UnknownReference {
        entity,
        id: id.to_string(),
    }
}

/// Join one stored operator with its associations. `scope` governs whether
/// inactive nested rows survive into the view.
fn assemble(
    state: &DirectoryState,
    record: &OperatorRecord,
    scope: RosterScope,
) -> OperatorWithAssociations {
    let company_name = state
        .companies
        .get(&record.company_id)
        .map(|company| company.name.clone())
        .unwrap_or_default();

    let trucks = record
        .truck_ids
        .iter()
        .filter_map(|id| state.trucks.get(id))
        .filter(|truck| scope.includes_inactive() || truck.status.is_active())
        .cloned()
        .collect();

    let yards = record
        .yard_ids
        .iter()
        .filter_map(|id| state.yards.get(id))
        .filter(|yard| scope.includes_inactive() || yard.status.is_active())
        .map(|yard| YardSummary {
            id: yard.id.clone(),
            name: yard.name.clone(),
            maps_link: yard.maps_link.clone(),
            phone: yard.phone.clone(),
        })
        .collect();

    let government_bodies = record
        .government_body_ids
        .iter()
        .filter_map(|id| state.government_bodies.get(id))
        .filter(|body| scope.includes_inactive() || body.status.is_active())
        .map(|body| GovernmentBodySummary {
            id: body.id.clone(),
            name: body.name.clone(),
        })
        .collect();

    OperatorWithAssociations {
        id: record.id.clone(),
        name: record.name.clone(),
        phone: record.phone.clone(),
        license_category: record.license_category,
        status: record.status,
        company_name,
        registered_at: record.registered_at,
        trucks,
        yards,
        government_bodies,
    }
}

fn serves_city(state: &DirectoryState, record: &OperatorRecord, needle: &str) -> bool {
    record.city_ids.iter().any(|city_id| {
        state
            .cities
            .get(city_id)
            .map(|city| city.status.is_active() && city.name.to_lowercase().contains(needle))
            .unwrap_or(false)
    })
}

impl OperatorDirectory for InMemoryDirectory {
    fn find_active_serving_city(
        &self,
        fragment: &str,
    ) -> Result<Vec<OperatorWithAssociations>, DirectoryError> {
        let state = self.lock();
        let needle = fragment.to_lowercase();

        let mut matches: Vec<&OperatorRecord> = state
            .operators
            .values()
            .filter(|record| record.status.is_active())
            .filter(|record| serves_city(&state, record, &needle))
            .collect();
        matches.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(matches
            .into_iter()
            .map(|record| assemble(&state, record, RosterScope::Active))
            .collect())
    }

    fn list(&self, scope: RosterScope) -> Result<Vec<OperatorWithAssociations>, DirectoryError> {
        let state = self.lock();

        let mut records: Vec<&OperatorRecord> = state
            .operators
            .values()
            .filter(|record| scope.includes_inactive() || record.status.is_active())
            .collect();
        records.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(records
            .into_iter()
            .map(|record| assemble(&state, record, scope))
            .collect())
    }

    fn fetch(
        &self,
        id: &OperatorId,
    ) -> Result<Option<OperatorWithAssociations>, DirectoryError> {
        let state = self.lock();
        Ok(state
            .operators
            .get(id)
            .map(|record| assemble(&state, record, RosterScope::Full)))
    }

    fn replace_trucks(
        &self,
        id: &OperatorId,
        trucks: Vec<TruckId>,
    ) -> Result<OperatorWithAssociations, DirectoryError> {
        let mut state = self.lock();

        let mut record = match state.operators.get(id) {
            Some(record) => record.clone(),
            None => return Err(DirectoryError::OperatorNotFound),
        };
        for truck_id in &trucks {
            if !state.trucks.contains_key(truck_id) {
                return Err(unknown("truck", &truck_id.0));
            }
        }

        record.truck_ids = trucks;
        state.operators.insert(id.clone(), record.clone());
        Ok(assemble(&state, &record, RosterScope::Full))
    }

    fn replace_coverage(
        &self,
        id: &OperatorId,
        cities: Vec<CityId>,
    ) -> Result<OperatorWithAssociations, DirectoryError> {
        let mut state = self.lock();

        let mut record = match state.operators.get(id) {
            Some(record) => record.clone(),
            None => return Err(DirectoryError::OperatorNotFound),
        };
        for city_id in &cities {
            if !state.cities.contains_key(city_id) {
                return Err(unknown("city", &city_id.0));
            }
        }

        record.city_ids = cities;
        state.operators.insert(id.clone(), record.clone());
        Ok(assemble(&state, &record, RosterScope::Full))
    }

    fn attach_yard(&self, id: &OperatorId, yard: &YardId) -> Result<(), DirectoryError> {
        let mut state = self.lock();

        if !state.operators.contains_key(id) {
            return Err(DirectoryError::OperatorNotFound);
        }
        if !state.yards.contains_key(yard) {
            return Err(unknown("yard", &yard.0));
        }

        let record = state
            .operators
            .get_mut(id)
            .expect("operator presence checked under the same lock");
        if !record.yard_ids.contains(yard) {
            record.yard_ids.push(yard.clone());
        }
        Ok(())
    }

    fn detach_yard(&self, id: &OperatorId, yard: &YardId) -> Result<(), DirectoryError> {
        let mut state = self.lock();

        let record = state
            .operators
            .get_mut(id)
            .ok_or(DirectoryError::OperatorNotFound)?;
        record.yard_ids.retain(|linked| linked != yard);
        Ok(())
    }

    fn attach_government_body(
        &self,
        id: &OperatorId,
        body: &GovernmentBodyId,
    ) -> Result<(), DirectoryError> {
        let mut state = self.lock();

        if !state.operators.contains_key(id) {
            return Err(DirectoryError::OperatorNotFound);
        }
        if !state.government_bodies.contains_key(body) {
            return Err(unknown("government body", &body.0));
        }

        let record = state
            .operators
            .get_mut(id)
            .expect("operator presence checked under the same lock");
        if !record.government_body_ids.contains(body) {
            record.government_body_ids.push(body.clone());
        }
        Ok(())
    }

    fn detach_government_body(
        &self,
        id: &OperatorId,
        body: &GovernmentBodyId,
    ) -> Result<(), DirectoryError> {
        let mut state = self.lock();

        let record = state
            .operators
            .get_mut(id)
            .ok_or(DirectoryError::OperatorNotFound)?;
        record.government_body_ids.retain(|linked| linked != body);
        Ok(())
    }
}
