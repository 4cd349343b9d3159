use std::sync::Arc;

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::dispatch::directory::{
    CityRecord, CompanyRecord, DirectoryError, GovernmentBodyRecord, InMemoryDirectory,
    OperatorDirectory, OperatorRecord, YardRecord,
};
use crate::dispatch::domain::{
    CityId, CompanyId, EntityStatus, GovernmentBodyId, LicenseCategory, OperatorId,
    OperatorWithAssociations, RosterScope, TrailerType, Truck, TruckId, YardId,
};
use crate::dispatch::service::DispatchService;

pub(super) fn registered() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 18, 14, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn truck(
    id: &str,
    plate: &str,
    trailer_type: TrailerType,
    status: EntityStatus,
) -> Truck {
    Truck {
        id: TruckId(id.to_string()),
        plate: plate.to_string(),
        model: "Mercedes Atego".to_string(),
        trailer_type,
        status,
        company_id: CompanyId("co-guincho-norte".to_string()),
        registered_at: registered(),
    }
}

fn operator(
    id: &str,
    name: &str,
    category: LicenseCategory,
    status: EntityStatus,
) -> OperatorRecord {
    OperatorRecord {
        id: OperatorId(id.to_string()),
        name: name.to_string(),
        phone: "11987650000".to_string(),
        license_category: category,
        status,
        company_id: CompanyId("co-guincho-norte".to_string()),
        registered_at: registered(),
        truck_ids: Vec::new(),
        city_ids: Vec::new(),
        yard_ids: Vec::new(),
        government_body_ids: Vec::new(),
    }
}

/// Directory seeded with the scenarios the suites exercise: two active
/// operators sharing the same truck pair under different categories, an
/// A-category operator, an inactive operator, and an operator whose only
/// covered city is itself inactive.
pub(super) fn seeded_directory() -> Arc<InMemoryDirectory> {
    let directory = InMemoryDirectory::new();

    directory.add_company(CompanyRecord {
        id: CompanyId("co-guincho-norte".to_string()),
        name: "Guincho Norte".to_string(),
        status: EntityStatus::Active,
    });

    directory.add_city(CityRecord {
        id: CityId("city-campinas".to_string()),
        name: "Campinas".to_string(),
        state: "SP".to_string(),
        status: EntityStatus::Active,
    });
    directory.add_city(CityRecord {
        id: CityId("city-jundiai".to_string()),
        name: "Jundiaí".to_string(),
        state: "SP".to_string(),
        status: EntityStatus::Active,
    });
    directory.add_city(CityRecord {
        id: CityId("city-sorocaba".to_string()),
        name: "Sorocaba".to_string(),
        state: "SP".to_string(),
        status: EntityStatus::Inactive,
    });

    directory.add_yard(YardRecord {
        id: YardId("yard-central".to_string()),
        name: "Pátio Central".to_string(),
        phone: Some("1932320001".to_string()),
        maps_link: Some("https://maps.example/patio-central".to_string()),
        status: EntityStatus::Active,
    });
    directory.add_yard(YardRecord {
        id: YardId("yard-leste".to_string()),
        name: "Pátio Leste".to_string(),
        phone: None,
        maps_link: None,
        status: EntityStatus::Inactive,
    });

    directory.add_government_body(GovernmentBodyRecord {
        id: GovernmentBodyId("gov-detran".to_string()),
        name: "DETRAN-SP".to_string(),
        status: EntityStatus::Active,
    });
    directory.add_government_body(GovernmentBodyRecord {
        id: GovernmentBodyId("gov-prefeitura".to_string()),
        name: "Prefeitura de Campinas".to_string(),
        status: EntityStatus::Inactive,
    });

    directory.add_truck(truck(
        "truck-heavy",
        "ABC1D23",
        TrailerType::Heavy,
        EntityStatus::Active,
    ));
    directory.add_truck(truck(
        "truck-light",
        "XYZ9K88",
        TrailerType::Light,
        EntityStatus::Active,
    ));
    directory.add_truck(truck(
        "truck-parked",
        "QWE2F45",
        TrailerType::Light,
        EntityStatus::Inactive,
    ));

    let mut bruno = operator(
        "op-bruno",
        "Bruno Farias",
        LicenseCategory::B,
        EntityStatus::Active,
    );
    bruno.truck_ids = vec![
        TruckId("truck-heavy".to_string()),
        TruckId("truck-light".to_string()),
        TruckId("truck-parked".to_string()),
    ];
    bruno.city_ids = vec![CityId("city-campinas".to_string())];
    bruno.yard_ids = vec![
        YardId("yard-central".to_string()),
        YardId("yard-leste".to_string()),
    ];
    bruno.government_body_ids = vec![
        GovernmentBodyId("gov-detran".to_string()),
        GovernmentBodyId("gov-prefeitura".to_string()),
    ];

    let mut elias = operator(
        "op-elias",
        "Elias Prado",
        LicenseCategory::E,
        EntityStatus::Active,
    );
    elias.truck_ids = vec![
        TruckId("truck-heavy".to_string()),
        TruckId("truck-light".to_string()),
    ];
    elias.city_ids = vec![
        CityId("city-campinas".to_string()),
        CityId("city-jundiai".to_string()),
    ];

    let mut amanda = operator(
        "op-amanda",
        "Amanda Rocha",
        LicenseCategory::A,
        EntityStatus::Active,
    );
    amanda.truck_ids = vec![TruckId("truck-light".to_string())];
    amanda.city_ids = vec![CityId("city-jundiai".to_string())];

    let mut ivo = operator(
        "op-ivo",
        "Ivo Teixeira",
        LicenseCategory::C,
        EntityStatus::Inactive,
    );
    ivo.truck_ids = vec![TruckId("truck-heavy".to_string())];
    ivo.city_ids = vec![CityId("city-campinas".to_string())];

    let mut sid = operator(
        "op-sid",
        "Sidnei Moura",
        LicenseCategory::D,
        EntityStatus::Active,
    );
    sid.truck_ids = vec![TruckId("truck-heavy".to_string())];
    sid.city_ids = vec![CityId("city-sorocaba".to_string())];

    for record in [bruno, elias, amanda, ivo, sid] {
        directory
            .add_operator(record)
            .expect("seed references resolve");
    }

    Arc::new(directory)
}

pub(super) fn build_service() -> (
    Arc<DispatchService<InMemoryDirectory>>,
    Arc<InMemoryDirectory>,
) {
    let directory = seeded_directory();
    let service = Arc::new(DispatchService::new(directory.clone()));
    (service, directory)
}

/// Directory double that fails every call, mirroring a storage outage.
pub(super) struct UnavailableDirectory;

impl UnavailableDirectory {
    fn outage() -> DirectoryError {
        DirectoryError::Unavailable("database offline".to_string())
    }
}

impl OperatorDirectory for UnavailableDirectory {
    fn find_active_serving_city(
        &self,
        _fragment: &str,
    ) -> Result<Vec<OperatorWithAssociations>, DirectoryError> {
        Err(Self::outage())
    }

    fn list(&self, _scope: RosterScope) -> Result<Vec<OperatorWithAssociations>, DirectoryError> {
        Err(Self::outage())
    }

    fn fetch(
        &self,
        _id: &OperatorId,
    ) -> Result<Option<OperatorWithAssociations>, DirectoryError> {
        Err(Self::outage())
    }

    fn replace_trucks(
        &self,
        _id: &OperatorId,
        _trucks: Vec<TruckId>,
    ) -> Result<OperatorWithAssociations, DirectoryError> {
        Err(Self::outage())
    }

    fn replace_coverage(
        &self,
        _id: &OperatorId,
        _cities: Vec<CityId>,
    ) -> Result<OperatorWithAssociations, DirectoryError> {
        Err(Self::outage())
    }

    fn attach_yard(&self, _id: &OperatorId, _yard: &YardId) -> Result<(), DirectoryError> {
        Err(Self::outage())
    }

    fn detach_yard(&self, _id: &OperatorId, _yard: &YardId) -> Result<(), DirectoryError> {
        Err(Self::outage())
    }

    fn attach_government_body(
        &self,
        _id: &OperatorId,
        _body: &GovernmentBodyId,
    ) -> Result<(), DirectoryError> {
        Err(Self::outage())
    }

    fn detach_government_body(
        &self,
        _id: &OperatorId,
        _body: &GovernmentBodyId,
    ) -> Result<(), DirectoryError> {
        Err(Self::outage())
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
