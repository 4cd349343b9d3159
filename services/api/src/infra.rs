use chrono::{DateTime, TimeZone, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tow_dispatch::dispatch::{
    CityId, CityRecord, CompanyId, CompanyRecord, EntityStatus, GovernmentBodyId,
    GovernmentBodyRecord, InMemoryDirectory, LicenseCategory, OperatorId, OperatorRecord,
    TrailerType, Truck, TruckId, YardId, YardRecord,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

fn registered(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 8, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// Demo fleet stood up until a real persistence backend is wired in: one
/// company, two cities, a yard, a government body, and three operators whose
/// license categories exercise the whole compatibility table.
pub(crate) fn seeded_directory() -> InMemoryDirectory {
    let directory = InMemoryDirectory::new();

    directory.add_company(CompanyRecord {
        id: CompanyId("co-guincho-uniao".to_string()),
        name: "Guincho União".to_string(),
        status: EntityStatus::Active,
    });

    directory.add_city(CityRecord {
        id: CityId("city-campinas".to_string()),
        name: "Campinas".to_string(),
        state: "SP".to_string(),
        status: EntityStatus::Active,
    });
    directory.add_city(CityRecord {
        id: CityId("city-valinhos".to_string()),
        name: "Valinhos".to_string(),
        state: "SP".to_string(),
        status: EntityStatus::Active,
    });

    directory.add_yard(YardRecord {
        id: YardId("yard-anhanguera".to_string()),
        name: "Pátio Anhanguera".to_string(),
        phone: Some("1933330101".to_string()),
        maps_link: Some("https://maps.example/patio-anhanguera".to_string()),
        status: EntityStatus::Active,
    });

    directory.add_government_body(GovernmentBodyRecord {
        id: GovernmentBodyId("gov-detran-sp".to_string()),
        name: "DETRAN-SP".to_string(),
        status: EntityStatus::Active,
    });

    directory.add_truck(Truck {
        id: TruckId("truck-prancha".to_string()),
        plate: "FPX2C31".to_string(),
        model: "VW Constellation prancha".to_string(),
        trailer_type: TrailerType::Heavy,
        status: EntityStatus::Active,
        company_id: CompanyId("co-guincho-uniao".to_string()),
        registered_at: registered(2023, 11, 6),
    });
    directory.add_truck(Truck {
        id: TruckId("truck-plataforma".to_string()),
        plate: "GHD8E55".to_string(),
        model: "Iveco Daily plataforma".to_string(),
        trailer_type: TrailerType::Light,
        status: EntityStatus::Active,
        company_id: CompanyId("co-guincho-uniao".to_string()),
        registered_at: registered(2024, 2, 19),
    });

    let operators = [
        OperatorRecord {
            id: OperatorId("op-barbosa".to_string()),
            name: "Caio Barbosa".to_string(),
            phone: "19996170034".to_string(),
            license_category: LicenseCategory::B,
            status: EntityStatus::Active,
            company_id: CompanyId("co-guincho-uniao".to_string()),
            registered_at: registered(2024, 1, 8),
            truck_ids: vec![
                TruckId("truck-prancha".to_string()),
                TruckId("truck-plataforma".to_string()),
            ],
            city_ids: vec![CityId("city-campinas".to_string())],
            yard_ids: vec![YardId("yard-anhanguera".to_string())],
            government_body_ids: vec![GovernmentBodyId("gov-detran-sp".to_string())],
        },
        OperatorRecord {
            id: OperatorId("op-estevao".to_string()),
            name: "Estevão Duarte".to_string(),
            phone: "19997810262".to_string(),
            license_category: LicenseCategory::E,
            status: EntityStatus::Active,
            company_id: CompanyId("co-guincho-uniao".to_string()),
            registered_at: registered(2023, 12, 1),
            truck_ids: vec![
                TruckId("truck-prancha".to_string()),
                TruckId("truck-plataforma".to_string()),
            ],
            city_ids: vec![
                CityId("city-campinas".to_string()),
                CityId("city-valinhos".to_string()),
            ],
            yard_ids: vec![YardId("yard-anhanguera".to_string())],
            government_body_ids: vec![GovernmentBodyId("gov-detran-sp".to_string())],
        },
        OperatorRecord {
            id: OperatorId("op-amaral".to_string()),
            name: "Renata Amaral".to_string(),
            phone: "19991230408".to_string(),
            license_category: LicenseCategory::AB,
            status: EntityStatus::Active,
            company_id: CompanyId("co-guincho-uniao".to_string()),
            registered_at: registered(2024, 4, 23),
            truck_ids: vec![TruckId("truck-plataforma".to_string())],
            city_ids: vec![CityId("city-valinhos".to_string())],
            yard_ids: Vec::new(),
            government_body_ids: Vec::new(),
        },
    ];

    for record in operators {
        directory
            .add_operator(record)
            .expect("seed references resolve");
    }

    directory
}
