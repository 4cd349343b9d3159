use super::common::seeded_directory;
use crate::dispatch::directory::{DirectoryError, OperatorDirectory};
use crate::dispatch::domain::{CityId, OperatorId, RosterScope, TruckId, YardId};

#[test]
fn search_matches_case_insensitive_substrings() {
    let directory = seeded_directory();

    for fragment in ["campinas", "CAMPINAS", "ampin", "Camp"] {
        let results = directory
            .find_active_serving_city(fragment)
            .expect("search succeeds");
        let names: Vec<&str> = results.iter().map(|op| op.name.as_str()).collect();
        assert_eq!(names, vec!["Bruno Farias", "Elias Prado"], "fragment {fragment}");
    }
}

#[test]
fn search_returns_empty_for_unknown_city() {
    let directory = seeded_directory();
    let results = directory
        .find_active_serving_city("porto alegre")
        .expect("search succeeds");
    assert!(results.is_empty());
}

#[test]
fn search_excludes_inactive_operators_even_with_matching_coverage() {
    let directory = seeded_directory();
    let results = directory
        .find_active_serving_city("campinas")
        .expect("search succeeds");
    assert!(results.iter().all(|op| op.id != OperatorId("op-ivo".to_string())));
}

#[test]
fn coverage_through_an_inactive_city_does_not_match() {
    let directory = seeded_directory();
    let results = directory
        .find_active_serving_city("sorocaba")
        .expect("search succeeds");
    assert!(results.is_empty());
}

#[test]
fn search_filters_nested_collections_to_active_rows() {
    let directory = seeded_directory();
    let results = directory
        .find_active_serving_city("campinas")
        .expect("search succeeds");

    let bruno = results
        .iter()
        .find(|op| op.id == OperatorId("op-bruno".to_string()))
        .expect("bruno matches");

    let plates: Vec<&str> = bruno.trucks.iter().map(|t| t.plate.as_str()).collect();
    assert_eq!(plates, vec!["ABC1D23", "XYZ9K88"], "inactive truck dropped");

    assert_eq!(bruno.yards.len(), 1);
    assert_eq!(bruno.yards[0].name, "Pátio Central");
    assert_eq!(bruno.yards[0].phone.as_deref(), Some("1932320001"));
    assert!(bruno.yards[0].maps_link.is_some());

    assert_eq!(bruno.government_bodies.len(), 1);
    assert_eq!(bruno.government_bodies[0].name, "DETRAN-SP");

    assert_eq!(bruno.company_name, "Guincho Norte");
}

#[test]
fn active_roster_hides_inactive_operators_and_rows() {
    let directory = seeded_directory();

    let active = directory.list(RosterScope::Active).expect("list succeeds");
    let names: Vec<&str> = active.iter().map(|op| op.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Amanda Rocha", "Bruno Farias", "Elias Prado", "Sidnei Moura"]
    );

    let full = directory.list(RosterScope::Full).expect("list succeeds");
    assert_eq!(full.len(), 5);

    let bruno_full = full
        .iter()
        .find(|op| op.id == OperatorId("op-bruno".to_string()))
        .expect("bruno listed");
    assert_eq!(bruno_full.trucks.len(), 3, "admin view keeps inactive truck");
    assert_eq!(bruno_full.yards.len(), 2);
}

#[test]
fn fetch_returns_unfiltered_associations() {
    let directory = seeded_directory();

    let bruno = directory
        .fetch(&OperatorId("op-bruno".to_string()))
        .expect("fetch succeeds")
        .expect("bruno exists");
    assert_eq!(bruno.trucks.len(), 3);
    assert_eq!(bruno.government_bodies.len(), 2);

    let missing = directory
        .fetch(&OperatorId("op-nobody".to_string()))
        .expect("fetch succeeds");
    assert!(missing.is_none());
}

#[test]
fn replace_trucks_swaps_the_whole_set() {
    let directory = seeded_directory();
    let bruno = OperatorId("op-bruno".to_string());

    let updated = directory
        .replace_trucks(&bruno, vec![TruckId("truck-parked".to_string())])
        .expect("replace succeeds");

    let plates: Vec<&str> = updated.trucks.iter().map(|t| t.plate.as_str()).collect();
    assert_eq!(plates, vec!["QWE2F45"], "previous links gone");
}

#[test]
fn replace_trucks_rejects_unknown_ids_and_keeps_the_old_set() {
    let directory = seeded_directory();
    let bruno = OperatorId("op-bruno".to_string());

    let error = directory
        .replace_trucks(
            &bruno,
            vec![
                TruckId("truck-light".to_string()),
                TruckId("truck-ghost".to_string()),
            ],
        )
        .expect_err("unknown truck rejected");
    assert!(matches!(
        error,
        DirectoryError::UnknownReference { entity: "truck", .. }
    ));

    let bruno = directory
        .fetch(&bruno)
        .expect("fetch succeeds")
        .expect("bruno exists");
    assert_eq!(bruno.trucks.len(), 3, "set unchanged after rejection");
}

#[test]
fn replace_coverage_follows_set_semantics() {
    let directory = seeded_directory();
    let bruno = OperatorId("op-bruno".to_string());

    directory
        .replace_coverage(&bruno, vec![CityId("city-jundiai".to_string())])
        .expect("replace succeeds");

    let campinas = directory
        .find_active_serving_city("campinas")
        .expect("search succeeds");
    assert!(campinas.iter().all(|op| op.id != bruno));

    let jundiai = directory
        .find_active_serving_city("jundia")
        .expect("search succeeds");
    assert!(jundiai.iter().any(|op| op.id == bruno));
}

#[test]
fn attach_yard_is_idempotent_and_detach_of_absent_link_is_a_noop() {
    let directory = seeded_directory();
    let elias = OperatorId("op-elias".to_string());
    let yard = YardId("yard-central".to_string());

    directory.attach_yard(&elias, &yard).expect("attach succeeds");
    directory.attach_yard(&elias, &yard).expect("attach twice");

    let fetched = directory
        .fetch(&elias)
        .expect("fetch succeeds")
        .expect("elias exists");
    assert_eq!(fetched.yards.len(), 1);

    directory.detach_yard(&elias, &yard).expect("detach succeeds");
    directory
        .detach_yard(&elias, &yard)
        .expect("detach of absent link is a no-op");
}

#[test]
fn mutations_on_unknown_operators_report_not_found() {
    let directory = seeded_directory();
    let ghost = OperatorId("op-ghost".to_string());

    assert!(matches!(
        directory.replace_trucks(&ghost, Vec::new()),
        Err(DirectoryError::OperatorNotFound)
    ));
    assert!(matches!(
        directory.attach_yard(&ghost, &YardId("yard-central".to_string())),
        Err(DirectoryError::OperatorNotFound)
    ));
    assert!(matches!(
        directory.detach_yard(&ghost, &YardId("yard-central".to_string())),
        Err(DirectoryError::OperatorNotFound)
    ));
}

#[test]
fn attaching_an_unknown_yard_is_rejected() {
    let directory = seeded_directory();
    let elias = OperatorId("op-elias".to_string());

    let error = directory
        .attach_yard(&elias, &YardId("yard-ghost".to_string()))
        .expect_err("unknown yard rejected");
    assert!(matches!(
        error,
        DirectoryError::UnknownReference { entity: "yard", .. }
    ));
}
