//! End-to-end checks against the demo catalog.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use safe_catalog::prelude::*;

fn demo_service() -> ComplianceService {
    let service = ComplianceService::new(Arc::new(MemoryCatalog::new()));
    CatalogSeed::demo().apply(&service).unwrap();
    service
}

fn id_of(service: &ComplianceService, name: &str) -> ProductId {
    service.find_by_name(name).unwrap().unwrap().id
}

#[test]
fn coca_cola_is_boycotted_with_ranked_alternatives() {
    let service = demo_service();
    let response = service.check_by_name("coca-cola").unwrap();

    assert_eq!(response.status, CheckStatus::Boycotted);
    assert_eq!(response.message, "This product may be on the boycott list!");
    assert_eq!(response.product_name.as_deref(), Some("Coca-Cola"));
    assert_eq!(
        response.boycott_reason.as_deref(),
        Some("Company supporting Israeli occupation")
    );

    let names: Vec<&str> = response.suggestions.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Tunisian Orange Juice", "Tunisian Dates"]);
    assert_eq!(response.suggestions[0].similarity_score, 0.85);
    assert_eq!(
        response.suggestions[0].reason,
        "Healthy Tunisian juice alternative"
    );
    assert_eq!(response.suggestions[0].brand.as_deref(), Some("Sfaxian"));
    assert_eq!(response.suggestions[0].price, Some(2.0));
}

#[test]
fn single_edge_scenario() {
    let service = ComplianceService::new(Arc::new(MemoryCatalog::new()));
    let cola = service
        .add_product(NewProduct::new("Coca-Cola").boycotted("Company supporting Israeli occupation"))
        .unwrap();
    let juice = service
        .add_product(NewProduct::new("Tunisian Orange Juice").tunisian())
        .unwrap();
    service
        .add_alternative(cola.id, juice.id, "Healthy Tunisian juice alternative", Some(0.85))
        .unwrap();

    let response = service.check_by_name("coca-cola").unwrap();
    assert_eq!(response.status, CheckStatus::Boycotted);
    assert_eq!(response.suggestions.len(), 1);
    assert_eq!(response.suggestions[0].name, "Tunisian Orange Juice");
    assert_eq!(response.suggestions[0].similarity_score, 0.85);
}

#[test]
fn unknown_name_is_not_found() {
    let service = demo_service();
    let response = service.check_by_name("Unknown Brand XYZ").unwrap();
    assert_eq!(response, ProductCheckResponse::not_found());
    assert_eq!(response.status, CheckStatus::NotFound);
    assert!(response.suggestions.is_empty());
}

#[test]
fn unknown_barcode_is_not_found() {
    let service = demo_service();
    let response = service.check_by_barcode("0000000000000").unwrap();
    assert_eq!(response.status, CheckStatus::NotFound);
    assert!(response.suggestions.is_empty());
}

#[test]
fn every_safe_product_is_safe() {
    let service = demo_service();
    for product in service.list_products().unwrap() {
        if product.boycotted {
            continue;
        }
        let response = service.check_by_name(&product.name).unwrap();
        assert_eq!(response.status, CheckStatus::Safe, "{}", product.name);
        assert_eq!(response.message, "This product is safe to consume");
        assert!(response.suggestions.is_empty());
    }
}

#[test]
fn every_boycotted_product_lists_all_its_edges() {
    let service = demo_service();
    let store = service.store().clone();
    for product in service.list_boycotted().unwrap() {
        let response = service.check_by_name(&product.name).unwrap();
        let edges = store.find_alternatives_for_boycotted(product.id).unwrap();

        assert_eq!(response.status, CheckStatus::Boycotted);
        assert_eq!(response.boycott_reason, product.boycott_reason);
        assert_eq!(response.suggestions.len(), edges.len());
        assert!(response
            .suggestions
            .windows(2)
            .all(|pair| pair[0].similarity_score >= pair[1].similarity_score));
    }
}

#[test]
fn barcode_and_name_checks_agree() {
    let service = demo_service();
    for product in service.list_products().unwrap() {
        let Some(barcode) = product.barcode.as_deref() else {
            continue;
        };
        assert_eq!(
            service.check_by_barcode(barcode).unwrap(),
            service.check_by_name(&product.name).unwrap()
        );
    }
}

#[test]
fn name_lookup_ignores_case() {
    let service = demo_service();
    assert_eq!(
        service.check_by_name("Coca-Cola").unwrap(),
        service.check_by_name("COCA-COLA").unwrap()
    );
}

#[test]
fn add_alternative_with_unknown_ids_creates_nothing() {
    let service = demo_service();
    let cola = id_of(&service, "Coca-Cola");
    let before = service.store().find_all_alternatives().unwrap().len();

    let missing = ProductId::new(999);
    let err = service
        .add_alternative(missing, cola, "reason", None)
        .unwrap_err();
    assert!(matches!(
        err,
        CatalogError::ReferentialIntegrity {
            end: EdgeEnd::Boycotted,
            ..
        }
    ));

    let err = service
        .add_alternative(cola, missing, "reason", None)
        .unwrap_err();
    assert!(matches!(
        err,
        CatalogError::ReferentialIntegrity {
            end: EdgeEnd::Alternative,
            ..
        }
    ));

    assert_eq!(service.store().find_all_alternatives().unwrap().len(), before);
}

#[test]
fn omitted_score_defaults() {
    let service = demo_service();
    let nescafe = id_of(&service, "Nescafe");
    let harissa = id_of(&service, "Tunisian Harissa");

    let edge = service
        .add_alternative(nescafe, harissa, "reason", None)
        .unwrap();
    assert_eq!(edge.similarity_score, 0.95);
    assert_eq!(edge.similarity_score, DEFAULT_SIMILARITY_SCORE);

    let response = service.check_by_name("Nescafe").unwrap();
    assert_eq!(response.suggestions[0].product_id, harissa);
}

#[test]
fn search_variants() {
    let service = demo_service();
    let names = |products: Vec<Product>| {
        products
            .into_iter()
            .map(|p| p.name)
            .collect::<Vec<_>>()
    };

    assert_eq!(
        names(service.search_products("starbucks").unwrap()),
        vec!["Starbucks products"]
    );
    assert_eq!(
        names(service.search_products("kitchen").unwrap()),
        vec!["Tunisian Harissa"]
    );
    assert!(service.search_descriptions("kitchen").unwrap().is_empty());
    assert_eq!(
        names(service.search_descriptions("INSTANT").unwrap()),
        vec!["Nescafe"]
    );
}

#[test]
fn listings() {
    let service = demo_service();
    assert_eq!(service.list_boycotted().unwrap().len(), 3);
    assert_eq!(service.list_tunisian().unwrap().len(), 5);

    let coffee = service.list_tunisian_by_category("Coffee").unwrap();
    assert_eq!(coffee.len(), 1);
    assert_eq!(coffee[0].name, "Tunisian Coffee");
    assert!(service.list_tunisian_by_category("Cafes").unwrap().is_empty());
}

#[test]
fn existence_checks() {
    let service = demo_service();
    assert!(service.product_exists("Nescafe").unwrap());
    assert!(!service.product_exists("Pepsi").unwrap());
    assert!(service.barcode_exists("3333333333").unwrap());
    assert!(!service.barcode_exists("3333").unwrap());
}

#[test]
fn conflicting_flags_are_rejected_on_write() {
    let service = demo_service();
    let err = service
        .add_product(NewProduct::new("Two Faced").boycotted("reason").tunisian())
        .unwrap_err();
    assert!(matches!(err, CatalogError::Validation(_)));
    assert!(service.find_by_name("Two Faced").unwrap().is_none());
}
