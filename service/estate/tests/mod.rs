use std::sync::Arc;

use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use domain_estate::{
    exception::EstateException,
    mock::{MockApplianceRepo, MockOrderRepo, MockPropertyRepo, MockReplacementOptionRepo},
    model::{
        entity::{Appliance, Order, Property, ReplacementOption},
        vo::{AppliancePayload, OrderPayload, ReplacementOptionPayload},
    },
    service::{ApplianceService, OrderService, PropertyService, ReplacementOptionService},
};
use rust_decimal::Decimal;
use service_estate::{
    ApplianceServiceImpl, OrderServiceImpl, PropertyServiceImpl, ReplacementOptionServiceImpl,
};

fn property(id: i32) -> Property {
    Property {
        id,
        name: format!("Flat #{id}"),
        address: Some("Blackhorse Mills".to_string()),
        shipping_label: None,
    }
}

fn appliance(id: i32, property_id: i32) -> Appliance {
    Appliance {
        id,
        property_id,
        name: "Washing Machine".to_string(),
        brand: "LG".to_string(),
        model_number: "WM-123".to_string(),
        usage: Some("High".to_string()),
        image: None,
    }
}

fn replacement(id: i32) -> ReplacementOption {
    ReplacementOption {
        id,
        name: "Replacement 1".to_string(),
        brand: "Bosch".to_string(),
        model_number: "RB-123".to_string(),
        price: Decimal::new(30000, 2),
        efficiency: Some("High".to_string()),
        matching_score: 90,
    }
}

/// Repositories in which property 1, appliance 2 and replacement 3 exist.
fn existing_references() -> (MockPropertyRepo, MockApplianceRepo, MockReplacementOptionRepo) {
    let mut property_repo = MockPropertyRepo::new();
    property_repo
        .expect_get_by_id()
        .returning(|id| Ok((id == 1).then(|| property(1))));
    let mut appliance_repo = MockApplianceRepo::new();
    appliance_repo
        .expect_get_by_id()
        .returning(|id| Ok((id == 2).then(|| appliance(2, 1))));
    let mut replacement_option_repo = MockReplacementOptionRepo::new();
    replacement_option_repo
        .expect_get_by_id()
        .returning(|id| Ok((id == 3).then(|| replacement(3))));
    (property_repo, appliance_repo, replacement_option_repo)
}

fn order_service(order_repo: MockOrderRepo) -> OrderServiceImpl {
    let (property_repo, appliance_repo, replacement_option_repo) = existing_references();
    OrderServiceImpl::builder()
        .order_repo(Arc::new(order_repo))
        .property_repo(Arc::new(property_repo))
        .appliance_repo(Arc::new(appliance_repo))
        .replacement_option_repo(Arc::new(replacement_option_repo))
        .build()
}

fn order_payload(property: i32, appliance: i32, replacement: i32) -> OrderPayload {
    OrderPayload {
        property_id: Some(Some(property)),
        appliance_id: Some(Some(appliance)),
        replacement_id: Some(Some(replacement)),
        scheduled_date: Some(Some("2025-04-05".to_string())),
        scheduled_time: Some(Some("10:30".to_string())),
    }
}

#[tokio::test]
async fn test_property_list_nests_appliances() {
    let mut property_repo = MockPropertyRepo::new();
    property_repo
        .expect_get_all()
        .return_once(|| Ok(vec![property(1), property(2)]));
    let mut appliance_repo = MockApplianceRepo::new();
    appliance_repo
        .expect_get_all_by_property_ids()
        .withf(|ids| ids.to_vec() == vec![1, 2])
        .return_once(|_| Ok(vec![appliance(10, 2), appliance(11, 2)]));

    let service = PropertyServiceImpl::builder()
        .property_repo(Arc::new(property_repo))
        .appliance_repo(Arc::new(appliance_repo))
        .build();
    let details = service.list().await.unwrap();

    assert_eq!(details.len(), 2);
    assert!(details[0].appliances.is_empty());
    assert_eq!(
        details[1].appliances.iter().map(|a| a.id).collect::<Vec<_>>(),
        [10, 11]
    );
}

#[tokio::test]
async fn test_property_delete_missing_is_not_found() {
    let mut property_repo = MockPropertyRepo::new();
    property_repo.expect_get_by_id().return_once(|_| Ok(None));
    property_repo.expect_delete_by_id().never();

    let service = PropertyServiceImpl::builder()
        .property_repo(Arc::new(property_repo))
        .appliance_repo(Arc::new(MockApplianceRepo::new()))
        .build();

    assert!(matches!(
        service.delete(42).await,
        Err(EstateException::NotFound { id: 42, .. })
    ));
}

#[tokio::test]
async fn test_appliance_with_unknown_property_is_rejected() {
    let mut property_repo = MockPropertyRepo::new();
    property_repo.expect_get_by_id().return_once(|_| Ok(None));
    let mut appliance_repo = MockApplianceRepo::new();
    appliance_repo.expect_insert().never();

    let service = ApplianceServiceImpl::builder()
        .appliance_repo(Arc::new(appliance_repo))
        .property_repo(Arc::new(property_repo))
        .build();
    let payload = AppliancePayload {
        property_id: Some(Some(999)),
        name: Some(Some("Washing Machine".to_string())),
        brand: Some(Some("LG".to_string())),
        model_number: Some(Some("WM-123".to_string())),
        ..Default::default()
    };

    match service.create(payload).await {
        Err(EstateException::Validation(errors)) => {
            assert_eq!(
                errors.get("property").unwrap(),
                ["Invalid pk \"999\" - object does not exist."]
            );
            assert_eq!(errors.fields().count(), 1);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_order_create_stamps_created_at() {
    let mut order_repo = MockOrderRepo::new();
    order_repo.expect_insert().return_once(|order| {
        Ok(Order {
            id: 5,
            ..order.clone()
        })
    });
    let service = order_service(order_repo);

    let before = Utc::now();
    let order = service.create(order_payload(1, 2, 3)).await.unwrap();

    assert_eq!(order.id, 5);
    assert_eq!((order.property_id, order.appliance_id, order.replacement_id), (1, 2, 3));
    assert_eq!(order.scheduled_date, NaiveDate::from_ymd_opt(2025, 4, 5));
    assert_eq!(order.scheduled_time, NaiveTime::from_hms_opt(10, 30, 0));
    assert!(order.created_at >= before);
}

#[tokio::test]
async fn test_place_order_reports_every_bad_reference() {
    let mut order_repo = MockOrderRepo::new();
    order_repo.expect_insert().never();
    let service = order_service(order_repo);

    let payload = OrderPayload {
        replacement_id: None,
        ..order_payload(7, 8, 0)
    };
    match service.place_order(payload).await {
        Err(EstateException::Validation(errors)) => {
            assert_eq!(
                errors.fields().collect::<Vec<_>>(),
                ["appliance", "property", "replacement"]
            );
            assert_eq!(errors.get("replacement").unwrap(), ["This field is required."]);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_order_update_keeps_created_at() {
    let created_at = Utc::now() - Duration::days(3);
    let stored = Order {
        id: 5,
        property_id: 1,
        appliance_id: 2,
        replacement_id: 3,
        scheduled_date: None,
        scheduled_time: None,
        created_at,
    };
    let mut order_repo = MockOrderRepo::new();
    order_repo
        .expect_get_by_id()
        .return_once(move |_| Ok(Some(stored)));
    order_repo
        .expect_update()
        .withf(move |order| order.created_at == created_at)
        .return_once(|_| Ok(()));
    order_repo.expect_save_changed().return_once(|| Ok(true));
    let service = order_service(order_repo);

    let order = service.update(5, order_payload(1, 2, 3)).await.unwrap();
    assert_eq!(order.created_at, created_at);
    assert_eq!(order.scheduled_date, NaiveDate::from_ymd_opt(2025, 4, 5));
}

#[tokio::test]
async fn test_replacement_option_partial_update() {
    let mut replacement_option_repo = MockReplacementOptionRepo::new();
    replacement_option_repo
        .expect_get_by_id()
        .return_once(|_| Ok(Some(replacement(3))));
    replacement_option_repo
        .expect_update()
        .withf(|option| option.matching_score == 95 && option.price == Decimal::new(30000, 2))
        .return_once(|_| Ok(()));
    replacement_option_repo
        .expect_save_changed()
        .return_once(|| Ok(true));

    let service = ReplacementOptionServiceImpl::builder()
        .replacement_option_repo(Arc::new(replacement_option_repo))
        .build();
    let payload: ReplacementOptionPayload =
        serde_json::from_str(r#"{"matching_score": 95, "efficiency": null}"#).unwrap();
    let option = service.partial_update(3, payload).await.unwrap();

    assert_eq!(option.price.to_string(), "300.00");
    assert_eq!(option.efficiency, None);
}

#[tokio::test]
async fn test_appliance_update_keeps_unsent_optional_fields() {
    let (property_repo, _, _) = existing_references();
    let mut appliance_repo = MockApplianceRepo::new();
    appliance_repo
        .expect_get_by_id()
        .return_once(|_| Ok(Some(appliance(2, 1))));
    appliance_repo
        .expect_update()
        .withf(|a| a.brand == "Samsung" && a.usage.as_deref() == Some("High"))
        .return_once(|_| Ok(()));
    appliance_repo.expect_save_changed().return_once(|| Ok(true));

    let service = ApplianceServiceImpl::builder()
        .appliance_repo(Arc::new(appliance_repo))
        .property_repo(Arc::new(property_repo))
        .build();
    let payload: AppliancePayload = serde_json::from_str(
        r#"{"property": 1, "name": "Washing Machine", "brand": "Samsung", "model_number": "WM-9"}"#,
    )
    .unwrap();
    let updated = service.update(2, payload).await.unwrap();

    assert_eq!(updated.usage.as_deref(), Some("High"));
    assert_eq!(updated.model_number, "WM-9");
}
