use super::*;

#[test]
fn user_deserializes_from_auth_me_payload() {
    let json = r#"{"id": 3, "username": "olena", "email": "olena@example.com", "is_admin": true}"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.id, 3);
    assert_eq!(user.username, "olena");
    assert!(user.is_admin);
}

#[test]
fn asset_maps_wire_type_field_to_kind() {
    let json = r#"{
        "id": 1,
        "name": "Ford Transit",
        "type": "Мікроавтобус",
        "description": null,
        "status": "Доступно",
        "price_per_day": 1200.0,
        "created_at": "2025-03-01T10:00:00",
        "updated_at": "2025-03-02T08:30:00"
    }"#;
    let asset: Asset = serde_json::from_str(json).unwrap();
    assert_eq!(asset.kind, "Мікроавтобус");
    assert!(asset.is_available());

    let back = serde_json::to_value(&asset).unwrap();
    assert_eq!(back["type"], "Мікроавтобус");
    assert!(back.get("kind").is_none());
}

#[test]
fn rental_tolerates_null_end_date_and_cost() {
    let json = r#"{
        "id": 5,
        "asset_id": 1,
        "asset_name": "Ford Transit",
        "user_id": 3,
        "username": "olena",
        "start_date": "2025-03-10",
        "end_date": null,
        "total_cost": null,
        "status": "Активний"
    }"#;
    let rental: Rental = serde_json::from_str(json).unwrap();
    assert!(rental.end_date.is_none());
    assert!(rental.total_cost.is_none());
    assert!(rental.is_active());
}

#[test]
fn cancelled_rental_is_not_active() {
    let rental = Rental {
        id: 5,
        asset_id: 1,
        asset_name: "Ford Transit".to_owned(),
        user_id: 3,
        username: "olena".to_owned(),
        start_date: "2025-03-10".to_owned(),
        end_date: Some("2025-03-12".to_owned()),
        total_cost: Some(2400.0),
        status: "Скасована".to_owned(),
    };
    assert!(!rental.is_active());
}

#[test]
fn new_asset_serializes_kind_as_type() {
    let payload = NewAsset {
        name: "Генератор".to_owned(),
        kind: "Обладнання".to_owned(),
        description: String::new(),
        price_per_day: 450.0,
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["type"], "Обладнання");
}

#[test]
fn dashboard_payload_deserializes() {
    let json = r#"{
        "user": {"username": "olena", "email": "olena@example.com", "is_admin": false},
        "active_rentals_count": 1,
        "monthly_expenses": 2400.0,
        "completed_rentals_count": 4,
        "active_rentals": [],
        "available_assets": []
    }"#;
    let data: DashboardData = serde_json::from_str(json).unwrap();
    assert_eq!(data.active_rentals_count, 1);
    assert!(!data.user.is_admin);
}
