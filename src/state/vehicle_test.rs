use super::*;

#[test]
fn with_id_leaves_display_fields_empty() {
    let vehicle = Vehicle::with_id("v1");
    assert_eq!(vehicle.id, "v1");
    assert!(vehicle.make.is_empty());
    assert!(vehicle.price.is_none());
}

#[test]
fn title_joins_year_make_model() {
    let vehicle = Vehicle {
        year: Some(2021),
        make: "Toyota".to_owned(),
        model: "Corolla".to_owned(),
        ..Vehicle::with_id("v1")
    };
    assert_eq!(vehicle.title(), "2021 Toyota Corolla");
}

#[test]
fn title_skips_missing_parts() {
    let vehicle = Vehicle { make: "Skoda".to_owned(), ..Vehicle::with_id("v1") };
    assert_eq!(vehicle.title(), "Skoda");
    assert_eq!(Vehicle::with_id("v2").title(), "");
}

#[test]
fn format_grouped_inserts_thousand_separators() {
    assert_eq!(format_grouped(0), "0");
    assert_eq!(format_grouped(999), "999");
    assert_eq!(format_grouped(24_990), "24 990");
    assert_eq!(format_grouped(1_250_000), "1 250 000");
}

#[test]
fn deserializes_camel_case_and_defaults_missing_fields() {
    let vehicle: Vehicle = serde_json::from_str(r#"{"id":"v1","fuelType":"diesel","imageUrl":"/a.jpg"}"#).unwrap();
    assert_eq!(vehicle.id, "v1");
    assert_eq!(vehicle.fuel_type.as_deref(), Some("diesel"));
    assert_eq!(vehicle.image_url.as_deref(), Some("/a.jpg"));
    assert!(vehicle.year.is_none());
}
