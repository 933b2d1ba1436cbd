use super::*;

#[test]
fn tray_count_label_shows_used_over_capacity() {
    assert_eq!(tray_count_label(2, 3), "2/3");
}

#[test]
fn tray_item_label_prefers_title() {
    let vehicle = Vehicle { make: "Volvo".to_owned(), model: "XC60".to_owned(), ..Vehicle::with_id("v9") };
    assert_eq!(tray_item_label(&vehicle), "Volvo XC60");
}

#[test]
fn tray_item_label_falls_back_to_id() {
    assert_eq!(tray_item_label(&Vehicle::with_id("v9")), "v9");
}
