use super::*;
use serde_json::json;

#[test]
fn category_orders_cover_every_category_once() {
    for order in [Category::ALL, Category::DRAW_ORDER] {
        let mut seen = order.to_vec();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), CATEGORY_COUNT);
    }
    for (i, c) in Category::ALL.into_iter().enumerate() {
        assert_eq!(c.index(), i);
    }
}

#[test]
fn draw_order_is_back_to_front() {
    assert_eq!(
        Category::DRAW_ORDER.map(Category::name),
        ["neck", "clothing", "hands", "hair", "face", "item"]
    );
}

#[test]
fn category_names_roundtrip_through_text_and_json() {
    for c in Category::ALL {
        assert_eq!(c.name().parse::<Category>().unwrap(), c);
        assert_eq!(serde_json::to_value(c).unwrap(), json!(c.name()));
    }
    assert!("hat".parse::<Category>().is_err());
    assert!("Hair".parse::<Category>().is_err());
}

#[test]
fn parses_hex_short_long_and_alpha() {
    assert_eq!(Rgba8::from_hex("#ff0000").unwrap(), Rgba8::rgb(255, 0, 0));
    assert_eq!(Rgba8::from_hex("00FF00").unwrap(), Rgba8::rgb(0, 255, 0));
    assert_eq!(Rgba8::from_hex("#fff").unwrap(), Rgba8::WHITE);
    assert_eq!(Rgba8::from_hex("#0a0").unwrap(), Rgba8::rgb(0, 170, 0));
    assert_eq!(
        Rgba8::from_hex("#0000ff80").unwrap(),
        Rgba8::rgba(0, 0, 255, 128)
    );
}

#[test]
fn rejects_malformed_hex() {
    for bad in ["", "#", "#ff00", "#gg0000", "#+fffff", "#ff00000", "#ffé"] {
        assert!(Rgba8::from_hex(bad).is_err(), "{bad:?} should be rejected");
    }
}

#[test]
fn hex_text_form_drops_opaque_alpha() {
    assert_eq!(Rgba8::rgb(1, 2, 3).to_hex(), "#010203");
    assert_eq!(Rgba8::rgba(1, 2, 3, 4).to_hex(), "#01020304");
    assert_eq!(Rgba8::TRANSPARENT.to_string(), "#00000000");
}

#[test]
fn deserializes_hex_and_arrays() {
    let c: Rgba8 = serde_json::from_value(json!("#336699")).unwrap();
    assert_eq!(c, Rgba8::rgb(0x33, 0x66, 0x99));

    let c: Rgba8 = serde_json::from_value(json!([1, 2, 3])).unwrap();
    assert_eq!(c, Rgba8::rgb(1, 2, 3));

    let c: Rgba8 = serde_json::from_value(json!([1, 2, 3, 4])).unwrap();
    assert_eq!(c, Rgba8::rgba(1, 2, 3, 4));

    assert!(serde_json::from_value::<Rgba8>(json!([1, 2])).is_err());
    assert!(serde_json::from_value::<Rgba8>(json!("#12")).is_err());
    assert_eq!(serde_json::to_value(Rgba8::WHITE).unwrap(), json!("#ffffff"));
}
