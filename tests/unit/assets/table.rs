use super::*;
use serde_json::{Value, json};

fn doc_with(variants_per_part: usize) -> Value {
    let mut parts = serde_json::Map::new();
    for c in Category::ALL {
        let variants: Vec<Value> = (0..variants_per_part)
            .map(|i| json!([[i, c.index(), "#102030"]]))
            .collect();
        parts.insert(c.name().to_string(), Value::Array(variants));
    }
    json!({ "grid": 16, "parts": parts })
}

fn asset_err(s: &str) -> AvatarError {
    AssetTable::from_json(s).unwrap_err()
}

#[test]
fn builtin_table_follows_schema() {
    let table = AssetTable::builtin();
    assert_eq!(table.grid_size(), AUTHORED_GRID_SIZE);
    for c in Category::ALL {
        let part = table.part(c);
        assert_eq!(part.category(), c);
        assert_eq!(part.variants().len(), VARIANT_COUNT);
    }
    assert!(table.pixel_count() > 0);
}

#[test]
fn builtin_pixels_lie_on_the_authored_grid() {
    let table = AssetTable::builtin();
    let grid = table.grid_size() as i32;
    for c in Category::ALL {
        for v in table.part(c).variants() {
            for p in v.pixels() {
                assert!((0..grid).contains(&p.x) && (0..grid).contains(&p.y), "{c}: {p:?}");
                assert_eq!(p.color.a, 255);
            }
        }
    }
}

#[test]
fn builtin_item_zero_is_empty_and_other_parts_paint() {
    let table = AssetTable::builtin();
    assert!(table.variant(Category::Item, 0).unwrap().is_empty());
    for c in [Category::Hair, Category::Face, Category::Neck, Category::Clothing, Category::Hands] {
        for v in table.part(c).variants() {
            assert!(!v.is_empty(), "{c} has an empty variant");
        }
    }
}

#[test]
fn variant_lookup_is_bounded() {
    let table = AssetTable::builtin();
    assert!(table.variant(Category::Hair, 9).is_some());
    assert!(table.variant(Category::Hair, 10).is_none());
    assert!(table.variant(Category::Hair, u8::MAX).is_none());
}

#[test]
fn parses_pixels_as_triples_in_order() {
    let table = AssetTable::from_json(&doc_with(VARIANT_COUNT).to_string()).unwrap();
    assert_eq!(table.grid_size(), 16);
    let v = table.variant(Category::Neck, 4).unwrap();
    assert_eq!(v.pixels(), &[Pixel::new(4, 2, Rgba8::rgb(0x10, 0x20, 0x30))]);
}

#[test]
fn grid_defaults_to_authored_size() {
    let mut doc = doc_with(VARIANT_COUNT);
    doc.as_object_mut().unwrap().remove("grid");
    let table = AssetTable::from_json(&doc.to_string()).unwrap();
    assert_eq!(table.grid_size(), AUTHORED_GRID_SIZE);
}

#[test]
fn wrong_variant_count_is_an_asset_error() {
    let err = asset_err(&doc_with(9).to_string());
    assert!(matches!(err, AvatarError::Asset(_)));
    assert!(err.to_string().contains("exactly 10 variants"));
}

#[test]
fn missing_category_is_an_asset_error() {
    let mut doc = doc_with(VARIANT_COUNT);
    doc["parts"].as_object_mut().unwrap().remove("hands");
    let err = asset_err(&doc.to_string());
    assert!(matches!(err, AvatarError::Asset(_)));
    assert!(err.to_string().contains("hands"));
}

#[test]
fn zero_grid_is_an_asset_error() {
    let mut doc = doc_with(VARIANT_COUNT);
    doc["grid"] = json!(0);
    assert!(matches!(asset_err(&doc.to_string()), AvatarError::Asset(_)));
}

#[test]
fn unknown_keys_bad_colors_and_bad_json_are_serde_errors() {
    let mut doc = doc_with(VARIANT_COUNT);
    doc["parts"]["hat"] = json!([]);
    assert!(matches!(asset_err(&doc.to_string()), AvatarError::Serde(_)));

    let mut doc = doc_with(VARIANT_COUNT);
    doc["palette"] = json!({});
    assert!(matches!(asset_err(&doc.to_string()), AvatarError::Serde(_)));

    let mut doc = doc_with(VARIANT_COUNT);
    doc["parts"]["face"][0] = json!([[1, 1, "#zzzzzz"]]);
    assert!(matches!(asset_err(&doc.to_string()), AvatarError::Serde(_)));

    assert!(matches!(asset_err("{\"parts\": "), AvatarError::Serde(_)));
}

#[test]
fn from_path_reports_missing_files() {
    let err = AssetTable::from_path("definitely/not/here/parts.json").unwrap_err();
    assert!(matches!(err, AvatarError::Other(_)));
    assert!(err.to_string().contains("read asset table"));
}

#[test]
fn pixel_serializes_as_triple() {
    let p = Pixel::new(3, 4, Rgba8::rgb(255, 0, 0));
    assert_eq!(serde_json::to_value(p).unwrap(), json!([3, 4, "#ff0000"]));
}
