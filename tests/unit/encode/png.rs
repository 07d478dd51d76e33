use super::*;
use crate::foundation::core::Rgba8;
use crate::test_support::temp_dir;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

fn quadrants() -> Raster {
    let mut r = Raster::new(2, 2);
    r.fill_rect(0, 0, 1, 1, Rgba8::rgb(255, 0, 0));
    r.fill_rect(1, 0, 1, 1, Rgba8::rgb(0, 255, 0));
    r.fill_rect(0, 1, 1, 1, Rgba8::rgb(0, 0, 255));
    r.fill_rect(1, 1, 1, 1, Rgba8::rgba(10, 20, 30, 40));
    r
}

#[test]
fn to_rgba_image_keeps_pixels() {
    let img = to_rgba_image(&quadrants()).unwrap();
    assert_eq!(img.dimensions(), (2, 2));
    assert_eq!(img.get_pixel(1, 1).0, [10, 20, 30, 40]);
}

#[test]
fn mismatched_buffer_is_rejected() {
    let bad = Raster {
        width: 3,
        height: 3,
        data: vec![0; 4],
    };
    let err = to_rgba_image(&bad).unwrap_err();
    assert!(matches!(err, AvatarError::Other(_)));
    assert!(encode_png(&bad).is_err());
}

#[test]
fn save_png_rejects_a_short_buffer_without_writing() {
    let bad = Raster {
        width: 4,
        height: 4,
        data: vec![0; 3],
    };
    let dir = temp_dir("save_png_short");
    let path = dir.join("bad.png");

    let err = save_png(&bad, &path).unwrap_err();
    assert!(matches!(err, AvatarError::Other(_)));
    assert!(err.to_string().contains("invalid rgba buffer size"));
    assert!(!path.exists());
    assert!(encode_png(&bad).is_err());
    assert_eq!(bad.pixel(0, 0), None);
}

#[test]
fn encoded_png_decodes_to_the_same_pixels() {
    let src = quadrants();
    let bytes = encode_png(&src).unwrap();
    assert_eq!(bytes[..8], PNG_SIGNATURE);

    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (2, 2));
    assert_eq!(decoded.into_raw(), src.data);
}

#[test]
fn save_png_creates_parent_directories() {
    let dir = temp_dir("save_png");
    let path = dir.join("nested").join("out.png");
    save_png(&quadrants(), &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes[..8], PNG_SIGNATURE);
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn scale_nearest_keeps_hard_edges() {
    let src = Raster::filled(4, 4, Rgba8::rgb(1, 2, 3));
    let up = scale_nearest(&src, 12).unwrap();
    assert_eq!((up.width, up.height), (12, 12));
    assert_eq!(up, Raster::filled(12, 12, Rgba8::rgb(1, 2, 3)));

    let q = scale_nearest(&quadrants(), 8).unwrap();
    assert_eq!(q.pixel(0, 0), Some(Rgba8::rgb(255, 0, 0)));
    assert_eq!(q.pixel(7, 0), Some(Rgba8::rgb(0, 255, 0)));
    assert_eq!(q.pixel(0, 7), Some(Rgba8::rgb(0, 0, 255)));
    assert_eq!(q.pixel(7, 7), Some(Rgba8::rgba(10, 20, 30, 40)));
}

#[test]
fn scale_nearest_same_size_is_identity() {
    let src = quadrants();
    assert_eq!(scale_nearest(&src, 2).unwrap(), src);
}

#[test]
fn scale_nearest_rejects_degenerate_sizes() {
    let src = quadrants();
    for size in [0, MAX_CANVAS_SIDE + 1] {
        let err = scale_nearest(&src, size).unwrap_err();
        assert!(matches!(err, AvatarError::Validation(_)));
    }
}
