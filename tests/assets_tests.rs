// Host-side tests for skybox face decoding.

use skyrun_core::*;
use std::io::Cursor;

fn png(width: u32, height: u32, shade: u8) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([shade, 20, 30, 255]));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png)
        .expect("encode test png");
    buf.into_inner()
}

fn six(size: u32) -> Vec<Vec<u8>> {
    (0..6).map(|i| png(size, size, i as u8 * 40)).collect()
}

#[test]
fn urls_follow_face_order() {
    let urls = skybox_urls("/assets/textures/skybox/", "jpg");
    assert_eq!(urls[0], "/assets/textures/skybox/px.jpg");
    assert_eq!(urls[5], "/assets/textures/skybox/nz.jpg");
    assert_eq!(skybox_urls("/sky", "png")[2], "/sky/py.png");
}

#[test]
fn decodes_six_square_faces() {
    let faces = CubeFaces::decode(&six(4)).unwrap();
    assert_eq!(faces.size, 4);
    assert_eq!(faces.faces.len(), 6);
    assert!(faces.faces.iter().all(|f| f.len() == 4 * 4 * 4));
    assert_eq!(faces.bytes_per_row(), 16);
    // face order is preserved
    assert_eq!(faces.faces[1][0], 40);
    assert_eq!(faces.faces[5][0], 200);
}

#[test]
fn rejects_wrong_face_count() {
    let mut enc = six(4);
    enc.pop();
    assert!(matches!(CubeFaces::decode(&enc), Err(AssetError::FaceCount(5))));
}

#[test]
fn rejects_non_square_face() {
    let mut enc = six(4);
    enc[3] = png(4, 8, 0);
    match CubeFaces::decode(&enc) {
        Err(AssetError::NotSquare { face, width, height }) => {
            assert_eq!((face, width, height), ("ny", 4, 8));
        }
        other => panic!("expected NotSquare, got {other:?}"),
    }
}

#[test]
fn rejects_mismatched_sizes() {
    let mut enc = six(4);
    enc[4] = png(8, 8, 0);
    assert!(matches!(
        CubeFaces::decode(&enc),
        Err(AssetError::SizeMismatch { face: "pz", expected: 4, got: 8 })
    ));
}

#[test]
fn rejects_garbage_bytes() {
    let mut enc = six(2);
    enc[0] = b"definitely not an image".to_vec();
    let err = CubeFaces::decode(&enc).unwrap_err();
    assert!(matches!(err, AssetError::Decode { face: "px", .. }));
    assert!(err.to_string().contains("px"));
}
