use super::*;

#[test]
fn solid_frames_are_premultiplied() {
    let f = FrameRGBA::solid(2, 1, Rgba8::new(255, 0, 0, 128));
    assert_eq!(f.data, vec![128, 0, 0, 128, 128, 0, 0, 128]);
    assert!(f.premultiplied);
    assert!(!f.has_ink(Rgba8::new(255, 0, 0, 128)));
    assert!(f.has_ink(Rgba8::TRANSPARENT));
}

#[test]
fn straight_conversion_undoes_premultiplication() {
    let f = FrameRGBA {
        width: 2,
        height: 1,
        data: vec![64, 32, 0, 128, 0, 0, 0, 0],
        premultiplied: true,
    };
    let straight = f.to_straight_rgba8();
    assert_eq!(&straight[..4], &[128, 64, 0, 128]);
    assert_eq!(&straight[4..], &[0, 0, 0, 0]);
}

#[test]
fn compose_row_places_frames_side_by_side() {
    let a = FrameRGBA::solid(1, 2, Rgba8::BLACK);
    let b = FrameRGBA::solid(2, 1, Rgba8::WHITE);
    let row = compose_row(&[a, b], 1, Rgba8::TRANSPARENT).unwrap();
    assert_eq!((row.width, row.height), (4, 2));

    let px = |x: usize, y: usize| &row.data[(y * 4 + x) * 4..(y * 4 + x) * 4 + 4];
    assert_eq!(px(0, 0), &[0, 0, 0, 255]);
    assert_eq!(px(0, 1), &[0, 0, 0, 255]);
    assert_eq!(px(1, 0), &[0, 0, 0, 0]);
    assert_eq!(px(2, 0), &[255, 255, 255, 255]);
    assert_eq!(px(3, 0), &[255, 255, 255, 255]);
    assert_eq!(px(3, 1), &[0, 0, 0, 0]);
}

#[test]
fn compose_row_rejects_bad_input() {
    assert!(compose_row(&[], 0, Rgba8::TRANSPARENT).is_err());

    let broken = FrameRGBA {
        width: 2,
        height: 2,
        data: vec![0; 4],
        premultiplied: true,
    };
    assert!(compose_row(&[broken], 0, Rgba8::TRANSPARENT).is_err());
}
