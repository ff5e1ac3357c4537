use super::*;

#[test]
fn classification_follows_alpha() {
    assert_eq!(PixelClass::of_alpha(0), PixelClass::Transparent);
    assert_eq!(PixelClass::of_alpha(1), PixelClass::Translucent);
    assert_eq!(PixelClass::of_alpha(254), PixelClass::Translucent);
    assert_eq!(PixelClass::of_alpha(255), PixelClass::Solid);
    assert_eq!(Rgba8::new(9, 9, 9, 128).class(), PixelClass::Translucent);
}

#[test]
fn premul_uses_biased_rounding() {
    let p = Rgba8Premul::from_straight_rgba(200, 100, 1, 128);
    assert_eq!(p.r, 100);
    assert_eq!(p.g, ((100u16 * 128 + 127) / 255) as u8);
    assert_eq!(p.b, 1);
    assert_eq!(p.a, 128);

    let p = Rgba8Premul::from_straight_rgba(100, 100, 100, 128);
    assert_eq!(p.to_array(), [50, 50, 50, 128]);
}

#[test]
fn premul_normalizes_transparent_and_keeps_solid() {
    assert_eq!(
        Rgba8Premul::from_straight_rgba(12, 34, 56, 0),
        Rgba8Premul::transparent()
    );
    assert_eq!(
        Rgba8Premul::from_straight_rgba(12, 34, 56, 255).to_array(),
        [12, 34, 56, 255]
    );
}

#[test]
fn size_rejects_zero_and_reports_strides() {
    assert!(SpriteSize::new(0, 3).is_err());
    assert!(SpriteSize::new(3, 0).is_err());
    assert!(SpriteSize::new(usize::MAX, 2).is_err());

    let s = SpriteSize::new(3, 2).unwrap();
    assert_eq!(s.pixel_count(), 6);
    assert_eq!(s.row_stride(), 12);
    assert_eq!(s.byte_len(), 24);
}
