use super::*;
use crate::{assets::grid::SampleGrid, foundation::core::Rgba8, sprite::encode::encode};

fn two_pixel() -> EncodedSprite {
    let px = vec![Rgba8::new(255, 0, 0, 255), Rgba8::new(0, 0, 0, 0)];
    encode(&SampleGrid::new(2, 1, px).unwrap())
}

#[test]
fn emits_static_with_ranges_and_banner() {
    let opts = RustEmitOptions {
        name: "ship".to_string(),
        source_name: Some("ship.png".to_string()),
        ..RustEmitOptions::default()
    };
    let text = emit_rust_module(&two_pixel(), &opts).unwrap();

    assert!(text.contains("//  SPRITE: SHIP"));
    assert!(text.contains("from ship.png"));
    assert!(text.contains("//  Dimensions: 2x1"));
    assert!(text.contains("use crate::graphics::sprites::{PixelRange, Sprite};"));
    assert!(text.contains("use crate::shared::Size;"));
    assert!(text.contains("pub static SHIP_SPRITE: Sprite = Sprite {"));
    assert!(text.contains("        255, 0, 0, 255, 0, 0, 0, 0,\n"));
    assert!(text.contains("size: Size { width: 2, height: 1 },"));
    assert!(text.contains("translucent_ranges: &[],"));
    assert!(text.contains(
        "PixelRange { line: 0, src_index: 0, src_end_index: 4, x_begin: 0, x_end: 4 },"
    ));
    assert!(text.trim_end().ends_with("};"));
}

#[test]
fn data_is_wrapped_one_row_per_line() {
    let grid = SampleGrid::new(1, 3, vec![Rgba8::new(1, 2, 3, 255); 3]).unwrap();
    let text = emit_rust_module(&encode(&grid), &RustEmitOptions::default()).unwrap();
    assert_eq!(text.matches("        1, 2, 3, 255,\n").count(), 3);
    assert!(text.contains("pub static SPRITE_SPRITE"));
}

#[test]
fn rejects_invalid_names_and_paths() {
    let sprite = two_pixel();
    for name in ["", "_", "9lives", "has-dash", "sp ace"] {
        let opts = RustEmitOptions {
            name: name.to_string(),
            ..RustEmitOptions::default()
        };
        assert!(emit_rust_module(&sprite, &opts).is_err(), "{name:?}");
    }

    let opts = RustEmitOptions {
        sprite_path: "crate::::sprites".to_string(),
        ..RustEmitOptions::default()
    };
    assert!(emit_rust_module(&sprite, &opts).is_err());
}

#[test]
fn sanitize_and_file_names() {
    assert_eq!(sanitize_name("my-sprite"), "my_sprite");
    assert_eq!(sanitize_name("8bit"), "_8bit");
    assert_eq!(sanitize_name(""), "sprite");
    assert_eq!(sanitize_name("-"), "sprite");
    assert_eq!(sanitize_name("ß"), "sprite");
    assert_eq!(sanitize_name("a-"), "a_");
    assert_eq!(sprite_file_name("Blackbuck"), "blackbuck_sprite.rs");
}

#[test]
fn sanitized_names_are_always_accepted() {
    let sprite = two_pixel();
    for raw in ["", "-", "@", "ß", "__", "8bit", "my sprite", "ok"] {
        let opts = RustEmitOptions {
            name: sanitize_name(raw),
            ..RustEmitOptions::default()
        };
        assert!(emit_rust_module(&sprite, &opts).is_ok(), "{raw:?}");
    }
}
