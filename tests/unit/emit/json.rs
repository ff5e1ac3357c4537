use super::*;
use crate::{assets::grid::SampleGrid, foundation::core::Rgba8, sprite::encode::encode};

#[test]
fn json_keeps_runs_as_arrays_and_parses_back() {
    let grid = SampleGrid::new(1, 1, vec![Rgba8::new(100, 100, 100, 128)]).unwrap();
    let sprite = encode(&grid);

    let text = to_json_string(&sprite).unwrap();
    assert!(text.contains(r#""translucent_runs":[[0,0,4,0,4]]"#));
    assert!(text.contains(r#""data":[50,50,50,128]"#));
    assert!(text.ends_with('\n'));

    assert_eq!(from_json_str(&text).unwrap(), sprite);
}

#[test]
fn from_json_rejects_inconsistent_sprite() {
    let bad = r#"{"width":1,"height":1,"data":[0,0,0,0],"translucent_runs":[],"solid_runs":[[0,0,4,0,4]]}"#;
    assert!(matches!(
        from_json_str(bad).unwrap_err(),
        crate::SpriteError::Validation(_)
    ));

    assert!(matches!(
        from_json_str("{").unwrap_err(),
        crate::SpriteError::Serde(_)
    ));
}
