use crate::{foundation::error::SpriteResult, sprite::model::EncodedSprite};

/// Serialize a sprite as compact single-line JSON (newline terminated).
pub fn to_json_string(sprite: &EncodedSprite) -> SpriteResult<String> {
    let mut text = serde_json::to_string(sprite)?;
    text.push('\n');
    Ok(text)
}

/// Parse a sprite from JSON and check it with [`EncodedSprite::validate`].
pub fn from_json_str(text: &str) -> SpriteResult<EncodedSprite> {
    let sprite: EncodedSprite = serde_json::from_str(text)?;
    sprite.validate()?;
    Ok(sprite)
}

#[cfg(test)]
#[path = "../../tests/unit/emit/json.rs"]
mod tests;
