//! Writers that persist an [`EncodedSprite`](crate::EncodedSprite) for a consumer.

use std::path::Path;

use anyhow::Context as _;

use crate::{foundation::error::SpriteResult, sprite::model::EncodedSprite};

pub mod json;
pub mod rust;

/// Output form of an emitted sprite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmitFormat {
    /// Rust source module with a `static` sprite.
    Rust,
    /// JSON document (`width`, `height`, `data`, run lists).
    Json,
}

impl EmitFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Rust => "rs",
            Self::Json => "json",
        }
    }

    /// Conventional file name for sprite `name`: `<name>_sprite.<ext>`, lower-cased.
    pub fn file_name(self, name: &str) -> String {
        format!("{}_sprite.{}", name.to_ascii_lowercase(), self.extension())
    }
}

/// Create the parent directory of `path` if needed.
pub fn ensure_parent_dir(path: &Path) -> SpriteResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Render `sprite` in `format` and write it to `path`, replacing any existing file.
#[tracing::instrument(skip(path, sprite, opts), fields(path = %path.display()))]
pub fn write_sprite(
    path: &Path,
    sprite: &EncodedSprite,
    format: EmitFormat,
    opts: &rust::RustEmitOptions,
) -> SpriteResult<()> {
    let text = match format {
        EmitFormat::Rust => rust::emit_rust_module(sprite, opts)?,
        EmitFormat::Json => json::to_json_string(sprite)?,
    };
    ensure_parent_dir(path)?;
    std::fs::write(path, text).with_context(|| format!("write sprite '{}'", path.display()))?;
    tracing::info!(bytes = sprite.data.len(), "wrote sprite");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/emit/mod.rs"]
mod tests;
