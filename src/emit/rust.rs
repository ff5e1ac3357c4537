use std::fmt::Write as _;

use crate::{
    foundation::error::{SpriteError, SpriteResult},
    sprite::{model::EncodedSprite, run::RunSpan},
};

/// Settings for [`emit_rust_module`].
#[derive(Clone, Debug)]
pub struct RustEmitOptions {
    /// Sprite name; the static is named `<NAME>_SPRITE` (upper-cased).
    pub name: String,
    /// Source file name recorded in the banner, if known.
    pub source_name: Option<String>,
    /// Module path that exports `Sprite` and `PixelRange`.
    pub sprite_path: String,
    /// Full path of the `Size` type.
    pub size_path: String,
}

impl Default for RustEmitOptions {
    fn default() -> Self {
        Self {
            name: "sprite".to_string(),
            source_name: None,
            sprite_path: "crate::graphics::sprites".to_string(),
            size_path: "crate::shared::Size".to_string(),
        }
    }
}

impl RustEmitOptions {
    /// Name of the generated `static`.
    pub fn static_name(&self) -> String {
        format!("{}_SPRITE", self.name.to_ascii_uppercase())
    }

    fn validate(&self) -> SpriteResult<()> {
        if !is_ident(&self.name) {
            return Err(SpriteError::validation(format!(
                "sprite name '{}' is not a valid Rust identifier",
                self.name
            )));
        }
        let paths = [
            ("sprite_path", &self.sprite_path),
            ("size_path", &self.size_path),
        ];
        for (label, path) in paths {
            if path.is_empty() || !path.split("::").all(is_ident) {
                return Err(SpriteError::validation(format!(
                    "{label} '{path}' is not a valid Rust path"
                )));
            }
        }
        Ok(())
    }
}

/// File name conventionally used for a generated sprite module.
pub fn sprite_file_name(name: &str) -> String {
    super::EmitFormat::Rust.file_name(name)
}

/// Turn an arbitrary label (e.g. a file stem) into a valid sprite name.
///
/// Labels with no ASCII alphanumerics at all fall back to `sprite`.
pub fn sanitize_name(raw: &str) -> String {
    let mut out: String = raw
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if out.chars().all(|c| c == '_') {
        return "sprite".to_string();
    }
    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}

/// Render `sprite` as a Rust module defining `pub static <NAME>_SPRITE: Sprite`.
///
/// Byte data is laid out one sprite row per line so diffs between regenerated sprites stay
/// readable.
#[tracing::instrument(skip(sprite, opts), fields(name = %opts.name))]
pub fn emit_rust_module(sprite: &EncodedSprite, opts: &RustEmitOptions) -> SpriteResult<String> {
    opts.validate()?;
    let mut out = String::with_capacity(sprite.data.len() * 5 + 1024);
    write_module(&mut out, sprite, opts)
        .map_err(|e| SpriteError::Other(anyhow::anyhow!("format rust module: {e}")))?;
    Ok(out)
}

fn write_module(
    out: &mut String,
    sprite: &EncodedSprite,
    opts: &RustEmitOptions,
) -> std::fmt::Result {
    let rule = "// ===============================";
    writeln!(out, "{rule}")?;
    writeln!(out, "//  SPRITE: {}", opts.name.to_ascii_uppercase())?;
    writeln!(out, "// -------------------------------")?;
    if let Some(src) = &opts.source_name {
        writeln!(out, "//  Generated by spritec from {src}")?;
    } else {
        writeln!(out, "//  Generated by spritec")?;
    }
    writeln!(out, "//  Dimensions: {}x{}", sprite.width, sprite.height)?;
    writeln!(
        out,
        "//  Runs: {} translucent, {} solid",
        sprite.translucent_runs.len(),
        sprite.solid_runs.len()
    )?;
    writeln!(out, "//  DO NOT EDIT MANUALLY")?;
    writeln!(out, "{rule}")?;
    writeln!(out)?;
    writeln!(out, "use {}::{{PixelRange, Sprite}};", opts.sprite_path)?;
    writeln!(out, "use {};", opts.size_path)?;
    writeln!(out)?;

    writeln!(out, "pub static {}: Sprite = Sprite {{", opts.static_name())?;
    writeln!(out, "    data: &[")?;
    for row in sprite.data.chunks(sprite.size().row_stride().max(1)) {
        out.push_str("       ");
        for b in row {
            write!(out, " {b},")?;
        }
        out.push('\n');
    }
    writeln!(out, "    ],")?;
    writeln!(
        out,
        "    size: Size {{ width: {}, height: {} }},",
        sprite.width, sprite.height
    )?;
    write_ranges(out, "translucent_ranges", &sprite.translucent_runs)?;
    write_ranges(out, "solid_ranges", &sprite.solid_runs)?;
    writeln!(out, "}};")
}

fn write_ranges(out: &mut String, field: &str, runs: &[RunSpan]) -> std::fmt::Result {
    if runs.is_empty() {
        return writeln!(out, "    {field}: &[],");
    }
    writeln!(out, "    {field}: &[")?;
    for r in runs {
        writeln!(
            out,
            "        PixelRange {{ line: {}, src_index: {}, src_end_index: {}, x_begin: {}, x_end: {} }},",
            r.row, r.src_start, r.src_end, r.x_start, r.x_end
        )?;
    }
    writeln!(out, "    ],")
}

fn is_ident(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && s != "_"
}

#[cfg(test)]
#[path = "../../tests/unit/emit/rust.rs"]
mod tests;
