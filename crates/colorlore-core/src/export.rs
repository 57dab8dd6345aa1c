//! Design tool snippets
//!
//! Text forms of a single color for pasting into stylesheets and design
//! tools.

use serde::Serialize;

use crate::Result;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FigmaColor<'a> {
    name: &'a str,
    value: &'a str,
    blend_mode: &'static str,
}

/// CSS custom property declaration: `--<slug>: <hex>;`
///
/// The name is lowercased and every whitespace run, leading and trailing
/// ones included, becomes a single `-`.
pub fn css_variable(name: &str, hex: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_space = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
        } else {
            slug.extend(c.to_lowercase());
            in_space = false;
        }
    }
    format!("--{slug}: {hex};")
}

/// CSS variable plus a Figma/Sketch color object
///
/// ```
/// let copy = colorlore_core::export::figma_copy("Classic Blue", "#0f4c81")?;
/// assert!(copy.starts_with("/* CSS Variable */\n--classic-blue: #0f4c81;"));
/// # Ok::<(), colorlore_core::Error>(())
/// ```
pub fn figma_copy(name: &str, hex: &str) -> Result<String> {
    let json = serde_json::to_string_pretty(&FigmaColor {
        name,
        value: hex,
        blend_mode: "NORMAL",
    })?;
    Ok(format!(
        "/* CSS Variable */\n{}\n\n/* Figma / Sketch JSON */\n{json}",
        css_variable(name, hex)
    ))
}
