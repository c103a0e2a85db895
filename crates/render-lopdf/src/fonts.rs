use folio_render_core::RenderError;

/// Resolves a family and style string ("", "B", "I", "BI") to one of the
/// standard 14 PostScript font names.
///
/// Style letters other than `B` and `I` (underline, overline, ...) do not
/// change the face and are ignored.
pub fn standard_font_name(family: &str, style: &str) -> Result<&'static str, RenderError> {
    let style = style.to_uppercase();
    let bold = style.contains('B');
    let italic = style.contains('I');

    let faces: [&'static str; 4] = match family.to_lowercase().as_str() {
        "helvetica" | "arial" | "sans-serif" => [
            "Helvetica",
            "Helvetica-Bold",
            "Helvetica-Oblique",
            "Helvetica-BoldOblique",
        ],
        "times" | "times-roman" | "serif" => [
            "Times-Roman",
            "Times-Bold",
            "Times-Italic",
            "Times-BoldItalic",
        ],
        "courier" | "monospace" => [
            "Courier",
            "Courier-Bold",
            "Courier-Oblique",
            "Courier-BoldOblique",
        ],
        _ => {
            return Err(RenderError::Font(format!(
                "Unsupported font family '{}'",
                family
            )));
        }
    };

    Ok(match (bold, italic) {
        (false, false) => faces[0],
        (true, false) => faces[1],
        (false, true) => faces[2],
        (true, true) => faces[3],
    })
}
