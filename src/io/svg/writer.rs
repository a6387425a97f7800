//! SVG writing operations.

use std::io::Write;

use anyhow::{Context, Result};
use geo::Rect;

/// String-based SVG writer.
#[derive(Default)]
pub struct SvgStringWriter {
    buffer: Vec<u8>,
}

/// Implement std::io::Write so `write!` / `writeln!` work.
impl Write for SvgStringWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
}

impl SvgStringWriter {
    pub fn new() -> Self { Self::default() }

    /// Get the SVG string.
    pub fn into_string(self) -> Result<String> {
        String::from_utf8(self.buffer)
            .context("[io::svg] SVG output is not valid UTF-8")
    }
}

/// Write the XML declaration and opening `<svg>` tag. The geographic box and margins are
/// recorded as data attributes so consumers can align overlays with the same projection.
pub fn write_svg_header<W: Write>(
    writer: &mut W,
    width: f64,
    height: f64,
    margins: [f64; 3], // top, side, bottom
    bounds: &Rect<f64>,
) -> Result<()> {
    let [top, side, bottom] = margins;
    writeln!(writer, r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"##)?;
    writeln!(writer, r##"<svg xmlns="http://www.w3.org/2000/svg"
    width="{width}" height="{height}"
    viewBox="0 0 {width} {height}"
    data-lon-min="{lon_min}" data-lon-max="{lon_max}"
    data-lat-min="{lat_min}" data-lat-max="{lat_max}"
    data-margin-top="{top}" data-margin-side="{side}" data-margin-bottom="{bottom}">"##,
        lon_min = bounds.min().x,
        lon_max = bounds.max().x,
        lat_min = bounds.min().y,
        lat_max = bounds.max().y,
    )?;
    writeln!(writer, r##"<rect width="100%" height="100%" fill="#ffffff"/>"##)?;
    Ok(())
}

/// Write styles for region outlines and labels.
pub fn write_svg_styles<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, r##"<defs>
<style>
    .region {{ stroke: #374151; stroke-width: 0.6; stroke-linejoin: round; fill-opacity: 0.85; }}
    .label {{ font-family: sans-serif; font-size: 14px; font-weight: 600; fill: #111827; text-anchor: middle; }}
    .label-stats {{ font-family: sans-serif; font-size: 10px; fill: #374151; text-anchor: middle; }}
</style>
</defs>"##)?;
    Ok(())
}

/// Write the closing `</svg>` tag.
pub fn write_svg_footer<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "</svg>")?;
    Ok(())
}

/// Escape text content for inclusion in SVG.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use geo::Coord;

    use super::*;

    #[test]
    fn header_and_footer() {
        let bounds = Rect::new(Coord { x: 124.5, y: 33.0 }, Coord { x: 131.0, y: 38.7 });
        let mut w = SvgStringWriter::new();
        write_svg_header(&mut w, 500.0, 700.0, [20.0, 20.0, 60.0], &bounds).unwrap();
        write_svg_styles(&mut w).unwrap();
        write_svg_footer(&mut w).unwrap();
        let svg = w.into_string().unwrap();

        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"viewBox="0 0 500 700""#));
        assert!(svg.contains(r#"data-lon-min="124.5""#));
        assert!(svg.contains(r#"data-margin-bottom="60""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_text("a<b & \"c\">"), "a&lt;b &amp; &quot;c&quot;&gt;");
        assert_eq!(escape_text("경기·인천"), "경기·인천");
    }
}
