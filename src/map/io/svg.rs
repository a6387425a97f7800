use std::{io::Write, path::Path};

use anyhow::{Context, Result};

use crate::{
    geom::{self, CANVAS_HEIGHT, CANVAS_WIDTH, MARGIN_BOTTOM, MARGIN_SIDE, MARGIN_TOP},
    io::{self, svg},
    map::RegionMap,
    region::MacroRegion,
    stats::RegionStatsTable,
};

/// Vertical gap between a region's name and its stats line.
const STATS_LINE_OFFSET: f64 = 14.0;

impl RegionMap {
    /// Render the map to an SVG file. Refuses to overwrite unless `force` is set.
    pub fn to_svg(&self, path: &Path, stats: Option<&RegionStatsTable>, force: bool) -> Result<()> {
        let mut writer = io::open_for_write(path, force)?;
        self.write_svg(&mut writer, stats)
            .with_context(|| format!("[to_svg] Failed to render {}", path.display()))?;
        writer.finalize()
    }

    /// Render the map to an SVG string.
    pub fn to_svg_string(&self, stats: Option<&RegionStatsTable>) -> Result<String> {
        let mut writer = svg::SvgStringWriter::new();
        self.write_svg(&mut writer, stats)?;
        writer.into_string()
    }

    /// Draw every region's outlines, then a label at each drawn region's centroid.
    /// When stats are given, fill strength follows each region's share of businesses.
    pub fn write_svg<W: Write>(&self, writer: &mut W, stats: Option<&RegionStatsTable>) -> Result<()> {
        svg::write_svg_header(
            writer,
            CANVAS_WIDTH,
            CANVAS_HEIGHT,
            [MARGIN_TOP, MARGIN_SIDE, MARGIN_BOTTOM],
            &geom::bounds(),
        )?;
        svg::write_svg_styles(writer)?;

        let max_count = stats
            .map(|table| table.iter().map(|(_, s)| s.count).max().unwrap_or(0))
            .unwrap_or(0);

        for region in self.drawn_regions() {
            let fill = region_fill(region, stats, max_count);
            writeln!(writer, r#"<g class="region" data-region="{}" style="fill:{fill}">"#, region.id())?;
            for path in self.paths(region).iter().filter(|p| !p.is_empty()) {
                writeln!(writer, r#"<path d="{}"/>"#, path.data())?;
            }
            writeln!(writer, "</g>")?;
        }

        for region in self.drawn_regions() {
            let anchor = self.centroid(region);
            writeln!(
                writer,
                r#"<text class="label" x="{:.2}" y="{:.2}">{}</text>"#,
                anchor.x, anchor.y, svg::escape_text(region.name()),
            )?;
            if let Some(table) = stats {
                let s = table.get(region);
                writeln!(
                    writer,
                    r#"<text class="label-stats" x="{:.2}" y="{:.2}">{} stores · {} slots</text>"#,
                    anchor.x, anchor.y + STATS_LINE_OFFSET, s.count, s.capacity(),
                )?;
            }
        }

        svg::write_svg_footer(writer)?;
        writer.flush()?;
        Ok(())
    }
}

fn region_fill(region: MacroRegion, stats: Option<&RegionStatsTable>, max_count: u64) -> svg::Rgb {
    let base = svg::Rgb::from_hex(region.color()).unwrap_or(svg::WHITE);
    match stats {
        Some(table) if max_count > 0 => svg::occupancy_fill(base, table.get(region).count as f64 / max_count as f64),
        Some(_) => svg::occupancy_fill(base, 0.0),
        None => base,
    }
}
