//! Standalone HTML export of a grid
//!
//! The page is self-contained (inline CSS, no scripts): a CSS grid of cells
//! with a `(x,y) - label` tooltip, and a statistics panel listing every
//! category present on the map.

use crate::grid::TerrainGrid;
use std::fmt;

/// Cell edge length in CSS pixels
const CELL_PX: u32 = 30;

/// HTML page for one grid state
pub struct HtmlReport<'a> {
    grid: &'a TerrainGrid,
    title: &'a str,
}

impl<'a> HtmlReport<'a> {
    pub fn new(grid: &'a TerrainGrid, title: &'a str) -> Self {
        Self { grid, title }
    }
}

impl fmt::Display for HtmlReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = escape(self.title);
        let grid = self.grid;

        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, "<html lang=\"en\">")?;
        writeln!(f, "<head>")?;
        writeln!(f, "    <meta charset=\"UTF-8\">")?;
        writeln!(
            f,
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
        )?;
        writeln!(f, "    <title>{title}</title>")?;
        writeln!(f, "    <style>")?;
        writeln!(
            f,
            "        body {{ font-family: Arial, sans-serif; margin: 20px; background-color: #f5f5f5; }}"
        )?;
        writeln!(
            f,
            "        .container {{ max-width: 1200px; margin: 0 auto; background-color: white; padding: 20px; border-radius: 10px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }}"
        )?;
        writeln!(
            f,
            "        h1 {{ text-align: center; color: #333; margin-bottom: 30px; }}"
        )?;
        writeln!(
            f,
            "        .map-container {{ display: flex; justify-content: center; margin: 20px 0; }}"
        )?;
        writeln!(
            f,
            "        .map {{ display: grid; grid-template-columns: repeat({}, {CELL_PX}px); grid-template-rows: repeat({}, {CELL_PX}px); gap: 1px; border: 2px solid #333; background-color: #333; }}",
            grid.width(),
            grid.height()
        )?;
        writeln!(
            f,
            "        .cell {{ width: {CELL_PX}px; height: {CELL_PX}px; display: flex; align-items: center; justify-content: center; font-size: 12px; }}"
        )?;
        writeln!(
            f,
            "        .stats {{ background-color: #f8f9fa; padding: 15px; border-radius: 5px; margin: 20px 0; }}"
        )?;
        writeln!(
            f,
            "        .stat-item {{ margin: 5px 0; padding: 5px; background-color: white; border-radius: 3px; }}"
        )?;
        writeln!(f, "    </style>")?;
        writeln!(f, "</head>")?;
        writeln!(f, "<body>")?;
        writeln!(f, "    <div class=\"container\">")?;
        writeln!(f, "        <h1>{title}</h1>")?;
        writeln!(f, "        <div class=\"map-container\">")?;
        writeln!(f, "            <div class=\"map\">")?;

        for (y, row) in grid.rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                writeln!(
                    f,
                    "                <div class=\"cell\" style=\"background-color: {}\" title=\"({x},{y}) - {}\"><span>{}</span></div>",
                    cell.html_color(),
                    cell.label(),
                    cell.html_glyph()
                )?;
            }
        }

        writeln!(f, "            </div>")?;
        writeln!(f, "        </div>")?;

        let counts = grid.category_counts();
        writeln!(f, "        <div class=\"stats\">")?;
        writeln!(f, "            <h3>Simulation statistics</h3>")?;
        writeln!(
            f,
            "            <div class=\"stat-item\"><strong>Map size:</strong> {} × {} ({} cells)</div>",
            grid.width(),
            grid.height(),
            counts.total()
        )?;
        for (category, count) in counts.entries().filter(|(_, n)| *n > 0) {
            writeln!(
                f,
                "            <div class=\"stat-item\"><strong>{}:</strong> {} cells ({:.1}%)</div>",
                category.label(),
                count,
                counts.percentage(category)
            )?;
        }
        writeln!(f, "        </div>")?;
        writeln!(f, "    </div>")?;
        writeln!(f, "</body>")?;
        writeln!(f, "</html>")
    }
}

/// Render `grid` as a standalone HTML page titled `title`
pub fn render_html(grid: &TerrainGrid, title: &str) -> String {
    HtmlReport::new(grid, title).to_string()
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
