//! Plain-text grid view for terminals

use crate::core_types::TerrainCategory;
use crate::grid::TerrainGrid;
use std::fmt;

/// Order of the statistics lines
const STAT_ORDER: [TerrainCategory; 4] = [
    TerrainCategory::Tree,
    TerrainCategory::Water,
    TerrainCategory::Empty,
    TerrainCategory::Burnt,
];

/// Framed glyph map followed by per-category statistics
///
/// The burnt line is only printed once something has burnt.
pub struct ConsoleView<'a> {
    grid: &'a TerrainGrid,
}

impl<'a> ConsoleView<'a> {
    pub fn new(grid: &'a TerrainGrid) -> Self {
        Self { grid }
    }
}

impl fmt::Display for ConsoleView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = "=".repeat(self.grid.width() as usize + 2);

        writeln!(f, "{border}")?;
        for row in self.grid.rows() {
            f.write_str("|")?;
            for cell in row {
                f.write_str(cell.glyph())?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "{border}")?;

        let counts = self.grid.category_counts();
        writeln!(f, "Statistics:")?;
        for category in STAT_ORDER {
            let count = counts.count(category);
            if category == TerrainCategory::Burnt && count == 0 {
                continue;
            }
            writeln!(
                f,
                "- {}: {}/{} ({:.1}%)",
                category.label(),
                count,
                counts.total(),
                counts.percentage(category)
            )?;
        }
        Ok(())
    }
}

/// Render `grid` with [`ConsoleView`]
pub fn render_console(grid: &TerrainGrid) -> String {
    ConsoleView::new(grid).to_string()
}
