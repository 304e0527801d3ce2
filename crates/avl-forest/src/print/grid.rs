use crate::layout::Grid;

/// Renders a grid one level per line. Invisible slots print as `.`, every
/// column is padded to the widest label.
pub fn print_grid(grid: &Grid) -> String {
    let width = grid
        .visible()
        .map(|s| s.label.chars().count())
        .max()
        .unwrap_or(1)
        .max(1);

    let mut lines = Vec::with_capacity(grid.levels().len());
    for level in grid.levels() {
        let cells: Vec<String> = level
            .iter()
            .map(|s| {
                let text = if s.visible { s.label.as_str() } else { "." };
                format!("{text:>width$}")
            })
            .collect();
        lines.push(cells.join(" "));
    }
    lines.join("\n")
}
