use crate::tower::TowerStats;
use tessera_core::VoxelStatus;
use tessera_grid::VoxelGrid;

/// Format tower counters and grid occupancy as a markdown summary table.
pub fn format_markdown(stats: &TowerStats, grid: &VoxelGrid) -> String {
    let size = grid.size();
    let mut out = String::new();
    out.push_str("| Metric | Value |\n");
    out.push_str("|--------|-------|\n");
    out.push_str(&format!("| Grid | {}x{}x{} |\n", size.x, size.y, size.z));
    out.push_str(&format!("| Blocks placed | {} |\n", stats.placed));
    out.push_str(&format!("| Poses tried | {} |\n", stats.attempts));
    out.push_str(&format!("| Out of bounds | {} |\n", stats.out_of_bounds));
    out.push_str(&format!("| Intersecting | {} |\n", stats.intersecting));
    out.push_str(&format!("| Overlapping grafts | {} |\n", stats.overlapping));
    for (label, status) in [
        ("Available cells", VoxelStatus::Available),
        ("Connection cells", VoxelStatus::Connection),
        ("Alive cells", VoxelStatus::Alive),
        ("Dead cells", VoxelStatus::Dead),
    ] {
        out.push_str(&format!("| {label} | {} |\n", grid.count_status(status)));
    }
    out
}
