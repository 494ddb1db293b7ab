// Full-map colony enumeration and top-k selection.

use crate::core::types::{Colony, SectorMap, Strategy};
use super::traverse::{region_size_bfs, region_size_dfs, VisitedMask};

/// Every colony in the map, sorted by size descending, ties broken by
/// ascending resource type. Row-major scan: each maximal region is measured
/// exactly once because traversal marks all of its cells visited.
pub fn all_colonies(map: &SectorMap, strategy: Strategy) -> Vec<Colony> {
    if map.is_empty() || map[0].is_empty() {
        return Vec::new();
    }
    let (rows, cols) = (map.len(), map[0].len());
    let mut visited = VisitedMask::new(rows, cols);
    let mut colonies = Vec::new();

    for r in 0..rows {
        for c in 0..cols {
            if visited.is_set(r, c) || map[r][c] <= 0 {
                continue;
            }
            let resource = map[r][c];
            let size = match strategy {
                Strategy::DepthFirst => {
                    region_size_dfs(map, r as i64, c as i64, resource, &mut visited)
                }
                Strategy::BreadthFirst => {
                    region_size_bfs(map, r as i64, c as i64, resource, &mut visited)
                }
            };
            colonies.push(Colony { size, resource });
        }
    }

    colonies.sort_by(|a, b| b.size.cmp(&a.size).then(a.resource.cmp(&b.resource)));
    colonies
}

/// The k largest colonies. k = 0 yields an empty result; k beyond the
/// colony count returns everything, no padding.
pub fn top_k_colonies(map: &SectorMap, strategy: Strategy, k: usize) -> Vec<Colony> {
    let mut colonies = all_colonies(map, strategy);
    colonies.truncate(k);
    colonies
}
