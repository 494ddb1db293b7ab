// Timed scan execution and result rendering.
// Timing covers the selection routine only, not file ingestion.

use std::time::Instant;

use rustc_hash::FxHashMap;

use crate::core::types::{Colony, SectorMap, Strategy};
use crate::search::topk::all_colonies;

#[derive(Debug, Clone, serde::Serialize)]
pub struct ScanReport {
    pub strategy: Strategy,
    pub source: String,
    pub colonies: Vec<Colony>,
    pub total_colonies: usize,
    pub by_resource: Vec<(i32, usize)>,
    pub elapsed_ns: u64,
}

/// Run one top-k scan and collect its report. `by_resource` tallies total
/// colonized cells per resource over the whole map, not just the retained
/// top-k, sorted by cell count descending.
pub fn run_scan(map: &SectorMap, strategy: Strategy, k: usize, source: &str) -> ScanReport {
    let start = Instant::now();
    let colonies = all_colonies(map, strategy);
    let elapsed_ns = start.elapsed().as_nanos() as u64;

    let mut tally: FxHashMap<i32, usize> = Default::default();
    for colony in &colonies {
        *tally.entry(colony.resource).or_default() += colony.size;
    }
    let mut by_resource: Vec<(i32, usize)> = tally.into_iter().collect();
    by_resource.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let total_colonies = colonies.len();
    let mut retained = colonies;
    retained.truncate(k);

    ScanReport {
        strategy,
        source: source.to_string(),
        colonies: retained,
        total_colonies,
        by_resource,
        elapsed_ns,
    }
}

impl ScanReport {
    pub fn print_summary(&self) {
        println!("Algorithm: {}", self.strategy.name());
        println!("Map: {}", self.source);

        if self.colonies.is_empty() {
            println!("No colonies found.");
        } else {
            for (i, colony) in self.colonies.iter().enumerate() {
                println!(
                    "Colony {}: Size = {}, Resource Type = {}",
                    i + 1,
                    colony.size,
                    colony.resource
                );
            }
            println!(
                "{} colonies total, {} resource types",
                self.total_colonies,
                self.by_resource.len()
            );
            for (resource, cells) in &self.by_resource {
                println!("  resource {}: {} cells", resource, cells);
            }
        }

        println!("Time taken: {} nanoseconds", self.elapsed_ns);
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_retains_top_k_but_tallies_everything() {
        let map = vec![vec![1, 1, 0, 2], vec![0, 1, 0, 2]];
        let report = run_scan(&map, Strategy::DepthFirst, 1, "test-map");
        assert_eq!(report.colonies, vec![Colony { size: 3, resource: 1 }]);
        assert_eq!(report.total_colonies, 2);
        assert_eq!(report.by_resource, vec![(1, 3), (2, 2)]);
    }

    #[test]
    fn empty_map_report() {
        let report = run_scan(&Vec::new(), Strategy::BreadthFirst, 4, "empty");
        assert!(report.colonies.is_empty());
        assert_eq!(report.total_colonies, 0);
        assert!(report.by_resource.is_empty());
    }

    #[test]
    fn tally_merges_colonies_of_one_resource() {
        let map = vec![vec![6, 0, 6]];
        // Torus: columns 0 and 2 are adjacent, so this is one colony.
        let report = run_scan(&map, Strategy::DepthFirst, 10, "seam");
        assert_eq!(report.total_colonies, 1);
        assert_eq!(report.by_resource, vec![(6, 2)]);
    }

    #[test]
    fn json_output_round_trips_colonies() {
        let map = vec![vec![1, 2]];
        let report = run_scan(&map, Strategy::BreadthFirst, 2, "m");
        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["colonies"].as_array().unwrap().len(), 2);
        assert_eq!(value["source"], "m");
    }
}
