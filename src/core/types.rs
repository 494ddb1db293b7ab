use std::fmt;
use std::str::FromStr;

use crate::core::error::ScanError;

/// A sector map: rows of signed cell values. Zero or negative cells are
/// empty space; positive values identify the resource colonizing that cell.
pub type SectorMap = Vec<Vec<i32>>;

/// A maximal connected region of equal positive cells under toroidal
/// 4-adjacency. Immutable once recorded by a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Colony {
    pub size: usize,
    pub resource: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Strategy {
    DepthFirst,
    BreadthFirst,
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::DepthFirst => "DFS",
            Strategy::BreadthFirst => "BFS",
        }
    }
}

impl FromStr for Strategy {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" | "dfs" | "DFS" => Ok(Strategy::DepthFirst),
            "0" | "bfs" | "BFS" => Ok(Strategy::BreadthFirst),
            other => Err(ScanError::InvalidArgument(format!(
                "algorithm must be 1 (DFS) or 0 (BFS), got '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_parses_numeric_selectors() {
        assert_eq!("1".parse::<Strategy>().unwrap(), Strategy::DepthFirst);
        assert_eq!("0".parse::<Strategy>().unwrap(), Strategy::BreadthFirst);
    }

    #[test]
    fn strategy_parses_names() {
        assert_eq!("dfs".parse::<Strategy>().unwrap(), Strategy::DepthFirst);
        assert_eq!("BFS".parse::<Strategy>().unwrap(), Strategy::BreadthFirst);
    }

    #[test]
    fn strategy_rejects_unknown_tokens() {
        assert!("2".parse::<Strategy>().is_err());
        assert!("".parse::<Strategy>().is_err());
    }
}
