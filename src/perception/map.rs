// Sector map ingestion: whitespace-separated text (one row per line) or a
// JSON array of arrays. Rows must all match row 0's length; ragged input is
// rejected rather than silently wrapped against the wrong column modulus.

use crate::core::error::ScanError;
use crate::core::types::SectorMap;

pub fn parse_sector_map(text: &str) -> anyhow::Result<SectorMap> {
    let mut map: SectorMap = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let row = line
            .split_whitespace()
            .map(|tok| {
                tok.parse::<i32>().map_err(|_| ScanError::MalformedCell {
                    row: map.len(),
                    token: tok.to_string(),
                })
            })
            .collect::<Result<Vec<i32>, _>>()?;
        map.push(row);
    }
    check_rectangular(&map)?;
    Ok(map)
}

pub fn load_sector_map(path: &str) -> anyhow::Result<SectorMap> {
    let content = std::fs::read_to_string(path)?;
    parse_sector_map(&content)
}

pub fn load_sector_map_json(path: &str) -> anyhow::Result<SectorMap> {
    let content = std::fs::read_to_string(path)?;
    let map: SectorMap = serde_json::from_str(&content)?;
    check_rectangular(&map)?;
    Ok(map)
}

fn check_rectangular(map: &SectorMap) -> Result<(), ScanError> {
    let Some(first) = map.first() else { return Ok(()) };
    for (r, row) in map.iter().enumerate().skip(1) {
        if row.len() != first.len() {
            return Err(ScanError::RaggedMap {
                row: r,
                expected: first.len(),
                found: row.len(),
            });
        }
    }
    Ok(())
}

pub fn dimensions(map: &SectorMap) -> (usize, usize) {
    if map.is_empty() { return (0, 0); }
    (map.len(), map[0].len())
}

pub fn map_to_string(map: &SectorMap) -> String {
    map.iter()
        .map(|row| row.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Distinct positive cell values present in the map, sorted ascending.
pub fn resource_types(map: &SectorMap) -> Vec<i32> {
    let mut types = Vec::new();
    for row in map {
        for &c in row {
            if c > 0 && !types.contains(&c) {
                types.push(c);
            }
        }
    }
    types.sort();
    types
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whitespace_rows() {
        let map = parse_sector_map("1 2 3\n4 5 6\n").unwrap();
        assert_eq!(map, vec![vec![1, 2, 3], vec![4, 5, 6]]);
    }

    #[test]
    fn skips_blank_lines() {
        let map = parse_sector_map("1 2\n\n3 4\n\n").unwrap();
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn accepts_negative_and_zero_cells() {
        let map = parse_sector_map("0 -1 7").unwrap();
        assert_eq!(map, vec![vec![0, -1, 7]]);
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = parse_sector_map("1 2 3\n4 5").unwrap_err();
        assert!(err.to_string().contains("ragged"));
    }

    #[test]
    fn rejects_non_integer_tokens() {
        let err = parse_sector_map("1 x 3").unwrap_err();
        assert!(err.to_string().contains("malformed"));
    }

    #[test]
    fn empty_input_is_empty_map() {
        assert!(parse_sector_map("").unwrap().is_empty());
    }

    #[test]
    fn json_and_text_loaders_agree() {
        let text = parse_sector_map("1 0\n0 2").unwrap();
        let json: SectorMap = serde_json::from_str("[[1,0],[0,2]]").unwrap();
        assert_eq!(text, json);
    }

    #[test]
    fn resource_types_sorted_positive_only() {
        let map = vec![vec![3, 0, 1], vec![-2, 3, 1]];
        assert_eq!(resource_types(&map), vec![1, 3]);
    }

    #[test]
    fn map_to_string_round_trips_through_parse() {
        let map = vec![vec![1, -2, 0], vec![3, 4, 5]];
        assert_eq!(parse_sector_map(&map_to_string(&map)).unwrap(), map);
    }

    #[test]
    fn dimensions_of_empty_map() {
        assert_eq!(dimensions(&Vec::new()), (0, 0));
    }
}
