pub mod topk;
pub mod traverse;

pub use topk::{all_colonies, top_k_colonies};
pub use traverse::{region_size_bfs, region_size_dfs, wrap, VisitedMask};
