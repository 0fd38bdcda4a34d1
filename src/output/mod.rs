pub mod formatter;

pub use formatter::{
    format_breakdown, format_fitness, format_json, format_ranked_table, rank_by_fitness,
    should_use_colors, ScoredCandidate,
};
