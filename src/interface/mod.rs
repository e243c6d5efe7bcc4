pub mod chart;
pub mod prompts;
pub mod render;

pub use chart::{AxisRanges, chart_ranges, render_chart};
pub use prompts::{
    BatchFields, BatchFlags, collect_batch_fields, collect_single_fields, parse_margin,
    prompt_margin, prompt_yes_no,
};
pub use render::{display_result, display_summary};
