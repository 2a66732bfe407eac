pub mod formatter;

pub use formatter::{
    format_breakdown, format_comparison, format_percent, should_use_colors, RankedSite,
};
