pub mod category;
pub mod day;
pub mod love_metrics;
pub mod natal_chart;
pub mod prompt;
pub mod response;

pub use category::{Category, ResponseShape};
pub use day::Day;
pub use love_metrics::{LoveMetrics, LoveMetricsError};
pub use natal_chart::{NatalChart, build_natal_prompt};
pub use prompt::{NatalInputs, build_prompt};
pub use response::strip_fences;
