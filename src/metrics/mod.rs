pub mod kind;
pub mod name;
pub mod value;
pub mod style;

pub use kind::MetricKind;
pub use name::{display_label, is_validation_key, validation_key, VALIDATION_PREFIX};
pub use value::{round_to, MetricValue};
pub use style::ComparisonStyle;
