pub mod category;
pub mod types;

pub use category::{
    Category, RawCategory, RejectReason, default_data_set, filter_data, format_value,
    parse_loose_float,
};
pub use types::Viewport;
