pub mod baked_goods;
pub mod bakeries;

// every datetime leaving the api is rendered with this format
pub const ISO_8601_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
