pub mod celestial_point;
pub mod chart_color;
pub mod position_filter;
pub mod sign;
pub mod stat_column;
pub mod venus_interval;
pub mod view_kind;
