pub mod chart_spec;
pub mod classification_outcome;
pub mod classified_player;
pub mod filter_panel;
pub mod stat_thresholds;
