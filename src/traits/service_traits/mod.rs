pub mod chart_builder_service;
pub mod chart_render_service;
pub mod dataset_service;
pub mod filter_service;
pub mod sign_classify_service;
