pub mod chart_builder_service_impl;
pub mod chart_render_service_impl;
pub mod dataset_service_impl;
pub mod filter_service_impl;
pub mod sign_classify_service_impl;
