/*
Author      : Seunghwan Shin
Create date : 2025-10-00
Description : NHL 선수 데이터셋을 별자리 속성(원소, 양태, Venus 주기 구간)별로 집계하여
              막대/파이 차트 명세(JSON)와 차트 이미지(PNG)를 생성하는 프로그램.

History     : 2025-10-00 Seunghwan Shin       # [v.1.0.0] first create
*/

mod common;
mod error;
mod external_deps;
mod prelude;
use common::*;

mod repository;
use repository::csv_player_repository_impl::*;

mod env_configuration;

mod traits;

mod model;
use model::configs::total_config::*;

mod enums;

mod dto;

mod utils_modules;
use utils_modules::logger_utils::*;

mod service;
use service::{
    chart_builder_service_impl::*, chart_render_service_impl::*, dataset_service_impl::*,
    filter_service_impl::*, sign_classify_service_impl::*,
};

mod controller;
use controller::main_controller::*;

#[tokio::main]
async fn main() {
    /* 전역로거 설정 및 초기 설정 */
    dotenv().ok();
    let _logger_handle: LoggerHandle = set_global_logger();

    info!("Player sign chart program start!");

    /* 의존 주입 */
    let dataset_service: DatasetServiceImpl<CsvPlayerRepositoryImpl> =
        DatasetServiceImpl::new(CsvPlayerRepositoryImpl::new());
    let filter_service: FilterServiceImpl = FilterServiceImpl::new();
    let sign_classify_service: SignClassifyServiceImpl = SignClassifyServiceImpl::new();
    let chart_builder_service: ChartBuilderServiceImpl =
        ChartBuilderServiceImpl::new(get_chart_config_info().clone());
    let chart_render_service: ChartRenderServiceImpl =
        ChartRenderServiceImpl::new(get_chart_config_info().font_family().to_string());

    let main_controller: MainController<
        DatasetServiceImpl<CsvPlayerRepositoryImpl>,
        FilterServiceImpl,
        SignClassifyServiceImpl,
        ChartBuilderServiceImpl,
        ChartRenderServiceImpl,
    > = MainController::new(
        dataset_service,
        filter_service,
        sign_classify_service,
        chart_builder_service,
        chart_render_service,
    );

    main_controller.main_task().await.unwrap_or_else(|e| {
        error!("{:?}", e);
        panic!("{:?}", e)
    });
}
