use crate::common::*;

use crate::utils_modules::io_utils::*;

use crate::model::{
    configs::total_config::*,
    player::{player_record::*, player_table::*},
    view::{view_request::*, view_request_list::*},
};

use crate::enums::{celestial_point::*, chart_color::*, sign::*, venus_interval::*, view_kind::*};

use crate::error::*;

use crate::dto::{chart_spec::*, classified_player::*, filter_panel::*, stat_thresholds::*};

use crate::env_configuration::env_config::*;

use crate::traits::service_traits::{
    chart_builder_service::*, chart_render_service::*, dataset_service::*, filter_service::*,
    sign_classify_service::*,
};

#[doc = "A built chart and the file stem it is saved under"]
#[derive(Debug, Clone, new)]
pub struct NamedChart {
    pub file_stem: String,
    pub spec: ChartSpec,
}

#[derive(Debug, new)]
pub struct MainController<D, F, S, B, R>
where
    D: DatasetService,
    F: FilterService,
    S: SignClassifyService,
    B: ChartBuilderService,
    R: ChartRenderService,
{
    dataset_service: D,
    filter_service: F,
    sign_classify_service: S,
    chart_builder_service: B,
    chart_render_service: R,
}

impl<D, F, S, B, R> MainController<D, F, S, B, R>
where
    D: DatasetService,
    F: FilterService,
    S: SignClassifyService,
    B: ChartBuilderService,
    R: ChartRenderService,
{
    #[doc = r#"
        뷰 요청 목록을 순서대로 처리하는 핵심 함수.

        1. 뷰 요청 목록(`VIEW_REQUEST_PATH`)을 읽어온다
        2. 데이터셋을 한 번 적재한다 (적재 실패는 치명적 오류)
        3. 각 요청마다 필터링 -> 차트 생성 -> 결과물 저장을 수행한다
        4. 특정 요청이 실패하면 로그를 남기고 다음 요청으로 진행한다
    "#]
    pub async fn main_task(&self) -> anyhow::Result<()> {
        let view_list: ViewRequestList =
            read_toml_from_file::<ViewRequestList>(&VIEW_REQUEST_PATH)?;

        let dataset_path: &Path = Path::new(get_dataset_config_info().csv_path());
        let output_root: &Path = Path::new(get_system_config_info().output_dir());
        let render_png: bool = *get_system_config_info().render_png();

        let table: Arc<PlayerTable> = self.dataset_service.load_table(dataset_path).await?;

        if table.is_empty() {
            warn!(
                "[MainController->main_task] dataset {:?} has no rows, every chart will be empty",
                dataset_path
            );
        }

        info!(
            "{} players loaded, {} view requests queued",
            table.len(),
            view_list.view().len()
        );

        let mut failed_cnt: usize = 0;

        for view in view_list.view() {
            match self
                .process_view(&table, view, output_root, render_png)
                .await
            {
                Ok(written) => {
                    info!(
                        "[MainController->main_task] view '{}' produced {} files",
                        view.name(),
                        written.len()
                    );
                }
                Err(e) => {
                    failed_cnt += 1;
                    error!(
                        "[ERROR][MainController->main_task] view '{}' failed: {:?}",
                        view.name(),
                        e
                    );
                    continue;
                }
            }
        }

        info!(
            "All view requests processed. success: {}, failed: {}",
            view_list.view().len() - failed_cnt,
            failed_cnt
        );

        Ok(())
    }

    #[doc = r#"
        뷰 요청 하나를 처리하고, 생성된 파일 경로 목록을 반환하는 함수.

        # Arguments
        * `table` - 적재된 전체 선수 테이블
        * `view` - 처리할 뷰 요청
        * `output_root` - 결과물 루트 디렉토리 (`{output_root}/{view.name}/` 아래에 저장)
        * `render_png` - PNG 이미지 생성 여부 (false 면 JSON 차트 명세만 저장)
    "#]
    pub async fn process_view(
        &self,
        table: &PlayerTable,
        view: &ViewRequest,
        output_root: &Path,
        render_png: bool,
    ) -> anyhow::Result<Vec<PathBuf>> {
        let panel: FilterPanel = self
            .filter_service
            .build_filter_panel(table, *view.position());

        let thresholds: StatThresholds = panel.clamp_thresholds(view.thresholds());

        let players: Vec<PlayerRecord> =
            self.filter_service
                .filter_players(table, *view.position(), &thresholds);

        let charts: Vec<NamedChart> = match view.kind() {
            ViewKind::VenusCycle => self.build_venus_cycle_charts(&players)?,
            ViewKind::Horoscope => self.build_horoscope_charts(
                &players,
                view.celestial_point().unwrap_or(CelestialPoint::Sun),
            )?,
        };

        let view_dir: PathBuf = output_root.join(view.name());
        let mut written: Vec<PathBuf> = Vec::new();

        for chart in &charts {
            let json_path: PathBuf = view_dir.join(format!("{}.json", chart.file_stem));
            write_json_to_file(&json_path, &chart.spec).await?;

            info!(
                "'{}' -> {} rows over [{}]",
                chart.spec.title(),
                chart.spec.total_count(),
                chart.spec.labels().join(", ")
            );
            written.push(json_path);
        }

        if render_png {
            let png_paths: Vec<PathBuf> = charts
                .iter()
                .map(|chart| view_dir.join(format!("{}.png", chart.file_stem)))
                .collect();

            let results: Vec<anyhow::Result<()>> = join_all(
                charts
                    .iter()
                    .zip(png_paths.iter())
                    .map(|(chart, path)| self.chart_render_service.render_chart(&chart.spec, path)),
            )
            .await;

            for ((result, path), chart) in results.into_iter().zip(png_paths).zip(&charts) {
                result?;

                if !chart.spec.points().is_empty() {
                    written.push(path);
                }
            }
        }

        if *view.show_table() {
            let table_path: PathBuf = view_dir.join("players.csv");
            let header: Vec<String> = PlayerRecord::table_header(&panel.stat_labels());
            let rows: Vec<Vec<String>> = players.iter().map(|p| p.table_row()).collect();

            write_csv_file(&table_path, &header, &rows)?;
            written.push(table_path);
        }

        Ok(written)
    }

    #[doc = "Venus 주기 뷰: 구간별 선수 수 막대 차트 + 색상별 비율 파이 차트"]
    fn build_venus_cycle_charts(&self, players: &[PlayerRecord]) -> anyhow::Result<Vec<NamedChart>> {
        let interval_bar: ChartSpec = self.chart_builder_service.build_grouped_bar_chart(
            players,
            "Total Player Count by Venus Interval",
            &VenusInterval::labels(),
            "venus_cycle",
            &venus_interval_palette(),
        )?;

        let color_pie: ChartSpec = self.chart_builder_service.build_category_pie_chart(
            players,
            "Players by Venus color",
            VENUS_COLOR_COLUMN,
            &venus_color_map(),
        )?;

        Ok(vec![
            NamedChart::new("venus_interval_count".to_string(), interval_bar),
            NamedChart::new("venus_color_share".to_string(), color_pie),
        ])
    }

    #[doc = "Horoscope 뷰: 선택한 천체의 별자리별 막대 차트 + 원소/양태 비율 파이 차트"]
    fn build_horoscope_charts(
        &self,
        players: &[PlayerRecord],
        point: CelestialPoint,
    ) -> anyhow::Result<Vec<NamedChart>> {
        if !point.is_selectable() {
            return Err(
                DashboardError::invalid_argument("celestial point", point.display_name()).into(),
            );
        }

        let sign_bar: ChartSpec = self.chart_builder_service.build_grouped_bar_chart(
            players,
            &format!("Total Player Count by {} Sign", point.display_name()),
            &Sign::labels(),
            point.column_name(),
            &sign_palette(),
        )?;

        let classified: Vec<ClassifiedPlayer<'_>> = self
            .sign_classify_service
            .enrich_with_classification(players, point);

        let element_pie: ChartSpec = self.chart_builder_service.build_category_pie_chart(
            &classified,
            "Players by element",
            ELEMENT_COLUMN,
            &element_color_map(),
        )?;

        let modality_pie: ChartSpec = self.chart_builder_service.build_category_pie_chart(
            &classified,
            "Players by modality",
            MODALITY_COLUMN,
            &modality_color_map(),
        )?;

        Ok(vec![
            NamedChart::new(format!("{}_sign_count", point.column_name()), sign_bar),
            NamedChart::new("element_share".to_string(), element_pie),
            NamedChart::new("modality_share".to_string(), modality_pie),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::position_filter::*;
    use crate::model::configs::chart_config::*;
    use crate::model::player::player_record::fixtures::*;
    use crate::repository::csv_player_repository_impl::*;
    use crate::service::{
        chart_builder_service_impl::*, chart_render_service_impl::*, dataset_service_impl::*,
        filter_service_impl::*, sign_classify_service_impl::*,
    };
    use pretty_assertions::assert_eq;

    type TestController = MainController<
        DatasetServiceImpl<CsvPlayerRepositoryImpl>,
        FilterServiceImpl,
        SignClassifyServiceImpl,
        ChartBuilderServiceImpl,
        ChartRenderServiceImpl,
    >;

    fn controller() -> TestController {
        MainController::new(
            DatasetServiceImpl::new(CsvPlayerRepositoryImpl::new()),
            FilterServiceImpl::new(),
            SignClassifyServiceImpl::new(),
            ChartBuilderServiceImpl::new(ChartConfig::default()),
            ChartRenderServiceImpl::new("sans-serif".to_string()),
        )
    }

    fn sample_table() -> PlayerTable {
        let mut goalie: PlayerRecord = player("G", 3.0, Sign::Cancer, "Blue_5");
        goalie.name = "Goalie".to_string();

        PlayerTable::new(vec![
            player("LW", 5.0, Sign::Aries, "White_1"),
            player("C", 5.0, Sign::Leo, "White_1"),
            player("D", 5.0, Sign::Aries, "Red_3"),
            goalie,
        ])
    }

    fn view(kind: ViewKind, position: PositionFilter, point: Option<CelestialPoint>) -> ViewRequest {
        ViewRequest::new(
            "test_view".to_string(),
            kind,
            position,
            StatThresholds::default(),
            point,
            true,
        )
    }

    fn read_spec(path: &Path) -> ChartSpec {
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn horoscope_view_writes_specs_and_table() {
        let dir: tempfile::TempDir = tempfile::tempdir().unwrap();

        let written: Vec<PathBuf> = controller()
            .process_view(
                &sample_table(),
                &view(ViewKind::Horoscope, PositionFilter::All, Some(CelestialPoint::Sun)),
                dir.path(),
                false,
            )
            .await
            .unwrap();

        assert_eq!(written.len(), 4);

        let view_dir: PathBuf = dir.path().join("test_view");
        let bar: ChartSpec = read_spec(&view_dir.join("sun_sign_count.json"));
        assert_eq!(bar.title(), "Total Player Count by Sun Sign");
        assert_eq!(bar.labels(), vec!["ARIES", "CANCER", "LEO"]);
        assert_eq!(bar.points()[0].count(), &2);

        let element: ChartSpec = read_spec(&view_dir.join("element_share.json"));
        assert_eq!(element.labels(), vec!["earth", "fire"]);

        let table_csv: String = std::fs::read_to_string(view_dir.join("players.csv")).unwrap();
        assert!(table_csv.starts_with("name,position,Games Played,Goals,"));
        assert_eq!(table_csv.lines().count(), 5);
    }

    #[tokio::test]
    async fn venus_view_respects_position_filter() {
        let dir: tempfile::TempDir = tempfile::tempdir().unwrap();

        controller()
            .process_view(
                &sample_table(),
                &view(ViewKind::VenusCycle, PositionFilter::Goalie, None),
                dir.path(),
                false,
            )
            .await
            .unwrap();

        let view_dir: PathBuf = dir.path().join("test_view");
        let bar: ChartSpec = read_spec(&view_dir.join("venus_interval_count.json"));
        assert_eq!(bar.labels(), vec!["Blue_5"]);
        assert_eq!(bar.points()[0].color(), &ChartColor::Blue);

        let table_csv: String = std::fs::read_to_string(view_dir.join("players.csv")).unwrap();
        assert!(table_csv.starts_with("name,position,Games Played,Wins,"));
    }

    #[tokio::test]
    async fn venus_is_rejected_for_horoscope_view() {
        let dir: tempfile::TempDir = tempfile::tempdir().unwrap();

        let err: anyhow::Error = controller()
            .process_view(
                &sample_table(),
                &view(ViewKind::Horoscope, PositionFilter::All, Some(CelestialPoint::Venus)),
                dir.path(),
                false,
            )
            .await
            .unwrap_err();

        assert_eq!(
            err.downcast_ref::<DashboardError>(),
            Some(&DashboardError::invalid_argument("celestial point", "Venus"))
        );
    }
}
