use crate::common::*;

use crate::enums::chart_color::*;

use crate::error::*;

use crate::model::configs::chart_config::*;

use crate::dto::chart_spec::*;

use crate::traits::service_traits::chart_builder_service::*;

use crate::utils_modules::traits::*;

const WHITE_PAPER: &str = "#ffffff";

#[derive(Debug, Clone, new)]
pub struct ChartBuilderServiceImpl {
    chart_config: ChartConfig,
}

impl ChartBuilderServiceImpl {
    #[doc = "Bar charts: tinted plot area, no legend"]
    fn bar_layout(&self) -> ChartLayout {
        ChartLayout::new(
            *self.chart_config.width(),
            *self.chart_config.height(),
            WHITE_PAPER.to_string(),
            Some(self.chart_config.background_color().to_string()),
            false,
        )
    }

    #[doc = "Pie charts: tinted paper, transparent plot area, legend shown"]
    fn pie_layout(&self) -> ChartLayout {
        ChartLayout::new(
            *self.chart_config.width(),
            *self.chart_config.height(),
            self.chart_config.background_color().to_string(),
            None,
            true,
        )
    }

    #[doc = r#"
        컬럼값별 행 개수를 집계해주는 함수.

        결과는 테이블에서 처음 등장한 순서를 유지한다.
    "#]
    fn count_by_column<R: CategoricalRow>(
        &self,
        table: &[R],
        column: &str,
    ) -> Result<Vec<(String, usize)>, DashboardError> {
        if !R::has_column(column) {
            return Err(DashboardError::MissingColumn(column.to_string()));
        }

        let mut counts: Vec<(String, usize)> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for row in table {
            let value: String = row.category_value(column)?;

            match positions.get(&value) {
                Some(pos) => counts[*pos].1 += 1,
                None => {
                    positions.insert(value.clone(), counts.len());
                    counts.push((value, 1));
                }
            }
        }

        Ok(counts)
    }
}

impl ChartBuilderService for ChartBuilderServiceImpl {
    fn build_grouped_bar_chart<R: CategoricalRow>(
        &self,
        table: &[R],
        title: &str,
        category_order: &[String],
        group_column: &str,
        color_palette: &[ChartColor],
    ) -> anyhow::Result<ChartSpec> {
        if color_palette.len() < category_order.len() {
            return Err(DashboardError::PaletteTooShort {
                palette: color_palette.len(),
                order: category_order.len(),
            }
            .into());
        }

        let counts: HashMap<String, usize> = self
            .count_by_column(table, group_column)?
            .into_iter()
            .collect();

        if let Some(unknown) = counts.keys().find(|value| !category_order.contains(value)) {
            return Err(DashboardError::UnknownCategory {
                column: group_column.to_string(),
                value: unknown.clone(),
            }
            .into());
        }

        /* 데이터에 없는 범주는 0 막대로 채우지 않고 생략한다. 색상은 전체 순서상의 위치로 고정. */
        let points: Vec<ChartPoint> = category_order
            .iter()
            .enumerate()
            .filter_map(|(pos, label)| {
                counts.get(label).map(|count| {
                    ChartPoint::new(label.clone(), *count, *count as f64, color_palette[pos])
                })
            })
            .collect();

        Ok(ChartSpec::new(
            ChartKind::Bar,
            title.to_string(),
            group_column.to_string(),
            points,
            self.bar_layout(),
        ))
    }

    fn build_category_pie_chart<R: CategoricalRow>(
        &self,
        table: &[R],
        title: &str,
        category_column: &str,
        color_map: &HashMap<String, ChartColor>,
    ) -> anyhow::Result<ChartSpec> {
        let counts: Vec<(String, usize)> = self.count_by_column(table, category_column)?;
        let total: usize = table.len();

        let points: Vec<ChartPoint> = counts
            .into_iter()
            .map(|(label, count)| -> Result<ChartPoint, DashboardError> {
                let color: ChartColor = color_map
                    .get(&label)
                    .copied()
                    .ok_or_else(|| DashboardError::ColorLookupMiss(label.clone()))?;

                Ok(ChartPoint::new(
                    label,
                    count,
                    count as f64 / total as f64,
                    color,
                ))
            })
            .collect::<Result<Vec<ChartPoint>, DashboardError>>()?;

        Ok(ChartSpec::new(
            ChartKind::Pie,
            title.to_string(),
            category_column.to_string(),
            points,
            self.pie_layout(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone)]
    struct Row(&'static str);

    impl CategoricalRow for Row {
        fn has_column(column: &str) -> bool {
            column == "group"
        }

        fn category_value(&self, column: &str) -> Result<String, DashboardError> {
            match column {
                "group" => Ok(self.0.to_string()),
                _ => Err(DashboardError::MissingColumn(column.to_string())),
            }
        }
    }

    fn rows(values: &[&'static str]) -> Vec<Row> {
        values.iter().map(|v| Row(*v)).collect()
    }

    fn order() -> Vec<String> {
        vec!["A".to_string(), "B".to_string(), "C".to_string()]
    }

    fn builder() -> ChartBuilderServiceImpl {
        ChartBuilderServiceImpl::new(ChartConfig::default())
    }

    fn dashboard_error(err: &anyhow::Error) -> Option<&DashboardError> {
        err.downcast_ref::<DashboardError>()
    }

    #[test]
    fn absent_categories_are_omitted_not_zero_filled() {
        let table: Vec<Row> = rows(&["C", "A", "A", "C", "A"]);
        let palette: Vec<ChartColor> = vec![ChartColor::Red, ChartColor::Blue, ChartColor::White];

        let spec: ChartSpec = builder()
            .build_grouped_bar_chart(&table, "Count", &order(), "group", &palette)
            .unwrap();

        assert_eq!(spec.kind(), &ChartKind::Bar);
        assert_eq!(spec.labels(), vec!["A", "C"]);
        assert_eq!(spec.points()[0].count(), &3);
        assert_eq!(spec.points()[1].count(), &2);
        /* C keeps its own palette slot even though B is missing */
        assert_eq!(spec.points()[1].color(), &ChartColor::White);
        assert!(!spec.layout().show_legend());
    }

    #[test]
    fn bar_chart_preconditions_fail_fast() {
        let table: Vec<Row> = rows(&["A", "Z"]);
        let palette: Vec<ChartColor> = vec![ChartColor::Red; 3];

        let unknown: anyhow::Error = builder()
            .build_grouped_bar_chart(&table, "Count", &order(), "group", &palette)
            .unwrap_err();
        assert_eq!(
            dashboard_error(&unknown),
            Some(&DashboardError::UnknownCategory {
                column: "group".to_string(),
                value: "Z".to_string()
            })
        );

        let missing: anyhow::Error = builder()
            .build_grouped_bar_chart(&rows(&[]), "Count", &order(), "nope", &palette)
            .unwrap_err();
        assert_eq!(
            dashboard_error(&missing),
            Some(&DashboardError::MissingColumn("nope".to_string()))
        );

        let short: anyhow::Error = builder()
            .build_grouped_bar_chart(&rows(&["A"]), "Count", &order(), "group", &palette[..2])
            .unwrap_err();
        assert_eq!(
            dashboard_error(&short),
            Some(&DashboardError::PaletteTooShort { palette: 2, order: 3 })
        );
    }

    #[test]
    fn pie_proportions_sum_to_one() {
        let table: Vec<Row> = rows(&["B", "A", "B", "C", "B", "A", "C"]);
        let color_map: HashMap<String, ChartColor> = HashMap::from([
            ("A".to_string(), ChartColor::Red),
            ("B".to_string(), ChartColor::Blue),
            ("C".to_string(), ChartColor::Yellow),
        ]);

        let spec: ChartSpec = builder()
            .build_category_pie_chart(&table, "Share", "group", &color_map)
            .unwrap();

        let total: f64 = spec.points().iter().map(|p| p.value()).sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert_eq!(spec.labels(), vec!["B", "A", "C"]);
        assert_eq!(spec.points()[0].color(), &ChartColor::Blue);
        assert_eq!(spec.total_count(), 7);
    }

    #[test]
    fn pie_color_miss_is_fatal() {
        let table: Vec<Row> = rows(&["A", "B"]);
        let color_map: HashMap<String, ChartColor> =
            HashMap::from([("A".to_string(), ChartColor::Red)]);

        let err: anyhow::Error = builder()
            .build_category_pie_chart(&table, "Share", "group", &color_map)
            .unwrap_err();

        assert_eq!(
            dashboard_error(&err),
            Some(&DashboardError::ColorLookupMiss("B".to_string()))
        );
    }

    #[test]
    fn pie_of_empty_table_has_no_slices() {
        let spec: ChartSpec = builder()
            .build_category_pie_chart(&rows(&[]), "Share", "group", &HashMap::new())
            .unwrap();

        assert!(spec.points().is_empty());
    }

    #[test]
    fn grouping_players_by_stat_column_is_rejected() {
        use crate::enums::sign::*;
        use crate::model::player::{player_record::fixtures::*, player_record::*};

        let table: Vec<PlayerRecord> = vec![player("C", 4.0, Sign::Leo, "Red_3")];

        let err: anyhow::Error = builder()
            .build_grouped_bar_chart(
                &table,
                "Count",
                &Sign::labels(),
                "s1",
                &sign_palette(),
            )
            .unwrap_err();

        assert_eq!(
            dashboard_error(&err),
            Some(&DashboardError::NotCategorical("s1".to_string()))
        );
    }
}
