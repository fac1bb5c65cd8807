use crate::common::*;
use crate::dto::chart_spec::*;
use crate::traits::service_traits::chart_render_service::*;
use crate::utils_modules::color_utils::*;
use plotters::coord::ranged1d::SegmentValue;
use plotters::element::Pie;
use plotters::prelude::*;

#[derive(Debug, Clone, new)]
pub struct ChartRenderServiceImpl {
    font_family: String,
}

fn to_rgb_color(rgb: (u8, u8, u8)) -> RGBColor {
    RGBColor(rgb.0, rgb.1, rgb.2)
}

impl ChartRenderServiceImpl {
    #[doc = "Helper function to determine the Y-axis upper bound with padding"]
    fn calculate_y_max(values: &[f64]) -> f64 {
        let max_val: f64 = values.iter().copied().fold(0.0_f64, f64::max);
        (max_val * 1.1).max(1.0)
    }

    fn paper_color(layout: &ChartLayout) -> anyhow::Result<RGBColor> {
        Ok(parse_hex_color(layout.background_color())?
            .map(to_rgb_color)
            .unwrap_or(WHITE))
    }

    fn draw_bar_chart(spec: &ChartSpec, output_path: &str, font: &str) -> anyhow::Result<()> {
        let layout: &ChartLayout = spec.layout();
        let paper: RGBColor = Self::paper_color(layout)?;
        let plot_background: Option<RGBColor> = match layout.plot_background_color() {
            Some(color) => parse_hex_color(color)?.map(to_rgb_color),
            None => None,
        };

        let labels: Vec<String> = spec.points().iter().map(|p| p.label().clone()).collect();
        let values: Vec<f64> = spec.points().iter().map(|p| *p.value()).collect();
        let colors: Vec<RGBColor> = spec
            .points()
            .iter()
            .map(|p| to_rgb_color(p.color().rgb()))
            .collect();

        let y_max: f64 = Self::calculate_y_max(&values);

        let root = BitMapBackend::new(output_path, (*layout.width(), *layout.height()))
            .into_drawing_area();
        root.fill(&paper)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(spec.title(), (font, 30).into_font())
            .margin(30)
            .x_label_area_size(60)
            .y_label_area_size(70)
            .build_cartesian_2d((0..labels.len()).into_segmented(), 0f64..y_max)?;

        if let Some(background) = plot_background {
            chart.plotting_area().fill(&background)?;
        }

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(labels.len())
            .x_label_formatter(&|x: &SegmentValue<usize>| match x {
                SegmentValue::CenterOf(i) => labels.get(*i).cloned().unwrap_or_default(),
                _ => String::new(),
            })
            .y_label_formatter(&|y: &f64| format!("{:.0}", y))
            .x_desc(spec.category_column().as_str())
            .y_desc("count")
            .axis_desc_style((font, 18))
            .draw()?;

        chart.draw_series(
            Histogram::vertical(&chart)
                .style_func(|x: &SegmentValue<usize>, _| match x {
                    SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => {
                        colors.get(*i).copied().unwrap_or(BLACK).filled()
                    }
                    SegmentValue::Last => BLACK.filled(),
                })
                .margin(10)
                .data(values.iter().enumerate().map(|(i, v)| (i, *v))),
        )?;

        root.present()?;
        Ok(())
    }

    fn draw_pie_chart(spec: &ChartSpec, output_path: &str, font: &str) -> anyhow::Result<()> {
        let layout: &ChartLayout = spec.layout();
        let paper: RGBColor = Self::paper_color(layout)?;

        let root = BitMapBackend::new(output_path, (*layout.width(), *layout.height()))
            .into_drawing_area();
        root.fill(&paper)?;

        let area = root.titled(spec.title(), (font, 30))?;
        let (width, height) = area.dim_in_pixel();

        let center: (i32, i32) = ((width / 2) as i32, (height / 2) as i32);
        let radius: f64 = (width.min(height) as f64 / 2.0) * 0.75;

        let sizes: Vec<f64> = spec.points().iter().map(|p| *p.value()).collect();
        let colors: Vec<RGBColor> = spec
            .points()
            .iter()
            .map(|p| to_rgb_color(p.color().rgb()))
            .collect();
        let labels: Vec<String> = spec.points().iter().map(|p| p.label().clone()).collect();

        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.start_angle(-90.0);
        pie.label_style((font, 20).into_font().color(&BLACK));
        pie.percentages((font, 16).into_font().color(&BLACK));
        area.draw(&pie)?;

        if *layout.show_legend() {
            /* 우측 상단에 범례 */
            let legend_x: i32 = width as i32 - 160;

            for (idx, (label, color)) in labels.iter().zip(colors.iter()).enumerate() {
                let y: i32 = 20 + idx as i32 * 24;

                area.draw(&Rectangle::new(
                    [(legend_x, y), (legend_x + 16, y + 16)],
                    color.filled(),
                ))?;
                area.draw(&Rectangle::new(
                    [(legend_x, y), (legend_x + 16, y + 16)],
                    BLACK.stroke_width(1),
                ))?;
                area.draw(&Text::new(
                    label.clone(),
                    (legend_x + 24, y),
                    (font, 16).into_font(),
                ))?;
            }
        }

        root.present()?;
        Ok(())
    }
}

#[async_trait]
impl ChartRenderService for ChartRenderServiceImpl {
    async fn render_chart(
        &self,
        spec: &ChartSpec,
        output_path: &std::path::Path,
    ) -> anyhow::Result<()> {
        if spec.points().is_empty() {
            warn!(
                "[ChartRenderServiceImpl->render_chart] '{}' has no data, skipping {:?}",
                spec.title(),
                output_path
            );
            return Ok(());
        }

        /* Create parent directory if it doesn't exist */
        if let Some(parent) = output_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let output_path_str: String = output_path.to_string_lossy().to_string();
        let spec: ChartSpec = spec.clone();
        let font: String = self.font_family.clone();

        let handle: tokio::task::JoinHandle<Result<(), anyhow::Error>> =
            tokio::task::spawn_blocking(move || match spec.kind() {
                ChartKind::Bar => Self::draw_bar_chart(&spec, &output_path_str, &font),
                ChartKind::Pie => Self::draw_pie_chart(&spec, &output_path_str, &font),
            });

        let drawing_result: Result<(), anyhow::Error> = handle.await.context(
            "[ChartRenderServiceImpl->render_chart] blocking task join failed (panic/cancelled)",
        )?;

        drawing_result.context("[ChartRenderServiceImpl->render_chart] drawing/present failed")?;

        info!("Chart generated successfully: {:?}", output_path);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::chart_color::*;

    #[test]
    fn y_axis_has_headroom() {
        assert_eq!(ChartRenderServiceImpl::calculate_y_max(&[]), 1.0);
        assert!((ChartRenderServiceImpl::calculate_y_max(&[10.0, 4.0]) - 11.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn empty_spec_is_skipped_without_writing() {
        let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
        let path: PathBuf = dir.path().join("empty.png");
        let spec: ChartSpec = ChartSpec::new(
            ChartKind::Bar,
            "empty".to_string(),
            "sun".to_string(),
            Vec::new(),
            ChartLayout::new(100, 100, "#ffffff".to_string(), None, false),
        );

        ChartRenderServiceImpl::new("sans-serif".to_string())
            .render_chart(&spec, &path)
            .await
            .unwrap();

        assert!(!path.exists());
    }

    #[tokio::test]
    async fn pie_chart_is_written_under_missing_parent_dir() {
        let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
        let path: PathBuf = dir.path().join("nested").join("element.png");
        let spec: ChartSpec = ChartSpec::new(
            ChartKind::Pie,
            "Players by element".to_string(),
            "element".to_string(),
            vec![
                ChartPoint::new("fire".to_string(), 3, 0.75, ChartColor::Red),
                ChartPoint::new("water".to_string(), 1, 0.25, ChartColor::Blue),
            ],
            ChartLayout::new(400, 300, "#ccffe6".to_string(), None, true),
        );

        ChartRenderServiceImpl::new("sans-serif".to_string())
            .render_chart(&spec, path.as_path())
            .await
            .unwrap();

        assert!(path.exists());
    }
}
