use crate::common::*;

use crate::dto::chart_spec::*;

#[async_trait]
pub trait ChartRenderService: Send + Sync {
    #[doc = "
        Draw a chart spec and save it as a PNG image
        # Arguments
        * `spec` - Chart to draw (bar or pie)
        * `output_path` - Path where the chart image will be saved
    "]
    async fn render_chart(&self, spec: &ChartSpec, output_path: &Path) -> anyhow::Result<()>;
}
