use crate::common::*;

use crate::enums::chart_color::*;

use crate::dto::chart_spec::*;

use crate::utils_modules::traits::*;

pub trait ChartBuilderService {
    #[doc = "
        Counts rows per value of `group_column` and returns one bar per observed category.
        # Arguments
        * `table` - Rows to count
        * `title` - Chart title
        * `category_order` - Full category domain in display order
        * `group_column` - Column to group by
        * `color_palette` - Colors parallel to `category_order`
    "]
    fn build_grouped_bar_chart<R: CategoricalRow>(
        &self,
        table: &[R],
        title: &str,
        category_order: &[String],
        group_column: &str,
        color_palette: &[ChartColor],
    ) -> anyhow::Result<ChartSpec>;

    #[doc = "
        Returns one slice per distinct value of `category_column`, sized by its share of all rows.
        # Arguments
        * `table` - Rows to count
        * `title` - Chart title
        * `category_column` - Column whose values become slices
        * `color_map` - Exact label to color mapping; a miss is an error
    "]
    fn build_category_pie_chart<R: CategoricalRow>(
        &self,
        table: &[R],
        title: &str,
        category_column: &str,
        color_map: &HashMap<String, ChartColor>,
    ) -> anyhow::Result<ChartSpec>;
}
