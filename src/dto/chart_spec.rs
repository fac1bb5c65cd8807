use crate::common::*;

use crate::enums::chart_color::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Pie,
}

#[doc = r#"
    차트 데이터 포인트 하나 (막대 하나 혹은 파이 조각 하나).

    # Fields
    * `label` - 범주값
    * `count` - 해당 범주의 행 개수
    * `value` - 막대 차트에서는 count, 파이 차트에서는 전체 대비 비율
    * `color` - 범주에 할당된 색상
"#]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct ChartPoint {
    pub label: String,
    pub count: usize,
    pub value: f64,
    pub color: ChartColor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct ChartLayout {
    pub width: u32,
    pub height: u32,
    pub background_color: String,
    pub plot_background_color: Option<String>,
    pub show_legend: bool,
}

#[doc = "Renderer-independent chart description. Built fresh for every request."]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub category_column: String,
    pub points: Vec<ChartPoint>,
    pub layout: ChartLayout,
}

impl ChartSpec {
    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.label.as_str()).collect()
    }

    pub fn total_count(&self) -> usize {
        self.points.iter().map(|p| p.count).sum()
    }
}
