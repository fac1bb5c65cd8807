use crate::common::*;

use crate::enums::{position_filter::*, stat_column::*};

use crate::dto::stat_thresholds::*;

#[doc = "A single statistic slider: its column, display label and upper bound"]
#[derive(Debug, Clone, PartialEq, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct StatSlider {
    pub column: StatColumn,
    pub label: String,
    pub max: i64,
}

#[doc = r#"
    Filter panel shared by every view: the position selection plus nine
    statistic sliders. Labels follow the goalie/skater label set and each
    slider is bounded by the column's observed maximum over the whole table.
"#]
#[derive(Debug, Clone, PartialEq, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct FilterPanel {
    pub position: PositionFilter,
    pub sliders: Vec<StatSlider>,
}

impl FilterPanel {
    pub fn stat_labels(&self) -> Vec<String> {
        self.sliders.iter().map(|s| s.label.clone()).collect()
    }

    #[doc = "Clamps every threshold into its slider range `0..=max`"]
    pub fn clamp_thresholds(&self, requested: &StatThresholds) -> StatThresholds {
        let mut clamped: StatThresholds = *requested;

        for slider in &self.sliders {
            let value: f64 = requested.get(slider.column);
            let upper: f64 = (slider.max as f64).max(0.0);
            let bounded: f64 = value.clamp(0.0, upper);

            if bounded != value {
                warn!(
                    "[FilterPanel->clamp_thresholds] '{}' threshold {} is outside 0..={}, using {}",
                    slider.label, value, slider.max, bounded
                );
            }

            clamped.set(slider.column, bounded);
        }

        clamped
    }
}
