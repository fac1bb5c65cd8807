use crate::common::*;

use crate::enums::{position_filter::*, stat_column::*};

use crate::model::player::{player_record::*, player_table::*};

use crate::dto::{filter_panel::*, stat_thresholds::*};

use crate::traits::service_traits::filter_service::*;

#[derive(Debug, Clone, Default, new)]
pub struct FilterServiceImpl;

impl FilterService for FilterServiceImpl {
    fn build_filter_panel(&self, table: &PlayerTable, position: PositionFilter) -> FilterPanel {
        let sliders: Vec<StatSlider> = StatColumn::ALL
            .iter()
            .map(|column| {
                StatSlider::new(
                    *column,
                    column.label_for(position).to_string(),
                    table.column_max(*column).trunc() as i64,
                )
            })
            .collect();

        FilterPanel::new(position, sliders)
    }

    fn filter_players(
        &self,
        table: &PlayerTable,
        position: PositionFilter,
        thresholds: &StatThresholds,
    ) -> Vec<PlayerRecord> {
        let filtered: Vec<PlayerRecord> = table
            .records()
            .iter()
            .filter(|record| position.matches(record.position()))
            .filter(|record| thresholds.passes(record))
            .cloned()
            .collect();

        info!(
            "[FilterServiceImpl->filter_players] position={} kept {} of {} players",
            position,
            filtered.len(),
            table.len()
        );

        filtered
    }
}
