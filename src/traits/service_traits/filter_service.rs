use crate::enums::position_filter::*;

use crate::model::player::{player_record::*, player_table::*};

use crate::dto::{filter_panel::*, stat_thresholds::*};

pub trait FilterService {
    #[doc = "Slider labels and bounds for the given position, over the unfiltered table"]
    fn build_filter_panel(&self, table: &PlayerTable, position: PositionFilter) -> FilterPanel;

    #[doc = "Rows matching the position filter whose nine statistics all strictly exceed their thresholds"]
    fn filter_players(
        &self,
        table: &PlayerTable,
        position: PositionFilter,
        thresholds: &StatThresholds,
    ) -> Vec<PlayerRecord>;
}
