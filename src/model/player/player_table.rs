use crate::common::*;

use crate::enums::stat_column::*;

use crate::model::player::player_record::*;

#[doc = "Immutable, validated dataset loaded from one CSV file"]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct PlayerTable {
    records: Vec<PlayerRecord>,
}

impl PlayerTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[doc = "Largest observed value of the column (0.0 on an empty table)"]
    pub fn column_max(&self, column: StatColumn) -> f64 {
        self.records
            .iter()
            .map(|record| record.stat(column))
            .fold(0.0_f64, f64::max)
    }
}
