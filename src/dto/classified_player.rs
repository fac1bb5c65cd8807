use crate::common::*;

use crate::enums::sign::*;

use crate::error::*;

use crate::model::player::player_record::*;

use crate::utils_modules::traits::*;

pub const ELEMENT_COLUMN: &str = "element";
pub const MODALITY_COLUMN: &str = "modality";

#[doc = "A player row extended with the element/modality of one of its sign columns"]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct ClassifiedPlayer<'a> {
    record: &'a PlayerRecord,
    element: Element,
    modality: Modality,
}

impl CategoricalRow for ClassifiedPlayer<'_> {
    fn has_column(column: &str) -> bool {
        column == ELEMENT_COLUMN || column == MODALITY_COLUMN || PlayerRecord::has_column(column)
    }

    fn category_value(&self, column: &str) -> Result<String, DashboardError> {
        match column {
            ELEMENT_COLUMN => Ok(self.element.to_string()),
            MODALITY_COLUMN => Ok(self.modality.to_string()),
            _ => self.record.category_value(column),
        }
    }
}
