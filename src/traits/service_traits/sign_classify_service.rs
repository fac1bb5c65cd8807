use crate::enums::{celestial_point::*, sign::*};

use crate::error::*;

use crate::model::player::player_record::*;

use crate::dto::{classification_outcome::*, classified_player::*};

pub trait SignClassifyService {
    fn classify(&self, sign: Sign) -> (Element, Modality);

    #[allow(dead_code)]
    fn classify_label(&self, label: &str) -> Result<(Element, Modality), DashboardError>;

    #[doc = "Classifies every label independently; a bad label never aborts the others"]
    #[allow(dead_code)]
    fn classify_labels(&self, labels: &[String]) -> ClassificationOutcome;

    #[doc = "Appends element/modality of `point`'s sign to every record"]
    fn enrich_with_classification<'a>(
        &self,
        records: &'a [PlayerRecord],
        point: CelestialPoint,
    ) -> Vec<ClassifiedPlayer<'a>>;
}
