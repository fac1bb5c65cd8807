use crate::common::*;

use crate::enums::{celestial_point::*, sign::*};

use crate::error::*;

use crate::model::player::player_record::*;

use crate::dto::{classification_outcome::*, classified_player::*};

use crate::traits::service_traits::sign_classify_service::*;

#[derive(Debug, Clone, Default, new)]
pub struct SignClassifyServiceImpl;

impl SignClassifyService for SignClassifyServiceImpl {
    fn classify(&self, sign: Sign) -> (Element, Modality) {
        sign.classify()
    }

    fn classify_label(&self, label: &str) -> Result<(Element, Modality), DashboardError> {
        let sign: Sign = label.parse()?;
        Ok(self.classify(sign))
    }

    fn classify_labels(&self, labels: &[String]) -> ClassificationOutcome {
        let mut outcome: ClassificationOutcome = ClassificationOutcome::default();

        for (index, label) in labels.iter().enumerate() {
            match label.parse::<Sign>() {
                Ok(sign) => {
                    let (element, modality) = self.classify(sign);
                    outcome
                        .classified
                        .push(ClassifiedLabel::new(index, sign, element, modality));
                }
                Err(error) => {
                    warn!(
                        "[SignClassifyServiceImpl->classify_labels] label #{} rejected: {}",
                        index, error
                    );
                    outcome
                        .failures
                        .push(ClassificationFailure::new(index, error));
                }
            }
        }

        outcome
    }

    fn enrich_with_classification<'a>(
        &self,
        records: &'a [PlayerRecord],
        point: CelestialPoint,
    ) -> Vec<ClassifiedPlayer<'a>> {
        records
            .iter()
            .map(|record| {
                let (element, modality) = self.classify(record.sign_of(point));
                ClassifiedPlayer::new(record, element, modality)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::player::player_record::fixtures::*;
    use crate::utils_modules::traits::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bad_labels_do_not_abort_the_rest() {
        let labels: Vec<String> = ["ARIES", "NOT_A_SIGN", "PISCES", ""]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let outcome: ClassificationOutcome = SignClassifyServiceImpl::new().classify_labels(&labels);

        let classified: Vec<usize> = outcome.classified().iter().map(|c| c.index).collect();
        let failed: Vec<usize> = outcome.failures().iter().map(|f| f.index).collect();

        assert_eq!(classified, vec![0, 2]);
        assert_eq!(failed, vec![1, 3]);
        assert!(!outcome.is_clean());
        assert_eq!(
            outcome.classified()[1].element(),
            &Element::Fire
        );
    }

    #[test]
    fn classify_label_reports_invalid_argument() {
        let service: SignClassifyServiceImpl = SignClassifyServiceImpl::new();

        assert_eq!(
            service.classify_label("GEMINI"),
            Ok((Element::Water, Modality::Cardinal))
        );
        assert_eq!(
            service.classify_label("Gemini?"),
            Err(DashboardError::invalid_argument("sign", "Gemini?"))
        );
    }

    #[test]
    fn enrichment_uses_selected_point() {
        let mut record: PlayerRecord = player("C", 1.0, Sign::Aries, "White_1");
        record.moon = Sign::Cancer;
        let records: Vec<PlayerRecord> = vec![record];

        let enriched: Vec<ClassifiedPlayer<'_>> =
            SignClassifyServiceImpl::new().enrich_with_classification(&records, CelestialPoint::Moon);

        assert_eq!(enriched[0].category_value("element"), Ok("fire".to_string()));
        assert_eq!(enriched[0].category_value("modality"), Ok("fixed".to_string()));
        assert_eq!(enriched[0].category_value("sun"), Ok("ARIES".to_string()));
    }
}
