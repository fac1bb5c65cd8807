use crate::common::*;

use crate::enums::sign::*;

use crate::error::*;

#[doc = "Result of classifying one label; `index` is the label's position in the input"]
#[derive(Debug, Clone, PartialEq, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct ClassifiedLabel {
    pub index: usize,
    pub sign: Sign,
    pub element: Element,
    pub modality: Modality,
}

#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct ClassificationFailure {
    pub index: usize,
    pub error: DashboardError,
}

#[doc = "Per-label classification: successes and failures are collected separately"]
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Default, Getters)]
#[getset(get = "pub")]
pub struct ClassificationOutcome {
    pub classified: Vec<ClassifiedLabel>,
    pub failures: Vec<ClassificationFailure>,
}

#[allow(dead_code)]
impl ClassificationOutcome {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
