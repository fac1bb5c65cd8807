use crate::common::*;

use crate::enums::stat_column::*;

use crate::model::player::player_record::*;

#[doc = r#"
    9개 통계 컬럼별 최소 임계값. 기본값은 모두 0 이다.

    행은 모든 컬럼에서 `값 > 임계값` (strict) 을 만족할 때만 통과한다.
    각 조건은 독립적이므로 적용 순서와 무관하게 같은 결과가 나온다.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatThresholds {
    pub s1: f64,
    pub s2: f64,
    pub s3: f64,
    pub s4: f64,
    pub s5: f64,
    pub s6: f64,
    pub s7: f64,
    pub s8: f64,
    pub s9: f64,
}

impl StatThresholds {
    pub fn get(&self, column: StatColumn) -> f64 {
        match column {
            StatColumn::S1 => self.s1,
            StatColumn::S2 => self.s2,
            StatColumn::S3 => self.s3,
            StatColumn::S4 => self.s4,
            StatColumn::S5 => self.s5,
            StatColumn::S6 => self.s6,
            StatColumn::S7 => self.s7,
            StatColumn::S8 => self.s8,
            StatColumn::S9 => self.s9,
        }
    }

    pub fn set(&mut self, column: StatColumn, value: f64) {
        let slot: &mut f64 = match column {
            StatColumn::S1 => &mut self.s1,
            StatColumn::S2 => &mut self.s2,
            StatColumn::S3 => &mut self.s3,
            StatColumn::S4 => &mut self.s4,
            StatColumn::S5 => &mut self.s5,
            StatColumn::S6 => &mut self.s6,
            StatColumn::S7 => &mut self.s7,
            StatColumn::S8 => &mut self.s8,
            StatColumn::S9 => &mut self.s9,
        };
        *slot = value;
    }

    pub fn passes_column(&self, record: &PlayerRecord, column: StatColumn) -> bool {
        record.stat(column) > self.get(column)
    }

    pub fn passes(&self, record: &PlayerRecord) -> bool {
        StatColumn::ALL
            .iter()
            .all(|column| self.passes_column(record, *column))
    }
}
