use crate::common::*;

use crate::enums::{celestial_point::*, sign::*, stat_column::*, venus_interval::*};

use crate::error::*;

use crate::utils_modules::traits::*;

#[doc = "Columns that must be present in the dataset header"]
pub const REQUIRED_COLUMNS: [&str; 24] = [
    "position", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "sun", "moon", "mercury",
    "venus", "mars", "jupiter", "saturn", "uranus", "neptune", "pluto", "nn", "asc", "mc",
    "venus_cycle",
];

#[doc = "Derived column: the venus interval tag without its `_N` suffix"]
pub const VENUS_COLOR_COLUMN: &str = "color";

#[doc = r#"
    선수 한 명에 해당하는 데이터셋 한 행.

    적재 시점에 타입이 검증되므로, 별자리/구간 태그 컬럼은 항상 유효한 값만 가진다.
    `lat`, `lon` 등 정의되지 않은 컬럼은 무시된다.
"#]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct PlayerRecord {
    #[serde(default)]
    pub name: String,
    pub position: String,
    pub s1: f64,
    pub s2: f64,
    pub s3: f64,
    pub s4: f64,
    pub s5: f64,
    pub s6: f64,
    pub s7: f64,
    pub s8: f64,
    pub s9: f64,
    pub sun: Sign,
    pub moon: Sign,
    pub mercury: Sign,
    pub venus: Sign,
    pub mars: Sign,
    pub jupiter: Sign,
    pub saturn: Sign,
    pub uranus: Sign,
    pub neptune: Sign,
    pub pluto: Sign,
    pub nn: Sign,
    pub asc: Sign,
    pub mc: Sign,
    pub venus_cycle: VenusInterval,
}

impl PlayerRecord {
    pub fn stat(&self, column: StatColumn) -> f64 {
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

    pub fn sign_of(&self, point: CelestialPoint) -> Sign {
        match point {
            CelestialPoint::Sun => self.sun,
            CelestialPoint::Moon => self.moon,
            CelestialPoint::Mercury => self.mercury,
            CelestialPoint::Venus => self.venus,
            CelestialPoint::Mars => self.mars,
            CelestialPoint::Jupiter => self.jupiter,
            CelestialPoint::Saturn => self.saturn,
            CelestialPoint::Uranus => self.uranus,
            CelestialPoint::Neptune => self.neptune,
            CelestialPoint::Pluto => self.pluto,
            CelestialPoint::NorthNode => self.nn,
            CelestialPoint::Asc => self.asc,
            CelestialPoint::Mc => self.mc,
        }
    }

    pub fn venus_color(&self) -> VenusColor {
        self.venus_cycle.color()
    }

    #[doc = "Header of the exported table, with the statistic columns relabelled"]
    pub fn table_header(stat_labels: &[String]) -> Vec<String> {
        let mut header: Vec<String> = vec!["name".to_string(), "position".to_string()];
        header.extend(stat_labels.iter().cloned());
        header.extend(
            CelestialPoint::ALL
                .iter()
                .map(|point| point.column_name().to_string()),
        );
        header.push("venus_cycle".to_string());
        header
    }

    pub fn table_row(&self) -> Vec<String> {
        let mut row: Vec<String> = vec![self.name.clone(), self.position.clone()];
        row.extend(StatColumn::ALL.iter().map(|col| self.stat(*col).to_string()));
        row.extend(
            CelestialPoint::ALL
                .iter()
                .map(|point| self.sign_of(*point).to_string()),
        );
        row.push(self.venus_cycle.to_string());
        row
    }
}

impl CategoricalRow for PlayerRecord {
    fn has_column(column: &str) -> bool {
        matches!(column, "name" | "position" | "venus_cycle" | VENUS_COLOR_COLUMN)
            || CelestialPoint::from_column_name(column).is_some()
            || StatColumn::from_column_name(column).is_some()
    }

    fn category_value(&self, column: &str) -> Result<String, DashboardError> {
        if let Some(point) = CelestialPoint::from_column_name(column) {
            return Ok(self.sign_of(point).to_string());
        }

        if StatColumn::from_column_name(column).is_some() {
            return Err(DashboardError::NotCategorical(column.to_string()));
        }

        match column {
            "name" => Ok(self.name.clone()),
            "position" => Ok(self.position.clone()),
            "venus_cycle" => Ok(self.venus_cycle.to_string()),
            VENUS_COLOR_COLUMN => Ok(self.venus_color().label().to_string()),
            _ => Err(DashboardError::MissingColumn(column.to_string())),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    #[doc = "Builds a skater with every statistic set to `stat` and every sign set to `sign`"]
    pub(crate) fn player(position: &str, stat: f64, sign: Sign, venus_cycle: &str) -> PlayerRecord {
        PlayerRecord {
            name: format!("{position} player"),
            position: position.to_string(),
            s1: stat,
            s2: stat,
            s3: stat,
            s4: stat,
            s5: stat,
            s6: stat,
            s7: stat,
            s8: stat,
            s9: stat,
            sun: sign,
            moon: sign,
            mercury: sign,
            venus: sign,
            mars: sign,
            jupiter: sign,
            saturn: sign,
            uranus: sign,
            neptune: sign,
            pluto: sign,
            nn: sign,
            asc: sign,
            mc: sign,
            venus_cycle: venus_cycle.parse().expect("valid venus interval"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn category_values_by_column_name() {
        let mut record: PlayerRecord = player("LW", 1.0, Sign::Leo, "Red_3");
        record.nn = Sign::Pisces;

        assert_eq!(record.category_value("sun"), Ok("LEO".to_string()));
        assert_eq!(record.category_value("nn"), Ok("PISCES".to_string()));
        assert_eq!(record.category_value("venus_cycle"), Ok("Red_3".to_string()));
        assert_eq!(record.category_value("color"), Ok("Red".to_string()));
        assert_eq!(
            record.category_value("s1"),
            Err(DashboardError::NotCategorical("s1".to_string()))
        );
        assert_eq!(
            record.category_value("lat"),
            Err(DashboardError::MissingColumn("lat".to_string()))
        );
        assert!(PlayerRecord::has_column("s9"));
        assert!(!PlayerRecord::has_column("lat"));
    }

    #[test]
    fn table_row_lines_up_with_header() {
        let record: PlayerRecord = player("D", 2.0, Sign::Aries, "White_1");
        let labels: Vec<String> = StatColumn::ALL
            .iter()
            .map(|c| c.skater_label().to_string())
            .collect();

        let header: Vec<String> = PlayerRecord::table_header(&labels);
        let row: Vec<String> = record.table_row();

        assert_eq!(header.len(), row.len());
        assert_eq!(header[2], "Games Played");
        assert_eq!(row.last().map(String::as_str), Some("White_1"));
    }
}
