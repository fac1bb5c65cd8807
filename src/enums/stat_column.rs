use crate::common::*;

use crate::enums::position_filter::*;

#[doc = "The nine generic statistic columns. Their meaning depends on goalie vs skater."]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatColumn {
    S1,
    S2,
    S3,
    S4,
    S5,
    S6,
    S7,
    S8,
    S9,
}

impl StatColumn {
    pub const ALL: [StatColumn; 9] = [
        StatColumn::S1,
        StatColumn::S2,
        StatColumn::S3,
        StatColumn::S4,
        StatColumn::S5,
        StatColumn::S6,
        StatColumn::S7,
        StatColumn::S8,
        StatColumn::S9,
    ];

    pub fn column_name(&self) -> &'static str {
        match self {
            StatColumn::S1 => "s1",
            StatColumn::S2 => "s2",
            StatColumn::S3 => "s3",
            StatColumn::S4 => "s4",
            StatColumn::S5 => "s5",
            StatColumn::S6 => "s6",
            StatColumn::S7 => "s7",
            StatColumn::S8 => "s8",
            StatColumn::S9 => "s9",
        }
    }

    pub fn from_column_name(column: &str) -> Option<StatColumn> {
        Self::ALL
            .iter()
            .copied()
            .find(|stat| stat.column_name() == column)
    }

    pub fn goalie_label(&self) -> &'static str {
        match self {
            StatColumn::S1 => "Games Played",
            StatColumn::S2 => "Wins",
            StatColumn::S3 => "Losses",
            StatColumn::S4 => "Ties",
            StatColumn::S5 => "Shutouts",
            StatColumn::S6 => "Point Shares",
            StatColumn::S7 => "Minutes",
            StatColumn::S8 => "Goals Against Average",
            StatColumn::S9 => "Save Percentage",
        }
    }

    pub fn skater_label(&self) -> &'static str {
        match self {
            StatColumn::S1 => "Games Played",
            StatColumn::S2 => "Goals",
            StatColumn::S3 => "Assists",
            StatColumn::S4 => "Points",
            StatColumn::S5 => "Plus/Minus",
            StatColumn::S6 => "Point Shares",
            StatColumn::S7 => "Penalties in Minutes",
            StatColumn::S8 => "Shots on Goal",
            StatColumn::S9 => "Game Winning Goals",
        }
    }

    pub fn label_for(&self, position: PositionFilter) -> &'static str {
        if position.is_goalie() {
            self.goalie_label()
        } else {
            self.skater_label()
        }
    }
}

impl Display for StatColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}
