use crate::common::*;

#[doc = r#"
    포지션 필터.

    `All` 을 제외한 값들은 포지션 코드에 해당 문자가 포함되어 있는지로 판단한다.
    따라서 `C/LW` 같은 복합 포지션 선수는 여러 필터에 동시에 포함될 수 있다.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PositionFilter {
    #[default]
    All,
    Goalie,
    #[serde(alias = "Defensman")]
    Defenseman,
    Wing,
    Center,
    Forward,
}

impl PositionFilter {
    pub fn position_letter(&self) -> Option<char> {
        match self {
            PositionFilter::All => None,
            PositionFilter::Goalie => Some('G'),
            PositionFilter::Defenseman => Some('D'),
            PositionFilter::Wing => Some('W'),
            PositionFilter::Center => Some('C'),
            PositionFilter::Forward => Some('F'),
        }
    }

    pub fn matches(&self, position_code: &str) -> bool {
        match self.position_letter() {
            Some(letter) => position_code.contains(letter),
            None => true,
        }
    }

    #[doc = "Goalies use their own statistic labels"]
    pub fn is_goalie(&self) -> bool {
        matches!(self, PositionFilter::Goalie)
    }
}

impl Display for PositionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: &str = match self {
            PositionFilter::All => "All",
            PositionFilter::Goalie => "Goalie",
            PositionFilter::Defenseman => "Defenseman",
            PositionFilter::Wing => "Wing",
            PositionFilter::Center => "Center",
            PositionFilter::Forward => "Forward",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wing_matches_by_substring() {
        assert!(PositionFilter::Wing.matches("LW"));
        assert!(PositionFilter::Wing.matches("RW"));
        assert!(!PositionFilter::Wing.matches("D"));
    }

    #[test]
    fn mixed_codes_match_several_filters() {
        assert!(PositionFilter::Center.matches("C/LW"));
        assert!(PositionFilter::Wing.matches("C/LW"));
        assert!(!PositionFilter::Goalie.matches("C/LW"));
        assert!(PositionFilter::All.matches(""));
    }
}
