use crate::common::*;

use crate::error::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VenusColor {
    White,
    Blue,
    Black,
    Red,
}

#[doc = r#"
    Venus 주기 구간 태그 (`{Color}_{N}`, N = 1..=5).

    색상 4종 x 구간 5개 = 총 20개의 값을 가지며, 차트 표시 순서는 `DISPLAY_ORDER` 로 고정된다.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VenusInterval {
    color: VenusColor,
    phase: u8,
}

const fn at(color: VenusColor, phase: u8) -> VenusInterval {
    VenusInterval { color, phase }
}

impl VenusColor {
    pub const ALL: [VenusColor; 4] = [
        VenusColor::White,
        VenusColor::Blue,
        VenusColor::Black,
        VenusColor::Red,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            VenusColor::White => "White",
            VenusColor::Blue => "Blue",
            VenusColor::Black => "Black",
            VenusColor::Red => "Red",
        }
    }
}

impl FromStr for VenusColor {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|color| color.label() == s)
            .copied()
            .ok_or_else(|| DashboardError::invalid_argument("venus color", s))
    }
}

impl VenusInterval {
    pub const DISPLAY_ORDER: [VenusInterval; 20] = [
        at(VenusColor::White, 1),
        at(VenusColor::Blue, 5),
        at(VenusColor::Black, 4),
        at(VenusColor::Red, 3),
        at(VenusColor::White, 2),
        at(VenusColor::Blue, 1),
        at(VenusColor::Black, 5),
        at(VenusColor::Red, 4),
        at(VenusColor::White, 3),
        at(VenusColor::Blue, 2),
        at(VenusColor::Black, 1),
        at(VenusColor::Red, 5),
        at(VenusColor::White, 4),
        at(VenusColor::Blue, 3),
        at(VenusColor::Black, 2),
        at(VenusColor::Red, 1),
        at(VenusColor::White, 5),
        at(VenusColor::Blue, 4),
        at(VenusColor::Black, 3),
        at(VenusColor::Red, 2),
    ];

    pub fn new(color: VenusColor, phase: u8) -> Result<Self, DashboardError> {
        if !(1..=5).contains(&phase) {
            return Err(DashboardError::invalid_argument(
                "venus interval phase",
                phase.to_string(),
            ));
        }

        Ok(at(color, phase))
    }

    pub fn color(&self) -> VenusColor {
        self.color
    }

    pub fn phase(&self) -> u8 {
        self.phase
    }

    pub fn label(&self) -> String {
        format!("{}_{}", self.color.label(), self.phase)
    }

    #[doc = "Display order labels, used as the bar chart category order"]
    pub fn labels() -> Vec<String> {
        Self::DISPLAY_ORDER.iter().map(|v| v.label()).collect()
    }
}

impl FromStr for VenusInterval {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed: &str = s.trim();
        let invalid = || DashboardError::invalid_argument("venus interval", s);

        let (color, phase) = trimmed.rsplit_once('_').ok_or_else(invalid)?;
        let color: VenusColor = color.parse().map_err(|_| invalid())?;
        let phase: u8 = phase.parse().map_err(|_| invalid())?;

        VenusInterval::new(color, phase).map_err(|_| invalid())
    }
}

impl TryFrom<String> for VenusInterval {
    type Error = DashboardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<VenusInterval> for String {
    fn from(interval: VenusInterval) -> Self {
        interval.label()
    }
}

impl Display for VenusInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.color.label(), self.phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn display_order_covers_every_tag_once() {
        let unique: HashSet<VenusInterval> = VenusInterval::DISPLAY_ORDER.iter().copied().collect();
        assert_eq!(unique.len(), 20);
        assert_eq!(VenusInterval::labels()[1], "Blue_5");
    }

    #[test]
    fn parse_valid_and_invalid_tags() {
        let tag: VenusInterval = "Black_4".parse().unwrap();
        assert_eq!(tag.color(), VenusColor::Black);
        assert_eq!(tag.phase(), 4);
        assert_eq!(tag.to_string(), "Black_4");

        for bad in ["Green_1", "White_6", "White_0", "White", "_3", "white_2"] {
            assert!(bad.parse::<VenusInterval>().is_err(), "{bad} should be rejected");
        }
    }
}
