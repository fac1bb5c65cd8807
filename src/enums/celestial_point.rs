use crate::common::*;

use crate::error::*;

#[doc = "Celestial body or chart point that carries a sign column in the dataset"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CelestialPoint {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    NorthNode,
    Asc,
    Mc,
}

impl CelestialPoint {
    pub const ALL: [CelestialPoint; 13] = [
        CelestialPoint::Sun,
        CelestialPoint::Moon,
        CelestialPoint::Mercury,
        CelestialPoint::Venus,
        CelestialPoint::Mars,
        CelestialPoint::Jupiter,
        CelestialPoint::Saturn,
        CelestialPoint::Uranus,
        CelestialPoint::Neptune,
        CelestialPoint::Pluto,
        CelestialPoint::NorthNode,
        CelestialPoint::Asc,
        CelestialPoint::Mc,
    ];

    /* Venus has its own cycle view, so the horoscope view does not offer it. */
    pub const SELECTABLE: [CelestialPoint; 12] = [
        CelestialPoint::Sun,
        CelestialPoint::Moon,
        CelestialPoint::Mercury,
        CelestialPoint::Mars,
        CelestialPoint::Jupiter,
        CelestialPoint::Saturn,
        CelestialPoint::Uranus,
        CelestialPoint::Neptune,
        CelestialPoint::Pluto,
        CelestialPoint::NorthNode,
        CelestialPoint::Asc,
        CelestialPoint::Mc,
    ];

    pub fn column_name(&self) -> &'static str {
        match self {
            CelestialPoint::Sun => "sun",
            CelestialPoint::Moon => "moon",
            CelestialPoint::Mercury => "mercury",
            CelestialPoint::Venus => "venus",
            CelestialPoint::Mars => "mars",
            CelestialPoint::Jupiter => "jupiter",
            CelestialPoint::Saturn => "saturn",
            CelestialPoint::Uranus => "uranus",
            CelestialPoint::Neptune => "neptune",
            CelestialPoint::Pluto => "pluto",
            CelestialPoint::NorthNode => "nn",
            CelestialPoint::Asc => "asc",
            CelestialPoint::Mc => "mc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CelestialPoint::Sun => "Sun",
            CelestialPoint::Moon => "Moon",
            CelestialPoint::Mercury => "Mercury",
            CelestialPoint::Venus => "Venus",
            CelestialPoint::Mars => "Mars",
            CelestialPoint::Jupiter => "Jupiter",
            CelestialPoint::Saturn => "Saturn",
            CelestialPoint::Uranus => "Uranus",
            CelestialPoint::Neptune => "Neptune",
            CelestialPoint::Pluto => "Pluto",
            CelestialPoint::NorthNode => "North Node",
            CelestialPoint::Asc => "ASC",
            CelestialPoint::Mc => "MC",
        }
    }

    pub fn is_selectable(&self) -> bool {
        Self::SELECTABLE.contains(self)
    }

    pub fn from_column_name(column: &str) -> Option<Self> {
        Self::ALL.iter().find(|p| p.column_name() == column).copied()
    }
}

impl FromStr for CelestialPoint {
    type Err = DashboardError;

    #[doc = "Accepts either the display name (`North Node`) or the column name (`nn`)"]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed: &str = s.trim();

        Self::ALL
            .iter()
            .find(|p| {
                p.display_name().eq_ignore_ascii_case(trimmed)
                    || p.column_name().eq_ignore_ascii_case(trimmed)
            })
            .copied()
            .ok_or_else(|| DashboardError::invalid_argument("celestial point", s))
    }
}

impl TryFrom<String> for CelestialPoint {
    type Error = DashboardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CelestialPoint> for String {
    fn from(point: CelestialPoint) -> Self {
        point.display_name().to_string()
    }
}

impl Display for CelestialPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_display_and_column_names() {
        assert_eq!("North Node".parse::<CelestialPoint>(), Ok(CelestialPoint::NorthNode));
        assert_eq!("nn".parse::<CelestialPoint>(), Ok(CelestialPoint::NorthNode));
        assert_eq!("MC".parse::<CelestialPoint>(), Ok(CelestialPoint::Mc));
        assert!("Chiron".parse::<CelestialPoint>().is_err());
    }

    #[test]
    fn venus_is_not_selectable() {
        assert!(!CelestialPoint::Venus.is_selectable());
        assert!(CelestialPoint::Asc.is_selectable());
        assert_eq!(CelestialPoint::from_column_name("pluto"), Some(CelestialPoint::Pluto));
    }
}
