use crate::common::*;

use crate::error::*;

#[doc = "Zodiac sign in canonical zodiacal order (ARIES = 1 ... PISCES = 12)"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

impl Sign {
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    #[doc = "1-based position in canonical order"]
    pub fn position(&self) -> usize {
        *self as usize + 1
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sign::Aries => "ARIES",
            Sign::Taurus => "TAURUS",
            Sign::Gemini => "GEMINI",
            Sign::Cancer => "CANCER",
            Sign::Leo => "LEO",
            Sign::Virgo => "VIRGO",
            Sign::Libra => "LIBRA",
            Sign::Scorpio => "SCORPIO",
            Sign::Sagittarius => "SAGITTARIUS",
            Sign::Capricorn => "CAPRICORN",
            Sign::Aquarius => "AQUARIUS",
            Sign::Pisces => "PISCES",
        }
    }

    #[doc = "Canonical labels, used as the bar chart category order"]
    pub fn labels() -> Vec<String> {
        Self::ALL.iter().map(|s| s.label().to_string()).collect()
    }

    #[doc = r#"
        Maps the sign to its (element, modality) pair from its 1-based position `i`.

        * modality: `i % 3` -> 0 cardinal, 1 fixed, 2 mutable
        * element:  `i % 4` -> 0 fire, 1 earth, 2 air, 3 water
    "#]
    pub fn classify(&self) -> (Element, Modality) {
        let i: usize = self.position();

        let modality: Modality = match i % 3 {
            0 => Modality::Cardinal,
            1 => Modality::Fixed,
            _ => Modality::Mutable,
        };

        let element: Element = match i % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        };

        (element, modality)
    }
}

impl FromStr for Sign {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|sign| sign.label() == s)
            .copied()
            .ok_or_else(|| DashboardError::invalid_argument("sign", s))
    }
}

impl TryFrom<String> for Sign {
    type Error = DashboardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Sign> for String {
    fn from(sign: Sign) -> Self {
        sign.label().to_string()
    }
}

impl Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Element {
    pub fn as_str(&self) -> &'static str {
        match self {
            Element::Fire => "fire",
            Element::Earth => "earth",
            Element::Air => "air",
            Element::Water => "water",
        }
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Modality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Modality::Cardinal => "cardinal",
            Modality::Fixed => "fixed",
            Modality::Mutable => "mutable",
        }
    }
}

impl Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
