use crate::common::*;

use crate::enums::{sign::*, venus_interval::*};

#[doc = "Named colors used by the dashboard palettes"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartColor {
    Red,
    Brown,
    Yellow,
    Blue,
    White,
    Black,
}

impl ChartColor {
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            ChartColor::Red => (255, 0, 0),
            ChartColor::Brown => (165, 42, 42),
            ChartColor::Yellow => (255, 255, 0),
            ChartColor::Blue => (0, 0, 255),
            ChartColor::White => (255, 255, 255),
            ChartColor::Black => (0, 0, 0),
        }
    }
}

#[doc = "Bar palette parallel to `Sign::ALL` (red, brown, yellow, blue repeating)"]
pub fn sign_palette() -> Vec<ChartColor> {
    [
        ChartColor::Red,
        ChartColor::Brown,
        ChartColor::Yellow,
        ChartColor::Blue,
    ]
    .iter()
    .copied()
    .cycle()
    .take(Sign::ALL.len())
    .collect()
}

#[doc = "Bar palette parallel to `VenusInterval::DISPLAY_ORDER`"]
pub fn venus_interval_palette() -> Vec<ChartColor> {
    VenusInterval::DISPLAY_ORDER
        .iter()
        .map(|interval| venus_color_chart_color(interval.color()))
        .collect()
}

pub fn venus_color_chart_color(color: VenusColor) -> ChartColor {
    match color {
        VenusColor::White => ChartColor::White,
        VenusColor::Blue => ChartColor::Blue,
        VenusColor::Black => ChartColor::Black,
        VenusColor::Red => ChartColor::Red,
    }
}

pub fn venus_color_map() -> HashMap<String, ChartColor> {
    VenusColor::ALL
        .iter()
        .map(|color| (color.label().to_string(), venus_color_chart_color(*color)))
        .collect()
}

pub fn element_color_map() -> HashMap<String, ChartColor> {
    HashMap::from([
        (Element::Fire.to_string(), ChartColor::Red),
        (Element::Earth.to_string(), ChartColor::Brown),
        (Element::Air.to_string(), ChartColor::Yellow),
        (Element::Water.to_string(), ChartColor::Blue),
    ])
}

pub fn modality_color_map() -> HashMap<String, ChartColor> {
    HashMap::from([
        (Modality::Cardinal.to_string(), ChartColor::Red),
        (Modality::Fixed.to_string(), ChartColor::Blue),
        (Modality::Mutable.to_string(), ChartColor::White),
    ])
}
