use crate::common::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct ChartConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_background_color")]
    pub background_color: String,
    #[serde(default = "default_font_family")]
    pub font_family: String,
}

fn default_width() -> u32 {
    1000
}

fn default_height() -> u32 {
    600
}

fn default_background_color() -> String {
    "#ccffe6".to_string()
}

fn default_font_family() -> String {
    "sans-serif".to_string()
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background_color: default_background_color(),
            font_family: default_font_family(),
        }
    }
}
