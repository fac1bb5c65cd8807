use crate::common::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct SystemConfig {
    pub output_dir: String,
    #[serde(default = "default_render_png")]
    pub render_png: bool,
}

fn default_render_png() -> bool {
    true
}
