use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct UiConfigSection {
    pub color: Option<bool>,
    pub banner: Option<bool>,
}

impl UiConfigSection {
    pub fn color_enabled(&self) -> bool {
        self.color.unwrap_or(true)
    }

    pub fn banner_enabled(&self) -> bool {
        self.banner.unwrap_or(true)
    }
}
