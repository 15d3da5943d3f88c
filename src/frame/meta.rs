use serde::Serialize;

use crate::config::FrameConfig;
use crate::frame::palette::ButtonColor;

/// Protocol marker carried in the `fc:frame` tag.
pub const FRAME_VERSION: &str = "vNext";

#[derive(Debug, Clone, Serialize)]
pub struct FrameButton {
    pub index: usize,
    pub label: &'static str,
}

/// Everything the `fc:frame:*` meta tags of one document carry.
#[derive(Debug, Clone, Serialize)]
pub struct FrameMeta {
    pub version: &'static str,
    pub image: String,
    pub aspect_ratio: String,
    pub post_url: String,
    pub input_text: Option<String>,
    pub buttons: Vec<FrameButton>,
}

impl FrameMeta {
    pub fn new(config: &FrameConfig, image: String, post_url: String) -> Self {
        Self {
            version: FRAME_VERSION,
            image,
            aspect_ratio: config.aspect_ratio.clone(),
            post_url,
            input_text: None,
            buttons: color_buttons(),
        }
    }

    /// Asks the client to show a text field with the given placeholder.
    pub fn with_text_input(mut self, placeholder: &str) -> Self {
        self.input_text = Some(placeholder.to_string());
        self
    }
}

fn color_buttons() -> Vec<FrameButton> {
    ButtonColor::ALL
        .iter()
        .enumerate()
        .map(|(i, color)| FrameButton {
            index: i + 1,
            label: color.label(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_are_numbered_from_one_in_palette_order() {
        let meta = FrameMeta::new(&FrameConfig::default(), String::new(), String::new());
        let buttons: Vec<_> = meta.buttons.iter().map(|b| (b.index, b.label)).collect();
        assert_eq!(buttons, [(1, "Green"), (2, "Purple"), (3, "Red"), (4, "Blue")]);
        assert!(meta.input_text.is_none());
    }
}
