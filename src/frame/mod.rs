// Frame protocol pieces: the posted packet, the button palette, the
// placeholder image URL and the meta tags tying them together. Nothing in
// here knows about HTTP.

pub mod image;
pub mod meta;
pub mod packet;
pub mod palette;

use crate::config::FrameConfig;
use image::PlaceholderImage;
use meta::FrameMeta;
use packet::UntrustedData;
use palette::FrameColor;

/// Metadata for the first view: plain placeholder, no text input.
pub fn initial_frame(config: &FrameConfig, post_url: String) -> FrameMeta {
    let image = PlaceholderImage::new(config, &config.default_text).url();
    FrameMeta::new(config, image, post_url)
}

/// Metadata answering an interaction: the image is painted in the pressed
/// button's color and shows the viewer's text.
pub fn interaction_frame(config: &FrameConfig, data: &UntrustedData, post_url: String) -> FrameMeta {
    let color = FrameColor::resolve(data.button_index(), &config.default_color);
    let text = data.input_text().unwrap_or(&config.default_text);

    let image = PlaceholderImage::new(config, text)
        .colored(color.css_name(), &config.text_color)
        .url();

    FrameMeta::new(config, image, post_url).with_text_input(&config.input_placeholder)
}
