use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::FrameConfig;

/// Characters `encodeURIComponent` leaves alone, everything else is escaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A URL on the placeholder image service:
/// `{base}/{width}x{height}[/{background}/{foreground}]?text={text}`.
#[derive(Debug, Clone)]
pub struct PlaceholderImage<'a> {
    base_url: &'a str,
    width: u32,
    height: u32,
    colors: Option<(&'a str, &'a str)>,
    text: &'a str,
}

impl<'a> PlaceholderImage<'a> {
    pub fn new(config: &'a FrameConfig, text: &'a str) -> Self {
        Self {
            base_url: config.image_base_url.trim_end_matches('/'),
            width: config.image_width,
            height: config.image_height,
            colors: None,
            text,
        }
    }

    pub fn colored(mut self, background: &'a str, foreground: &'a str) -> Self {
        self.colors = Some((background, foreground));
        self
    }

    pub fn url(&self) -> String {
        let mut url = format!("{}/{}x{}", self.base_url, self.width, self.height);
        if let Some((background, foreground)) = self.colors {
            url.push('/');
            url.extend(utf8_percent_encode(background, COMPONENT));
            url.push('/');
            url.extend(utf8_percent_encode(foreground, COMPONENT));
        }
        url.push_str("?text=");
        url.extend(utf8_percent_encode(self.text, COMPONENT));
        url
    }
}
