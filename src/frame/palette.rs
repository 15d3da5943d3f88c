/// The four frame buttons, in the order the frame advertises them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonColor {
    Green,
    Purple,
    Red,
    Blue,
}

impl ButtonColor {
    pub const ALL: [ButtonColor; 4] = [
        ButtonColor::Green,
        ButtonColor::Purple,
        ButtonColor::Red,
        ButtonColor::Blue,
    ];

    /// Maps a 1-based button index onto the palette. Anything outside 1..=4 is `None`.
    pub fn from_button_index(index: i64) -> Option<Self> {
        let slot = usize::try_from(index.checked_sub(1)?).ok()?;
        Self::ALL.get(slot).copied()
    }

    /// CSS color name used by the placeholder image service.
    pub fn css_name(self) -> &'static str {
        match self {
            ButtonColor::Green => "green",
            ButtonColor::Purple => "purple",
            ButtonColor::Red => "red",
            ButtonColor::Blue => "blue",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ButtonColor::Green => "Green",
            ButtonColor::Purple => "Purple",
            ButtonColor::Red => "Red",
            ButtonColor::Blue => "Blue",
        }
    }
}

/// Background for an interaction frame: a pressed button's color, or the
/// configured fallback when the index could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameColor {
    Button(ButtonColor),
    Fallback(String),
}

impl FrameColor {
    pub fn resolve(index: Option<i64>, fallback: &str) -> Self {
        match index.and_then(ButtonColor::from_button_index) {
            Some(color) => FrameColor::Button(color),
            None => FrameColor::Fallback(fallback.to_string()),
        }
    }

    pub fn css_name(&self) -> &str {
        match self {
            FrameColor::Button(color) => color.css_name(),
            FrameColor::Fallback(name) => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_indexes_follow_palette_order() {
        let names: Vec<_> = (1..=4)
            .map(|i| ButtonColor::from_button_index(i).unwrap().css_name())
            .collect();
        assert_eq!(names, ["green", "purple", "red", "blue"]);
    }

    #[test]
    fn out_of_range_indexes_resolve_to_fallback() {
        for index in [0, -1, 5, i64::MIN, i64::MAX] {
            assert_eq!(
                FrameColor::resolve(Some(index), "white"),
                FrameColor::Fallback("white".to_string()),
                "index {index}"
            );
        }
        assert_eq!(FrameColor::resolve(None, "white").css_name(), "white");
    }

    #[test]
    fn labels_are_capitalised_names() {
        let labels: Vec<_> = ButtonColor::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels, ["Green", "Purple", "Red", "Blue"]);
    }
}
