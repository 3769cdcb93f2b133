use std::fmt;

/// The sixteen dye colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DyeColor {
    White,
    LightGray,
    Gray,
    Black,
    Brown,
    Red,
    Orange,
    Yellow,
    Lime,
    Green,
    Cyan,
    LightBlue,
    Blue,
    Purple,
    Magenta,
    Pink,
}

impl DyeColor {
    pub const ALL: [DyeColor; 16] = [
        DyeColor::White,
        DyeColor::LightGray,
        DyeColor::Gray,
        DyeColor::Black,
        DyeColor::Brown,
        DyeColor::Red,
        DyeColor::Orange,
        DyeColor::Yellow,
        DyeColor::Lime,
        DyeColor::Green,
        DyeColor::Cyan,
        DyeColor::LightBlue,
        DyeColor::Blue,
        DyeColor::Purple,
        DyeColor::Magenta,
        DyeColor::Pink,
    ];

    /// Registry-style name, e.g. `"light_gray"`. Also the prefix of every
    /// colored block name (`light_gray_wool`).
    pub const fn name(self) -> &'static str {
        match self {
            DyeColor::White => "white",
            DyeColor::LightGray => "light_gray",
            DyeColor::Gray => "gray",
            DyeColor::Black => "black",
            DyeColor::Brown => "brown",
            DyeColor::Red => "red",
            DyeColor::Orange => "orange",
            DyeColor::Yellow => "yellow",
            DyeColor::Lime => "lime",
            DyeColor::Green => "green",
            DyeColor::Cyan => "cyan",
            DyeColor::LightBlue => "light_blue",
            DyeColor::Blue => "blue",
            DyeColor::Purple => "purple",
            DyeColor::Magenta => "magenta",
            DyeColor::Pink => "pink",
        }
    }

    pub fn from_name(name: &str) -> Option<DyeColor> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Position in [`ALL`](Self::ALL).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Display form, e.g. `"Light Gray"`.
    pub fn title(self) -> String {
        self.name()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for DyeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
