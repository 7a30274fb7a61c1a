use serde::{de::Error as _, Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Color {
    RGB(u8, u8, u8),
    Named(NamedColor),
    #[serde(deserialize_with = "deserialize_hex")]
    Hex(u8, u8, u8),
}

impl From<Color> for crossterm::style::Color {
    fn from(value: Color) -> Self {
        use crossterm::style::Color as CsColor;
        use NamedColor as NmColor;

        match value {
            Color::Named(named) => match named {
                NmColor::Black => CsColor::Black,
                NmColor::DarkGrey => CsColor::DarkGrey,
                NmColor::Red => CsColor::Red,
                NmColor::DarkRed => CsColor::DarkRed,
                NmColor::Green => CsColor::Green,
                NmColor::DarkGreen => CsColor::DarkGreen,
                NmColor::Yellow => CsColor::Yellow,
                NmColor::DarkYellow => CsColor::DarkYellow,
                NmColor::Blue => CsColor::Blue,
                NmColor::DarkBlue => CsColor::DarkBlue,
                NmColor::Magenta => CsColor::Magenta,
                NmColor::DarkMagenta => CsColor::DarkMagenta,
                NmColor::Cyan => CsColor::Cyan,
                NmColor::DarkCyan => CsColor::DarkCyan,
                NmColor::White => CsColor::White,
                NmColor::Grey => CsColor::Grey,
            },
            Color::RGB(r, g, b) | Color::Hex(r, g, b) => CsColor::Rgb { r, g, b },
        }
    }
}

fn deserialize_hex<'de, D>(deserializer: D) -> Result<(u8, u8, u8), D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    let hex = s.strip_prefix('#').ok_or_else(|| {
        D::Error::custom(format!(
            "invalid hex color, expected format `#RGB` or `#RRGGBB`: {:?}",
            s
        ))
    })?;

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(D::Error::custom)
    };

    match hex.len() {
        _ if !hex.is_ascii() => Err(D::Error::custom(format!("invalid hex color: {:?}", s))),
        6 => Ok((channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        3 => Ok((channel(0..1)? * 17, channel(1..2)? * 17, channel(2..3)? * 17)),
        _ => Err(D::Error::custom(format!(
            "invalid hex color, expected format `#RGB` or `#RRGGBB`: {:?}",
            s
        ))),
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NamedColor {
    Black,
    DarkGrey,
    Red,
    DarkRed,
    Green,
    DarkGreen,
    Yellow,
    DarkYellow,
    Blue,
    DarkBlue,
    Magenta,
    DarkMagenta,
    Cyan,
    DarkCyan,
    White,
    Grey,
}

/// Colors of the strokes drawn on the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub walls: Color,
    pub path: Color,
    pub undo: Color,
    pub text: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme {
            walls: Color::Named(NamedColor::White),
            path: Color::Named(NamedColor::Red),
            undo: Color::Named(NamedColor::DarkGrey),
            text: Color::Named(NamedColor::Grey),
        }
    }
}
