use std::fmt::{Display, Formatter};

use anyhow::{Result, ensure};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use svg::node::element::{Rectangle, Text};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgBarTheme,
    ///Print the length on top of every segment
    #[serde(default = "default_true")]
    pub segment_labels: bool,
    ///Print the formula of every bar below it
    #[serde(default = "default_true")]
    pub formulas: bool,
    ///Only draw the first n bars of a group
    #[serde(default)]
    pub max_bars: Option<usize>,
}

fn default_true() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgBarTheme::default(),
            segment_labels: true,
            formulas: true,
            max_bars: None,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgBarTheme {
    pub stroke_width_multiplier: f64,
    ///Hue step between consecutive segments of a bar, in degrees
    pub hue_step: f64,
    pub segment_saturation: f64,
    pub segment_lightness: f64,
    pub bar_fill: Color,
    pub remainder_fill: Color,
    pub label_color: Color,
}

impl Default for SvgBarTheme {
    fn default() -> Self {
        SvgBarTheme::RAINBOW
    }
}

impl SvgBarTheme {
    pub const RAINBOW: SvgBarTheme = SvgBarTheme {
        stroke_width_multiplier: 1.0,
        hue_step: 60.0,
        segment_saturation: 0.55,
        segment_lightness: 0.45,
        bar_fill: Color(0xF1, 0xF5, 0xF9),
        remainder_fill: Color(0xE2, 0xE8, 0xF0),
        label_color: Color(0x33, 0x41, 0x55),
    };

    pub const GRAY: SvgBarTheme = SvgBarTheme {
        stroke_width_multiplier: 1.5,
        hue_step: 0.0,
        segment_saturation: 0.0,
        segment_lightness: 0.45,
        bar_fill: Color(0xFF, 0xFF, 0xFF),
        remainder_fill: Color(0xD3, 0xD3, 0xD3),
        label_color: Color(0x00, 0x00, 0x00),
    };

    /// Fill of the `i`-th segment of a bar
    pub fn segment_fill(&self, i: usize) -> Color {
        let hue = (i as f64 * self.hue_step) % 360.0;
        Color::from_hsl(hue, self.segment_saturation, self.segment_lightness)
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    /// Converts hue (degrees), saturation and lightness (fractions) to RGB
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Color {
        let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let h = hue.rem_euclid(360.0) / 60.0;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = lightness - c / 2.0;
        let to_u8 = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Color(to_u8(r), to_u8(g), to_u8(b))
    }

    pub fn parse(s: &str) -> Result<Color> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        ensure!(
            hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit()),
            "invalid color: {s}, expected #RRGGBB"
        );
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16);
        Ok(Color(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::parse(&s).map_err(serde::de::Error::custom)
    }
}

pub fn rect(x: f64, y: f64, width: f64, height: f64, params: &[(&str, &str)]) -> Rectangle {
    let mut rect = Rectangle::new()
        .set("x", x)
        .set("y", y)
        .set("width", width)
        .set("height", height);
    for param in params {
        rect = rect.set(param.0, param.1)
    }
    rect
}

pub fn text(
    content: impl Into<String>,
    x: f64,
    y: f64,
    size: f64,
    params: &[(&str, &str)],
) -> Text {
    let mut text = Text::new(content.into())
        .set("x", x)
        .set("y", y)
        .set("font-size", size)
        .set("font-family", "monospace");
    for param in params {
        text = text.set(param.0, param.1)
    }
    text
}
