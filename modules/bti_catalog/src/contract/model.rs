//! BTI ("taste personality") card model.
//!
//! A type code is four letters, one per axis, always in this order:
//! intensity (F/C), disposition (A/T), texture (H/S), value orientation (V/P).

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::contract::error::CatalogError;

macro_rules! axis {
    (
        $(#[$meta:meta])*
        $name:ident {
            $first:ident = ($first_letter:literal, $first_label:literal),
            $second:ident = ($second_letter:literal, $second_label:literal) $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $first,
            $second,
        }

        impl $name {
            /// Both poles, in catalog order.
            pub const ALL: [Self; 2] = [Self::$first, Self::$second];

            pub fn letter(self) -> char {
                match self {
                    Self::$first => $first_letter,
                    Self::$second => $second_letter,
                }
            }

            pub fn from_letter(c: char) -> Option<Self> {
                match c {
                    $first_letter => Some(Self::$first),
                    $second_letter => Some(Self::$second),
                    _ => None,
                }
            }

            /// Tag label shown on cards.
            pub fn label(self) -> &'static str {
                match self {
                    Self::$first => $first_label,
                    Self::$second => $second_label,
                }
            }
        }
    };
}

axis! {
    /// Flavor intensity.
    Intensity {
        Fiery = ('F', "자극적인"),
        Clean = ('C', "깔끔한"),
    }
}

axis! {
    /// Openness to unfamiliar food.
    Disposition {
        Adventurous = ('A', "모험적인"),
        Traditional = ('T', "보수적인"),
    }
}

axis! {
    /// Preferred texture.
    Texture {
        Hard = ('H', "딱딱한"),
        Soft = ('S', "말캉한"),
    }
}

axis! {
    /// Value for money versus premium experience.
    ValueOrientation {
        Value = ('V', "가성비"),
        Premium = ('P', "품격"),
    }
}

/// One of the 16 BTI combinations; the catalog's natural key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeCode {
    pub intensity: Intensity,
    pub disposition: Disposition,
    pub texture: Texture,
    pub value: ValueOrientation,
}

impl TypeCode {
    pub const fn new(
        intensity: Intensity,
        disposition: Disposition,
        texture: Texture,
        value: ValueOrientation,
    ) -> Self {
        Self {
            intensity,
            disposition,
            texture,
            value,
        }
    }

    /// All 16 codes in catalog order: FA, FT, CA, CT groups, each HV, HP, SV, SP.
    pub fn all() -> impl Iterator<Item = TypeCode> {
        Intensity::ALL.into_iter().flat_map(|i| {
            Disposition::ALL.into_iter().flat_map(move |d| {
                Texture::ALL.into_iter().flat_map(move |t| {
                    ValueOrientation::ALL
                        .into_iter()
                        .map(move |v| TypeCode::new(i, d, t, v))
                })
            })
        })
    }

    pub fn pattern_style(self) -> PatternStyle {
        PatternStyle::for_axes(self.intensity, self.disposition)
    }

    /// Axis labels in axis order.
    pub fn tags(self) -> [&'static str; 4] {
        [
            self.intensity.label(),
            self.disposition.label(),
            self.texture.label(),
            self.value.label(),
        ]
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.intensity.letter(),
            self.disposition.letter(),
            self.texture.letter(),
            self.value.letter()
        )
    }
}

impl FromStr for TypeCode {
    type Err = CatalogError;

    /// Case-sensitive: `"CTSP"` parses, `"ctsp"` does not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        let [i, d, t, v] = chars.as_slice() else {
            return Err(CatalogError::invalid_type_code(
                s,
                format!("expected 4 letters, got {}", chars.len()),
            ));
        };
        let bad = |pos: usize, c: char, allowed: &str| {
            CatalogError::invalid_type_code(s, format!("position {pos} is '{c}', expected one of {allowed}"))
        };
        Ok(Self {
            intensity: Intensity::from_letter(*i).ok_or_else(|| bad(1, *i, "F, C"))?,
            disposition: Disposition::from_letter(*d).ok_or_else(|| bad(2, *d, "A, T"))?,
            texture: Texture::from_letter(*t).ok_or_else(|| bad(3, *t, "H, S"))?,
            value: ValueOrientation::from_letter(*v).ok_or_else(|| bad(4, *v, "V, P"))?,
        })
    }
}

/// Decorative background category, chosen by the first two axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternStyle {
    /// FA
    Dynamic,
    /// FT
    Elegant,
    /// CA
    Minimal,
    /// CT
    Classic,
}

impl PatternStyle {
    pub const ALL: [Self; 4] = [Self::Dynamic, Self::Elegant, Self::Minimal, Self::Classic];

    pub fn for_axes(intensity: Intensity, disposition: Disposition) -> Self {
        match (intensity, disposition) {
            (Intensity::Fiery, Disposition::Adventurous) => Self::Dynamic,
            (Intensity::Fiery, Disposition::Traditional) => Self::Elegant,
            (Intensity::Clean, Disposition::Adventurous) => Self::Minimal,
            (Intensity::Clean, Disposition::Traditional) => Self::Classic,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dynamic => "dynamic",
            Self::Elegant => "elegant",
            Self::Minimal => "minimal",
            Self::Classic => "classic",
        }
    }
}

impl fmt::Display for PatternStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for PatternStyle {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogError::UnknownPatternStyle {
                value: s.to_string(),
            })
    }
}

/// Named system colors used by card gradients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemColor {
    Red,
    Orange,
    Yellow,
    Pink,
    Brown,
    Blue,
    Mint,
    Cyan,
    Teal,
    Green,
}

impl SystemColor {
    /// sRGB components of the light-mode palette.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Red => (255, 59, 48),
            Self::Orange => (255, 149, 0),
            Self::Yellow => (255, 204, 0),
            Self::Pink => (255, 45, 85),
            Self::Brown => (162, 132, 94),
            Self::Blue => (0, 122, 255),
            Self::Mint => (0, 199, 190),
            Self::Cyan => (50, 173, 230),
            Self::Teal => (48, 176, 199),
            Self::Green => (52, 199, 89),
        }
    }
}

/// A color at a given opacity (0.0..=1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub color: SystemColor,
    pub opacity: f32,
}

impl GradientStop {
    pub const fn new(color: SystemColor, opacity: f32) -> Self {
        Self { color, opacity }
    }

    /// `#RRGGBBAA`, alpha rounded from the opacity.
    pub fn to_rgba_hex(&self) -> String {
        let (r, g, b) = self.color.rgb();
        let a = (self.opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
    }
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    /// Stable identity for list rendering; no meaning beyond uniqueness.
    pub id: Uuid,
    pub type_code: TypeCode,
    pub title: String,
    pub description: String,
    pub tags: [String; 4],
    pub gradient: [GradientStop; 2],
    pub pattern_style: PatternStyle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        let code: TypeCode = "CTSP".parse().unwrap();
        assert_eq!(code.intensity, Intensity::Clean);
        assert_eq!(code.disposition, Disposition::Traditional);
        assert_eq!(code.texture, Texture::Soft);
        assert_eq!(code.value, ValueOrientation::Premium);
        assert_eq!(code.to_string(), "CTSP");
    }

    #[test]
    fn parse_rejects_malformed_codes() {
        for bad in ["", "CTS", "CTSPX", "ctsp", "XTSP", "CXSP", "CTXP", "CTSX", "한글코드"] {
            match bad.parse::<TypeCode>() {
                Err(CatalogError::InvalidTypeCode { code, .. }) => assert_eq!(code, bad),
                other => panic!("'{bad}' should be invalid, got {other:?}"),
            }
        }
    }

    #[test]
    fn all_yields_sixteen_distinct_codes_in_catalog_order() {
        let codes: Vec<String> = TypeCode::all().map(|c| c.to_string()).collect();
        assert_eq!(codes.len(), 16);
        assert_eq!(&codes[..4], ["FAHV", "FAHP", "FASV", "FASP"]);
        assert_eq!(codes[4], "FTHV");
        assert_eq!(codes[8], "CAHV");
        assert_eq!(codes[15], "CTSP");

        let unique: std::collections::HashSet<_> = codes.iter().collect();
        assert_eq!(unique.len(), 16);
    }

    #[test]
    fn pattern_style_follows_first_two_letters() {
        let expect = [
            ("FAHV", PatternStyle::Dynamic),
            ("FTSP", PatternStyle::Elegant),
            ("CASV", PatternStyle::Minimal),
            ("CTSP", PatternStyle::Classic),
        ];
        for (code, style) in expect {
            assert_eq!(code.parse::<TypeCode>().unwrap().pattern_style(), style);
        }
    }

    #[test]
    fn tags_follow_axis_order() {
        let code: TypeCode = "FAHV".parse().unwrap();
        assert_eq!(code.tags(), ["자극적인", "모험적인", "딱딱한", "가성비"]);
    }

    #[test]
    fn pattern_style_parsing() {
        assert_eq!("Classic".parse::<PatternStyle>().unwrap(), PatternStyle::Classic);
        assert_eq!(" minimal ".parse::<PatternStyle>().unwrap(), PatternStyle::Minimal);
        assert!("wavy".parse::<PatternStyle>().is_err());
    }

    #[test]
    fn gradient_stop_hex() {
        assert_eq!(GradientStop::new(SystemColor::Red, 0.6).to_rgba_hex(), "#FF3B3099");
        assert_eq!(GradientStop::new(SystemColor::Blue, 1.0).to_rgba_hex(), "#007AFFFF");
        assert_eq!(GradientStop::new(SystemColor::Mint, 0.0).to_rgba_hex(), "#00C7BE00");
    }
}
