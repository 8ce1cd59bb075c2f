//! Parsing colors from names and hex strings

use super::{named, Color, Rgba, Rgba8};
use crate::error::{Result, ShadesError};
use std::fmt;
use std::str::FromStr;

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Parses `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`; the `#` is optional.
pub fn parse_hex(input: &str) -> Result<Rgba> {
    let invalid = || ShadesError::InvalidColor(input.to_string());
    let hex = input.strip_prefix('#').unwrap_or(input);

    let digits = hex
        .bytes()
        .map(nibble)
        .collect::<Option<Vec<u8>>>()
        .ok_or_else(invalid)?;

    let channels: Vec<u8> = match digits.len() {
        3 | 4 => digits.iter().map(|d| d * 17).collect(),
        6 | 8 => digits.chunks(2).map(|pair| (pair[0] << 4) | pair[1]).collect(),
        _ => return Err(invalid()),
    };

    let alpha = channels.get(3).copied().unwrap_or(u8::MAX);
    Ok(Rgba8::new(channels[0], channels[1], channels[2], alpha).to_rgba())
}

impl FromStr for Rgba {
    type Err = ShadesError;

    /// Accepts a name from the named table or a hex string.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ShadesError::InvalidColor(s.to_string()));
        }
        if let Some(color) = named::lookup(trimmed) {
            return Ok(color);
        }
        if trimmed.starts_with('#') || trimmed.bytes().all(|b| b.is_ascii_hexdigit()) {
            return parse_hex(trimmed);
        }
        Err(ShadesError::UnknownColorName(trimmed.to_string()))
    }
}

impl Rgba {
    /// Formats as `#RRGGBBAA`, rounding each channel to 8 bits.
    pub fn to_hex(&self) -> String {
        let Rgba8 { r, g, b, a } = Rgba8::from_rgba(*self);
        format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_hex() {
        assert_eq!(parse_hex("#FF9770").unwrap(), Rgba::APRICOT);
        assert_eq!(parse_hex("ff977080").unwrap(), Rgba::rgba8(255, 151, 112, 128));
    }

    #[test]
    fn test_parse_short_hex() {
        assert_eq!(parse_hex("#f00").unwrap(), Rgba::RED);
        assert_eq!(parse_hex("#0000").unwrap(), Rgba::CLEAR);
    }

    #[test]
    fn test_parse_hex_rejects_bad_input() {
        for input in ["#", "#12", "#12345", "#1234567", "#GGGGGG", "#ff 000"] {
            assert!(matches!(parse_hex(input), Err(ShadesError::InvalidColor(_))));
        }
    }

    #[test]
    fn test_from_str_names() {
        assert_eq!("apricot".parse::<Rgba>().unwrap(), Rgba::APRICOT);
        assert_eq!("  Light_Peach ".parse::<Rgba>().unwrap(), Rgba::LIGHT_PEACH);
    }

    #[test]
    fn test_from_str_hex() {
        assert_eq!("#64AFFF".parse::<Rgba>().unwrap(), Rgba::SKY_BLUE);
        // "beige" is a name, but "bee" is hex
        assert_eq!("bee".parse::<Rgba>().unwrap(), Rgba::rgb8(0xbb, 0xee, 0xee));
    }

    #[test]
    fn test_from_str_errors() {
        assert_eq!(
            "mauve".parse::<Rgba>(),
            Err(ShadesError::UnknownColorName("mauve".to_string()))
        );
        assert_eq!(
            "".parse::<Rgba>(),
            Err(ShadesError::InvalidColor(String::new()))
        );
        assert!(matches!(
            "#abcde".parse::<Rgba>(),
            Err(ShadesError::InvalidColor(_))
        ));
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Rgba::APRICOT.to_hex(), "#FF9770FF");
        assert_eq!(Rgba::CLEAR.to_string(), "#00000000");
    }

    #[test]
    fn test_hex_round_trip_for_8bit_colors() {
        let color = Rgba::rgba8(118, 229, 252, 7);
        assert_eq!(color.to_hex().parse::<Rgba>().unwrap(), color);
    }
}
