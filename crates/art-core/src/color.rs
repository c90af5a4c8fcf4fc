//! Colors and the lenient hex-color grammar used by the color picker.
//!
//! Accepted: `#RGB` and `#RRGGBB` (the leading `#` is optional). Input never
//! fails to parse: a digit pair that does not start with a hex digit reads
//! as 0, and any other length yields black. Alpha is always opaque.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use winnow::combinator::{opt, preceded};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::take_while;

/// 8-bit RGBA color, the same layout as one pixel of the raster surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a picker value. Never fails; see the module docs for how
    /// malformed input degrades.
    pub fn from_hex(hex: &str) -> Self {
        if !is_well_formed_hex(hex) {
            log::warn!("malformed color {hex:?}, reading missing channels as 0");
        }
        let digits: Vec<char> = hex.strip_prefix('#').unwrap_or(hex).chars().collect();
        match digits.len() {
            3 => Self::rgb(
                channel(&[digits[0], digits[0]]),
                channel(&[digits[1], digits[1]]),
                channel(&[digits[2], digits[2]]),
            ),
            6 => Self::rgb(
                channel(&digits[0..2]),
                channel(&digits[2..4]),
                channel(&digits[4..6]),
            ),
            _ => Self::BLACK,
        }
    }

    /// Emit as lowercase `#rrggbb`, or `#rrggbbaa` when not opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Component-wise equality on all four channels.
    pub fn same_rgba(&self, px: [u8; 4]) -> bool {
        [self.r, self.g, self.b, self.a] == px
    }

    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn opaque(self) -> Self {
        Self { a: 255, ..self }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let body = s.strip_prefix('#').unwrap_or(&s);
        // `#rrggbbaa` is only ever produced by `to_hex`
        if body.len() == 8 && body.chars().all(|c| c.is_ascii_hexdigit()) {
            let byte = |i: usize| u8::from_str_radix(&body[i..i + 2], 16).unwrap_or(0);
            return Ok(Color::rgba(byte(0), byte(2), byte(4), byte(6)));
        }
        Ok(Color::from_hex(&s))
    }
}

/// `true` for exactly `#RGB` / `#RRGGBB` (with or without `#`).
pub fn is_well_formed_hex(input: &str) -> bool {
    let mut rest = input;
    match hex_body.parse_next(&mut rest) {
        Ok(digits) => rest.is_empty() && matches!(digits.len(), 3 | 6),
        Err(_) => false,
    }
}

fn hex_body<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    preceded(opt('#'), take_while(0.., |c: char| c.is_ascii_hexdigit())).parse_next(input)
}

/// Read the leading hex digits of a two-character channel. No leading hex
/// digit reads as 0.
fn channel(pair: &[char]) -> u8 {
    let text: String = pair.iter().collect();
    let mut input = text.as_str();
    let digits: Result<&str, ErrMode<ContextError>> =
        take_while(0..=2, |c: char| c.is_ascii_hexdigit()).parse_next(&mut input);
    digits
        .ok()
        .and_then(|d| u8::from_str_radix(d, 16).ok())
        .unwrap_or(0)
}
