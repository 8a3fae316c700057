/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#3-bit_and_4-bit>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR_(Select_Graphic_Rendition)_parameters>

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

/// The eight colors of the original ANSI palette.
///
/// The declaration order is part of the output: [`Color::ordinal`] is added to 30 for
/// a foreground and to 40 for a background. Do not reorder these variants.
///
/// The textual name of each variant is its upper-case name, eg: `"RED"`. Parsing is
/// case-sensitive, so `"red"` is not a color.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    AsRefStr,
    EnumString,
    EnumIter,
    EnumCount,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

mod color_impl {
    use super::Color;

    impl Color {
        /// Zero based position of `self` in the fixed color order.
        #[rustfmt::skip]
        #[must_use]
        pub const fn ordinal(self) -> u8 {
            match self {
                Color::Black   => 0,
                Color::Red     => 1,
                Color::Green   => 2,
                Color::Yellow  => 3,
                Color::Blue    => 4,
                Color::Magenta => 5,
                Color::Cyan    => 6,
                Color::White   => 7,
            }
        }

        /// Inverse of [`Color::ordinal`]. Returns [None] for anything past 7.
        #[rustfmt::skip]
        #[must_use]
        pub const fn from_ordinal(ordinal: u8) -> Option<Color> {
            match ordinal {
                0 => Some(Color::Black),
                1 => Some(Color::Red),
                2 => Some(Color::Green),
                3 => Some(Color::Yellow),
                4 => Some(Color::Blue),
                5 => Some(Color::Magenta),
                6 => Some(Color::Cyan),
                7 => Some(Color::White),
                _ => None,
            }
        }

        /// Case-sensitive lookup of a color token, eg: `"MAGENTA"`.
        #[must_use]
        pub fn try_from_name(name: &str) -> Option<Color> { name.parse::<Color>().ok() }
    }
}
