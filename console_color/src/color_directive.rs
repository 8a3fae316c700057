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

use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};
use smallstr::SmallString;
use smallvec::SmallVec;

use crate::{Color, ColorDirectiveError, SgrParam, write_sgr_sequence};

/// The main struct in this crate. It has three fields:
/// - `foreground` - always present.
/// - `background` - optional. When it is [None] no background parameter is emitted.
/// - `bright` - whether the bold / intensity parameter (`1`) is emitted.
///
/// Once created it can't be changed. Functions like [Self::with_bright()] return a new
/// value instead.
///
/// Its [Display] impl renders the ANSI SGR escape sequence, eg: bright red on blue is
/// `"\x1b[1;31;44m"`.
///
/// # Example usage:
///
/// ```rust
/// use console_color::*;
///
/// // Explicit construction.
/// let plain_green = ColorDirective::new(Color::Green);
/// assert_eq!(plain_green.render(), "\x1b[32m");
///
/// // Parse a spec string. Any of `,` `;` `:` or space separates the fields.
/// let directive = ColorDirective::parse("RED;BLUE;true").unwrap();
/// assert_eq!(directive.to_string(), "\x1b[1;31;44m");
///
/// // Derive a new value.
/// let dim_red = directive.with_bright(false).without_background();
/// assert_eq!(dim_red.render(), "\x1b[31m");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorDirective {
    foreground: Color,
    background: Option<Color>,
    bright: bool,
}

pub mod sizing {
    use super::{SgrParam, SmallString, SmallVec};

    /// Bold, foreground, and background.
    pub const MAX_SGR_PARAMS: usize = 3;
    pub type InlineVecSgrParams = SmallVec<[SgrParam; MAX_SGR_PARAMS]>;

    /// The longest rendering is `"\x1b[1;37;47m"`, 11 bytes.
    pub const DEFAULT_STRING_STORAGE_SIZE: usize = 16;
    pub type InlineStringDirective = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;

    /// A well formed spec has at most 3 fields.
    pub const DEFAULT_FIELD_STORAGE_SIZE: usize = 4;
    pub type InlineVecFields<'a> = SmallVec<[&'a str; DEFAULT_FIELD_STORAGE_SIZE]>;
}

/// Characters that separate the fields of a spec string. Each occurrence of any of them
/// starts a new field.
pub const DELIMITERS: [char; 4] = [',', ';', ':', ' '];

mod constructors {
    use super::{Color, ColorDirective};

    impl ColorDirective {
        /// Foreground only. No background, not bright.
        #[must_use]
        pub const fn new(foreground: Color) -> Self { Self::from_parts(foreground, None, false) }

        /// Foreground and bright flag. No background is emitted: `new_bright(Red, true)`
        /// renders `"\x1b[1;31m"`, the same as parsing `"RED,true"`.
        #[must_use]
        pub const fn new_bright(foreground: Color, bright: bool) -> Self {
            Self::from_parts(foreground, None, bright)
        }

        /// Foreground on background.
        #[must_use]
        pub const fn new_on(foreground: Color, background: Color, bright: bool) -> Self {
            Self::from_parts(foreground, Some(background), bright)
        }

        #[must_use]
        pub const fn from_parts(
            foreground: Color,
            background: Option<Color>,
            bright: bool,
        ) -> Self {
            Self {
                foreground,
                background,
                bright,
            }
        }
    }
}

mod accessors_and_modifiers {
    use super::{Color, ColorDirective};

    impl ColorDirective {
        #[must_use]
        pub const fn foreground(&self) -> Color { self.foreground }

        #[must_use]
        pub const fn background(&self) -> Option<Color> { self.background }

        #[must_use]
        pub const fn is_bright(&self) -> bool { self.bright }

        #[must_use]
        pub const fn with_bright(self, bright: bool) -> Self { Self { bright, ..self } }

        #[must_use]
        pub const fn with_foreground(self, foreground: Color) -> Self {
            Self { foreground, ..self }
        }

        #[must_use]
        pub const fn with_background(self, background: Color) -> Self {
            Self {
                background: Some(background),
                ..self
            }
        }

        #[must_use]
        pub const fn without_background(self) -> Self {
            Self {
                background: None,
                ..self
            }
        }
    }
}

mod parse_impl {
    use std::str::FromStr;

    use super::{Color, ColorDirective, ColorDirectiveError, DELIMITERS,
                sizing::InlineVecFields};

    impl ColorDirective {
        /// Parse a spec string like `"RED"`, `"RED,true"` or `"RED;BLUE;true"`.
        ///
        /// The string is split on every `,` `;` `:` and space. Trailing empty fields are
        /// dropped, then the field count decides what the fields mean:
        ///
        /// | Fields | Meaning                                                       |
        /// | ------ | ------------------------------------------------------------- |
        /// | 2      | `foreground`, `bright`                                        |
        /// | 3      | `foreground`, `background`, `bright`                          |
        /// | other  | `foreground` only, the rest is ignored                        |
        ///
        /// `bright` is `true` only for the token `true` in any letter case. Any other
        /// token reads as `false`.
        ///
        /// # Errors
        ///
        /// [`ColorDirectiveError::InvalidColorName`] when the foreground token, or the
        /// background token in the 3 field form, is not one of the eight upper-case color
        /// names.
        pub fn parse(spec: &str) -> Result<Self, ColorDirectiveError> {
            let fields = split_fields(spec);

            let directive = match fields.as_slice() {
                [fg, bright] => Self::new_bright(parse_color(fg)?, parse_bright(bright)),
                [fg, bg, bright] => {
                    Self::new_on(parse_color(fg)?, parse_color(bg)?, parse_bright(bright))
                }
                [fg, ..] => {
                    let foreground = parse_color(fg)?;
                    if fields.len() > 1 {
                        // % is Display, ? is Debug.
                        tracing::debug!(
                            message = "Unexpected field count in color spec, using defaults",
                            spec = %spec,
                            field_count = fields.len(),
                        );
                    }
                    Self::new(foreground)
                }
                [] => {
                    return Err(ColorDirectiveError::InvalidColorName {
                        token: String::new(),
                    });
                }
            };

            tracing::trace!(message = "Parsed color spec", spec = %spec, directive = ?directive);
            Ok(directive)
        }
    }

    /// Split on every delimiter occurrence. Empty fields in the middle are kept, trailing
    /// ones are dropped, and the first field is always kept.
    pub(super) fn split_fields(spec: &str) -> InlineVecFields<'_> {
        let mut fields = spec.split(DELIMITERS).collect::<InlineVecFields<'_>>();
        while fields.len() > 1 && fields.last().is_some_and(|it| it.is_empty()) {
            fields.pop();
        }
        fields
    }

    fn parse_color(token: &str) -> Result<Color, ColorDirectiveError> {
        Color::try_from_name(token).ok_or_else(|| ColorDirectiveError::InvalidColorName {
            token: token.to_string(),
        })
    }

    fn parse_bright(token: &str) -> bool { token.eq_ignore_ascii_case("true") }

    impl FromStr for ColorDirective {
        type Err = ColorDirectiveError;

        fn from_str(spec: &str) -> Result<Self, Self::Err> { Self::parse(spec) }
    }

    impl TryFrom<String> for ColorDirective {
        type Error = ColorDirectiveError;

        fn try_from(spec: String) -> Result<Self, Self::Error> { Self::parse(&spec) }
    }

    impl TryFrom<&str> for ColorDirective {
        type Error = ColorDirectiveError;

        fn try_from(spec: &str) -> Result<Self, Self::Error> { Self::parse(spec) }
    }
}

mod render_impl {
    use std::fmt::Write as _;

    use super::{ColorDirective, SgrParam,
                sizing::{InlineStringDirective, InlineVecSgrParams}};

    impl ColorDirective {
        /// The SGR parameters that apply, in output order: bold, foreground, background.
        #[must_use]
        pub fn sgr_params(&self) -> InlineVecSgrParams {
            let mut params = InlineVecSgrParams::new();
            if self.bright {
                params.push(SgrParam::Bold);
            }
            params.push(SgrParam::Foreground(self.foreground));
            if let Some(background) = self.background {
                params.push(SgrParam::Background(background));
            }
            params
        }

        /// The ANSI escape sequence for this directive. Same as the [std::fmt::Display]
        /// output.
        #[must_use]
        pub fn render(&self) -> String { self.to_string() }

        /// This is different than [Self::render()], because it doesn't allocate a new
        /// [String], but instead renders into an inline buffer on the stack.
        #[must_use]
        pub fn to_small_str(&self) -> InlineStringDirective {
            let mut acc = InlineStringDirective::new();
            // Writing into a SmallString can't fail.
            write!(acc, "{self}").ok();
            acc
        }

        /// A spec string that [Self::parse()] maps back to `self`, eg: `"RED,BLUE,true"`.
        /// Only the rendered escape sequence is a stable output format, this is a
        /// convenience for saving directives in config files.
        #[must_use]
        pub fn to_spec_string(&self) -> String {
            let Self {
                foreground,
                background,
                bright,
            } = self;
            match background {
                Some(background) => format!("{foreground},{background},{bright}"),
                None => format!("{foreground},{bright}"),
            }
        }
    }

    impl From<ColorDirective> for String {
        fn from(directive: ColorDirective) -> Self { directive.to_spec_string() }
    }
}

mod display_trait_impl {
    use super::{ColorDirective, Display, Formatter, Result, write_sgr_sequence};

    impl Display for ColorDirective {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            write_sgr_sequence(f, &self.sgr_params())
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Deserialize;
    use strum::IntoEnumIterator;
    use test_case::test_case;

    use super::parse_impl::split_fields;
    use crate::{Color, ColorDirective, ColorDirectiveError};

    fn invalid(token: &str) -> ColorDirectiveError {
        ColorDirectiveError::InvalidColorName {
            token: token.to_string(),
        }
    }

    #[test]
    fn every_fg_alone() {
        for fg in Color::iter() {
            let directive = ColorDirective::new(fg);
            assert_eq!(directive.render(), format!("\x1b[3{}m", fg.ordinal()));
        }
    }

    #[test]
    fn every_fg_on_every_bg() {
        for fg in Color::iter() {
            for bg in Color::iter() {
                let directive = ColorDirective::new_on(fg, bg, false);
                assert_eq!(
                    directive.render(),
                    format!("\x1b[3{};4{}m", fg.ordinal(), bg.ordinal())
                );
            }
        }
    }

    #[test]
    fn bright_is_always_the_leading_param() {
        for fg in Color::iter() {
            let alone = ColorDirective::new_bright(fg, true);
            assert_eq!(alone.render(), format!("\x1b[1;3{}m", fg.ordinal()));

            let on_white = ColorDirective::new_on(fg, Color::White, true);
            assert_eq!(on_white.render(), format!("\x1b[1;3{};47m", fg.ordinal()));
        }
    }

    #[test]
    fn fg_only_constructors_have_no_background() {
        assert_eq!(ColorDirective::new(Color::Red).background(), None);
        assert_eq!(ColorDirective::new_bright(Color::Red, true).background(), None);
        assert_eq!(ColorDirective::new_bright(Color::Red, false).render(), "\x1b[31m");
    }

    #[test]
    fn parse_fg_and_bright() {
        let directive = ColorDirective::parse("RED,true").unwrap();
        assert_eq!(directive.foreground(), Color::Red);
        assert_eq!(directive.background(), None);
        assert!(directive.is_bright());
        assert_eq!(directive.render(), "\x1b[1;31m");
    }

    #[test]
    fn parse_fg_bg_and_bright() {
        let directive = ColorDirective::parse("RED;BLUE;true").unwrap();
        assert_eq!(directive.foreground(), Color::Red);
        assert_eq!(directive.background(), Some(Color::Blue));
        assert!(directive.is_bright());
        assert_eq!(directive.render(), "\x1b[1;31;44m");
    }

    #[test]
    fn parse_fg_only() {
        let directive = ColorDirective::parse("GREEN").unwrap();
        assert_eq!(directive, ColorDirective::new(Color::Green));
        assert_eq!(directive.render(), "\x1b[32m");
    }

    #[test_case("RED,true", "\x1b[1;31m")]
    #[test_case("RED;true", "\x1b[1;31m")]
    #[test_case("RED:true", "\x1b[1;31m")]
    #[test_case("RED true", "\x1b[1;31m")]
    #[test_case("RED,TRUE", "\x1b[1;31m")]
    #[test_case("RED,True", "\x1b[1;31m")]
    #[test_case("RED,false", "\x1b[31m")]
    #[test_case("RED,yes", "\x1b[31m")]
    #[test_case("RED,1", "\x1b[31m")]
    #[test_case("RED,", "\x1b[31m")]
    #[test_case("RED,true,", "\x1b[1;31m")]
    #[test_case("YELLOW:BLACK;false", "\x1b[33;40m")]
    #[test_case("CYAN MAGENTA,TRUE", "\x1b[1;36;45m")]
    #[test_case("WHITE,BLACK,nope", "\x1b[37;40m")]
    fn parse_then_render(spec: &str, expected: &str) {
        assert_eq!(ColorDirective::parse(spec).unwrap().render(), expected);
    }

    #[test_case("RED,BLUE,true,extra")]
    #[test_case("RED,PURPLE,true,extra")]
    #[test_case("RED,a,b,c,d")]
    fn other_field_counts_fall_back_to_defaults(spec: &str) {
        let directive = ColorDirective::parse(spec).unwrap();
        assert_eq!(directive, ColorDirective::new(Color::Red));
    }

    #[test_case("PURPLE", "PURPLE")]
    #[test_case("red,true", "red")]
    #[test_case("Red", "Red")]
    #[test_case("RED,purple,true", "purple")]
    #[test_case("PURPLE,PINK,true", "PURPLE")]
    #[test_case("", "")]
    #[test_case(",RED", "")]
    #[test_case(",,,", "")]
    #[test_case("RED  true", "")]
    #[test_case("RED\ttrue", "RED\ttrue")]
    fn invalid_color_names(spec: &str, token: &str) {
        assert_eq!(ColorDirective::parse(spec), Err(invalid(token)));
    }

    #[test]
    fn from_str_and_try_from_match_parse() {
        let expected = ColorDirective::new_on(Color::Red, Color::Blue, true);
        assert_eq!("RED;BLUE;true".parse::<ColorDirective>(), Ok(expected));
        assert_eq!(ColorDirective::try_from("RED;BLUE;true"), Ok(expected));
        assert_eq!(
            ColorDirective::try_from(String::from("RED;BLUE;true")),
            Ok(expected)
        );
    }

    #[test]
    fn split_keeps_interior_empties_and_drops_trailing_ones() {
        assert_eq!(split_fields("RED,,true").as_slice(), ["RED", "", "true"]);
        assert_eq!(split_fields("RED,true,,").as_slice(), ["RED", "true"]);
        assert_eq!(split_fields("").as_slice(), [""]);
        assert_eq!(split_fields(";;").as_slice(), [""]);
    }

    #[test]
    fn modifiers_return_new_values() {
        let original = ColorDirective::new(Color::Red);
        let modified = original
            .with_bright(true)
            .with_background(Color::Blue)
            .with_foreground(Color::Green);

        assert_eq!(original.render(), "\x1b[31m");
        assert_eq!(modified.render(), "\x1b[1;32;44m");
        assert_eq!(modified.without_background().render(), "\x1b[1;32m");
    }

    #[test]
    fn small_str_matches_render() {
        let directive = ColorDirective::new_on(Color::White, Color::White, true);
        assert_eq!(directive.to_small_str().as_str(), directive.render());
        assert!(!directive.to_small_str().spilled());
    }

    #[test_case(ColorDirective::new(Color::Green), "GREEN,false")]
    #[test_case(ColorDirective::new_bright(Color::Red, true), "RED,true")]
    #[test_case(ColorDirective::new_on(Color::Red, Color::Blue, true), "RED,BLUE,true")]
    fn spec_string_parses_back(directive: ColorDirective, expected: &str) {
        let spec = directive.to_spec_string();
        assert_eq!(spec, expected);
        assert_eq!(ColorDirective::parse(&spec), Ok(directive));
    }

    #[derive(Debug, Deserialize)]
    struct Theme {
        mention: ColorDirective,
        hashtag: Option<ColorDirective>,
    }

    #[test]
    fn deserialize_from_config() {
        let theme = serde_json::from_str::<Theme>(
            r#"{ "mention": "YELLOW;BLUE;true", "hashtag": "CYAN" }"#,
        )
        .unwrap();
        assert_eq!(theme.mention.render(), "\x1b[1;33;44m");
        assert_eq!(theme.hashtag.map(|it| it.render()), Some("\x1b[36m".to_string()));
    }

    #[test]
    fn deserialize_surfaces_invalid_color_name() {
        let error = serde_json::from_str::<Theme>(r#"{ "mention": "red,true" }"#)
            .unwrap_err()
            .to_string();
        assert!(error.contains("Invalid color name: 'red'"), "{error}");
    }

    #[test]
    fn serialize_as_spec_string() {
        let directive = ColorDirective::new_on(Color::Magenta, Color::Black, false);
        let json = serde_json::to_string(&directive).unwrap();
        assert_eq!(json, r#""MAGENTA,BLACK,false""#);
        assert_eq!(
            serde_json::from_str::<ColorDirective>(&json).unwrap(),
            directive
        );
    }

    #[test]
    fn parse_with_subscriber_installed() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            assert_eq!(
                ColorDirective::parse("BLUE,WHITE,true,x").unwrap(),
                ColorDirective::new(Color::Blue)
            );
            assert_eq!(
                ColorDirective::parse("BLUE,WHITE,true").unwrap().render(),
                "\x1b[1;34;47m"
            );
        });
    }
}
