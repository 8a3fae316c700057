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

//! # `console_color`
//!
//! Turn a short, human writable color spec like `RED;BLUE;true` into the ANSI SGR
//! escape sequence a terminal understands, eg: `"\x1b[1;31;44m"`.
//!
//! - [Color] is one of the eight original ANSI colors. Its position in the enum
//!   ([`Color::ordinal`]) is added to 30 (foreground) or 40 (background).
//! - [ColorDirective] holds a foreground, an optional background, and a bright flag.
//!   It is immutable.
//! - [`ColorDirective::parse`] reads a spec string. Fields are separated by any of `,`
//!   `;` `:` or space.
//!
//! | Spec string       | Rendered              |
//! | ----------------- | --------------------- |
//! | `GREEN`           | `\x1b[32m`            |
//! | `RED,true`        | `\x1b[1;31m`          |
//! | `RED;BLUE;true`   | `\x1b[1;31;44m`       |
//! | `YELLOW:BLACK:no` | `\x1b[33;40m`         |
//!
//! This crate only builds the escape code string. It does not detect terminal
//! capabilities, and it does not write to any stream or emit resets.
//!
//! ```rust
//! use console_color::{Color, ColorDirective, ColorDirectiveError};
//!
//! let directive: ColorDirective = "RED;BLUE;true".parse().unwrap();
//! assert_eq!(directive.render(), "\x1b[1;31;44m");
//! assert_eq!(ColorDirective::new(Color::Green).to_string(), "\x1b[32m");
//!
//! assert_eq!(
//!     ColorDirective::parse("red,true"),
//!     Err(ColorDirectiveError::InvalidColorName { token: "red".into() })
//! );
//! ```

// https://github.com/rust-lang/rust-clippy
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod color;
pub mod color_directive;
pub mod directive_error;
pub mod sgr_code;

// Re-export.
pub use color::*;
pub use color_directive::*;
pub use directive_error::*;
pub use sgr_code::*;
