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
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use std::fmt::{Display, Formatter, Result};

use crate::Color;

/// A single parameter of an SGR sequence. Its [Display] impl writes only the number,
/// eg: `31`, never the `CSI` prefix or the `m` suffix. Use [`write_sgr_sequence`] to
/// produce a complete escape sequence out of a list of these.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SgrParam {
    Bold,
    Foreground(Color),
    Background(Color),
}

pub mod sgr_code_impl {
    use super::{Display, Formatter, Result, SgrParam};

    pub const CSI: &str = "\x1b[";
    pub const SGR: &str = "m";
    pub const SEPARATOR: &str = ";";

    impl Display for SgrParam {
        #[rustfmt::skip]
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match *self {
                SgrParam::Bold              => write!(f, "1"),
                SgrParam::Foreground(color) => write!(f, "3{}", color.ordinal()),
                SgrParam::Background(color) => write!(f, "4{}", color.ordinal()),
            }
        }
    }
}
pub use sgr_code_impl::{CSI, SEPARATOR, SGR};

/// Writes `CSI`, then `params` joined by `;`, then `m`.
///
/// The separator only ever goes between two parameters, so there is no leading,
/// trailing, or doubled `;` no matter which parameters are present.
///
/// # Errors
///
/// Only if the underlying [Formatter] fails.
pub fn write_sgr_sequence(f: &mut Formatter<'_>, params: &[SgrParam]) -> Result {
    f.write_str(CSI)?;
    for (index, param) in params.iter().enumerate() {
        if index > 0 {
            f.write_str(SEPARATOR)?;
        }
        write!(f, "{param}")?;
    }
    f.write_str(SGR)
}
