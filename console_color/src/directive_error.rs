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

/// Errors returned when building a [`crate::ColorDirective`] from text.
///
/// | Variant              | Cause                                                  |
/// | -------------------- | ------------------------------------------------------ |
/// | [`InvalidColorName`] | A color token is not one of the eight upper-case names |
///
/// A malformed `bright` token is not an error (it reads as `false`), and neither is an
/// unexpected number of fields.
///
/// [`InvalidColorName`]: Self::InvalidColorName
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum ColorDirectiveError {
    /// The token did not match any color name. Matching is case-sensitive.
    #[error("🎨 Invalid color name: '{token}'")]
    #[diagnostic(
        code(console_color::invalid_color_name),
        help(
            "Use one of BLACK, RED, GREEN, YELLOW, BLUE, MAGENTA, CYAN, WHITE \
             (upper-case)."
        )
    )]
    InvalidColorName {
        /// The offending token, exactly as it appeared in the input.
        token: String,
    },
}
