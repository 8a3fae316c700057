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

//! Run with `cargo run --example main -- "RED;BLUE;true" "GREEN:true"`. Any spec strings
//! passed as arguments are parsed and printed after the built in samples.

use console_color::{Color, ColorDirective};
use strum::IntoEnumIterator;

const RESET: &str = "\x1b[0m";

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // Every foreground, plain and bright.
    {
        for fg in Color::iter() {
            let plain = ColorDirective::new(fg);
            let bright = plain.with_bright(true);
            println!("{plain}{fg:<8}{RESET} {bright}{fg:<8}{RESET} {:?}", bright.render());
        }
    }

    // Every foreground on every background.
    {
        for bg in Color::iter() {
            for fg in Color::iter() {
                let directive = ColorDirective::new_on(fg, bg, false);
                print!("{directive} {} {RESET}", fg.ordinal());
            }
            println!(" on {bg}");
        }
    }

    // Spec strings from the command line.
    {
        for spec in std::env::args().skip(1) {
            let directive = ColorDirective::parse(&spec)?;
            println!(
                "{directive}{spec}{RESET} -> {:?} ({})",
                directive.render(),
                directive.to_spec_string()
            );
        }
    }

    Ok(())
}
