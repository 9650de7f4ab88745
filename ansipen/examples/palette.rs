//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! ANSI Palette Demonstration
//!
//! Prints every style, foreground, and background combination reachable from
//! the root, followed by a few by-name and logging examples.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --example palette -- "bold bg.blue br.yellow"
//! ```

use ansipen::prelude::*;
use ansipen::{LogArg, LogConfig, by_name};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let root = clx();

    // Styles
    println!("{}", root.bold().write("Styles"));
    for style in Style::ALL {
        print!("{} ", root.pick_style(style).write(style.name()));
    }
    println!("\n");

    // Foregrounds, regular then bright
    println!("{}", root.bold().write("Foreground"));
    for color in Color::ALL {
        print!("{} ", root.pick(color).write(color.name()));
    }
    println!();
    for color in Color::ALL {
        print!("{} ", root.br().pick(color).write(color.name()));
    }
    println!("\n");

    // Background grid: rows are backgrounds, columns are foregrounds
    println!("{}", root.bold().write("Background x Foreground"));
    for background in Color::ALL {
        let regular = root.bg().pick(background);
        let bright = root.br_bg().pick(background);
        for color in Color::ALL {
            print!("{}", regular.pick(color).write(" ab "));
        }
        print!("  ");
        for color in Color::ALL {
            print!("{}", bright.br().pick(color).write(" ab "));
        }
        println!();
    }
    println!();

    // Callback form: the callback places prefix and suffix itself
    let label = root.bold().write("callback");
    let reverse = root.reverse();
    let banner = reverse.write_with(|d| format!("{}[{}]{} rendered", d.prefix, label, d.suffix));
    println!("{}\n", banner);

    // Chains given on the command line
    for chain in std::env::args().skip(1) {
        let pen = by_name::resolve(&chain);
        println!("{:<32} {}", chain, pen.write("sample text"));
    }

    // Logging pass-through
    root.bg().red().yellow().log([
        LogArg::from("Name:"),
        LogArg::from("Alice"),
        LogArg::from("Age:"),
        LogArg::from(30),
        LogArg::raw(&["not", "styled"]),
    ])?;
    let mut stdout = std::io::stdout();
    let plain = LogConfig::plain();
    root.dim().log_to(&mut stdout, &plain, ["plain", "mode"])?;

    Ok(())
}
