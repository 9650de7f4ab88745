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

//! End-to-end scenarios through the public API.

use ansipen::prelude::*;
use ansipen::{AttributeSelection, LogArg, LogConfig, PenError, by_name, shortcuts, strip_sgr};

#[test]
fn test_bold_red_hi() {
    let pen = clx().bold().red();
    assert_eq!(pen.prefix(), "\x1b[1m\x1b[31m");
    assert_eq!(pen.suffix(), "\x1b[22m\x1b[39m");
    assert_eq!(pen.compose("hi"), "\x1b[1m\x1b[31mhi\x1b[22m\x1b[39m");
    assert_eq!(pen.write("hi"), pen.compose("hi"));
}

#[test]
fn test_bright_yellow_background_hi() {
    assert_eq!(clx().br_bg().yellow().compose("hi"), "\x1b[103mhi\x1b[49m");
    assert_eq!(bright_bg().yellow().write("hi"), "\x1b[103mhi\x1b[49m");
}

#[test]
fn test_red_background_then_blue_foreground() {
    let red = clx().bg().red();
    let blue_on_red = red.blue();
    assert_eq!(blue_on_red.selection().background(), Some(41));
    assert_eq!(blue_on_red.selection().foreground(), Some(34));

    let foreground_first = fg().blue().pick_background(Color::Red, Brightness::Regular);
    assert_eq!(foreground_first, blue_on_red);
}

#[test]
fn test_second_background_replaces_first() {
    let red = clx().bg().red().pen();
    let pen = red.pick_background(Color::Green, Brightness::Bright);
    assert_eq!(
        pen.selection(),
        AttributeSelection::new(None, None, Some(102))
    );
}

#[test]
fn test_unknown_names_match_empty_selection() {
    let empty = Pen::new(AttributeSelection::EMPTY);
    let callback = |pen: Pen| pen.write_with(|d| format!("{}text{}", d.prefix, d.suffix));

    for pen in [
        by_name::foreground(" YI0"),
        by_name::bright_foreground(""),
        by_name::background("   "),
        by_name::bright_background("rojo"),
        by_name::style("I Tali s "),
        by_name::resolve("bg sparkly red"),
        by_name::resolve("bold bg"),
    ] {
        assert_eq!(pen.write("text"), empty.write("text"));
        assert_eq!(callback(pen), callback(empty));
    }
}

#[test]
fn test_by_name_matches_chaining() {
    assert_eq!(by_name::foreground("red"), clx().red());
    assert_eq!(by_name::bright_foreground("RED"), clx().br().red());
    assert_eq!(by_name::background(" red"), clx().bg().red().pen());
    assert_eq!(by_name::bright_background("red"), clx().br_bg().red().pen());
    assert_eq!(by_name::style("Underline"), clx().underline().pen());
    assert_eq!(
        by_name::resolve("underline bg.red br.yellow"),
        clx().underline().bg().red().br().yellow()
    );
}

#[test]
fn test_strict_lookup_reports_errors() {
    let err = by_name::lookup(ansipen::Axis::Foreground, Brightness::Regular, "mauve").unwrap_err();
    match &err {
        PenError::UnknownColor(name) => assert_eq!(name, "mauve"),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(err.to_string(), "Unknown color name: \"mauve\"");
}

#[test]
fn test_shortcuts_match_chaining() {
    assert_eq!(shortcuts::green("ok"), clx().green().write("ok"));
    assert_eq!(
        shortcuts::green_bright("ok"),
        clx().br().green().write("ok")
    );
    assert_eq!(shortcuts::green_bg("ok"), clx().bg().green().write("ok"));
    assert_eq!(
        shortcuts::green_bright_bg("ok"),
        clx().br_bg().green().write("ok")
    );
    assert_eq!(shortcuts::hidden("ok"), clx().hidden().write("ok"));
}

#[test]
fn test_nested_compositions_keep_text() {
    let inner = clx().italic().magenta().write("inner");
    let outer = clx().bg().blue().write(format!("before {} after", inner));
    assert_eq!(strip_sgr(&outer), "before inner after");
    assert!(outer.starts_with("\x1b[44mbefore \x1b[3m\x1b[35minner"));
    assert!(outer.ends_with(" after\x1b[49m"));
}

#[test]
fn test_detached_writers_outlive_their_chain() {
    let background = clx().underline().bg();
    let writers: Vec<_> = Color::ALL
        .into_iter()
        .map(|color| background.pick(color).pen().into_writer())
        .collect();
    for (writer, color) in writers.iter().zip(Color::ALL) {
        let expected = format!("\x1b[4m\x1b[{}mx\x1b[24m\x1b[49m", 40 + color.to_u8());
        assert_eq!(writer(Payload::from("x")), expected);
    }
}

#[test]
fn test_log_shim_writes_styled_line() {
    let node = clx().bg().red().yellow();
    let mut out = Vec::new();
    node.log_to(
        &mut out,
        &LogConfig::default(),
        [
            LogArg::from("Name:"),
            LogArg::from("Alice"),
            LogArg::from(30),
            LogArg::raw(&None::<u8>),
        ],
    )
    .unwrap();

    let line = String::from_utf8(out).unwrap();
    assert_eq!(
        line,
        format!(
            "{} {} {} None\n",
            node.compose("Name:"),
            node.compose("Alice"),
            node.compose(30)
        )
    );
    assert_eq!(strip_sgr(&line), "Name: Alice 30 None\n");
}

#[test]
fn test_log_shim_plain_mode() {
    let mut out = Vec::new();
    let config = LogConfig::plain().with_separator(", ");
    clx().bold().log_to(&mut out, &config, ["a", "b"]).unwrap();
    assert_eq!(out, b"a, b\n");
}
