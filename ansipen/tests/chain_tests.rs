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

//! Walks every branch of the chaining API and checks the selection it lands on.

use ansipen::prelude::*;
use ansipen::{AttributeSelection, BackgroundLeaf};

fn expected(
    style: Option<Style>,
    fg: Option<(Color, Brightness)>,
    bg: Option<(Color, Brightness)>,
) -> AttributeSelection {
    let mut selection = AttributeSelection::EMPTY;
    if let Some(style) = style {
        selection = selection.pick_style(style);
    }
    if let Some((color, brightness)) = fg {
        selection = selection.pick_foreground(color, brightness);
    }
    if let Some((color, brightness)) = bg {
        selection = selection.pick_background(color, brightness);
    }
    selection
}

const REGULAR: Brightness = Brightness::Regular;
const BRIGHT: Brightness = Brightness::Bright;

#[test]
fn test_root_foregrounds() {
    let root = clx();
    for color in Color::ALL {
        assert_eq!(
            root.pick(color).selection(),
            expected(None, Some((color, REGULAR)), None)
        );
        assert_eq!(
            root.br().pick(color).selection(),
            expected(None, Some((color, BRIGHT)), None)
        );
    }
}

#[test]
fn test_root_backgrounds_and_nested_foregrounds() {
    let root = clx();
    for bg in Color::ALL {
        let regular: BackgroundLeaf = root.bg().pick(bg);
        let bright = root.br_bg().pick(bg);
        assert_eq!(
            regular.selection(),
            expected(None, None, Some((bg, REGULAR)))
        );
        assert_eq!(bright.selection(), expected(None, None, Some((bg, BRIGHT))));
        assert_eq!(root.br().bg().pick(bg), bright);

        for fg in Color::ALL {
            assert_eq!(
                regular.pick(fg).selection(),
                expected(None, Some((fg, REGULAR)), Some((bg, REGULAR)))
            );
            assert_eq!(
                regular.br().pick(fg).selection(),
                expected(None, Some((fg, BRIGHT)), Some((bg, REGULAR)))
            );
            assert_eq!(
                bright.pick(fg).selection(),
                expected(None, Some((fg, REGULAR)), Some((bg, BRIGHT)))
            );
            assert_eq!(
                bright.br().pick(fg).selection(),
                expected(None, Some((fg, BRIGHT)), Some((bg, BRIGHT)))
            );
        }
    }
}

#[test]
fn test_every_style_chain() {
    let root = clx();
    for style in Style::ALL {
        let leaf = root.pick_style(style);
        let slot = Some(style);
        assert_eq!(leaf.selection(), expected(slot, None, None));

        for c1 in Color::ALL {
            assert_eq!(
                leaf.pick(c1).selection(),
                expected(slot, Some((c1, REGULAR)), None)
            );
            assert_eq!(
                leaf.br().pick(c1).selection(),
                expected(slot, Some((c1, BRIGHT)), None)
            );

            let on_bg = leaf.bg().pick(c1);
            let on_bright_bg = leaf.br_bg().pick(c1);
            assert_eq!(on_bg.selection(), expected(slot, None, Some((c1, REGULAR))));
            assert_eq!(
                on_bright_bg.selection(),
                expected(slot, None, Some((c1, BRIGHT)))
            );
            assert_eq!(leaf.br().bg().pick(c1), on_bright_bg);

            for c2 in Color::ALL {
                assert_eq!(
                    on_bg.pick(c2).selection(),
                    expected(slot, Some((c2, REGULAR)), Some((c1, REGULAR)))
                );
                assert_eq!(
                    on_bg.br().pick(c2).selection(),
                    expected(slot, Some((c2, BRIGHT)), Some((c1, REGULAR)))
                );
                assert_eq!(
                    on_bright_bg.pick(c2).selection(),
                    expected(slot, Some((c2, REGULAR)), Some((c1, BRIGHT)))
                );
                assert_eq!(
                    on_bright_bg.br().pick(c2).selection(),
                    expected(slot, Some((c2, BRIGHT)), Some((c1, BRIGHT)))
                );
            }
        }
    }
}

#[test]
fn test_single_axis_roots() {
    for color in Color::ALL {
        assert_eq!(fg().pick(color), clx().pick(color));
        assert_eq!(bright_fg().pick(color), clx().br().pick(color));
        assert_eq!(bg().pick(color), clx().bg().pick(color));
        assert_eq!(bright_bg().pick(color), clx().br_bg().pick(color));
    }
    for style in Style::ALL {
        assert_eq!(st().pick_style(style), clx().pick_style(style));
    }
}

#[test]
fn test_named_accessors_match_pick() {
    let root = clx();
    assert_eq!(root.black(), root.pick(Color::Black));
    assert_eq!(root.magenta(), root.pick(Color::Magenta));
    assert_eq!(root.bg().white(), root.bg().pick(Color::White));
    assert_eq!(root.strikethrough(), root.pick_style(Style::Strikethrough));
    assert_eq!(root.flash_blink(), root.pick_style(Style::FlashBlink));
    assert_eq!(
        root.pick_style_named("flashBlink"),
        Some(root.flash_blink())
    );
    assert_eq!(root.pick_named("  blue "), Some(root.blue()));
    assert_eq!(root.pick_named("navy"), None);
}
