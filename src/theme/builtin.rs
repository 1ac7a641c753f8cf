use crate::options::TooltipOptions;

use super::{StyleBundle, Theme, style_map};

pub const DEFAULT_THEME: &str = "kodama";

fn kodama() -> Theme {
    Theme::new(
        DEFAULT_THEME,
        StyleBundle {
            frame: style_map([
                ("background", "rgb(20,20,20)"),
                ("border-color", "rgb(120,110,70)"),
            ]),
            title: style_map([
                ("color", "rgb(250,250,250)"),
                ("font-weight", "bold"),
                ("text-align", "center"),
            ]),
            item_title: style_map([("color", "rgb(220,200,120)"), ("text-align", "right")]),
            item_value: style_map([("color", "rgb(234,224,184)")]),
        },
    )
}

fn white_tiger() -> Theme {
    Theme::new(
        "white_tiger",
        StyleBundle {
            frame: style_map([
                ("background", "rgb(250,250,250)"),
                ("border-color", "rgb(60,60,60)"),
            ]),
            title: style_map([
                ("color", "rgb(20,20,20)"),
                ("font-weight", "bold"),
                ("text-align", "center"),
            ]),
            item_title: style_map([("color", "rgb(90,90,90)"), ("text-align", "right")]),
            item_value: style_map([("color", "rgb(20,20,20)")]),
        },
    )
    .with_options(TooltipOptions {
        fade_out_duration: Some(300),
        ..TooltipOptions::default()
    })
}

pub fn builtin_themes() -> Vec<Theme> {
    vec![kodama(), white_tiger()]
}
