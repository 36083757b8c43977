//! Terminal styling for category prefixes.
//!
//! A style spec reads `fg[+attrs][:bg[+attrs]]`. Colors are either one of the
//! eight ANSI names or a 256-palette index. Foreground attributes: `b` bold,
//! `B` blink, `d` dim, `i` inverse, `s` strikethrough, `u` underline, `h` high
//! intensity. The background only knows `h`.

use anstyle::{Ansi256Color, AnsiColor, Color, Style};

/// Wraps `text` in the ANSI escapes described by `spec`.
///
/// An empty or malformed spec leaves the text untouched.
pub fn colorize(text: &str, spec: &str) -> String {
    match parse_style(spec) {
        Some(style) if style != Style::new() => {
            format!("{}{}{}", style.render(), text, style.render_reset())
        }
        _ => text.to_string(),
    }
}

/// Parses a style spec into an [`anstyle::Style`].
pub fn parse_style(spec: &str) -> Option<Style> {
    let (fg, bg) = match spec.split_once(':') {
        Some((fg, bg)) => (fg, Some(bg)),
        None => (spec, None),
    };

    let mut style = Style::new();

    if !fg.is_empty() {
        let (name, attrs) = split_attrs(fg);
        let bright = attrs.contains('h');
        if !name.is_empty() {
            style = style.fg_color(Some(parse_color(name, bright)?));
        }
        for attr in attrs.chars() {
            style = match attr {
                'b' => style.bold(),
                'B' => style.blink(),
                'd' => style.dimmed(),
                'i' => style.invert(),
                's' => style.strikethrough(),
                'u' => style.underline(),
                'h' => style,
                _ => return None,
            };
        }
    }

    if let Some(bg) = bg.filter(|bg| !bg.is_empty()) {
        let (name, attrs) = split_attrs(bg);
        if attrs.chars().any(|attr| attr != 'h') {
            return None;
        }
        style = style.bg_color(Some(parse_color(name, attrs.contains('h'))?));
    }

    Some(style)
}

fn split_attrs(part: &str) -> (&str, &str) {
    part.split_once('+').unwrap_or((part, ""))
}

fn parse_color(name: &str, bright: bool) -> Option<Color> {
    if let Ok(index) = name.parse::<u8>() {
        return Some(Color::Ansi256(Ansi256Color(index)));
    }

    let color = match (name, bright) {
        ("black", false) => AnsiColor::Black,
        ("red", false) => AnsiColor::Red,
        ("green", false) => AnsiColor::Green,
        ("yellow", false) => AnsiColor::Yellow,
        ("blue", false) => AnsiColor::Blue,
        ("magenta", false) => AnsiColor::Magenta,
        ("cyan", false) => AnsiColor::Cyan,
        ("white", false) => AnsiColor::White,
        ("black", true) => AnsiColor::BrightBlack,
        ("red", true) => AnsiColor::BrightRed,
        ("green", true) => AnsiColor::BrightGreen,
        ("yellow", true) => AnsiColor::BrightYellow,
        ("blue", true) => AnsiColor::BrightBlue,
        ("magenta", true) => AnsiColor::BrightMagenta,
        ("cyan", true) => AnsiColor::BrightCyan,
        ("white", true) => AnsiColor::BrightWhite,
        _ => return None,
    };
    Some(Color::Ansi(color))
}

#[cfg(all(test, not(feature = "loom")))]
mod tests {
    use super::*;

    #[test]
    fn named_colors() {
        let style = parse_style("black:red").unwrap();
        assert_eq!(style.get_fg_color(), Some(Color::Ansi(AnsiColor::Black)));
        assert_eq!(style.get_bg_color(), Some(Color::Ansi(AnsiColor::Red)));
    }

    #[test]
    fn high_intensity_background() {
        let style = parse_style("red:yellow+h").unwrap();
        assert_eq!(style.get_fg_color(), Some(Color::Ansi(AnsiColor::Red)));
        assert_eq!(style.get_bg_color(), Some(Color::Ansi(AnsiColor::BrightYellow)));
    }

    #[test]
    fn palette_colors_with_bold() {
        let style = parse_style("255+b:165").unwrap();
        assert_eq!(style.get_fg_color(), Some(Color::Ansi256(Ansi256Color(255))));
        assert_eq!(style.get_bg_color(), Some(Color::Ansi256(Ansi256Color(165))));
        assert!(style.get_effects().contains(anstyle::Effects::BOLD));
    }

    #[test]
    fn background_only() {
        let style = parse_style(":blue").unwrap();
        assert_eq!(style.get_fg_color(), None);
        assert_eq!(style.get_bg_color(), Some(Color::Ansi(AnsiColor::Blue)));
    }

    #[test]
    fn colorize_wraps_and_resets() {
        let out = colorize("[**warning**]", "red:yellow+h");
        assert!(out.starts_with('\x1b'));
        assert!(out.contains("[**warning**]"));
        assert!(out.ends_with("\x1b[0m"));

        let out = colorize("x", "255+b:165");
        assert!(out.contains("38;5;255"));
        assert!(out.contains("48;5;165"));
    }

    #[test]
    fn malformed_specs_leave_text_alone() {
        assert_eq!(colorize("plain", ""), "plain");
        assert_eq!(colorize("plain", "mauve"), "plain");
        assert_eq!(colorize("plain", "red+q"), "plain");
        assert_eq!(colorize("plain", "red:blue+b"), "plain");
        assert_eq!(colorize("plain", "256"), "plain");
    }
}
