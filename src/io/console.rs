//! Colored terminal output.
//!
//! Wraps formatted text in ANSI escape sequences: a color/style prefix, the
//! content, then a reset. The [`color_print!`]/[`color_println!`] macros
//! mirror `print!`/`println!` with a leading color argument;
//! [`styled_println!`] adds a text style for headers and banners.

use std::fmt;

use strum_macros::{Display, EnumIter};

/// ANSI color codes for terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[allow(unused)]
pub enum Color {
    Black = 30,
    Red = 31,
    Green = 32,
    Yellow = 33,
    Blue = 34,
    Magenta = 35,
    Cyan = 36,
    White = 37,
    BrightBlack = 90,
    BrightRed = 91,
    BrightGreen = 92,
    BrightYellow = 93,
    BrightBlue = 94,
    BrightMagenta = 95,
    BrightCyan = 96,
    BrightWhite = 97,
}

/// ANSI text styles, combinable with any [`Color`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[allow(unused)]
pub enum Style {
    Regular = 0,
    Bold = 1,
    Underlined = 4,
    Blinking = 5,
}

/// Prints the formatted content in the given color, then resets the terminal.
pub fn color_print(color: Color, args: fmt::Arguments) {
    print!("\x1B[{}m{}\x1B[0m", color as u8, args);
}

/// Prints the formatted content with a style and color prefix, then resets
/// the terminal.
pub fn styled_print(color: Color, style: Style, args: fmt::Arguments) {
    print!("\x1B[{};{}m{}\x1B[0m", style as u8, color as u8, args);
}

/// Prints the formatted content in the given color, resets the terminal, then
/// prints a newline.
pub fn color_println(color: Color, args: fmt::Arguments) {
    println!("\x1B[{}m{}\x1B[0m", color as u8, args);
}

/// Prints the formatted content with a style and color prefix, resets the
/// terminal, then prints a newline.
pub fn styled_println(color: Color, style: Style, args: fmt::Arguments) {
    println!("\x1B[{};{}m{}\x1B[0m", style as u8, color as u8, args);
}

/// Prints colored text without a newline.
///
/// # Usage
/// ```
/// use spinwait::color_print;
/// use spinwait::io::console::Color;
///
/// color_print!(Color::Green, "{} workers ready", 4);
/// ```
#[macro_export]
macro_rules! color_print {
    ($color:expr, $fmt:literal $(, $($arg:tt)+)?) => {
        $crate::io::console::color_print($color, format_args!($fmt $(, $($arg)+)?))
    };
}

/// Prints colored text followed by a newline.
#[macro_export]
macro_rules! color_println {
    ($color:expr, $fmt:literal $(, $($arg:tt)+)?) => {
        $crate::io::console::color_print($color, format_args!(concat!($fmt, "\n") $(, $($arg)+)?))
    };
}

/// Prints styled, colored text followed by a newline.
///
/// # Usage
/// ```
/// use spinwait::styled_println;
/// use spinwait::io::console::{Color, Style};
///
/// styled_println!(Color::Yellow, Style::Bold, "benchmark round {}", 1);
/// ```
#[macro_export]
macro_rules! styled_println {
    ($color:expr, $style:expr, $fmt:literal $(, $($arg:tt)+)?) => {
        $crate::io::console::styled_print(
            $color,
            $style,
            format_args!(concat!($fmt, "\n") $(, $($arg)+)?),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn color_codes_are_valid_ansi_foregrounds() {
        for color in Color::iter() {
            let code = color as u8;
            assert!((30..=37).contains(&code) || (90..=97).contains(&code), "{color}");
        }
    }

    #[test]
    fn style_codes_are_valid_ansi_modifiers() {
        for style in Style::iter() {
            assert!(matches!(style as u8, 0 | 1 | 4 | 5), "{style}");
        }
    }

    #[test]
    fn macros_accept_format_arguments() {
        color_print!(Color::Cyan, "{} + {} = {}", 1, 2, 1 + 2);
        color_println!(Color::Green, "done");
        styled_println!(Color::Yellow, Style::Bold, "header {}", 7);
    }
}
