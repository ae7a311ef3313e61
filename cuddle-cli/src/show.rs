//! `cuddle show`: print the painted document with ANSI colours.

use crate::paint::PaintedLine;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use cuddle::render::Rgb;
use std::io::{self, Write};

fn colour(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Write every line, resetting the colour after each coloured run.
pub fn write_painted<W: Write>(out: &mut W, lines: &[PaintedLine]) -> io::Result<()> {
    for line in lines {
        for (text, fg) in line.runs() {
            match fg {
                Some(rgb) => queue!(out, SetForegroundColor(colour(rgb)), Print(text), ResetColor)?,
                None => queue!(out, Print(text))?,
            }
        }
        queue!(out, Print("\n"))?;
    }
    out.flush()
}
