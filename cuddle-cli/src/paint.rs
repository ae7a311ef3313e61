//! Lays annotations onto terminal cells.
//!
//! Both terminal hosts paint from the same cell grid: every character of the
//! document becomes one or more cells (tabs expand to `tab_size` cells, the
//! same width indentation measurement gives them), arms recolour the cells of
//! the characters they cover, and connectors replace the blank cell at the
//! block's column with a glyph.

use cuddle::indent::split_lines;
use cuddle::render::{Annotation, AnnotationKind, Palette, Rgb};
use cuddle::settings::usable_tab_size;
use cuddle::Analysis;

pub const BAR_GLYPH: char = '│';
pub const BAR_HOOK_GLYPH: char = '└';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Option<Rgb>,
}

impl Cell {
    fn plain(ch: char) -> Self {
        Cell { ch, fg: None }
    }
}

/// One document line as cells, plus the cell where each character starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaintedLine {
    pub cells: Vec<Cell>,
    char_starts: Vec<usize>,
}

impl PaintedLine {
    fn new(line: &str, tab_size: usize) -> Self {
        let mut painted = PaintedLine::default();
        for ch in line.chars() {
            painted.char_starts.push(painted.cells.len());
            if ch == '\t' {
                painted
                    .cells
                    .extend(std::iter::repeat(Cell::plain(' ')).take(tab_size));
            } else {
                painted.cells.push(Cell::plain(ch));
            }
        }
        painted.char_starts.push(painted.cells.len());
        painted
    }

    fn cell_of(&self, column: usize) -> usize {
        self.char_starts
            .get(column)
            .copied()
            .unwrap_or(self.cells.len())
    }

    fn colour_columns(&mut self, start: usize, end: usize, colour: Rgb) {
        let (from, to) = (self.cell_of(start), self.cell_of(end));
        for cell in &mut self.cells[from..to] {
            cell.fg = Some(colour);
        }
    }

    fn draw_glyph(&mut self, cell: usize, glyph: char, colour: Rgb) {
        if self.cells.len() <= cell {
            self.cells.resize(cell + 1, Cell::plain(' '));
        }
        if self.cells[cell].ch == ' ' {
            self.cells[cell] = Cell {
                ch: glyph,
                fg: Some(colour),
            };
        }
    }

    /// Consecutive cells sharing a colour, merged into strings.
    pub fn runs(&self) -> Vec<(String, Option<Rgb>)> {
        let mut runs: Vec<(String, Option<Rgb>)> = Vec::new();
        for cell in &self.cells {
            match runs.last_mut() {
                Some((text, fg)) if *fg == cell.fg => text.push(cell.ch),
                _ => runs.push((cell.ch.to_string(), cell.fg)),
            }
        }
        runs
    }

    #[cfg(test)]
    pub fn text(&self) -> String {
        self.cells.iter().map(|cell| cell.ch).collect()
    }
}

/// Paint `text` with the annotations of its analysis.
pub fn paint(text: &str, analysis: &Analysis, palette: &Palette, tab_size: usize) -> Vec<PaintedLine> {
    let tab_size = usable_tab_size(tab_size);
    let mut lines: Vec<PaintedLine> = split_lines(text)
        .into_iter()
        .map(|line| PaintedLine::new(line, tab_size))
        .collect();

    for group in analysis.groups().iter() {
        let style = palette.style(group.level);
        for annotation in group.of_kind(AnnotationKind::Arm) {
            if let Some(line) = lines.get_mut(annotation.line()) {
                let range = annotation.range;
                line.colour_columns(range.start.column, range.end.column, style.arm);
            }
        }
        for (kind, glyph) in [
            (AnnotationKind::Bar, BAR_GLYPH),
            (AnnotationKind::BarHook, BAR_HOOK_GLYPH),
        ] {
            for annotation in group.of_kind(kind) {
                draw_connector(&mut lines, annotation, glyph, style.connector);
            }
        }
    }
    lines
}

fn draw_connector(lines: &mut [PaintedLine], annotation: &Annotation, glyph: char, colour: Rgb) {
    if let (Some(line), Some(column)) = (lines.get_mut(annotation.line()), annotation.connector_column) {
        line.draw_glyph(column, glyph, colour);
    }
}
