//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, TileFace};
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Symbol, BOARD_COLUMNS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Card grid renderer for the memory game.
pub struct GameView {
    /// Card width in terminal columns.
    card_w: u16,
    /// Card height in terminal rows.
    card_h: u16,
    /// Gap between cards, both axes.
    gap: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 keeps cards roughly square on typical terminal glyphs.
        Self {
            card_w: 7,
            card_h: 3,
            gap: 1,
        }
    }
}

impl GameView {
    pub fn new(card_w: u16, card_h: u16, gap: u16) -> Self {
        Self { card_w, card_h, gap }
    }

    /// Render the snapshot into a framebuffer. `cursor` is the board
    /// position currently under the player's cursor.
    pub fn render(&self, snap: &GameSnapshot, cursor: usize, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let cols = BOARD_COLUMNS.min(snap.tiles.len().max(1)) as u16;
        let rows = (snap.tiles.len() as u16 + cols - 1) / cols.max(1);

        let grid_w = cols * self.card_w + cols.saturating_sub(1) * self.gap;
        let grid_h = rows * self.card_h + rows.saturating_sub(1) * self.gap;

        let start_x = viewport.width.saturating_sub(grid_w) / 2;
        // Leave two rows above the grid for the header.
        let start_y = (viewport.height.saturating_sub(grid_h) / 2).max(2);

        self.draw_header(&mut fb, snap, start_x, start_y.saturating_sub(2), grid_w);

        for (pos, tile) in snap.tiles.iter().enumerate() {
            let col = (pos as u16) % cols;
            let row = (pos as u16) / cols;
            let x = start_x + col * (self.card_w + self.gap);
            let y = start_y + row * (self.card_h + self.gap);
            self.draw_card(&mut fb, x, y, tile.symbol, tile.face, pos == cursor);
        }

        self.draw_footer(&mut fb, viewport, start_x, start_y + grid_h);

        if snap.won() {
            let banner = format!(" YOU WIN! TOTAL MOVES: {} ", snap.move_count);
            self.draw_overlay(&mut fb, start_x, start_y, grid_w, grid_h, &banner);
        }

        fb
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16, w: u16) {
        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        let value = CellStyle {
            fg: Rgb::new(120, 180, 250),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };

        fb.put_str(x, y, "MOVES", label);
        fb.put_str(x + 6, y, &format!("{}", snap.move_count), value);

        let pairs = format!("PAIRS {}/{}", snap.pairs_matched(), snap.pairs_total());
        let px = x + w.saturating_sub(pairs.chars().count() as u16);
        fb.put_str(px, y, &pairs, label);
    }

    fn draw_footer(&self, fb: &mut FrameBuffer, viewport: Viewport, x: u16, y: u16) {
        if y + 1 >= viewport.height {
            return;
        }
        let style = CellStyle {
            fg: Rgb::new(120, 120, 130),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };
        fb.put_str(x, y + 1, "arrows move  space flip  r new game  q quit", style);
    }

    fn draw_card(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        symbol: Symbol,
        face: TileFace,
        selected: bool,
    ) {
        let (fill_ch, style) = match face {
            TileFace::Hidden => (
                '░',
                CellStyle {
                    fg: Rgb::new(100, 110, 140),
                    bg: Rgb::new(30, 34, 48),
                    bold: false,
                },
            ),
            TileFace::Revealed => (
                ' ',
                CellStyle {
                    fg: Rgb::new(250, 250, 250),
                    bg: symbol_color(symbol),
                    bold: true,
                },
            ),
            TileFace::Matched => (
                ' ',
                CellStyle {
                    fg: Rgb::new(20, 20, 20),
                    bg: matched_color(symbol),
                    bold: false,
                },
            ),
        };

        fb.fill_rect(x, y, self.card_w, self.card_h, fill_ch, style);

        if face != TileFace::Hidden {
            let cx = x + self.card_w / 2;
            let cy = y + self.card_h / 2;
            fb.put_char(cx, cy, symbol.letter(), style);
        }

        if selected {
            let accent = CellStyle {
                fg: Rgb::new(255, 210, 80),
                bg: style.bg,
                bold: true,
            };
            fb.put_char(x, y, '┏', accent);
            fb.put_char(x + self.card_w - 1, y, '┓', accent);
            fb.put_char(x, y + self.card_h - 1, '┗', accent);
            fb.put_char(x + self.card_w - 1, y + self.card_h - 1, '┛', accent);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, text: &str) {
        let mid_y = y.saturating_add(h / 2);
        let text_w = text.chars().count() as u16;
        let tx = x.saturating_add(w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(0, 0, 0),
            bg: Rgb::new(110, 220, 200),
            bold: true,
        };
        fb.put_str(tx, mid_y, text, style);
    }
}

fn symbol_color(symbol: Symbol) -> Rgb {
    match symbol {
        Symbol::Apple => Rgb::new(220, 70, 70),
        Symbol::Rocket => Rgb::new(110, 130, 220),
        Symbol::Star => Rgb::new(235, 200, 70),
        Symbol::Moon => Rgb::new(150, 150, 190),
        Symbol::Heart => Rgb::new(230, 100, 160),
        Symbol::Clover => Rgb::new(90, 190, 100),
        Symbol::Bell => Rgb::new(230, 150, 60),
        Symbol::Gem => Rgb::new(90, 200, 220),
    }
}

fn matched_color(symbol: Symbol) -> Rgb {
    let c = symbol_color(symbol);
    // Washed-out version of the face color.
    Rgb::new(c.r / 2 + 60, c.g / 2 + 60, c.b / 2 + 60)
}
