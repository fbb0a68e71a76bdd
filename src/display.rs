/// Rendering layer: all terminal I/O lives here.
///
/// Each function receives a mutable writer and a read-only `Snapshot` of
/// the game state. No game logic is performed; this module only scales
/// logical playfield coordinates onto terminal cells and emits commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use gallag::entities::{Enemy, Rgb, Snapshot};
use gallag::geometry::{Playfield, Position};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_PLAYER: Color = Color::White;
const C_SHOT: Color = Color::White;
const C_PAUSED: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;

fn color_of(rgb: Rgb) -> Color {
    let Rgb(r, g, b) = rgb;
    Color::Rgb { r, g, b }
}

// ── Coordinate mapping ────────────────────────────────────────────────────────

/// Maps logical playfield coordinates into the bordered play area of a
/// terminal of `cols` × `rows` cells. Row 0 is reserved for the title,
/// rows 1 and `rows-2` for the border, row `rows-1` for the controls hint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    playfield: Playfield,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16, playfield: Playfield) -> Self {
        Self { cols, rows, playfield }
    }

    fn inner_cols(&self) -> i64 {
        i64::from(self.cols.saturating_sub(3))
    }

    fn inner_rows(&self) -> i64 {
        i64::from(self.rows.saturating_sub(5))
    }

    /// Terminal cell for `pos`, or `None` when it falls outside the play area.
    pub fn to_cell(&self, pos: Position) -> Option<(u16, u16)> {
        if !self.playfield.is_in_bounds(pos) || self.inner_cols() == 0 || self.inner_rows() == 0 {
            return None;
        }
        let col = 1 + i64::from(pos.x) * self.inner_cols() / i64::from(self.playfield.width.max(1));
        let row = 2 + i64::from(pos.y) * self.inner_rows() / i64::from(self.playfield.height.max(1));
        Some((col as u16, row as u16))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, view: &Viewport, snap: &Snapshot<'_>) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, view)?;
    draw_title(out, view, snap)?;
    draw_particles(out, view, snap)?;

    for enemy in snap.enemies {
        draw_enemy(out, view, enemy)?;
    }
    for shot in &snap.player.shots {
        draw_shot(out, view, *shot)?;
    }

    draw_player(out, view, snap)?;
    draw_controls_hint(out, view)?;

    if snap.paused {
        draw_paused(out, view)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let w = view.cols as usize;
    let h = view.rows;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1: top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2: bottom bar
    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── Title (row 0) ─────────────────────────────────────────────────────────────

fn draw_title<W: Write>(out: &mut W, view: &Viewport, snap: &Snapshot<'_>) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(Color::Cyan))?;
    out.queue(Print("GALLAG"))?;

    let status = format!("Enemies:{:>3}", snap.enemies.len());
    let rx = view.cols.saturating_sub(status.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(Color::Yellow))?;
    out.queue(Print(status))?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_particles<W: Write>(
    out: &mut W,
    view: &Viewport,
    snap: &Snapshot<'_>,
) -> std::io::Result<()> {
    // Particles wider than a few logical pixels read better as a bullet dot.
    let glyph = if snap.tuning.particle_size > 3 { "•" } else { "·" };
    for particle in snap.visible_particles() {
        if let Some((col, row)) = view.to_cell(particle.position) {
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(style::SetForegroundColor(color_of(particle.color)))?;
            out.queue(Print(glyph))?;
        }
    }
    Ok(())
}

fn draw_player<W: Write>(out: &mut W, view: &Viewport, snap: &Snapshot<'_>) -> std::io::Result<()> {
    // Sprite (2 rows, 3 cols):
    //   ▲       ← row y      (tip)
    //  /█\      ← row y+1    (fuselage + wings)
    let Some((col, row)) = view.to_cell(snap.player.position) else {
        return Ok(());
    };
    out.queue(style::SetForegroundColor(C_PLAYER))?;

    out.queue(cursor::MoveTo(col, row))?;
    out.queue(Print("▲"))?;

    let wing_row = row + 1;
    if wing_row < view.rows.saturating_sub(2) {
        out.queue(cursor::MoveTo(col.saturating_sub(1).max(1), wing_row))?;
        out.queue(Print("/█\\"))?;
    }

    Ok(())
}

fn draw_enemy<W: Write>(out: &mut W, view: &Viewport, enemy: &Enemy) -> std::io::Result<()> {
    let Some((col, row)) = view.to_cell(enemy.position) else {
        return Ok(());
    };
    let sprite = match enemy.row {
        0 => "«▼»",
        1 | 2 => "(◎)",
        _ => "╚═╝",
    };
    out.queue(cursor::MoveTo(col.saturating_sub(1).max(1), row))?;
    out.queue(style::SetForegroundColor(color_of(enemy.color)))?;
    out.queue(Print(sprite))?;
    Ok(())
}

fn draw_shot<W: Write>(out: &mut W, view: &Viewport, shot: Position) -> std::io::Result<()> {
    if let Some((col, row)) = view.to_cell(shot) {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(C_SHOT))?;
        out.queue(Print("║"))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Shoot   P : Pause   Q : Quit"))?;
    Ok(())
}

// ── Pause overlay ─────────────────────────────────────────────────────────────

fn draw_paused<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let lines: &[(&str, Color)] = &[("PAUSED", C_PAUSED), ("P - Resume  Q - Quit", Color::White)];

    let cx = view.cols / 2;
    let start_row = (view.rows / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_inside_border() {
        let view = Viewport::new(83, 25, Playfield::new(800, 600));
        assert_eq!(view.to_cell(Position::new(0, 0)), Some((1, 2)));
        // 80 inner columns, 20 inner rows
        assert_eq!(view.to_cell(Position::new(800, 600)), Some((81, 22)));
    }

    #[test]
    fn out_of_bounds_is_not_drawn() {
        let view = Viewport::new(83, 25, Playfield::new(800, 600));
        assert_eq!(view.to_cell(Position::new(10, -1)), None);
        assert_eq!(view.to_cell(Position::new(801, 10)), None);
    }

    #[test]
    fn tiny_terminal_draws_nothing() {
        let view = Viewport::new(2, 4, Playfield::new(800, 600));
        assert_eq!(view.to_cell(Position::new(400, 300)), None);
    }
}
