//! Rendering layer: all terminal output lives here.
//!
//! Each function receives a mutable writer and a `FrameSnapshot`. No game
//! logic is performed; this module only scales the virtual playfield onto
//! terminal cells and translates sprites into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use glam::Vec2;
use tile_shooter::config::{VIRTUAL_HEIGHT, VIRTUAL_WIDTH};
use tile_shooter::entities::{EnemyKind, Facing, GameStatus};
use tile_shooter::geometry::Rect;
use tile_shooter::snapshot::{FrameSnapshot, Sprite, SpriteKind};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_WALL: Color = Color::DarkGrey;
const C_WALL_CRACKED: Color = Color::DarkYellow;
const C_HUD_LEVEL: Color = Color::Yellow;
const C_HEALTH_FULL: Color = Color::Green;
const C_HEALTH_EMPTY: Color = Color::Red;
const C_PLAYER: Color = Color::White;
const C_ENEMY_BASIC: Color = Color::Red;
const C_ENEMY_SHOOTING: Color = Color::Magenta;
const C_ENEMY_BOUNCING: Color = Color::Cyan;
const C_BULLET_PLAYER: Color = Color::White;
const C_BULLET_SHOOTING: Color = Color::Yellow;
const C_BULLET_BOUNCING: Color = Color::Magenta;
const C_HINT: Color = Color::DarkGrey;

const HEALTH_BAR_WIDTH: usize = 20;

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Maps the virtual playfield onto the terminal, between the HUD row at the
/// top and the hint row at the bottom.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    cols: u16,
    rows: u16,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16) -> Self {
        Viewport { cols: cols.max(1), rows: rows.saturating_sub(2).max(1) }
    }

    fn cell(&self, x: f32, y: f32) -> (u16, u16) {
        let col = (x / VIRTUAL_WIDTH * f32::from(self.cols)).floor().max(0.0) as u16;
        let row = (y / VIRTUAL_HEIGHT * f32::from(self.rows)).floor().max(0.0) as u16;
        (col.min(self.cols - 1), row.min(self.rows - 1) + 1)
    }

    /// Terminal cell under the mouse back to simulation coordinates, taken
    /// at the cell's centre.
    pub fn to_world(&self, column: u16, row: u16) -> Vec2 {
        let field_row = row.saturating_sub(1).min(self.rows - 1);
        Vec2::new(
            (f32::from(column) + 0.5) / f32::from(self.cols) * VIRTUAL_WIDTH,
            (f32::from(field_row) + 0.5) / f32::from(self.rows) * VIRTUAL_HEIGHT,
        )
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, frame: &FrameSnapshot, view: Viewport) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    match frame.status {
        GameStatus::Playing => {
            for sprite in frame.sprites.iter().filter(|s| s.alive) {
                draw_sprite(out, sprite, view)?;
            }
            draw_hud(out, frame, view)?;
            draw_controls_hint(out, view)?;
        }
        GameStatus::Start => draw_overlay(
            out,
            view,
            &[("╔══════════════════════╗", Color::Cyan), ("║    TILE  SHOOTER     ║", Color::Cyan), ("╚══════════════════════╝", Color::Cyan)],
            "ENTER / SPACE - Start   Q - Quit",
        )?,
        GameStatus::GameOver => draw_overlay(
            out,
            view,
            &[("╔════════════════════╗", Color::Red), ("║    GAME  OVER      ║", Color::Red), ("╚════════════════════╝", Color::Red)],
            "ENTER / SPACE - Play Again   Q - Quit",
        )?,
        GameStatus::Win => draw_overlay(
            out,
            view,
            &[("╔════════════════════╗", Color::Yellow), ("║     YOU  WIN!      ║", Color::Yellow), ("╚════════════════════╝", Color::Yellow)],
            "ENTER / SPACE - Play Again   Q - Quit",
        )?,
    }

    out.queue(style::ResetColor)?;
    out.flush()
}

// ── HUD (top row) ─────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, frame: &FrameSnapshot, view: Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LEVEL))?;
    out.queue(Print(format!("Level {}/{}  {}", frame.level + 1, frame.level_count, frame.level_name)))?;
    if frame.muted {
        out.queue(style::SetForegroundColor(C_HINT))?;
        out.queue(Print("  [muted]"))?;
    }

    let filled = (frame.health as usize * HEALTH_BAR_WIDTH).div_ceil(frame.max_health.max(1) as usize);
    let label = format!(" {:>2}/{}", frame.health, frame.max_health);
    let width = (HEALTH_BAR_WIDTH + label.len() + 4) as u16;
    out.queue(cursor::MoveTo(view.cols.saturating_sub(width), 0))?;
    out.queue(style::SetForegroundColor(C_HEALTH_FULL))?;
    out.queue(Print(format!("HP {}", "█".repeat(filled))))?;
    out.queue(style::SetForegroundColor(C_HEALTH_EMPTY))?;
    out.queue(Print("░".repeat(HEALTH_BAR_WIDTH - filled.min(HEALTH_BAR_WIDTH))))?;
    out.queue(style::SetForegroundColor(C_HUD_LEVEL))?;
    out.queue(Print(label))?;
    Ok(())
}

// ── Sprites ───────────────────────────────────────────────────────────────────

fn draw_sprite<W: Write>(out: &mut W, sprite: &Sprite, view: Viewport) -> std::io::Result<()> {
    match sprite.kind {
        SpriteKind::Wall => fill_rect(out, &sprite.rect, view, "█", C_WALL),
        SpriteKind::DestructibleWall => {
            let glyph = match sprite.frame {
                0 => "▓",
                1 => "▒",
                _ => "░",
            };
            fill_rect(out, &sprite.rect, view, glyph, C_WALL_CRACKED)
        }
        SpriteKind::Player => {
            let glyph = match sprite.facing {
                Facing::Left => "◄",
                Facing::Right => "►",
            };
            draw_at_center(out, &sprite.rect, view, glyph, C_PLAYER)
        }
        SpriteKind::Enemy(kind) => {
            // Two-frame flicker between lower and upper case.
            let (glyph, color) = match (kind, sprite.frame % 2) {
                (EnemyKind::Basic, 0) => ("e", C_ENEMY_BASIC),
                (EnemyKind::Basic, _) => ("E", C_ENEMY_BASIC),
                (EnemyKind::Shooting, 0) => ("s", C_ENEMY_SHOOTING),
                (EnemyKind::Shooting, _) => ("S", C_ENEMY_SHOOTING),
                (EnemyKind::Bouncing, 0) => ("b", C_ENEMY_BOUNCING),
                (EnemyKind::Bouncing, _) => ("B", C_ENEMY_BOUNCING),
            };
            draw_at_center(out, &sprite.rect, view, glyph, color)
        }
        SpriteKind::PlayerBullet => draw_at_center(out, &sprite.rect, view, "•", C_BULLET_PLAYER),
        SpriteKind::EnemyBullet(EnemyKind::Bouncing) => {
            draw_at_center(out, &sprite.rect, view, "●", C_BULLET_BOUNCING)
        }
        SpriteKind::EnemyBullet(_) => draw_at_center(out, &sprite.rect, view, "∘", C_BULLET_SHOOTING),
    }
}

fn draw_at_center<W: Write>(
    out: &mut W,
    rect: &Rect,
    view: Viewport,
    glyph: &str,
    color: Color,
) -> std::io::Result<()> {
    let center = rect.center();
    let (col, row) = view.cell(center.x, center.y);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(glyph))?;
    Ok(())
}

/// Paint every cell a rectangle covers.
fn fill_rect<W: Write>(
    out: &mut W,
    rect: &Rect,
    view: Viewport,
    glyph: &str,
    color: Color,
) -> std::io::Result<()> {
    let (left, top) = view.cell(rect.x, rect.y);
    let (right, bottom) = view.cell(rect.right() - 0.01, rect.bottom() - 0.01);
    out.queue(style::SetForegroundColor(color))?;
    for row in top..=bottom {
        out.queue(cursor::MoveTo(left, row))?;
        out.queue(Print(glyph.repeat(usize::from(right - left) + 1)))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.rows + 1))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("WASD / ←↑↓→ : Move   SPACE / Click : Shoot   Mouse : Aim   M : Mute   Q : Quit"))?;
    Ok(())
}

// ── Start / game-over / win overlay ───────────────────────────────────────────

fn draw_overlay<W: Write>(
    out: &mut W,
    view: Viewport,
    lines: &[(&str, Color)],
    hint: &str,
) -> std::io::Result<()> {
    let cx = view.cols / 2;
    let total_rows = lines.len() as u16 + 2;
    let start_row = (view.rows / 2).saturating_sub(total_rows / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    let hint_row = start_row + lines.len() as u16 + 1;
    let col = cx.saturating_sub(hint.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, hint_row))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print(hint))?;
    Ok(())
}
