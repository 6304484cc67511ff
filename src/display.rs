//! Rendering layer: all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable snapshot of the
//! frame. No game logic is performed; this module only translates the pixel
//! world into terminal cells.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use space_explorer::entities::EntityKind;
use space_explorer::menu::{Menu, Screen};
use space_explorer::snapshot::{Banner, Hud, RenderSnapshot, SpriteView};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD: Color = Color::White;
const C_HUD_BOSS: Color = Color::Red;
const C_PLAYER: Color = Color::White;
const C_PLAYER_HIT: Color = Color::DarkGrey;
const C_ASTEROID: Color = Color::DarkYellow;
const C_RESOURCE: Color = Color::Green;
const C_PROJECTILE: Color = Color::Red;
const C_BOSS: Color = Color::Magenta;
const C_BOSS_PROJECTILE: Color = Color::Yellow;
const C_BANNER: Color = Color::DarkYellow;
const C_HINT: Color = Color::DarkGrey;

/// Maps world pixels onto the bordered play field of the terminal.
struct Viewport {
    cols: u16,
    rows: u16,
    world_w: i32,
    world_h: i32,
}

impl Viewport {
    fn new(snapshot: &RenderSnapshot) -> std::io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        Ok(Viewport {
            cols,
            rows,
            world_w: snapshot.width.max(1),
            world_h: snapshot.height.max(1),
        })
    }

    /// Inner field: columns 1..cols-1, rows 2..rows-2.
    fn field(&self) -> (i32, i32) {
        (
            i32::from(self.cols.saturating_sub(2)).max(1),
            i32::from(self.rows.saturating_sub(4)).max(1),
        )
    }

    /// Cell covering the world point, or `None` if it is off the field.
    fn cell(&self, x: i32, y: i32) -> Option<(u16, u16)> {
        if x < 0 || y < 0 || x >= self.world_w || y >= self.world_h {
            return None;
        }
        let (fw, fh) = self.field();
        let col = 1 + x * fw / self.world_w;
        let row = 2 + y * fh / self.world_h;
        Some((col as u16, row as u16))
    }

    /// Size of a sprite in cells, never smaller than one cell.
    fn span(&self, w: i32, h: i32) -> (u16, u16) {
        let (fw, fh) = self.field();
        (
            (w * fw / self.world_w).max(1) as u16,
            (h * fh / self.world_h).max(1) as u16,
        )
    }
}

// ── Public entry points ───────────────────────────────────────────────────────

/// Render one complete frame of gameplay.
pub fn render<W: Write>(out: &mut W, snapshot: &RenderSnapshot) -> std::io::Result<()> {
    let view = Viewport::new(snapshot)?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, &view)?;
    draw_hud(out, &view, &snapshot.hud)?;

    for sprite in &snapshot.sprites {
        draw_sprite(out, &view, sprite, &snapshot.hud)?;
    }

    if let Some(banner) = &snapshot.banner {
        draw_banner(out, &view, banner)?;
    }
    draw_controls_hint(out, &view)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

/// Render the main menu, pause menu or game-over screen.
pub fn render_menu<W: Write>(
    out: &mut W,
    menu: &Menu,
    snapshot: Option<&RenderSnapshot>,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let (cols, rows) = terminal::size()?;
    let cx = cols / 2;
    let cy = rows / 2;

    let (title, color) = match menu.screen {
        Screen::MainMenu => ("SPACE EXPLORER", Color::White),
        Screen::Paused => ("PAUSED", Color::White),
        Screen::GameOver => ("GAME OVER", Color::Red),
        Screen::Playing => return Ok(()),
    };
    print_centered(out, cx, cy.saturating_sub(5), title, color)?;

    if let Some(snapshot) = snapshot {
        let line = format!(
            "Score: {}   Level: {}",
            snapshot.hud.score, snapshot.hud.level
        );
        print_centered(out, cx, cy.saturating_sub(3), &line, Color::Yellow)?;
    }

    for (i, item) in menu.items().iter().enumerate() {
        let label = if i == menu.selected {
            format!("> {} <", item.label())
        } else {
            item.label().to_string()
        };
        let color = if i == menu.selected { Color::Green } else { Color::DarkGrey };
        print_centered(out, cx, cy + (i as u16) * 2, &label, color)?;
    }

    print_centered(
        out,
        cx,
        rows.saturating_sub(2),
        "↑ ↓ : Select   ENTER : Confirm   ESC : Back",
        C_HINT,
    )?;

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

fn print_centered<W: Write>(
    out: &mut W,
    cx: u16,
    row: u16,
    text: &str,
    color: Color,
) -> std::io::Result<()> {
    let col = cx.saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
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

    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, view: &Viewport, hud: &Hud) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    let boost = if hud.boosting { " BOOST" } else { "" };
    out.queue(Print(format!(
        "Shield: {}  Fuel: {:.1}{}  Score: {}  Level: {}",
        hud.shield, hud.fuel, boost, hud.score, hud.level
    )))?;

    if let Some(health) = hud.boss_health {
        let text = format!("Boss Health: {health}");
        let col = view.cols.saturating_sub(text.chars().count() as u16 + 1);
        out.queue(cursor::MoveTo(col, 0))?;
        out.queue(style::SetForegroundColor(C_HUD_BOSS))?;
        out.queue(Print(text))?;
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_sprite<W: Write>(
    out: &mut W,
    view: &Viewport,
    sprite: &SpriteView,
    hud: &Hud,
) -> std::io::Result<()> {
    let rect = sprite.rect;
    // Anchor on the first on-screen corner; falling objects start above the top.
    let Some((col, row)) = view.cell(rect.x.max(0), rect.y.max(0)) else {
        return Ok(());
    };
    if rect.bottom() <= 0 {
        return Ok(());
    }
    let (span_w, span_h) = view.span(rect.w, rect.h);

    let (glyph, color) = match sprite.kind {
        EntityKind::Player if hud.invincible => ("▲", C_PLAYER_HIT),
        EntityKind::Player => ("▲", C_PLAYER),
        EntityKind::Asteroid => ("@", C_ASTEROID),
        EntityKind::Resource => ("◆", C_RESOURCE),
        EntityKind::Projectile => ("║", C_PROJECTILE),
        EntityKind::Boss => ("█", C_BOSS),
        EntityKind::BossProjectile => ("↓", C_BOSS_PROJECTILE),
    };

    out.queue(style::SetForegroundColor(color))?;
    let last_row = view.rows.saturating_sub(3);
    let last_col = view.cols.saturating_sub(2);
    for dy in 0..span_h {
        let r = row + dy;
        if r > last_row {
            break;
        }
        out.queue(cursor::MoveTo(col, r))?;
        let width = span_w.min(last_col.saturating_sub(col) + 1) as usize;
        out.queue(Print(glyph.repeat(width)))?;
    }
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_banner<W: Write>(out: &mut W, view: &Viewport, banner: &Banner) -> std::io::Result<()> {
    print_centered(out, view.cols / 2, view.rows / 2, &banner.text, C_BANNER)
}

fn draw_controls_hint<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(
        "WASD / arrows : Move   SHIFT : Boost   SPACE : Shoot   ESC : Pause   Q : Quit",
    ))?;
    Ok(())
}
