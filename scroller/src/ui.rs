// ui.rs - eframe front-end: keys in, header/grid/help out

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{Align2, Color32, FontId, Key, Pos2, Rect, Stroke, Vec2};
use tracing::info;
use wolfram::config::{ColorScheme, HEADER_HEIGHT, SCREEN_SIZE};
use wolfram::{Action, GridSize, Mode, Rule, Scroller};

pub const DISPLAY_SCALE: f32 = 2.0;  // Logical pixel -> screen point

const HELP_LINES: &[&str] = &[
    "R       » Randomize cell values",
    "M       » Set middle cell to 1",
    "          and the rest to 0",
    "C       » Cycle through colors",
    "S       » Cycle through sizes",
    "Esc     » Close help / Quit",
    "Space   » Pause / Play",
    "Up/Down » Change rule",
    "(Shift) » Change rule by 10",
];

pub struct ScrollerApp {
    scroller: Scroller,
    last_update: Instant,
    update_interval: Duration,
}

impl ScrollerApp {
    pub fn new(rule: Rule, size: GridSize, update_interval: Duration) -> Self {
        Self {
            scroller: Scroller::new(rule, size),
            last_update: Instant::now(),
            update_interval,
        }
    }

    /// Key presses this frame, in the order they are handled.
    fn actions(ctx: &egui::Context) -> Vec<Action> {
        ctx.input(|i| {
            let big = i.modifiers.shift;
            let bindings = [
                (Key::Escape,    Action::Escape),
                (Key::H,         Action::ToggleHelp),
                (Key::C,         Action::CycleColor),
                (Key::Space,     Action::TogglePause),
                (Key::R,         Action::Randomize),
                (Key::M,         Action::InitMiddle),
                (Key::S,         Action::CycleSize),
                (Key::ArrowUp,   Action::RuleUp { big }),
                (Key::ArrowDown, Action::RuleDown { big }),
            ];
            bindings
                .into_iter()
                .filter(|(key, _)| i.key_pressed(*key))
                .map(|(_, action)| action)
                .collect()
        })
    }
}

impl eframe::App for ScrollerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for action in Self::actions(ctx) {
            self.scroller.apply(action);
        }

        if self.scroller.mode() == Mode::Quit {
            info!("Quit requested");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        if self.last_update.elapsed() >= self.update_interval {
            self.scroller.update_state();
            self.last_update = Instant::now();
        }

        let (bg, fg) = colors(self.scroller.color_scheme());
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(bg))
            .show(ctx, |ui| {
                let total_size = Vec2::new(
                    SCREEN_SIZE as f32,
                    (SCREEN_SIZE + HEADER_HEIGHT) as f32,
                ) * DISPLAY_SCALE;
                let (response, painter) = ui.allocate_painter(total_size, egui::Sense::hover());
                let origin = response.rect.min;

                if self.scroller.mode() == Mode::Help {
                    draw_help_screen(&painter, origin, fg);
                } else {
                    draw_header(&painter, origin, self.scroller.rule(), fg);
                    draw_grid(&painter, origin, &self.scroller, fg);
                }
            });

        // Keep ticking even without input
        if self.scroller.mode() == Mode::Running {
            ctx.request_repaint();
        }
    }
}

fn colors(scheme: &ColorScheme) -> (Color32, Color32) {
    let [br, bg, bb] = scheme.bg;
    let [fr, fg, fb] = scheme.fg;
    (Color32::from_rgb(br, bg, bb), Color32::from_rgb(fr, fg, fb))
}

/// Rect in screen points for a logical-pixel rectangle.
fn scaled(origin: Pos2, x: f32, y: f32, w: f32, h: f32) -> Rect {
    Rect::from_min_size(
        origin + Vec2::new(x, y) * DISPLAY_SCALE,
        Vec2::new(w, h) * DISPLAY_SCALE,
    )
}

fn draw_header(painter: &egui::Painter, origin: Pos2, rule: Rule, fg: Color32) {
    painter.text(
        origin + Vec2::new(4.0, 6.0) * DISPLAY_SCALE,
        Align2::LEFT_TOP,
        format!("Wolfram CA Scroller:{:3}          H:Help", rule.number()),
        FontId::monospace(9.0 * DISPLAY_SCALE),
        fg,
    );
    painter.rect_stroke(
        scaled(origin, 0.0, 0.0, SCREEN_SIZE as f32, HEADER_HEIGHT as f32),
        0.0,
        Stroke::new(DISPLAY_SCALE, fg),
    );
}

fn draw_grid(painter: &egui::Painter, origin: Pos2, scroller: &Scroller, fg: Color32) {
    let cell = scroller.cell_size_px() as f32;
    let top = HEADER_HEIGHT as f32;

    // Oldest row at the top
    for (i, row) in scroller.grid().visible_rows().enumerate() {
        for (j, _) in row.iter().enumerate().filter(|(_, c)| **c == 1) {
            painter.rect_filled(
                scaled(origin, j as f32 * cell, top + i as f32 * cell, cell, cell),
                0.0,
                fg,
            );
        }
    }
}

fn draw_help_screen(painter: &egui::Painter, origin: Pos2, fg: Color32) {
    let stroke = Stroke::new(DISPLAY_SCALE, fg);
    let header = HEADER_HEIGHT as f32;
    let screen = SCREEN_SIZE as f32;

    painter.text(
        origin + Vec2::new(4.0, 6.0) * DISPLAY_SCALE,
        Align2::LEFT_TOP,
        "Wolfram CA Scroller:Help",
        FontId::monospace(9.0 * DISPLAY_SCALE),
        fg,
    );
    painter.rect_stroke(scaled(origin, 0.0, 0.0, screen, header), 0.0, stroke);
    painter.rect_stroke(scaled(origin, 0.0, header - 1.0, screen, screen + 1.0), 0.0, stroke);

    for (i, line) in HELP_LINES.iter().enumerate() {
        painter.text(
            origin + Vec2::new(5.0, 1.5 * header + i as f32 * 13.0) * DISPLAY_SCALE,
            Align2::LEFT_TOP,
            *line,
            FontId::monospace(8.0 * DISPLAY_SCALE),
            fg,
        );
    }

    // Corner fan
    let bottom = screen + header;
    for i in 0..21 {
        let i = i as f32;
        painter.line_segment(
            [
                origin + Vec2::new(70.0 + i * 8.0, bottom) * DISPLAY_SCALE,
                origin + Vec2::new(screen, bottom - i * 15.0) * DISPLAY_SCALE,
            ],
            stroke,
        );
    }
}
