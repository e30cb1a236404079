// ui.rs - egui front end: controls, cell painter, pointer forwarding

use std::time::Instant;

use eframe::egui;
use egui::{Color32, Pos2, Rect, Stroke, Vec2};
use tile_life_core::{CellRenderer, ClickOutcome, patterns};

use crate::TileLifeApp;

/// Draws tiles onto an egui painter, offset by the canvas origin.
pub struct PainterRenderer<'a> {
    pub painter: &'a egui::Painter,
    pub origin: Pos2,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub border_color: Color32,
}

impl CellRenderer for PainterRenderer<'_> {
    fn draw_cell(&mut self, pixel_x: f32, pixel_y: f32, size: f32, alive: bool) {
        let rect = Rect::from_min_size(self.origin + Vec2::new(pixel_x, pixel_y), Vec2::splat(size));
        let fill = if alive { self.live_color } else { self.dead_color };
        self.painter.rect_filled(rect, 0.0, fill);
        self.painter.rect_stroke(rect, 0.0, Stroke::new(1.0, self.border_color));
    }
}

impl eframe::App for TileLifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Space acts as a momentary run button
        let space_held = ctx.input(|i| i.key_down(egui::Key::Space));
        self.sim.set_run_held(space_held);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Tile Life");

            // Controls
            ui.horizontal(|ui| {
                let mut running = self.sim.running_flag();
                if ui.checkbox(&mut running, "Run").changed() {
                    self.sim.set_running(running);
                }

                if ui.button("⏹ Clear").clicked() {
                    self.sim.set_running(false);
                    self.sim.grid_mut().clear();
                }

                if ui.button("🎲 Random").clicked() {
                    self.sim.set_running(false);
                    self.random_seed = self.random_seed.wrapping_add(1);
                    patterns::apply_random_pattern(self.sim.grid_mut(), self.random_seed, 0.3);
                }

                ui.separator();

                // Pattern dropdown
                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.sim.set_running(false);
                    if let Some(pattern) = patterns::PATTERNS.get(self.selected_pattern) {
                        patterns::apply_pattern(self.sim.grid_mut(), pattern);
                    }
                }
            });

            // Rate control
            ui.horizontal(|ui| {
                let (min, max) = self.sim.rate_range();
                let mut rate = self.sim.rate();
                if ui.add(egui::Slider::new(&mut rate, min..=max).text("gen/sec")).changed() {
                    self.sim.set_rate(rate);
                }

                ui.separator();
                ui.label(format!("fps: {:.0}", 1.0 / ctx.input(|i| i.stable_dt).max(f32::EPSILON)));
            });

            ui.label("Click or drag to toggle tiles. Hold Space to run while the checkbox is off.");

            ui.separator();

            let grid = self.sim.grid();
            let canvas = Vec2::new(
                grid.width() as f32 * grid.cell_size(),
                grid.height() as f32 * grid.cell_size(),
            );
            let (response, painter) = ui.allocate_painter(canvas, egui::Sense::click_and_drag());
            let origin = response.rect.min;
            let now = Instant::now();

            // Pointer held on the canvas forwards every frame, the tile debounce throttles it
            if response.is_pointer_button_down_on() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let local = pos - origin;
                    if let ClickOutcome::Toggled { x, y } = self.sim.handle_pointer(local.x, local.y, now) {
                        tracing::trace!(x, y, "tile toggled from pointer");
                    }
                }
            }

            painter.rect_filled(response.rect, 0.0, Color32::BLACK);

            let mut renderer = PainterRenderer {
                painter: &painter,
                origin,
                live_color: self.live_color,
                dead_color: self.dead_color,
                border_color: self.border_color,
            };
            self.sim.tick(now, &mut renderer);

            ui.separator();

            let grid = self.sim.grid();
            let total = grid.width() * grid.height();
            let live = grid.live_count();
            ui.horizontal(|ui| {
                ui.label(format!("Generation: {}", grid.generation()));
                ui.label(format!("Live tiles: {}", live));
                ui.label(format!("Population: {:.1}%", live as f32 / total as f32 * 100.0));
            });
        });

        // Keep ticking while the simulation runs
        if self.sim.is_running() {
            ctx.request_repaint();
        }
    }
}
