// ui.rs - egui frontend: controls, grid painting, pointer input

use std::time::Duration;

use eframe::egui;
use egui::{Rect, Stroke, pos2};
use life::{Cell, patterns};

use crate::LifeApp;

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Auto-update if running
        if self.maybe_advance() {
            ctx.request_repaint(); // Ensure continuous updates
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.is_paused() { "▶ Play" } else { "⏸ Pause" };
                if ui.button(button_text).clicked() {
                    if self.is_paused() {
                        self.play();
                    } else {
                        self.pause();
                    }
                }

                if ui.button("⏹ Clear").clicked() {
                    self.pause();
                    self.clear_grid();
                }

                if ui.button("🎲 Random").clicked() {
                    self.pause();
                    self.apply_random_pattern();
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
                    self.pause();
                    self.apply_selected_pattern();
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.generation));
            });

            ui.separator();

            // Speed control
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.update_interval.as_millis().max(1) as f32;
                if ui
                    .add(egui::Slider::new(&mut speed, 0.5..=60.0).suffix(" gen/sec"))
                    .changed()
                {
                    self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            ui.label("Click cells to toggle them alive/dead. Use Play/Pause to run the simulation.");

            ui.separator();

            // Draw the grid, then handle clicking
            let response = self.draw_universe(ui);
            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let (row, col) = self.canvas.hit_test(pos, response.rect);
                    self.toggle_cell(row, col);
                }
            }

            ui.separator();

            // Statistics
            let live_cells = self.universe.population();
            let total = (self.universe.width() * self.universe.height()) as usize;
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {live_cells}"));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!(
                    "Population: {:.1}%",
                    (live_cells as f32 / total as f32) * 100.0
                ));
            });
        });

        // Request repaint if running to keep animation smooth
        if !self.is_paused() {
            ctx.request_repaint();
        }
    }
}

impl LifeApp {
    /// One full repaint: grid lines first, then every cell straight from
    /// the engine's borrowed buffer.
    fn draw_universe(&self, ui: &mut egui::Ui) -> egui::Response {
        let start_pos = ui.cursor().min;
        let total_size = self.canvas.size();

        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

        painter.rect_filled(
            Rect::from_min_size(start_pos, total_size),
            0.0,
            self.dead_color,
        );

        // Grid lines
        let step = self.canvas.step();
        let grid_stroke = Stroke::new(1.0, self.grid_color);
        for i in 0..=self.universe.width() {
            let x = start_pos.x + i as f32 * step + 0.5;
            painter.line_segment(
                [pos2(x, start_pos.y), pos2(x, start_pos.y + total_size.y)],
                grid_stroke,
            );
        }
        for j in 0..=self.universe.height() {
            let y = start_pos.y + j as f32 * step + 0.5;
            painter.line_segment(
                [pos2(start_pos.x, y), pos2(start_pos.x + total_size.x, y)],
                grid_stroke,
            );
        }

        // Cells
        let width = self.universe.width();
        for (idx, cell) in self.universe.cells().iter().enumerate() {
            let row = idx as u32 / width;
            let col = idx as u32 % width;

            let cell_color = match cell {
                Cell::Alive => self.live_color,
                Cell::Dead => self.dead_color,
            };

            painter.rect_filled(self.canvas.cell_rect(start_pos, row, col), 0.0, cell_color);
        }

        response
    }
}
