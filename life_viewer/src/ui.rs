// ui.rs - egui front end over LifeApp

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use std::time::{Duration, Instant};

use crate::app::{LifeApp, LifeControls};
use life::Cell;
use life::patterns::PATTERNS;

const SPACING: f32 = 0.5;
const PAN_STEP: i32 = 10;

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.step();
            self.last_update = Instant::now();
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Sparse Game of Life");

            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.is_running = !self.is_running;
                    if self.is_running {
                        self.last_update = Instant::now();
                    }
                }

                if ui.button("⏭ Step").clicked() {
                    self.is_running = false;
                    self.step();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.is_running = false;
                    self.clear_grid();
                }

                if ui.button("🎲 Random").clicked() {
                    self.is_running = false;
                    self.apply_random_pattern();
                }

                ui.separator();

                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.is_running = false;
                    self.apply_selected_pattern();
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.grid.generation()));
            });

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.update_interval.as_millis().max(1) as f32;
                if ui.add(egui::Slider::new(&mut speed, 0.5..=90.0).suffix(" gen/sec")).changed() {
                    self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);

                ui.separator();

                ui.label("Pan:");
                if ui.button("◀").clicked() {
                    self.pan(-PAN_STEP, 0);
                }
                if ui.button("▶").clicked() {
                    self.pan(PAN_STEP, 0);
                }
                if ui.button("▲").clicked() {
                    self.pan(0, -PAN_STEP);
                }
                if ui.button("▼").clicked() {
                    self.pan(0, PAN_STEP);
                }
            });

            ui.separator();

            ui.label("The plane is unbounded; pan to follow escaping patterns.");
            ui.label("Click cells to toggle them while paused.");

            ui.separator();

            let view = self.viewport;
            let pitch = self.cell_size + SPACING;
            let start_pos = ui.cursor().min;
            let total_size = Vec2::new(
                pitch * view.width() as f32 - SPACING,
                pitch * view.height() as f32 - SPACING,
            );

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

            painter.rect_filled(Rect::from_min_size(start_pos, total_size), 0.0, Color32::BLACK);

            for cell in view.cells() {
                let col = (cell.x - view.min.x) as f32;
                let row = (cell.y - view.min.y) as f32;
                let rect = Rect::from_min_size(
                    egui::pos2(start_pos.x + col * pitch, start_pos.y + row * pitch),
                    Vec2::splat(self.cell_size),
                );

                let color = if self.grid.is_alive(cell.x, cell.y) {
                    self.live_color
                } else {
                    self.dead_color
                };
                painter.rect_filled(rect, 1.0, color);
                painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
            }

            if !self.is_running && response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let col = ((pos.x - start_pos.x) / pitch).floor() as i32;
                    let row = ((pos.y - start_pos.y) / pitch).floor() as i32;
                    let target = Cell::new(view.min.x + col, view.min.y + row);
                    if view.contains(target) {
                        self.toggle_cell(target);
                    }
                }
            }

            ui.separator();

            let in_view = self.grid.cells().filter(|c| view.contains(*c)).count();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", self.grid.len()));
                ui.label(format!("In view: {}", in_view));
                ui.label(format!("View origin: ({}, {})", view.min.x, view.min.y));
            });
        });

        if self.is_running {
            ctx.request_repaint();
        }
    }
}
