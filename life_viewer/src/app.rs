// app.rs - Viewer state: the grid, the visible window onto it, and controls

use std::time::{Duration, Instant};

use egui::Color32;
use life::patterns::{self, PATTERNS};
use life::seed::random_fill;
use life::{Bounds, Cell, CycleDetector, Grid, LifeConfig};

pub struct LifeApp {
    pub grid: Grid,
    history: CycleDetector,

    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,

    /// Part of the infinite plane currently on screen.
    pub viewport: Bounds,
    pub cell_size: f32,

    seed: u64,
}

fn rgb([r, g, b]: [u8; 3]) -> Color32 {
    Color32::from_rgb(r, g, b)
}

impl LifeApp {
    pub fn new(config: &LifeConfig) -> Self {
        let viewport = Bounds::with_size(Cell::new(0, 0), config.viewport_width, config.viewport_height)
            .unwrap_or(Bounds { min: Cell::new(0, 0), max: Cell::new(0, 0) });

        Self {
            grid: Grid::new(),
            history: CycleDetector::new(config.history_len),
            is_running: false,
            last_update: Instant::now(),
            update_interval: config.tick_interval(),
            live_color: rgb(config.live_color),
            dead_color: rgb(config.dead_color),
            selected_pattern: 0,
            viewport,
            cell_size: config.cell_size,
            seed: 0,
        }
    }

    /// Top-left cell that centres a pattern of the given extent in the viewport.
    fn centred_origin(&self, pattern: &patterns::Pattern) -> Cell {
        let (w, h) = pattern
            .cells
            .iter()
            .fold((0, 0), |(w, h), &(x, y)| (w.max(x + 1), h.max(y + 1)));
        let mid_x = self.viewport.min.x + (self.viewport.width() as i32) / 2;
        let mid_y = self.viewport.min.y + (self.viewport.height() as i32) / 2;
        Cell::new(mid_x - w / 2, mid_y - h / 2)
    }
}

/// Everything the UI can ask of the simulation.
pub trait LifeControls {
    fn step(&mut self);
    fn check_for_cycle(&mut self) -> bool;
    fn clear_grid(&mut self);
    fn apply_selected_pattern(&mut self);
    fn apply_random_pattern(&mut self);
    fn toggle_cell(&mut self, cell: Cell);
    fn pan(&mut self, dx: i32, dy: i32);
}

impl LifeControls for LifeApp {
    fn step(&mut self) {
        self.grid.advance_generation();
        if self.check_for_cycle() {
            tracing::info!(generation = self.grid.generation(), "grid settled, pausing");
            self.is_running = false;
        }
    }

    fn check_for_cycle(&mut self) -> bool {
        self.history.record(self.grid.fingerprint())
    }

    fn clear_grid(&mut self) {
        self.grid.clear();
        self.history.reset();
    }

    fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = PATTERNS.get(self.selected_pattern) {
            let origin = self.centred_origin(pattern);
            pattern.apply(&mut self.grid, origin);
            self.history.reset();
            tracing::debug!(pattern = pattern.name, ?origin, "applied pattern");
        }
    }

    fn apply_random_pattern(&mut self) {
        self.seed = self.seed.wrapping_add(1);
        random_fill(&mut self.grid, self.viewport, self.seed);
        self.history.reset();
    }

    fn toggle_cell(&mut self, cell: Cell) {
        self.grid.toggle(cell.x, cell.y);
        self.history.reset();
    }

    fn pan(&mut self, dx: i32, dy: i32) {
        let by = Cell::new(dx, dy);
        self.viewport = Bounds {
            min: self.viewport.min.offset(by),
            max: self.viewport.max.offset(by),
        };
    }
}
