// main.rs - Desktop harness for Conway's Game of Life
// Drives the `life` engine: one advance per frame at most, then a repaint

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::{Duration, Instant};

use eframe::egui;
use egui::Color32;
use life::{Universe, patterns};

mod canvas; // Grid geometry and pointer mapping
mod ui; // egui frontend

use canvas::CellCanvas;

/// Universe dimensions, fixed at startup
const WIDTH: u32 = 64;
const HEIGHT: u32 = 64;
/// Cell edge in pixels; every cell gets a 1px gutter
const CELL_SIZE: f32 = 10.0;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    log::info!("starting {WIDTH}x{HEIGHT} universe");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([760.0, 880.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|_cc| Box::new(LifeApp::default())),
    )
}

pub struct LifeApp {
    universe: Universe,
    canvas: CellCanvas,

    /// Animation handle: `Some(last_tick)` while running, `None` while paused.
    anim: Option<Instant>,
    pub update_interval: Duration,
    pub generation: u32,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub grid_color: Color32,
    pub selected_pattern: usize,

    runtime: tokio::runtime::Runtime,

    grid_history: [u64; 10],
    history_count: usize,
}

impl Default for LifeApp {
    fn default() -> Self {
        let runtime = tokio::runtime::Runtime::new().unwrap();

        let selected_pattern = 7; // Copperhead
        let universe = Universe::from_pattern(WIDTH, HEIGHT, &patterns::PATTERNS[selected_pattern])
            .expect("default pattern fits the default universe");

        Self {
            universe,
            canvas: CellCanvas::new(CELL_SIZE, WIDTH, HEIGHT),
            anim: None,
            update_interval: Duration::from_millis(200),
            generation: 0,
            live_color: Color32::from_rgb(0, 0, 0),
            dead_color: Color32::from_rgb(255, 255, 255),
            grid_color: Color32::from_rgb(204, 204, 204),
            selected_pattern,
            runtime,
            grid_history: [0; 10],
            history_count: 0,
        }
    }
}

impl LifeApp {
    pub fn is_paused(&self) -> bool {
        self.anim.is_none()
    }

    /// Acquires the animation handle. Playing while already playing keeps
    /// the original tick schedule.
    pub fn play(&mut self) {
        if self.anim.is_none() {
            self.anim = Some(Instant::now());
        }
    }

    /// Releases the animation handle; the next tick is simply never
    /// scheduled. Nothing is in flight to cancel.
    pub fn pause(&mut self) {
        self.anim = None;
    }

    /// Runs at most one generation per frame, when running and due.
    /// Returns whether the grid changed.
    pub fn maybe_advance(&mut self) -> bool {
        let Some(last_tick) = self.anim else {
            return false;
        };
        if last_tick.elapsed() < self.update_interval {
            return false;
        }

        self.universe.tick_on(&self.runtime);
        self.generation += 1;
        self.anim = Some(Instant::now());

        if self.check_for_cycle() {
            log::info!("cycle detected at generation {}, pausing", self.generation);
            self.pause();
        }
        true
    }

    fn hash_grid(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.universe.cells().hash(&mut hasher);
        hasher.finish()
    }

    fn check_for_cycle(&mut self) -> bool {
        let current_hash = self.hash_grid();
        if self.grid_history.contains(&current_hash) {
            return true;
        }
        self.grid_history[self.history_count % 10] = current_hash;
        self.history_count += 1;
        false
    }

    pub fn clear_grid(&mut self) {
        self.universe = Universe::new(WIDTH, HEIGHT);
        self.reset_history();
    }

    pub fn apply_selected_pattern(&mut self) {
        match Universe::from_pattern(WIDTH, HEIGHT, &patterns::PATTERNS[self.selected_pattern]) {
            Ok(universe) => {
                self.universe = universe;
                self.reset_history();
            }
            Err(e) => log::warn!("{e}"),
        }
    }

    pub fn apply_random_pattern(&mut self) {
        patterns::randomize(&mut self.universe, self.generation);
        self.reset_history();
    }

    fn reset_history(&mut self) {
        self.generation = 0;
        self.grid_history = [0; 10];
        self.history_count = 0;
    }

    pub fn toggle_cell(&mut self, row: u32, col: u32) {
        self.universe.toggle_cell(row, col);
        log::debug!("toggled cell ({row}, {col})");
    }
}
