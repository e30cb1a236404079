// main.rs - Tile grid Game of Life with click editing
// The grid model lives in tile_life_core, this binary is the egui driver

use eframe::egui;
use egui::Color32;
use tracing_subscriber::EnvFilter;

use tile_life_core::{Grid, GridError, SimulationContext};

mod config;  // YAML settings
mod ui;      // eframe::App impl and cell painter

use config::Config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env();
    let app = match TileLifeApp::new(&config) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!("{e}, falling back to default config");
            TileLifeApp::new(&Config::default())?
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.canvas_width as f32 + 40.0, config.canvas_height as f32 + 180.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Tile Life",
        options,
        Box::new(|_cc| Box::new(app)),
    )?;
    Ok(())
}

/// Front-end state: the simulation context plus presentation settings.
pub struct TileLifeApp {
    pub sim: SimulationContext,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub border_color: Color32,
    pub selected_pattern: usize,
    pub random_seed: u64,
}

impl TileLifeApp {
    pub fn new(config: &Config) -> Result<Self, GridError> {
        let (width, height) = config.grid_dimensions();
        let grid = Grid::new(width, height, config.cell_size as f32)?
            .with_policy(config.update_policy);

        let mut sim = SimulationContext::new(grid)
            .with_rate_range(config.min_rate, config.max_rate);
        sim.set_rate(config.rate);

        tracing::info!(width, height, rate = sim.rate(), policy = ?config.update_policy, "grid ready");

        let [r, g, b] = config.colors.alive;
        let live_color = Color32::from_rgb(r, g, b);
        let [r, g, b] = config.colors.dead;
        let dead_color = Color32::from_rgb(r, g, b);
        let [r, g, b] = config.colors.border;
        let border_color = Color32::from_rgb(r, g, b);

        Ok(Self {
            sim,
            live_color,
            dead_color,
            border_color,
            selected_pattern: 0,
            random_seed: 0,
        })
    }
}
