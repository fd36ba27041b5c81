use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints, Points};
use tracing_subscriber::EnvFilter;

use rocketpath::analysis::assess;
use rocketpath::dynamics::state::SimConfig;
use rocketpath::io;
use rocketpath::sim::{self, FlightResult, Playback};
use rocketpath::vehicle::RocketConfig;

// The original tool animated one sample every 100 ms.
const DEFAULT_SAMPLES_PER_SECOND: f64 = 10.0;

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Rocketpath - Rocket Trajectory Simulation",
        options,
        Box::new(|_| Ok(Box::new(FlightViz::default()))),
    )
}

struct FlightViz {
    mass: String,
    thrust: String,
    burn_time: String,
    save_path: String,
    rate: f64,
    flight: Option<FlightResult>,
    playback: Playback,
    status: Option<String>,
}

impl Default for FlightViz {
    fn default() -> Self {
        Self {
            mass: String::new(),
            thrust: String::new(),
            burn_time: String::new(),
            save_path: "flight.csv".into(),
            rate: DEFAULT_SAMPLES_PER_SECOND,
            flight: None,
            playback: Playback::new(0, DEFAULT_SAMPLES_PER_SECOND),
            status: None,
        }
    }
}

impl FlightViz {
    fn run(&mut self) {
        let result = RocketConfig::parse(&self.mass, &self.thrust, &self.burn_time)
            .and_then(|rocket| sim::simulate(&rocket, &SimConfig::default()));
        match result {
            Ok(flight) => {
                self.playback = Playback::new(flight.trajectory.len(), self.rate);
                self.status = None;
                self.flight = Some(flight);
            }
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    fn reset(&mut self) {
        self.mass.clear();
        self.thrust.clear();
        self.burn_time.clear();
        self.status = None;
    }

    fn save(&mut self) {
        let Some(flight) = &self.flight else {
            self.status = Some("No simulation data to save. Run the simulation first.".into());
            return;
        };
        self.status = Some(
            match io::write_flight_file(&self.save_path, flight, &flight.metrics(), false) {
                Ok(()) => format!("Saved {}", self.save_path),
                Err(e) => e.to_string(),
            },
        );
    }
}

impl eframe::App for FlightViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("inputs").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Mass (kg):");
                ui.text_edit_singleline(&mut self.mass);
                ui.label("Thrust (N):");
                ui.text_edit_singleline(&mut self.thrust);
                ui.label("Burn Time (s):");
                ui.text_edit_singleline(&mut self.burn_time);
            });
            ui.horizontal(|ui| {
                if ui.button("Run Trajectory Simulation").clicked() {
                    self.run();
                }
                if ui.button("Reset").clicked() {
                    self.reset();
                }
                ui.separator();
                ui.text_edit_singleline(&mut self.save_path);
                if ui.button("Save Simulation Data").clicked() {
                    self.save();
                }
                ui.separator();
                if ui
                    .add(egui::Slider::new(&mut self.rate, 1.0..=200.0).text("samples/s"))
                    .changed()
                {
                    self.playback.set_rate(self.rate);
                }
                if ui.button("Replay").clicked() {
                    self.playback.restart();
                }
            });
            if let Some(status) = &self.status {
                ui.colored_label(egui::Color32::LIGHT_RED, status);
            }
        });

        let Some(flight) = &self.flight else {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.label("Enter mass, thrust and burn time, then run the simulation.");
            });
            return;
        };

        self.playback.advance(ctx.input(|i| i.stable_dt) as f64);
        if !self.playback.is_finished() {
            ctx.request_repaint();
        }

        let metrics = flight.metrics();
        egui::SidePanel::right("metrics").show(ctx, |ui| {
            ui.heading("Performance Metrics");
            egui::Grid::new("metrics_grid").striped(true).show(ui, |ui| {
                for (label, value) in metrics.entries() {
                    ui.label(label);
                    ui.label(format!("{value:.2}"));
                    ui.end_row();
                }
            });
            ui.separator();
            ui.heading("Analysis Summary");
            for finding in assess(&metrics) {
                ui.label(finding.message);
            }
        });

        let trajectory = &flight.trajectory;
        let visible = self.playback.visible(trajectory);
        let current = self.playback.current(trajectory).copied();

        egui::CentralPanel::default().show(ctx, |ui| {
            let half_h = ui.available_size().y / 2.0 - 8.0;

            ui.label("Trajectory Simulation");
            let path: PlotPoints = visible.iter().map(|s| [s.time, s.altitude]).collect();
            Plot::new("altitude")
                .height(half_h)
                .x_axis_label("Time (s)")
                .y_axis_label("Altitude (m)")
                .include_x(0.0)
                .include_x(flight.terminal.elapsed_time + 1.0)
                .include_y(0.0)
                .include_y(flight.terminal.max_altitude + 10.0)
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new("Altitude", path));
                    if let Some(s) = current {
                        plot_ui.points(
                            Points::new("Rocket Position", vec![[s.time, s.altitude]]).radius(5.0),
                        );
                    }
                });

            ui.label("Velocity vs Time");
            let velocity: PlotPoints = trajectory.iter().map(|s| [s.time, s.velocity]).collect();
            Plot::new("velocity")
                .height(half_h)
                .x_axis_label("Time (s)")
                .y_axis_label("Velocity (m/s)")
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new("Velocity (m/s)", velocity));
                });
        });
    }
}
