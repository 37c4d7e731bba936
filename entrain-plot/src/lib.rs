//! Live visualization for the Entrain Kuramoto simulator.
//!
//! [`SimulationApp`] is a runnable egui application that owns a
//! [`SimulationState`] and draws two views of it each frame: the oscillators
//! projected onto a unit circle, and the resonance index over time. The app
//! drives the core through exactly three commands (update, reset, and
//! reconstruct-with-new-count); the core itself knows nothing about rendering.

mod history;

use std::f64::consts::TAU;

use eframe::egui;
use egui_plot::{Legend, Line, LineStyle, Plot, Points};
use rand::{rngs::SmallRng, SeedableRng};

use entrain_core::{
    ControlState, FrequencyRange, SimulationParameters, SimulationState, ANIMATION_SPEED_RANGE,
    COUPLING_STRENGTH_RANGE, NUM_OSCILLATORS_RANGE, TIME_STEP_MAX,
};

pub use history::ResonanceHistory;

/// Update steps integrated per rendered frame at 1× animation speed.
///
/// Batching several Euler ticks per frame keeps the animation smooth without
/// tying the integration step size to the frame rate.
const BASE_STEPS_PER_FRAME: usize = 10;

/// Slider bounds for the frequency band edges.
const FREQUENCY_SLIDER_RANGE: std::ops::RangeInclusive<f64> = -5.0..=5.0;

/// A runnable egui application showing a live Kuramoto network.
pub struct SimulationApp {
    params: SimulationParameters,
    draft: ParameterDraft,
    state: SimulationState,
    control: ControlState,
    history: ResonanceHistory,
    rng: SmallRng,
    status: Option<String>,
}

/// Raw slider values, validated into [`SimulationParameters`] before use.
struct ParameterDraft {
    num_oscillators: usize,
    coupling_strength: f64,
    time_step: f64,
    freq_min: f64,
    freq_max: f64,
    animation_speed: f64,
}

impl ParameterDraft {
    fn from_params(params: &SimulationParameters) -> Self {
        Self {
            num_oscillators: params.num_oscillators(),
            coupling_strength: params.coupling_strength(),
            time_step: params.time_step(),
            freq_min: params.frequency_range().min(),
            freq_max: params.frequency_range().max(),
            animation_speed: params.animation_speed(),
        }
    }

    fn build(&self) -> Result<SimulationParameters, Box<dyn std::error::Error>> {
        let range = FrequencyRange::new(self.freq_min, self.freq_max)?;
        Ok(SimulationParameters::new(
            self.num_oscillators,
            self.coupling_strength,
            self.time_step,
            range,
            self.animation_speed,
        )?)
    }
}

impl SimulationApp {
    /// Creates the app with the given starting parameters.
    ///
    /// # Panics
    ///
    /// Panics if the initial population cannot be drawn, which cannot happen
    /// for validated [`SimulationParameters`] (N is always at least one).
    #[must_use]
    pub fn new(params: SimulationParameters) -> Self {
        let mut rng = SmallRng::from_entropy();
        let state =
            SimulationState::new(params.num_oscillators(), params.frequency_range(), &mut rng)
                .expect("validated parameters have at least one oscillator");

        Self {
            draft: ParameterDraft::from_params(&params),
            params,
            state,
            control: ControlState::default(),
            history: ResonanceHistory::new(),
            rng,
            status: None,
        }
    }

    /// Opens a native window and runs the app until it is closed.
    ///
    /// # Errors
    ///
    /// Returns an [`eframe::Error`] if the native window cannot be created.
    pub fn run(self, name: &str) -> Result<(), eframe::Error> {
        eframe::run_native(
            name,
            eframe::NativeOptions::default(),
            Box::new(|_cc| Ok(Box::new(self))),
        )
    }

    /// Integrates a batch of update steps and records one history sample.
    ///
    /// A failed step pauses the loop so the failure is not retried every
    /// frame; the error text is shown in the controls panel.
    fn advance(&mut self) {
        let steps = (BASE_STEPS_PER_FRAME as f64 * self.params.animation_speed())
            .round()
            .max(1.0) as usize;

        for _ in 0..steps {
            if let Err(err) = self
                .state
                .update(self.params.coupling_strength(), self.params.time_step())
            {
                self.status = Some(err.to_string());
                self.control.pause();
                return;
            }
        }

        self.history
            .push(self.state.time(), self.state.resonance_index());
    }

    /// Validates the slider values and applies any resulting changes.
    ///
    /// A changed population size reconstructs the state (N is fixed per
    /// instance); a changed frequency band resets it. Both discard the
    /// resonance history, which describes the abandoned trajectory.
    fn apply_draft(&mut self) {
        let new_params = match self.draft.build() {
            Ok(params) => params,
            Err(err) => {
                self.status = Some(err.to_string());
                return;
            }
        };

        if new_params == self.params {
            return;
        }

        if new_params.num_oscillators() != self.params.num_oscillators() {
            match SimulationState::new(
                new_params.num_oscillators(),
                new_params.frequency_range(),
                &mut self.rng,
            ) {
                Ok(state) => {
                    self.state = state;
                    self.history.clear();
                }
                Err(err) => {
                    self.status = Some(err.to_string());
                    return;
                }
            }
        } else if new_params.frequency_range() != self.params.frequency_range() {
            if let Err(err) = self.state.reset(new_params.frequency_range(), &mut self.rng) {
                self.status = Some(err.to_string());
                return;
            }
            self.history.clear();
        }

        self.params = new_params;
        self.status = None;
    }

    /// Redraws the population and returns the loop to its running state.
    fn reset(&mut self) {
        if let Err(err) = self.state.reset(self.params.frequency_range(), &mut self.rng) {
            self.status = Some(err.to_string());
            self.control.pause();
            return;
        }
        self.history.clear();
        self.control.reset();
        self.status = None;
    }

    fn controls_ui(&mut self, ui: &mut egui::Ui) {
        ui.heading("Parameters");
        ui.add(
            egui::Slider::new(&mut self.draft.num_oscillators, NUM_OSCILLATORS_RANGE)
                .text("Oscillators (N)"),
        );
        ui.add(
            egui::Slider::new(&mut self.draft.coupling_strength, COUPLING_STRENGTH_RANGE)
                .text("Coupling (K)"),
        );
        ui.add(
            egui::Slider::new(&mut self.draft.time_step, 0.001..=TIME_STEP_MAX)
                .fixed_decimals(3)
                .text("Time step (Δt)"),
        );
        ui.add(
            egui::Slider::new(&mut self.draft.animation_speed, ANIMATION_SPEED_RANGE)
                .text("Animation speed"),
        );

        ui.label("Frequency range");
        ui.add(egui::Slider::new(&mut self.draft.freq_min, FREQUENCY_SLIDER_RANGE).text("min"));
        ui.add(egui::Slider::new(&mut self.draft.freq_max, FREQUENCY_SLIDER_RANGE).text("max"));

        // Edits apply immediately while running; edits made during a pause
        // are held until resume.
        if self.control.is_running() {
            self.apply_draft();
        }

        ui.separator();
        ui.horizontal(|ui| {
            if self.control.is_running() {
                if ui.button("Pause").clicked() {
                    self.control.pause();
                }
            } else if ui.button("Resume").clicked() {
                self.control.resume();
                self.apply_draft();
            }
            if ui.button("Reset").clicked() {
                self.reset();
            }
        });

        ui.separator();
        ui.label(format!(
            "Resonance index: {:.3}",
            self.state.resonance_index()
        ));
        ui.label(format!("Time: {:.2}", self.state.time()));
        ui.label(format!("Oscillators: {}", self.state.num_oscillators()));

        if let Some(status) = &self.status {
            ui.separator();
            ui.colored_label(egui::Color32::RED, status);
        }
    }

    fn plots_ui(&self, ui: &mut egui::Ui) {
        let circle_height = ui.available_height() * 0.55;

        let oscillators: Vec<[f64; 2]> = self
            .state
            .oscillators()
            .iter()
            .map(|osc| [osc.phase().cos(), osc.phase().sin()])
            .collect();

        Plot::new("unit-circle")
            .data_aspect(1.0)
            .include_x(-1.2)
            .include_x(1.2)
            .include_y(-1.2)
            .include_y(1.2)
            .height(circle_height)
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(unit_circle_outline())
                        .color(egui::Color32::GRAY)
                        .style(LineStyle::dashed_loose()),
                );
                plot_ui.points(Points::new(oscillators).radius(3.0).name("oscillators"));
            });

        Plot::new("resonance")
            .legend(Legend::default())
            .include_y(0.0)
            .include_y(1.0)
            .show(ui, |plot_ui| {
                plot_ui.line(Line::new(self.history.points()).name("resonance index"));
            });
    }
}

impl eframe::App for SimulationApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("controls").show(ctx, |ui| self.controls_ui(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.plots_ui(ui));

        if self.control.is_running() {
            self.advance();
            ctx.request_repaint();
        }
    }
}

/// Points tracing the reference circle the oscillator markers ride on.
fn unit_circle_outline() -> Vec<[f64; 2]> {
    (0..=128)
        .map(|i| {
            let theta = TAU * f64::from(i) / 128.0;
            [theta.cos(), theta.sin()]
        })
        .collect()
}
