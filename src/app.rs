use crate::components::{
    show_dashboard, show_display_options, show_mode_selector, show_status, DisplayOptions,
};
use crate::metrics::{
    DisplayState, Scheduler, SystemSampler, CPU_MEASUREMENT_WINDOW, SAMPLE_INTERVAL,
};
use log::{error, info};

/// Only the display options survive a restart; samples and the chart mode
/// start fresh on every launch.
#[derive(Default, serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct ResourceMonitorApp {
    #[serde(skip)]
    state: DisplayState,
    options: DisplayOptions,
    #[serde(skip)]
    show_options: bool,
    #[serde(skip)]
    scheduler: Option<Scheduler>,
    #[serde(skip)]
    failure: Option<String>,
}

impl ResourceMonitorApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Load previous app state (if any).
        // Note that you must enable the `persistence` feature for this to work.
        let mut app: Self = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        let ctx = cc.egui_ctx.clone();
        let started = SystemSampler::new(CPU_MEASUREMENT_WINDOW).and_then(|sampler| {
            info!("Measuring CPU over {:?}", sampler.measurement_window());
            Scheduler::spawn(sampler, SAMPLE_INTERVAL, move || ctx.request_repaint())
        });
        match started {
            Ok(scheduler) => app.scheduler = Some(scheduler),
            Err(err) => {
                error!("Could not start sampling: {err}");
                app.failure = Some(err.to_string());
            }
        }

        app
    }

    /// Records whatever the sampler thread has delivered. Returns true if a
    /// sample was recorded this frame.
    fn update_metrics(&mut self) -> bool {
        let Some(scheduler) = &self.scheduler else {
            return false;
        };

        let mut recorded = false;
        let mut failure = None;
        while let Some(result) = scheduler.poll() {
            match result {
                Ok(sample) => {
                    self.state.record(sample);
                    recorded = true;
                }
                Err(err) => {
                    failure = Some(err);
                    break;
                }
            }
        }

        if let Some(err) = failure {
            error!("Stopped updating: {err}");
            self.failure = Some(err.to_string());
            self.scheduler = None;
        }
        recorded
    }
}

impl eframe::App for ResourceMonitorApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let recorded = self.update_metrics();

        egui::TopBottomPanel::top("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.strong("Resource Monitor");
                ui.separator();
                show_status(ui, self.scheduler.as_ref());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.toggle_value(&mut self.show_options, "Display…");
                    egui::widgets::global_theme_preference_buttons(ui);
                });
            });
        });

        show_display_options(ctx, &mut self.show_options, &mut self.options, self.state.history());

        egui::TopBottomPanel::bottom("mode_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            let mut mode = self.state.mode();
            if show_mode_selector(ui, &mut mode) {
                info!("Switched chart to {:?}", mode);
                self.state.set_mode(mode);
            }
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            show_dashboard(ui, &self.state, &self.options, self.failure.as_deref());
        });

        if recorded {
            if let Some(scheduler) = &self.scheduler {
                scheduler.rendered();
            }
        }
    }
}
