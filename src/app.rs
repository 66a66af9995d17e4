// src/app.rs
use std::sync::mpsc::{self, Receiver};

use eframe::egui;

use crate::api::worker::{ApiEvent, ApiHandle};
use crate::api::ApiClient;
use crate::state::{AppState, BackendStatus, Screen};
use crate::ui;

pub struct VigilApp {
    state: AppState,
    api: ApiHandle,
    events: Receiver<ApiEvent>,
}

impl VigilApp {
    pub fn new(cc: &eframe::CreationContext<'_>, base_url: String) -> Self {
        let (tx, rx) = mpsc::channel();
        let api = ApiHandle::new(ApiClient::new(base_url), tx, cc.egui_ctx.clone());

        // Probe the backend and fetch its configuration on startup.
        api.check_health();
        api.load_config();

        Self {
            state: AppState::new(),
            api,
            events: rx,
        }
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            // A finished analysis is followed by a results reload.
            if self.state.apply_event(event) {
                self.api.load_results();
            }
        }
    }

    fn show_menu(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.strong("Vigil");
            ui.separator();

            let tabs = [
                (Screen::Dashboard, "Dashboard"),
                (Screen::Results, "Results"),
                (Screen::Configuration, "Configuration"),
            ];
            for (screen, label) in tabs {
                if ui
                    .selectable_label(self.state.current_screen == screen, label)
                    .clicked()
                {
                    self.state.current_screen = screen;
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let (color, label) = match self.state.backend_status {
                    BackendStatus::Connected => match &self.state.backend_version {
                        Some(version) => (ui::SUCCESS, format!("Connected (v{})", version)),
                        None => (ui::SUCCESS, "Connected".to_owned()),
                    },
                    BackendStatus::Offline => (ui::DANGER, "Offline".to_owned()),
                    BackendStatus::Unknown => {
                        (egui::Color32::GRAY, "Connecting...".to_owned())
                    }
                };
                ui.colored_label(color, format!("● {}", label));
                ui.weak(self.api.base_url());
            });
        });
    }
}

impl eframe::App for VigilApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events();
        self.state.prune_notices();
        if let Some(wait) = self.state.next_notice_expiry() {
            ctx.request_repaint_after(wait);
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.show_menu(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui::notices::show_notices(ui, &mut self.state);
            match self.state.current_screen {
                Screen::Dashboard => {
                    ui::dashboard::show_dashboard_view(ui, &mut self.state, &self.api)
                }
                Screen::Results => ui::results::show_results_view(ui, &mut self.state, &self.api),
                Screen::Configuration => {
                    ui::configuration::show_configuration_view(ui, &mut self.state, &self.api)
                }
            }
        });

        ui::detail_dialog::show_user_details_window(ctx, &mut self.state);
        ui::show_loading_overlay(ctx, &self.state.loading);
    }
}
