//! The eframe application hosting the Proton controller.

use eframe::egui;
use proton::{DrawList, FrameOutcome, ProtonConfig, SimulationController};

use crate::input::translate;
use crate::painter::{color32, paint};

pub struct ViewerApp {
    controller: SimulationController<DrawList>,
    background: egui::Color32,
    closing: bool,
}

impl ViewerApp {
    pub fn new(config: ProtonConfig) -> Self {
        let background = color32(config.background_color);
        Self {
            controller: SimulationController::new(config, DrawList::new()),
            background,
            closing: false,
        }
    }

    fn forward_input(&self, ctx: &egui::Context) {
        let (events, close_requested) =
            ctx.input(|i| (i.events.clone(), i.viewport().close_requested()));
        let queue = self.controller.event_queue();
        for event in events.iter().filter_map(translate) {
            queue.push(event);
        }
        if close_requested {
            queue.push(proton::InputEvent::CloseRequested);
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.closing {
            return;
        }
        self.forward_input(ctx);

        if self.controller.frame() == FrameOutcome::Shutdown {
            log::info!(
                "shutting down after {} frames",
                self.controller.frame_count()
            );
            self.closing = true;
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let commands = self
            .controller
            .engine_mut()
            .surface_mut()
            .map(DrawList::take_commands)
            .unwrap_or_default();

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(self.background))
            .show(ctx, |ui| paint(ui.painter(), &commands));

        ctx.request_repaint();
    }
}
