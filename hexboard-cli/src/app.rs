//! eframe application: one game frame per repaint

use hexboard_core::{draw_scene, FrameInput, Point, TurnController, WindowConfig};

use crate::surface::{PainterSurface, BACKGROUND};

pub struct HexApp {
    controller: TurnController,
    window: WindowConfig,
}

impl HexApp {
    pub fn new(controller: TurnController, window: WindowConfig) -> Self {
        Self { controller, window }
    }
}

impl eframe::App for HexApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let input = read_input(ctx);
        let report = self.controller.frame(input);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(BACKGROUND))
            .show(ctx, |ui| {
                let mut surface = PainterSurface::new(ui.painter());
                draw_scene(self.controller.session(), report.hovered, &self.window, &mut surface);
            });

        // Keep the frame loop running for hover feedback
        ctx.request_repaint();
    }
}

/// Sample this frame's restart key, pointer position and button release
fn read_input(ctx: &egui::Context) -> FrameInput {
    ctx.input(|i| FrameInput {
        restart_pressed: i.key_pressed(egui::Key::R),
        pointer: i.pointer.hover_pos().map(|p| Point::new(p.x, p.y)),
        primary_released: i.pointer.primary_released(),
    })
}
