use crate::animation::FigurePose;
use crate::settings::Settings;

/// Overlay state that does not persist across runs.
pub struct Ui {
    paused: bool,
}

pub struct UiResponse {
    pub reset_camera: bool,
    pub colors_changed: bool,
}

impl Ui {
    pub fn new() -> Self {
        Self { paused: false }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn show(
        &mut self,
        ctx: &egui::Context,
        settings: &mut Settings,
        camera: (f32, f32),
        pose: &FigurePose,
    ) -> UiResponse {
        let mut response = UiResponse {
            reset_camera: false,
            colors_changed: false,
        };

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                let pause_label = if self.paused { "▶ Resume" } else { "⏸ Pause" };
                if ui.button(pause_label).clicked() {
                    self.paused = !self.paused;
                }

                ui.separator();

                let controls_label = if settings.ui.show_controls {
                    "✅ Controls"
                } else {
                    "Controls"
                };
                if ui.button(controls_label).clicked() {
                    settings.ui.show_controls = !settings.ui.show_controls;
                    settings.ui.save();
                }

                ui.separator();
                ui.label(format!(
                    "orbit {:.1}°  swing {:.0}°",
                    pose.orbit_deg, pose.swing_deg
                ));
            });
        });

        let mut show_controls = settings.ui.show_controls;
        egui::Window::new("Controls")
            .open(&mut show_controls)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Arrow keys tilt the scene.");
                ui.label(format!("Tilt: {:.0}° / {:.0}°", camera.0, camera.1));
                if ui.button("Reset camera").clicked() {
                    response.reset_camera = true;
                }

                ui.separator();

                if ui
                    .checkbox(&mut settings.display.show_path, "Show path disc")
                    .changed()
                {
                    settings.display.save();
                }

                ui.horizontal(|ui| {
                    if ui
                        .color_edit_button_rgb(&mut settings.colors.background_color)
                        .changed()
                    {
                        response.colors_changed = true;
                    }
                    ui.label("Background");
                });
                ui.horizontal(|ui| {
                    if ui
                        .color_edit_button_rgb(&mut settings.colors.path_color)
                        .changed()
                    {
                        response.colors_changed = true;
                    }
                    ui.label("Path disc");
                });

                if response.colors_changed {
                    settings.colors.save();
                }
            });
        if show_controls != settings.ui.show_controls {
            settings.ui.show_controls = show_controls;
            settings.ui.save();
        }

        response
    }
}
