// egui control panel: the two beam sliders plus view toggles.

use spl_core::constants::{
    COVERAGE_MAX_DEG, COVERAGE_MIN_DEG, ROTATION_MAX_DEG, ROTATION_MIN_DEG,
};
use spl_core::SplParams;

/// UI-only state that doesn't belong in SplParams. Toggling any of
/// these redraws but never recomputes the field.
pub struct UiState {
    pub show_marker: bool,
    pub show_beam_edges: bool,
    pub show_profile: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            show_marker: true,
            show_beam_edges: true,
            show_profile: true,
        }
    }
}

/// Draw the right-side control panel. Returns `true` if a beam
/// parameter changed (meaning the field needs to be re-evaluated).
pub fn draw_controls(
    ctx: &egui::Context,
    params: &mut SplParams,
    ui_state: &mut UiState,
) -> bool {
    let mut changed = false;

    egui::SidePanel::right("controls")
        .min_width(260.0)
        .show(ctx, |ui| {
            ui.heading("Beam Parameters");
            ui.separator();

            ui.label("Coverage (°)");
            let mut coverage = params.coverage_deg as f32;
            if ui
                .add(egui::Slider::new(
                    &mut coverage,
                    COVERAGE_MIN_DEG as f32..=COVERAGE_MAX_DEG as f32,
                ))
                .changed()
            {
                params.coverage_deg = coverage as f64;
                changed = true;
            }

            ui.label("Rotation (°)");
            let mut rotation = params.rotation_deg as f32;
            if ui
                .add(egui::Slider::new(
                    &mut rotation,
                    ROTATION_MIN_DEG as f32..=ROTATION_MAX_DEG as f32,
                ))
                .changed()
            {
                params.rotation_deg = rotation as f64;
                changed = true;
            }

            ui.label(format!(
                "Beam edges at {:+.1}° / {:+.1}° from vertical",
                params.rotation_deg - params.coverage_deg / 2.0,
                params.rotation_deg + params.coverage_deg / 2.0,
            ));

            ui.separator();

            if ui.add(egui::Button::new("Reset Beam")).clicked() {
                *params = SplParams::default();
                changed = true;
            }

            ui.separator();

            ui.heading("View");
            ui.checkbox(&mut ui_state.show_marker, "Speaker marker");
            ui.checkbox(&mut ui_state.show_beam_edges, "Beam edge guides");
            ui.checkbox(&mut ui_state.show_profile, "On-axis falloff plot");
        });

    changed
}
