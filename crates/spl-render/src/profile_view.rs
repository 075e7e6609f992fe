// On-axis falloff curve via egui_plot.

use egui_plot::{Legend, Line, Plot};
use spl_core::SplResult;

/// Draw the SPL-vs-distance curve along the beam axis in a bottom
/// panel. The curve is pure inverse-square falloff, so it reads as a
/// straight-ish 6 dB-per-doubling slope next to the heatmap.
pub fn draw_profile(ctx: &egui::Context, result: &SplResult) {
    egui::TopBottomPanel::bottom("profile")
        .min_height(170.0)
        .show(ctx, |ui| {
            ui.heading("On-Axis Falloff");

            let line = Line::new(result.axis_profile.clone()).name("SPL (dB)");

            Plot::new("axis_profile")
                .x_axis_label("Distance (m)")
                .y_axis_label("SPL (dB)")
                .legend(Legend::default())
                .show(ui, |plot_ui| {
                    plot_ui.line(line);
                });
        });
}
