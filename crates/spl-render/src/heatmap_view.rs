// SPL heatmap with colorbar and overlays, drawn in the central panel.

use egui::{
    pos2, vec2, Align2, Color32, ColorImage, FontId, Pos2, Rect, Sense, Stroke, TextureHandle,
    TextureOptions,
};
use spl_core::constants::{COLOR_SCALE_MAX_DB, COLOR_SCALE_MIN_DB};
use spl_core::grid::Grid;
use spl_core::{Speaker, SplParams, SplResult};

use crate::colormap::{inferno, spl_to_color};
use crate::ui::UiState;

/// Width of the colorbar strip plus its tick labels, in points.
const COLORBAR_WIDTH: f32 = 64.0;

/// Heatmap panel. Owns the GPU texture of the current field and
/// re-uploads it only after a recomputation invalidates it.
pub struct HeatmapView {
    texture: Option<TextureHandle>,
}

impl HeatmapView {
    pub fn new() -> Self {
        Self { texture: None }
    }

    /// Drop the cached texture; the next draw re-uploads from the
    /// current field.
    pub fn invalidate(&mut self) {
        self.texture = None;
    }

    /// Color-map the field into an RGB image. Screen rows run top-down
    /// while the grid's distance axis grows upward, so rows are
    /// flipped here.
    fn field_image(result: &SplResult) -> ColorImage {
        let (rows, cols) = result.spl.dim();
        let mut rgb = Vec::with_capacity(rows * cols * 3);
        for r in (0..rows).rev() {
            for c in 0..cols {
                let color = spl_to_color(result.spl[[r, c]]);
                rgb.extend_from_slice(&[color.r(), color.g(), color.b()]);
            }
        }
        ColorImage::from_rgb([cols, rows], &rgb)
    }

    pub fn draw(
        &mut self,
        ctx: &egui::Context,
        grid: &Grid,
        speaker: &Speaker,
        params: &SplParams,
        result: &SplResult,
        ui_state: &UiState,
    ) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Loudspeaker Coverage & SPL Drop-off");

            let texture = self.texture.get_or_insert_with(|| {
                ctx.load_texture("spl_field", Self::field_image(result), TextureOptions::LINEAR)
            });

            let available = ui.available_size();
            let (response, painter) = ui.allocate_painter(available, Sense::hover());
            let rect = response.rect;

            // Square map area, leaving room for the colorbar on the
            // right and tick labels below.
            let side = (rect.width() - COLORBAR_WIDTH - 16.0).min(rect.height() - 20.0);
            if side <= 0.0 {
                return;
            }
            let map_rect = Rect::from_min_size(rect.min, vec2(side, side));

            painter.image(
                texture.id(),
                map_rect,
                Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                Color32::WHITE,
            );

            let to_screen = |wx: f64, wy: f64| -> Pos2 {
                let u = ((wx - grid.x_min) / grid.width()) as f32;
                let v = ((wy - grid.y_min) / grid.depth()) as f32;
                pos2(
                    map_rect.left() + u * map_rect.width(),
                    map_rect.bottom() - v * map_rect.height(),
                )
            };

            if ui_state.show_beam_edges {
                draw_beam_edges(&painter, map_rect, speaker, params, grid, &to_screen);
            }
            if ui_state.show_marker {
                draw_speaker_marker(&painter, speaker, &to_screen);
            }
            draw_axis_labels(&painter, map_rect, grid);
            draw_colorbar(&painter, map_rect);
        });
    }
}

/// Dashed-out guide rays along the two edges of the coverage cone.
fn draw_beam_edges(
    painter: &egui::Painter,
    map_rect: Rect,
    speaker: &Speaker,
    params: &SplParams,
    grid: &Grid,
    to_screen: &dyn Fn(f64, f64) -> Pos2,
) {
    let clipped = painter.with_clip_rect(map_rect);
    let stroke = Stroke::new(1.0, Color32::from_white_alpha(96));
    let reach = 2.0 * grid.depth();

    for edge in [
        params.rotation_deg - params.coverage_deg / 2.0,
        params.rotation_deg + params.coverage_deg / 2.0,
    ] {
        let (sin_e, cos_e) = edge.to_radians().sin_cos();
        let from = to_screen(speaker.position[0], speaker.position[1]);
        let to = to_screen(
            speaker.position[0] + sin_e * reach,
            speaker.position[1] + cos_e * reach,
        );
        clipped.line_segment([from, to], stroke);
    }
}

/// White dot at the source, with a small legend label.
fn draw_speaker_marker(
    painter: &egui::Painter,
    speaker: &Speaker,
    to_screen: &dyn Fn(f64, f64) -> Pos2,
) {
    let center = to_screen(speaker.position[0], speaker.position[1]);
    painter.circle_filled(center, 5.0, Color32::WHITE);
    painter.circle_stroke(center, 5.0, Stroke::new(1.0, Color32::BLACK));
    painter.text(
        center + vec2(10.0, 0.0),
        Align2::LEFT_CENTER,
        "Speaker",
        FontId::proportional(12.0),
        Color32::WHITE,
    );
}

/// Axis captions and corner ticks in metres, mirroring the plane
/// bounds the field was sampled over.
fn draw_axis_labels(painter: &egui::Painter, map_rect: Rect, grid: &Grid) {
    let font = FontId::proportional(11.0);
    let color = Color32::GRAY;

    painter.text(
        pos2(map_rect.center().x, map_rect.bottom() + 4.0),
        Align2::CENTER_TOP,
        format!("Width (m): {:.0} … {:.0}", grid.x_min, grid.x_max),
        font.clone(),
        color,
    );
    painter.text(
        pos2(map_rect.left() + 4.0, map_rect.top() + 4.0),
        Align2::LEFT_TOP,
        format!("Distance (m): {:.0} … {:.0}", grid.y_min, grid.y_max),
        font,
        color,
    );
}

/// Vertical inferno gradient with dB ticks, fixed to the 70–105 dB
/// scale regardless of the field's actual extremes.
fn draw_colorbar(painter: &egui::Painter, map_rect: Rect) {
    let bar = Rect::from_min_size(
        pos2(map_rect.right() + 12.0, map_rect.top()),
        vec2(18.0, map_rect.height()),
    );

    let slices = 128;
    let slice_h = bar.height() / slices as f32;
    for i in 0..slices {
        // Top of the bar is the top of the scale.
        let t = 1.0 - (i as f64 + 0.5) / slices as f64;
        let top = bar.top() + i as f32 * slice_h;
        painter.rect_filled(
            Rect::from_min_size(pos2(bar.left(), top), vec2(bar.width(), slice_h + 1.0)),
            0.0,
            inferno(t),
        );
    }

    let font = FontId::proportional(10.0);
    let span = COLOR_SCALE_MAX_DB - COLOR_SCALE_MIN_DB;
    let mut db = COLOR_SCALE_MIN_DB;
    while db <= COLOR_SCALE_MAX_DB {
        let v = ((db - COLOR_SCALE_MIN_DB) / span) as f32;
        let y = bar.bottom() - v * bar.height();
        painter.line_segment(
            [pos2(bar.right(), y), pos2(bar.right() + 3.0, y)],
            Stroke::new(1.0, Color32::GRAY),
        );
        painter.text(
            pos2(bar.right() + 5.0, y),
            Align2::LEFT_CENTER,
            format!("{db:.0}"),
            font.clone(),
            Color32::GRAY,
        );
        db += 5.0;
    }

    painter.text(
        pos2(bar.center().x, bar.top() - 4.0),
        Align2::CENTER_BOTTOM,
        "SPL (dB)",
        FontId::proportional(11.0),
        Color32::GRAY,
    );
}
