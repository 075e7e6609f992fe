// ApplicationHandler, event loop, state orchestration.

use std::cell::Cell;

use egui_winit_vulkano::{Gui, GuiConfig};
use spl_core::grid::Grid;
use spl_core::{Speaker, SplParams, SplResult};
use vulkano::sync::GpuFuture;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    window::WindowId,
};

use crate::{heatmap_view::HeatmapView, profile_view, renderer::Renderer, ui, ui::UiState};

pub struct App {
    renderer: Option<Renderer>,
    gui: Option<Gui>,
    /// Fixed sampling of the listening plane. Never changes after startup.
    grid: Grid,
    speaker: Speaker,
    params: SplParams,
    ui_state: UiState,
    result: SplResult,
    heatmap: HeatmapView,
}

impl App {
    pub fn new() -> Self {
        let grid = Grid::listening_plane();
        let speaker = Speaker::default();
        let params = SplParams::default();
        let result = spl_core::compute(&grid, &speaker, &params);

        Self {
            renderer: None,
            gui: None,
            grid,
            speaker,
            params,
            ui_state: UiState::default(),
            result,
            heatmap: HeatmapView::new(),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let renderer = Renderer::new(event_loop);

        let gui = Gui::new(
            event_loop,
            renderer.surface.clone(),
            renderer.queue.clone(),
            renderer.swapchain_format(),
            GuiConfig {
                is_overlay: false,
                ..Default::default()
            },
        );

        self.renderer = Some(renderer);
        self.gui = Some(gui);

        // Request the very first frame.
        self.renderer.as_ref().unwrap().window.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui process the event first.
        if let Some(gui) = self.gui.as_mut() {
            gui.update(&event);
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(_) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.recreate_swapchain = true;
                }
            }
            WindowEvent::RedrawRequested => {
                self.render_frame();
                return; // already rendering — no need to request another redraw
            }
            _ => {}
        }

        // Any input / resize event means egui state may have changed — repaint.
        if let Some(renderer) = self.renderer.as_ref() {
            renderer.window.request_redraw();
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // Intentionally empty — only repaint in response to window events so
        // the event loop sleeps when idle instead of busy-looping at 100 % CPU.
    }
}

impl App {
    fn render_frame(&mut self) {
        let renderer = match self.renderer.as_mut() {
            Some(r) => r,
            None => return,
        };

        let (image_index, acquire_future) = match renderer.begin_frame() {
            Some(r) => r,
            None => return,
        };

        let before_future = renderer.take_previous_frame_end().join(acquire_future);

        // Run the egui immediate-mode UI. Panels draw the previous
        // field; a parameter change recomputes it below.
        let changed = Cell::new(false);
        {
            let gui = match self.gui.as_mut() {
                Some(g) => g,
                None => return,
            };
            let grid = &self.grid;
            let speaker = &self.speaker;
            let params = &mut self.params;
            let ui_state = &mut self.ui_state;
            let result = &self.result;
            let heatmap = &mut self.heatmap;

            gui.immediate_ui(|gui| {
                let ctx = gui.context();
                let c = ui::draw_controls(&ctx, params, ui_state);
                if ui_state.show_profile {
                    profile_view::draw_profile(&ctx, result);
                }
                heatmap.draw(&ctx, grid, speaker, params, result, ui_state);
                changed.set(c);
            });
        }

        // Re-evaluate the field if a slider moved. Runs inline — a
        // 200×200 closed-form evaluation is far cheaper than a frame.
        if changed.get() {
            self.result = spl_core::compute(&self.grid, &self.speaker, &self.params);
            self.heatmap.invalidate();
            // This frame was drawn with the old field; schedule one more
            // so the updated heatmap is shown without waiting for input.
            if let Some(r) = self.renderer.as_ref() {
                r.window.request_redraw();
            }
        }

        // Draw egui onto the swapchain image.
        let renderer = match self.renderer.as_ref() {
            Some(r) => r,
            None => return,
        };
        let image_view = renderer.image_views[image_index as usize].clone();
        let gui = match self.gui.as_mut() {
            Some(g) => g,
            None => return,
        };
        let after_future = gui.draw_on_image(before_future, image_view);

        // Present.
        let renderer = match self.renderer.as_mut() {
            Some(r) => r,
            None => return,
        };
        let final_future = renderer.present(after_future, image_index);
        renderer.end_frame(final_future);
    }
}
