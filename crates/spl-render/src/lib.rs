pub mod app;
pub mod colormap;
pub mod heatmap_view;
pub mod profile_view;
pub mod renderer;
pub mod ui;

use app::App;
use winit::event_loop::{ControlFlow, EventLoop};

/// Launch the interactive visualizer. Blocks until the window closes.
pub fn run() {
    let event_loop = EventLoop::new().expect("failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new();
    event_loop
        .run_app(&mut app)
        .expect("event loop terminated with an error");
}
