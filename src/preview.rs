use std::num::NonZeroU32;

use anyhow::anyhow;
use log::{error, info};
use maze::Snapshot;
use softbuffer::{Context, Surface};
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

/// Opens a window showing `chart`. Escape closes it, R asks `regenerate` for a new chart.
///
/// Never returns once the window is up; errors only come from setting it up.
pub(crate) fn show<F>(chart: Snapshot, mut regenerate: F) -> anyhow::Result<()>
where
    F: FnMut() -> anyhow::Result<Snapshot> + 'static,
{
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("charty")
        .with_inner_size(PhysicalSize::new(chart.width() as u32, chart.height() as u32))
        .build(&event_loop)
        .map_err(|e| anyhow!("couldn't open a window: {e}"))?;

    #[cfg(target_arch = "wasm32")]
    attach_canvas(&window)?;

    // softbuffer needs the window to outlive the surface. `run` never returns, so it does.
    let context = unsafe { Context::new(&window) }.map_err(|e| anyhow!("{e}"))?;
    let mut surface = unsafe { Surface::new(&context, &window) }.map_err(|e| anyhow!("{e}"))?;
    let mut chart = chart;
    info!("Previewing {}x{} chart, press R for another", chart.width(), chart.height());

    event_loop.run(move |event, _, control_flow| {
        control_flow.set_wait();

        match event {
            Event::RedrawRequested(window_id) if window_id == window.id() => {
                if let Err(e) = draw(&window, &mut surface, &chart) {
                    error!("Couldn't draw chart: {e}");
                    control_flow.set_exit();
                }
            }
            Event::WindowEvent { window_id, event } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => control_flow.set_exit(),
                WindowEvent::KeyboardInput {
                    input: KeyboardInput {
                        state: ElementState::Pressed,
                        virtual_keycode: Some(key),
                        ..
                    },
                    ..
                } => match key {
                    VirtualKeyCode::Escape => control_flow.set_exit(),
                    VirtualKeyCode::R => match regenerate() {
                        Ok(next) => {
                            chart = next;
                            window.request_redraw();
                        }
                        Err(e) => error!("Couldn't generate a new chart: {e}"),
                    },
                    _ => {}
                },
                _ => {}
            },
            _ => {}
        }
    })
}

/// Stretches the chart over the whole window, nearest neighbour.
/// softbuffer pixels are `0x00RRGGBB`, which is exactly what the chart holds.
fn draw(window: &Window, surface: &mut Surface, chart: &Snapshot) -> anyhow::Result<()> {
    let size = window.inner_size();
    let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
        // Minimised.
        return Ok(());
    };
    surface.resize(width, height).map_err(|e| anyhow!("{e}"))?;

    let (width, height) = (width.get() as usize, height.get() as usize);
    let mut buffer = surface.buffer_mut().map_err(|e| anyhow!("{e}"))?;
    for y in 0..height {
        let chart_y = y * chart.height() / height;
        for x in 0..width {
            buffer[y * width + x] = chart.get(x * chart.width() / width, chart_y);
        }
    }
    buffer.present().map_err(|e| anyhow!("{e}"))?;
    Ok(())
}

/// winit makes a canvas on the web but leaves placing it to us.
#[cfg(target_arch = "wasm32")]
fn attach_canvas(window: &Window) -> anyhow::Result<()> {
    use winit::platform::web::WindowExtWebSys;

    web_sys::window()
        .and_then(|win| win.document())
        .and_then(|document| document.body())
        .and_then(|body| body.append_child(&window.canvas()).ok())
        .map(|_| ())
        .ok_or_else(|| anyhow!("couldn't append canvas to document body"))
}
