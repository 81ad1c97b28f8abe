use std::time::{Duration, Instant};
use winit::dpi::LogicalSize;
use winit::event::*;
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use wave_core::{Viewport, WaveConfig, WaveEngine, TICK_INTERVAL_MS};

mod gpu;
mod mesh;

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Wave field (native)")
        .with_inner_size(LogicalSize::new(1280.0, 1000.0))
        .build(&event_loop)?;

    let size = window.inner_size();
    let viewport = Viewport::new(size.width, size.height);
    let mut engine = WaveEngine::new(WaveConfig::default(), viewport)?;
    let mut state = pollster::block_on(gpu::GpuState::new(&window))?;

    let clock = Instant::now();
    let interval = Duration::from_millis(TICK_INTERVAL_MS as u64);
    let mut next_tick = clock;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => {
            state.resize(size);
            engine.resize(Viewport::new(size.width, size.height));
        }
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::WindowEvent {
            event: WindowEvent::RedrawRequested,
            ..
        } => match state.render(&engine) {
            Ok(_) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                state.resize(state.window.inner_size())
            }
            Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
            Err(e) => log::warn!("[render] {e:?}"),
        },
        Event::AboutToWait => {
            let now = Instant::now();
            if now >= next_tick {
                let report = engine.tick_at(now.duration_since(clock).as_secs_f64() * 1000.0);
                if report.wrapped > 0 {
                    log::debug!("[scene] {} layer(s) wrapped", report.wrapped);
                }
                next_tick = now + interval;
                state.window.request_redraw();
            }
            elwt.set_control_flow(ControlFlow::WaitUntil(next_tick));
        }
        _ => {}
    })?;
    Ok(())
}
