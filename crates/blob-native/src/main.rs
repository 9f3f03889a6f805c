use std::time::{SystemTime, UNIX_EPOCH};

use blob_core::{RandomSource, Scene, SeededRandom, Tuning};
use glam::Vec2;
use instant::Instant;
use winit::{
    dpi::LogicalSize,
    event::*,
    event_loop::EventLoop,
    window::{CursorIcon, WindowBuilder},
};

mod controls;
mod gpu;

use controls::HostAction;
use gpu::GpuState;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("blobber: {e:?}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Blobber")
        .with_inner_size(LogicalSize::new(600.0, 600.0))
        .build(&event_loop)?;
    let initial_theme = window
        .theme()
        .map(controls::theme_from_window)
        .unwrap_or_default();

    let mut gpu = pollster::block_on(GpuState::new(&window))?;

    let rng = match controls::parse_seed(std::env::var(controls::SEED_ENV).ok().as_deref()) {
        Some(seed) => {
            log::info!("[config] seeded with {seed}");
            SeededRandom::from_seed(seed)
        }
        None => SeededRandom::from_entropy(),
    };
    let mut scene = Scene::with_tuning(Instant::now(), Tuning::default(), rng)?
        .with_time_offset(wall_clock_secs())
        .with_theme(initial_theme);
    log::info!("blobber starting in {}", scene.theme().label());

    // Once the user picks a theme, stop following the OS.
    let mut theme_overridden = false;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => gpu.resize(size),
            WindowEvent::CursorEntered { .. } => gpu.window().set_cursor_icon(CursorIcon::Pointer),
            WindowEvent::CursorMoved { position, .. } => {
                scene.pointer_moved(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::CursorLeft { .. } => {
                gpu.window().set_cursor_icon(CursorIcon::Default);
                scene.pointer_left();
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(action) = controls::action_for_button(button, state) {
                    apply_action(&mut scene, action, &mut theme_overridden);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let Some(action) =
                    controls::action_for_key(&event.logical_key, event.state, event.repeat)
                {
                    apply_action(&mut scene, action, &mut theme_overridden);
                }
            }
            WindowEvent::ThemeChanged(theme) if !theme_overridden => {
                scene.set_theme(Instant::now(), controls::theme_from_window(theme));
            }
            WindowEvent::RedrawRequested => {
                let uniforms = scene.shader_uniforms(Instant::now(), gpu.viewport());
                match gpu.render(&uniforms) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        gpu.reconfigure()
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("[gpu] out of memory");
                        elwt.exit();
                    }
                    Err(e) => log::warn!("[gpu] surface error: {e:?}"),
                }
            }
            _ => {}
        },
        Event::AboutToWait => gpu.window().request_redraw(),
        _ => {}
    })?;
    Ok(())
}

fn apply_action<R: RandomSource>(scene: &mut Scene<R>, action: HostAction, overridden: &mut bool) {
    let now = Instant::now();
    match action {
        HostAction::Morph => {
            scene.trigger(now);
        }
        HostAction::ToggleTheme => {
            *overridden = true;
            let theme = scene.toggle_theme(now);
            log::info!("[theme] {}", theme.label());
        }
    }
}

// Seconds since the Unix epoch; seeds the time feed's phase.
fn wall_clock_secs() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}
