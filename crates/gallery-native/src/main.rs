use clap::Parser;
use gallery_core::input::{normalize_wheel, scroll_delta, WheelDeltaMode};
use gallery_core::{Gallery, GalleryError};
use gallery_native::{Args, FileSource};
use gallery_render::GpuState;
use std::sync::Arc;
use std::time::Instant;
use winit::{
    dpi::LogicalSize,
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

// Keyboard scrub step for the intro progress.
const PROGRESS_NUDGE: f32 = 0.05;

type NativeGallery = Gallery<GpuState<'static>>;

fn on_wheel(
    gallery: &mut NativeGallery,
    window: &winit::window::Window,
    delta: MouseScrollDelta,
) {
    // winit reports "scroll up" as positive; the DOM convention is the reverse.
    let wheel = match delta {
        MouseScrollDelta::LineDelta(x, y) => {
            normalize_wheel(-x as f64, -y as f64, WheelDeltaMode::Line)
        }
        MouseScrollDelta::PixelDelta(p) => {
            let logical = p.to_logical::<f64>(window.scale_factor());
            normalize_wheel(-logical.x, -logical.y, WheelDeltaMode::Pixel)
        }
    };
    let viewport_h = window.inner_size().height as f64 / window.scale_factor();
    let view_h = gallery.host().visible_size().height;
    gallery.scroll_by(scroll_delta(wheel.pixel_y, view_h, viewport_h));
}

fn on_key(gallery: &mut NativeGallery, key: &Key) -> Result<(), GalleryError> {
    match key {
        Key::Named(NamedKey::Space) => {
            gallery.trigger_intro()?;
        }
        Key::Character(c) => match c.as_str() {
            "r" | "R" => gallery.reset_intro()?,
            "[" => gallery.set_intro_progress(gallery.intro_progress() - PROGRESS_NUDGE)?,
            "]" => gallery.set_intro_progress(gallery.intro_progress() + PROGRESS_NUDGE)?,
            _ => {}
        },
        _ => {}
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();
    let config = args.gallery_config()?;

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Instanced Gallery (native)")
            .with_inner_size(LogicalSize::new(1280.0, 800.0))
            .build(&event_loop)?,
    );
    let size = window.inner_size();
    let gpu = pollster::block_on(GpuState::new(
        Arc::clone(&window),
        size.width,
        size.height,
    ))?;

    let mut gallery = Gallery::new(config, gpu)?;
    // Disk reads are quick enough to finish before the first frame.
    pollster::block_on(gallery.load(&FileSource))?;
    log::info!(
        "[native] gallery {} ({} images)",
        gallery.state(),
        gallery.images().len()
    );

    let mut last_frame = Instant::now();
    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => {
                gallery.dispose();
                elwt.exit();
            }
            WindowEvent::Resized(size) => {
                gallery.host_mut().resize_if_needed(size.width, size.height);
            }
            WindowEvent::MouseWheel { delta, .. } => on_wheel(&mut gallery, &window, delta),
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                if let Err(e) = gallery.trigger_intro() {
                    log::warn!("[native] intro trigger: {e}");
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                if logical_key == Key::Named(NamedKey::Escape) {
                    elwt.exit();
                } else if let Err(e) = on_key(&mut gallery, &logical_key) {
                    log::warn!("[native] key {:?}: {e}", logical_key);
                }
            }
            _ => {}
        },
        Event::AboutToWait => {
            let now = Instant::now();
            gallery.update(now - last_frame);
            last_frame = now;
            match gallery.host_mut().render() {
                Ok(_) => window.request_redraw(),
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    gallery.host_mut().reconfigure()
                }
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("[native] frame skipped: {e:?}"),
            }
        }
        _ => {}
    })?;
    Ok(())
}
