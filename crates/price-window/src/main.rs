// File: crates/price-window/src/main.rs
// Summary: Windowed demo that renders the price curve to a window via RGBA blit (CPU) using winit + softbuffer.

mod slider;

use std::num::NonZeroU32;

use anyhow::{Context, Result};
use price_chart::{theme, RenderOptions};
use pricing_core::{PresentationAdapter, PricingConfig, RenderInstruction};
use slider::{Slider, Step};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};
use winit::event::{ElementState, Event, KeyboardInput, MouseButton, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Arg: optional TOML config path
    let config = match std::env::args().nth(1) {
        Some(path) => PricingConfig::load(&path).with_context(|| format!("loading config {path}"))?,
        None => PricingConfig::default(),
    };
    let (params, domain) = config.validate().context("invalid pricing configuration")?;
    let adapter = PresentationAdapter::new(params, domain, config.domain.default)?;

    let opts = RenderOptions {
        width: config.chart.width,
        height: config.chart.height,
        theme: theme::find(&config.chart.theme),
        ..RenderOptions::default()
    };
    let mut slider = Slider::new(adapter, opts);

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(title(&slider.instruction()))
        .with_inner_size(winit::dpi::PhysicalSize::new(config.chart.width.max(1) as u32, config.chart.height.max(1) as u32))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;

    let size = window.inner_size();
    slider.resize(size.width, size.height);
    info!(selected = slider.instruction().selected_group_size, "window ready");

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        let changed = match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                    None
                }
                WindowEvent::Resized(new_size) => {
                    slider.resize(new_size.width, new_size.height);
                    window.request_redraw();
                    None
                }
                WindowEvent::CursorMoved { position, .. } => slider.pointer_moved(position.x, position.y),
                WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => {
                    slider.pointer_button(state == ElementState::Pressed)
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => match key {
                    VirtualKeyCode::Left => slider.key(Step::Back),
                    VirtualKeyCode::Right => slider.key(Step::Forward),
                    VirtualKeyCode::Down => slider.key(Step::PageBack),
                    VirtualKeyCode::Up => slider.key(Step::PageForward),
                    VirtualKeyCode::Escape => {
                        *cf = ControlFlow::Exit;
                        None
                    }
                    _ => None,
                },
                _ => None,
            },
            Event::RedrawRequested(_) => {
                if let Err(e) = draw(&slider, &mut surface) {
                    error!("redraw failed: {e:#}");
                }
                None
            }
            _ => None,
        };

        if let Some(ins) = changed {
            window.set_title(&title(&ins));
            window.request_redraw();
        }
    })
}

fn title(ins: &RenderInstruction) -> String {
    format!(
        "Group price: {} people · {} per person · {} total",
        ins.selected_group_size, ins.formatted_price_per_person, ins.formatted_total_cost
    )
}

fn draw(slider: &Slider, surface: &mut softbuffer::Surface) -> Result<()> {
    let (w, h) = (slider.opts.width as u32, slider.opts.height as u32);
    let (nw, nh) = match (NonZeroU32::new(w), NonZeroU32::new(h)) {
        (Some(nw), Some(nh)) => (nw, nh),
        _ => return Ok(()),
    };
    surface.resize(nw, nh).map_err(|e| anyhow::anyhow!("resize: {e}"))?;

    let (rgba, _, _, _) = slider.chart().render_to_rgba8(&slider.opts)?;
    let mut frame = surface.buffer_mut().map_err(|e| anyhow::anyhow!("frame: {e}"))?;
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
        // softbuffer wants 0RGB
        *dst = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
    }
    frame.present().map_err(|e| anyhow::anyhow!("present: {e}"))?;
    Ok(())
}
