//! keystate viewer
//!
//! Opens a window, feeds its keyboard events to a `KeyTracker`, and polls the
//! watched keys once per frame. The window lights up while any watched key is
//! held. Escape closes the window unless default handling is suppressed.

use anyhow::{bail, Result};
use clap::Parser;
use softbuffer::{Context, Surface};
use std::num::NonZeroU32;
use std::rc::Rc;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use keystate::cli::CliArgs;
use keystate::winit_adapter::dispatch_window_event;
use keystate::{EventHub, KeyCodeRegistry, KeyTracker, TrackerConfig, TrackerError};

const IDLE_COLOR: u32 = 0x001e_1f22;
const HELD_COLOR: u32 = 0x0035_74f0;

struct App {
    hub: EventHub,
    tracker: KeyTracker,
    /// Watched key names and whether each was down last frame
    watched: Vec<(String, bool)>,
    window: Option<Rc<Window>>,
    /// Kept alive for as long as the surface
    _context: Option<Context<Rc<Window>>>,
    surface: Option<Surface<Rc<Window>, Rc<Window>>>,
}

impl App {
    fn new(config: &TrackerConfig) -> Self {
        let hub = EventHub::new();
        let tracker = KeyTracker::with_config(hub.clone(), config);
        let watched = config.watch.iter().map(|name| (name.clone(), false)).collect();

        Self {
            hub,
            tracker,
            watched,
            window: None,
            _context: None,
            surface: None,
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attributes = Window::default_attributes()
            .with_title("keystate")
            .with_inner_size(LogicalSize::new(480, 320));

        let window = Rc::new(event_loop.create_window(attributes)?);
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create context: {}", e))?;
        let surface = Surface::new(&context, Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {}", e))?;

        self.window = Some(window);
        self._context = Some(context);
        self.surface = Some(surface);
        Ok(())
    }

    /// Poll every watched key and log the ones that changed since last frame
    fn poll_keys(&mut self) -> Result<bool, TrackerError> {
        let mut any_held = false;
        for (name, was_held) in &mut self.watched {
            let held = self.tracker.is_pressed(name.as_str())?;
            if held != *was_held {
                tracing::info!(key = name.as_str(), held, "watched key changed");
                *was_held = held;
            }
            any_held |= held;
        }
        Ok(any_held)
    }

    fn paint(&mut self, any_held: bool) -> Result<()> {
        let (Some(window), Some(surface)) = (&self.window, &mut self.surface) else {
            return Ok(());
        };

        let size = window.inner_size();
        let (Some(width), Some(height)) =
            (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return Ok(());
        };

        surface
            .resize(width, height)
            .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;
        let mut buffer = surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to get surface buffer: {}", e))?;
        buffer.fill(if any_held { HELD_COLOR } else { IDLE_COLOR });
        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("Failed to present buffer: {}", e))?;
        Ok(())
    }

    fn redraw(&mut self) -> Result<()> {
        let any_held = self.poll_keys()?;
        self.paint(any_held)
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init_window(event_loop) {
                tracing::error!("Failed to open window: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Focused(false) => {
                // Releases that happen while unfocused never arrive
                self.tracker.reset();
            }
            WindowEvent::KeyboardInput { event: key_event, .. } => {
                let outcome = dispatch_window_event(&self.hub, &event);
                let default_prevented = outcome.is_some_and(|o| o.default_prevented);
                let is_escape_press = key_event.physical_key
                    == PhysicalKey::Code(WinitKeyCode::Escape)
                    && key_event.state == ElementState::Pressed;

                if is_escape_press && !default_prevented {
                    event_loop.exit();
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.redraw() {
                    tracing::error!("Redraw failed: {}", e);
                    event_loop.exit();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Poll);
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn print_key_table() {
    for (name, code) in KeyCodeRegistry::global().iter() {
        println!("{:>14}  {}", name, code);
    }
}

fn main() -> Result<()> {
    keystate::tracing::init();

    let args = CliArgs::parse();
    if args.list {
        print_key_table();
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => TrackerConfig::load_from(path)?,
        None => TrackerConfig::load(),
    };
    args.apply_to(&mut config);

    let unknown = config.unknown_keys();
    if !unknown.is_empty() {
        bail!(
            "Unknown key names: {} (run with --list to see valid names)",
            unknown.join(", ")
        );
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(&config);
    event_loop.run_app(&mut app)?;

    Ok(())
}
