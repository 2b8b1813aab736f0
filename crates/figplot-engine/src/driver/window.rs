use std::num::NonZeroU32;
use std::rc::Rc;

use anyhow::Context as _;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowId};

use crate::error::{Error, Result};
use crate::figure::Figure;
use crate::paint::Color;

use super::Driver;

/// Window configuration.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "figplot".to_string(),
            initial_size: LogicalSize::new(640.0, 480.0),
        }
    }
}

/// Shows the figure in a window and blocks until the window is closed.
///
/// The figure is re-rasterized at the window's physical size on every redraw,
/// so resizing keeps it scaled to fit.
#[derive(Debug, Clone, Default)]
pub struct WindowDriver {
    config: WindowConfig,
}

impl Driver for WindowDriver {
    fn present(&mut self, figure: &Figure) -> Result<()> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut viewer = Viewer::new(self.config.clone(), figure.clone());

        event_loop
            .run_app(&mut viewer)
            .context("winit event loop terminated with error")?;

        match viewer.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Window plus the software surface that presents into it.
struct View {
    window: Rc<Window>,
    _context: softbuffer::Context<Rc<Window>>,
    surface: softbuffer::Surface<Rc<Window>, Rc<Window>>,
}

struct Viewer {
    config: WindowConfig,
    figure: Figure,
    view: Option<View>,
    error: Option<Error>,
}

impl Viewer {
    fn new(config: WindowConfig, figure: Figure) -> Self {
        Self {
            config,
            figure,
            view: None,
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: Error) {
        log::error!("window output failed: {err}");
        self.error = Some(err);
        event_loop.exit();
    }

    fn create_view(&self, event_loop: &ActiveEventLoop) -> Result<View> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = Rc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );
        let context = softbuffer::Context::new(window.clone())?;
        let surface = softbuffer::Surface::new(&context, window.clone())?;

        Ok(View {
            window,
            _context: context,
            surface,
        })
    }

    fn redraw(&mut self) -> Result<()> {
        let Some(view) = self.view.as_mut() else {
            return Ok(());
        };

        let size = view.window.inner_size();
        // Minimized windows report a zero size; nothing to draw.
        let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
            return Ok(());
        };

        view.surface.resize(w, h)?;
        let pixmap = self.figure.rasterize(size.width, size.height)?;

        let mut buffer = view.surface.buffer_mut()?;
        for (dst, src) in buffer.iter_mut().zip(pixmap.pixels()) {
            *dst = Color::from(src.demultiply()).to_0rgb();
        }

        view.window.pre_present_notify();
        buffer.present()?;
        Ok(())
    }
}

impl ApplicationHandler for Viewer {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.view.is_some() {
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        match self.create_view(event_loop) {
            Ok(view) => {
                log::debug!("window opened: {:?}", view.window.id());
                view.window.request_redraw();
                self.view = Some(view);
            }
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::debug!("window closed");
                self.view = None;
                event_loop.exit();
            }

            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed
                    && event.logical_key == Key::Named(NamedKey::Escape) =>
            {
                self.view = None;
                event_loop.exit();
            }

            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(view) = &self.view {
                    view.window.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => {
                if let Err(err) = self.redraw() {
                    self.fail(event_loop, err);
                }
            }

            _ => {}
        }
    }
}
