use std::path::PathBuf;

use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::camera::Camera;
use crate::color::ColorRgba;
use crate::device::{Gpu, SurfaceInit};
use crate::frame_loop::{FrameLoop, LoopEvent};
use crate::input::platform::winit::translate_window_event;
use crate::input::{InputState, Key};
use crate::scene::{default_drawables, SceneConfig, SceneRenderer};
use crate::time::FrameClock;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    /// Directory holding `shaders/` and `textures/`.
    pub asset_root: PathBuf,
    pub clear_color: ColorRgba,
    /// Key that toggles wireframe rendering.
    pub wireframe_key: Key,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "atrium".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
            asset_root: PathBuf::from("assets"),
            clear_color: ColorRgba::steel_blue(),
            wireframe_key: Key::Digit(1),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window, loads the scene and runs until the window closes.
    ///
    /// Returns the first fatal error (initialization or frame failure).
    pub fn run(config: RuntimeConfig, surface_init: SurfaceInit) -> Result<()> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, surface_init);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct ViewerWindow {
    window: Window,

    #[borrows(window)]
    #[covariant]
    scene: SceneRenderer<'this>,
}

/// Everything that exists while the window is open.
struct Session {
    viewer: ViewerWindow,
    camera: Camera,
    input: InputState,
    clock: FrameClock,
    minimized: bool,
}

struct AppState {
    config: RuntimeConfig,
    surface_init: SurfaceInit,

    frame_loop: FrameLoop,
    session: Option<Session>,
    fatal: Option<anyhow::Error>,
}

impl AppState {
    fn new(config: RuntimeConfig, surface_init: SurfaceInit) -> Self {
        let frame_loop = FrameLoop::new(config.wireframe_key);
        Self {
            config,
            surface_init,
            frame_loop,
            session: None,
            fatal: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        if self.fatal.is_none() {
            self.fatal = Some(err);
        }
        self.session = None;
        event_loop.exit();
    }

    fn create_session(&self, event_loop: &ActiveEventLoop) -> Result<Session> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let size = window.inner_size();
        let surface_init = self.surface_init.clone();
        let scene_config = SceneConfig {
            asset_root: self.config.asset_root.clone(),
            clear_color: self.config.clear_color,
        };

        let viewer = ViewerWindowTryBuilder {
            window,
            scene_builder: |w| {
                let gpu = pollster::block_on(Gpu::new(w, surface_init))
                    .context("GPU initialization failed")?;
                SceneRenderer::new(gpu, &scene_config, default_drawables())
            },
        }
        .try_build()?;

        log::info!("window {}x{} ready", size.width, size.height);

        Ok(Session {
            viewer,
            camera: Camera::new(size.width.max(1), size.height.max(1)),
            input: InputState::default(),
            clock: FrameClock::new(),
            minimized: false,
        })
    }

    fn dispatch(&mut self, event: LoopEvent) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        if let LoopEvent::Resize { width, height } = event {
            let minimized = width == 0 || height == 0;
            if session.minimized && !minimized {
                session.clock.reset();
            }
            session.minimized = minimized;
        }

        let frame_loop = &mut self.frame_loop;
        session.viewer.with_scene_mut(|scene| {
            frame_loop.handle(&event, &session.input, &mut session.camera, scene)
        });
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.minimized {
            return;
        }

        let time = session.clock.tick();
        let frame_loop = &mut self.frame_loop;
        let result = session
            .viewer
            .with_scene_mut(|scene| frame_loop.frame(scene, &session.camera, time));

        if let Err(err) = result {
            self.fail(event_loop, err.context("frame failed"));
        }
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.session.is_some() || self.fatal.is_some() {
            return;
        }

        match self.create_session(event_loop) {
            Ok(session) => {
                session.viewer.with_window(|w| w.request_redraw());
                self.session = Some(session);
            }
            Err(err) => self.fail(event_loop, err.context("failed to start viewer")),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.frame_loop.is_terminated() {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw: the water animates every frame.
        if let Some(session) = &self.session {
            session.viewer.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        // Translate against the state before this event so pointer deltas
        // are measured from the previous position.
        let input_event = session
            .viewer
            .with_window(|w| translate_window_event(w.scale_factor(), &session.input, &event));
        if let Some(ev) = input_event {
            session.input.apply_event(&ev);
            self.dispatch(LoopEvent::Input(ev));
        }

        match &event {
            WindowEvent::CloseRequested => self.dispatch(LoopEvent::Quit),

            WindowEvent::Resized(size) => self.dispatch(LoopEvent::Resize {
                width: size.width,
                height: size.height,
            }),

            WindowEvent::ScaleFactorChanged { .. } => {
                let size = self
                    .session
                    .as_ref()
                    .map(|s| s.viewer.with_window(|w| w.inner_size()));
                if let Some(size) = size {
                    self.dispatch(LoopEvent::Resize {
                        width: size.width,
                        height: size.height,
                    });
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }

        if self.frame_loop.is_terminated() {
            self.session = None;
            event_loop.exit();
        }
    }
}
