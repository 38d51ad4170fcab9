//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the game core.
//
// Architecture:
// ```text
//  Main Thread (Winit event loop)
//  ┌──────────────────────────────────────────────────────────┐
//  │  WindowEvent                                             │
//  │   ↓                                                      │
//  │  InputProcessor ── converts, attaches cursor position    │
//  │   ↓                                                      │
//  │  InputBuffer ───── presses since last frame              │
//  │   ↓ (RedrawRequested: flush)                             │
//  │  crossbeam channel ──► CoreSystems::tick()               │
//  │                          ↓                               │
//  │                        RenderState ─► Batch              │
//  │                                         ↓                │
//  │                          Presenter (egui + wgpu)         │
//  └──────────────────────────────────────────────────────────┘
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame boundary**: all presses of a frame reach
//   the core together and are applied in order before drawing
// - **Redraw on demand**: the loop waits for OS events and only requests
//   a frame when input or a resize arrived
// - **Single thread**: core logic runs inside the redraw callback, so
//   game state is never shared
//
// Responsibilities:
// - Create and manage the OS window
// - Convert Winit types → engine InputEvents
// - Buffer input until frame boundary
// - Drive the core once per frame and present the result
//
//=========================================================================

//=== Submodules ==========================================================

mod batch;
mod input_buffer;
mod input_processor;
mod paint;
mod presenter;

//=== Standard Library Imports ============================================

use std::sync::Arc;

//=== External Crates =====================================================

use crossbeam_channel::{Sender, TrySendError};
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::config::GameConfig;
use crate::core::game::GameStatus;
use crate::core::platform_bridge::{PlatformEvent, TickControl};
use crate::core::{CoreSystems, PlatformError};
use batch::Batch;
use input_buffer::InputBuffer;
use input_processor::InputProcessor;
use presenter::Presenter;

//=== Platform ============================================================

/// Window owner and per-frame driver.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(sender, core, config)`
/// 2. **Execution**: `platform.run()` - blocks in the Winit event loop
/// 3. **Event processing**: Winit calls `ApplicationHandler` methods
/// 4. **Shutdown**: window closed, quit key, or fatal surface error
///
/// # Thread Safety
///
/// This type is NOT Send/Sync - it must remain on the main thread.
pub(crate) struct Platform {
    /// OS window handle (None until `resumed()` called).
    window: Option<Arc<Window>>,

    /// GPU surface and egui renderer bound to `window`.
    presenter: Option<Presenter>,

    /// Buffers presses until `RedrawRequested`.
    buffer: InputBuffer,

    /// Channel to the core.
    event_sender: Sender<PlatformEvent>,

    /// Converts Winit events to engine InputEvents.
    input_processor: InputProcessor,

    core: CoreSystems,
    config: GameConfig,

    /// Status shown in the title bar, to skip redundant updates.
    shown_status: Option<GameStatus>,

    /// First fatal error hit inside the event loop.
    error: Option<PlatformError>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Creates a new platform instance. The window is created lazily in
    /// `resumed()`.
    pub(crate) fn new(
        event_sender: Sender<PlatformEvent>,
        core: CoreSystems,
        config: GameConfig,
    ) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            presenter: None,
            buffer: InputBuffer::new(),
            event_sender,
            input_processor: InputProcessor::new(),
            core,
            config,
            shown_status: None,
            error: None,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the Winit event loop until the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot start, or the
    /// first fatal error (window or surface) hit while running.
    pub(crate) fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop =
            EventLoop::new().map_err(|e| PlatformError::EventLoopCreation(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Wait);

        event_loop
            .run_app(&mut self)
            .map_err(|e| PlatformError::EventLoopExecution(e.to_string()))?;

        match self.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    //--- Internal Helpers -------------------------------------------------

    /// Sends a message to the core, dropping it if the channel is full or
    /// disconnected.
    fn send(&self, event: PlatformEvent) {
        match self.event_sender.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                warn!(target: "platform", "Channel full, dropping {:?}", event);
            }
            Err(TrySendError::Disconnected(event)) => {
                warn!(target: "platform", "Channel disconnected, dropping {:?}", event);
            }
        }
    }

    /// Flushes buffered presses to the core as a single batch.
    ///
    /// Empty buffers are not sent.
    fn flush_input_buffer(&mut self) {
        if let Some(events) = self.buffer.drain() {
            trace!(target: "platform::input", "Flushing {} events", events.len());
            self.send(PlatformEvent::Inputs(events));
        }
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn notify_resize(&mut self, size: PhysicalSize<u32>) {
        if let Some(presenter) = &mut self.presenter {
            presenter.resize(size.width, size.height);
        }
        self.send(PlatformEvent::Resized {
            width: size.width,
            height: size.height,
        });
        self.request_redraw();
    }

    /// One frame: flush input, tick the core, draw, present.
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        self.flush_input_buffer();

        if self.core.tick() == TickControl::Exit {
            event_loop.exit();
            return;
        }

        let state = self.core.render_state();
        let batch = Batch::build(&state, &self.config);
        let background = self.config.palette().background;

        if let Some(presenter) = &mut self.presenter {
            if let Err(e) = presenter.present(&batch, background) {
                self.fail(event_loop, e);
                return;
            }
        }

        self.update_title();
    }

    fn update_title(&mut self) {
        let status = self.core.status();
        if self.shown_status == Some(status) {
            return;
        }

        if let Some(window) = &self.window {
            window.set_title(&format!("{} - {}", self.config.title(), status));
        }
        self.shown_status = Some(status);
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: PlatformError) {
        error!(target: "platform", "{}", err);
        if self.error.is_none() {
            self.error = Some(err);
        }
        event_loop.exit();
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Creates the window on first activation.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let (width, height) = self.config.window_size();
        let attrs = WindowAttributes::default()
            .with_title(self.config.title())
            .with_inner_size(LogicalSize::new(width, height))
            .with_resizable(false);

        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.fail(event_loop, PlatformError::WindowCreation(e.to_string()));
                return;
            }
        };

        info!(
            target: "platform",
            "Window created: {}x{} @ {}x DPI",
            window.inner_size().width,
            window.inner_size().height,
            window.scale_factor()
        );

        match Presenter::new(window.clone()) {
            Ok(presenter) => self.presenter = Some(presenter),
            Err(e) => {
                self.fail(event_loop, e);
                return;
            }
        }

        let size = window.inner_size();
        self.window = Some(window);
        self.notify_resize(size);
    }

    /// Handles per-window events.
    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(presenter) = &mut self.presenter {
            presenter.on_window_event(&event);
        }

        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                debug!(target: "platform", "Window resized to {}x{}", size.width, size.height);
                self.notify_resize(size);
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.input_processor
                    .track_cursor(position.x as f32, position.y as f32);
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let Some(event) = self.input_processor.process_key_event(&key_event) {
                    trace!(target: "platform::input", "{:?}", event);
                    self.buffer.push(event);
                    self.request_redraw();
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(event) = self.input_processor.process_mouse_button(button, state) {
                    trace!(target: "platform::input", "{:?}", event);
                    self.buffer.push(event);
                    self.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {
                // Ignore: Focused, Moved, etc.
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
