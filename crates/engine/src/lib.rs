pub use bevy_ecs::world::World;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    window::{Window, WindowId},
};

use crate::components::{ExitRequested, FrameCount, Time, Viewport};
use crate::input::{InputSample, InputState};
pub type Result<T> = anyhow::Result<T>;

pub mod components;
pub mod input;
pub mod layers;
pub mod prelude;

pub trait Layer: 'static {
    fn frame(&mut self, context: &LayerContext) -> Result<()>;
    fn detach(&mut self, context: &LayerContext);
}

pub trait LayerFactory: 'static {
    fn create(&self, context: &LayerContext) -> Result<Box<dyn Layer>>;
}

pub struct LayerContext {
    pub world: Arc<Mutex<World>>,
    pub delta_time: Duration,
    pub frame: u64,
}

impl LayerContext {
    pub fn lock_world(&self) -> Result<MutexGuard<'_, World>> {
        lock(&self.world)
    }
}

fn lock(world: &Mutex<World>) -> Result<MutexGuard<'_, World>> {
    world
        .lock()
        .map_err(|_| anyhow::anyhow!("world mutex poisoned by a panicking layer"))
}

/// What the shell should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameControl {
    Continue,
    Exit,
}

pub struct ApplicationBuilder {
    title: String,
    width: u32,
    height: u32,
    layer_factories: Vec<Box<dyn LayerFactory>>,
}

impl ApplicationBuilder {
    pub fn new() -> Self {
        Self {
            title: "aiming".to_string(),
            width: 800,
            height: 600,
            layer_factories: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Requested inner size of the window, also the viewport until the
    /// platform reports the real one
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn add_layer_factory(mut self, factory: impl LayerFactory) -> Self {
        self.layer_factories.push(Box::new(factory));
        self
    }

    pub fn add_layer<F>(mut self, factory_fn: F) -> Self
    where
        F: Fn(&LayerContext) -> Result<Box<dyn Layer>> + 'static,
    {
        self.layer_factories
            .push(Box::new(ClosureLayerFactory::new(factory_fn)));
        self
    }

    pub fn build(self) -> Result<Application> {
        let mut world = World::new();
        world.insert_resource(InputState::new());
        world.insert_resource(InputSample::default());
        world.insert_resource(Viewport::new(self.width, self.height));
        world.insert_resource(ExitRequested::default());
        world.insert_resource(FrameCount::default());
        world.insert_resource(Time(Duration::ZERO));
        let world = Arc::new(Mutex::new(world));

        let context = LayerContext {
            world: world.clone(),
            delta_time: Duration::ZERO,
            frame: 0,
        };

        let layers = self
            .layer_factories
            .iter()
            .map(|factory| factory.create(&context))
            .collect::<Result<Vec<_>>>()?;

        Ok(Application {
            title: self.title,
            size: LogicalSize::new(self.width, self.height),
            world,
            layers,
            window: None,
            last_frame_time: None,
        })
    }
}

impl Default for ApplicationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

struct ClosureLayerFactory<F> {
    factory_fn: F,
}

impl<F> ClosureLayerFactory<F> {
    fn new(factory_fn: F) -> Self {
        Self { factory_fn }
    }
}

impl<F> LayerFactory for ClosureLayerFactory<F>
where
    F: Fn(&LayerContext) -> Result<Box<dyn Layer>> + 'static,
{
    fn create(&self, context: &LayerContext) -> Result<Box<dyn Layer>> {
        (self.factory_fn)(context)
    }
}

pub struct Application {
    title: String,
    size: LogicalSize<u32>,
    world: Arc<Mutex<World>>,
    layers: Vec<Box<dyn Layer>>,
    window: Option<Window>,
    last_frame_time: Option<Instant>,
}

impl Application {
    pub fn world(&self) -> Arc<Mutex<World>> {
        self.world.clone()
    }

    /// Run every layer once, in the order they were added.
    ///
    /// Works without a window, which is how tests and scripted sessions
    /// drive the application.
    pub fn frame(&mut self, delta_time: Duration) -> Result<FrameControl> {
        let frame = {
            let mut world = lock(&self.world)?;
            world.insert_resource(Time(delta_time));
            let mut count = world.resource_mut::<FrameCount>();
            count.0 += 1;
            count.0
        };

        let context = LayerContext {
            world: self.world.clone(),
            delta_time,
            frame,
        };

        for layer in &mut self.layers {
            layer.frame(&context)?;
        }

        let mut world = lock(&self.world)?;
        world.clear_trackers();

        if world.resource::<ExitRequested>().0 {
            Ok(FrameControl::Exit)
        } else {
            Ok(FrameControl::Continue)
        }
    }

    /// Track a new drawable size. Returns whether the viewport changed.
    pub fn resize(&self, width: u32, height: u32) -> Result<bool> {
        let mut world = lock(&self.world)?;
        let mut viewport = world.resource_mut::<Viewport>();
        if viewport.width == width && viewport.height == height {
            return Ok(false);
        }

        log::debug!("Viewport resized to {}x{}", width, height);
        viewport.width = width;
        viewport.height = height;
        Ok(true)
    }

    /// Fold a window event into input and viewport state.
    ///
    /// Needs no window or event loop, so the shell's event handling can be
    /// driven directly.
    pub fn apply_window_event(&self, event: &WindowEvent) -> Result<()> {
        lock(&self.world)?
            .resource_mut::<InputState>()
            .handle_window_event(event);

        if let WindowEvent::Resized(size) = event {
            self.resize(size.width, size.height)?;
        }
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let delta_time = self
            .last_frame_time
            .map(|last| now.duration_since(last))
            .unwrap_or_default();
        self.last_frame_time = Some(now);

        match self.frame(delta_time) {
            Ok(FrameControl::Continue) => {}
            Ok(FrameControl::Exit) => {
                log::info!("Exit requested, closing");
                event_loop.exit();
            }
            Err(e) => {
                log::error!("Frame failed: {:#}", e);
                event_loop.exit();
            }
        }
    }

    fn detach(&mut self) {
        let frame = match lock(&self.world) {
            Ok(world) => world.resource::<FrameCount>().0,
            Err(e) => {
                log::error!("Unable to detach layers: {:#}", e);
                return;
            }
        };

        let context = LayerContext {
            world: self.world.clone(),
            delta_time: Duration::ZERO,
            frame,
        };

        for layer in &mut self.layers {
            layer.detach(&context);
        }
    }
}

impl ApplicationHandler for Application {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(self.size);

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => window,
            Err(e) => {
                log::error!("Unable to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        log::info!("Window created ({}x{})", size.width, size.height);
        if let Err(e) = self.resize(size.width, size.height) {
            log::error!("{:#}", e);
        }

        self.window = Some(window);
        self.last_frame_time = Some(Instant::now());
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Err(e) = self.apply_window_event(&event) {
            log::error!("Dropping window event: {:#}", e);
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.detach();
    }
}
