//! Core application state and lifecycle.

use ancestry_core::{CatalogSource, CharacterCreation};
use peniko::Color;
use std::sync::Arc;
use vello::util::RenderSurface;
use vello::wgpu::PresentMode;
use winit::application::ApplicationHandler;
#[cfg(not(target_arch = "wasm32"))]
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

use crate::ui::render_ui;

/// Default native catalog path, relative to the working directory.
#[cfg(not(target_arch = "wasm32"))]
pub const DEFAULT_NATIVE_CATALOG: &str = "assets/character-data.json";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
    /// Catalog file path (native) or URL (WASM).
    pub catalog: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let catalog = DEFAULT_NATIVE_CATALOG.to_string();
        #[cfg(target_arch = "wasm32")]
        let catalog = ancestry_core::DEFAULT_CATALOG.to_string();

        Self {
            title: "Ancestry - Character Creation".to_string(),
            width: 1100,
            height: 720,
            background_color: Color::from_rgba8(243, 244, 246, 255),
            catalog,
        }
    }
}

impl AppConfig {
    /// Build a configuration from command-line arguments (program name excluded).
    ///
    /// The first argument, if any, is the catalog path.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Self::default();
        if let Some(catalog) = args.into_iter().next().map(Into::into) {
            if !catalog.trim().is_empty() {
                config.catalog = catalog;
            }
        }
        config
    }

    /// Override the catalog location.
    pub fn with_catalog(mut self, catalog: impl Into<String>) -> Self {
        self.catalog = catalog.into();
        self
    }

    /// Apply a `catalog` location parameter, if one is present.
    ///
    /// `search` and `hash` are the raw `?...` and `#...` parts of a URL; the
    /// query string wins when both carry the parameter.
    pub fn with_location_params(self, search: &str, hash: &str) -> Self {
        match parse_catalog_param(search).or_else(|| parse_catalog_param(hash)) {
            Some(catalog) => {
                log::info!("Catalog from URL: {}", catalog);
                self.with_catalog(catalog)
            }
            None => self,
        }
    }

    fn catalog_source(&self) -> Box<dyn CatalogSource> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            Box::new(ancestry_core::FileCatalogSource::new(&self.catalog))
        }
        #[cfg(target_arch = "wasm32")]
        {
            Box::new(ancestry_core::FetchCatalogSource::new(self.catalog.clone()))
        }
    }
}

/// Parse the catalog parameter from a query string or hash.
fn parse_catalog_param(s: &str) -> Option<String> {
    let s = s.trim_start_matches(['?', '#']);

    s.split('&').find_map(|pair| match pair.split_once('=') {
        Some(("catalog", value)) if !value.is_empty() => Some(value.to_string()),
        _ => None,
    })
}

/// Load the catalog and build the session. Failures are logged, not retried.
async fn load_creation(config: &AppConfig) -> Option<CharacterCreation> {
    let source = config.catalog_source();
    match CharacterCreation::initialize(source.as_ref()).await {
        Ok(creation) => Some(creation),
        Err(e) => {
            log::error!("Failed to load character data from {}: {}", source.location(), e);
            None
        }
    }
}

/// Runtime state for the application.
struct AppState {
    // Windowing
    window: Arc<Window>,
    surface: RenderSurface<'static>,

    // egui
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    /// `None` when the catalog could not be loaded.
    creation: Option<CharacterCreation>,
    state: Option<AppState>,
    render_cx: Option<vello::util::RenderContext>,
    /// Window waiting for async surface creation (WASM only)
    pending_window: Option<Arc<Window>>,
    /// Flag to indicate async init is in progress
    #[cfg(target_arch = "wasm32")]
    init_in_progress: std::cell::Cell<bool>,
}

impl App {
    /// Create an application for an already built session.
    pub fn new(config: AppConfig, creation: Option<CharacterCreation>) -> Self {
        Self {
            config,
            creation,
            state: None,
            render_cx: None,
            pending_window: None,
            #[cfg(target_arch = "wasm32")]
            init_in_progress: std::cell::Cell::new(false),
        }
    }

    /// Run the application with default configuration.
    pub async fn run() {
        Self::run_with_config(AppConfig::default()).await;
    }

    /// Load the catalog, then run the event loop.
    pub async fn run_with_config(config: AppConfig) {
        let creation = load_creation(&config).await;

        let event_loop = EventLoop::new().expect("Failed to create event loop");
        let app = App::new(config, creation);

        #[cfg(target_arch = "wasm32")]
        {
            use winit::platform::web::EventLoopExtWebSys;
            event_loop.spawn_app(app);
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let mut app = app;
            event_loop.run_app(&mut app).expect("Event loop error");
        }
    }

    /// The running session, if the catalog loaded.
    pub fn creation(&self) -> Option<&CharacterCreation> {
        self.creation.as_ref()
    }

    /// Mutable access for external callers driving the selection.
    pub fn creation_mut(&mut self) -> Option<&mut CharacterCreation> {
        self.creation.as_mut()
    }

    /// Finish initialization after surface is created.
    fn finish_init(&mut self, window: Arc<Window>, surface: RenderSurface<'static>) {
        let render_cx = self.render_cx.as_ref().expect("RenderContext not initialized");
        let device = &render_cx.devices[surface.dev_id].device;

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            device,
            surface.config.format,
            egui_wgpu::RendererOptions::default(),
        );

        log::info!(
            "Ancestry initialized - {}x{}",
            surface.config.width,
            surface.config.height
        );

        self.state = Some(AppState {
            window: window.clone(),
            surface,
            egui_ctx,
            egui_state,
            egui_renderer,
        });

        self.pending_window = None;

        window.request_redraw();
    }

    /// Draw one frame and apply any UI action.
    fn redraw(&mut self) {
        let Some(state) = &mut self.state else {
            return;
        };

        let egui_input = state.egui_state.take_egui_input(&state.window);
        let creation = self.creation.as_ref();
        let mut action = None;
        let egui_output = state.egui_ctx.run(egui_input, |ctx| {
            action = render_ui(ctx, creation);
        });
        state
            .egui_state
            .handle_platform_output(&state.window, egui_output.platform_output);
        let egui_primitives = state
            .egui_ctx
            .tessellate(egui_output.shapes, egui_output.pixels_per_point);

        // The frame shows the pre-action state; the next one picks up the change
        if let Some(action) = action {
            if let Some(creation) = self.creation.as_mut() {
                log::debug!("UI action: {:?}", action);
                action.apply(creation);
            }
            state.window.request_redraw();
        }

        let Some(render_cx) = self.render_cx.as_ref() else {
            return;
        };

        let device_handle = &render_cx.devices[state.surface.dev_id];
        let device = &device_handle.device;
        let queue = &device_handle.queue;

        let surface_texture = match state.surface.surface.get_current_texture() {
            Ok(t) => t,
            Err(e) => {
                log::warn!("Failed to get surface texture: {:?}", e);
                return;
            }
        };

        let width = state.surface.config.width;
        let height = state.surface.config.height;

        let surface_view = surface_texture
            .texture
            .create_view(&vello::wgpu::TextureViewDescriptor::default());

        for (id, image_delta) in &egui_output.textures_delta.set {
            state
                .egui_renderer
                .update_texture(device, queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [width, height],
            pixels_per_point: egui_output.pixels_per_point,
        };

        {
            let mut egui_encoder =
                device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
                    label: Some("egui encoder"),
                });

            state.egui_renderer.update_buffers(
                device,
                queue,
                &mut egui_encoder,
                &egui_primitives,
                &screen_descriptor,
            );

            let render_pass = egui_encoder.begin_render_pass(&vello::wgpu::RenderPassDescriptor {
                label: Some("egui render pass"),
                color_attachments: &[Some(vello::wgpu::RenderPassColorAttachment {
                    view: &surface_view,
                    resolve_target: None,
                    ops: vello::wgpu::Operations {
                        load: vello::wgpu::LoadOp::Clear(clear_color(self.config.background_color)),
                        store: vello::wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // egui-wgpu requires a 'static render pass
            let mut render_pass = render_pass.forget_lifetime();
            state
                .egui_renderer
                .render(&mut render_pass, &egui_primitives, &screen_descriptor);
            drop(render_pass);

            queue.submit(std::iter::once(egui_encoder.finish()));
        }

        for id in &egui_output.textures_delta.free {
            state.egui_renderer.free_texture(id);
        }
        surface_texture.present();

        if state.egui_ctx.has_requested_repaint() {
            state.window.request_redraw();
        }
    }
}

/// Convert the configured background to a render pass clear color.
fn clear_color(color: Color) -> vello::wgpu::Color {
    let [r, g, b, a] = color.components;
    vello::wgpu::Color {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: a as f64,
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() || self.pending_window.is_some() {
            return;
        }

        log::info!("Creating window...");

        #[cfg(not(target_arch = "wasm32"))]
        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));

        // On WASM, attach canvas to DOM and use full viewport
        #[cfg(target_arch = "wasm32")]
        let window_attrs = {
            use winit::platform::web::WindowAttributesExtWebSys;

            let canvas = crate::web::create_canvas(self.config.width, self.config.height)
                .expect("Failed to create canvas");

            Window::default_attributes()
                .with_title(&self.config.title)
                .with_canvas(Some(canvas))
        };

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .expect("Failed to create window"),
        );

        let size = window.inner_size();
        let (width, height) = if size.width == 0 || size.height == 0 {
            (self.config.width, self.config.height)
        } else {
            (size.width, size.height)
        };

        log::info!("Surface size: {}x{}", width, height);

        // On native, block on async surface creation
        #[cfg(not(target_arch = "wasm32"))]
        {
            let render_cx = self
                .render_cx
                .get_or_insert_with(vello::util::RenderContext::new);

            let surface = pollster::block_on(render_cx.create_surface(
                window.clone(),
                width,
                height,
                PresentMode::AutoVsync,
            ))
            .expect("Failed to create surface");

            // Transmute lifetime to 'static - safe because App owns everything
            let surface: RenderSurface<'static> = unsafe { std::mem::transmute(surface) };
            self.finish_init(window, surface);
        }

        // On WASM, store window for later async initialization
        #[cfg(target_arch = "wasm32")]
        {
            self.pending_window = Some(window);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // On WASM, handle async initialization
        #[cfg(target_arch = "wasm32")]
        if self.state.is_none() {
            if let Some(window) = self.pending_window.clone() {
                if !self.init_in_progress.get() {
                    self.init_in_progress.set(true);

                    let (width, height) =
                        crate::web::viewport_size(self.config.width, self.config.height);

                    // Get raw pointer to self for async callback
                    let self_ptr = self as *mut Self;
                    let window_clone = window.clone();

                    wasm_bindgen_futures::spawn_local(async move {
                        let mut render_cx = vello::util::RenderContext::new();

                        match render_cx
                            .create_surface(
                                window_clone.clone(),
                                width,
                                height,
                                PresentMode::AutoVsync,
                            )
                            .await
                        {
                            Ok(surface) => {
                                let surface: RenderSurface<'static> =
                                    unsafe { std::mem::transmute(surface) };

                                // SAFETY: We're on the same thread (WASM is single-threaded)
                                // and the App is kept alive by the event loop
                                let app = unsafe { &mut *self_ptr };
                                app.render_cx = Some(render_cx);
                                app.finish_init(window_clone, surface);
                            }
                            Err(e) => {
                                log::error!("Failed to create surface: {:?}", e);
                                let app = unsafe { &mut *self_ptr };
                                app.init_in_progress.set(false);
                            }
                        }
                    });
                }

                window.request_redraw();
            }
            return;
        }

        let Some(state) = &mut self.state else {
            return;
        };

        let egui_response = state.egui_state.on_window_event(&state.window, &event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }

                if let Some(render_cx) = self.render_cx.as_mut() {
                    render_cx.resize_surface(&mut state.surface, size.width, size.height);
                }

                state.window.request_redraw();
            }

            WindowEvent::RedrawRequested => {
                self.redraw();
            }

            _ => {
                if egui_response.repaint {
                    state.window.request_redraw();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_args_defaults() {
        let config = AppConfig::from_args(Vec::<String>::new());
        assert_eq!(config.catalog, DEFAULT_NATIVE_CATALOG);
        assert_eq!(config.width, 1100);
    }

    #[test]
    fn test_from_args_catalog_path() {
        let config = AppConfig::from_args(["races.json", "ignored"]);
        assert_eq!(config.catalog, "races.json");
    }

    #[test]
    fn test_from_args_blank_path_keeps_default() {
        let config = AppConfig::from_args(["  "]);
        assert_eq!(config.catalog, DEFAULT_NATIVE_CATALOG);
    }

    #[test]
    fn test_location_params_query_string() {
        let config = AppConfig::default().with_location_params("?catalog=races.json", "");
        assert_eq!(config.catalog, "races.json");
    }

    #[test]
    fn test_location_params_hash() {
        let config = AppConfig::default().with_location_params("", "#catalog=data/races.json");
        assert_eq!(config.catalog, "data/races.json");
    }

    #[test]
    fn test_location_params_query_wins_over_hash() {
        let config =
            AppConfig::default().with_location_params("?catalog=query.json", "#catalog=hash.json");
        assert_eq!(config.catalog, "query.json");
    }

    #[test]
    fn test_location_params_empty_value_falls_through() {
        let config =
            AppConfig::default().with_location_params("?catalog=", "#catalog=hash.json");
        assert_eq!(config.catalog, "hash.json");

        let config = AppConfig::default().with_location_params("?catalog=", "");
        assert_eq!(config.catalog, AppConfig::default().catalog);
    }

    #[test]
    fn test_parse_catalog_param() {
        assert_eq!(
            parse_catalog_param("?lang=en&catalog=races.json").as_deref(),
            Some("races.json")
        );
        assert_eq!(parse_catalog_param("catalog=races.json").as_deref(), Some("races.json"));
        assert_eq!(parse_catalog_param("#catalog=a=b.json").as_deref(), Some("a=b.json"));
        assert_eq!(parse_catalog_param("?catalogue=races.json"), None);
        assert_eq!(parse_catalog_param("?catalog"), None);
        assert_eq!(parse_catalog_param(""), None);
    }

    #[test]
    fn test_clear_color_matches_background() {
        let color = clear_color(Color::from_rgba8(255, 0, 0, 255));
        assert_eq!((color.r, color.g, color.b, color.a), (1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_missing_catalog_leaves_screen_empty() {
        let config = AppConfig::default().with_catalog("/nonexistent/character-data.json");
        let creation = pollster::block_on(load_creation(&config));
        assert!(creation.is_none());
    }
}
