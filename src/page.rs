//! Windowed landing page

use anyhow::Result;
use glam::Vec2;
use holoexpo_core::{DrawSurface, FrameRequestId, FrameScheduler, Rgba, ScreenRect, Viewport};
use holoexpo_ui3d::{StaticLayout, UIComponent};
use holoexpo_ui::{booking_modal_ui, countdown_ui, preloader_ui, DebugOverlay, SceneStats, ACCENT};
use std::sync::Arc;
use std::time::Instant;
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoopWindowTarget;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::Window;

use crate::config::LandingConfig;
use crate::content;
use crate::scene::LandingScene;

/// Page action to communicate with the main event loop
pub enum PageAction {
    /// Keep running
    Continue,
    /// Quit application
    Quit,
}

/// Frame requests served by window redraws.
pub struct RedrawScheduler {
    window: Arc<Window>,
    next: u64,
    pending: Vec<FrameRequestId>,
}

impl RedrawScheduler {
    pub fn new(window: Arc<Window>) -> Self {
        Self {
            window,
            next: 0,
            pending: Vec::new(),
        }
    }

    /// Requests due on this redraw, oldest first.
    pub fn take_due(&mut self) -> Vec<FrameRequestId> {
        std::mem::take(&mut self.pending)
    }
}

impl FrameScheduler for RedrawScheduler {
    fn request_frame(&mut self) -> FrameRequestId {
        self.next += 1;
        let id = FrameRequestId(self.next);
        self.pending.push(id);
        self.window.request_redraw();
        id
    }

    fn cancel_frame(&mut self, id: FrameRequestId) {
        self.pending.retain(|pending| *pending != id);
    }
}

fn color32(color: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.alpha_u8())
}

/// [`DrawSurface`] over an egui painter.
///
/// egui rebuilds every frame, so clearing is a no-op.
pub struct EguiSurface<'a> {
    painter: &'a egui::Painter,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a egui::Painter) -> Self {
        Self { painter }
    }
}

impl DrawSurface for EguiSurface<'_> {
    fn clear(&mut self, _width: f32, _height: f32) {}

    fn fill_square(&mut self, origin: Vec2, size: f32, color: Rgba) {
        let rect = egui::Rect::from_min_size(
            egui::pos2(origin.x, origin.y),
            egui::vec2(size, size),
        );
        self.painter.rect_filled(rect, 0.0, color32(color));
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.painter.line_segment(
            [egui::pos2(from.x, from.y), egui::pos2(to.x, to.y)],
            egui::Stroke::new(width, color32(color)),
        );
    }
}

fn screen_rect(rect: egui::Rect) -> ScreenRect {
    ScreenRect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

/// Main page state
pub struct LandingPage {
    window: Arc<Window>,
    egui_state: egui_winit::State,
    egui_ctx: egui::Context,
    wgpu_device: wgpu::Device,
    wgpu_queue: wgpu::Queue,
    surface: wgpu::Surface<'static>,
    surface_config: wgpu::SurfaceConfiguration,
    egui_renderer: egui_wgpu::Renderer,
    scene: LandingScene,
    scheduler: RedrawScheduler,
    overlay: DebugOverlay,
    started: Instant,
    loaded: bool,
}

impl LandingPage {
    /// Create the window, GPU surface and scene.
    pub fn new(
        event_loop: &EventLoopWindowTarget<()>,
        config: LandingConfig,
        resolution: (u32, u32),
    ) -> Result<Self> {
        let window = Arc::new(
            winit::window::WindowBuilder::new()
                .with_title(content::EVENT_NAME)
                .with_inner_size(winit::dpi::PhysicalSize::new(resolution.0, resolution.1))
                .build(event_loop)?,
        );

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
        );

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::LowPower,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .ok_or_else(|| anyhow::anyhow!("Failed to find suitable GPU adapter"))?;

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("Landing Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
            },
            None,
        ))?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("Surface reports no texture formats"))?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let size = window.inner_size();
        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        let egui_renderer = egui_wgpu::Renderer::new(&device, surface_format, None, 1);

        let logical = size.to_logical::<f32>(window.scale_factor());
        let viewport = Viewport::new(logical.width, logical.height);
        let mut scene = LandingScene::new(config, viewport, 0.0);
        scene.set_scale_factor(window.scale_factor());
        let mut scheduler = RedrawScheduler::new(window.clone());
        scene.start(&mut scheduler);

        Ok(Self {
            window,
            egui_state,
            egui_ctx,
            wgpu_device: device,
            wgpu_queue: queue,
            surface,
            surface_config,
            egui_renderer,
            scene,
            scheduler,
            overlay: DebugOverlay::new(),
            started: Instant::now(),
            loaded: false,
        })
    }

    /// Handle an event
    pub fn handle_event(
        &mut self,
        event: &Event<()>,
        _elwt: &EventLoopWindowTarget<()>,
    ) -> PageAction {
        match event {
            Event::WindowEvent { event, window_id } if *window_id == self.window.id() => {
                // Pointer and resize tracking happen even when egui uses the event.
                self.scene.handle_window_event(event);
                let response = self.egui_state.on_window_event(&self.window, event);

                match event {
                    WindowEvent::CloseRequested => {
                        self.scene.stop(&mut self.scheduler);
                        return PageAction::Quit;
                    }
                    WindowEvent::Resized(new_size) => {
                        if new_size.width > 0 && new_size.height > 0 {
                            self.surface_config.width = new_size.width;
                            self.surface_config.height = new_size.height;
                            self.surface
                                .configure(&self.wgpu_device, &self.surface_config);
                        }
                    }
                    WindowEvent::KeyboardInput { event, .. }
                        if event.state.is_pressed() && !response.consumed =>
                    {
                        match event.physical_key {
                            PhysicalKey::Code(KeyCode::F3) => self.overlay.toggle(),
                            PhysicalKey::Code(KeyCode::Escape) => self.scene.modal_mut().close(),
                            _ => {}
                        }
                    }
                    WindowEvent::RedrawRequested => {
                        self.render();
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                self.window.request_redraw();
            }
            _ => {}
        }

        PageAction::Continue
    }

    fn render(&mut self) {
        let output = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(e) => {
                tracing::warn!("Failed to get surface texture: {}", e);
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let now = self.started.elapsed().as_secs_f32();
        let raw_input = self.egui_state.take_egui_input(&self.window);
        let due = self.scheduler.take_due();

        let scene = &mut self.scene;
        let scheduler = &mut self.scheduler;
        let overlay = &mut self.overlay;

        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            let background = ctx.layer_painter(egui::LayerId::background());
            let mut particles = EguiSurface::new(&background);
            let mut ticked = false;
            for id in due.iter().copied() {
                ticked |= scene.on_particle_frame(id, &mut particles, scheduler).is_some();
            }
            if !ticked {
                scene.field().draw(&mut particles);
            }

            let mut anchors = StaticLayout::new();
            let mut book_buttons: Vec<ScreenRect> = Vec::new();
            let mut book_clicked = false;

            egui::CentralPanel::default()
                .frame(egui::Frame::none())
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        render_page_ui(
                            ui,
                            scene,
                            now,
                            &mut anchors,
                            &mut book_buttons,
                            &mut book_clicked,
                        );
                    });
                });

            let time = scene.update(now, &anchors);
            overlay.record_frame(time.dt);

            let models = ctx.layer_painter(egui::LayerId::new(
                egui::Order::Middle,
                egui::Id::new("models"),
            ));
            scene.draw_models(&mut EguiSurface::new(&models));

            if scene.update_cta(&book_buttons) {
                egui::Area::new(egui::Id::new("mobile_cta"))
                    .anchor(egui::Align2::RIGHT_BOTTOM, [-20.0, -20.0])
                    .show(ctx, |ui| {
                        if ui
                            .add(egui::Button::new(
                                egui::RichText::new("Book now").size(18.0).strong(),
                            ))
                            .clicked()
                        {
                            book_clicked = true;
                        }
                    });
            }

            if book_clicked {
                scene.modal_mut().open();
            }
            booking_modal_ui(ctx, scene.modal_mut());
            preloader_ui(ctx, scene.preloader().opacity(now));

            let stats = SceneStats {
                particles: scene.field().len(),
                connections: scene.last_field().connections,
                icons: scene
                    .icons()
                    .icons()
                    .iter()
                    .filter(|icon| icon.is_visible())
                    .count(),
                hovered: scene.hovered().map(str::to_string),
                arm_yaw: scene.arm().joint(holoexpo_hero::Joint::BaseYaw),
            };
            overlay.render(ctx, &stats);
        });

        if !self.loaded {
            self.loaded = true;
            self.scene.loaded(now);
        }

        self.egui_state
            .handle_platform_output(&self.window, full_output.platform_output);

        let tris = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.surface_config.width, self.surface_config.height],
            pixels_per_point: self.window.scale_factor() as f32,
        };

        let mut encoder =
            self.wgpu_device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("Landing Render Encoder"),
                });

        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer.update_texture(
                &self.wgpu_device,
                &self.wgpu_queue,
                *id,
                image_delta,
            );
        }

        self.egui_renderer.update_buffers(
            &self.wgpu_device,
            &self.wgpu_queue,
            &mut encoder,
            &tris,
            &screen_descriptor,
        );

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Landing Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        // Deep navy backdrop behind the particles.
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.02,
                            g: 0.02,
                            b: 0.06,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.egui_renderer
                .render(&mut render_pass, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        self.wgpu_queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }
}

fn glass_frame(opacity: f32) -> egui::Frame {
    egui::Frame::none()
        .fill(egui::Color32::from_rgba_unmultiplied(255, 255, 255, 10).gamma_multiply(opacity))
        .stroke(egui::Stroke::new(
            1.0,
            egui::Color32::from_rgba_unmultiplied(255, 255, 255, 30).gamma_multiply(opacity),
        ))
        .rounding(egui::Rounding::same(16.0))
        .inner_margin(egui::Margin::same(24.0))
        .outer_margin(egui::Margin::symmetric(48.0, 12.0))
}

/// Render the page body (standalone function to avoid borrow issues)
fn render_page_ui(
    ui: &mut egui::Ui,
    scene: &LandingScene,
    now: f32,
    anchors: &mut StaticLayout,
    book_buttons: &mut Vec<ScreenRect>,
    book_clicked: &mut bool,
) {
    let reveal = scene.reveal();

    // Hero
    let panel = reveal.panel(0, now);
    ui.add_space(24.0 + panel.offset_y);
    glass_frame(panel.opacity).show(ui, |ui| {
        ui.label(
            egui::RichText::new(content::EVENT_NAME)
                .size(56.0)
                .strong()
                .color(ACCENT.gamma_multiply(panel.opacity)),
        );
        ui.label(
            egui::RichText::new(content::TAGLINE)
                .size(20.0)
                .color(egui::Color32::LIGHT_GRAY.gamma_multiply(panel.opacity)),
        );
        ui.add_space(16.0);
        let button = ui.add(egui::Button::new(
            egui::RichText::new("Book your pass").size(22.0),
        ));
        book_buttons.push(screen_rect(button.rect));
        if button.clicked() {
            *book_clicked = true;
        }
    });

    // Countdown
    let panel = reveal.panel(1, now);
    ui.add_space(panel.offset_y);
    if let Some(state) = scene.countdown_state() {
        glass_frame(panel.opacity).show(ui, |ui| {
            ui.label(
                egui::RichText::new("Doors open in")
                    .size(18.0)
                    .color(egui::Color32::LIGHT_GRAY.gamma_multiply(panel.opacity)),
            );
            countdown_ui(ui, &state);
        });
    }

    // Features
    let panel = reveal.panel(2, now);
    ui.add_space(panel.offset_y);
    glass_frame(panel.opacity).show(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            for feature in content::FEATURES.iter() {
                let card = egui::Frame::none()
                    .inner_margin(egui::Margin::same(12.0))
                    .show(ui, |ui| {
                        ui.set_width(220.0);
                        ui.vertical_centered(|ui| {
                            // Icon placeholder; the 3D icon is drawn over it.
                            let (rect, _) = ui.allocate_exact_size(
                                egui::vec2(96.0, 96.0),
                                egui::Sense::hover(),
                            );
                            anchors.insert(feature.id.to_string(), screen_rect(rect));
                            ui.label(
                                egui::RichText::new(feature.title)
                                    .size(20.0)
                                    .strong()
                                    .color(egui::Color32::WHITE.gamma_multiply(panel.opacity)),
                            );
                            ui.label(
                                egui::RichText::new(feature.blurb)
                                    .color(egui::Color32::LIGHT_GRAY.gamma_multiply(panel.opacity)),
                            );
                        });
                    });
                anchors.insert_hover(feature.id, screen_rect(card.response.rect));
            }
        });
    });

    // Closing call to action
    ui.add_space(48.0);
    ui.vertical_centered(|ui| {
        let button = ui.add(egui::Button::new(
            egui::RichText::new("Grab a ticket").size(22.0),
        ));
        book_buttons.push(screen_rect(button.rect));
        if button.clicked() {
            *book_clicked = true;
        }
    });
    ui.add_space(48.0);
}
