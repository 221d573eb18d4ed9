//! Ring-loss viewer binary.
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::dbg_macro, clippy::large_enum_variant)]

use egui_wgpu::Renderer as EguiRenderer;
use egui_wgpu::ScreenDescriptor;
use egui_winit::State as EguiWinitState;
use winit::{
    dpi::PhysicalSize,
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use field::domain::Domain;
use field::loss::{PenaltyParams, ALPHA_MAX};
use field::raster::{render_heatmap, Heatmap, LossStats};
use viewer::export::export_heatmap_png;
use viewer::locale::{strings, Locale};
use viewer::{overlay, plot};

/// Heatmap resolution, fixed at construction.
const MAP_W: u32 = 500;
const MAP_H: u32 = 500;
/// Sample count for the ring profile plot.
const RING_STEPS: usize = 256;

struct GpuState<'w> {
    _instance: wgpu::Instance,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w Window) -> Self {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = match instance.create_surface(window) {
            Ok(s) => s,
            Err(e) => panic!("create surface: {e}"),
        };

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .unwrap_or_else(|| panic!("no suitable GPU adapters"));

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                },
                None,
            )
            .await
            .unwrap_or_else(|e| panic!("request device: {e}"));

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        Self { _instance: instance, surface, device, queue, config }
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }
}

struct UiState {
    params: PenaltyParams,
    locale: Locale,
    show_hud: bool,
    show_axes: bool,
    show_section: bool,

    // Current heatmap, kept for export; rebuilt when the build key changes.
    map: Heatmap,
    stats: LossStats,
    texture: Option<egui::TextureHandle>,
    build_key: Option<(u32, bool)>,
    build_ms: f32,
    export_status: Option<String>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            params: PenaltyParams::default(),
            locale: Locale::En,
            show_hud: true,
            show_axes: true,
            show_section: false,
            map: Heatmap { width: 0, height: 0, pixels: Vec::new() },
            stats: LossStats { min: 0.0, max: 0.0 },
            texture: None,
            build_key: None,
            build_ms: 0.0,
            export_status: None,
        }
    }
}

impl UiState {
    /// Regenerate the heatmap and upload it when (alpha, enabled) changed.
    /// Locale changes never land here: labels repaint every frame anyway.
    fn rebuild_if_needed(&mut self, ctx: &egui::Context, domain: Domain) {
        let key = (self.params.alpha.to_bits(), self.params.enabled);
        if self.build_key == Some(key) && self.texture.is_some() {
            return;
        }
        let t0 = std::time::Instant::now();
        let (map, stats) = render_heatmap(MAP_W, MAP_H, domain, self.params);
        let ms = t0.elapsed().as_secs_f32() * 1000.0;
        let img = egui::ColorImage::from_rgba_unmultiplied(
            [map.width as usize, map.height as usize],
            map.as_bytes(),
        );
        if let Some(tex) = self.texture.as_mut() {
            tex.set(img, egui::TextureOptions::NEAREST);
        } else {
            self.texture = Some(ctx.load_texture("heatmap", img, egui::TextureOptions::NEAREST));
        }
        println!(
            "[viewer] heatmap W={} H={} | alpha={:.3} penalty={} | loss min/max = {:.4}/{:.4} | time={:.1} ms",
            map.width, map.height, self.params.alpha, self.params.enabled, stats.min, stats.max, ms
        );
        self.map = map;
        self.stats = stats;
        self.build_key = Some(key);
        self.build_ms = ms;
    }
}

fn main() {
    let event_loop = EventLoop::new().unwrap_or_else(|e| panic!("event loop: {e}"));
    let title = format!("Ring Loss Viewer v{}", field::version());
    let window_init = WindowBuilder::new()
        .with_title(title)
        .build(&event_loop)
        .unwrap_or_else(|e| panic!("create window: {e}"));

    // Leak the window to obtain a 'static reference for the surface lifetime without unsafe.
    let window: &'static Window = Box::leak(Box::new(window_init));
    let mut gpu = pollster::block_on(GpuState::new(window));
    let egui_ctx = egui::Context::default();
    let mut egui_state =
        EguiWinitState::new(egui_ctx.clone(), egui::ViewportId::ROOT, &event_loop, None, None);
    let surface_format = gpu.config.format;
    let mut egui_renderer = EguiRenderer::new(&gpu.device, surface_format, None, 1);

    let domain = Domain::centered();
    let mut ui_state = UiState::default();

    let mut last_frame = std::time::Instant::now();
    let mut fps: f32 = 0.0;

    event_loop
        .run(move |event, elwt| {
            match event {
                Event::AboutToWait => {
                    window.request_redraw();
                }
                Event::WindowEvent { event, window_id } if window_id == window.id() => {
                    // forward events to egui (note: window, not context)
                    let _ = egui_state.on_window_event(window, &event);
                    match event {
                        WindowEvent::CloseRequested => elwt.exit(),
                        WindowEvent::Resized(size) => {
                            gpu.resize(size);
                        }
                        WindowEvent::RedrawRequested => {
                            let raw_input = egui_state.take_egui_input(window);
                            let full_output = egui_ctx.run(raw_input, |ctx| {
                                if ctx.input(|i| i.key_pressed(egui::Key::C)) {
                                    ui_state.params.enabled = !ui_state.params.enabled;
                                }
                                if ctx.input(|i| i.key_pressed(egui::Key::L)) {
                                    ui_state.locale = ui_state.locale.toggled();
                                }
                                if ctx.input(|i| i.key_pressed(egui::Key::A)) {
                                    ui_state.show_axes = !ui_state.show_axes;
                                }
                                if ctx.input(|i| i.key_pressed(egui::Key::P)) {
                                    ui_state.show_section = !ui_state.show_section;
                                }
                                if ctx.input(|i| i.key_pressed(egui::Key::H)) {
                                    ui_state.show_hud = !ui_state.show_hud;
                                }

                                ui_state.rebuild_if_needed(ctx, domain);
                                let s = strings(ui_state.locale);

                                egui::TopBottomPanel::top("hud").show_animated(
                                    ctx,
                                    ui_state.show_hud,
                                    |ui| {
                                        ui.horizontal_wrapped(|ui| {
                                            ui.checkbox(
                                                &mut ui_state.params.enabled,
                                                s.penalty_checkbox,
                                            );
                                            ui.add(
                                                egui::Slider::new(
                                                    &mut ui_state.params.alpha,
                                                    0.0..=ALPHA_MAX,
                                                )
                                                .step_by(0.001)
                                                .text(s.alpha_slider),
                                            );
                                            ui.separator();
                                            ui.selectable_value(
                                                &mut ui_state.locale,
                                                Locale::En,
                                                "EN",
                                            );
                                            ui.selectable_value(
                                                &mut ui_state.locale,
                                                Locale::Ru,
                                                "RU",
                                            );
                                            ui.separator();
                                            if ui.button(s.export_button).clicked() {
                                                let path = format!(
                                                    "heatmap_a{:.3}_{}.png",
                                                    ui_state.params.alpha,
                                                    if ui_state.params.enabled { "on" } else { "off" }
                                                );
                                                ui_state.export_status =
                                                    Some(match export_heatmap_png(&ui_state.map, &path) {
                                                        Ok(()) => {
                                                            println!("[export] wrote {path}");
                                                            path
                                                        }
                                                        Err(e) => {
                                                            println!("[export] {e}");
                                                            e
                                                        }
                                                    });
                                            }
                                            if let Some(status) = &ui_state.export_status {
                                                ui.label(status.as_str());
                                            }
                                        });
                                        ui.separator();
                                        ui.horizontal_wrapped(|ui| {
                                            ui.label(s.hud_hint);
                                            ui.separator();
                                            ui.label(format!(
                                                "loss min/max = {:.4}/{:.4}  build={:.1} ms  FPS: {:.0}",
                                                ui_state.stats.min, ui_state.stats.max, ui_state.build_ms, fps
                                            ));
                                        });
                                    },
                                );

                                let mut show_section = ui_state.show_section;
                                if show_section {
                                    egui::Window::new(s.section_title)
                                        .id(egui::Id::new("ring_section_window"))
                                        .open(&mut show_section)
                                        .default_width(360.0)
                                        .show(ctx, |ui| {
                                            let section = plot::build_ring_section(
                                                ui_state.params,
                                                RING_STEPS,
                                                s.section_curve,
                                                s.section_minima,
                                            );
                                            ui.label(format!(
                                                "min/max = {:.4}/{:.4}",
                                                section.stats.min, section.stats.max
                                            ));
                                            egui_plot::Plot::new("ring_section")
                                                .height(200.0)
                                                .show(ui, |pu| {
                                                    pu.line(section.curve);
                                                    pu.points(section.minima);
                                                });
                                        });
                                }
                                ui_state.show_section = show_section;

                                egui::CentralPanel::default().show(ctx, |ui| {
                                    let avail = ui.available_rect_before_wrap();
                                    let painter = ui.painter_at(avail);
                                    if let Some(tex) = &ui_state.texture {
                                        let side = avail.width().min(avail.height());
                                        let rect = egui::Rect::from_center_size(
                                            avail.center(),
                                            egui::vec2(side, side),
                                        );
                                        let uv = egui::Rect::from_min_max(
                                            egui::pos2(0.0, 0.0),
                                            egui::pos2(1.0, 1.0),
                                        );
                                        painter.image(tex.id(), rect, uv, egui::Color32::WHITE);
                                        if ui_state.show_axes {
                                            for sh in overlay::axis_cross(rect) {
                                                painter.add(sh);
                                            }
                                            let (xa, ya) = overlay::label_anchors(rect);
                                            let font = egui::FontId::proportional(14.0);
                                            painter.text(
                                                xa,
                                                egui::Align2::RIGHT_BOTTOM,
                                                s.axis_x,
                                                font.clone(),
                                                egui::Color32::WHITE,
                                            );
                                            painter.text(
                                                ya,
                                                egui::Align2::LEFT_TOP,
                                                s.axis_y,
                                                font,
                                                egui::Color32::WHITE,
                                            );
                                        }
                                    }
                                });
                            });

                            for (id, image_delta) in &full_output.textures_delta.set {
                                egui_renderer.update_texture(
                                    &gpu.device,
                                    &gpu.queue,
                                    *id,
                                    image_delta,
                                );
                            }
                            for id in &full_output.textures_delta.free {
                                egui_renderer.free_texture(id);
                            }
                            let ppp = window.scale_factor() as f32;
                            let paint_jobs = egui_ctx.tessellate(full_output.shapes, ppp);

                            let frame = match gpu.surface.get_current_texture() {
                                Ok(f) => f,
                                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                                    gpu.resize(window.inner_size());
                                    return;
                                }
                                Err(wgpu::SurfaceError::OutOfMemory) => {
                                    elwt.exit();
                                    return;
                                }
                                Err(wgpu::SurfaceError::Timeout) => {
                                    return;
                                }
                            };
                            let view =
                                frame.texture.create_view(&wgpu::TextureViewDescriptor::default());
                            let mut encoder = gpu.device.create_command_encoder(
                                &wgpu::CommandEncoderDescriptor { label: Some("encoder") },
                            );

                            let screen_desc = ScreenDescriptor {
                                size_in_pixels: [gpu.config.width, gpu.config.height],
                                pixels_per_point: ppp,
                            };
                            egui_renderer.update_buffers(
                                &gpu.device,
                                &gpu.queue,
                                &mut encoder,
                                &paint_jobs,
                                &screen_desc,
                            );

                            {
                                let mut rpass =
                                    encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                                        label: Some("egui pass"),
                                        color_attachments: &[Some(
                                            wgpu::RenderPassColorAttachment {
                                                view: &view,
                                                resolve_target: None,
                                                ops: wgpu::Operations {
                                                    load: wgpu::LoadOp::Clear(wgpu::Color {
                                                        r: 0.02,
                                                        g: 0.02,
                                                        b: 0.04,
                                                        a: 1.0,
                                                    }),
                                                    store: wgpu::StoreOp::Store,
                                                },
                                            },
                                        )],
                                        depth_stencil_attachment: None,
                                        occlusion_query_set: None,
                                        timestamp_writes: None,
                                    });
                                egui_renderer.render(&mut rpass, &paint_jobs, &screen_desc);
                            }
                            gpu.queue.submit(std::iter::once(encoder.finish()));
                            frame.present();

                            egui_state.handle_platform_output(window, full_output.platform_output);
                            let now = std::time::Instant::now();
                            let dt = now.duration_since(last_frame).as_secs_f32();
                            last_frame = now;
                            if dt > 0.0 {
                                fps = 0.9 * fps + 0.1 * (1.0 / dt);
                            }
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        })
        .unwrap_or_else(|e| panic!("run app: {e}"));
}
