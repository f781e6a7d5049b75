use std::{fs, path::PathBuf, process};

use cgmath::Point2;
use clap::{Parser, ValueEnum};
use touchcam::{
    camera::{AnchorMode, Camera, ScrollLimits},
    controller::CameraController,
    settings::GestureSettings,
    viewport::ViewportSize,
};
use touchcam_winit::WinitInputDriver;
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{Key, NamedKey},
    window::Window,
};

#[derive(Parser)]
#[command(about = "Interactive playground for touchcam gestures")]
struct Args {
    /// JSON file with gesture settings; missing fields take their defaults
    #[arg(long)]
    settings: Option<PathBuf>,

    /// World-space scroll limits as left,top,right,bottom
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    limits: Option<Vec<f64>>,

    /// How the camera position anchors the visible rectangle
    #[arg(long, value_enum, default_value_t = AnchorArg::Center)]
    anchor: AnchorArg,

    /// Initial zoom scalar
    #[arg(long, default_value_t = 1.0)]
    zoom: f64,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 800.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 600.0)]
    height: f64,
}

#[derive(Clone, Copy, ValueEnum)]
enum AnchorArg {
    Center,
    TopLeft,
}

impl From<AnchorArg> for AnchorMode {
    fn from(anchor: AnchorArg) -> Self {
        match anchor {
            AnchorArg::Center => AnchorMode::Center,
            AnchorArg::TopLeft => AnchorMode::TopLeft,
        }
    }
}

fn load_settings(args: &Args) -> GestureSettings {
    let Some(path) = &args.settings else {
        return GestureSettings::default();
    };

    let raw = fs::read_to_string(path).unwrap_or_else(|e| {
        log::error!("cannot read {}: {e}", path.display());
        process::exit(1);
    });

    serde_json::from_str(&raw).unwrap_or_else(|e| {
        log::error!("cannot parse {}: {e}", path.display());
        process::exit(1);
    })
}

fn initial_position(anchor: AnchorMode, limits: &ScrollLimits) -> Point2<f64> {
    match anchor {
        AnchorMode::Center => Point2::new(
            (limits.left + limits.right) / 2.0,
            (limits.top + limits.bottom) / 2.0,
        ),
        AnchorMode::TopLeft => Point2::new(limits.left, limits.top),
    }
}

fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let args = Args::parse();
    let settings = load_settings(&args);

    let limits = match args.limits.as_deref() {
        None => ScrollLimits::default(),
        Some(&[left, top, right, bottom]) => ScrollLimits::new(left, top, right, bottom),
        Some(_) => {
            log::error!("--limits takes exactly four values: left,top,right,bottom");
            process::exit(1);
        }
    };

    let Some(viewport) = ViewportSize::new(args.width, args.height) else {
        log::error!("--width and --height must be positive");
        process::exit(1);
    };

    let mut controller = CameraController::new(settings, viewport).unwrap_or_else(|e| {
        log::error!("invalid gesture settings: {e}");
        process::exit(1);
    });

    let anchor: AnchorMode = args.anchor.into();
    let zoom = controller.settings().clamp_zoom(args.zoom);
    let mut camera = Camera::new(initial_position(anchor, &limits), zoom, anchor, limits);
    camera.update_reference();

    let event_loop = EventLoop::new().expect("failed to create event loop");
    let window = event_loop
        .create_window(
            Window::default_attributes()
                .with_title("touchcam demo")
                .with_inner_size(LogicalSize::new(args.width, args.height)),
        )
        .expect("failed to create window");

    let mut driver = WinitInputDriver::new();
    driver.sync_viewport(&window, &mut controller);

    let mut scale_factor = window.scale_factor();

    log::info!(
        "drag to pan, pinch or scroll to zoom; starting at ({:.1}, {:.1}) zoom {:.2}",
        camera.position().x,
        camera.position().y,
        camera.zoom()
    );

    let loop_ = move |event, window_target: &ActiveEventLoop| {
        let Event::WindowEvent {
            ref event,
            window_id,
        } = event
        else {
            return;
        };

        if window_id != window.id() {
            return;
        }

        if driver.window_input(event, scale_factor, &mut controller, &mut camera) {
            if camera.did_change(0.05) {
                log::info!(
                    "camera: position ({:.1}, {:.1}) zoom {:.2} contacts {}",
                    camera.position().x,
                    camera.position().y,
                    camera.zoom(),
                    controller.active_contacts()
                );
                camera.update_reference();
                window.request_redraw();
            }
        } else {
            match event {
                WindowEvent::CloseRequested
                | WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            state: ElementState::Pressed,
                            logical_key: Key::Named(NamedKey::Escape),
                            ..
                        },
                    ..
                } => window_target.exit(),
                WindowEvent::Resized(winit::dpi::PhysicalSize { width, height }) => {
                    if let Some(viewport) = ViewportSize::new(
                        *width as f64 / scale_factor,
                        *height as f64 / scale_factor,
                    ) {
                        controller.set_viewport_size(viewport);
                    }
                }
                WindowEvent::ScaleFactorChanged {
                    scale_factor: new_scale_factor,
                    ..
                } => {
                    log::info!("new scaling factor: {new_scale_factor}");
                    scale_factor = *new_scale_factor;
                    driver.sync_viewport(&window, &mut controller);
                }
                _ => {}
            }
        }
    };

    event_loop.run(loop_).expect("event loop failed");
}
