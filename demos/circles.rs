use gpui::{AppContext, Application, Bounds, WindowBounds, WindowOptions, px, size};

use gpui_circles::{GpuiSceneView, Point, Scene, SceneViewConfig, Theme};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gpui_circles=info".into()),
        )
        .init();

    let dark = std::env::args().any(|arg| arg == "--dark");
    let preset = std::env::args().any(|arg| arg == "--preset");

    Application::new().run(move |cx| {
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(960.0), px(640.0)),
                cx,
            ))),
            ..Default::default()
        };

        cx.open_window(options, |_window, cx| {
            let config = SceneViewConfig {
                theme: if dark { Theme::dark() } else { Theme::light() },
                ..Default::default()
            };

            let view = if preset {
                let scene = Scene::from_points(&[
                    Point::new(360.0, 320.0),
                    Point::new(520.0, 320.0),
                    Point::new(600.0, 320.0),
                    Point::new(600.0, 460.0),
                ])
                .unwrap();
                GpuiSceneView::with_scene(scene, config)
            } else {
                GpuiSceneView::with_config(config)
            };
            cx.new(|_| view)
        })
        .unwrap();
    });
}
