use gpui::{AppContext, Application, Bounds, WindowBounds, WindowOptions, px, size};

use gpui_areaplot::{
    CanvasRequest, ClickCapture, DiagramViewConfig, FrameOrchestrator, GpuiDiagramView,
    IntegrationError, SampledPoint, ViewHandle, ViewState,
};

/// Local stand-in for the server-side area check.
fn is_hit(x: f64, y: f64, r: f64) -> bool {
    let triangle = x >= 0.0 && y >= 0.0 && y <= -2.0 * x + r;
    let rectangle = x <= 0.0 && y <= 0.0 && x >= -r / 2.0 && y >= -r;
    let wedge = x >= 0.0 && y <= 0.0 && x * x + y * y <= r * r;
    triangle || rectangle || wedge
}

fn classify(view: &ViewHandle, request: &CanvasRequest) -> Result<(), IntegrationError> {
    let x: f64 = request
        .x
        .parse()
        .map_err(|err| IntegrationError::Transport(format!("bad x: {err}")))?;
    let y: f64 = request
        .y
        .parse()
        .map_err(|err| IntegrationError::Transport(format!("bad y: {err}")))?;
    let point = SampledPoint::new(x, y, is_hit(x, y, request.r));
    view.write(|state| state.points.push(point))
        .ok_or(IntegrationError::HookUnavailable)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    Application::new().run(|cx| {
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(520.0), px(520.0)),
                cx,
            ))),
            ..Default::default()
        };

        cx.open_window(options, |_window, cx| {
            let view = ViewHandle::new(ViewState::new(3.0));
            let hook_view = view.clone();
            let capture = ClickCapture::builder()
                .hook(move |request: &CanvasRequest| classify(&hook_view, request))
                .build()
                .unwrap();

            let config = DiagramViewConfig {
                show_hover: true,
                ..Default::default()
            };
            let diagram = GpuiDiagramView::with_config(FrameOrchestrator::new(view, capture), config);
            cx.new(|_| diagram)
        })
        .unwrap();
    });
}
