mod config;

use std::path::PathBuf;

use anyhow::Result;
use config::DemoConfig;
use unimail_foundation::graphics::{Brush, DrawPrimitive, DrawScopeDefault, TextDirection};
use unimail_foundation::layout::{total_width, MonospacedTextMeasurer};
use unimail_foundation::{
    layout_and_draw_folder_chips, ChipRowGeometry, DirectionalDragGesture, DragDirection,
    DragListener, DragSample,
};

const ROW_HEIGHT: f32 = 18.0;

struct LoggingListener;

impl DragListener for LoggingListener {
    fn on_drag_start(&mut self) {
        log::info!("drag start");
    }

    fn on_drag(&mut self, delta_x: f32) {
        log::info!("drag {delta_x:.1}px");
    }

    fn on_drag_end(&mut self, total_delta_x: f32, velocity_x: f32, is_fling: bool) {
        log::info!("drag end {total_delta_x:.1}px at {velocity_x:.0}px/s (fling: {is_fling})");
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => DemoConfig::load(&path)?,
        None => DemoConfig::default(),
    };

    draw_row(&config)?;
    replay_swipe(&config);
    Ok(())
}

fn draw_row(config: &DemoConfig) -> Result<()> {
    let style = config.style.scaled(config.density);
    let measurer = MonospacedTextMeasurer::new(config.char_width * config.density);
    let row_width = config.row_width * config.density;
    let direction = config
        .folders
        .first()
        .map(|folder| TextDirection::detect(&folder.name))
        .unwrap_or_default();
    let geometry = ChipRowGeometry {
        start: 0.0,
        end: row_width,
        top: 0.0,
        height: ROW_HEIGHT * config.density,
        direction,
    };

    let mut scope = DrawScopeDefault::new();
    let widths = layout_and_draw_folder_chips(
        &mut scope,
        &config.folders,
        config.max_cell_width * config.density,
        config.max_chips,
        geometry,
        &style,
        &measurer,
    )?;

    log::info!(
        "{} chips, row width {:.1} of {:.1}",
        widths.len(),
        total_width(&widths, style.inter_chip_gap),
        row_width
    );
    for primitive in scope.primitives() {
        match primitive {
            DrawPrimitive::RoundRect { rect, .. } => {
                log::info!("chip  x={:.1} w={:.1}", rect.x, rect.width);
            }
            DrawPrimitive::Text {
                text, brush, align, ..
            } => {
                let faded = !matches!(brush, Brush::Solid(_));
                log::info!("text  {text:?} {align:?} faded={faded}");
            }
        }
    }
    Ok(())
}

fn replay_swipe(config: &DemoConfig) {
    let gestures = config.gestures.scaled(config.density);
    let mut gesture = DirectionalDragGesture::new(DragDirection::LeftToRight, gestures);
    let mut listener = LoggingListener;

    let d = config.density;
    let samples = [
        DragSample::down(20.0 * d, 10.0 * d, 0),
        DragSample::moved(24.0 * d, 10.0 * d, 8),
        DragSample::moved(48.0 * d, 11.0 * d, 16),
        DragSample::moved(96.0 * d, 12.0 * d, 24),
        DragSample::moved(150.0 * d, 12.0 * d, 32),
        DragSample::up(190.0 * d, 12.0 * d, 40),
    ];
    for sample in samples {
        let intercepted = gesture.process(sample, &mut listener);
        log::debug!("{:?} at x={:.1} -> intercept {intercepted}", sample.phase, sample.x);
    }
}
