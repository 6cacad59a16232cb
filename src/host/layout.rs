use tauri::{LogicalPosition, LogicalSize, PhysicalPosition, PhysicalSize};

use crate::config::HostConfig;

/// Where the bar first appears: centred horizontally, `top_offset_ratio` of
/// the way down the monitor.
pub fn initial_position(
    monitor_size: PhysicalSize<u32>,
    scale_factor: f64,
    config: &HostConfig,
) -> PhysicalPosition<f64> {
    let monitor: LogicalSize<f64> = monitor_size.to_logical(scale_factor);

    let x = (monitor.width - config.width) / 2.0;
    let y = (monitor.height * config.top_offset_ratio).round();

    LogicalPosition::new(x, y).to_physical(scale_factor)
}

/// Size after a settings toggle, given the current logical height.
pub fn toggled_size(current_height: f64, config: &HostConfig) -> LogicalSize<f64> {
    if current_height > config.height {
        LogicalSize::new(config.width, config.height)
    } else {
        LogicalSize::new(config.width, config.expanded_height)
    }
}
