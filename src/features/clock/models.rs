use crate::shared::metrics::{GraphDefinition, MetricDefinition, Unit};

/// Clock values are collected in Hz and displayed in MHz.
pub const HZ_TO_MHZ: f64 = 0.000001;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockDevice {
    /// Argument to `measure_clock`; also the metric name.
    pub device: &'static str,
    pub label: &'static str,
}

pub const CLOCK_DEVICES: [ClockDevice; 12] = [
    ClockDevice { device: "arm", label: "ARM cores" },
    ClockDevice { device: "core", label: "VC4 scaler cores" },
    ClockDevice { device: "H264", label: "H264 block" },
    ClockDevice { device: "isp", label: "Image Signal Processor" },
    ClockDevice { device: "v3d", label: "3D block" },
    ClockDevice { device: "uart", label: "UART" },
    ClockDevice { device: "pwm", label: "PWM block" },
    ClockDevice { device: "emmc", label: "SD card interface" },
    ClockDevice { device: "pixel", label: "Pixel valve" },
    ClockDevice { device: "vec", label: "Analogue video encoder" },
    ClockDevice { device: "hdmi", label: "HDMI" },
    ClockDevice { device: "dpi", label: "Display Peripheral Interface" },
];

pub fn graph() -> GraphDefinition {
    GraphDefinition {
        key: "clock",
        label: "Clock frequency [MHz]",
        unit: Unit::Float,
        metrics: CLOCK_DEVICES
            .iter()
            .map(|clock| MetricDefinition::scaled(clock.device, clock.label, HZ_TO_MHZ))
            .collect(),
    }
}
