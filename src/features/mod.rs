pub mod clock;
pub mod raspberrypi;
pub mod temperature;
pub mod throttled;
pub mod voltage;
