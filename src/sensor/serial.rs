//! Serial device setup for the sensor board

use std::thread;
use std::time::Duration;

use serialport::{ClearBuffer, DataBits, FlowControl, Parity, SerialPort, StopBits};

/// Line speed the sensor firmware writes at
pub const SENSOR_BAUD_RATE: u32 = 57_600;

/// How long a read may wait on an idle line before reporting a timeout
pub const READ_TIMEOUT: Duration = Duration::from_millis(100);

/// Boards reset when DTR rises; give them a moment before reading
const SETTLE_DELAY: Duration = Duration::from_millis(20);

/// Open `path` as an 8N1 port without flow control, DTR raised and both
/// buffers flushed. The returned port is `Read + Send`, ready for
/// [`SensorFeed::spawn`](super::SensorFeed::spawn).
pub fn open_serial(path: &str, baud_rate: u32) -> serialport::Result<Box<dyn SerialPort>> {
    let mut port = serialport::new(path, baud_rate)
        .data_bits(DataBits::Eight)
        .parity(Parity::None)
        .stop_bits(StopBits::One)
        .flow_control(FlowControl::None)
        .timeout(READ_TIMEOUT)
        .open()?;

    port.write_data_terminal_ready(true)?;
    port.clear(ClearBuffer::All)?;
    thread::sleep(SETTLE_DELAY);

    log::info!(
        "Opened {} at {} baud ({})",
        path,
        port.baud_rate()?,
        port.name().unwrap_or_default()
    );
    Ok(port)
}
