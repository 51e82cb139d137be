//! Sensor input collaborator
//!
//! Everything between the serial byte stream and a raw integer sample:
//! - `line_buffer`: bounded newline framing
//! - `parse`: `"<int>,<int>"` lines to samples
//! - `reader`: background thread feeding the frame loop
//! - `serial`: opening the device with the board's line settings

pub mod line_buffer;
pub mod parse;
pub mod reader;
pub mod serial;

pub use line_buffer::LineBuffer;
pub use parse::parse_sample;
pub use reader::SensorFeed;
pub use serial::{SENSOR_BAUD_RATE, open_serial};
