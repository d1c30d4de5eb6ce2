//! Adapters: concrete implementations of the port traits.
//!
//! | Adapter    | Implements                     | Connects to               |
//! |------------|--------------------------------|---------------------------|
//! | `hardware` | DriverSensePort, FanOutputPort | embedded-hal pins         |
//! | `thermal`  | ThermalPort                    | In-memory thermal tables  |
//! | `log_sink` | EventSink                      | `log` output              |
//! | `time`     | ClockPort                      | `Instant` / manual clock  |

pub mod hardware;
pub mod log_sink;
pub mod thermal;
pub mod time;
