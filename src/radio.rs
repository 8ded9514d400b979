//! # Radio operations API
//!
//! ## Available Methods
//! - [`set_net_standard`](Ol2385::set_net_standard) - Select the regional frequency plan
//! - [`send_frame`](Ol2385::send_frame) - Transmit one uplink frame

use embedded_hal::digital::v2::{InputPin, OutputPin};
use embedded_hal_async::spi::SpiBus;

pub use super::cmd::cmd_radio::*;

use super::{Ol2385, Ol2385Error};

impl<O, I, SPI> Ol2385<O, I, SPI>
where
    O: OutputPin,
    I: InputPin,
    SPI: SpiBus<u8>,
{
    /// Select the regional frequency plan. A non-zero modem status means
    /// the radio is not configured and the session should abort.
    pub async fn set_net_standard(&mut self, zone: RadioZone) -> Result<(), Ol2385Error> {
        let req = set_net_standard_cmd(zone);
        self.transact(&req).await?.check()
    }

    /// Transmit one uplink frame carrying `payload`. A failed send
    /// leaves the session usable, the caller decides whether to retry
    /// or carry on.
    pub async fn send_frame(&mut self, payload: &[u8; FRAME_PAYLOAD_LEN]) -> Result<(), Ol2385Error> {
        let req = send_frame_cmd(payload);
        self.transact(&req).await?.check()
    }
}
