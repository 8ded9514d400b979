//! # Power state and link management API
//!
//! This module provides the session bring-up and tear-down operations:
//! waking the modem, verifying the link carries data intact, and putting
//! the modem back to sleep. A typical session runs wake-up, link check,
//! zone selection, any number of frame sends, then sleep.
//!
//! ## Available Methods
//! - [`wake_up`](Ol2385::wake_up) - Bring the modem out of sleep
//! - [`link_check`](Ol2385::link_check) - Verify link integrity with the fixed echo pattern
//! - [`sleep`](Ol2385::sleep) - Return the modem to its low-power state

use embassy_time::Timer;
use embedded_hal::digital::v2::{InputPin, OutputPin};
use embedded_hal_async::spi::SpiBus;

pub use super::cmd::cmd_system::*;

use super::{Ol2385, Ol2385Error};

impl<O, I, SPI> Ol2385<O, I, SPI>
where
    O: OutputPin,
    I: InputPin,
    SPI: SpiBus<u8>,
{
    /// Bring the modem out of sleep. The modem does not respond to the
    /// wake-up frame; the configured settle delay runs before it is
    /// ready for commands.
    pub async fn wake_up(&mut self) -> Result<(), Ol2385Error> {
        let req = wakeup_cmd();
        self.cmd_wr(&req).await?;
        Timer::after(self.config.wake_settle).await;
        Ok(())
    }

    /// Verify link integrity by having the modem echo a fixed pattern.
    /// A non-zero modem status makes the whole session unusable and
    /// should abort it.
    pub async fn link_check(&mut self) -> Result<(), Ol2385Error> {
        let req = echo_test_cmd();
        self.transact(&req).await?.check()
    }

    /// Return the modem to its low-power state. The modem is asleep once
    /// the frame is out, so no response is fetched.
    pub async fn sleep(&mut self) -> Result<(), Ol2385Error> {
        let req = sleep_cmd();
        self.cmd_wr(&req).await
    }
}
