#![cfg_attr(not(test), no_std)]

pub mod status;
pub mod cmd;
pub mod system;
pub mod radio;

use embassy_time::{Duration, Timer};
use embedded_hal::digital::v2::{InputPin, OutputPin};
use embedded_hal_async::spi::SpiBus;

use status::Status;
pub use cmd::cmd_radio::RadioZone; // Re-export zone enum as it is needed for every session

/// Largest command frame the modem accepts
const CMD_MAX: usize = 16;
/// Size of the response buffer, well above the longest modem response
const RSP_MAX: usize = 64;

/// Number of data lanes used for one direction of the bus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LaneWidth {
    #[default]
    Single,
    Dual,
    Quad,
}

/// Lane usage of the bus. The lane count itself is part of the bus setup;
/// the driver only keeps the undriven direction off the bus when a
/// reduced-lane width is active. Loopback wiring exchanges both
/// directions regardless of width.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkMode {
    pub tx_width: LaneWidth,
    pub rx_width: LaneWidth,
    pub loopback: bool,
}

/// Transaction timing and link configuration
#[derive(Debug, Clone, Copy)]
pub struct Config {
    /// Delay between two samples of the ack line
    pub ack_poll_interval: Duration,
    /// Maximum number of ack samples before a transaction is abandoned
    pub ack_poll_limit: u32,
    /// Settle time after the wake-up frame before the modem accepts commands
    pub wake_settle: Duration,
    /// Lane usage of the bus
    pub link: LinkMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ack_poll_interval: Duration::from_secs(1),
            ack_poll_limit: 30,
            wake_settle: Duration::from_secs(3),
            link: LinkMode::default(),
        }
    }
}

/// OL2385 Sigfox modem device
pub struct Ol2385<O, I, SPI> {
    /// Ack line from the modem, low when a response is pending
    ack: I,
    /// SPI bus
    spi: SPI,
    /// NSS output pin
    nss: O,
    /// Timing and link configuration
    config: Config,
    /// Last fetched response, status byte first
    rsp: [u8; RSP_MAX],
    rsp_len: usize,
    last_status: Option<Status>,
}

/// Error using the OL2385
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Ol2385Error {
    /// Unable to set/get a pin level
    Pin,
    /// Unable to use SPI
    Spi,
    /// Modem reported a non-zero status code
    Cmd(u8),
    /// Modem signalled ready but the response carried no status byte
    NoResponse,
    /// Ack line never signalled a pending response
    AckTimeout,
    /// Command or response does not fit the internal buffers
    InvalidSize,
    /// Radio zone index outside the four supported zones
    InvalidZone,
}

impl<O, I, SPI> Ol2385<O, I, SPI>
where
    O: OutputPin,
    I: InputPin,
    SPI: SpiBus<u8>,
{
    /// Create an OL2385 device with the default timings (1s ack cadence,
    /// 3s wake-up settle) on a plain full-duplex bus
    pub fn new(ack: I, spi: SPI, nss: O) -> Self {
        Self::with_config(ack, spi, nss, Config::default())
    }

    /// Create an OL2385 device with explicit timing and link configuration
    pub fn with_config(ack: I, spi: SPI, nss: O, config: Config) -> Self {
        Self {
            ack,
            spi,
            nss,
            config,
            rsp: [0; RSP_MAX],
            rsp_len: 0,
            last_status: None,
        }
    }

    /// Check if the ack line reports a pending response (debug)
    pub fn is_ready(&self) -> bool {
        self.ack.is_low().unwrap_or(false)
    }

    /// Status byte of the last fetched response
    pub fn last_status(&self) -> Option<Status> {
        self.last_status
    }

    /// Payload of the last fetched response, after the status byte
    pub fn response(&self) -> &[u8] {
        if self.rsp_len > 1 {
            &self.rsp[1..self.rsp_len]
        } else {
            &[]
        }
    }

    /// One full-duplex exchange with NSS asserted. With a reduced-lane
    /// width configured only the driven direction touches the bus.
    pub async fn transfer(&mut self, tx: &[u8], rx: &mut [u8]) -> Result<(), Ol2385Error> {
        self.nss.set_low().map_err(|_| Ol2385Error::Pin)?;
        let link = self.config.link;
        let res = if !link.loopback && link.tx_width != LaneWidth::Single {
            self.spi.write(tx).await
        } else if !link.loopback && link.rx_width != LaneWidth::Single {
            self.spi.read(rx).await
        } else {
            self.spi.transfer(rx, tx).await
        };
        res.map_err(|_| Ol2385Error::Spi)?;
        self.nss.set_high().map_err(|_| Ol2385Error::Pin)
    }

    /// Send one command frame. Bytes clocked into the receive direction
    /// are scratch and discarded.
    pub async fn cmd_wr(&mut self, req: &[u8]) -> Result<(), Ol2385Error> {
        if req.len() > CMD_MAX {
            return Err(Ol2385Error::InvalidSize);
        }
        // #[cfg(feature = "defmt")]{defmt::info!("[CMD WR] {:02x}", req);}
        let mut scratch = [0u8; CMD_MAX];
        self.transfer(req, &mut scratch[..req.len()]).await
    }

    /// Wait for the modem to signal a pending response, i.e. ack line
    /// low. The line is sampled first and the configured interval slept
    /// between samples, up to `ack_poll_limit` samples.
    pub async fn wait_ack(&mut self) -> Result<(), Ol2385Error> {
        for _ in 0..self.config.ack_poll_limit {
            if self.ack.is_low().map_err(|_| Ol2385Error::Pin)? {
                return Ok(());
            }
            Timer::after(self.config.ack_poll_interval).await;
        }
        Err(Ol2385Error::AckTimeout)
    }

    /// Fetch a pending response: one byte holding the response length
    /// (the length counts itself), then the remaining bytes, the first of
    /// which is the status code.
    pub async fn read_response(&mut self) -> Result<Status, Ol2385Error> {
        self.rsp_len = 0;
        self.last_status = None;

        let mut len_rx = [0u8];
        self.transfer(&[0u8], &mut len_rx).await?;
        let len = len_rx[0] as usize;
        // A response without a status byte is distinct from status 0
        if len < 2 {
            return Err(Ol2385Error::NoResponse);
        }
        if len - 1 > RSP_MAX {
            return Err(Ol2385Error::InvalidSize);
        }

        let tx = [0u8; RSP_MAX];
        let mut rx = [0u8; RSP_MAX];
        self.transfer(&tx[..len - 1], &mut rx[..len - 1]).await?;
        // #[cfg(feature = "defmt")]{defmt::info!("[RSP] {:02x}", &rx[..len - 1]);}

        self.rsp[..len - 1].copy_from_slice(&rx[..len - 1]);
        self.rsp_len = len - 1;
        let status = Status::from_byte(rx[0]);
        self.last_status = Some(status);
        Ok(status)
    }

    /// Run one full transaction: send the command frame, wait for the
    /// ack line, fetch the response. The returned status is the raw
    /// modem code; [`Status::check`] turns a non-zero code into an error.
    pub async fn transact(&mut self, req: &[u8]) -> Result<Status, Ol2385Error> {
        self.cmd_wr(req).await?;
        self.wait_ack().await?;
        self.read_response().await
    }
}
