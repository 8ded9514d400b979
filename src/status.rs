//! # Modem response status
//!
//! Every response fetched from the modem starts with a single status
//! byte: 0 reports success, any other value is a modem error code. The
//! driver never interprets the non-zero codes, it hands them to the
//! caller as-is.

use super::Ol2385Error;

/// Status byte leading every modem response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status(u8);

impl Status {
    /// Wrap a raw status byte
    pub fn from_byte(byte: u8) -> Status {
        Status(byte)
    }

    /// Raw modem status code
    pub fn code(&self) -> u8 {
        self.0
    }

    /// Return true when the modem reported success
    pub fn is_ok(&self) -> bool {
        self.0 == 0
    }

    /// Check the status and return Ok/Err, keeping the raw code
    pub fn check(&self) -> Result<(), Ol2385Error> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(Ol2385Error::Cmd(self.0))
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Status {
    fn format(&self, fmt: defmt::Formatter) {
        if self.is_ok() {
            defmt::write!(fmt, "Command succeeded");
        } else {
            defmt::write!(fmt, "Command failed, error code {}", self.0);
        }
    }
}
