// Radio commands API (zone selection and frame transmission)

use crate::Ol2385Error;

/// Number of user bytes carried by one uplink frame
pub const FRAME_PAYLOAD_LEN: usize = 5;

/// Radio configuration zone, one of the four fixed Sigfox frequency plans
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RadioZone {
    /// ETSI Europe (863 MHz - 870 MHz)
    Rcz1 = 0,
    /// FCC US (902 MHz - 928 MHz)
    Rcz2 = 1,
    /// ARIB Japan, Korea (915 MHz - 930 MHz)
    Rcz3 = 2,
    /// FCC Latin America, Australia, New Zealand (902 MHz - 915 MHz)
    Rcz4 = 3,
}

impl RadioZone {
    /// Human readable name of the frequency plan
    pub fn description(&self) -> &'static str {
        match self {
            RadioZone::Rcz1 => "RCZ1 ETSI Europe (863 MHz - 870 MHz)",
            RadioZone::Rcz2 => "RCZ2 FCC US (902 MHz - 928 MHz)",
            RadioZone::Rcz3 => "RCZ3 ARIB Japan, Korea (915 MHz - 930 MHz)",
            RadioZone::Rcz4 => "RCZ4 FCC Latin America, Australia, New Zealand (902 MHz - 915 MHz)",
        }
    }
}

impl TryFrom<u8> for RadioZone {
    type Error = Ol2385Error;

    fn try_from(value: u8) -> Result<Self, Ol2385Error> {
        match value {
            0 => Ok(RadioZone::Rcz1),
            1 => Ok(RadioZone::Rcz2),
            2 => Ok(RadioZone::Rcz3),
            3 => Ok(RadioZone::Rcz4),
            _ => Err(Ol2385Error::InvalidZone),
        }
    }
}

/// Selects the frequency plan. The zone index is folded into the opcode.
pub fn set_net_standard_cmd(zone: RadioZone) -> [u8; 2] {
    [0x01, 0x14 + zone as u8]
}

/// Transmits one uplink frame carrying `payload`
pub fn send_frame_cmd(payload: &[u8; FRAME_PAYLOAD_LEN]) -> [u8; 7] {
    let mut cmd = [0u8; 7];
    cmd[0] = 0x06;
    cmd[1] = 0x04;
    cmd[2..].copy_from_slice(payload);
    cmd
}

/// Canonical uplink payload with a minute-of-hour stamp in the last
/// byte. Reading the clock stays with the caller.
pub fn stamped_payload(minute: u8) -> [u8; FRAME_PAYLOAD_LEN] {
    [0x02, 0x00, 0x00, 0x00, minute]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_index_folds_into_opcode() {
        let zones = [
            (RadioZone::Rcz1, 0),
            (RadioZone::Rcz2, 1),
            (RadioZone::Rcz3, 2),
            (RadioZone::Rcz4, 3),
        ];
        for (zone, index) in zones {
            let cmd = set_net_standard_cmd(zone);
            assert_eq!(cmd[0] as usize, cmd.len() - 1);
            assert_eq!(cmd[1], 0x14 + index);
        }
    }

    #[test]
    fn zone_index_is_bounded() {
        assert_eq!(RadioZone::try_from(3), Ok(RadioZone::Rcz4));
        for index in 4..=u8::MAX {
            assert_eq!(RadioZone::try_from(index), Err(Ol2385Error::InvalidZone));
        }
    }

    #[test]
    fn send_frame_layout() {
        let cmd = send_frame_cmd(&stamped_payload(42));
        assert_eq!(cmd[0] as usize, cmd.len() - 1);
        assert_eq!(cmd, [0x06, 0x04, 0x02, 0x00, 0x00, 0x00, 42]);
    }

    #[test]
    fn encoders_do_not_drift() {
        assert_eq!(
            set_net_standard_cmd(RadioZone::Rcz4),
            set_net_standard_cmd(RadioZone::Rcz4)
        );
        assert_eq!(
            send_frame_cmd(&stamped_payload(7)),
            send_frame_cmd(&stamped_payload(7))
        );
    }
}
