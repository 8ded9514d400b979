//! # Command frame encoders
//!
//! Every frame sent to the modem is a length-prefixed byte sequence: the
//! first byte holds the number of bytes that follow it (opcode plus
//! arguments). Encoders are pure functions from their parameters to a
//! fresh frame, so repeated calls can never drift a shared template.

pub mod cmd_radio;
pub mod cmd_system;
