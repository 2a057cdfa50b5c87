#![cfg_attr(not(test), no_std)]

//! LedSkates link - command protocol shared by the host and client nodes
//!
//! Layers:
//! - `command` - Command data model and wire codec
//! - `numeric` / `adjust` - Value decoding (lenient integers, relative nudges)
//! - `engine` - Effect engine port ([`EffectEngine`] trait)
//! - `dispatch` - Applies commands to the engine and scheduler
//! - `auto_cycle` - Periodic mode advancement state machine
//! - `relay` / `intake` - Datagram link halves (host mirror, client receive)
//! - `control` - Control surface request decoding
//! - `node` - Per-node state and loop iteration
//!
//! Everything here is hardware-agnostic and `no_std`. Time is passed in as
//! [`embassy_time::Instant`] values.

pub mod adjust;
pub mod auto_cycle;
pub mod command;
pub mod control;
pub mod dispatch;
pub mod engine;
pub mod intake;
pub mod node;
pub mod numeric;
pub mod relay;

pub use adjust::Adjustment;
pub use auto_cycle::{AUTO_CYCLE_PERIOD, AutoCycle, AutoCycleState};
pub use command::{Command, CommandKey, MAX_DATAGRAM_LEN, ParseError, Token};
pub use control::{ControlRequest, MAX_REQUEST_COMMANDS, Route};
pub use dispatch::dispatch;
pub use engine::{COLOR_MAX, EffectEngine};
pub use intake::{CommandIntake, DatagramSource};
pub use node::{ClientNode, HostNode, Node};
pub use relay::{DatagramSink, MirrorRelay, RelayStats};
