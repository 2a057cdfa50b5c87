//! Node run loop
//!
//! Each node owns one engine and one auto-cycle scheduler and drives them
//! from a single cooperative loop. One loop iteration:
//! 1. handles at most one pending inbound command source,
//! 2. advances the engine by one tick,
//! 3. runs the auto-cycle check.

use embassy_time::Instant;

use crate::auto_cycle::AutoCycle;
use crate::command::Command;
use crate::dispatch::dispatch;
use crate::engine::EffectEngine;
use crate::intake::{CommandIntake, DatagramSource};
use crate::relay::{DatagramSink, MirrorRelay};

/// Engine and scheduler state of one node
pub struct Node<E: EffectEngine> {
    engine: E,
    auto_cycle: AutoCycle,
}

impl<E: EffectEngine> Node<E> {
    pub const fn new(engine: E) -> Self {
        Self::with_auto_cycle(engine, AutoCycle::new())
    }

    pub const fn with_auto_cycle(engine: E, auto_cycle: AutoCycle) -> Self {
        Self { engine, auto_cycle }
    }

    /// Apply a command to the local state
    pub fn apply(&mut self, command: &Command, now: Instant) {
        dispatch(command, &mut self.engine, &mut self.auto_cycle, now);
    }

    /// Advance the animation and run the auto-cycle check
    pub fn tick(&mut self, now: Instant) {
        self.engine.tick(now);
        self.auto_cycle.poll(&mut self.engine, now);
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn auto_cycle(&self) -> &AutoCycle {
        &self.auto_cycle
    }
}

/// Host node: applies control surface requests and mirrors them to the peer
pub struct HostNode<E: EffectEngine, S: DatagramSink> {
    node: Node<E>,
    relay: MirrorRelay<S>,
}

impl<E: EffectEngine, S: DatagramSink> HostNode<E, S> {
    pub const fn new(node: Node<E>, sink: S) -> Self {
        Self {
            node,
            relay: MirrorRelay::new(sink),
        }
    }

    /// Mirror then apply every command of one request, in order
    pub fn handle_request(&mut self, commands: &[Command], now: Instant) {
        for command in commands {
            self.relay.mirror(command);
            self.node.apply(command, now);
        }
    }

    /// Run one loop iteration with the request taken from the control surface
    pub fn run_once(&mut self, request: Option<&[Command]>, now: Instant) {
        if let Some(commands) = request {
            self.handle_request(commands, now);
        }
        self.node.tick(now);
    }

    pub fn node(&self) -> &Node<E> {
        &self.node
    }

    pub fn node_mut(&mut self) -> &mut Node<E> {
        &mut self.node
    }

    pub fn relay(&self) -> &MirrorRelay<S> {
        &self.relay
    }
}

/// Client node: applies commands received from the host
pub struct ClientNode<E: EffectEngine, R: DatagramSource> {
    node: Node<E>,
    intake: CommandIntake<R>,
}

impl<E: EffectEngine, R: DatagramSource> ClientNode<E, R> {
    pub const fn new(node: Node<E>, source: R) -> Self {
        Self {
            node,
            intake: CommandIntake::new(source),
        }
    }

    /// Run one loop iteration.
    ///
    /// Returns the command received in this iteration, if any.
    pub fn run_once(&mut self, now: Instant) -> Option<Command> {
        let received = self.intake.poll();
        if let Some(command) = &received {
            self.node.apply(command, now);
        }
        self.node.tick(now);
        received
    }

    pub fn node(&self) -> &Node<E> {
        &self.node
    }

    pub fn node_mut(&mut self) -> &mut Node<E> {
        &mut self.node
    }

    pub fn intake_mut(&mut self) -> &mut CommandIntake<R> {
        &mut self.intake
    }
}
