//! Node run loops
//!
//! Each loop owns its node, so engine and scheduler state never cross a task
//! boundary. Every iteration yields to the executor so the network tasks keep
//! running.

use embassy_futures::yield_now;
use embassy_time::Instant;

use ledskates_link::{ClientNode, DatagramSink, DatagramSource, EffectEngine, HostNode};

use crate::tasks::ControlReceiver;

/// Host loop: one queued control request, engine tick, auto-cycle check
pub async fn run_host<E, S>(host: &mut HostNode<E, S>, requests: ControlReceiver) -> !
where
    E: EffectEngine,
    S: DatagramSink,
{
    loop {
        let request = requests.try_receive().ok();
        host.run_once(request.as_deref(), Instant::now());
        yield_now().await;
    }
}

/// Client loop: one pending datagram, engine tick, auto-cycle check
pub async fn run_client<E, R>(client: &mut ClientNode<E, R>) -> !
where
    E: EffectEngine,
    R: DatagramSource,
{
    loop {
        client.run_once(Instant::now());
        yield_now().await;
    }
}
