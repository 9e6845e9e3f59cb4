//! Native rendering harness for component tests

use any_spawner::{CustomExecutor, Executor, PinnedFuture, PinnedLocalFuture};
use leptos::prelude::Owner;

/// Drops every spawned task, so effects and section loads never run.
struct Idle;

impl CustomExecutor for Idle {
    fn spawn(&self, _fut: PinnedFuture<()>) {}
    fn spawn_local(&self, _fut: PinnedLocalFuture<()>) {}
    fn poll_local(&self) {}
}

/// Install the idle executor and enter a fresh reactive owner.
///
/// Keep the returned owner alive for the duration of the test.
pub fn reactive_scope() -> Owner {
    // Only the first test in the process gets to install it.
    let _ = Executor::init_custom_executor(Idle);
    let owner = Owner::new();
    owner.set();
    owner
}
