use crate::{
    animation::clock::{ClockSignal, FrameClock, RunId},
    config::TransitionConfig,
    foundation::core::Viewport,
    foundation::error::HexwipeResult,
    render::surface::DrawSurface,
    tiles::delay::{Tile, WaveOrigin},
    transition::navigation::NavigationCoordinator,
    transition::phase::{Phase, PhaseEvent, PhaseMachine},
};

type Callback = Box<dyn FnMut()>;
type NavigateCallback = Box<dyn FnMut(&str)>;

/// A hexagon wipe transition instance.
///
/// Owns the phase machine, the pending navigation slot and the consumer callbacks. The host
/// forwards clock signals to [`Transition::on_frame`] / [`Transition::on_timeout`]; callbacks
/// run only after the instance's own state has been updated.
pub struct Transition {
    machine: PhaseMachine,
    navigation: NavigationCoordinator,
    on_partial_reveal: Callback,
    on_complete: Callback,
    on_navigate: NavigateCallback,
}

impl std::fmt::Debug for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transition")
            .field("machine", &self.machine)
            .field("navigation", &self.navigation)
            .finish_non_exhaustive()
    }
}

impl Transition {
    /// Validate `config` and build an idle transition resting in [`Phase::Visible`].
    pub fn new(config: TransitionConfig) -> HexwipeResult<Self> {
        config.validate()?;
        Ok(Self {
            machine: PhaseMachine::new(config),
            navigation: NavigationCoordinator::new(),
            on_partial_reveal: Box::new(|| {}),
            on_complete: Box::new(|| {}),
            on_navigate: Box::new(|_| {}),
        })
    }

    /// Called once per Entering run when content should mount.
    pub fn on_partial_reveal(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_partial_reveal = Box::new(f);
        self
    }

    /// Called once per run when it finishes.
    pub fn on_complete(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_complete = Box::new(f);
        self
    }

    /// Called with the pending target after an exit cover completes.
    pub fn on_navigate(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_navigate = Box::new(f);
        self
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.machine.phase()
    }

    /// `true` while a run is subscribed to the clock.
    pub fn is_animating(&self) -> bool {
        self.machine.is_animating()
    }

    /// Liveness token of the active run.
    pub fn active_run(&self) -> Option<RunId> {
        self.machine.active_run()
    }

    /// Tile set of the active run.
    pub fn tiles(&self) -> &[Tile] {
        self.machine.tiles()
    }

    /// Destination waiting for the current exit cover.
    pub fn pending_target(&self) -> Option<&str> {
        self.navigation.pending()
    }

    /// Configuration in use.
    pub fn config(&self) -> &TransitionConfig {
        self.machine.config()
    }

    /// Reveal freshly navigated content. Supersedes any active run and pending exit.
    pub fn begin_entering<C: FrameClock + ?Sized>(
        &mut self,
        clock: &mut C,
        viewport: Viewport,
        wave: WaveOrigin,
    ) {
        if let Some(dropped) = self.navigation.take() {
            tracing::debug!(destination = %dropped, "pending navigation superseded by new entry");
        }
        self.machine.begin_entering(clock, viewport, wave);
    }

    /// Cover the surface, then navigate to `target`.
    ///
    /// Returns `false` when an exit is already in flight; the request is dropped and the first
    /// target stays pending.
    pub fn request_exit<C: FrameClock + ?Sized>(
        &mut self,
        clock: &mut C,
        target: impl Into<String>,
    ) -> bool {
        let target = target.into();
        if self.machine.phase() == Phase::Exiting || !self.navigation.stash(target.as_str()) {
            tracing::debug!(destination = %target, "exit already requested; dropping");
            return false;
        }
        self.machine.begin_exiting(clock)
    }

    /// Forward a frame tick from the host clock.
    pub fn on_frame<C, S>(&mut self, clock: &mut C, run: RunId, now_ms: f64, surface: &mut S)
    where
        C: FrameClock + ?Sized,
        S: DrawSurface + ?Sized,
    {
        let events = self.machine.on_frame(clock, run, now_ms, surface);
        self.dispatch(clock, events);
    }

    /// Forward a reduced-motion timeout from the host clock.
    pub fn on_timeout<C: FrameClock + ?Sized>(&mut self, clock: &mut C, run: RunId, now_ms: f64) {
        let events = self.machine.on_timeout(clock, run, now_ms);
        self.dispatch(clock, events);
    }

    /// Route any [`ClockSignal`] to the matching handler.
    pub fn handle_signal<C, S>(&mut self, clock: &mut C, signal: ClockSignal, surface: &mut S)
    where
        C: FrameClock + ?Sized,
        S: DrawSurface + ?Sized,
    {
        match signal {
            ClockSignal::Frame { run, now_ms } => self.on_frame(clock, run, now_ms, surface),
            ClockSignal::Timeout { run, now_ms } => self.on_timeout(clock, run, now_ms),
        }
    }

    /// The host viewport changed. Takes effect when the next phase starts.
    pub fn resize(&mut self, viewport: Viewport) {
        self.machine.resize(viewport);
    }

    /// Unmount: cancel everything and forget the pending target. No callback fires.
    pub fn teardown<C: FrameClock + ?Sized>(&mut self, clock: &mut C) {
        self.machine.teardown(clock);
        if let Some(dropped) = self.navigation.take() {
            tracing::debug!(destination = %dropped, "pending navigation dropped on teardown");
        }
    }

    fn dispatch<C: FrameClock + ?Sized>(&mut self, clock: &mut C, events: Vec<PhaseEvent>) {
        for event in events {
            match event {
                PhaseEvent::PartialReveal => (self.on_partial_reveal)(),
                PhaseEvent::Complete(Phase::Exiting) => {
                    (self.on_complete)();
                    match self.navigation.take() {
                        Some(target) => {
                            tracing::debug!(destination = %target, "cover complete; navigating");
                            (self.on_navigate)(&target);
                        }
                        None => {
                            tracing::warn!("exit completed without a pending target");
                            self.machine.settle_visible(clock);
                        }
                    }
                }
                PhaseEvent::Complete(_) => (self.on_complete)(),
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/controller.rs"]
mod tests;
