use crate::{
    animation::clock::{FrameClock, RunId},
    animation::run::{AnimationRun, RunDirection},
    config::TransitionConfig,
    foundation::core::Viewport,
    foundation::math::derive_seed,
    render::compositor::{FrameParams, render_frame},
    render::surface::DrawSurface,
    tiles::build_tile_field,
    tiles::delay::{Tile, WaveOrigin},
};

/// Where the transition currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Phase {
    /// Tiles shrink away to reveal freshly mounted content.
    Entering,
    /// Resting state between navigations. Nothing is scheduled.
    Visible,
    /// Tiles grow to cover the surface before a navigation.
    Exiting,
}

/// Callback-worthy moments produced by the machine, in firing order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseEvent {
    /// Entering crossed the partial-reveal threshold; content may mount.
    PartialReveal,
    /// The run of the given phase finished.
    Complete(Phase),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RunMode {
    Animated,
    /// Timeout-driven; `step` counts timeouts already delivered.
    ReducedMotion { step: u8 },
}

#[derive(Clone, Debug)]
struct ActiveRun {
    run: AnimationRun,
    mode: RunMode,
    tiles: Vec<Tile>,
}

/// Entering / Visible / Exiting orchestration around one clock subscription at a time.
///
/// The machine never invokes user callbacks itself; it returns [`PhaseEvent`]s so the owner
/// can dispatch them after the machine's own state is settled.
#[derive(Clone, Debug)]
pub struct PhaseMachine {
    config: TransitionConfig,
    phase: Phase,
    viewport: Option<Viewport>,
    active: Option<ActiveRun>,
    next_run: u64,
    partial_fired: bool,
}

impl PhaseMachine {
    /// A machine resting in [`Phase::Visible`].
    pub fn new(config: TransitionConfig) -> Self {
        Self {
            config,
            phase: Phase::Visible,
            viewport: None,
            active: None,
            next_run: 1,
            partial_fired: false,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Config the machine was built with.
    pub fn config(&self) -> &TransitionConfig {
        &self.config
    }

    /// Viewport captured by the most recent phase start or resize.
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// Liveness token of the active run.
    pub fn active_run(&self) -> Option<RunId> {
        self.active.as_ref().map(|a| a.run.id())
    }

    /// `true` while a run is subscribed to the clock.
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Tile set of the active run (empty when idle or in reduced-motion mode).
    pub fn tiles(&self) -> &[Tile] {
        self.active
            .as_ref()
            .map(|a| a.tiles.as_slice())
            .unwrap_or(&[])
    }

    /// Start an Entering run, superseding whatever was active.
    pub fn begin_entering<C: FrameClock + ?Sized>(
        &mut self,
        clock: &mut C,
        viewport: Viewport,
        wave: WaveOrigin,
    ) {
        self.cancel_active(clock);
        self.phase = Phase::Entering;
        self.viewport = Some(viewport);
        self.partial_fired = false;
        tracing::debug!(?viewport, ?wave, "phase -> Entering");
        self.arm(clock, wave);
    }

    /// Start an Exiting run. Returns `false` (and does nothing) when already exiting.
    pub fn begin_exiting<C: FrameClock + ?Sized>(&mut self, clock: &mut C) -> bool {
        if self.phase == Phase::Exiting {
            tracing::debug!("exit already in progress; request dropped");
            return false;
        }
        self.cancel_active(clock);
        self.phase = Phase::Exiting;
        self.partial_fired = false;
        let wave = self.config.exit_wave;
        tracing::debug!(viewport = ?self.viewport, ?wave, "phase -> Exiting");
        self.arm(clock, wave);
        true
    }

    /// Return to [`Phase::Visible`] without animating.
    pub fn settle_visible<C: FrameClock + ?Sized>(&mut self, clock: &mut C) {
        self.cancel_active(clock);
        self.phase = Phase::Visible;
        tracing::debug!("phase -> Visible");
    }

    /// Unmount: cancel the active subscription and rest in Visible.
    pub fn teardown<C: FrameClock + ?Sized>(&mut self, clock: &mut C) {
        if self.active.is_some() {
            tracing::debug!(phase = ?self.phase, "tearing down active run");
        }
        self.settle_visible(clock);
    }

    /// Record a new viewport for the next phase. A run in flight keeps its tiles and timing.
    pub fn resize(&mut self, viewport: Viewport) {
        if self.viewport == Some(viewport) {
            return;
        }
        self.viewport = Some(viewport);
        if self.active.is_some() {
            tracing::debug!(?viewport, phase = ?self.phase, "viewport changed mid-run; kept for next phase");
        }
    }

    /// Handle a frame tick. Stale ticks return no events and draw nothing.
    pub fn on_frame<C, S>(
        &mut self,
        clock: &mut C,
        run: RunId,
        now_ms: f64,
        surface: &mut S,
    ) -> Vec<PhaseEvent>
    where
        C: FrameClock + ?Sized,
        S: DrawSurface + ?Sized,
    {
        let Some(active) = self.active.as_mut() else {
            tracing::debug!(?run, "tick after run ended ignored");
            return Vec::new();
        };
        if active.run.id() != run || active.mode != RunMode::Animated {
            tracing::debug!(?run, active = ?active.run.id(), "stale tick ignored");
            return Vec::new();
        }

        if !surface.is_attached() {
            tracing::warn!(phase = ?self.phase, "drawing surface unavailable; skipping effect");
            return self.abort(clock);
        }

        let progress = active.run.progress_at(now_ms);
        let params = FrameParams {
            global_progress: progress,
            direction: active.run.direction(),
            spread: self.config.spread,
            draw_radius: self.config.draw_radius(),
            color: self.config.tile_premul(),
        };
        if let Err(err) = render_frame(surface, &active.tiles, &params) {
            tracing::warn!(%err, phase = ?self.phase, "frame render failed; skipping effect");
            return self.abort(clock);
        }
        tracing::trace!(?run, progress, "tick");

        let mut events = Vec::new();
        if self.phase == Phase::Entering
            && !self.partial_fired
            && (progress >= self.config.partial_reveal_threshold || progress >= 1.0)
        {
            self.partial_fired = true;
            events.push(PhaseEvent::PartialReveal);
        }
        if progress >= 1.0 {
            events.push(self.finish(clock));
        }
        events
    }

    /// Handle a reduced-motion timeout. Stale timeouts return no events.
    pub fn on_timeout<C: FrameClock + ?Sized>(
        &mut self,
        clock: &mut C,
        run: RunId,
        now_ms: f64,
    ) -> Vec<PhaseEvent> {
        let delay = self.config.reduced_motion_delay_ms;
        let phase = self.phase;
        let Some(active) = self.active.as_mut() else {
            tracing::debug!(?run, "timeout after run ended ignored");
            return Vec::new();
        };
        let RunMode::ReducedMotion { step } = active.mode else {
            tracing::debug!(?run, "timeout for animated run ignored");
            return Vec::new();
        };
        if active.run.id() != run {
            tracing::debug!(?run, active = ?active.run.id(), "stale timeout ignored");
            return Vec::new();
        }
        tracing::trace!(?run, now_ms, step, "reduced-motion timeout");

        if phase == Phase::Entering && step == 0 {
            active.mode = RunMode::ReducedMotion { step: 1 };
            clock.schedule_timeout(run, delay);
            self.partial_fired = true;
            return vec![PhaseEvent::PartialReveal];
        }
        vec![self.finish(clock)]
    }

    fn arm<C: FrameClock + ?Sized>(&mut self, clock: &mut C, wave: WaveOrigin) {
        let id = RunId(self.next_run);
        self.next_run += 1;
        let direction = match self.phase {
            Phase::Exiting => RunDirection::Hide,
            _ => RunDirection::Reveal,
        };
        let run = AnimationRun::new(id, self.config.duration_ms, direction);

        if clock.prefers_reduced_motion() {
            self.active = Some(ActiveRun {
                run,
                mode: RunMode::ReducedMotion { step: 0 },
                tiles: Vec::new(),
            });
            clock.schedule_timeout(id, self.config.reduced_motion_delay_ms);
            tracing::debug!(?id, "armed reduced-motion run");
            return;
        }

        let viewport = self.viewport.unwrap_or(Viewport::new(0.0, 0.0));
        let tiles = build_tile_field(
            viewport,
            &self.config.grid_params(),
            wave,
            direction,
            &self.config.delay_params(derive_seed(self.config.seed, id.0)),
        );
        self.active = Some(ActiveRun {
            run,
            mode: RunMode::Animated,
            tiles,
        });
        clock.subscribe_frames(id);
        tracing::debug!(?id, ?direction, "armed animated run");
    }

    fn finish<C: FrameClock + ?Sized>(&mut self, clock: &mut C) -> PhaseEvent {
        let completed = self.phase;
        self.cancel_active(clock);
        if completed == Phase::Entering {
            self.phase = Phase::Visible;
            tracing::debug!("phase -> Visible");
        }
        PhaseEvent::Complete(completed)
    }

    fn abort<C: FrameClock + ?Sized>(&mut self, clock: &mut C) -> Vec<PhaseEvent> {
        let mut events = Vec::with_capacity(2);
        if self.phase == Phase::Entering && !self.partial_fired {
            self.partial_fired = true;
            events.push(PhaseEvent::PartialReveal);
        }
        events.push(self.finish(clock));
        events
    }

    fn cancel_active<C: FrameClock + ?Sized>(&mut self, clock: &mut C) {
        if let Some(active) = self.active.take() {
            clock.cancel(active.run.id());
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/phase.rs"]
mod tests;
