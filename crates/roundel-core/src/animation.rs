//! Press feedback animation.
//!
//! Hosts with their own physics library feed spring values into
//! [`spring_scale`]. [`PressAnimation`] is a small built-in driver for hosts
//! without one: it eases a spring value towards 1 on press and back to 0 on
//! release, sampled from an installable clock.

use std::cell::RefCell;

use web_time::{Duration, Instant};

/// Spring value reached while pressed.
pub const PRESSED_SPRING_VALUE: f32 = 1.0;

/// View scale for a spring value: 1.0 at rest, 0.5 fully pressed.
pub fn spring_scale(value: f32) -> f32 {
    1.0 - value * 0.5
}

pub trait Clock: 'static {
    fn now(&self) -> Instant;
}

pub struct SystemClock;
impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock tests can drive deterministically.
#[derive(Clone)]
pub struct TestClock {
    pub t: Instant,
}
impl Clock for TestClock {
    fn now(&self) -> Instant {
        self.t
    }
}

thread_local! {
    static CLOCK: RefCell<Option<Box<dyn Clock>>> = RefCell::new(None);
}

/// Install the animation clock for the current (UI) thread.
pub fn set_clock(clock: Box<dyn Clock>) {
    CLOCK.with(|c| *c.borrow_mut() = Some(clock));
}

pub(crate) fn now() -> Instant {
    CLOCK.with(|c| c.borrow().as_ref().map(|c| c.now()).unwrap_or_else(Instant::now))
}

#[derive(Clone, Copy, Debug)]
pub enum Easing {
    Linear,
    EaseOut,
    Spring { damping: f32, stiffness: f32 },
}

impl Easing {
    /// Eased progress for `t` in `0..=1` of an animation lasting `duration`.
    pub fn interpolate(&self, t: f32, duration: Duration) -> f32 {
        match *self {
            Easing::Linear => t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::Spring { damping, stiffness } => {
                // Unit-mass spring released from rest, in seconds.
                let s = t * duration.as_secs_f32();
                let omega = stiffness.sqrt();
                let zeta = damping / (2.0 * omega);

                if zeta < 1.0 {
                    // Underdamped
                    let omega_d = omega * (1.0 - zeta * zeta).sqrt();
                    let decay = (-zeta * omega * s).exp();
                    1.0 - decay
                        * ((omega_d * s).cos() + zeta * omega / omega_d * (omega_d * s).sin())
                } else {
                    let decay = (-omega * s).exp();
                    1.0 - decay * (1.0 + omega * s)
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct AnimationSpec {
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::press_spring()
    }
}

impl AnimationSpec {
    pub fn tween(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// Stiff, lightly damped spring used for press feedback. It settles
    /// within 0.3% of its target by the end of `duration`.
    pub fn press_spring() -> Self {
        Self {
            duration: Duration::from_millis(600),
            easing: Easing::Spring {
                damping: 20.0,
                stiffness: 800.0,
            },
        }
    }
}

/// Scalar that transitions towards a target over `spec.duration`.
pub struct AnimatedValue {
    current: f32,
    target: f32,
    start: f32,
    spec: AnimationSpec,
    start_time: Option<Instant>,
}

impl AnimatedValue {
    pub fn new(initial: f32, spec: AnimationSpec) -> Self {
        Self {
            current: initial,
            target: initial,
            start: initial,
            spec,
            start_time: None,
        }
    }

    pub fn set_target(&mut self, target: f32) {
        self.start = self.current;
        self.target = target;
        self.start_time = Some(now());
    }

    /// Jumps to `value` without animating.
    pub fn snap_to(&mut self, value: f32) {
        self.current = value;
        self.target = value;
        self.start = value;
        self.start_time = None;
    }

    /// Advances to the current clock time. Returns `true` while running.
    pub fn update(&mut self) -> bool {
        let Some(start) = self.start_time else {
            return false;
        };
        let elapsed = now().saturating_duration_since(start);
        if elapsed >= self.spec.duration {
            self.current = self.target;
            self.start_time = None;
            return false;
        }
        let t = elapsed.as_secs_f32() / self.spec.duration.as_secs_f32();
        let eased = self.spec.easing.interpolate(t, self.spec.duration);
        self.current = self.start + (self.target - self.start) * eased;
        true
    }

    pub fn get(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_animating(&self) -> bool {
        self.start_time.is_some()
    }
}

pub struct PressAnimation {
    value: AnimatedValue,
}

impl Default for PressAnimation {
    fn default() -> Self {
        Self::new(AnimationSpec::default())
    }
}

impl PressAnimation {
    pub fn new(spec: AnimationSpec) -> Self {
        Self {
            value: AnimatedValue::new(0.0, spec),
        }
    }

    pub fn press(&mut self) {
        self.value.set_target(PRESSED_SPRING_VALUE);
    }

    pub fn release(&mut self) {
        self.value.set_target(0.0);
    }

    /// Animates from the current value towards `target`.
    pub fn animate_to(&mut self, target: f32) {
        self.value.set_target(target);
    }

    /// Sets the spring value directly, as a host physics engine would.
    pub fn set_current(&mut self, value: f32) {
        self.value.snap_to(value);
    }

    /// Advances the animation; returns `true` while another frame is needed.
    pub fn tick(&mut self) -> bool {
        self.value.update()
    }

    pub fn value(&self) -> f32 {
        self.value.get()
    }

    pub fn scale(&self) -> f32 {
        spring_scale(self.value.get())
    }

    pub fn is_animating(&self) -> bool {
        self.value.is_animating()
    }
}
