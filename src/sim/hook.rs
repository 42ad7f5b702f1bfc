//! Hook controller
//!
//! State machine: Ready -> Casting -> Falling -> Reeling -> Ready.
//!
//! Casting and reeling are timed tweens. While falling the hook chases the
//! pointer on a damped spring with constant gravity, so it overshoots and
//! settles rather than snapping. Crossing the area's depth limit forces a
//! reel. Casting is never interrupted: depth-limit and capacity checks only
//! apply once the hook is falling.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::camera::Viewport;
use super::collision::Aabb;
use super::creature::Creature;
use super::events::GameEvent;
use super::tween::Tween;
use crate::consts::*;
use crate::settings::HookPhysics;
use crate::{clamp_to_play_field, depth_of, pixels_to_meters, rod_tip};

/// Offset of a hooked creature below the hook
const CARRY_OFFSET: Vec2 = Vec2::new(0.0, 10.0);

/// Hook phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HookState {
    /// Resting at the rod tip, waiting for a cast
    Ready,
    /// Flying toward the cast target
    Casting,
    /// Sinking under player control
    Falling,
    /// Returning to the rod tip
    Reeling,
}

impl HookState {
    pub fn as_str(&self) -> &'static str {
        match self {
            HookState::Ready => "ready",
            HookState::Casting => "casting",
            HookState::Falling => "falling",
            HookState::Reeling => "reeling",
        }
    }
}

/// The player's hook
#[derive(Debug, Clone)]
pub struct HookController {
    state: HookState,
    pos: Vec2,
    vel: Vec2,
    tween: Option<Tween>,
    attached: Option<Creature>,
    physics: HookPhysics,
    /// Meters below the surface that force a reel
    depth_limit: f32,
}

impl HookController {
    pub fn new(physics: HookPhysics, depth_limit: f32) -> Self {
        Self {
            state: HookState::Ready,
            pos: rod_tip(),
            vel: Vec2::ZERO,
            tween: None,
            attached: None,
            physics,
            depth_limit,
        }
    }

    pub fn state(&self) -> HookState {
        self.state
    }

    pub fn position(&self) -> Vec2 {
        self.pos
    }

    pub fn velocity(&self) -> Vec2 {
        self.vel
    }

    /// Pixels below the surface (0 while above water)
    pub fn depth(&self) -> f32 {
        depth_of(self.pos.y).max(0.0)
    }

    pub fn depth_meters(&self) -> f32 {
        pixels_to_meters(self.depth())
    }

    pub fn depth_limit(&self) -> f32 {
        self.depth_limit
    }

    pub fn physics(&self) -> &HookPhysics {
        &self.physics
    }

    pub fn attached(&self) -> Option<&Creature> {
        self.attached.as_ref()
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, Vec2::splat(HOOK_SIZE))
    }

    /// Whether a creature may bite this tick
    pub fn can_catch(&self, storage_full: bool) -> bool {
        self.state == HookState::Falling && self.attached.is_none() && !storage_full
    }

    /// Player trigger: cast from Ready, reel from Falling; ignored otherwise.
    /// Returns whether the trigger changed state.
    pub fn trigger(&mut self, pointer: Vec2, storage_full: bool, events: &mut Vec<GameEvent>) -> bool {
        match self.state {
            HookState::Ready if storage_full => {
                events.push(GameEvent::CapacityFull);
                false
            }
            HookState::Ready => {
                self.cast(pointer);
                true
            }
            HookState::Falling => {
                self.start_reel();
                true
            }
            HookState::Casting | HookState::Reeling => false,
        }
    }

    fn cast(&mut self, pointer: Vec2) {
        let target = Vec2::new(
            clamp_to_play_field(pointer.x),
            pointer.y.max(WATER_LEVEL + CAST_MIN_DEPTH),
        );
        let arc_height = (self.pos.distance(target) * CAST_ARC_FACTOR).min(CAST_MAX_ARC);

        self.tween = Some(Tween::new(self.pos, target, CAST_DURATION).with_arc(arc_height));
        self.vel = Vec2::ZERO;
        self.state = HookState::Casting;
    }

    fn start_reel(&mut self) {
        self.tween = Some(Tween::new(self.pos, rod_tip(), REEL_DURATION));
        self.vel = Vec2::ZERO;
        self.state = HookState::Reeling;
    }

    /// Attach a creature and start reeling. Hands the creature back if the
    /// hook cannot take it.
    pub fn hook_creature(&mut self, creature: Creature) -> Result<(), Creature> {
        if self.state != HookState::Falling || self.attached.is_some() {
            return Err(creature);
        }
        self.attached = Some(creature);
        self.carry();
        self.start_reel();
        Ok(())
    }

    /// Advance one tick
    pub fn update(&mut self, dt: f32, pointer: Vec2, view: &Viewport, events: &mut Vec<GameEvent>) {
        match self.state {
            HookState::Ready => {
                self.pos = rod_tip();
            }
            HookState::Casting => {
                if let Some(tween) = self.tween.as_mut() {
                    self.pos = tween.advance(dt);
                    if tween.is_finished() {
                        self.tween = None;
                        self.vel = Vec2::ZERO;
                        self.state = HookState::Falling;
                    }
                } else {
                    self.state = HookState::Falling;
                }
            }
            HookState::Falling => {
                self.integrate(dt, pointer, view);
                if self.depth_meters() >= self.depth_limit {
                    log::info!(
                        "Hook reached depth limit of {}m ({:.0}px), auto-reeling",
                        self.depth_limit,
                        self.depth()
                    );
                    events.push(GameEvent::DepthLimitReached {
                        depth_meters: self.depth_meters(),
                    });
                    self.start_reel();
                }
            }
            HookState::Reeling => {
                let finished = match self.tween.as_mut() {
                    Some(tween) => {
                        self.pos = tween.advance(dt);
                        tween.is_finished()
                    }
                    None => true,
                };
                if finished {
                    self.tween = None;
                    self.pos = rod_tip();
                    self.state = HookState::Ready;
                    if let Some(creature) = self.attached.take() {
                        let info = creature.catch_info();
                        log::info!(
                            "Caught {}! Weight: {:.1}kg, Value: {:.0}g",
                            info.name,
                            info.weight,
                            info.value
                        );
                        events.push(GameEvent::Catch(info));
                    }
                }
            }
        }
        self.carry();
    }

    /// Rubber-band step toward the pointer
    fn integrate(&mut self, dt: f32, pointer: Vec2, view: &Viewport) {
        let p = &self.physics;

        if pointer.y > WATER_LEVEL {
            let top = (view.top - TARGET_PAD_ABOVE).max(WATER_LEVEL + TARGET_MIN_DEPTH);
            let bottom = (view.bottom() + TARGET_PAD_BELOW).max(top);
            let target = Vec2::new(clamp_to_play_field(pointer.x), pointer.y.clamp(top, bottom));

            let displacement = target - self.pos;
            self.vel.x += displacement.x * p.spring_strength * dt;
            self.vel.y += displacement.y * p.spring_strength * p.vertical_influence * dt;
            self.vel *= p.damping;
            self.vel.x = self.vel.x.clamp(-p.max_horizontal_speed, p.max_horizontal_speed);
            self.vel.y = self.vel.y.clamp(-p.max_vertical_speed, p.max_vertical_speed);
        } else {
            // Pointer out of the water: coast on remaining momentum
            self.vel *= p.damping * p.above_water_damping;
        }

        self.vel.y += p.gravity * dt;
        self.pos += self.vel * dt;

        if self.pos.x < PLAY_FIELD_MIN_X {
            self.pos.x = PLAY_FIELD_MIN_X;
            self.vel.x = self.vel.x.max(0.0);
        } else if self.pos.x > PLAY_FIELD_MAX_X {
            self.pos.x = PLAY_FIELD_MAX_X;
            self.vel.x = self.vel.x.min(0.0);
        }

        let min_y = WATER_LEVEL + HOOK_MIN_DEPTH;
        if self.pos.y < min_y {
            self.pos.y = min_y;
            self.vel.y = self.vel.y.max(0.0);
        }
    }

    fn carry(&mut self) {
        if let Some(creature) = self.attached.as_mut() {
            creature.pos = self.pos + CARRY_OFFSET;
        }
    }

    /// Swap physics between ticks
    pub fn set_physics(&mut self, physics: HookPhysics) {
        self.physics = physics;
    }

    pub fn set_depth_limit(&mut self, depth_limit: f32) {
        self.depth_limit = depth_limit;
    }

    /// Back to Ready at the rod tip; returns any creature that was on the line
    pub fn reset(&mut self) -> Option<Creature> {
        self.state = HookState::Ready;
        self.pos = rod_tip();
        self.vel = Vec2::ZERO;
        self.tween = None;
        self.attached.take()
    }
}
