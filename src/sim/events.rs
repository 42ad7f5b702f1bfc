//! Domain events reported to the host each frame

use serde::{Deserialize, Serialize};

use super::creature::CatchInfo;

/// Something the presentation layer should react to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GameEvent {
    /// A hooked creature was reeled all the way in
    Catch(CatchInfo),
    /// A cast was refused because storage is full
    CapacityFull,
    /// A creature bit; the hook is now reeling it in
    Hooked { creature_id: u32, species_id: String },
    /// The hook crossed the area's depth limit and auto-reeled
    DepthLimitReached { depth_meters: f32 },
}
