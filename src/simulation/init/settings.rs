use crate::device::is_mobile_user_agent;
use crate::glass::GlassType;
use crate::physics_world::PhysicsWorld;

use super::feedback::{Feedback, CONFIRM_VIBRATION};
use super::fracture;
use super::PaneCore;

/// Switch glass type. Unknown names are ignored; a broken pane resets so the
/// next fracture shows the new type.
pub(super) fn update_glass_type<W: PhysicsWorld>(pane: &mut PaneCore<W>, name: &str) -> bool {
    match name.parse::<GlassType>() {
        Ok(glass) => {
            set_glass_type(pane, glass);
            true
        }
        Err(err) => {
            log::debug!("ignoring glass type change: {}", err);
            false
        }
    }
}

pub(super) fn set_glass_type<W: PhysicsWorld>(pane: &mut PaneCore<W>, glass: GlassType) {
    pane.config.glass_type = glass;
    if pane.broken {
        fracture::reset(pane);
    }
    log::info!("glass type set to {}", glass);
}

pub(super) fn set_vibration<W: PhysicsWorld>(pane: &mut PaneCore<W>, enabled: bool) {
    pane.config.vibrate_on_break = enabled;
    if enabled && pane.haptics_supported {
        pane.feedback.push(Feedback::Vibrate(CONFIRM_VIBRATION.to_vec()));
    }
}

/// New canvas size: rebuild the world's static bounds
pub(super) fn resize<W: PhysicsWorld>(pane: &mut PaneCore<W>, width: f32, height: f32) {
    pane.width = width.max(0.0);
    pane.height = height.max(0.0);
    pane.world.set_bounds(pane.width, pane.height);
    log::debug!("pane resized to {}x{}", pane.width, pane.height);
}

/// Phones and tablets default to tinted glass
pub(super) fn apply_device_defaults<W: PhysicsWorld>(pane: &mut PaneCore<W>, user_agent: &str) -> bool {
    if is_mobile_user_agent(user_agent) {
        set_glass_type(pane, GlassType::Tinted);
        return true;
    }
    false
}
