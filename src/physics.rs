//! Player integration and collision resolution.
//!
//! One [`step`] advances the player's vertical state by a single tick:
//! gravity, then the ground clamp, then each platform in level order.
//! Horizontal motion from [`walk`] is only bounded by the screen edges;
//! platforms never block walking.

use crate::{
    clock::Instant,
    config::{
        GRAVITY,
        GROUND_HEIGHT,
        JUMP_COOLDOWN,
        JUMP_FORCE,
        MOVE_SPEED,
        SCREEN_WIDTH,
    },
    entity::{
        Entity,
        Platform,
        Player,
    },
    input::Direction,
};

/// Advance the player by one tick against the ground and `platforms`.
pub fn step(player: &mut Player, platforms: &[Platform]) {
    player.vy += GRAVITY;

    let before = player.body;
    let height = f32::from(before.height);
    let mut new_y = before.y + player.vy;

    let floor = GROUND_HEIGHT - height;
    if new_y > floor {
        new_y = floor;
        player.vy = 0.0;
        player.is_jumping = false;
    }

    for platform in platforms {
        let ledge = platform.bounds();
        if !before.spans_columns_of(&ledge) {
            continue;
        }

        if before.bottom() <= ledge.y && new_y + height > ledge.y {
            // Falling onto the top.
            new_y = ledge.y - height;
            player.vy = 0.0;
            player.is_jumping = false;
        } else if before.y >= ledge.bottom() && new_y < ledge.bottom() {
            // Head hit the underside. Still airborne.
            new_y = ledge.bottom();
            player.vy = 0.0;
        }
    }

    player.body.y = new_y;
}

/// Start a jump if the player is grounded and the cooldown has passed.
///
/// Returns whether the jump was accepted. Rejected requests are dropped.
pub fn try_jump(player: &mut Player, now: Instant) -> bool {
    if player.is_jumping {
        trace!("jump rejected: airborne");
        return false;
    }

    if let Some(last) = player.last_jump {
        let cooled = now
            .checked_duration_since(last)
            .is_some_and(|elapsed| elapsed >= JUMP_COOLDOWN);
        if !cooled {
            trace!("jump rejected: cooldown");
            return false;
        }
    }

    player.vy = JUMP_FORCE;
    player.is_jumping = true;
    player.last_jump = Some(now);
    trace!("jump accepted at {} ms", now.ticks());
    true
}

/// Move horizontally by one tick of `direction`, kept inside the screen.
pub fn walk(player: &mut Player, direction: Direction) {
    let sign = direction.sign();
    if sign == 0 {
        return;
    }

    let max_x = f32::from(SCREEN_WIDTH - player.body.width);
    player.body.x = (player.body.x + f32::from(sign) * MOVE_SPEED).clamp(0.0, max_x);
    player.facing_right = sign > 0;
}
