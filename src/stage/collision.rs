//! Box overlap tests and the two collision scans the game needs.

use super::actor::{Actor, Bounds};
use super::list::ActorList;

/// True iff the open boxes intersect on both axes.
///
/// Edges that merely touch do not overlap, so zero-sized boxes never do.
#[inline]
pub fn boxes_overlap(a: Bounds, b: Bounds) -> bool {
    let (a_max, b_max) = (a.max(), b.max());
    a.pos.x.max(b.pos.x) < a_max.x.min(b_max.x) && a.pos.y.max(b.pos.y) < a_max.y.min(b_max.y)
}

/// Resolve one bullet against the fighter list.
///
/// The first opposing fighter it overlaps (in list order) and the bullet are
/// both killed and the score goes up by one. At most one fighter is hit per
/// call. Fighters already marked dead but not yet pruned still count.
pub fn bullet_hits_any_fighter(bullet: &mut Actor, fighters: &mut ActorList, score: &mut u32) -> bool {
    let bullet_box = bullet.bounds();
    let mut cursor = fighters.first();

    while let Some(id) = cursor {
        cursor = fighters.next(id);

        let Some(fighter) = fighters.get_mut(id) else {
            continue;
        };
        if fighter.side() == bullet.side() || !boxes_overlap(bullet_box, fighter.bounds()) {
            continue;
        }

        bullet.kill();
        fighter.kill();
        *score += 1;
        return true;
    }

    false
}

/// Plain overlap between the player and a fighter, regardless of side.
#[inline]
pub fn player_overlaps_fighter(player: Bounds, fighter: &Actor) -> bool {
    boxes_overlap(player, fighter.bounds())
}
