//! Fallback behavior for parcels nothing currently accepts.
//!
//! Priority order: return home if a home is set and reachable, keep
//! drifting in the established direction, take any destination that has
//! opened up, and only then pick a fresh drift direction — preferring not
//! to double back unless doubling back is the only side that accepts.

use pn_core::{Direction, GridKey};
use pn_net::{Network, Parcel, TransitNode};

use crate::cache::PathCache;
use crate::dest::PathKind;
use crate::pathfinder;
use crate::ranking;

/// Produce a wander/home/late-destination path for an idle parcel.
///
/// Mutates `parcel`: a home that fails to resolve is cleared, a fresh drift
/// direction is recorded, and finding a real destination clears the drift
/// direction.  Returns `None` when the parcel is completely boxed in; the
/// caller leaves it paused for the tick.
pub fn idle<N: Network>(
    net: &N,
    cache: &mut PathCache,
    origin: GridKey,
    parcel: &mut Parcel,
) -> Option<(Vec<GridKey>, PathKind)> {
    // Home, if still reachable.  Delivery is forced: home takes the parcel
    // back even when ordinary acceptance would refuse it.
    if let Some(home) = parcel.home {
        let found = pathfinder::find(net, parcel, origin, home, |p, dir, node| {
            node.is_some_and(|n| n.can_insert(p, dir, true))
        });
        match found {
            Some(result) if result.path.len() >= 2 => {
                return Some((result.path, PathKind::Home));
            }
            _ => parcel.home = None,
        }
    }

    // Keep drifting while the next node along still accepts.
    if let Some(dir) = parcel.idle_dir {
        if accepts_toward(net, parcel, origin, dir) {
            return Some((straight_line(net, parcel, origin, dir), PathKind::None));
        }
    }

    // A destination may have opened up since the parcel went idle; any
    // amount is good enough now.
    let request = parcel.request();
    if let Some(dest) = ranking::best(net, cache, origin, parcel, &request, 0) {
        if dest.response.is_some() {
            parcel.idle_dir = None;
            return Some((dest.path, PathKind::Dest));
        }
    }

    // Pick a new drift direction and follow it as far as it goes.
    let side = pick_side(net, parcel, origin)?;
    parcel.idle_dir = Some(side);
    Some((straight_line(net, parcel, origin, side), PathKind::None))
}

fn accepts_toward<N: Network>(
    net: &N,
    parcel: &Parcel,
    from: GridKey,
    dir: Direction,
) -> bool {
    net.node_at(from.offset(dir))
        .is_some_and(|n| n.can_accept(parcel, dir))
}

/// Extend a straight path from `origin` along `dir` across every
/// consecutive accepting node.  Destination-first like every other path.
fn straight_line<N: Network>(
    net: &N,
    parcel: &Parcel,
    origin: GridKey,
    dir: Direction,
) -> Vec<GridKey> {
    let mut path = vec![origin];
    let mut count = 1;
    loop {
        let next = origin.offset_by(dir, count);
        if !net
            .node_at(next)
            .is_some_and(|n| n.can_accept(parcel, dir))
        {
            break;
        }
        path.push(next);
        count += 1;
    }
    path.reverse();
    path
}

/// Choose a drift direction whose neighbor accepts the parcel.
///
/// With an established drift direction, its reverse is tried only after
/// every other side refused.  With none, the canonical scan order decides.
fn pick_side<N: Network>(net: &N, parcel: &Parcel, origin: GridKey) -> Option<Direction> {
    match parcel.idle_dir {
        None => Direction::ALL
            .into_iter()
            .find(|&dir| accepts_toward(net, parcel, origin, dir)),
        Some(current) => {
            let reverse = current.opposite();
            Direction::ALL
                .into_iter()
                .filter(|&dir| dir != reverse)
                .find(|&dir| accepts_toward(net, parcel, origin, dir))
                .or_else(|| accepts_toward(net, parcel, origin, reverse).then_some(reverse))
        }
    }
}
