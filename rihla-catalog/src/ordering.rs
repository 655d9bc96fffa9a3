use serde::Deserialize;
use uuid::Uuid;

use rihla_core::Partner;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    Up,
    Down,
}

/// The two writes a partner move translates into: each pair is
/// (partner id, new display_order). Only these two rows change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSwap {
    pub first: (Uuid, i32),
    pub second: (Uuid, i32),
}

/// Plans a move of `id` within the display sequence.
///
/// Returns `None` at the boundary (already first when moving up, already
/// last when moving down) or when the id is unknown; a `None` plan must
/// translate into zero store calls. Otherwise the moved partner takes its
/// neighbor's display_order and the neighbor takes the moved partner's.
pub fn plan_move(partners: &[Partner], id: Uuid, direction: MoveDirection) -> Option<OrderSwap> {
    let mut sorted: Vec<&Partner> = partners.iter().collect();
    sorted.sort_by_key(|p| p.display_order);

    let index = sorted.iter().position(|p| p.id == id)?;
    let neighbor_index = match direction {
        MoveDirection::Up => index.checked_sub(1)?,
        MoveDirection::Down => {
            if index + 1 >= sorted.len() {
                return None;
            }
            index + 1
        }
    };

    let moved = sorted[index];
    let neighbor = sorted[neighbor_index];
    Some(OrderSwap {
        first: (moved.id, neighbor.display_order),
        second: (neighbor.id, moved.display_order),
    })
}

/// Position for a newly added partner: current max + 1, or 1 for the first.
pub fn next_display_order(partners: &[Partner]) -> i32 {
    partners
        .iter()
        .map(|p| p.display_order)
        .max()
        .map_or(1, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn partner(display_order: i32) -> Partner {
        Partner {
            id: Uuid::new_v4(),
            name: format!("partner-{display_order}"),
            logo_url: "https://example.com/logo.png".to_string(),
            display_order,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn moving_the_first_up_and_the_last_down_is_a_no_op() {
        let partners = vec![partner(1), partner(5), partner(9)];
        assert_eq!(
            plan_move(&partners, partners[0].id, MoveDirection::Up),
            None
        );
        assert_eq!(
            plan_move(&partners, partners[2].id, MoveDirection::Down),
            None
        );
    }

    #[test]
    fn moving_up_swaps_order_values_with_the_previous_neighbor() {
        // orders 1, 5, 9 — values are not contiguous and must not be renumbered
        let partners = vec![partner(1), partner(5), partner(9)];
        let first = partners[0].id;
        let middle = partners[1].id;

        let swap = plan_move(&partners, middle, MoveDirection::Up).unwrap();

        assert_eq!(swap.first, (middle, 1));
        assert_eq!(swap.second, (first, 5));
        // id 3 keeps its 9; the sorted sequence becomes [middle, first, last]
    }

    #[test]
    fn planning_works_on_an_unsorted_input_list() {
        let partners = vec![partner(9), partner(1), partner(5)];
        let middle = partners[2].id; // display_order 5
        let first = partners[1].id; // display_order 1

        let swap = plan_move(&partners, middle, MoveDirection::Up).unwrap();

        assert_eq!(swap.first, (middle, 1));
        assert_eq!(swap.second, (first, 5));
    }

    #[test]
    fn unknown_partner_plans_nothing() {
        let partners = vec![partner(1)];
        assert_eq!(plan_move(&partners, Uuid::new_v4(), MoveDirection::Up), None);
    }

    #[test]
    fn new_partners_append_after_the_current_max() {
        assert_eq!(next_display_order(&[]), 1);
        let partners = vec![partner(1), partner(7)];
        assert_eq!(next_display_order(&partners), 8);
    }
}
