//! Committees view support.
//!
//! The "My Committees" screen shows the member's committees grouped by
//! owner. Grouping preserves first-seen owner order so the list is stable
//! across reloads of the same data.

use chit_core::committee::Committee;

/// Groups committees by owner display name, preserving the order in which
/// owners first appear in the input.
///
/// Owners with a blank or missing name group under their id rendered as
/// text (see [`Committee::owner_label`]).
pub fn group_committees_by_owner(committees: &[Committee]) -> Vec<(String, Vec<Committee>)> {
    let mut groups: Vec<(String, Vec<Committee>)> = Vec::new();
    for committee in committees {
        let label = committee.owner_label();
        match groups.iter_mut().find(|(owner, _)| *owner == label) {
            Some((_, members)) => members.push(committee.clone()),
            None => groups.push((label, vec![committee.clone()])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chit_core::committee::CommitteeId;
    use chit_core::member::MemberId;

    fn committee(id: u64, owner_id: u64, owner_name: Option<&str>) -> Committee {
        Committee {
            id: CommitteeId(id),
            name: format!("Committee {id}"),
            owner_id: MemberId::new(owner_id).unwrap(),
            owner_name: owner_name.map(str::to_string),
            members_count: 0,
            created_at: None,
            full_amount: None,
            monthly_share: None,
            bids_count: None,
            bids_ratio: None,
        }
    }

    #[test]
    fn test_groups_preserve_first_seen_owner_order() {
        let committees = vec![
            committee(1, 9, Some("Asha")),
            committee(2, 4, Some("Ravi")),
            committee(3, 9, Some("Asha")),
        ];

        let groups = group_committees_by_owner(&committees);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Asha");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, "Ravi");
    }

    #[test]
    fn test_unnamed_owner_groups_under_id() {
        let committees = vec![committee(1, 9, None), committee(2, 9, Some(" "))];

        let groups = group_committees_by_owner(&committees);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, "9");
    }
}
