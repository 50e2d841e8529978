//! Team selector: uniform random sampling without replacement.

use forge_core::entities::User;
use rand::Rng;
use rand::seq::index;

use crate::error::EngineError;

/// Pick exactly `size` distinct users from `eligible`, uniformly at random.
///
/// The random source is supplied by the caller; the same seeded source always
/// yields the same members in the same order. `eligible` is not modified.
///
/// # Errors
///
/// Returns [`EngineError::InsufficientCandidates`] when `size` exceeds the
/// number of eligible users. No smaller team is substituted.
pub fn select_team<R: Rng + ?Sized>(
    eligible: &[User],
    size: usize,
    rng: &mut R,
) -> Result<Vec<User>, EngineError> {
    if size > eligible.len() {
        return Err(EngineError::InsufficientCandidates {
            required: size,
            available: eligible.len(),
        });
    }
    Ok(index::sample(rng, eligible.len(), size)
        .iter()
        .map(|i| eligible[i].clone())
        .collect())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use forge_core::entities::User;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    use super::*;

    fn users(n: usize) -> Vec<User> {
        (0..n)
            .map(|i| User {
                id: format!("u{i}"),
                name: format!("User {i}"),
                email: format!("u{i}@example.com"),
                skill_tags: Vec::new(),
                major_id: None,
                dev_tags: Vec::new(),
                courses_id: Vec::new(),
            })
            .collect()
    }

    #[rstest]
    #[case(5, 0)]
    #[case(5, 1)]
    #[case(5, 3)]
    #[case(5, 5)]
    #[case(40, 17)]
    fn picks_exact_count_of_distinct_members(#[case] pool: usize, #[case] size: usize) {
        let eligible = users(pool);
        let mut rng = StdRng::seed_from_u64(7);
        let team = select_team(&eligible, size, &mut rng).unwrap();

        assert_eq!(team.len(), size);
        let distinct: HashSet<&str> = team.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(distinct.len(), size);
        assert!(team.iter().all(|u| eligible.contains(u)));
    }

    #[rstest]
    #[case(0, 1)]
    #[case(2, 3)]
    fn too_few_candidates_fails_with_counts(#[case] pool: usize, #[case] size: usize) {
        let mut rng = StdRng::seed_from_u64(7);
        let err = select_team(&users(pool), size, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InsufficientCandidates { required, available }
                if required == size && available == pool
        ));
    }

    #[test]
    fn same_seed_same_team() {
        let eligible = users(12);
        let a = select_team(&eligible, 4, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = select_team(&eligible, 4, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn input_is_untouched() {
        let eligible = users(6);
        let before = eligible.clone();
        let _ = select_team(&eligible, 3, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(eligible, before);
    }

    #[test]
    fn every_candidate_can_be_chosen() {
        let eligible = users(5);
        let mut rng = StdRng::seed_from_u64(2024);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            let team = select_team(&eligible, 1, &mut rng).unwrap();
            seen.insert(team[0].id.clone());
        }
        assert_eq!(seen.len(), 5);
    }
}
