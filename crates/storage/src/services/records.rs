//! Personal-record derivation over set history.
//!
//! Records are never stored; they are recomputed from logged sets. The
//! ordering is weight first, reps as tiebreaker at equal weight. A
//! lower-weight, higher-rep set is never a record over a heavier set,
//! whatever its volume.

use std::collections::HashMap;

use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::Result;
use crate::repository::set_entry::SetRepository;

/// The two fields the record ordering is defined over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetScore {
    pub weight: Decimal,
    pub reps: i32,
}

/// One historical set, as loaded for record computation.
#[derive(Debug, Clone, FromRow)]
pub struct RecordedSet {
    pub movement_id: Uuid,
    pub movement_name: String,
    pub weight: Decimal,
    pub reps: i32,
}

impl RecordedSet {
    pub fn score(&self) -> SetScore {
        SetScore {
            weight: self.weight,
            reps: self.reps,
        }
    }
}

/// Best set seen so far for one movement.
#[derive(Debug, Clone)]
pub struct PersonalRecord {
    pub movement_id: Uuid,
    pub movement_name: String,
    pub best: SetScore,
}

/// Outcome of checking a candidate set against the record map.
#[derive(Debug, Clone)]
pub struct PrCheck {
    pub is_pr: bool,
    pub previous_best: Option<PersonalRecord>,
}

/// Outcome of logging a set into an active session.
#[derive(Debug, Clone)]
pub struct SetOutcome {
    pub is_pr: bool,
    pub celebrated: bool,
    pub previous_best: Option<PersonalRecord>,
}

/// Strict "is better" ordering for sets of the same movement: heavier
/// always wins; reps only break ties at equal weight. Ties are not better.
pub fn is_better_set(a: &SetScore, b: &SetScore) -> bool {
    if a.weight != b.weight {
        return a.weight > b.weight;
    }
    a.reps > b.reps
}

/// Single scan over history keeping the best set per movement.
/// First-seen wins on ties: the incumbent is only replaced by a strictly
/// better set. Movements without history are absent from the map.
pub fn build_records<I>(history: I) -> HashMap<Uuid, PersonalRecord>
where
    I: IntoIterator<Item = RecordedSet>,
{
    let mut records: HashMap<Uuid, PersonalRecord> = HashMap::new();

    for set in history {
        let score = set.score();
        match records.get_mut(&set.movement_id) {
            Some(record) => {
                if is_better_set(&score, &record.best) {
                    record.best = score;
                }
            }
            None => {
                records.insert(
                    set.movement_id,
                    PersonalRecord {
                        movement_id: set.movement_id,
                        movement_name: set.movement_name,
                        best: score,
                    },
                );
            }
        }
    }

    records
}

/// Classify a candidate set against the record map. The first-ever set of
/// a movement is always a record; otherwise the candidate must strictly
/// beat the previous best, which is returned either way.
pub fn check_for_pr(
    movement_id: Uuid,
    candidate: &SetScore,
    records: &HashMap<Uuid, PersonalRecord>,
) -> PrCheck {
    match records.get(&movement_id) {
        Some(previous) => PrCheck {
            is_pr: is_better_set(candidate, &previous.best),
            previous_best: Some(previous.clone()),
        },
        None => PrCheck {
            is_pr: true,
            previous_best: None,
        },
    }
}

/// Best set so far per movement within the active session.
///
/// Layered on top of [`check_for_pr`]: a record is only celebrated when the
/// set also improves on everything already logged for the movement in the
/// current session, so one workout does not announce the same record for
/// every following set.
#[derive(Debug, Default)]
pub struct SessionBests {
    best: HashMap<Uuid, SetScore>,
}

impl SessionBests {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, movement_id: Uuid, score: SetScore) {
        match self.best.get_mut(&movement_id) {
            Some(best) => {
                if is_better_set(&score, best) {
                    *best = score;
                }
            }
            None => {
                self.best.insert(movement_id, score);
            }
        }
    }

    /// True when `score` strictly beats the session best for the movement
    /// (vacuously true for the first set of a movement this session).
    pub fn improves(&self, movement_id: Uuid, score: &SetScore) -> bool {
        match self.best.get(&movement_id) {
            Some(best) => is_better_set(score, best),
            None => true,
        }
    }
}

/// Evaluate a set about to be logged into `session_id`.
///
/// History is every set from other sessions; the active session's earlier
/// sets only feed the session-best refinement.
pub async fn evaluate_logged_set(
    pool: &PgPool,
    session_id: Uuid,
    movement_id: Uuid,
    candidate: &SetScore,
) -> Result<SetOutcome> {
    let repo = SetRepository::new(pool);

    let history = repo.history_excluding_session(session_id).await?;
    let records = build_records(history);
    let check = check_for_pr(movement_id, candidate, &records);

    let mut bests = SessionBests::new();
    for set in repo.session_history(session_id).await? {
        let score = set.score();
        bests.observe(set.movement_id, score);
    }

    Ok(SetOutcome {
        is_pr: check.is_pr,
        celebrated: check.is_pr && bests.improves(movement_id, candidate),
        previous_best: check.previous_best,
    })
}

/// Current records across all history, sorted by movement name.
pub async fn current_records(pool: &PgPool) -> Result<Vec<PersonalRecord>> {
    let repo = SetRepository::new(pool);
    let history = repo.full_history().await?;

    let mut records: Vec<PersonalRecord> = build_records(history).into_values().collect();
    records.sort_by(|a, b| a.movement_name.cmp(&b.movement_name));

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(weight: i64, reps: i32) -> SetScore {
        SetScore {
            weight: Decimal::from(weight),
            reps,
        }
    }

    fn set(movement_id: Uuid, weight: i64, reps: i32) -> RecordedSet {
        RecordedSet {
            movement_id,
            movement_name: "Bench Press".to_string(),
            weight: Decimal::from(weight),
            reps,
        }
    }

    #[test]
    fn test_heavier_weight_wins_regardless_of_reps() {
        assert!(is_better_set(&score(100, 1), &score(99, 50)));
        assert!(!is_better_set(&score(90, 20), &score(100, 1)));
    }

    #[test]
    fn test_reps_break_ties_at_equal_weight() {
        assert!(is_better_set(&score(100, 10), &score(100, 8)));
        assert!(!is_better_set(&score(100, 8), &score(100, 10)));
    }

    #[test]
    fn test_equal_sets_are_not_better() {
        let x = score(100, 5);
        assert!(!is_better_set(&x, &x));
    }

    #[test]
    fn test_first_set_of_movement_is_always_a_pr() {
        let check = check_for_pr(Uuid::new_v4(), &score(20, 1), &HashMap::new());
        assert!(check.is_pr);
        assert!(check.previous_best.is_none());
    }

    #[test]
    fn test_previous_best_returned_even_when_not_a_pr() {
        let movement = Uuid::new_v4();
        let records = build_records(vec![set(movement, 120, 3)]);

        let check = check_for_pr(movement, &score(110, 8), &records);
        assert!(!check.is_pr);
        let previous = check.previous_best.unwrap();
        assert_eq!(previous.best, score(120, 3));
    }

    #[test]
    fn test_build_records_keeps_historical_maximum() {
        let movement = Uuid::new_v4();
        let records = build_records(vec![
            set(movement, 100, 5),
            set(movement, 120, 3),
            set(movement, 110, 8),
        ]);

        assert_eq!(records.len(), 1);
        assert_eq!(records[&movement].best, score(120, 3));
    }

    #[test]
    fn test_build_records_first_seen_wins_on_ties() {
        let movement = Uuid::new_v4();
        let mut first = set(movement, 100, 5);
        first.movement_name = "Squat".to_string();
        let records = build_records(vec![first, set(movement, 100, 5)]);

        assert_eq!(records[&movement].movement_name, "Squat");
        assert_eq!(records[&movement].best, score(100, 5));
    }

    #[test]
    fn test_build_records_one_entry_per_movement() {
        let bench = Uuid::new_v4();
        let squat = Uuid::new_v4();
        let records = build_records(vec![
            set(bench, 80, 5),
            set(squat, 140, 3),
            set(bench, 85, 2),
        ]);

        assert_eq!(records.len(), 2);
        assert_eq!(records[&bench].best, score(85, 2));
        assert_eq!(records[&squat].best, score(140, 3));
    }

    #[test]
    fn test_session_best_suppresses_repeat_of_equal_set() {
        let movement = Uuid::new_v4();
        let mut bests = SessionBests::new();

        assert!(bests.improves(movement, &score(100, 5)));
        bests.observe(movement, score(100, 5));

        // Logging the same numbers again is not an improvement.
        assert!(!bests.improves(movement, &score(100, 5)));
        // Nor is a lighter set with more reps.
        assert!(!bests.improves(movement, &score(95, 12)));
        assert!(bests.improves(movement, &score(100, 6)));
    }

    #[test]
    fn test_session_bests_are_per_movement() {
        let bench = Uuid::new_v4();
        let squat = Uuid::new_v4();
        let mut bests = SessionBests::new();
        bests.observe(bench, score(100, 5));

        assert!(bests.improves(squat, &score(60, 5)));
    }
}
