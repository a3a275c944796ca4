use std::collections::HashMap;

use uuid::Uuid;

use super::models::CatchRow;

/// Sum of `size_cm × fish_count` over measured catches, per participant.
/// Display figure only; no ranking is derived from it, since a record's one
/// measured size does not describe the other fish it may cover.
pub fn total_size_by_participant(records: &[CatchRow]) -> HashMap<Uuid, f32> {
    let mut totals: HashMap<Uuid, f32> = HashMap::new();

    for record in records {
        if let Some(size) = record.size_cm {
            *totals.entry(record.participant_id).or_default() += size * record.fish_count as f32;
        }
    }

    totals
}
