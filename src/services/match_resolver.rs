use crate::database::store::DocumentStore;
use crate::errors::{AppError, Result};
use crate::models::match_record::{Match, RawMatch};

/// Joins raw match documents against their engine documents.
///
/// Matches missing either reference are skipped. A reference that is
/// present but points at no engine fails the whole resolution. Lookups run
/// one match at a time; output order is not meaningful.
pub async fn resolve_matches(store: &dyn DocumentStore, raw: Vec<RawMatch>) -> Result<Vec<Match>> {
    let mut matches = Vec::with_capacity(raw.len());

    for record in raw {
        let Some((engine1_id, engine2_id)) = record.engine_refs() else {
            tracing::debug!("Skipping match {:?}: missing engine reference", record.id);
            continue;
        };

        let engine1 = store
            .find_engine(&engine1_id)
            .await?
            .ok_or_else(|| AppError::DanglingReference(engine1_id.to_hex()))?;
        let engine2 = store
            .find_engine(&engine2_id)
            .await?
            .ok_or_else(|| AppError::DanglingReference(engine2_id.to_hex()))?;

        let date = record.date_seconds();
        matches.push(Match {
            engine1,
            engine2,
            wins: record.wins,
            draws: record.draws,
            losses: record.losses,
            total: record.total,
            time_control: record.time_control,
            diff: record.diff,
            date,
        });
    }

    Ok(matches)
}
