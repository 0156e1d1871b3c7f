//! Shuffle order generation
//!
//! A shuffle order is a permutation of the queue's media ids. Generation is a
//! uniform Fisher-Yates shuffle over the tracks currently in the queue.

use quiet_core::{MusicMetadata, QuietError, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Fresh uniform permutation of the ids of `tracks`
pub(crate) fn shuffled_ids<R: Rng + ?Sized>(tracks: &[MusicMetadata], rng: &mut R) -> Vec<String> {
    let mut ids: Vec<String> = tracks.iter().map(|t| t.media_id().to_owned()).collect();
    ids.shuffle(rng);
    ids
}

/// Check that `order` holds exactly the ids of `tracks`, each once
pub(crate) fn validate_permutation(tracks: &[MusicMetadata], order: &[String]) -> Result<()> {
    if order.len() != tracks.len() {
        return Err(QuietError::invalid_argument(format!(
            "shuffle order has {} ids but the queue has {} tracks",
            order.len(),
            tracks.len()
        )));
    }

    let known: HashSet<&str> = tracks.iter().map(MusicMetadata::media_id).collect();
    let mut seen = HashSet::with_capacity(order.len());
    for id in order {
        if !known.contains(id.as_str()) {
            return Err(QuietError::invalid_argument(format!(
                "shuffle order references unknown media id: {id}"
            )));
        }
        if !seen.insert(id.as_str()) {
            return Err(QuietError::invalid_argument(format!(
                "shuffle order repeats media id: {id}"
            )));
        }
    }

    Ok(())
}
