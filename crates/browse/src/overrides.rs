//! Per-episode voice/quality override badges.
//!
//! A series detail page shows a badge only for episodes that deviate from
//! the baseline a viewer expects by default. The baseline per field is the
//! item's declared value, falling back to the majority value across all
//! episodes; voice and quality are diffed independently.

use kinoteka_core::SeasonMeta;

/// One divergent episode, keyed by `(season, episode)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideBadge {
    pub season: u32,
    pub episode: u32,
    pub voice: Option<String>,
    pub quality: Option<String>,
}

impl OverrideBadge {
    /// Display label, e.g. `S1E2: MVO, 4K`. Voice comes before quality
    /// when both diverge.
    pub fn label(&self) -> String {
        let parts: Vec<&str> = [self.voice.as_deref(), self.quality.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        format!("S{}E{}: {}", self.season, self.episode, parts.join(", "))
    }
}

/// Compute badges for every episode whose voice or quality diverges from
/// the effective baseline. Empty when there are no episodes or nothing
/// diverges.
pub fn diff_overrides(
    baseline_voice: Option<&str>,
    baseline_quality: Option<&str>,
    seasons: &[SeasonMeta],
) -> Vec<OverrideBadge> {
    let episodes: Vec<(u32, u32, Option<&str>, Option<&str>)> = seasons
        .iter()
        .flat_map(|s| {
            s.episodes.iter().map(|ep| {
                (
                    s.number,
                    ep.number,
                    trimmed(ep.voice.as_deref()),
                    trimmed(ep.quality.as_deref()),
                )
            })
        })
        .collect();

    let base_voice = trimmed(baseline_voice)
        .map(str::to_string)
        .or_else(|| majority(episodes.iter().map(|e| e.2)));
    let base_quality = trimmed(baseline_quality)
        .map(str::to_string)
        .or_else(|| majority(episodes.iter().map(|e| e.3)));

    episodes
        .iter()
        .filter_map(|&(season, episode, voice, quality)| {
            let voice = voice.filter(|v| Some(*v) != base_voice.as_deref());
            let quality = quality.filter(|q| Some(*q) != base_quality.as_deref());
            if voice.is_none() && quality.is_none() {
                return None;
            }
            Some(OverrideBadge {
                season,
                episode,
                voice: voice.map(str::to_string),
                quality: quality.map(str::to_string),
            })
        })
        .collect()
}

fn trimmed(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Most frequent value; ties go to the value seen first in flattening
/// order. `None` when no episode carries the field.
fn majority<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Option<String> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for value in values.flatten() {
        match counts.iter_mut().find(|(v, _)| *v == value) {
            Some((_, n)) => *n += 1,
            None => counts.push((value, 1)),
        }
    }

    let mut top: Option<(&str, usize)> = None;
    for (value, n) in counts {
        // Strict greater-than keeps the first-encountered value on ties.
        if top.is_none_or(|(_, best)| n > best) {
            top = Some((value, n));
        }
    }
    top.map(|(v, _)| v.to_string())
}
