use crate::models::{CountryObservation, CountryRecord, Panel, StatusLabel};

/// Derive the indicator fields for every observation and assemble the panel.
///
/// Per row:
/// - gap = max(0, target - interconnectivity), in percentage points
/// - price-benefit score = clamp(gap / target, 0, 1)
/// - integration potential index = price-benefit score (separate field,
///   same value under the current definition)
/// - status label, inclusive at both thresholds
/// - a narrative message embedding label, percentage (0 decimals), gap
///   (0 decimals) and index (2 decimals)
pub fn compute_indicators(observations: Vec<CountryObservation>, target_pct: f64) -> Panel {
    let records = observations
        .into_iter()
        .map(|obs| derive_record(obs, target_pct))
        .collect();
    Panel::new(target_pct, records)
}

fn derive_record(obs: CountryObservation, target_pct: f64) -> CountryRecord {
    let pct = obs.interconnectivity_pct;
    let gap = (target_pct - pct).max(0.0);
    let score = (gap / target_pct).clamp(0.0, 1.0);
    let index = score;
    let label = StatusLabel::classify(pct, target_pct);

    let ui_message = format!(
        "{label}. Interconnectivity: {pct:.0}% (gap to {target_pct:.0}% target: {gap:.0} pp). \
         Integration upside index: {index:.2}."
    );

    CountryRecord {
        country: obs.country,
        iso3: obs.iso3,
        interconnectivity_pct: pct,
        interconnection_gap_pctpt: gap,
        price_benefit_score: score,
        integration_potential_index: index,
        status_label: label,
        ui_message,
    }
}
