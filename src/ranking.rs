use crate::frequency::FrequencyStore;

/// Final score: log-dampened global popularity times a context bias.
pub(crate) fn score_term(
    freqs: &FrequencyStore,
    term: &str,
    category: Option<&str>,
    context_weight: f64,
) -> f64 {
    let base = ((freqs.global_count(term) + 1) as f64).ln();
    base * bias(freqs, term, category, context_weight)
}

/// Multiplier reflecting how relevant `term` is to `category` right now.
/// Neutral (1.0) without a category or without any recorded score for the
/// term in that category.
fn bias(freqs: &FrequencyStore, term: &str, category: Option<&str>, context_weight: f64) -> f64 {
    let Some(category) = category else {
        return 1.0;
    };
    let ctx = freqs.context_score(category, term);
    if ctx <= 0.0 {
        return 1.0;
    }

    // ctx is recorded, so the category max is at least ctx and nonzero.
    let relative_recency = ctx / freqs.max_context_score(category);

    let global = freqs.global_count(term).max(1) as f64;
    let global_max = freqs.max_global_count().max(1) as f64;
    let denom = global_max.ln();
    // ln(1) = 0 when the most frequent term has a single occurrence; the
    // global share is defined as 0 there so the bias stays finite.
    let global_share = if denom == 0.0 { 0.0 } else { global.ln() / denom };

    relative_recency * context_weight + (1.0 - context_weight) * global_share
}

/// Scores, orders, and truncates candidates. Descending by score, ties by
/// ascending term, which makes the output a total deterministic order.
pub(crate) fn rank(
    freqs: &FrequencyStore,
    candidates: Vec<String>,
    category: Option<&str>,
    context_weight: f64,
    limit: usize,
) -> Vec<String> {
    let mut scored: Vec<(String, f64)> = candidates
        .into_iter()
        .map(|term| {
            let score = score_term(freqs, &term, category, context_weight);
            (term, score)
        })
        .collect();

    scored.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    scored.into_iter().take(limit).map(|(term, _)| term).collect()
}
