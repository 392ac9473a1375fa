use crate::models::TreeNode;
use crate::services::ports::ExplorerConfig;
use icu_collator::{Collator, CollatorOptions};
use std::cmp::Ordering;

thread_local! {
    // Root locale, default (tertiary) strength: accents and case only break
    // ties, lowercase ahead of uppercase.
    static COLLATOR: Option<Collator> =
        match Collator::try_new(&Default::default(), CollatorOptions::new()) {
            Ok(collator) => Some(collator),
            Err(e) => {
                tracing::warn!(error = ?e, "root collator unavailable, using case-folded order");
                None
            }
        };
}

/// Locale-aware label order. Exact comparison only breaks what the
/// collator considers equal.
pub fn label_cmp(a: &str, b: &str) -> Ordering {
    COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => folded_cmp(a, b),
        })
        .then_with(|| a.cmp(b))
}

/// Case-folded compare with lowercase winning case-only ties.
fn folded_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// Directories, then sources, then headers, then everything else.
pub fn sort_nodes(items: &mut [TreeNode], config: &ExplorerConfig) {
    items.sort_by(|a, b| {
        a.sort_tier(config)
            .cmp(&b.sort_tier(config))
            .then_with(|| label_cmp(&a.label, &b.label))
    });
}
