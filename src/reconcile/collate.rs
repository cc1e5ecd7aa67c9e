use std::cmp::Ordering;

use anyhow::{Result, anyhow};
use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;

// CLDR `zh` collation: toned pinyin order with Han ahead of Latin.
pub struct ZhCollator {
    collator: Collator,
}

impl ZhCollator {
    pub fn new() -> Result<Self> {
        let collator = Collator::try_new(&locale!("zh").into(), CollatorOptions::new())
            .map_err(|err| anyhow!("failed to load zh collation data: {err:?}"))?;
        Ok(Self { collator })
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b)
    }

    // Stable, so equal keys keep input order.
    pub fn sort_by<T, F>(&self, items: &mut [T], key: F)
    where
        F: Fn(&T) -> &str,
    {
        items.sort_by(|a, b| self.compare(key(a), key(b)));
    }
}
