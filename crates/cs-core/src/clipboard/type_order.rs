//! Deterministic ordering of type identifiers.
//!
//! The head of a sorted list is the representation consumers treat as
//! primary, so the order has to be reproduced exactly for stored items:
//!
//! 1. `dyn.` identifiers first
//! 2. `public.` identifiers after every other non-dynamic identifier
//! 3. shorter identifiers first
//! 4. byte-wise comparison, so distinct identifiers never compare equal

use std::cmp::Ordering;

pub const DYNAMIC_PREFIX: &str = "dyn.";
pub const PUBLIC_PREFIX: &str = "public.";

pub fn compare_types(lhs: &str, rhs: &str) -> Ordering {
    let lhs_dynamic = lhs.starts_with(DYNAMIC_PREFIX);
    let rhs_dynamic = rhs.starts_with(DYNAMIC_PREFIX);
    let lhs_public = lhs.starts_with(PUBLIC_PREFIX);
    let rhs_public = rhs.starts_with(PUBLIC_PREFIX);

    rhs_dynamic
        .cmp(&lhs_dynamic)
        .then_with(|| lhs_public.cmp(&rhs_public))
        .then_with(|| lhs.chars().count().cmp(&rhs.chars().count()))
        .then_with(|| lhs.cmp(rhs))
}

pub fn sort_types<S: AsRef<str>>(types: &mut [S]) {
    types.sort_by(|a, b| compare_types(a.as_ref(), b.as_ref()));
}

pub fn sorted_types<I, S>(types: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut out: Vec<String> = types.into_iter().map(Into::into).collect();
    sort_types(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &[&str] = &[
        "public.utf8-plain-text",
        "public.html",
        "public.rtf",
        "dyn.ah62d4rv4gu8y6y4grf0gn5xbrzw1gydcr7u1e3cytf2gn",
        "dyn.ah62d4rv4gu8yc6durvwwaznwmuuha2pxsvw0e55bsmwca7d3sbwu",
        "com.apple.flat-rtfd",
        "org.nspasteboard.source",
        "com.apple.webarchive",
        "NeXT Rich Text Format v1.0 pasteboard type",
        "public.png",
        "a",
        "b",
    ];

    #[test]
    fn dynamic_first_public_last() {
        let sorted = sorted_types(vec![
            "public.utf8-plain-text",
            "com.apple.flat-rtfd",
            "dyn.ah62d4rv4gu8y",
        ]);
        assert_eq!(
            sorted,
            vec![
                "dyn.ah62d4rv4gu8y",
                "com.apple.flat-rtfd",
                "public.utf8-plain-text"
            ]
        );
    }

    #[test]
    fn shorter_identifiers_win_ties() {
        let sorted = sorted_types(vec!["public.utf8-plain-text", "public.rtf", "public.html"]);
        assert_eq!(
            sorted,
            vec!["public.rtf", "public.html", "public.utf8-plain-text"]
        );
    }

    #[test]
    fn strict_total_order_over_sample() {
        for a in SAMPLE {
            for b in SAMPLE {
                let ab = compare_types(a, b);
                let ba = compare_types(b, a);
                if a == b {
                    assert_eq!(ab, Ordering::Equal);
                } else {
                    assert_ne!(ab, Ordering::Equal, "{a} vs {b}");
                    assert_eq!(ab, ba.reverse(), "{a} vs {b}");
                }
            }
        }
    }

    #[test]
    fn ordering_is_transitive_over_sample() {
        for a in SAMPLE {
            for b in SAMPLE {
                for c in SAMPLE {
                    if compare_types(a, b) == Ordering::Less
                        && compare_types(b, c) == Ordering::Less
                    {
                        assert_eq!(compare_types(a, c), Ordering::Less);
                    }
                }
            }
        }
    }

    #[test]
    fn sorting_is_idempotent() {
        let once = sorted_types(SAMPLE.iter().copied());
        let twice = sorted_types(once.clone());
        assert_eq!(once, twice);

        let reversed = sorted_types(SAMPLE.iter().rev().copied());
        assert_eq!(once, reversed);
    }
}
