//! Applying suggested fixes to source text

use crate::diagnostic::Fix;

/// Apply fixes to `source` in source order.
///
/// A fix that overlaps one already applied is skipped, as is an exact
/// repeat of an applied fix. Insertions at the same offset are kept in the
/// order they were given.
pub fn apply_fixes<'f>(source: &str, fixes: impl IntoIterator<Item = &'f Fix>) -> String {
    let mut fixes: Vec<&Fix> = fixes.into_iter().collect();
    fixes.sort_by_key(|fix| (fix.start, fix.end));

    let mut output = String::with_capacity(source.len());
    let mut cursor = 0usize;
    let mut applied: Vec<&Fix> = Vec::new();

    for fix in fixes {
        let (start, end) = (fix.start as usize, fix.end as usize);
        if start < cursor || end > source.len() || start > end {
            log::debug!("skipping overlapping fix at {}..{}", start, end);
            continue;
        }
        if applied
            .iter()
            .any(|prev| prev.span() == fix.span() && prev.replacement == fix.replacement)
        {
            continue;
        }

        output.push_str(&source[cursor..start]);
        output.push_str(&fix.replacement);
        cursor = end;
        applied.push(fix);
    }

    output.push_str(&source[cursor..]);
    output
}
