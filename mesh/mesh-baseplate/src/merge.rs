//! Fixed-point merging of overlapping baseplate sections.

use tracing::debug;

use crate::section::{BaseplateSection, next_section_id};

/// Combine every group of overlapping sections into its bounding rectangle.
///
/// See [`merge_sections_counted`].
///
/// # Example
///
/// ```
/// use mesh_baseplate::{merge_sections, BaseplateSection};
///
/// let merged = merge_sections(&[
///     BaseplateSection::new("a", 0.0, 10.0, 0.0, 10.0),
///     BaseplateSection::new("b", 5.0, 15.0, 5.0, 15.0),
/// ]);
///
/// assert_eq!(merged.len(), 1);
/// assert_eq!((merged[0].min_x, merged[0].max_x), (0.0, 15.0));
/// ```
#[must_use]
pub fn merge_sections(sections: &[BaseplateSection]) -> Vec<BaseplateSection> {
    merge_sections_counted(sections).0
}

/// Merge overlapping sections until none overlap, returning the merge count.
///
/// Each pass walks the list once: a section absorbs every later section it
/// overlaps, growing as it goes. Passes repeat until one performs no merge,
/// since a grown rectangle may now reach a section it skipped earlier.
/// Sections that absorbed others get a fresh identifier; untouched sections
/// keep theirs and their relative order.
///
/// Running the output through again performs zero merges.
#[must_use]
pub fn merge_sections_counted(sections: &[BaseplateSection]) -> (Vec<BaseplateSection>, usize) {
    let mut current = sections.to_vec();
    let mut merges = 0usize;
    let mut passes = 0usize;

    loop {
        passes += 1;
        let mut pass_merges = 0usize;
        let mut absorbed = vec![false; current.len()];
        let mut next = Vec::with_capacity(current.len());

        for i in 0..current.len() {
            if absorbed[i] {
                continue;
            }
            let mut section = current[i].clone();
            let mut grew = false;

            for j in (i + 1)..current.len() {
                if !absorbed[j] && section.overlaps(&current[j]) {
                    section.expand_to(&current[j]);
                    absorbed[j] = true;
                    grew = true;
                    pass_merges += 1;
                }
            }

            if grew {
                section.id = next_section_id();
            }
            next.push(section);
        }

        current = next;
        merges += pass_merges;
        if pass_merges == 0 {
            break;
        }
    }

    debug!(
        input = sections.len(),
        output = current.len(),
        merges,
        passes,
        "Sections merged"
    );

    (current, merges)
}
