use std::collections::BTreeMap;
use std::fmt;

/// Coarse markdown construct tracked by the structural verifier
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Element {
    CodeFence,
    HorizontalRule,
    Heading1,
    Heading2,
    Heading3,
    BulletItem,
    Admonition,
    Hyperlink,
    InlineCode,
}

impl Element {
    /// Every tracked element, in report order
    pub const ALL: [Element; 9] = [
        Element::CodeFence,
        Element::HorizontalRule,
        Element::Heading1,
        Element::Heading2,
        Element::Heading3,
        Element::BulletItem,
        Element::Admonition,
        Element::Hyperlink,
        Element::InlineCode,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Element::CodeFence => "code-fence",
            Element::HorizontalRule => "horizontal-rule",
            Element::Heading1 => "heading-level-1",
            Element::Heading2 => "heading-level-2",
            Element::Heading3 => "heading-level-3",
            Element::BulletItem => "bullet-item",
            Element::Admonition => "admonition-block",
            Element::Hyperlink => "hyperlink",
            Element::InlineCode => "inline-emphasis",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Occurrence count per element for one text
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ElementCounts {
    counts: BTreeMap<Element, usize>,
}

impl ElementCounts {
    /// Count for `element`; elements never recorded count as zero
    pub fn get(&self, element: Element) -> usize {
        self.counts.get(&element).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Element, usize)> + '_ {
        self.counts.iter().map(|(e, c)| (*e, *c))
    }

    /// Compare against the counts of a translated text.
    ///
    /// Every element present on either side is checked, so a counter that
    /// only reports some elements still gets a symmetric comparison.
    pub fn compare(&self, translated: &ElementCounts) -> Verification {
        let mut elements: Vec<Element> = self.counts.keys().copied().collect();
        elements.extend(translated.counts.keys().copied());
        elements.sort();
        elements.dedup();

        let mismatches = elements
            .into_iter()
            .filter_map(|element| {
                let source = self.get(element);
                let target = translated.get(element);
                (source != target).then_some(Mismatch {
                    element,
                    source,
                    target,
                })
            })
            .collect();

        Verification { mismatches }
    }
}

impl FromIterator<(Element, usize)> for ElementCounts {
    fn from_iter<I: IntoIterator<Item = (Element, usize)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

/// A single element whose count differs between source and translation
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Mismatch {
    pub element: Element,
    pub source: usize,
    pub target: usize,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: mismatch (source: {}, translated: {})",
            self.element, self.source, self.target
        )
    }
}

/// Result of comparing source and translated element counts.
///
/// Advisory only: a failed verification never blocks a run.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Verification {
    pub mismatches: Vec<Mismatch>,
}

impl Verification {
    pub fn all_matched(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// Mismatch for `element`, if its counts differ
    pub fn mismatch_for(&self, element: Element) -> Option<&Mismatch> {
        self.mismatches.iter().find(|m| m.element == element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(Element, usize)]) -> ElementCounts {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_missing_element_counts_as_zero() {
        let c = counts(&[(Element::Hyperlink, 3)]);
        assert_eq!(c.get(Element::Hyperlink), 3);
        assert_eq!(c.get(Element::Heading1), 0);
    }

    #[test]
    fn test_compare_reports_only_differences() {
        let source = counts(&[(Element::Heading1, 1), (Element::BulletItem, 2)]);
        let target = counts(&[(Element::Heading1, 0), (Element::BulletItem, 2)]);

        let result = source.compare(&target);
        assert!(!result.all_matched());
        assert_eq!(result.mismatches.len(), 1);
        assert_eq!(
            result.mismatch_for(Element::Heading1),
            Some(&Mismatch { element: Element::Heading1, source: 1, target: 0 })
        );
        assert!(result.mismatch_for(Element::BulletItem).is_none());
    }

    #[test]
    fn test_compare_considers_elements_only_in_target() {
        let source = counts(&[]);
        let target = counts(&[(Element::Admonition, 2)]);

        let result = source.compare(&target);
        assert_eq!(result.mismatches.len(), 1);
        assert_eq!(result.mismatches[0].source, 0);
        assert_eq!(result.mismatches[0].target, 2);
    }

    #[test]
    fn test_mismatch_display() {
        let m = Mismatch { element: Element::Heading1, source: 1, target: 0 };
        assert_eq!(m.to_string(), "heading-level-1: mismatch (source: 1, translated: 0)");
    }

    #[test]
    fn test_element_names_are_unique() {
        let mut names: Vec<_> = Element::ALL.iter().map(|e| e.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Element::ALL.len());
    }
}
