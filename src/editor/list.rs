//! List item detection for a single line of text.

/// Spaces added by one indent step of an unordered (`-`) item.
pub const UNORDERED_INDENT: usize = 2;

/// Spaces added by one indent step of an ordered (`1.`) item.
pub const ORDERED_INDENT: usize = 3;

/// Classification of a line's leading content.
///
/// `indent` is the char offset of the marker: the hyphen for unordered
/// items, the first digit for ordered ones. Only spaces precede it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListMarker {
    #[default]
    None,
    Unordered { indent: usize },
    Ordered { indent: usize },
}

impl ListMarker {
    pub const fn is_list_item(self) -> bool {
        !matches!(self, Self::None)
    }

    pub const fn is_unordered(self) -> bool {
        matches!(self, Self::Unordered { .. })
    }

    pub const fn is_ordered(self) -> bool {
        matches!(self, Self::Ordered { .. })
    }

    /// Offset of the marker within its line, if this is a list item.
    pub const fn indent(self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::Unordered { indent } | Self::Ordered { indent } => Some(indent),
        }
    }

    /// Spaces inserted in front of the line by Tab.
    pub const fn indent_step(self) -> usize {
        match self {
            Self::None => 0,
            Self::Unordered { .. } => UNORDERED_INDENT,
            Self::Ordered { .. } => ORDERED_INDENT,
        }
    }

    /// Leading chars removed by Shift+Tab.
    ///
    /// Removal is capped at one indent step no matter how deep the marker
    /// sits, so a six-space unordered item loses two spaces, not six.
    pub const fn outdent_width(self) -> usize {
        match self {
            Self::None => 0,
            Self::Unordered { indent } => {
                if indent < 1 {
                    0
                } else if indent == 1 {
                    1
                } else {
                    UNORDERED_INDENT
                }
            }
            Self::Ordered { indent } => {
                if indent < 1 {
                    0
                } else if indent < ORDERED_INDENT {
                    indent
                } else {
                    ORDERED_INDENT
                }
            }
        }
    }

    /// Text inserted by Enter to open the next item at the same depth.
    pub fn continuation(self) -> Option<String> {
        let (indent, marker) = match self {
            Self::None => return None,
            Self::Unordered { indent } => (indent, "- "),
            Self::Ordered { indent } => (indent, "1. "),
        };
        let mut text = String::with_capacity(1 + indent + marker.len());
        text.push('\n');
        text.extend(std::iter::repeat_n(' ', indent));
        text.push_str(marker);
        Some(text)
    }
}

/// Classify a line as an unordered item, an ordered item, or neither.
///
/// Unordered is tried first. The two can never both match since the char
/// after the leading spaces is either `-` or a digit.
pub fn classify_line(line: &str) -> ListMarker {
    let indent = leading_spaces(line);
    let rest = &line[indent..];
    if rest.starts_with('-') {
        return ListMarker::Unordered { indent };
    }
    if rest.starts_with(|c: char| c.is_ascii_digit()) {
        return ListMarker::Ordered { indent };
    }
    ListMarker::None
}

/// Count of leading ASCII spaces. Tabs do not count as indentation.
fn leading_spaces(line: &str) -> usize {
    line.bytes().take_while(|&b| b == b' ').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_unordered_at_column_zero() {
        assert_eq!(classify_line("- foo"), ListMarker::Unordered { indent: 0 });
    }

    #[test]
    fn test_classify_unordered_indented() {
        assert_eq!(classify_line("  - foo"), ListMarker::Unordered { indent: 2 });
    }

    #[test]
    fn test_classify_ordered_at_column_zero() {
        assert_eq!(classify_line("1. foo"), ListMarker::Ordered { indent: 0 });
    }

    #[test]
    fn test_classify_ordered_indented_multi_digit() {
        assert_eq!(classify_line("   42. foo"), ListMarker::Ordered { indent: 3 });
    }

    #[test]
    fn test_classify_plain_text() {
        assert_eq!(classify_line("plain text"), ListMarker::None);
    }

    #[test]
    fn test_classify_empty_and_blank() {
        assert_eq!(classify_line(""), ListMarker::None);
        assert_eq!(classify_line("    "), ListMarker::None);
    }

    #[test]
    fn test_ordered_needs_no_dot() {
        // A bare digit run is enough.
        assert_eq!(classify_line("7"), ListMarker::Ordered { indent: 0 });
        assert_eq!(classify_line("2024 was a year"), ListMarker::Ordered { indent: 0 });
    }

    #[test]
    fn test_hyphen_without_space_is_unordered() {
        assert_eq!(classify_line("-x"), ListMarker::Unordered { indent: 0 });
        assert_eq!(classify_line("---"), ListMarker::Unordered { indent: 0 });
    }

    #[test]
    fn test_tab_indentation_is_not_a_list() {
        assert_eq!(classify_line("\t- foo"), ListMarker::None);
    }

    #[test]
    fn test_text_before_marker_is_not_a_list() {
        assert_eq!(classify_line("a - b"), ListMarker::None);
        assert_eq!(classify_line("x1"), ListMarker::None);
    }

    #[test]
    fn test_non_ascii_digits_are_not_ordered() {
        assert_eq!(classify_line("٣. foo"), ListMarker::None);
    }

    #[test]
    fn test_predicates() {
        let ul = classify_line(" - a");
        assert!(ul.is_list_item());
        assert!(ul.is_unordered());
        assert!(!ul.is_ordered());
        assert_eq!(ul.indent(), Some(1));

        let none = classify_line("text");
        assert!(!none.is_list_item());
        assert_eq!(none.indent(), None);
    }

    #[test]
    fn test_indent_steps() {
        assert_eq!(ListMarker::Unordered { indent: 0 }.indent_step(), 2);
        assert_eq!(ListMarker::Ordered { indent: 5 }.indent_step(), 3);
        assert_eq!(ListMarker::None.indent_step(), 0);
    }

    #[test]
    fn test_unordered_outdent_width_caps_at_two() {
        let width = |indent| ListMarker::Unordered { indent }.outdent_width();
        assert_eq!(width(0), 0);
        assert_eq!(width(1), 1);
        assert_eq!(width(2), 2);
        assert_eq!(width(6), 2);
    }

    #[test]
    fn test_ordered_outdent_width_caps_at_three() {
        let width = |indent| ListMarker::Ordered { indent }.outdent_width();
        assert_eq!(width(0), 0);
        assert_eq!(width(1), 1);
        assert_eq!(width(2), 2);
        assert_eq!(width(3), 3);
        assert_eq!(width(9), 3);
    }

    #[test]
    fn test_continuation_text() {
        assert_eq!(
            ListMarker::Unordered { indent: 0 }.continuation().as_deref(),
            Some("\n- ")
        );
        assert_eq!(
            ListMarker::Unordered { indent: 4 }.continuation().as_deref(),
            Some("\n    - ")
        );
        assert_eq!(
            ListMarker::Ordered { indent: 3 }.continuation().as_deref(),
            Some("\n   1. ")
        );
        assert_eq!(ListMarker::None.continuation(), None);
    }
}
