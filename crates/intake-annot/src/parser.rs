//! Iterative split-and-trim parser for the annotation grammar.

use crate::annotation::{Annotation, CodePair, Enumeration};
use crate::error::AnnotationError;

/// Literal marker introducing the group tag. Case-sensitive.
pub const GROUP_MARKER: &str = ", Group ";

/// Delimiter separating a code from its description inside a fragment.
const CODE_DELIMITER: &str = " : ";

/// Extract the group tag from a raw annotation, if present.
///
/// The tag is the trimmed text following the last [`GROUP_MARKER`] to the
/// end of the string. Returns `None` when the marker is absent or the tag
/// is blank; resolving the tag against the known groups is the caller's
/// concern.
pub fn group_of(raw: &str) -> Option<&str> {
    raw.rfind(GROUP_MARKER)
        .map(|at| raw[at + GROUP_MARKER.len()..].trim())
        .filter(|tag| !tag.is_empty())
}

/// Parse one raw annotation string.
///
/// The label is everything before the first `(`; the enumeration body is
/// the text strictly between that `(` and the next `)`. No bracket
/// balancing is attempted: nested parentheses do not occur in valid input.
///
/// An empty body yields [`Enumeration::Empty`], not an error.
pub fn parse(raw: &str) -> Result<Annotation, AnnotationError> {
    let group = group_of(raw).map(str::to_owned);

    let (label, values) = match raw.find('(') {
        Some(open) => {
            let label = raw[..open].trim().to_owned();
            let rest = &raw[open + 1..];
            let close = rest
                .find(')')
                .ok_or(AnnotationError::UnterminatedEnumeration)?;
            (label, parse_enumeration(&rest[..close])?)
        }
        None => {
            // No enumeration at all; the label runs up to the group tag.
            let head = raw.rfind(GROUP_MARKER).map_or(raw, |at| &raw[..at]);
            (head.trim().to_owned(), Enumeration::Empty)
        }
    };

    Ok(Annotation {
        label,
        group,
        values,
    })
}

/// Parse an enumeration body into coded pairs or plain values.
fn parse_enumeration(body: &str) -> Result<Enumeration, AnnotationError> {
    // Whitespace-only fragments (including the one produced by a trailing
    // ';') are dropped; source order is preserved for the rest.
    let fragments: Vec<&str> = body
        .split(';')
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect();

    if fragments.is_empty() {
        return Ok(Enumeration::Empty);
    }

    if fragments.iter().any(|f| f.contains(CODE_DELIMITER)) {
        let mut pairs = Vec::with_capacity(fragments.len());
        for fragment in fragments {
            let (code, description) = fragment.split_once(CODE_DELIMITER).ok_or_else(|| {
                AnnotationError::MixedEnumeration {
                    fragment: fragment.to_owned(),
                }
            })?;
            pairs.push(CodePair::new(code.trim(), description.trim()));
        }
        Ok(Enumeration::Coded(pairs))
    } else {
        Ok(Enumeration::Plain(
            fragments.into_iter().map(str::to_owned).collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_coded_enumeration_preserves_order() {
        let ann = parse("Kind (1 : A;2 : B;3 : C), Group Request").unwrap();
        assert_eq!(ann.label, "Kind");
        assert_eq!(ann.group.as_deref(), Some("Request"));
        assert_eq!(
            ann.values,
            Enumeration::Coded(vec![
                CodePair::new("1", "A"),
                CodePair::new("2", "B"),
                CodePair::new("3", "C"),
            ])
        );
    }

    #[test]
    fn test_plain_enumeration_preserves_order() {
        let ann = parse("Origin (Alpha;Beta;Gamma), Group Interview").unwrap();
        assert_eq!(
            ann.values,
            Enumeration::Plain(vec!["Alpha".into(), "Beta".into(), "Gamma".into()])
        );
    }

    #[test]
    fn test_code_splits_on_first_delimiter_only() {
        let ann = parse("Kind (1 : A : extra), Group Request").unwrap();
        assert_eq!(
            ann.values,
            Enumeration::Coded(vec![CodePair::new("1", "A : extra")])
        );
    }

    #[test]
    fn test_empty_body_is_not_an_error() {
        let ann = parse("Label()").unwrap();
        assert_eq!(ann.label, "Label");
        assert_eq!(ann.group, None);
        assert_eq!(ann.values, Enumeration::Empty);
    }

    #[test]
    fn test_trailing_semicolon_and_blank_fragments_dropped() {
        let ann = parse("Kind (1 : A; ;2 : B;)").unwrap();
        assert_eq!(ann.values.len(), 2);
    }

    #[test]
    fn test_mixed_forms_rejected() {
        let err = parse("Kind (1 : A;Beta)").unwrap_err();
        assert_eq!(
            err,
            AnnotationError::MixedEnumeration {
                fragment: "Beta".into()
            }
        );
    }

    #[test]
    fn test_unterminated_enumeration_rejected() {
        let err = parse("Kind (1 : A;2 : B, Group Request").unwrap_err();
        assert_eq!(err, AnnotationError::UnterminatedEnumeration);
    }

    #[test]
    fn test_no_enumeration_at_all() {
        let ann = parse("Interview date, Group Interview").unwrap();
        assert_eq!(ann.label, "Interview date");
        assert_eq!(ann.group.as_deref(), Some("Interview"));
        assert_eq!(ann.values, Enumeration::Empty);
    }

    #[test]
    fn test_group_tag_is_case_sensitive() {
        assert_eq!(group_of("Label, group Applicant"), None);
        assert_eq!(group_of("Label, Group Applicant"), Some("Applicant"));
    }

    #[test]
    fn test_group_tag_trimmed() {
        assert_eq!(group_of("Label, Group  Applicant "), Some("Applicant"));
    }

    #[test]
    fn test_blank_group_tag_is_none() {
        assert_eq!(group_of("Label, Group "), None);
    }

    #[test]
    fn test_codes_and_descriptions_trimmed() {
        let ann = parse("Kind ( 10 :  Housing advice ;11 : Family law )").unwrap();
        assert_eq!(
            ann.values,
            Enumeration::Coded(vec![
                CodePair::new("10", "Housing advice"),
                CodePair::new("11", "Family law"),
            ])
        );
    }

    #[test]
    fn test_full_annotation_with_group_tag() {
        let ann = parse("Situation (1 : Single;2 : Married), Group Applicant").unwrap();
        assert_eq!(ann.label, "Situation");
        assert_eq!(ann.group.as_deref(), Some("Applicant"));
        assert_eq!(
            ann.values,
            Enumeration::Coded(vec![
                CodePair::new("1", "Single"),
                CodePair::new("2", "Married"),
            ])
        );
    }
}
