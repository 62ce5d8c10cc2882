use crate::index::Pointer;
use crate::index::PointerSyntaxError;
use crate::index::encode_segment;
use proptest::prelude::*;

type Result<T> = std::result::Result<T, PointerSyntaxError>;

#[test]
fn document_only_pointer_has_no_segments() -> Result<()> {
    let pointer = Pointer::parse("common.yaml")?;
    assert_eq!(pointer.document(), Some("common.yaml"));
    assert!(pointer.segments().is_empty());
    assert!(!pointer.is_local());
    Ok(())
}

#[test]
fn local_pointer_decodes_escapes() -> Result<()> {
    let pointer = Pointer::parse("#/paths/~1pets~1{id}/x~0y/a%20b")?;
    assert!(pointer.is_local());
    assert_eq!(pointer.segments(), &["paths", "/pets/{id}", "x~y", "a b"]);
    Ok(())
}

#[test]
fn empty_fragment_addresses_document_root() -> Result<()> {
    let pointer = Pointer::parse("#")?;
    assert!(pointer.segments().is_empty());
    assert_eq!(pointer.to_string(), "#");
    Ok(())
}

#[test]
fn malformed_pointers_are_rejected() {
    assert_eq!(Pointer::parse(""), Err(PointerSyntaxError::Empty));
    assert!(matches!(
        Pointer::parse("#/a b"),
        Err(PointerSyntaxError::Whitespace { .. }),
    ));
    assert!(matches!(
        Pointer::parse("#components"),
        Err(PointerSyntaxError::RelativeFragment { fragment }) if fragment == "components",
    ));
    assert!(matches!(
        Pointer::parse("a.yaml#/x#/y"),
        Err(PointerSyntaxError::MultipleFragments { .. }),
    ));
    assert!(matches!(
        Pointer::parse("#/a~2"),
        Err(PointerSyntaxError::InvalidEscape { segment }) if segment == "a~2",
    ));
    assert!(matches!(
        Pointer::parse("#/a%zz"),
        Err(PointerSyntaxError::InvalidPercentEncoding { .. }),
    ));
}

proptest! {
    #[test]
    fn encoded_segments_parse_back_unchanged(
        segments in prop::collection::vec(".*", 0..5),
    ) {
        let fragment: String = segments
            .iter()
            .map(|segment| format!("/{}", encode_segment(segment)))
            .collect();
        let pointer = Pointer::parse(&format!("#{fragment}")).unwrap();
        prop_assert_eq!(pointer.segments(), segments.as_slice());
        prop_assert_eq!(pointer.fragment(), fragment);
    }
}
