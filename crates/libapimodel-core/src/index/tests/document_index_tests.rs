use crate::index::IndexError;
use crate::index::LoadError;
use crate::index::PointerSyntaxError;
use crate::tests::test_utils;
use crate::tests::test_utils::InMemoryLoader;
use std::sync::Arc;

const PETSTORE: &str = "
openapi: 3.0.3
components:
  schemas:
    Pet:
      type: object
      properties:
        tag:
          $ref: '#/components/schemas/Tag'
    Tag:
      type: string
    PetAlias:
      $ref: '#/components/schemas/Pet'
  parameters:
    limit:
      name: limit
      in: query
      schema:
        $ref: '#/components/schemas/PetAlias'
";

#[test]
fn resolving_twice_yields_the_same_node() -> Result<(), IndexError> {
    let (index, errors) = test_utils::build_index(PETSTORE);
    assert_eq!(errors, vec![]);

    let first = index.resolve("#/components/schemas/Pet")?;
    let second = index.resolve("#/components/schemas/Pet")?;
    assert_eq!(first, second);

    let unreferenced = index.resolve("#/components/parameters/limit/name")?;
    assert_eq!(index.resolve("#/components/parameters/limit/name")?, unreferenced);
    assert_eq!(index.view(unreferenced).as_str(), Some("limit"));

    Ok(())
}

#[test]
fn aliases_resolve_to_the_final_target() -> Result<(), IndexError> {
    let (index, errors) = test_utils::build_index(PETSTORE);
    assert_eq!(errors, vec![]);

    let pet = index.resolve("#/components/schemas/Pet")?;
    assert_eq!(index.resolve("#/components/schemas/PetAlias")?, pet);

    let entry = index.entry("#/components/schemas/PetAlias").expect("alias entry");
    assert_eq!(entry.target(), pet);
    assert_eq!(entry.pointer(), "api.yaml#/components/schemas/PetAlias");
    assert!(!entry.is_circular());

    Ok(())
}

#[test]
fn reference_sites_are_recorded_in_source_order() {
    let (index, _) = test_utils::build_index(PETSTORE);
    let paths: Vec<_> = index.reference_sites().map(|site| site.path().to_string()).collect();
    assert_eq!(paths, vec![
        "/components/schemas/Pet/properties/tag",
        "/components/schemas/PetAlias",
        "/components/parameters/limit/schema",
    ]);

    let tag = index.entry("#/components/schemas/Tag").expect("tag entry");
    assert_eq!(tag.sites().len(), 1);
    let site = index.reference_at(tag.sites()[0]).expect("site");
    assert_eq!(site.raw(), "#/components/schemas/Tag");
    assert!(!site.is_remote());
}

#[test]
fn each_bad_edge_yields_one_error_without_blocking_others() {
    let (index, errors) = test_utils::build_index("
components:
  schemas:
    Good:
      type: string
    Spaced:
      $ref: '#/components/schemas/Not Good'
    Missing:
      $ref: '#/components/schemas/Nope'
    Elsewhere:
      $ref: 'other.yaml#/components/schemas/Good'
    UsesGood:
      $ref: '#/components/schemas/Good'
");

    assert_eq!(errors.len(), 3, "{errors:#?}");
    assert!(errors.iter().any(|err| matches!(
        err,
        IndexError::Syntax { source: PointerSyntaxError::Whitespace { .. }, site: Some(_), .. },
    )));
    assert!(errors.iter().any(|err| matches!(
        err,
        IndexError::NotFound { missing_segment, site: Some(_), .. } if missing_segment == "Nope",
    )));
    assert!(errors.iter().any(|err| matches!(
        err,
        IndexError::Load { source: LoadError::NoLoader { location }, .. } if location == "other.yaml",
    )));

    assert!(index.entry("#/components/schemas/Good").is_some());
    assert!(index.entry("#/components/schemas/Nope").is_none());
}

#[test]
fn malformed_lookup_pointers_are_errors() {
    let (index, _) = test_utils::build_index(PETSTORE);
    assert!(matches!(
        index.resolve("#components"),
        Err(IndexError::Syntax { source: PointerSyntaxError::RelativeFragment { .. }, .. }),
    ));
    assert!(matches!(
        index.resolve("#/components/schemas/Unknown"),
        Err(IndexError::NotFound { missing_segment, .. }) if missing_segment == "Unknown",
    ));
    assert!(matches!(
        index.resolve("never-loaded.yaml#/a"),
        Err(IndexError::Load { source: LoadError::NotIndexed { .. }, .. }),
    ));
}

#[test]
fn self_referencing_schema_is_circular() {
    let (index, errors) = test_utils::build_index("
components:
  schemas:
    Node:
      type: object
      properties:
        next:
          $ref: '#/components/schemas/Node'
");
    assert_eq!(errors, vec![]);
    assert!(index.is_circular("#/components/schemas/Node"));

    let circular = index.circular_references();
    assert_eq!(circular.len(), 1);
    assert_eq!(circular[0].pointer(), "api.yaml#/components/schemas/Node");
}

#[test]
fn three_schema_cycle_is_detected() {
    let (index, errors) = test_utils::build_index("
components:
  schemas:
    A:
      properties:
        b:
          $ref: '#/components/schemas/B'
    B:
      properties:
        c:
          $ref: '#/components/schemas/C'
    C:
      properties:
        a:
          $ref: '#/components/schemas/A'
");
    assert_eq!(errors, vec![]);
    assert!(!index.circular_references().is_empty());
    for name in ["A", "B", "C"] {
        assert!(index.entry(&format!("#/components/schemas/{name}")).is_some());
    }
}

#[test]
fn circular_alias_chain_terminates() {
    let (index, errors) = test_utils::build_index("
components:
  schemas:
    X:
      $ref: '#/components/schemas/Y'
    Y:
      $ref: '#/components/schemas/X'
");
    assert_eq!(errors, vec![]);
    assert!(index.is_circular("#/components/schemas/X"));
    assert!(index.is_circular("#/components/schemas/Y"));

    let target = index.entry("#/components/schemas/X").expect("entry").target();
    assert!(index.view(target).is_reference());
}

#[test]
fn referenced_document_is_loaded_once() -> Result<(), IndexError> {
    let loader = Arc::new(InMemoryLoader::new().with_document("common.yaml", "
components:
  schemas:
    Pet:
      type: object
    Tag:
      type: string
"));
    let (index, errors) = test_utils::build_index_with_loader("
components:
  schemas:
    LocalPet:
      $ref: 'common.yaml#/components/schemas/Pet'
    AnotherPet:
      $ref: './common.yaml#/components/schemas/Pet'
    LocalTag:
      $ref: 'common.yaml#/components/schemas/Tag'
", Arc::clone(&loader));

    assert_eq!(errors, vec![]);
    assert_eq!(loader.load_count("common.yaml"), 1);
    assert_eq!(loader.total_loads(), 1);
    assert_eq!(index.documents().count(), 2);

    let remote: Vec<_> = index.remote_references().iter().map(|entry| entry.pointer()).collect();
    assert_eq!(remote, vec![
        "common.yaml#/components/schemas/Pet",
        "common.yaml#/components/schemas/Tag",
    ]);
    let pet = index.entry("common.yaml#/components/schemas/Pet").expect("pet entry");
    assert_eq!(pet.sites().len(), 2);

    let common = index.document_id("common.yaml").expect("common.yaml indexed");
    assert_eq!(index.resolve_from(common, "#/components/schemas/Tag")?, index.resolve("common.yaml#/components/schemas/Tag")?);

    Ok(())
}

#[test]
fn remote_references_are_disabled_by_default() {
    let loader = Arc::new(InMemoryLoader::new());
    let (_, errors) = test_utils::build_index_with_loader("
components:
  schemas:
    Pet:
      $ref: 'https://example.com/common.yaml#/components/schemas/Pet'
", Arc::clone(&loader));

    assert_eq!(errors.len(), 1);
    assert!(matches!(
        &errors[0],
        IndexError::Load { source: LoadError::RemoteReferencesDisabled { .. }, .. },
    ));
    assert_eq!(loader.total_loads(), 0);
}

#[test]
fn failed_load_is_reported_per_edge() {
    let loader = Arc::new(InMemoryLoader::new());
    let (_, errors) = test_utils::build_index_with_loader("
components:
  schemas:
    Pet:
      $ref: 'missing.yaml#/components/schemas/Pet'
    Tag:
      $ref: 'missing.yaml#/components/schemas/Tag'
", Arc::clone(&loader));

    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|err| matches!(
        err,
        IndexError::Load { source: LoadError::Unreachable { .. }, .. },
    )));
    assert_eq!(loader.load_count("missing.yaml"), 1);
}
