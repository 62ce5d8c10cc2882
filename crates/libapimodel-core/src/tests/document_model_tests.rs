use crate::DocumentModel;
use crate::DocumentModelError;
use crate::index::IndexConfig;
use crate::index::IndexError;
use crate::low::BuildError;
use crate::tests::test_utils;
use crate::tests::test_utils::InMemoryLoader;
use std::sync::Arc;

#[test]
fn model_collects_index_and_build_errors_separately() -> Result<(), DocumentModelError> {
    let document = test_utils::parse_document("api.yaml", "
openapi: 3.1.0
components:
  parameters:
    limit:
      name: limit
      required: sometimes
  schemas:
    Pet:
      $ref: '#/components/schemas/Nope'
");
    let model = DocumentModel::from_documents(vec![document], IndexConfig::default())?;

    assert_eq!(model.index_errors().len(), 1);
    assert!(matches!(&model.index_errors()[0], IndexError::NotFound { .. }));
    assert_eq!(model.errors().len(), 1);
    assert!(matches!(&model.errors()[0], BuildError::Scalar { .. }));
    assert_eq!(model.low().version(), Some("3.1.0"));

    Ok(())
}

#[test]
fn model_without_documents_is_an_error() {
    let result = DocumentModel::from_documents(vec![], IndexConfig::default());
    assert_eq!(result.err(), Some(DocumentModelError::NoRootDocument));
}

#[test]
fn walk_visits_every_schema_and_stops_at_cycles() -> Result<(), DocumentModelError> {
    let loader = Arc::new(InMemoryLoader::new().with_document("common.yaml", "
components:
  schemas:
    Tag:
      type: string
"));
    let document = test_utils::parse_document("api.yaml", "
components:
  schemas:
    Pet:
      type: object
      properties:
        tags:
          type: array
          items:
            $ref: 'common.yaml#/components/schemas/Tag'
        parent:
          $ref: '#/components/schemas/Pet'
    Broken:
      minLength: huge
");
    let model = DocumentModel::from_documents(
        vec![document],
        IndexConfig::new().with_loader(loader),
    )?;
    assert_eq!(model.index_errors(), &[] as &[IndexError]);

    let mut visited = vec![];
    model.walk_schemas(|visit| {
        let state = match visit.schema {
            Ok(schema) if schema.is_circular() => "circular",
            Ok(_) => "ok",
            Err(_) => "error",
        };
        visited.push((visit.path.to_string(), state));
    });

    assert_eq!(visited, vec![
        ("Pet".to_string(), "ok"),
        ("Pet.properties.tags".to_string(), "ok"),
        ("Pet.properties.tags.items".to_string(), "ok"),
        ("Pet.properties.parent".to_string(), "circular"),
        ("Broken".to_string(), "error"),
    ]);

    Ok(())
}

#[test]
fn high_model_is_derived_from_the_low_root() -> Result<(), DocumentModelError> {
    let document = test_utils::parse_document("api.yaml", "
openapi: 3.0.0
components:
  schemas:
    Pet:
      type: object
");
    let model = DocumentModel::from_documents(vec![document], IndexConfig::default())?;
    let high = model.high();

    assert_eq!(high.openapi(), Some("3.0.0"));
    let pet = &high.components().expect("components").schemas()["Pet"];
    assert_eq!(pet.schema().map(|schema| schema.types().to_vec()), Ok(vec!["object".to_string()]));

    Ok(())
}
