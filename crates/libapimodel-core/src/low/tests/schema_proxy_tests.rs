use crate::index::DocumentIndex;
use crate::low;
use crate::low::BuildError;
use crate::low::Components;
use crate::low::SchemaProxy;
use crate::low::SchemaTypes;
use crate::tests::test_utils;
use rayon::prelude::*;
use std::sync::Arc;
use std::sync::atomic::Ordering;

fn components(index: &Arc<DocumentIndex>) -> Components {
    let node = index.resolve("#/components").expect("components");
    let (components, _) = low::build::<Components>(index, node);
    components
}

fn schema_proxy(components: &Components, name: &str) -> Arc<SchemaProxy> {
    Arc::clone(components.find_schema(name).expect("schema"))
}

#[test]
fn building_components_does_not_materialize_schemas() {
    let (index, _) = test_utils::build_index("
components:
  schemas:
    Pet:
      type: object
      properties:
        name:
          type: string
");
    let components = components(&index);
    let pet = schema_proxy(&components, "Pet");

    assert!(!pet.is_built());
    assert_eq!(pet.build_count.load(Ordering::SeqCst), 0);

    let schema = pet.schema().expect("pet schema");
    assert!(pet.is_built());
    assert_eq!(
        schema.schema_type.as_ref().map(|f| f.value().clone()),
        Some(SchemaTypes(vec!["object".to_string()])),
    );

    let name = schema.property("name").expect("name property");
    assert!(!name.is_built());
    assert!(!name.is_reference());
    assert_eq!(
        name.schema().expect("name schema").schema_type.as_ref().map(|f| f.value().names().to_vec()),
        Some(vec!["string".to_string()]),
    );
}

#[test]
fn concurrent_materialization_builds_once() {
    let (index, _) = test_utils::build_index("
components:
  schemas:
    Pet:
      type: object
      required:
        - name
      properties:
        name:
          type: string
        tag:
          type: string
");
    let components = components(&index);
    let pet = schema_proxy(&components, "Pet");

    let schemas: Vec<_> = (0..64)
        .into_par_iter()
        .map(|_| pet.schema().expect("pet schema"))
        .collect();

    assert_eq!(pet.build_count.load(Ordering::SeqCst), 1);
    assert!(schemas.iter().all(|schema| Arc::ptr_eq(schema, &schemas[0])));
}

#[test]
fn self_reference_materializes_to_circular_stub() {
    let (index, _) = test_utils::build_index("
components:
  schemas:
    Node:
      type: object
      properties:
        value:
          type: integer
        next:
          $ref: '#/components/schemas/Node'
");
    let components = components(&index);
    let node = schema_proxy(&components, "Node").schema().expect("node schema");
    assert!(!node.is_circular());

    let next = node.property("next").expect("next");
    assert!(next.is_reference());
    assert!(next.is_circular());
    assert_eq!(next.reference(), Some("api.yaml#/components/schemas/Node"));

    let stub = next.schema().expect("stub");
    assert!(stub.is_circular());
    assert!(stub.properties.is_none());
    assert!(stub.schema_type.is_none());
    assert_eq!(Some(stub.node()), next.target());
}

#[test]
fn three_schema_cycle_terminates_in_a_stub() {
    let (index, _) = test_utils::build_index("
components:
  schemas:
    A:
      properties:
        next:
          $ref: '#/components/schemas/B'
    B:
      properties:
        next:
          $ref: '#/components/schemas/C'
    C:
      properties:
        next:
          $ref: '#/components/schemas/A'
");
    let components = components(&index);

    for start in ["A", "B", "C"] {
        let mut schema = schema_proxy(&components, start).schema().expect("start schema");
        let mut hops = 0;
        while !schema.is_circular() {
            let next = Arc::clone(schema.property("next").expect("next"));
            schema = next.schema().expect("next schema");
            hops += 1;
            assert!(hops <= 3, "cycle starting at {start} did not terminate");
        }
    }
}

#[test]
fn failed_build_is_cached() {
    let (index, _) = test_utils::build_index("
components:
  schemas:
    Broken:
      type: object
      properties: not-a-mapping
      minLength: long
");
    let components = components(&index);
    let broken = schema_proxy(&components, "Broken");

    let first = broken.schema();
    let second = broken.schema();

    match &first {
        Err(BuildError::Schema { errors, .. }) => assert_eq!(errors.len(), 2),
        other => panic!("expected a schema build error, got {other:?}"),
    }
    assert_eq!(first, second);
    assert_eq!(broken.build_count.load(Ordering::SeqCst), 1);
}

#[test]
fn unresolved_schema_reference_fails_on_access() {
    let (index, index_errors) = test_utils::build_index("
components:
  parameters:
    limit:
      name: limit
      schema:
        $ref: '#/components/schemas/Missing'
");
    assert_eq!(index_errors.len(), 1);

    let node = index.resolve("#/components/parameters/limit").expect("limit");
    let (parameter, errors) = low::build::<low::Parameter>(&index, node);
    assert_eq!(errors, vec![]);

    let schema = parameter.schema.as_ref().expect("schema").value();
    assert!(schema.is_reference());
    assert_eq!(schema.target(), None);
    assert!(matches!(
        schema.schema(),
        Err(BuildError::UnresolvedReference { pointer, .. }) if pointer == "#/components/schemas/Missing",
    ));
}

#[test]
fn additional_properties_accepts_bool_or_schema() {
    let (index, _) = test_utils::build_index("
components:
  schemas:
    Closed:
      type: object
      additionalProperties: false
    Map:
      type: object
      additionalProperties:
        type: integer
");
    let components = components(&index);

    let closed = schema_proxy(&components, "Closed").schema().expect("closed");
    assert!(matches!(
        closed.additional_properties.as_ref().map(|f| f.value()),
        Some(low::SchemaOrBool::Bool(false)),
    ));

    let map = schema_proxy(&components, "Map").schema().expect("map");
    let Some(low::SchemaOrBool::Schema(values)) = map.additional_properties.as_ref().map(|f| f.value()) else {
        panic!("expected a schema for additionalProperties");
    };
    assert!(values.schema().expect("values").schema_type.is_some());
    assert_eq!(map.nested().len(), 1);
}
