use crate::Value;
use crate::index::IndexError;
use crate::low;
use crate::low::BuildError;
use crate::low::Components;
use crate::low::Example;
use crate::low::Parameter;
use crate::low::SecurityScheme;
use crate::node::NodeType;
use crate::tests::test_utils;

type Result<T> = std::result::Result<T, IndexError>;

#[test]
fn fields_without_references_equal_raw_values() -> Result<()> {
    let (index, _) = test_utils::build_index("
components:
  parameters:
    limit:
      name: limit
      in: query
      description: How many items to return
      required: true
      deprecated: false
      style: form
      example: 25
");
    let node = index.resolve("#/components/parameters/limit")?;
    let (parameter, errors) = low::build::<Parameter>(&index, node);

    assert_eq!(errors, vec![]);
    assert_eq!(parameter.name.as_ref().map(|f| f.value().as_str()), Some("limit"));
    assert_eq!(parameter.location.as_ref().map(|f| f.value().as_str()), Some("query"));
    assert_eq!(
        parameter.description.as_ref().map(|f| f.value().as_str()),
        Some("How many items to return"),
    );
    assert_eq!(parameter.required.as_ref().map(|f| *f.value()), Some(true));
    assert_eq!(parameter.deprecated.as_ref().map(|f| *f.value()), Some(false));
    assert_eq!(parameter.style.as_ref().map(|f| f.value().as_str()), Some("form"));
    assert_eq!(parameter.example.as_ref().map(|f| f.value()), Some(&Value::Int(25)));
    assert!(parameter.explode.is_none());
    assert!(parameter.schema.is_none());

    let name = parameter.name.as_ref().expect("name");
    assert_eq!(name.reference(), None);
    assert_eq!(index.view(name.value_node()).as_str(), Some("limit"));
    assert_eq!(index.view(name.key_node()).as_str(), Some("name"));
    assert!(name.value_position().line() > 0);

    Ok(())
}

#[test]
fn quoted_values_are_kept_as_strings() -> Result<()> {
    let (index, _) = test_utils::build_index("
components:
  parameters:
    agent:
      name: agent
      in: query
      example: \"007\"
      x-version: \"1.0\"
      x-flag: 'true'
");
    let node = index.resolve("#/components/parameters/agent")?;
    let (parameter, errors) = low::build::<Parameter>(&index, node);

    assert_eq!(errors, vec![]);
    assert_eq!(
        parameter.example.as_ref().map(|f| f.value()),
        Some(&Value::String("007".to_string())),
    );
    assert_eq!(
        parameter.extensions.find("x-version").map(|v| v.value()),
        Some(&Value::String("1.0".to_string())),
    );
    assert_eq!(
        parameter.extensions.find("x-flag").map(|v| v.value()),
        Some(&Value::String("true".to_string())),
    );

    Ok(())
}

#[test]
fn undeclared_keys_become_extensions_in_source_order() -> Result<()> {
    let (index, _) = test_utils::build_index("
components:
  examples:
    cat:
      summary: A cat
      x-rating: 5
      description: Fluffy
      x-tags:
        - pet
        - indoor
      value:
        name: Tom
");
    let node = index.resolve("#/components/examples/cat")?;
    let (example, errors) = low::build::<Example>(&index, node);

    assert_eq!(errors, vec![]);
    assert_eq!(example.extensions.names(), vec!["x-rating", "x-tags"]);
    assert_eq!(
        example.extensions.find("x-rating").map(|value| value.value()),
        Some(&Value::Int(5)),
    );
    assert_eq!(
        example.extensions.find("x-tags").map(|value| value.value()),
        Some(&Value::List(vec![Value::from("pet"), Value::from("indoor")])),
    );
    assert_eq!(example.summary.as_ref().map(|f| f.value().as_str()), Some("A cat"));

    let value = example.value.as_ref().expect("value").value();
    assert_eq!(
        value.as_object().and_then(|object| object.get("name")),
        Some(&Value::from("Tom")),
    );

    Ok(())
}

#[test]
fn non_prefixed_unknown_keys_are_extensions_too() -> Result<()> {
    let (index, _) = test_utils::build_index("
scheme:
  type: http
  scheme: bearer
  vendorHint: opaque
");
    let node = index.resolve("#/scheme")?;
    let (scheme, _) = low::build::<SecurityScheme>(&index, node);

    assert_eq!(scheme.extensions.names(), vec!["vendorHint"]);
    assert_eq!(scheme.scheme_type.as_ref().map(|f| f.value().as_str()), Some("http"));

    Ok(())
}

#[test]
fn referenced_fields_record_canonical_pointer() -> Result<()> {
    let (index, errors) = test_utils::build_index("
components:
  examples:
    shared:
      summary: Shared example
  parameters:
    limit:
      name: limit
      in: query
      examples:
        first:
          $ref: '#/components/examples/shared'
        inline:
          summary: Inline example
");
    assert_eq!(errors, vec![]);

    let node = index.resolve("#/components/parameters/limit")?;
    let (parameter, errors) = low::build::<Parameter>(&index, node);
    assert_eq!(errors, vec![]);

    let examples = parameter.examples.as_ref().expect("examples").value();
    let first = examples.get("first").expect("first");
    assert_eq!(first.reference(), Some("api.yaml#/components/examples/shared"));
    assert_eq!(first.value_node(), index.resolve("#/components/examples/shared")?);
    assert_eq!(
        first.value().summary.as_ref().map(|f| f.value().as_str()),
        Some("Shared example"),
    );

    let inline = examples.get("inline").expect("inline");
    assert!(!inline.is_reference());

    let names: Vec<_> = examples.keys().map(|key| key.as_str()).collect();
    assert_eq!(names, vec!["first", "inline"]);

    Ok(())
}

#[test]
fn malformed_fields_do_not_block_siblings() -> Result<()> {
    let (index, _) = test_utils::build_index("
components:
  parameters:
    limit:
      name: limit
      in: query
      required: maybe
      examples:
        - one
        - two
      description: Still decoded
");
    let node = index.resolve("#/components/parameters/limit")?;
    let (parameter, errors) = low::build::<Parameter>(&index, node);

    assert_eq!(errors.len(), 2, "{errors:#?}");
    assert!(matches!(
        &errors[1],
        BuildError::Scalar { field, raw, .. } if field == "required" && raw == "maybe",
    ));
    assert!(matches!(
        &errors[0],
        BuildError::Structural {
            field,
            expected: NodeType::Mapping,
            found: NodeType::Sequence,
            ..
        } if field == "examples",
    ));
    assert_eq!(parameter.errors(), errors.as_slice());

    assert!(parameter.required.is_none());
    assert!(parameter.examples.is_none());
    assert_eq!(parameter.name.as_ref().map(|f| f.value().as_str()), Some("limit"));
    assert_eq!(
        parameter.description.as_ref().map(|f| f.value().as_str()),
        Some("Still decoded"),
    );

    Ok(())
}

#[test]
fn nested_errors_attach_to_every_enclosing_object() -> Result<()> {
    let (index, _) = test_utils::build_index("
components:
  parameters:
    good:
      name: good
      in: query
    bad:
      name: bad
      in: query
      content: 5
  securitySchemes:
    oauth:
      type: oauth2
      flows: nope
");
    let node = index.resolve("#/components")?;
    let (components, errors) = low::build::<Components>(&index, node);

    assert_eq!(errors.len(), 2, "{errors:#?}");
    assert_eq!(components.errors(), errors.as_slice());

    let good = components.find_parameter("good").expect("good");
    assert!(good.errors().is_empty());
    let bad = components.find_parameter("bad").expect("bad");
    assert_eq!(bad.errors().len(), 1);
    assert!(matches!(
        &bad.errors()[0],
        BuildError::Structural { field, .. } if field == "parameters.bad.content",
    ));

    let oauth = components.find_security_scheme("oauth").expect("oauth");
    assert!(oauth.flows.is_none());
    assert_eq!(oauth.errors().len(), 1);

    Ok(())
}

#[test]
fn unresolved_field_reference_is_a_build_error() -> Result<()> {
    let (index, index_errors) = test_utils::build_index("
components:
  parameters:
    limit:
      name: limit
      examples:
        broken:
          $ref: '#/components/examples/missing'
");
    assert_eq!(index_errors.len(), 1);

    let node = index.resolve("#/components/parameters/limit")?;
    let (parameter, errors) = low::build::<Parameter>(&index, node);

    assert_eq!(errors.len(), 1);
    assert!(matches!(
        &errors[0],
        BuildError::UnresolvedReference { pointer, .. } if pointer == "#/components/examples/missing",
    ));
    let examples = parameter.examples.as_ref().expect("examples").value();
    assert!(examples.is_empty());

    Ok(())
}

#[test]
fn building_a_reference_node_builds_its_target() -> Result<()> {
    let (index, _) = test_utils::build_index("
components:
  parameters:
    limit:
      name: limit
      in: query
    alias:
      $ref: '#/components/parameters/limit'
");
    let alias = index.resolve("#/components/parameters/alias")?;
    let node = index.view(index.resolve("#/components/parameters")?)
        .get("alias")
        .expect("alias node")
        .node_ref();
    assert_ne!(alias, node);

    let (parameter, errors) = low::build::<Parameter>(&index, node);
    assert_eq!(errors, vec![]);
    assert_eq!(parameter.node(), alias);
    assert_eq!(parameter.name.as_ref().map(|f| f.value().as_str()), Some("limit"));

    Ok(())
}

#[test]
fn non_mapping_object_is_structural_error() -> Result<()> {
    let (index, _) = test_utils::build_index("
components:
  parameters:
    limit: just a string
");
    let node = index.resolve("#/components/parameters/limit")?;
    let (parameter, errors) = low::build::<Parameter>(&index, node);

    assert_eq!(errors.len(), 1);
    assert!(matches!(
        &errors[0],
        BuildError::Structural { field, expected: NodeType::Mapping, found: NodeType::Scalar, .. }
            if field == "Parameter",
    ));
    assert!(parameter.name.is_none());
    assert!(parameter.extensions.is_empty());

    Ok(())
}

#[test]
fn oauth_flows_decode_scopes_in_order() -> Result<()> {
    let (index, _) = test_utils::build_index("
components:
  securitySchemes:
    petstore_auth:
      type: oauth2
      flows:
        implicit:
          authorizationUrl: https://example.com/oauth/dialog
          scopes:
            write:pets: modify pets in your account
            read:pets: read your pets
");
    let node = index.resolve("#/components/securitySchemes/petstore_auth")?;
    let (scheme, errors) = low::build::<SecurityScheme>(&index, node);
    assert_eq!(errors, vec![]);

    let flows = scheme.flows.as_ref().expect("flows").value();
    let implicit = flows.implicit.as_ref().expect("implicit").value();
    assert_eq!(
        implicit.authorization_url.as_ref().map(|f| f.value().as_str()),
        Some("https://example.com/oauth/dialog"),
    );
    let scopes: Vec<_> = implicit.scopes
        .as_ref()
        .expect("scopes")
        .value()
        .keys()
        .map(|key| key.as_str())
        .collect();
    assert_eq!(scopes, vec!["write:pets", "read:pets"]);
    assert_eq!(implicit.find_scope("read:pets"), Some("read your pets"));
    assert!(flows.password.is_none());

    Ok(())
}
