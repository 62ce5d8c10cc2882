use crate::Value;
use crate::high::HighModel;
use crate::high::SchemaProxy;
use crate::low;
use indexmap::IndexMap;
use std::sync::Arc;

type LowField<T> = Option<low::NodeReference<T>>;
type LowMap<T> = IndexMap<low::KeyReference<String>, low::ValueReference<T>>;

pub(super) fn value<T: Clone>(field: &LowField<T>) -> Option<T> {
    field.as_ref().map(|field| field.value().clone())
}

pub(super) fn list<T: Clone>(field: &LowField<Vec<low::ValueReference<T>>>) -> Vec<T> {
    field.as_ref()
        .map(|field| field.value().iter().map(|item| item.value().clone()).collect())
        .unwrap_or_default()
}

pub(super) fn map<T: Clone>(field: &LowField<LowMap<T>>) -> IndexMap<String, T> {
    field.as_ref()
        .map(|field| {
            field.value()
                .iter()
                .map(|(key, value)| (key.value().clone(), value.value().clone()))
                .collect()
        })
        .unwrap_or_default()
}

pub(super) fn object<H: HighModel>(field: &LowField<Arc<H::Low>>) -> Option<H> {
    field.as_ref().map(|field| H::from_low(Arc::clone(field.value())))
}

pub(super) fn object_map<H: HighModel>(
    field: &LowField<LowMap<Arc<H::Low>>>,
) -> IndexMap<String, H> {
    field.as_ref()
        .map(|field| {
            field.value()
                .iter()
                .map(|(key, value)| (
                    key.value().clone(),
                    H::from_low(Arc::clone(value.value())),
                ))
                .collect()
        })
        .unwrap_or_default()
}

pub(super) fn schema(field: &LowField<Arc<low::SchemaProxy>>) -> Option<SchemaProxy> {
    field.as_ref().map(|field| SchemaProxy::new(Arc::clone(field.value())))
}

pub(super) fn schema_list(
    field: &LowField<Vec<low::ValueReference<Arc<low::SchemaProxy>>>>,
) -> Vec<SchemaProxy> {
    field.as_ref()
        .map(|field| {
            field.value()
                .iter()
                .map(|item| SchemaProxy::new(Arc::clone(item.value())))
                .collect()
        })
        .unwrap_or_default()
}

pub(super) fn schema_map(
    field: &LowField<LowMap<Arc<low::SchemaProxy>>>,
) -> IndexMap<String, SchemaProxy> {
    field.as_ref()
        .map(|field| {
            field.value()
                .iter()
                .map(|(key, value)| (
                    key.value().clone(),
                    SchemaProxy::new(Arc::clone(value.value())),
                ))
                .collect()
        })
        .unwrap_or_default()
}

pub(super) fn extensions(extensions: &low::Extensions) -> IndexMap<String, Value> {
    extensions.to_values()
}
