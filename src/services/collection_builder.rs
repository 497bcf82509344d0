//! Collection builder - instantiates the template once per domain and category.

use serde_json::Value;
use tracing::debug;

use crate::domain::template::pointer;
use crate::domain::{
    AppError, Category, CategoryBodies, CollectionTemplate, GeneratedCollection, HostCollections,
    RequestBody, TargetDomain,
};

/// Builds collections from a validated template.
///
/// Every generated item starts from a fresh deep copy of the prototype, and every
/// collection from a fresh deep copy of the base document, so nothing patched for
/// one domain or category is visible to another.
#[derive(Debug, Clone, Copy)]
pub struct CollectionBuilder<'a> {
    template: &'a CollectionTemplate,
}

impl<'a> CollectionBuilder<'a> {
    pub fn new(template: &'a CollectionTemplate) -> Self {
        Self { template }
    }

    /// Build both category collections for every domain, in input order.
    pub fn build(
        &self,
        domains: &[TargetDomain],
        bodies: &CategoryBodies,
    ) -> Result<Vec<HostCollections>, AppError> {
        domains
            .iter()
            .map(|domain| -> Result<HostCollections, AppError> {
                debug!(protocol = %domain.protocol, host = %domain.host, "building collections");
                let collections = Category::ALL
                    .into_iter()
                    .map(|category| -> Result<GeneratedCollection, AppError> {
                        let document =
                            self.build_category_collection(domain, category, bodies.get(category))?;
                        Ok(GeneratedCollection { category, document })
                    })
                    .collect::<Result<Vec<_>, AppError>>()?;
                Ok(HostCollections { host: domain.host.clone(), collections })
            })
            .collect()
    }

    /// Build the collection for one domain and category.
    pub fn build_category_collection(
        &self,
        domain: &TargetDomain,
        category: Category,
        bodies: &[RequestBody],
    ) -> Result<Value, AppError> {
        let mut collection = self.template.base().clone();

        let info = collection
            .get_mut("info")
            .and_then(Value::as_object_mut)
            .ok_or_else(|| AppError::template("missing 'info' object"))?;
        info.insert(
            "name".to_string(),
            Value::String(format!("{} - {}", domain.host, category.label())),
        );

        let raw_url = self.template.url_tail().with_origin(&domain.protocol, &domain.host);
        let items = bodies
            .iter()
            .enumerate()
            .map(|(index, body)| {
                let name = format!("{} {}", category.item_prefix(), index + 1);
                self.instantiate_item(&name, domain, &raw_url, body)
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        collection
            .get_mut("item")
            .and_then(Value::as_array_mut)
            .ok_or_else(|| AppError::template("missing 'item' list"))?
            .extend(items);

        Ok(collection)
    }

    fn instantiate_item(
        &self,
        name: &str,
        domain: &TargetDomain,
        raw_url: &str,
        body: &RequestBody,
    ) -> Result<Value, AppError> {
        debug!(item = name, source = %body.source.display(), "instantiating request");
        let mut item = self.template.prototype().clone();

        set(&mut item, "/name", Value::String(name.to_string()))?;
        set(&mut item, pointer::URL_RAW, Value::String(raw_url.to_string()))?;
        set(&mut item, pointer::URL_PROTOCOL, Value::String(domain.protocol.clone()))?;
        set(&mut item, &format!("{}/0", pointer::URL_HOST), Value::String(domain.host.clone()))?;
        set(&mut item, &format!("{}/raw", pointer::BODY), Value::String(body.raw.clone()))?;

        Ok(item)
    }
}

/// Set the value at a JSON pointer, creating the last key on an existing object.
fn set(target: &mut Value, path: &str, value: Value) -> Result<(), AppError> {
    let (parent, key) = path
        .rsplit_once('/')
        .ok_or_else(|| AppError::template(format!("invalid pointer '{}'", path)))?;

    let parent_value = if parent.is_empty() { Some(target) } else { target.pointer_mut(parent) };

    match parent_value {
        Some(Value::Object(map)) => {
            map.insert(key.to_string(), value);
            Ok(())
        }
        Some(Value::Array(list)) => {
            let slot = match key.parse::<usize>() {
                Ok(index) => list.get_mut(index),
                Err(_) => None,
            };
            match slot {
                Some(slot) => {
                    *slot = value;
                    Ok(())
                }
                None => {
                    Err(AppError::template(format!("prototype has no element at '{}'", path)))
                }
            }
        }
        _ => Err(AppError::template(format!("prototype has no container at '{}'", parent))),
    }
}
