use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use acf_connector_types::{
    CmsHelpers, ContentKindRegistry, Entity, EntityId, EntityLoader, EntityNamespace, FieldDefinition, FieldGroup,
    FieldGroupStore, FieldKind, LoaderResult, StoredValueSource, ValueFilter,
};
use acf_engine::{resolve_field, resolve_union_member, ResolverContext};
use acf_registry::{Discriminator, MetaField, ReferenceResolver, Registry, Resolver, UnionType};
use indexmap::IndexMap;
use parser_acf::{extend_block_type_fields, Context, LeafTypes, ParserConfig};
use serde_json::{json, Value};

#[derive(Default)]
struct TestLoader {
    kinds: HashMap<String, String>,
    kind_calls: AtomicUsize,
    load_calls: AtomicUsize,
}

impl TestLoader {
    fn with_entities(entities: &[(&str, &str)]) -> TestLoader {
        TestLoader {
            kinds: entities
                .iter()
                .map(|(id, kind)| (id.to_string(), kind.to_string()))
                .collect(),
            ..TestLoader::default()
        }
    }
}

#[async_trait::async_trait]
impl EntityLoader for TestLoader {
    async fn entity_kind(&self, _namespace: EntityNamespace, id: &EntityId) -> Option<String> {
        self.kind_calls.fetch_add(1, Ordering::SeqCst);
        self.kinds.get(id.as_str()).cloned()
    }

    async fn load_entity(&self, _namespace: EntityNamespace, id: &EntityId) -> LoaderResult<Option<Entity>> {
        self.load_calls.fetch_add(1, Ordering::SeqCst);

        Ok(self.kinds.get(id.as_str()).map(|kind| Entity {
            id: id.clone(),
            kind: kind.clone(),
            data: json!({ "databaseId": id.as_str() }),
        }))
    }
}

struct TestKinds;

impl ContentKindRegistry for TestKinds {
    fn allowed_post_types(&self) -> Vec<String> {
        vec!["post".to_string(), "page".to_string()]
    }

    fn allowed_taxonomies(&self) -> Vec<String> {
        vec!["category".to_string()]
    }

    fn post_type_name(&self, post_type: &str) -> Option<String> {
        match post_type {
            "post" => Some("Post".to_string()),
            "page" => Some("Page".to_string()),
            _ => None,
        }
    }

    fn taxonomy_type_name(&self, taxonomy: &str) -> Option<String> {
        (taxonomy == "category").then(|| "Category".to_string())
    }
}

struct TestHelpers;

#[async_trait::async_trait]
impl CmsHelpers for TestHelpers {
    async fn permalink(&self, id: &EntityId) -> Option<String> {
        Some(format!("https://example.com/?p={id}"))
    }

    async fn oembed_html(&self, url: &str, width: Option<u64>, _height: Option<u64>) -> Option<String> {
        Some(format!("<iframe src=\"{url}\" width=\"{}\"></iframe>", width.unwrap_or(640)))
    }
}

// Stored values live directly in the block's raw attribute payload, keyed by
// field key.
struct AttributeValues;

impl StoredValueSource for AttributeValues {
    fn field_value(&self, _object_id: &str, attributes: &Value, key: &str) -> Option<Value> {
        attributes.get(key).cloned()
    }
}

struct UppercaseHeadline;

impl ValueFilter for UppercaseHeadline {
    fn filter(&self, value: Option<Value>, field: &FieldDefinition, _type_name: &str) -> Option<Value> {
        if field.name != "headline" {
            return value;
        }

        value.map(|value| match value {
            Value::String(headline) => Value::String(headline.to_uppercase()),
            other => other,
        })
    }
}

static KINDS: TestKinds = TestKinds;
static HELPERS: TestHelpers = TestHelpers;
static VALUES: AttributeValues = AttributeValues;
static FILTER: UppercaseHeadline = UppercaseHeadline;

fn test_context<'a>(registry: &'a Registry, loader: &'a TestLoader) -> ResolverContext<'a> {
    ResolverContext {
        registry,
        loader,
        kinds: &KINDS,
        helpers: &HELPERS,
        values: &VALUES,
        value_filter: None,
        debug: true,
    }
}

fn reference_field(name: &str, ty: &str, multiple: bool) -> MetaField {
    MetaField::new(name, ty).with_resolver(ReferenceResolver {
        namespace: EntityNamespace::Post,
        multiple,
        field_key: format!("field_{name}"),
    })
}

#[tokio::test]
async fn missing_stored_value_short_circuits() {
    let registry = Registry::new();
    let loader = TestLoader::default();
    let ctx = test_context(&registry, &loader);

    let field = reference_field("cta", "Page", false);

    let resolved = resolve_field(&ctx, &field, &json!({ "cta": "" }), &Value::Null).await;

    assert_eq!(resolved, Value::Null);
    assert_eq!(loader.kind_calls.load(Ordering::SeqCst), 0);
    assert_eq!(loader.load_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn single_value_unwraps_a_legacy_array() {
    let registry = Registry::new();
    let loader = TestLoader::with_entities(&[("7", "page"), ("9", "page")]);
    let ctx = test_context(&registry, &loader);

    let field = reference_field("cta", "Page", false);

    let resolved = resolve_field(&ctx, &field, &json!({ "cta": [7, 9] }), &Value::Null).await;

    assert_eq!(resolved, json!({ "databaseId": "7", "__typename": "page" }));
    assert_eq!(loader.load_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn unexposed_content_kind_resolves_to_null() {
    let registry = Registry::new();
    let loader = TestLoader::with_entities(&[("3", "secret")]);
    let ctx = test_context(&registry, &loader);

    let field = reference_field("cta", "Page", false);

    let resolved = resolve_field(&ctx, &field, &json!({ "cta": 3 }), &Value::Null).await;

    assert_eq!(resolved, Value::Null);
    assert_eq!(loader.kind_calls.load(Ordering::SeqCst), 1);
    assert_eq!(loader.load_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn multiple_references_resolve_in_stored_order() {
    let registry = Registry::new();
    let loader = TestLoader::with_entities(&[("1", "post"), ("2", "page")]);
    let ctx = test_context(&registry, &loader);

    let field = reference_field("related", "[AcfPostFieldsRelated]", true);

    let resolved = resolve_field(&ctx, &field, &json!({ "related": [1, 2] }), &Value::Null).await;

    assert_eq!(
        resolved,
        json!([
            { "databaseId": "1", "__typename": "post" },
            { "databaseId": "2", "__typename": "page" },
        ])
    );
}

#[test]
fn union_member_selection() {
    let layouts = UnionType::new(
        "AcfPageFieldsContent",
        ["AcfPageFieldsQuote".to_string(), "AcfPageFieldsPullQuote".to_string()],
        Discriminator::LayoutTag(IndexMap::from([
            ("quote".to_string(), "AcfPageFieldsQuote".to_string()),
            ("pull_quote".to_string(), "AcfPageFieldsPullQuote".to_string()),
        ])),
    );

    assert_eq!(
        resolve_union_member(&layouts, &json!({ "acf_fc_layout": "pull_quote" })),
        Some("AcfPageFieldsPullQuote")
    );
    assert_eq!(resolve_union_member(&layouts, &json!({ "acf_fc_layout": "missing" })), None);

    let entities = UnionType::new(
        "AcfPostFieldsRelated",
        ["Post".to_string(), "Page".to_string()],
        Discriminator::EntityKind(IndexMap::from([
            ("post".to_string(), "Post".to_string()),
            ("page".to_string(), "Page".to_string()),
        ])),
    );

    assert_eq!(
        resolve_union_member(&entities, &json!({ "__typename": "page" })),
        Some("Page")
    );
}

#[tokio::test]
async fn page_link_resolves_permalinks() {
    let registry = Registry::new();
    let loader = TestLoader::default();
    let ctx = test_context(&registry, &loader);

    let field = MetaField::new("more", "[String!]").with_resolver(Resolver::Permalink { multiple: true });

    let resolved = resolve_field(&ctx, &field, &json!({ "more": [4, 5] }), &Value::Null).await;

    assert_eq!(resolved, json!(["https://example.com/?p=4", "https://example.com/?p=5"]));
}

#[tokio::test]
async fn oembed_passes_dimension_args() {
    let registry = Registry::new();
    let loader = TestLoader::default();
    let ctx = test_context(&registry, &loader);

    let field = MetaField::new("video", "String").with_resolver(Resolver::Oembed);

    let resolved = resolve_field(
        &ctx,
        &field,
        &json!({ "video": "https://example.com/watch/1" }),
        &json!({ "width": 800 }),
    )
    .await;

    assert_eq!(
        resolved,
        json!("<iframe src=\"https://example.com/watch/1\" width=\"800\"></iframe>")
    );
}

struct HeroStore;

impl FieldGroupStore for HeroStore {
    fn field_groups_for_block(&self, block_kind: &str) -> Vec<FieldGroup> {
        if block_kind == "acf/hero" {
            vec![FieldGroup {
                id: "group_hero".to_string(),
                title: "Hero".to_string(),
            }]
        } else {
            Vec::new()
        }
    }

    fn fields(&self, group_id: &str) -> Vec<FieldDefinition> {
        if group_id != "group_hero" {
            return Vec::new();
        }

        vec![
            FieldDefinition {
                key: "field_headline".to_string(),
                name: "headline".to_string(),
                kind: FieldKind::Text,
            },
            FieldDefinition {
                key: "field_cta".to_string(),
                name: "cta".to_string(),
                kind: FieldKind::PostObject {
                    post_types: vec!["page".to_string()],
                    multiple: false,
                },
            },
        ]
    }
}

fn build_hero_schema(registry: &mut Registry, leaf_types: &mut LeafTypes) -> IndexMap<String, MetaField> {
    let config = ParserConfig::default();
    let mut ctx = Context::new(registry, leaf_types, &KINDS, &config);

    let mut block_fields = IndexMap::new();
    extend_block_type_fields(&mut ctx, &HeroStore, "acf/hero", &mut block_fields);

    block_fields
}

#[tokio::test]
async fn block_values_assemble_end_to_end() {
    let mut registry = Registry::new();
    let mut leaf_types = LeafTypes::new();
    let block_fields = build_hero_schema(&mut registry, &mut leaf_types);

    let loader = TestLoader::with_entities(&[("7", "page")]);
    let ctx = test_context(&registry, &loader);

    let block = json!({
        "attributes": {
            "id": "block_1",
            "data": {
                "field_headline": "Welcome",
                "field_cta": "7"
            }
        }
    });

    let acf = resolve_field(&ctx, &block_fields["acf"], &block, &Value::Null).await;
    assert_eq!(acf, json!({ "headline": "Welcome", "cta": "7" }));

    // No loads yet: assembly only reads stored values.
    assert_eq!(loader.load_calls.load(Ordering::SeqCst), 0);

    let hero_fields = registry.lookup_type("AcfHeroFields").unwrap().fields().unwrap();
    let cta = resolve_field(&ctx, &hero_fields["cta"], &acf, &Value::Null).await;

    assert_eq!(cta, json!({ "databaseId": "7", "__typename": "page" }));
    assert_eq!(loader.load_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn block_assembly_applies_the_value_filter() {
    let mut registry = Registry::new();
    let mut leaf_types = LeafTypes::new();
    let block_fields = build_hero_schema(&mut registry, &mut leaf_types);

    let loader = TestLoader::default();
    let mut ctx = test_context(&registry, &loader);
    ctx.value_filter = Some(&FILTER);

    let block = json!({
        "attributes": {
            "id": "block_1",
            "data": {
                "field_headline": "Welcome"
            }
        }
    });

    let acf = resolve_field(&ctx, &block_fields["acf"], &block, &Value::Null).await;

    assert_eq!(acf, json!({ "headline": "WELCOME", "cta": Value::Null }));
}
