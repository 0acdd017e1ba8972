//! In-process dispatch tests over mock properties

use iterbridge::bridge::{Adapter, DispatchError, Dispatcher, Dynamic, Iter, Property, PropertyIterator, NIL_TYPE_NAME};
use iterbridge::config::Variant;
use iterbridge::registry::TypeRegistry;
use iterbridge::GeneratorConfig;
use serde_json::{json, Value};
use std::sync::Arc;
use url::Url;

#[derive(Debug, Clone, PartialEq)]
enum Element {
    Iri(Url),
    Object(Value),
}

#[derive(Debug, Clone, PartialEq)]
struct Cursor {
    elements: Arc<Vec<Element>>,
    index: usize,
}

impl Cursor {
    fn current(&self) -> Option<&Element> {
        self.elements.get(self.index)
    }
}

impl PropertyIterator for Cursor {
    fn has_any(&self) -> bool {
        self.current().is_some()
    }

    fn is_iri(&self) -> bool {
        matches!(self.current(), Some(Element::Iri(_)))
    }

    fn get_iri(&self) -> Option<Url> {
        match self.current() {
            Some(Element::Iri(url)) => Some(url.clone()),
            _ => None,
        }
    }

    fn get_type(&self) -> Option<Value> {
        match self.current() {
            Some(Element::Object(value)) => Some(value.clone()),
            _ => None,
        }
    }

    fn next(&self) -> Self {
        Self {
            elements: Arc::clone(&self.elements),
            index: (self.index + 1).min(self.elements.len()),
        }
    }
}

macro_rules! mock_property {
    ($name:ident, $iterator:literal) => {
        #[derive(Debug)]
        struct $name {
            elements: Arc<Vec<Element>>,
        }

        impl $name {
            fn new(elements: Vec<Element>) -> Self {
                Self {
                    elements: Arc::new(elements),
                }
            }
        }

        impl Property for $name {
            const ITERATOR_TYPE: &'static str = $iterator;
            type Cursor = Cursor;

            fn begin(&self) -> Cursor {
                Cursor {
                    elements: Arc::clone(&self.elements),
                    index: 0,
                }
            }

            fn end(&self) -> Cursor {
                Cursor {
                    elements: Arc::clone(&self.elements),
                    index: self.elements.len(),
                }
            }
        }
    };
}

mock_property!(FooProperty, "FooPropertyIterator");
mock_property!(BarProperty, "BarPropertyIterator");
mock_property!(NameProperty, "NamePropertyIterator");

fn config(check_nil_argument: bool) -> GeneratorConfig {
    let mut config = Variant::Fetch.config().unwrap();
    config.dispatch.check_nil_argument = check_nil_argument;
    config.registry = TypeRegistry::new(
        ["BarPropertyIterator", "FooPropertyIterator"],
        ["NamePropertyIterator"],
    )
    .unwrap();
    config
}

fn dispatcher(check_nil_argument: bool) -> Dispatcher {
    Dispatcher::builder(&config(check_nil_argument))
        .bind::<FooProperty>()
        .bind::<BarProperty>()
        .bind::<NameProperty>()
        .build()
}

fn elements() -> Vec<Element> {
    vec![
        Element::Iri(Url::parse("https://example.com/users/alice").unwrap()),
        Element::Object(json!({"type": "Note", "content": "hello"})),
    ]
}

fn adapter(iter: &dyn Iter) -> &Adapter<FooProperty> {
    iter.as_any().downcast_ref::<Adapter<FooProperty>>().unwrap()
}

#[test]
fn test_supported_value_starts_at_begin() {
    let owner = Arc::new(FooProperty::new(elements()));
    let value = Dynamic::from_arc(Arc::clone(&owner));

    let iter = dispatcher(true).begin(Some(&value)).unwrap();
    let concrete = adapter(iter.as_ref());

    assert!(Arc::ptr_eq(concrete.owner(), &owner));
    assert_eq!(concrete.cursor(), &owner.begin());
    assert!(iter.has_any());
    assert!(iter.is_iri());
    assert_eq!(iter.get_iri().unwrap().as_str(), "https://example.com/users/alice");
    assert_eq!(iter.get_type(), None);
}

#[test]
fn test_next_matches_fresh_dispatch_stepped_once() {
    let owner = Arc::new(FooProperty::new(elements()));
    let value = Dynamic::from_arc(Arc::clone(&owner));
    let dispatcher = dispatcher(true);

    let first = dispatcher.begin(Some(&value)).unwrap();
    let second = first.next();

    let expected = Adapter::new(Arc::clone(&owner), owner.begin().next());
    assert!(second.equals(&expected));
    assert!(!second.equals(first.as_ref()));
    assert_eq!(second.get_type(), Some(json!({"type": "Note", "content": "hello"})));
    assert!(!second.is_iri());
}

#[test]
fn test_end_ignores_position() {
    let owner = Arc::new(FooProperty::new(elements()));
    let value = Dynamic::from_arc(Arc::clone(&owner));
    let dispatcher = dispatcher(true);

    let start = dispatcher.begin(Some(&value)).unwrap();
    let middle = start.next();
    let expected = Adapter::new(Arc::clone(&owner), owner.end());

    assert!(start.end().equals(&expected));
    assert!(middle.end().equals(&expected));
    assert!(middle.next().equals(start.end().as_ref()));
    assert!(!start.end().has_any());
}

#[test]
fn test_walk_until_end() {
    let value = Dynamic::new(BarProperty::new(elements()));
    let mut iter = dispatcher(true).begin(Some(&value)).unwrap();

    let mut visited = 0;
    while !iter.equals(iter.end().as_ref()) {
        assert!(iter.has_any());
        visited += 1;
        iter = iter.next();
    }
    assert_eq!(visited, 2);
}

#[test]
fn test_adapters_of_different_owners_differ() {
    let dispatcher = dispatcher(true);
    let a = dispatcher.begin(Some(&Dynamic::new(FooProperty::new(elements())))).unwrap();
    let b = dispatcher.begin(Some(&Dynamic::new(FooProperty::new(elements())))).unwrap();
    let bar = dispatcher.begin(Some(&Dynamic::new(BarProperty::new(elements())))).unwrap();

    assert!(!a.equals(b.as_ref()));
    assert!(!a.equals(bar.as_ref()));
}

#[test]
fn test_unknown_type_is_unsupported() {
    let err = dispatcher(true).begin(Some(&Dynamic::new(42i64))).unwrap_err();
    assert_eq!(
        err,
        DispatchError::UnsupportedType {
            type_name: "i64".to_string()
        }
    );
    assert_eq!(err.to_string(), "type=i64 not supported");
}

#[test]
fn test_registered_but_unsupported_type_falls_to_default() {
    let value = Dynamic::new(NameProperty::new(elements()));
    let err = dispatcher(true).begin(Some(&value)).unwrap_err();

    match err {
        DispatchError::UnsupportedType { type_name } => {
            assert_eq!(type_name, std::any::type_name::<NameProperty>());
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_nil_argument_with_check() {
    let err = dispatcher(true).begin(None).unwrap_err();
    assert_eq!(err, DispatchError::InvalidArgument);
    assert_eq!(err.to_string(), "nil argument");
}

#[test]
fn test_nil_argument_without_check() {
    let err = dispatcher(false).begin(None).unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("type={} not supported", NIL_TYPE_NAME)
    );
}

#[test]
fn test_cases_follow_registry_order() {
    let dispatcher = dispatcher(true);
    let containers: Vec<&str> = dispatcher.containers().map(|c| c.as_str()).collect();
    assert_eq!(containers, vec!["BarProperty", "FooProperty"]);
    assert_eq!(dispatcher.len(), 2);
}

#[test]
fn test_unbound_entries_have_no_case() {
    let dispatcher = Dispatcher::builder(&config(true)).bind::<FooProperty>().build();
    assert_eq!(dispatcher.len(), 1);

    let err = dispatcher
        .begin(Some(&Dynamic::new(BarProperty::new(elements()))))
        .unwrap_err();
    assert!(matches!(err, DispatchError::UnsupportedType { .. }));
}

#[test]
fn test_empty_registry_rejects_everything() {
    let mut config = config(true);
    config.registry = TypeRegistry::default();
    let dispatcher = Dispatcher::builder(&config).bind::<FooProperty>().build();

    assert!(dispatcher.is_empty());
    assert!(dispatcher
        .begin(Some(&Dynamic::new(FooProperty::new(elements()))))
        .is_err());
}
