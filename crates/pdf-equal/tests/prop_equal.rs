//! Property tests over generated object trees.

use pdf_equal::{equal_objects, EqualError};
use pdf_object::{Object, ObjectId, Stream, XRefTable};
use proptest::prelude::*;

fn leaf() -> impl Strategy<Value = Object> {
    prop_oneof![
        any::<bool>().prop_map(Object::Boolean),
        any::<i64>().prop_map(Object::Integer),
        (-1.0e6..1.0e6f64).prop_map(Object::Float),
        "[A-Za-z]{1,8}".prop_map(Object::Name),
        prop::collection::vec(any::<u8>(), 0..8).prop_map(Object::StringLiteral),
        "[0-9A-F]{0,8}".prop_map(Object::HexLiteral),
    ]
}

// Keys start with `K` so none of them is a font name key.
fn object() -> impl Strategy<Value = Object> {
    leaf().prop_recursive(4, 48, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Object::Array),
            prop::collection::vec(("K[a-z]{0,3}", inner.clone()), 0..4)
                .prop_map(|entries| Object::Dictionary(entries.into_iter().collect())),
            (
                prop::collection::vec(("K[a-z]{0,3}", inner), 0..3),
                prop::collection::vec(any::<u8>(), 0..16),
            )
                .prop_map(|(entries, raw)| {
                    Object::Stream(Stream::new(entries.into_iter().collect(), raw))
                }),
        ]
    })
}

/// Moves every value of the tree into `table`, replacing it by a reference.
fn indirect(object: &Object, table: &mut XRefTable, next: &mut u32) -> Object {
    let direct = match object {
        Object::Array(items) => {
            Object::Array(items.iter().map(|o| indirect(o, table, next)).collect())
        }
        Object::Dictionary(dict) => Object::Dictionary(
            dict.iter()
                .map(|(k, v)| (k.clone(), indirect(v, table, next)))
                .collect(),
        ),
        Object::Stream(stream) => Object::Stream(Stream {
            dict: stream
                .dict
                .iter()
                .map(|(k, v)| (k.clone(), indirect(v, table, next)))
                .collect(),
            raw: stream.raw.clone(),
        }),
        other => other.clone(),
    };
    *next += 1;
    let id = ObjectId::new(*next, 0);
    table.insert(id, direct);
    Object::Reference(id)
}

fn reversed(object: &Object) -> Object {
    match object {
        Object::Array(items) => Object::Array(items.iter().map(reversed).collect()),
        Object::Dictionary(dict) => Object::Dictionary(
            dict.iter()
                .rev()
                .map(|(k, v)| (k.clone(), reversed(v)))
                .collect(),
        ),
        other => other.clone(),
    }
}

proptest! {
    #[test]
    fn reflexive(v in object()) {
        let table = XRefTable::new();
        prop_assert_eq!(equal_objects(&v, &v, &table), Ok(true));
        prop_assert_eq!(equal_objects(&v, &v.clone(), &table), Ok(true));
    }

    #[test]
    fn symmetric(a in object(), b in object()) {
        let table = XRefTable::new();
        let ab: Result<bool, EqualError> = equal_objects(&a, &b, &table);
        let ba = equal_objects(&b, &a, &table);
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn references_are_transparent(v in object()) {
        let mut table = XRefTable::new();
        let mut next = 0;
        let r = indirect(&v, &mut table, &mut next);
        prop_assert_eq!(equal_objects(&v, &r, &table), Ok(true));
        prop_assert_eq!(equal_objects(&r, &v, &table), Ok(true));
    }

    #[test]
    fn dictionary_order_is_irrelevant(v in object()) {
        let table = XRefTable::new();
        prop_assert_eq!(equal_objects(&v, &reversed(&v), &table), Ok(true));
    }
}
