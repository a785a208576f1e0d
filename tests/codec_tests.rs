//! Integration tests for the public codec surface.

use std::thread;

use manticore_types::{CodecError, ColumnCodec, DocId, Multi32, Multi64, Scalar, ToQueryFragment};

fn bytes(s: &str) -> Scalar {
    Scalar::Bytes(s.as_bytes().to_vec())
}

#[test]
fn empty_list_renders_unit_parens() {
    assert_eq!(Multi32::new().to_query_fragment().sql, "()");
    assert_eq!(Multi64::new().to_scalar(), bytes("()"));
}

#[test]
fn list_literals_render_without_whitespace() {
    assert_eq!(Multi32::from(vec![1, 2, 3]).to_query_fragment().sql, "(1,2,3)");
    assert_eq!(Multi32::from(vec![-5]).to_query_fragment().sql, "(-5)");
    assert_eq!(
        Multi64::from(vec![i64::MIN, i64::MAX]).to_query_fragment().sql,
        "(-9223372036854775808,9223372036854775807)"
    );
}

#[test]
fn query_fragments_carry_no_bound_params() {
    assert!(Multi32::from(vec![1]).to_query_fragment().params.is_empty());
    assert!(Multi64::new().to_query_fragment().params.is_empty());
}

#[test]
fn storage_roundtrip_both_widths() {
    let narrow = Multi32::from(vec![i32::MIN, -1, 0, 1, i32::MAX]);
    assert_eq!(Multi32::from_scalar(&narrow.to_scalar()).unwrap(), narrow);

    let wide = Multi64::from(vec![i64::MIN, -1, 0, 1, i64::MAX]);
    assert_eq!(Multi64::from_scalar(&wide.to_scalar()).unwrap(), wide);

    assert_eq!(
        Multi32::from_scalar(&Multi32::new().to_scalar()).unwrap(),
        Multi32::new()
    );
}

#[test]
fn null_and_empty_cells_are_the_empty_list() {
    assert!(Multi32::from_scalar(&Scalar::Null).unwrap().is_empty());
    assert!(Multi64::from_scalar(&Scalar::Null).unwrap().is_empty());
    assert!(Multi32::from_scalar(&bytes("")).unwrap().is_empty());
}

#[test]
fn decode_tolerates_embedded_whitespace() {
    let list = Multi32::from_scalar(&bytes("1, 2,3")).unwrap();
    assert_eq!(list, Multi32::from(vec![1, 2, 3]));
}

#[test]
fn decode_failure_names_offending_segment() {
    let err = Multi64::from_scalar(&bytes("1,x,3")).unwrap_err();
    match err {
        CodecError::InvalidElement { segment, .. } => assert_eq!(segment, "x"),
        other => panic!("expected InvalidElement, got {other:?}"),
    }
}

#[test]
fn decode_rejects_non_byte_cells() {
    let err = Multi32::from_scalar(&Scalar::Double(1.5)).unwrap_err();
    assert!(matches!(
        err,
        CodecError::TypeMismatch {
            expected: "bytes",
            actual: "double",
        }
    ));
}

#[test]
fn doc_id_roundtrips_through_signed_wire() {
    for raw in [0, 1, 7, (1 << 63) - 1, 1 << 63, u64::MAX] {
        let id = DocId::new(raw);
        let decoded = DocId::from_scalar(&Scalar::Int(id.as_signed())).unwrap();
        assert_eq!(decoded, id, "identifier {raw} corrupted by signed wire");
    }
}

#[test]
fn largest_doc_id_is_not_minus_one() {
    let id = DocId::from_scalar(&Scalar::Int(-1)).unwrap();
    assert_eq!(id.as_u64(), 18_446_744_073_709_551_615);
}

#[test]
fn doc_id_rejects_unsupported_cells() {
    let err = DocId::from_scalar(&bytes("42")).unwrap_err();
    assert!(matches!(err, CodecError::TypeMismatch { actual: "bytes", .. }));

    let err = DocId::from_scalar(&Scalar::Double(42.0)).unwrap_err();
    assert!(matches!(err, CodecError::TypeMismatch { actual: "double", .. }));
}

#[test]
fn column_types_are_distinct_and_stable() {
    let names = [
        Multi32::column_type(),
        Multi64::column_type(),
        DocId::column_type(),
    ];
    assert_eq!(names, ["multi", "multi64", "docId"]);
}

#[test]
fn concurrent_calls_match_sequential_results() {
    let handles: Vec<_> = (0..8)
        .map(|t| {
            thread::spawn(move || {
                for i in 0..1_000i64 {
                    let list = Multi64::from(vec![t, i, t * i]);
                    let decoded = Multi64::from_scalar(&list.to_scalar()).unwrap();
                    assert_eq!(decoded, list);

                    let id = DocId::new((i as u64) << t);
                    let decoded = DocId::from_scalar(&Scalar::Int(id.as_signed())).unwrap();
                    assert_eq!(decoded, id);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
