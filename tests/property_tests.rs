//! Property-based tests for interpolation and trace serialization

use context_logger::format::interpolate;
use context_logger::prelude::*;
use proptest::prelude::*;
use serde_json::json;

fn arb_field_value() -> impl Strategy<Value = FieldValue> {
    prop_oneof![
        any::<i64>().prop_map(FieldValue::Int),
        any::<bool>().prop_map(FieldValue::Bool),
        "[a-zA-Z0-9 %sdj]{0,20}".prop_map(FieldValue::String),
        Just(FieldValue::Null),
    ]
}

proptest! {
    /// Interpolation never panics, whatever the template and arguments.
    #[test]
    fn interpolation_never_panics(
        template in ".{0,80}",
        args in prop::collection::vec(arb_field_value(), 0..6),
    ) {
        let _ = interpolate(&template, &args);
    }

    /// No argument is ever dropped: each one is either consumed by a
    /// placeholder or returned as an extra.
    #[test]
    fn arguments_consumed_or_returned(
        template in "[a-z %sdj]{0,40}",
        args in prop::collection::vec(arb_field_value(), 0..6),
    ) {
        let placeholders = template
            .as_bytes()
            .windows(2)
            .filter(|w| w[0] == b'%' && matches!(w[1], b's' | b'd' | b'j'))
            .count();
        let (_, rest) = interpolate(&template, &args);
        prop_assert!(rest.len() >= args.len().saturating_sub(placeholders));
        prop_assert!(rest.len() <= args.len());
    }

    /// A template without percent signs always round-trips unchanged.
    #[test]
    fn plain_template_unchanged(
        template in "[a-zA-Z0-9 .,:-]{0,60}",
        args in prop::collection::vec(arb_field_value(), 0..4),
    ) {
        let (out, rest) = interpolate(&template, &args);
        prop_assert_eq!(out, template);
        prop_assert_eq!(rest.len(), args.len());
    }

    /// Structured trace serialization is deterministic and multi-line for
    /// non-empty maps.
    #[test]
    fn trace_serialization_deterministic(
        keys in prop::collection::btree_set("[a-z]{1,8}", 1..6),
    ) {
        let trace = Trace::structured(
            keys.iter().map(|k| (k.clone(), json!(k.len()))),
        );
        let first = trace.render();
        let second = trace.render();
        prop_assert_eq!(&first, &second);
        prop_assert!(first.contains('\n'));
    }

    /// Every rendered line carries the non-empty context label.
    #[test]
    fn rendered_line_carries_context(
        message in "[a-zA-Z0-9 ]{0,40}",
    ) {
        let sink = MemorySink::new();
        let logger = ContextLogger::builder("PropModule")
            .sink(Severity::Debug, sink.clone())
            .build()
            .expect("valid context label");
        logger.log(message.as_str(), vec![]);

        let records = sink.records();
        prop_assert_eq!(records.len(), 1);
        prop_assert_eq!(records[0].meta.context.as_str(), "PropModule");
        prop_assert!(records[0].line.contains("(PropModule): "));
    }
}
