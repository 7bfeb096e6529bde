//! End-to-end text pipeline tests.
//!
//! These run the scenarios a host engine hits when a set column is written
//! as text and read back: canonicalization on input, stable rendering on
//! output, and the grammar rejections in between.

use intset_tests::prelude::*;

mod canonicalization {
    use super::*;

    #[test]
    fn test_duplicate_heavy_input_canonicalizes() {
        let set = parse_in("{1,2,2,3}").unwrap();
        assert_eq!(render_out(&set), "{1, 2, 3}");
    }

    #[test]
    fn test_insertion_order_is_observable_in_text() {
        let a = parse_in("{1, 2}").unwrap();
        let b = parse_in("{2, 1}").unwrap();
        assert!(equal(&a, &b));
        assert_ne!(a, b);
        assert_eq!(render_out(&a), "{1, 2}");
        assert_eq!(render_out(&b), "{2, 1}");
    }

    #[test]
    fn test_empty_forms_render_bare() {
        assert_eq!(render_out(&parse_in("{}").unwrap()), "{}");
        assert_eq!(render_out(&parse_in("{ }").unwrap()), "{}");
        assert_eq!(render_out(&parse_in("  { }  ").unwrap()), "{}");
    }

    #[test]
    fn test_input_spacing_never_survives_rendering() {
        let set = parse_in("{ 42,-7 ,  0 }").unwrap();
        assert_eq!(render_out(&set), "{42, -7, 0}");
    }
}

mod round_trip {
    use super::*;

    #[test]
    fn test_rendered_text_reparses_to_the_same_value() {
        for text in ["{}", "{5}", "{-1, 0, 1}", "{2147483647, -2147483648}"] {
            let set = parse_in(text).unwrap();
            let round = parse_in(&render_out(&set)).unwrap();
            assert_eq!(round, set, "input: {text}");
        }
    }

    #[test]
    fn test_rendering_is_stable_across_round_trips() {
        let once = render_out(&parse_in("{ 3 , 3, 1 }").unwrap());
        let twice = render_out(&parse_in(&once).unwrap());
        assert_eq!(once, twice);
        assert_eq!(once, "{3, 1}");
    }
}

mod rejection {
    use super::*;

    #[test]
    fn test_grammar_rejections_report_invalid_syntax() {
        let rejected = [
            "1,2,3",
            "{1, 2 3}",
            "{1 2}",
            "1,2}{3",
            "{1,2",
            "{a}",
            "{1;2}",
            "{1.5}",
            "{{1}}",
        ];
        for text in rejected {
            let err = parse_in(text).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidSyntax, "input: {text}");
        }
    }

    #[test]
    fn test_out_of_range_literals_report_their_token() {
        let err = parse_in("{2147483648}").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NumberOutOfRange);
        assert!(err.to_string().contains("2147483648"));
    }

    #[test]
    fn test_validator_agrees_with_parser_on_rejection() {
        for text in ["{1 2}", "{1, 2 3}", "1,2,3", "{+3}"] {
            assert!(!validate(text), "input: {text}");
            assert!(parse(text).is_err(), "input: {text}");
        }
    }
}

mod capacity {
    use super::*;

    #[test]
    fn test_capacity_exceeded_through_text() {
        let body: Vec<String> = (0..=MAX_CAPACITY as i32).map(|v| v.to_string()).collect();
        let text = format!("{{{}}}", body.join(", "));
        let err = parse_in(&text).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CapacityExceeded);
    }

    #[test]
    fn test_duplicates_do_not_count_against_capacity() {
        let body: Vec<String> = (0..MAX_CAPACITY as i32)
            .chain(0..MAX_CAPACITY as i32)
            .map(|v| v.to_string())
            .collect();
        let text = format!("{{{}}}", body.join(","));
        let set = parse_in(&text).unwrap();
        assert_eq!(set.cardinality(), MAX_CAPACITY);
    }
}
