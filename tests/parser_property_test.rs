//! Property tests: the parser is total, deterministic, and produces tokens
//! that survive a render/re-parse round trip.

use proptest::prelude::*;
use watchlist::adapters::plain_output::PlainOutputAdapter;
use watchlist::domain::watchlist::parse;
use watchlist::ports::output_port::OutputPort;

proptest! {
    #[test]
    fn parse_never_panics(input in ".*") {
        let _ = parse(&input);
    }

    #[test]
    fn parse_is_deterministic(input in ".*") {
        prop_assert_eq!(parse(&input), parse(&input));
    }

    #[test]
    fn tokens_are_trimmed_uppercase_and_comment_free(input in ".*") {
        for entry in parse(&input).entries {
            prop_assert!(!entry.symbol.is_empty());
            prop_assert!(!entry.symbol.contains('#'));
            prop_assert!(!entry.symbol.contains('|'));
            prop_assert_eq!(entry.symbol.trim(), entry.symbol.as_str());
            prop_assert_eq!(entry.symbol.to_uppercase(), entry.symbol.clone());
        }
    }

    #[test]
    fn blank_and_comment_lines_contribute_nothing(
        pad in "[ \t]*",
        comment in "#[^\n\r]*",
    ) {
        let input = format!("{pad}\n{pad}{comment}\n");
        prop_assert!(parse(&input).is_empty());
    }

    #[test]
    fn plain_render_reparses_to_the_same_symbols(input in ".*") {
        let list = parse(&input);
        let mut buf = Vec::new();
        PlainOutputAdapter::new(false).write(&list, &mut buf).unwrap();
        let rendered = String::from_utf8(buf).unwrap();
        prop_assert_eq!(parse(&rendered).symbols(), list.symbols());
    }

    #[test]
    fn simple_symbol_lines_round_trip(symbols in prop::collection::vec("[A-Z]{1,5}", 0..20)) {
        let input = symbols.join("\n");
        prop_assert_eq!(parse(&input).symbols(), symbols);
    }
}
