//! Property tests for evaluation

use lambent_eval::{Evaluator, print};
use lambent_foundation::{Form, print_raw_form};
use lambent_language::read;
use proptest::prelude::*;

fn literal() -> impl Strategy<Value = Form> {
    prop_oneof![
        (-1.0e9f64..1.0e9).prop_map(Form::number),
        any::<i32>().prop_map(|n| Form::number(f64::from(n))),
        "[a-zA-Z0-9 _\\-\"\\\\\n\t]{0,16}".prop_map(Form::string),
        any::<bool>().prop_map(Form::boolean),
    ]
}

proptest! {
    /// A literal printed as source, read, and evaluated prints the same.
    #[test]
    fn literals_evaluate_to_themselves(form in literal()) {
        let source = print_raw_form(&form);
        let forms = read(&source).unwrap();
        let value = Evaluator::new().evaluate(&forms, None).unwrap().value.unwrap();
        prop_assert_eq!(print(&value), source);
    }

    /// Quoted lists of symbols print back in bracket form.
    #[test]
    fn quoted_symbol_lists(names in prop::collection::vec("[a-z][a-z0-9\\-]{0,6}", 0..6)) {
        prop_assume!(!matches!(names.first().map(String::as_str), Some("quote" | "unquote")));
        let source = format!("'({})", names.join(" "));
        let forms = read(&source).unwrap();
        let value = Evaluator::new().evaluate(&forms, None).unwrap().value.unwrap();
        prop_assert_eq!(print(&value), format!("[{}]", names.join(" ")));
    }
}
