use crate::fixed_generator;
use std::collections::HashSet;
use test_log::test;
use testgen::PatternError;

fn check_pattern(pattern: &str, allowed: &str) {
    let gen = fixed_generator();
    let allowed = allowed.chars().collect::<HashSet<_>>();
    for _ in 0..100 {
        let result = gen.pattern(pattern);
        for c in result.chars() {
            assert!(allowed.contains(&c), "{:?} from {:?} yields {:?}", result, pattern, c);
        }
    }
}

#[test]
fn classes() {
    check_pattern("^^", "^");
    check_pattern("^0^0^0^0^0", "0123456789");
    check_pattern("^1^1^1^1^1", "123456789");
    check_pattern("^o^o^o^o^o", "01234567");
    check_pattern("^h^h^h^h^h", "0123456789abcdef");
    check_pattern("^H^H^H^H^H", "0123456789ABCDEF");
    check_pattern("^a^a^a^a^a", "abcdefghijklmnopqrstuvwxyz");
    check_pattern("^A^A^A^A^A", "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    check_pattern("^c^c^c^c^c", "bcdfghjklmnpqrstvwxyz");
    check_pattern("^C^C^C^C^C", "BCDFGHJKLMNPQRSTVWXYZ");
    check_pattern("^v^v^v^v^v", "aeiou");
    check_pattern("^V^V^V^V^V", "AEIOU");
    check_pattern("^z^z^z^z^z", "abcdefghijklmnopqrstuvwxyz0123456789");
    check_pattern("^Z^Z^Z^Z^Z", "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789");
    check_pattern("^1^0.^0^0^0,^0^0 €", "0123456789 .,€");
}

#[test]
fn literal_escape() {
    let gen = fixed_generator();
    assert_eq!(gen.pattern("^^"), "^");
    assert_eq!(gen.pattern("a^^b^^^^"), "a^b^^");
    assert_eq!(gen.pattern(""), "");
    assert_eq!(gen.pattern("plain text"), "plain text");
}

#[test]
fn three_digits() {
    let gen = fixed_generator();
    for _ in 0..1000 {
        let digits = gen.pattern("^0^0^0");
        assert_eq!(digits.len(), 3);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }
}

#[test]
fn shape_is_preserved() {
    crate::check_shape(r"^[1-9][0-9]\.[0-9]{3},[0-9]{2} €$", 1000, {
        let gen = fixed_generator();
        move || gen.pattern("^1^0.^0^0^0,^0^0 €")
    });
    crate::check_shape(r"^[0-9A-F]{8}-[0-9a-f]{4}$", 1000, {
        let gen = fixed_generator();
        move || gen.pattern("^H^H^H^H^H^H^H^H-^h^h^h^h")
    });
}

#[test]
fn malformed_templates() {
    let gen = fixed_generator();
    assert_eq!(
        gen.try_pattern("id-^x"),
        Err(PatternError::UnknownClass { tag: 'x', position: 3 })
    );
    assert_eq!(gen.try_pattern("^0^"), Err(PatternError::DanglingEscape { position: 2 }));
    assert_eq!(
        PatternError::UnknownClass { tag: 'x', position: 3 }.to_string(),
        "unknown pattern class 'x' at offset 3"
    );
}

#[test]
fn malformed_template_consumes_nothing() {
    let gen = fixed_generator();
    assert!(gen.try_pattern("^0^0^q").is_err());
    assert_eq!(gen.int(0, 1_000_000), fixed_generator().int(0, 1_000_000));
}

#[test]
#[should_panic(expected = "unknown pattern class")]
fn unknown_class_panics() {
    fixed_generator().pattern("^!");
}
