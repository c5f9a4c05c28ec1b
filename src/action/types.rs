//! Action-type derivation from slice and case names.

/// Converts a case name to SCREAMING_SNAKE_CASE.
///
/// An underscore is inserted wherever an ASCII lowercase letter is followed by
/// an ASCII uppercase letter, then the whole string is upper-cased. Existing
/// `_` and `-` separators are kept and not re-split, so `SeT-NAME` becomes
/// `SE_T-NAME`.
pub fn screaming_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;

    for ch in name.chars() {
        if prev_lower && ch.is_ascii_uppercase() {
            out.push('_');
        }
        prev_lower = ch.is_ascii_lowercase();
        out.extend(ch.to_uppercase());
    }

    out
}

/// Builds the action type for a case of a slice.
///
/// - Empty slice name: `SCREAMING_SNAKE(case)`
/// - Otherwise: `slice/SCREAMING_SNAKE(case)`
pub fn build_type(slice_name: &str, case_name: &str) -> String {
    let case = screaming_snake_case(case_name);
    if slice_name.is_empty() {
        case
    } else {
        format!("{slice_name}/{case}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_is_split() {
        assert_eq!(screaming_snake_case("setName"), "SET_NAME");
        assert_eq!(screaming_snake_case("setFirstName"), "SET_FIRST_NAME");
    }

    #[test]
    fn already_screaming_is_unchanged() {
        assert_eq!(screaming_snake_case("SET_NAME"), "SET_NAME");
    }

    #[test]
    fn mixed_separators_keep_quirk() {
        assert_eq!(screaming_snake_case("SeT-NAME"), "SE_T-NAME");
    }

    #[test]
    fn digits_do_not_split() {
        assert_eq!(screaming_snake_case("item2Count"), "ITEM2COUNT");
    }

    #[test]
    fn empty_input() {
        assert_eq!(screaming_snake_case(""), "");
        assert_eq!(build_type("", ""), "");
    }

    #[test]
    fn namespaced_type() {
        assert_eq!(build_type("", "setName"), "SET_NAME");
        assert_eq!(build_type("test", "SET_NAME"), "test/SET_NAME");
        assert_eq!(build_type("todos", "addTodo"), "todos/ADD_TODO");
    }
}
