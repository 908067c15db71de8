//! Placeholder substitution for node messages.
//!
//! Templates carry `{name}` tokens. Both entry points walk the template once,
//! left to right, so text inserted for one placeholder is never scanned again.
//! A captured value such as `"{x}"` therefore lands in the output verbatim.

use crate::flow::CaptureSlots;
use ahash::{AHashMap, AHashSet};
use itertools::Itertools;

/// Replaces every `{name}` whose `name` is one of the slot *values* with `captured`.
///
/// Slot keys are ignored. Placeholders that are not listed are left untouched,
/// and an empty `slots` map returns the template unchanged.
pub fn substitute(template: &str, slots: &CaptureSlots, captured: &str) -> String {
    if slots.is_empty() {
        return template.to_string();
    }
    let names: AHashSet<&str> = slots.values().map(String::as_str).collect();
    render(template, names.into_iter().map(|name| (name, captured)))
}

/// Replaces every `{name}` that has an entry in `bindings` with its bound value.
pub fn substitute_bindings(template: &str, bindings: &AHashMap<String, String>) -> String {
    if bindings.is_empty() {
        return template.to_string();
    }
    render(
        template,
        bindings
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str())),
    )
}

/// Names may themselves contain braces, so each `{` is matched against the
/// known names directly instead of against the next `}`. Longer names win.
fn render<'a>(template: &str, placeholders: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    let placeholders: Vec<(&str, &str)> = placeholders
        .sorted_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)))
        .collect();

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let matched = placeholders.iter().find_map(|&(name, value)| {
            after
                .strip_prefix(name)
                .and_then(|tail| tail.strip_prefix('}'))
                .map(|tail| (value, tail))
        });
        match matched {
            Some((value, tail)) => {
                out.push_str(value);
                rest = tail;
            }
            None => {
                // Not a known placeholder. Keep the brace and rescan from the next character.
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots(pairs: &[(&str, &str)]) -> CaptureSlots {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn replaces_every_occurrence_of_listed_names() {
        let slots = slots(&[("a", "name"), ("b", "nick")]);
        let out = substitute("{name}, or {nick}? {name}!", &slots, "bob");
        assert_eq!(out, "bob, or bob? bob!");
    }

    #[test]
    fn leaves_unlisted_placeholders_verbatim() {
        let slots = slots(&[("a", "name")]);
        let out = substitute("Hello {name}, your order {order} is ready", &slots, "ana");
        assert_eq!(out, "Hello ana, your order {order} is ready");
    }

    #[test]
    fn empty_slots_is_a_no_op() {
        let template = "Hello {name}";
        assert_eq!(substitute(template, &CaptureSlots::new(), "x"), template);
    }

    #[test]
    fn captured_braces_are_not_rescanned() {
        let slots = slots(&[("a", "x"), ("b", "y")]);
        let out = substitute("[{x}] [{y}]", &slots, "{y}");
        assert_eq!(out, "[{y}] [{y}]");
    }

    #[test]
    fn nested_and_unbalanced_braces() {
        let slots = slots(&[("a", "x")]);
        assert_eq!(substitute("{{x}}", &slots, "v"), "{v}");
        assert_eq!(substitute("{x", &slots, "v"), "{x");
        assert_eq!(substitute("x}", &slots, "v"), "x}");
        assert_eq!(substitute("{}", &slots, "v"), "{}");
    }

    #[test]
    fn names_may_contain_closing_braces() {
        let slots = slots(&[("k", "a}b")]);
        assert_eq!(substitute("x {a}b} y", &slots, "V"), "x V y");
    }

    #[test]
    fn longest_overlapping_name_wins() {
        let slots = slots(&[("short", "a"), ("long", "a}b")]);
        assert_eq!(substitute("{a}b} {a}", &slots, "V"), "V V");

        let bindings: AHashMap<String, String> = [("a", "1"), ("a}b", "2")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(substitute_bindings("{a}b}|{a}|{a}c}", &bindings), "2|1|1c}");
    }

    #[test]
    fn keys_do_not_act_as_placeholders() {
        let slots = slots(&[("key", "name")]);
        assert_eq!(substitute("{key} {name}", &slots, "z"), "{key} z");
    }

    #[test]
    fn handles_multibyte_text() {
        let slots = slots(&[("a", "nome")]);
        let out = substitute("Olá, {nome}! Tudo bem? ção", &slots, "joão");
        assert_eq!(out, "Olá, joão! Tudo bem? ção");
    }

    #[test]
    fn bindings_use_their_own_values() {
        let bindings: AHashMap<String, String> = [("name", "bob"), ("city", "lisboa")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let out = substitute_bindings("{name} from {city} ({zip})", &bindings);
        assert_eq!(out, "bob from lisboa ({zip})");
    }
}
