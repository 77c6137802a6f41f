// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

#[cfg(test)]
use pretty_assertions::assert_eq;
use hocon_render::{contract, error::Error, options::RenderOptions};

fn all_combinations() -> Vec<RenderOptions> {
    (0..32_u8)
        .map(|bits| {
            RenderOptions::concise()
                .set_origin_comments(bits & 1 != 0)
                .set_comments(bits & 2 != 0)
                .set_formatted(bits & 4 != 0)
                .set_json(bits & 8 != 0)
                .set_compact_keys(bits & 16 != 0)
        })
        .collect()
}

#[test]
fn test_decision_table_over_all_combinations() {
    let combinations = all_combinations();
    assert_eq!(combinations.len(), 32);
    for options in combinations {
        let comments = options.comments();
        let origin_comments = options.origin_comments();
        let json = options.json();
        assert_eq!(
            contract::emits_comments(&options),
            comments || origin_comments,
            "{options}"
        );
        assert_eq!(
            contract::guarantees_json(&options),
            json && !comments && !origin_comments,
            "{options}"
        );
        assert_eq!(
            contract::compacts_keys(&options),
            options.compact_keys() && !json,
            "{options}"
        );
        assert_eq!(contract::root_braces(&options), json, "{options}");
        assert_eq!(
            contract::require_json(&options).is_ok(),
            contract::guarantees_json(&options),
            "{options}"
        );
    }
}

#[test]
fn test_defaults_do_not_guarantee_json() {
    let options = RenderOptions::defaults();
    assert!(options.json());
    assert!(contract::emits_comments(&options));
    assert!(!contract::guarantees_json(&options));
}

#[test]
fn test_concise_guarantees_json() {
    let options = RenderOptions::concise();
    assert!(!contract::emits_comments(&options));
    assert!(contract::guarantees_json(&options));
    assert!(contract::require_json(&options).is_ok());
}

#[test]
fn test_any_comment_flag_breaks_json() {
    let base = RenderOptions::concise();
    for options in [
        base.set_comments(true),
        base.set_origin_comments(true),
        base.set_comments(true).set_origin_comments(true),
    ] {
        assert!(contract::emits_comments(&options));
        assert!(!contract::guarantees_json(&options));
    }
}

#[test]
fn test_formatting_and_compact_keys_keep_json_guarantee() {
    let options = RenderOptions::concise()
        .set_formatted(true)
        .set_compact_keys(true);
    assert!(contract::guarantees_json(&options));
    assert!(!contract::compacts_keys(&options));
}

#[test]
fn test_compacts_keys_only_without_json() {
    let options = RenderOptions::concise().set_compact_keys(true);
    assert!(!contract::compacts_keys(&options));
    assert!(contract::compacts_keys(&options.set_json(false)));
    assert!(!contract::compacts_keys(
        &options.set_json(false).set_compact_keys(false)
    ));
}

#[test]
fn test_require_json_reports_comments() {
    let options = RenderOptions::defaults();
    match contract::require_json(&options) {
        Err(Error::CommentsBreakJson {
            comments,
            origin_comments,
        }) => {
            assert!(comments);
            assert!(origin_comments);
        }
        other => panic!("Expected CommentsBreakJson, got {other:?}"),
    }

    let options = RenderOptions::concise().set_origin_comments(true);
    match contract::require_json(&options) {
        Err(Error::CommentsBreakJson {
            comments,
            origin_comments,
        }) => {
            assert!(!comments);
            assert!(origin_comments);
        }
        other => panic!("Expected CommentsBreakJson, got {other:?}"),
    }
}

#[test]
fn test_require_json_reports_hocon() {
    let options = RenderOptions::concise().set_json(false);
    assert!(matches!(
        contract::require_json(&options),
        Err(Error::NotJson)
    ));
}

#[test]
fn test_require_json_does_not_touch_options() {
    let options = RenderOptions::defaults();
    let _ = contract::require_json(&options);
    assert_eq!(options, RenderOptions::defaults());
}

#[test]
fn test_key_separators() {
    let concise = RenderOptions::concise();
    let formatted = concise.set_formatted(true);
    assert_eq!(contract::key_separator(&concise, false), ":");
    assert_eq!(contract::key_separator(&concise, true), ":");
    assert_eq!(contract::key_separator(&formatted, false), " : ");
    assert_eq!(contract::key_separator(&formatted, true), " : ");
    assert_eq!(contract::key_separator(&concise.set_json(false), false), "=");
    assert_eq!(contract::key_separator(&concise.set_json(false), true), "");
    assert_eq!(contract::key_separator(&formatted.set_json(false), false), "=");
    assert_eq!(contract::key_separator(&formatted.set_json(false), true), " ");
}

#[test]
fn test_root_braces_follow_json() {
    assert!(contract::root_braces(&RenderOptions::concise()));
    assert!(!contract::root_braces(&RenderOptions::concise().set_json(false)));
}
