use kube_version_gate::{
    Feature, endpoint_slice_v1_promoted, endpoint_slice_v1beta1_promoted, evaluate,
    gates::{KUBE_V1170_BETA2, KUBE_V1210_BETA1, KUBE_V1240_ALPHA4},
    sa_token_auto_generated,
};
use proptest::prelude::*;

/// Scenario tables for each feature question. Each row is
/// (reported version, expected answer).
fn assert_cases(
    question: fn(&str) -> Result<bool, kube_version_gate::VersionParseError>,
    cases: &[(&str, bool)],
) {
    for (version, want) in cases {
        assert_eq!(
            question(version),
            Ok(*want),
            "kubeServerVersion {} expected {}",
            version,
            want
        );
    }
}

#[test]
fn test_sa_token_auto_generated() {
    let threshold = KUBE_V1240_ALPHA4.to_string();
    assert_cases(
        sa_token_auto_generated,
        &[
            // no auto-generation of secret-based service account token
            (threshold.as_str(), false),
            ("v1.24.0", false),
            ("v1.24.1", false),
            ("v1.24.0+k3s1", false),
            ("v1.24.0-rc2+k3s1", false),
            ("v1.24.0-alpha.5", false),
            ("v1.24.0-beta.2", false),
            ("v1.24.0-rc.0", false),
            ("v1.25.0", false),
            // auto-generation of legacy secret-based service account token
            ("v1.24.0-alpha.3", true),
            ("v1.24.0-alpha.2+k3s1", true),
            ("v1.23.1", true),
            ("v1.23.1-alpha.0", true),
            ("v1.23.5-rc.1", true),
            ("v1.23.6+k3s1", true),
            ("v1.22.10", true),
        ],
    );
}

#[test]
fn test_endpoint_slice_v1beta1_promoted() {
    let threshold = KUBE_V1170_BETA2.to_string();
    assert_cases(
        endpoint_slice_v1beta1_promoted,
        &[
            (threshold.as_str(), true),
            ("v1.17.0", true),
            ("v1.17.1", true),
            ("v1.17.0+k3s1", true),
            ("v1.17.0-rc1+k3s1", true),
            ("v1.17.0-beta.3", true),
            ("v1.17.0-rc.0", true),
            ("v1.18.0", true),
            ("v1.17.0-beta.1", false),
            ("v1.17.0-alpha.2+k3s1", false),
            ("v1.16.1", false),
            ("v1.16.1-alpha.0", false),
            ("v1.16.5-rc.1", false),
            ("v1.16.6+k3s1", false),
            ("v1.16.10", false),
        ],
    );
}

#[test]
fn test_endpoint_slice_v1_promoted() {
    let threshold = KUBE_V1210_BETA1.to_string();
    assert_cases(
        endpoint_slice_v1_promoted,
        &[
            (threshold.as_str(), true),
            ("v1.25.0", true),
            ("v1.22.1", true),
            ("v1.22.0-alpha.4", true),
            ("v1.21.1", true),
            ("v1.21.0", true),
            ("v1.21.0+k3s1", true),
            ("v1.21.0-rc1+k3s1", true),
            ("v1.21.0-rc.0", true),
            ("v1.21.0-beta.0", false),
            ("v1.17.0-alpha.2+k3s1", false),
            ("v1.20.10", false),
            ("v1.21.0-alpha.0", false),
            ("v1.16.5-rc.1", false),
            ("v1.16.6+k3s1", false),
            ("v1.16.10", false),
        ],
    );
}

#[test]
fn test_bad_versions() {
    for question in [
        sa_token_auto_generated,
        endpoint_slice_v1beta1_promoted,
        endpoint_slice_v1_promoted,
    ] {
        let err = question("unknown").unwrap_err();
        assert_eq!(err.to_string(), "could not parse \"unknown\" as version");
        assert_eq!(err.input(), "unknown");
        assert!(!err.detail().is_empty());
    }
}

#[test]
fn test_bad_version_message_is_verbatim() {
    for input in ["1.24", "v1.24.0-", "  garbage ", "v1.024.0", "\u{a0}v1.24.0", "1.0\""] {
        let err = sa_token_auto_generated(input).unwrap_err();
        assert_eq!(err.to_string(), format!("could not parse {:?} as version", input));
        assert_eq!(err.input(), input);
    }
}

#[test]
fn test_versions_without_pre_release() {
    assert!(!evaluate("v1.24.0").unwrap().pre_release);
    assert_eq!(sa_token_auto_generated("1.22.10"), Ok(true));
    assert_eq!(endpoint_slice_v1_promoted(" v1.21.0"), Ok(true));
}

#[test]
fn test_repeated_calls_agree() {
    for input in ["v1.24.0-rc2+k3s1", "unknown", "v1.21.0-beta.1"] {
        let first = evaluate(input);
        for _ in 0..3 {
            assert_eq!(evaluate(input), first);
        }
    }
}

#[test]
fn test_concurrent_callers() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let version = format!("v1.{}.0", 15 + i);
                Feature::ALL.map(|f| f.check(&version).unwrap())
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let minor = 15 + i;
        let answers = handle.join().unwrap();
        assert_eq!(answers, [minor < 24, minor >= 17, minor >= 21]);
    }
}

fn pre_release() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        (prop_oneof![Just("alpha"), Just("beta"), Just("rc")], 0u32..20)
            .prop_map(|(stage, seq)| format!("-{stage}.{seq}")),
    ]
}

proptest! {
    #[test]
    fn prop_build_metadata_never_changes_answers(
        minor in 10u32..30, patch in 0u32..10, pre in pre_release(),
        vendor in "[a-z][a-z0-9]{0,6}",
    ) {
        let plain = format!("v1.{minor}.{patch}{pre}");
        let tagged = format!("{plain}+{vendor}");
        for feature in Feature::ALL {
            prop_assert_eq!(feature.check(&plain), feature.check(&tagged));
        }
    }

    #[test]
    fn prop_prefix_never_changes_answers(minor in 10u32..30, patch in 0u32..10, pre in pre_release()) {
        let bare = format!("1.{minor}.{patch}{pre}");
        let prefixed = format!("v{bare}");
        for feature in Feature::ALL {
            prop_assert_eq!(feature.check(&bare), feature.check(&prefixed));
        }
    }

    #[test]
    fn prop_promotion_is_monotonic(a in 10u32..30, b in 10u32..30) {
        let (low, high) = (a.min(b), a.max(b));
        let low = format!("v1.{low}.0");
        let high = format!("v1.{high}.0");
        if endpoint_slice_v1_promoted(&low).unwrap() {
            prop_assert!(endpoint_slice_v1_promoted(&high).unwrap());
        }
        if endpoint_slice_v1beta1_promoted(&low).unwrap() {
            prop_assert!(endpoint_slice_v1beta1_promoted(&high).unwrap());
        }
        if !sa_token_auto_generated(&low).unwrap() {
            prop_assert!(!sa_token_auto_generated(&high).unwrap());
        }
    }
}
