use quake_sqrt::harness::{
    ExternalRsqrt, Harness, HarnessConfig, Metric, NativeLibrary, Provider,
};
use quake_sqrt::quake;

// qrsqrt-native is a workspace member and a dev-dependency, so its cdylib is
// built next to this test binary. A missing library is a build failure.
fn native_library() -> NativeLibrary {
    let path = NativeLibrary::locate(None).expect("locate qrsqrt-native");
    NativeLibrary::load(&path).expect("load qrsqrt-native")
}

fn cross_check_inputs() -> Vec<f32> {
    let mut inputs = vec![
        f32::MIN_POSITIVE,
        1e-30,
        1e-6,
        0.25,
        0.5,
        1.0,
        2.0,
        4.0,
        10.0,
        9_999.999,
        10_000.0,
        1e20,
        f32::MAX,
    ];
    inputs.extend(quake_sqrt::harness::generate_inputs(4096, Some(0x4242)));
    inputs
}

#[test]
fn q_rsqrt_matches_shared_library_bits() {
    let lib = native_library();
    for x in cross_check_inputs() {
        let expected = lib.q_rsqrt(x);
        let actual = quake::q_rsqrt(x);
        // Same operations in the same order: the builds agree to the bit.
        assert_eq!(actual.to_bits(), expected.to_bits(), "Q_rsqrt({x})");
    }
}

#[test]
fn shared_library_fast_sqrt_within_one_percent() {
    let lib = native_library();
    for &(x, lo, hi) in &[(4.0f32, 1.98f32, 2.02f32), (10_000.0, 99.0, 101.0)] {
        let s = x * lib.q_rsqrt(x);
        assert!((lo..=hi).contains(&s), "{x} * Q_rsqrt({x}) = {s}");
    }
}

#[test]
fn harness_runs_against_shared_library() {
    let lib = native_library();
    let config = HarnessConfig {
        samples: 10_000,
        seed: Some(1),
    };
    let report = Harness::new(config, lib).run().expect("run");
    let quake = report.summary(Provider::Quake, Metric::Error).unwrap();
    let external = report.summary(Provider::External, Metric::Error).unwrap();
    assert_eq!(quake.max.to_bits(), external.max.to_bits());
    assert!(external.max < 1.0);
    for provider in Provider::ALL {
        let time = report.summary(provider, Metric::Time).unwrap();
        assert!(time.min <= time.average && time.average <= time.max);
    }
}
