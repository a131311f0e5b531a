//! Integration tests for the sprout-keys crate.

use crate::*;

/// Stub backend returning fixed vectors, used to verify the pipeline's byte
/// plumbing independently of the production primitives.
struct StubBackend;

impl CryptoBackend for StubBackend {
    fn raw_key(&self, _phrase: &str) -> Result<[u8; 32], KeyError> {
        Ok([0x42; 32])
    }

    fn prf_addr_a_pk(&self, _a_sk: &[u8; 32]) -> Result<[u8; 32], KeyError> {
        Ok([0x01; 32])
    }

    fn prf_addr_sk_enc(&self, _a_sk: &[u8; 32]) -> Result<[u8; 32], KeyError> {
        Ok([0x02; 32])
    }

    fn scalar_mult_base(&self, scalar: &[u8; 32]) -> Result<[u8; 32], KeyError> {
        // Identity: pass the clamped scalar through so the caller can
        // observe exactly what reached the multiplication stage.
        Ok(*scalar)
    }
}

#[test]
fn test_stub_pipeline_plumbing() {
    let backend = StubBackend;

    // Raw key 0x42... with the top nibble of byte 0 masked.
    let a_sk = derive_secret_key(&backend, "ignored").unwrap();
    assert_eq!(
        a_sk.to_hex(),
        "0242424242424242424242424242424242424242424242424242424242424242"
    );

    let a_pk = derive_paying_key(&backend, &a_sk).unwrap();
    assert_eq!(a_pk.as_bytes(), &[0x01; 32]);

    // The identity multiplication exposes the clamped sk_enc: byte 0
    // 0x02 & 0xf8 = 0x00, byte 31 (0x02 & 0x7f) | 0x40 = 0x42.
    let pk_enc = derive_transmission_key(&backend, &a_sk).unwrap();
    assert_eq!(
        pk_enc.to_hex(),
        "0002020202020202020202020202020202020202020202020202020202020242"
    );
}

#[test]
fn test_production_pipeline_golden_vectors() {
    // Full pipeline for the fixed phrase "test phrase". These values pin
    // the production backend byte-for-byte; any change here is a breaking,
    // fund-losing protocol deviation.
    let backend = SproutBackend::new();

    let a_sk = derive_secret_key(&backend, "test phrase").unwrap();
    assert_eq!(
        a_sk.to_hex(),
        "03725d0a96e114361230a7978eeefa0d646d7656dce5e44ae4e70a4dea5e674c"
    );

    let a_pk = derive_paying_key(&backend, &a_sk).unwrap();
    assert_eq!(
        a_pk.to_hex(),
        "4f2a973f9dd365555c7535251f41462f1894adbac478caffebc49f1d994663f8"
    );

    let pk_enc = derive_transmission_key(&backend, &a_sk).unwrap();
    assert_eq!(
        pk_enc.to_hex(),
        "ec381c91fd0323e4bea3509fa4dc95518600d7f1667d0720d4effcb1798e0862"
    );
}

#[test]
fn test_clamp_matches_expected_intermediate() {
    let backend = SproutBackend::new();
    let a_sk = derive_secret_key(&backend, "test phrase").unwrap();

    let scalar = derive_transmission_scalar(&backend, &a_sk).unwrap();
    assert_eq!(
        hex::encode(scalar.as_bytes()),
        "214d7c9acb5f8ad5a9e3017f122649a70756de94c326785628ccdcb1a79ceaa2"
    );

    let clamped = clamp_scalar(&scalar);
    assert_eq!(
        hex::encode(clamped.as_bytes()),
        "204d7c9acb5f8ad5a9e3017f122649a70756de94c326785628ccdcb1a79cea62"
    );
}

#[test]
fn test_concurrent_derivation_is_consistent() {
    // The pipeline holds no shared state; hammering it from many threads
    // on the same phrase must yield identical results.
    let backend = SproutBackend::new();
    let expected = derive_transmission_key(
        &backend,
        &derive_secret_key(&backend, "concurrent phrase").unwrap(),
    )
    .unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                let backend = SproutBackend::new();
                let a_sk = derive_secret_key(&backend, "concurrent phrase").unwrap();
                derive_transmission_key(&backend, &a_sk).unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_distinct_phrases_distinct_keys() {
    let backend = SproutBackend::new();
    let key_a = derive_secret_key(&backend, "phrase a").unwrap();
    let key_b = derive_secret_key(&backend, "phrase b").unwrap();
    assert_ne!(key_a.as_bytes(), key_b.as_bytes());
}
