// SPDX short identifier: Unlicense

use criterion::{
    criterion_group,
    criterion_main,
    Criterion,
    BenchmarkId
};
use rand::{thread_rng, Rng};

const RING_SIZES: [usize; 8] = [2, 4, 8, 16, 32, 64, 128, 256];

use lsag::{
    common::*,
    keys::generate_private_key,
    ring::Ring,
    signature::LsagSignature
};

fn random_ring<C: RingCurve>(size: usize) -> (Vec<SecretKey<C>>, Ring<C>) {
    let private_keys: Vec<SecretKey<C>> = (0..size).map(|_| generate_private_key::<C>()).collect();
    let ring = Ring::from_keys(private_keys.iter().map(|key| key.public_key()).collect());
    return (private_keys, ring)
}

fn lsag_benchmark<C: RingCurve>(c: &mut Criterion, hasher: HasherType) {
    let mut group = c.benchmark_group(format!("LSAG {}", C::CURVE_TYPE));
    group.sample_size(20);

    //sign
    for x in RING_SIZES {
        let (private_keys, ring) = random_ring::<C>(x);
        let my_key = private_keys[thread_rng().gen::<usize>() % x].clone();

        let params = (ring, my_key);
        group.bench_with_input(BenchmarkId::new("sign", format!("Ring size: {x}")), &params,
            |b, (ring, my_key)| b.iter(|| {
                LsagSignature::sign(ring, my_key, b"abcdef", b"", hasher).unwrap()
            }));
    }

    //verify
    for x in RING_SIZES {
        let (private_keys, ring) = random_ring::<C>(x);
        let my_key = &private_keys[thread_rng().gen::<usize>() % x];
        let sig = LsagSignature::sign(&ring, my_key, b"abcdef", b"", hasher).unwrap();

        let params = (sig, ring);
        group.bench_with_input(BenchmarkId::new("verify", format!("Ring size: {x}")), &params,
            |b, (sig, ring)| b.iter(|| {
                sig.verify(ring, b"abcdef", b"").unwrap()
            }));
    }
}

fn secp256k1_benchmark(c: &mut Criterion) {
    lsag_benchmark::<Secp256k1>(c, HasherType::Sha3_256);
}

fn prime256v1_benchmark(c: &mut Criterion) {
    lsag_benchmark::<NistP256>(c, HasherType::Sha3_256);
}

fn secp384r1_benchmark(c: &mut Criterion) {
    lsag_benchmark::<NistP384>(c, HasherType::Sha3_384);
}


criterion_group!(signature_lsag, secp256k1_benchmark, prime256v1_benchmark, secp384r1_benchmark);
criterion_main!(signature_lsag);
