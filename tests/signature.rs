// SPDX short identifier: Unlicense

use rand::{thread_rng, Rng};

use lsag::{
    common::*,
    encoding::SignatureData,
    keys::generate_private_key,
    ring::Ring,
    signature::{
        LsagSignature,
        get_key_image
    }
};

const RING_SIZES: [usize; 9] = [1, 2, 3, 4, 8, 11, 16, 25, 32];

type K256Scalar = <Secp256k1 as CurveArithmetic>::Scalar;

fn random_ring<C: RingCurve>(size: usize) -> (Vec<SecretKey<C>>, Ring<C>) {
    let private_keys: Vec<SecretKey<C>> = (0..size).map(|_| generate_private_key::<C>()).collect();
    let ring = Ring::from_keys(private_keys.iter().map(|key| key.public_key()).collect());
    return (private_keys, ring)
}

fn lsag_test<C: RingCurve>() {
    for x in RING_SIZES {
        let (private_keys, ring) = random_ring::<C>(x);
        let j = thread_rng().gen::<usize>() % x;
        let my_key = &private_keys[j];

        if x == 1 {
            assert_eq!(LsagSignature::sign(&ring, my_key, b"abcdef", b"", HasherType::Sha3_256),
                Err(LsagError::InsufficientNumberOfPublicKeys));
            continue
        }

        //sign
        let sig = LsagSignature::sign(&ring, my_key, b"abcdef", b"case", HasherType::Sha3_256).unwrap();
        assert_eq!(sig.responses.len(), x);

        //serialize
        let serialized = SignatureData::from_signature(&sig).unwrap().to_bytes().unwrap();
        let deserialized = SignatureData::from_bytes(&serialized).unwrap().to_signature::<C>().unwrap();
        assert_eq!(deserialized, sig);

        //sanity check the key image
        assert_eq!(deserialized.key_image, get_key_image(my_key).unwrap());

        //verify
        assert!(deserialized.verify(&ring, b"abcdef", b"case").unwrap());

        //wrong message
        assert!(!deserialized.verify(&ring, b"123456", b"case").unwrap());
        //wrong case identifier
        assert!(!deserialized.verify(&ring, b"abcdef", b"other case").unwrap());

        //explicit position
        let sig = LsagSignature::sign_at(&ring, my_key, j, b"abcdef", b"", HasherType::Sha3_256).unwrap();
        assert!(sig.verify(&ring, b"abcdef", b"").unwrap());
        assert_eq!(LsagSignature::sign_at(&ring, my_key, (j + 1) % x, b"abcdef", b"", HasherType::Sha3_256),
            Err(LsagError::PrivateKeyNotFitPublic));
        assert_eq!(LsagSignature::sign_at(&ring, my_key, x, b"abcdef", b"", HasherType::Sha3_256),
            Err(LsagError::PrivateKeyPositionOutOfRange));
    }
}

#[test]
fn lsag_secp256k1() {
    lsag_test::<Secp256k1>();
}

#[test]
fn lsag_prime256v1() {
    lsag_test::<NistP256>();
}

#[test]
fn lsag_secp384r1() {
    lsag_test::<NistP384>();
}

#[test]
fn every_supported_hasher() {
    let (private_keys, ring) = random_ring::<NistP384>(4);
    for hasher in HasherType::ALL {
        let result = LsagSignature::sign(&ring, &private_keys[2], b"abcdef", b"", hasher);
        if hasher.is_supported_on(CurveType::Secp384r1) {
            assert!(result.unwrap().verify(&ring, b"abcdef", b"").unwrap());
        } else {
            assert_eq!(result, Err(LsagError::UnsupportedCurveHashCombination));
        }
    }

    let (private_keys, ring) = random_ring::<NistP256>(4);
    assert_eq!(LsagSignature::sign(&ring, &private_keys[0], b"abcdef", b"", HasherType::Sha384),
        Err(LsagError::UnsupportedCurveHashCombination));
    assert!(LsagSignature::sign(&ring, &private_keys[0], b"abcdef", b"", HasherType::Sha3_224).unwrap()
        .verify(&ring, b"abcdef", b"").unwrap());
}

#[test]
fn tampering() {
    let (private_keys, ring) = random_ring::<Secp256k1>(8);
    let sig = LsagSignature::sign(&ring, &private_keys[5], b"abcdef", b"", HasherType::Sha256).unwrap();
    assert!(sig.verify(&ring, b"abcdef", b"").unwrap());

    //a response
    for i in 0..ring.len() {
        let mut tampered = sig.clone();
        tampered.responses[i] += K256Scalar::ONE;
        assert!(!tampered.verify(&ring, b"abcdef", b"").unwrap());
    }

    //the challenge
    let mut tampered = sig.clone();
    tampered.challenge += K256Scalar::ONE;
    assert!(!tampered.verify(&ring, b"abcdef", b"").unwrap());

    //the key image
    let mut tampered = sig.clone();
    tampered.key_image = random_point::<Secp256k1>();
    assert!(!tampered.verify(&ring, b"abcdef", b"").unwrap());

    //a ring member
    let mut tampered_ring = ring.clone();
    tampered_ring.0[3] = generate_private_key::<Secp256k1>().public_key();
    assert!(!sig.verify(&tampered_ring, b"abcdef", b"").unwrap());

    //the ring order
    let mut tampered_ring = ring.clone();
    tampered_ring.0.swap(0, 1);
    assert!(!sig.verify(&tampered_ring, b"abcdef", b"").unwrap());

    //the hash function
    let mut tampered = sig.clone();
    tampered.hasher = HasherType::Sha3_256;
    assert!(!tampered.verify(&ring, b"abcdef", b"").unwrap());
}

#[test]
fn malformed() {
    let (private_keys, ring) = random_ring::<NistP256>(5);
    let sig = LsagSignature::sign(&ring, &private_keys[0], b"abcdef", b"", HasherType::Sha3_256).unwrap();

    let mut truncated = sig.clone();
    truncated.responses.pop();
    assert_eq!(truncated.verify(&ring, b"abcdef", b""), Err(LsagError::IncorrectNumberOfSignatures));

    let mut extended = sig.clone();
    extended.responses.push(random_scalar::<NistP256>());
    assert_eq!(extended.verify(&ring, b"abcdef", b""), Err(LsagError::IncorrectNumberOfSignatures));

    let identity = LsagSignature::<NistP256>::from_parts(
        <NistP256 as CurveArithmetic>::ProjectivePoint::identity(), sig.challenge, sig.responses.clone(), sig.hasher);
    assert_eq!(identity.verify(&ring, b"abcdef", b""), Err(LsagError::InvalidKeyImage));
}

#[test]
fn signer_not_in_ring() {
    let (_, ring) = random_ring::<Secp256k1>(6);
    let stranger = generate_private_key::<Secp256k1>();
    assert_eq!(LsagSignature::sign(&ring, &stranger, b"abcdef", b"", HasherType::Sha3_256),
        Err(LsagError::PrivateKeyNotFoundAmongPublicKeys));

    let empty: Ring<Secp256k1> = Ring::new();
    assert_eq!(LsagSignature::sign(&empty, &stranger, b"abcdef", b"", HasherType::Sha3_256),
        Err(LsagError::InsufficientNumberOfPublicKeys));
}

#[test]
fn duplicate_keys() {
    let (private_keys, mut ring) = random_ring::<NistP256>(4);
    ring.push(private_keys[1].public_key());
    assert_eq!(LsagSignature::sign(&ring, &private_keys[0], b"abcdef", b"", HasherType::Sha3_256),
        Err(LsagError::DuplicatePublicKeys));

    //a valid signature checked against a ring where one member is repeated
    let (private_keys, ring) = random_ring::<NistP256>(4);
    let sig = LsagSignature::sign(&ring, &private_keys[0], b"abcdef", b"", HasherType::Sha3_256).unwrap();
    let mut repeated = ring.clone();
    repeated.0[3] = repeated.0[0].clone();
    assert_eq!(sig.verify(&repeated, b"abcdef", b""), Err(LsagError::DuplicatePublicKeys));
}

#[test]
fn verify_small_rings() {
    //nothing to walk around: the challenge would come back unchanged
    let empty = LsagSignature::<NistP256>::from_parts(
        generator::<NistP256>(), random_scalar::<NistP256>(), vec![], HasherType::Sha3_256);
    assert_eq!(empty.verify(&Ring::new(), b"abcdef", b""), Err(LsagError::InsufficientNumberOfPublicKeys));

    let (_, ring) = random_ring::<NistP256>(1);
    let single = LsagSignature::<NistP256>::from_parts(
        generator::<NistP256>(), random_scalar::<NistP256>(), vec![random_scalar::<NistP256>()], HasherType::Sha3_256);
    assert_eq!(single.verify(&ring, b"abcdef", b""), Err(LsagError::InsufficientNumberOfPublicKeys));
}

#[test]
fn linkability() {
    let signer = generate_private_key::<NistP256>();
    let (_, mut first_ring) = random_ring::<NistP256>(4);
    let (_, mut second_ring) = random_ring::<NistP256>(7);
    first_ring.insert(1, signer.public_key());
    second_ring.push(signer.public_key());

    let first = LsagSignature::sign(&first_ring, &signer, b"first message", b"", HasherType::Sha3_256).unwrap();
    let second = LsagSignature::sign(&second_ring, &signer, b"second message", b"election", HasherType::Sha3_224).unwrap();
    assert!(first.verify(&first_ring, b"first message", b"").unwrap());
    assert!(second.verify(&second_ring, b"second message", b"election").unwrap());
    assert!(first.links_to(&second));

    //a different signer in the same ring
    let (private_keys, ring) = random_ring::<NistP256>(4);
    let a = LsagSignature::sign(&ring, &private_keys[0], b"abcdef", b"", HasherType::Sha3_256).unwrap();
    let b = LsagSignature::sign(&ring, &private_keys[1], b"abcdef", b"", HasherType::Sha3_256).unwrap();
    assert!(!a.links_to(&b));

    //signing twice gives different signatures with the same key image
    let c = LsagSignature::sign(&ring, &private_keys[0], b"abcdef", b"", HasherType::Sha3_256).unwrap();
    assert_ne!(a.challenge, c.challenge);
    assert!(a.links_to(&c));
}

#[test]
fn shape_does_not_depend_on_signer() {
    let (private_keys, ring) = random_ring::<Secp256k1>(6);
    let serialized: Vec<Vec<u8>> = private_keys.iter()
        .map(|key| {
            let sig = LsagSignature::sign(&ring, key, b"abcdef", b"", HasherType::Sha3_256).unwrap();
            SignatureData::from_signature(&sig).unwrap().to_bytes().unwrap()
        })
        .collect();
    for bytes in &serialized {
        let data = SignatureData::from_bytes(bytes).unwrap();
        assert_eq!(data.signatures.len(), ring.len());
        assert!(data.signatures.iter().all(|s| s.as_bytes().len() == 32));
    }
}
