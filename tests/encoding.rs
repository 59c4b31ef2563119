// SPDX short identifier: Unlicense

use der::asn1::{ObjectIdentifier, OctetString};

use lsag::{
    common::*,
    encoding::{
        FoldedPublicKeys,
        PointData,
        SignatureData,
        armor::*,
        asn1::{ORIGIN, SIGNATURE_VERSION}
    },
    keys::generate_private_key,
    ring::Ring,
    signature::LsagSignature
};

fn signed<C: RingCurve>(size: usize, hasher: HasherType) -> (Ring<C>, LsagSignature<C>) {
    let private_keys: Vec<SecretKey<C>> = (0..size).map(|_| generate_private_key::<C>()).collect();
    let ring = Ring::from_keys(private_keys.iter().map(|key| key.public_key()).collect());
    let signature = LsagSignature::sign(&ring, &private_keys[size / 2], b"abcdef", b"", hasher).unwrap();
    return (ring, signature)
}

#[test]
fn signature_data() {
    let (ring, signature) = signed::<NistP384>(5, HasherType::Sha384);
    let data = SignatureData::from_signature(&signature).unwrap();
    assert_eq!(data.name, format!("{} Signature", ORIGIN));
    assert_eq!(data.version, SIGNATURE_VERSION);
    assert_eq!(data.curve().unwrap(), CurveType::Secp384r1);
    assert_eq!(data.hasher().unwrap(), HasherType::Sha384);
    assert_eq!(data.signatures.len(), 5);
    assert_eq!(data.checksum.as_bytes().len(), 48);
    assert_eq!(data.key_image.x.as_bytes().len(), 48);

    let decoded = SignatureData::from_bytes(&data.to_bytes().unwrap()).unwrap();
    assert_eq!(decoded, data);
    let restored = decoded.to_signature::<NistP384>().unwrap();
    assert!(restored.verify(&ring, b"abcdef", b"").unwrap());
}

#[test]
fn signature_data_errors() {
    let (_, signature) = signed::<Secp256k1>(3, HasherType::Sha3_256);
    let data = SignatureData::from_signature(&signature).unwrap();

    //wrong curve
    assert_eq!(data.to_signature::<NistP256>(), Err(LsagError::UnexpectedCurveType));

    //unknown hasher
    let unknown = SignatureData { hasher_oid: ObjectIdentifier::new_unwrap("1.2.3.4"), ..data.clone() };
    assert_eq!(unknown.to_signature::<Secp256k1>(), Err(LsagError::OidHasherNotFound));

    //hasher too wide for the curve
    let wide = SignatureData { hasher_oid: HasherType::Sha512.oid(), ..data.clone() };
    assert_eq!(wide.to_signature::<Secp256k1>(), Err(LsagError::UnsupportedCurveHashCombination));

    //key image off the curve
    let mut y = data.key_image.y.as_bytes().to_vec();
    y[31] ^= 1;
    let off_curve = SignatureData {
        key_image: PointData { x: data.key_image.x.clone(), y: OctetString::new(y).unwrap() },
        ..data.clone()
    };
    assert_eq!(off_curve.to_signature::<Secp256k1>(), Err(LsagError::InvalidKeyImage));

    //non-canonical scalar
    let mut signatures = data.signatures.clone();
    signatures[1] = OctetString::new(vec![0xff; 32]).unwrap();
    let non_canonical = SignatureData { signatures, ..data.clone() };
    assert_eq!(non_canonical.to_signature::<Secp256k1>(), Err(LsagError::InvalidScalar));

    //trailing bytes
    let mut serialized = data.to_bytes().unwrap();
    serialized.extend_from_slice(&[0, 0]);
    assert_eq!(SignatureData::from_bytes(&serialized), Err(LsagError::UnexpectedRestOfSignature));
    assert_eq!(SignatureData::from_bytes(b"not der"), Err(LsagError::Asn1UnmarshalFailed));
}

#[test]
fn point_data() {
    let point = random_point::<NistP256>();
    let data = PointData::from_point::<NistP256>(&point).unwrap();
    assert_eq!(data.as_bytes().len(), 64);
    let decoded = PointData::from_bytes(&data.to_bytes().unwrap()).unwrap();
    assert_eq!(decoded.to_point::<NistP256>().unwrap(), point);
}

#[test]
fn signature_armor() {
    let (_, signature) = signed::<NistP256>(4, HasherType::Sha3_256);
    let data = SignatureData::from_signature(&signature).unwrap();
    let headers = signature_headers(&data).unwrap();
    assert_eq!(headers[0], ("KeyImage", hex::encode(data.key_image.as_bytes())));
    assert!(headers.contains(&("CurveName", "prime256v1".to_string())));
    assert!(headers.contains(&("HasherName", "sha3-256".to_string())));
    assert!(headers.contains(&("NumberOfKeys", "4".to_string())));

    let armored = encode(SIGNATURE_LABEL, data.to_bytes().unwrap(), &headers, OutFormat::Pem).unwrap();
    let text = String::from_utf8(armored.clone()).unwrap();
    assert!(text.starts_with("-----BEGIN RING SIGNATURE-----"));
    assert!(text.lines().nth(1).unwrap().starts_with("KeyImage"));
    assert!(text.contains("CurveOID"));
    assert!(text.trim_end().ends_with("-----END RING SIGNATURE-----"));

    let der = dearmor(&armored, SIGNATURE_LABEL).unwrap();
    assert_eq!(SignatureData::from_bytes(&der).unwrap(), data);

    //DER output is left alone
    let raw = encode(SIGNATURE_LABEL, data.to_bytes().unwrap(), &headers, OutFormat::Der).unwrap();
    assert_eq!(raw, data.to_bytes().unwrap());
}

#[test]
fn folded_armor() {
    let private_keys: Vec<SecretKey<Secp256k1>> = (0..6).map(|_| generate_private_key::<Secp256k1>()).collect();
    let ring = Ring::from_keys(private_keys.iter().map(|key| key.public_key()).collect());
    let folded = ring.fold(HasherType::Sha3_224).unwrap();
    let headers = folded_public_keys_headers(&folded).unwrap();
    assert!(headers.contains(&("NumberOfKeys", "6".to_string())));
    assert!(headers.contains(&("HasherOID", "2.16.840.1.101.3.4.2.7".to_string())));
    assert!(headers.contains(&("Digest", ring.hex_digest(HasherType::Sha3_224).unwrap())));

    let armored = armor(FOLDED_PUBLIC_KEYS_LABEL, folded.to_bytes().unwrap(), &headers).unwrap();
    let der = dearmor(&armored, FOLDED_PUBLIC_KEYS_LABEL).unwrap();
    assert_eq!(FoldedPublicKeys::from_bytes(&der).unwrap(), folded);
    assert_eq!(dearmor(&armored, SIGNATURE_LABEL), Err(LsagError::DecodePemFailure));
}

#[test]
fn formats() {
    assert_eq!(OutFormat::from("PEM"), OutFormat::Pem);
    assert_eq!(OutFormat::from("pem"), OutFormat::Pem);
    assert_eq!(OutFormat::from("DER"), OutFormat::Der);
    assert_eq!(OutFormat::from("anything"), OutFormat::Der);
    assert_eq!(KeyOrder::from("hashes"), KeyOrder::Hashes);
    assert_eq!(KeyOrder::from(""), KeyOrder::AsGiven);
    assert_eq!(serde_json::to_string(&OutFormat::Der).unwrap(), "\"DER\"");
    assert_eq!(serde_json::from_str::<KeyOrder>("\"as-given\"").unwrap(), KeyOrder::AsGiven);
}
