use eqpreset_formats::{FormatError, FxpBlob, decode};

/// FXP header with a hand-set count field, followed by `body`
fn fxp(kind: &[u8; 4], count: i32, body: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"CcnK");
    bytes.extend_from_slice(&0u32.to_be_bytes());
    bytes.extend_from_slice(kind);
    bytes.extend_from_slice(&1i32.to_be_bytes());
    bytes.extend_from_slice(b"FQ3p");
    bytes.extend_from_slice(&1i32.to_be_bytes());
    bytes.extend_from_slice(&count.to_be_bytes());
    bytes.extend_from_slice(body);
    let size = (bytes.len() - 8) as u32;
    bytes[4..8].copy_from_slice(&size.to_be_bytes());
    bytes
}

fn program_body(params: usize) -> Vec<u8> {
    let mut body = vec![0u8; 28];
    body[..4].copy_from_slice(b"Init");
    body.extend(std::iter::repeat_n(0u8, params * 4));
    body
}

#[test]
fn test_huge_param_count_is_truncated() {
    let bytes = fxp(b"FxCk", i32::MAX, &program_body(3));
    let blob = FxpBlob::from_bytes(&bytes).unwrap();
    assert!(matches!(blob.content(), Err(FormatError::Truncated { .. })));
    assert!(matches!(decode(&bytes), Err(FormatError::Truncated { .. })));
}

#[test]
fn test_param_count_one_past_the_end_is_truncated() {
    let bytes = fxp(b"FxCk", 4, &program_body(3));
    assert!(matches!(decode(&bytes), Err(FormatError::Truncated { .. })));
}

#[test]
fn test_huge_program_count_is_truncated() {
    let bytes = fxp(b"FxBk", i32::MAX, &[0u8; 128 + 64]);
    assert!(matches!(decode(&bytes), Err(FormatError::Truncated { .. })));
}

#[test]
fn test_huge_param_count_inside_bank_is_truncated() {
    let mut body = vec![0u8; 128];
    body.extend_from_slice(&[0u8; 24]);
    body.extend_from_slice(&i32::MAX.to_be_bytes());
    body.extend_from_slice(&program_body(2));
    let bytes = fxp(b"FxBk", 1, &body);
    assert!(matches!(decode(&bytes), Err(FormatError::Truncated { .. })));
}

#[test]
fn test_huge_chunk_size_is_truncated() {
    let mut body = vec![0u8; 28];
    body.extend_from_slice(&i32::MAX.to_be_bytes());
    body.extend_from_slice(b"FFBS");
    let bytes = fxp(b"FPCh", 1, &body);
    assert!(matches!(decode(&bytes), Err(FormatError::Truncated { .. })));
}

#[test]
fn test_negative_counts_are_rejected() {
    let program = fxp(b"FxCk", -1, &program_body(1));
    assert!(matches!(decode(&program), Err(FormatError::Invalid(_))));

    let bank = fxp(b"FxBk", i32::MIN, &[0u8; 128]);
    assert!(matches!(decode(&bank), Err(FormatError::Invalid(_))));
}

#[test]
fn test_well_formed_params_program_still_decodes() {
    let params = vec![0.0f32; 3];
    let blob = FxpBlob::program(*b"FQ3p", 1, "Init", &params);
    let parsed = FxpBlob::from_bytes(blob.as_bytes()).unwrap();
    let content = parsed.content().unwrap();
    assert_eq!(content.params(), Some(&params[..]));
}
