use sha2::{Digest, Sha256};

use crate::errors::HashToCurveError;

// SHA-256 output and block sizes.
const B_IN_BYTES: usize = 32;
const R_IN_BYTES: usize = 64;

const MAX_DST_LEN: usize = 255;
const MAX_OUTPUT_LEN: usize = 65535;

/// `expand_message_xmd` over SHA-256.
///
/// See section 5.3.1 of RFC 9380
/// <https://www.rfc-editor.org/rfc/rfc9380.html#name-expand_message_xmd>
///
/// Domain separation tags longer than 255 bytes are rejected rather than
/// pre-hashed.
pub fn expand_message_xmd(
    msg: &[u8],
    dst: &[u8],
    len_in_bytes: usize,
) -> Result<Vec<u8>, HashToCurveError> {
    if dst.len() > MAX_DST_LEN {
        return Err(HashToCurveError::DstTooLong(dst.len()));
    }
    let ell = len_in_bytes.div_ceil(B_IN_BYTES);
    if ell > 255 || len_in_bytes > MAX_OUTPUT_LEN {
        return Err(HashToCurveError::ExpandLengthTooLarge(len_in_bytes));
    }

    // DST_prime = DST || I2OSP(len(DST), 1)
    let dst_len = [dst.len() as u8];

    let mut hasher = Sha256::new();
    hasher.update([0u8; R_IN_BYTES]);
    hasher.update(msg);
    hasher.update((len_in_bytes as u16).to_be_bytes());
    hasher.update([0u8]);
    hasher.update(dst);
    hasher.update(dst_len);
    let b_0 = hasher.finalize();

    let mut hasher = Sha256::new();
    hasher.update(b_0);
    hasher.update([1u8]);
    hasher.update(dst);
    hasher.update(dst_len);
    let mut b_i = hasher.finalize();

    let mut out = Vec::with_capacity(ell * B_IN_BYTES);
    out.extend_from_slice(&b_i);

    for i in 2..=ell {
        let mut chained = [0u8; B_IN_BYTES];
        for (j, byte) in chained.iter_mut().enumerate() {
            *byte = b_0[j] ^ b_i[j];
        }

        let mut hasher = Sha256::new();
        hasher.update(chained);
        hasher.update([i as u8]);
        hasher.update(dst);
        hasher.update(dst_len);
        b_i = hasher.finalize();
        out.extend_from_slice(&b_i);
    }

    out.truncate(len_in_bytes);
    tracing::trace!(len_in_bytes, blocks = ell, "expanded message");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DST: &[u8] = b"QUUX-V01-CS02-with-expander-SHA256-128";

    #[test]
    fn test_expand_message_xmd_kat() {
        // RFC 9380 appendix K.1
        let kat: [(&[u8], usize, &str); 3] = [
            (b"", 0x20, "68a985b87eb6b46952128911f2a4412bbc302a9d759667f87f7a21d803f07235"),
            (b"abc", 0x20, "d8ccab23b5985ccea865c6c97b6e5b8350e794e603b4b97902f53a8a0d605615"),
            (
                b"",
                0x80,
                "af84c27ccfd45d41914fdff5df25293e221afc53d8ad2ac06d5e3e29485dadbee0d121587713a3e0dd4d5e69e93eb7cd4f5df4cd103e188cf60cb02edc3edf18eda8576c412b18ffb658e3dd6ec849469b979d444cf7b26911a08e63cf31f9dcc541708d3491184472c2c29bb749d4286b004ceb5ee6b9a7fa5b646c993f0ced",
            ),
        ];

        for (msg, len, expected) in kat {
            let out = expand_message_xmd(msg, DST, len).unwrap();
            assert_eq!(hex::encode(&out), expected);
        }
    }

    #[test]
    fn test_expand_message_xmd_rejects_oversize_inputs() {
        let long_dst = vec![b'x'; 256];
        assert_eq!(
            expand_message_xmd(b"abc", &long_dst, 32),
            Err(HashToCurveError::DstTooLong(256))
        );
        assert_eq!(
            expand_message_xmd(b"abc", DST, 255 * 32 + 1),
            Err(HashToCurveError::ExpandLengthTooLarge(255 * 32 + 1))
        );
        assert_eq!(expand_message_xmd(b"abc", DST, 255 * 32).map(|v| v.len()), Ok(255 * 32));
    }

    #[test]
    fn test_output_length_is_domain_separated() {
        // The requested length is hashed into b_0, so shorter outputs are not prefixes.
        let short = expand_message_xmd(b"msg", DST, 32).unwrap();
        let long = expand_message_xmd(b"msg", DST, 64).unwrap();
        assert_ne!(&long[..32], &short[..]);
    }
}
