#![no_main]
use libfuzzer_sys::fuzz_target;

use lz4_block::{decompress, decompress_into, decompress_known_size};

const CANARY: u8 = 0xA5;
const PAD: usize = 16;

fuzz_target!(|data: &[u8]| {
    // Err results are expected; what we verify is no panic and no write past
    // the declared end.

    // Streaming decoder sizes its own buffer via the pre-scan.  Cap the claimed
    // size so tiny inputs cannot request huge allocations.
    if let Ok(n) = lz4_block::decompressed_len(data) {
        if n <= 1 << 20 {
            let _ = decompress(data);
        }
    }

    for &out_len in &[0usize, 17, 4096, data.len()] {
        let mut dst = vec![CANARY; out_len + PAD];

        let _ = decompress_known_size(data, &mut dst, out_len);
        assert!(dst[out_len..].iter().all(|&b| b == CANARY), "known-size wrote past end");

        let _ = decompress_into(data, &mut dst[..out_len]);
        assert!(dst[out_len..].iter().all(|&b| b == CANARY), "streaming wrote past end");
    }
});
