#[cfg(test)]
mod tests {
    use bridge_core::compression::{
        CompressionError, Compressor, Decompressor, Lz4Compressor, Lz4Decompressor, SIZE_PREFIX_LEN,
    };
    use bridge_core::config::BoundaryConfig;
    use proptest::prelude::*;

    fn noisy(len: usize) -> Vec<u8> {
        // xorshift, incompressible enough that LZ4 emits mostly literals
        let mut x: u32 = 0x9E37_79B9;
        (0..len)
            .map(|_| {
                x ^= x << 13;
                x ^= x >> 17;
                x ^= x << 5;
                x as u8
            })
            .collect()
    }

    fn set_declared(stream: &mut [u8], declared: u32) {
        stream[..SIZE_PREFIX_LEN].copy_from_slice(&declared.to_le_bytes());
    }

    // --- Round trips ---

    #[test]
    fn redundant_input_compresses_smaller() {
        let input = vec![b'A'; 1024];
        let compressed = Lz4Compressor::new().compress(&input).unwrap();
        assert!(compressed.len() < input.len(), "got {} bytes", compressed.len());

        let restored = Lz4Decompressor::new().decompress(&compressed).unwrap();
        assert_eq!(restored, input);
    }

    #[test]
    fn short_input_round_trips_despite_expanding() {
        // Below the minimum match window LZ4 stores everything as literals.
        let input = b"AAAAAAAAAA";
        let compressed = Lz4Compressor::new().compress(input).unwrap();
        assert!(compressed.len() > input.len());

        let restored = Lz4Decompressor::new().decompress(&compressed).unwrap();
        assert_eq!(restored, input);
    }

    #[test]
    fn prefix_carries_uncompressed_size() {
        let input = noisy(300);
        let compressed = Lz4Compressor::new().compress(&input).unwrap();
        let declared = u32::from_le_bytes(compressed[..4].try_into().unwrap());
        assert_eq!(declared, 300);
    }

    // --- Malformed streams ---

    #[test]
    fn three_bytes_are_truncated() {
        let err = Lz4Decompressor::new().decompress(&[0x01, 0x02, 0x03]).unwrap_err();
        assert_eq!(err, CompressionError::Truncated { codec: "lz4", have: 3, need: 4 });
    }

    #[test]
    fn declared_size_over_config_bound_is_rejected() {
        let compressed = Lz4Compressor::new().compress(&vec![b'A'; 1024]).unwrap();
        let config = BoundaryConfig::default().with_max_decompressed_len(512);

        let err = Lz4Decompressor::from_config(&config).decompress(&compressed).unwrap_err();
        assert_eq!(
            err,
            CompressionError::DeclaredSizeTooLarge { codec: "lz4", declared: 1024, max: 512 }
        );
    }

    #[test]
    fn declared_size_beyond_lz4_expansion_is_rejected() {
        let stream = [0xFF, 0xFF, 0xFF, 0x7F, 0x00];
        let err = Lz4Decompressor::new().decompress(&stream).unwrap_err();
        assert!(matches!(err, CompressionError::DeclaredSizeTooLarge { max: 255, .. }));
    }

    #[test]
    fn truncated_block_is_rejected() {
        let input = noisy(256);
        let mut compressed = Lz4Compressor::new().compress(&input).unwrap();
        compressed.truncate(compressed.len() - 16);

        assert!(Lz4Decompressor::new().decompress(&compressed).is_err());
    }

    #[test]
    fn overstated_size_is_rejected() {
        let input = noisy(256);
        let mut compressed = Lz4Compressor::new().compress(&input).unwrap();
        set_declared(&mut compressed, 257);

        let err = Lz4Decompressor::new().decompress(&compressed).unwrap_err();
        assert!(matches!(
            err,
            CompressionError::LengthMismatch { .. } | CompressionError::Corrupt { .. }
        ));
    }

    #[test]
    fn understated_size_is_rejected() {
        let input = noisy(256);
        let mut compressed = Lz4Compressor::new().compress(&input).unwrap();
        set_declared(&mut compressed, 128);

        assert!(Lz4Decompressor::new().decompress(&compressed).is_err());
    }

    #[test]
    fn input_over_limit_is_rejected() {
        let config = BoundaryConfig::new(Some(8), None);
        let err = Lz4Compressor::from_config(&config).compress(&[0u8; 9]).unwrap_err();
        assert_eq!(err, CompressionError::InputTooLarge { codec: "lz4", have: 9, max: 8 });
        assert_eq!(err.codec(), "lz4");
    }

    // --- Properties ---

    proptest! {
        #[test]
        fn prop_round_trip(data in prop::collection::vec(any::<u8>(), 1..4096)) {
            let compressed = Lz4Compressor::new().compress(&data).unwrap();
            let restored = Lz4Decompressor::new().decompress(&compressed).unwrap();
            prop_assert_eq!(restored, data);
        }

        #[test]
        fn prop_garbage_never_panics(data in prop::collection::vec(any::<u8>(), 0..512)) {
            // Either rejected or decoded to exactly the declared size.
            if let Ok(out) = Lz4Decompressor::new().decompress(&data) {
                let declared = u32::from_le_bytes(data[..4].try_into().unwrap()) as usize;
                prop_assert_eq!(out.len(), declared);
            }
        }
    }
}
