#[cfg(test)]
mod tests {
    use bridge_core::config::BoundaryConfig;
    use bridge_core::constants::{MAX_DECOMPRESSED_SIZE, MAX_INPUT_SIZE};

    #[test]
    fn defaults_are_format_limits() {
        let cfg = BoundaryConfig::default();
        assert_eq!(cfg.max_input_len, MAX_INPUT_SIZE);
        assert_eq!(cfg.max_decompressed_len, MAX_DECOMPRESSED_SIZE);
        assert_eq!(BoundaryConfig::new(None, None), cfg);
    }

    #[test]
    fn explicit_limits_are_kept() {
        let cfg = BoundaryConfig::new(Some(1024), Some(4096));
        assert_eq!(cfg.max_input_len, 1024);
        assert_eq!(cfg.max_decompressed_len, 4096);
    }

    #[test]
    fn limits_never_exceed_prefix_width() {
        let cfg = BoundaryConfig::new(Some(usize::MAX), Some(usize::MAX));
        assert_eq!(cfg.max_input_len, MAX_INPUT_SIZE);
        assert_eq!(cfg.max_decompressed_len, MAX_DECOMPRESSED_SIZE);

        let cfg = BoundaryConfig::default().with_max_decompressed_len(usize::MAX);
        assert_eq!(cfg.max_decompressed_len, MAX_DECOMPRESSED_SIZE);
    }
}
