mod tests {
    use myrtio_strip_patterns::color::{BLACK, BLUE, RANDOM, RANDOM_PRIMARY, RED, SIGN, WHITE};
    use myrtio_strip_patterns::status::STATUS_CAPACITY;
    use myrtio_strip_patterns::{
        PatternConfig, PatternKind, UnsupportedError, format_status, parse_status,
    };

    #[test]
    fn test_format_status() {
        let config = PatternConfig::new(PatternKind::Pulse, RED, BLUE, 55);
        assert_eq!(format_status(&config).as_str(), "PULSE,0x7F0000,0x00007F,55");

        let config = PatternConfig::new(PatternKind::Cylon, SIGN, BLACK, 2_000);
        assert_eq!(format_status(&config).as_str(), "CYLON,0x5F5F5F,0x000000,2000");
    }

    #[test]
    fn test_format_status_sentinels() {
        let config = PatternConfig::new(PatternKind::Lava, RANDOM, RANDOM_PRIMARY, 0);
        assert_eq!(format_status(&config).as_str(), "LAVA,0x808080,0x818181,0");
    }

    #[test]
    fn test_format_status_longest_line_fits() {
        let config = PatternConfig::new(PatternKind::Alternate, WHITE, WHITE, u32::MAX);
        let text = format_status(&config);
        assert_eq!(text.as_str(), "ALTERNATE,0x7F7F7F,0x7F7F7F,4294967295");
        assert!(text.len() <= STATUS_CAPACITY);
    }

    #[test]
    fn test_display_matches_status() {
        let config = PatternConfig::new(PatternKind::Flicker, WHITE, BLACK, 40);
        assert_eq!(config.to_string(), format_status(&config).as_str());
    }

    #[test]
    fn test_parse_status_is_unsupported() {
        assert_eq!(
            parse_status("PULSE,0x7F0000,0x00007F,55"),
            Err(UnsupportedError)
        );
        assert_eq!(parse_status(""), Err(UnsupportedError));
    }
}
