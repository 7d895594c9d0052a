mod tests {
    use myrtio_strip_patterns::{PatternKind, PatternSlot};

    #[test]
    fn test_pattern_kind_parse() {
        assert_eq!(PatternKind::parse_from_str("PULSE"), Some(PatternKind::Pulse));
        assert_eq!(PatternKind::parse_from_str("LAVA"), Some(PatternKind::Lava));
        assert_eq!(PatternKind::parse_from_str("pulse"), None);
        assert_eq!(PatternKind::parse_from_str(""), None);
    }

    #[test]
    fn test_pattern_kind_names_round_trip() {
        for kind in PatternKind::ALL {
            assert_eq!(PatternKind::parse_from_str(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_pattern_kind_as_str() {
        assert_eq!(PatternKind::Solid.as_str(), "SOLID");
        assert_eq!(PatternKind::Alternate.as_str(), "ALTERNATE");
        assert_eq!(PatternKind::Flicker.as_str(), "FLICKER");
    }

    #[test]
    fn test_pattern_kind_from_raw() {
        assert_eq!(PatternKind::from_raw(0), Some(PatternKind::Solid));
        assert_eq!(PatternKind::from_raw(2), Some(PatternKind::Cylon));
        assert_eq!(PatternKind::from_raw(5), Some(PatternKind::Lava));
        assert_eq!(PatternKind::from_raw(6), None);
        assert_eq!(PatternKind::Flicker.as_raw(), 4);
    }

    #[test]
    fn test_slot_matches_kind() {
        for kind in PatternKind::ALL {
            let slot: PatternSlot<8> = kind.to_slot();
            assert_eq!(slot.kind(), kind);
        }
        assert_eq!(PatternSlot::<8>::default().kind(), PatternKind::Solid);
    }
}
