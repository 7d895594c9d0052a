mod tests {
    use myrtio_strip_patterns::channel::{TryReceiveError, TrySendError};
    use myrtio_strip_patterns::color::{BLUE, RED};
    use myrtio_strip_patterns::{PatternChannel, PatternConfig, PatternKind};

    fn config(speed: u32) -> PatternConfig {
        PatternConfig::new(PatternKind::Pulse, RED, BLUE, speed)
    }

    #[test]
    fn test_try_send_fails_when_full() {
        let channel: PatternChannel<2> = PatternChannel::new();
        assert_eq!(channel.try_send(config(1)), Ok(()));
        assert_eq!(channel.try_send(config(2)), Ok(()));
        assert_eq!(channel.try_send(config(3)), Err(TrySendError(config(3))));

        assert_eq!(channel.try_receive(), Ok(config(1)));
        assert_eq!(channel.try_receive(), Ok(config(2)));
        assert_eq!(channel.try_receive(), Err(TryReceiveError));
    }

    #[test]
    fn test_send_drops_oldest() {
        let channel: PatternChannel<2> = PatternChannel::new();
        let sender = channel.sender();
        sender.send(config(1));
        sender.send(config(2));
        sender.send(config(3));

        let receiver = channel.receiver();
        assert_eq!(receiver.try_receive(), Ok(config(2)));
        assert_eq!(receiver.try_receive(), Ok(config(3)));
    }

    #[test]
    fn test_take_latest_empties_queue() {
        let channel: PatternChannel<4> = PatternChannel::new();
        channel.send(config(1));
        channel.send(config(2));

        assert_eq!(channel.receiver().take_latest(), Some(config(2)));
        assert_eq!(channel.receiver().take_latest(), None);
        assert_eq!(channel.try_receive(), Err(TryReceiveError));
    }

    #[test]
    fn test_errors_display() {
        let full = TrySendError(config(7));
        assert_eq!(
            full.to_string(),
            "pattern queue is full, dropped PULSE,0x7F0000,0x00007F,7"
        );
        assert_eq!(TryReceiveError.to_string(), "pattern queue is empty");

        let errors: [&dyn std::error::Error; 2] = [&full, &TryReceiveError];
        assert!(errors.iter().all(|error| error.source().is_none()));
    }
}
