mod common;

mod tests {
    use myrtio_strip_patterns::color::{BLACK, GREEN, RED, Rgb, WHITE};
    use myrtio_strip_patterns::wire::{BufferedSink, SpiSink, encode_pixel, widen, widen_channel};
    use myrtio_strip_patterns::{ConfigError, RenderSink, Strip, latch_len};
    use smart_leds::SmartLedsWrite;

    use crate::common::RecordingSink;

    #[derive(Default)]
    struct MockWriter {
        frames: Vec<Vec<Rgb>>,
        fail: bool,
    }

    impl SmartLedsWrite for MockWriter {
        type Error = &'static str;
        type Color = Rgb;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            if self.fail {
                return Err("bus error");
            }
            self.frames.push(iterator.into_iter().map(Into::into).collect());
            Ok(())
        }
    }

    #[test]
    fn test_latch_len() {
        assert_eq!(latch_len(0), 0);
        assert_eq!(latch_len(1), 8);
        assert_eq!(latch_len(32), 8);
        assert_eq!(latch_len(33), 16);
        assert_eq!(latch_len(160), 40);
    }

    #[test]
    fn test_encode_pixel_is_grb_with_frame_bit() {
        assert_eq!(encode_pixel(RED), [0x80, 0xFF, 0x80]);
        assert_eq!(encode_pixel(GREEN), [0xFF, 0x80, 0x80]);
        assert_eq!(encode_pixel(BLACK), [0x80, 0x80, 0x80]);
        assert_eq!(
            encode_pixel(Rgb {
                r: 0x01,
                g: 0x02,
                b: 0x03
            }),
            [0x82, 0x81, 0x83]
        );
    }

    #[test]
    fn test_spi_sink_bytes() {
        let mut bytes = Vec::new();
        {
            let sink = SpiSink::new(|byte: u8| bytes.push(byte));
            let mut strip = Strip::new(sink, 2).unwrap();
            strip.draw_solid(RED);
        }

        let mut expected = vec![0x80, 0xFF, 0x80, 0x80, 0xFF, 0x80];
        expected.extend([0; 8]);
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_strip_clear_latches_then_blanks() {
        let mut strip = Strip::new(RecordingSink::default(), 3).unwrap();
        strip.clear();

        let sink = strip.sink();
        assert_eq!(sink.frames, vec![vec![], vec![BLACK; 3]]);
        assert_eq!(sink.latch_sizes, vec![3, 3]);
    }

    #[test]
    fn test_strip_masks_to_seven_bits() {
        let mut strip = Strip::new(RecordingSink::default(), 1).unwrap();
        strip.draw_frame(&[Rgb {
            r: 0xFF,
            g: 0x80,
            b: 0x7F,
        }]);
        assert_eq!(
            strip.sink().last_frame(),
            Some(
                &[Rgb {
                    r: 0x7F,
                    g: 0x00,
                    b: 0x7F
                }][..]
            )
        );
    }

    #[test]
    fn test_strip_needs_pixels() {
        assert_eq!(
            Strip::new(RecordingSink::default(), 0).err(),
            Some(ConfigError::NoPixels)
        );
    }

    #[test]
    fn test_widen() {
        assert_eq!(widen_channel(0x00), 0x00);
        assert_eq!(widen_channel(0x40), 0x81);
        assert_eq!(widen_channel(0x7F), 0xFF);
        assert_eq!(
            widen(WHITE),
            Rgb {
                r: 0xFF,
                g: 0xFF,
                b: 0xFF
            }
        );
    }

    #[test]
    fn test_buffered_sink_writes_on_latch() {
        let mut sink: BufferedSink<MockWriter, 8> = BufferedSink::new(MockWriter::default());
        sink.draw_pixel(RED);
        sink.draw_pixel(BLACK);
        sink.issue_latch(2);
        sink.draw_solid(GREEN, 3);

        assert_eq!(sink.take_error(), None);
        let writer = sink.into_inner();
        assert_eq!(
            writer.frames,
            vec![
                vec![widen(RED), BLACK],
                vec![widen(GREEN); 3],
            ]
        );
    }

    #[test]
    fn test_buffered_sink_reports_errors() {
        let mut sink: BufferedSink<MockWriter, 4> = BufferedSink::new(MockWriter {
            frames: Vec::new(),
            fail: true,
        });
        sink.draw_pixel(WHITE);
        sink.issue_latch(1);

        assert_eq!(sink.take_error(), Some("bus error"));
        assert_eq!(sink.take_error(), None);
    }
}
