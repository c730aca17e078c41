mod tests {
    use myrtio_light_scenes::color::{BLACK, RED, WHITE};
    use myrtio_light_scenes::filter::{CANDLE, TYPICAL_LED_STRIP, UNCORRECTED};
    use myrtio_light_scenes::{ColorOrder, OutputConfig, OutputDriver, Rgb, SmartLedsOutput};
    use smart_leds::SmartLedsWrite;

    /// Writer that keeps the last frame it was handed
    #[derive(Debug, Default)]
    struct CaptureWriter {
        frames: Vec<Vec<Rgb>>,
        fail: bool,
    }

    impl SmartLedsWrite for CaptureWriter {
        type Error = ();
        type Color = Rgb;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            if self.fail {
                return Err(());
            }
            self.frames.push(iterator.into_iter().map(Into::into).collect());
            Ok(())
        }
    }

    fn plain_config() -> OutputConfig {
        OutputConfig {
            color_order: ColorOrder::Rgb,
            correction: None,
            ..OutputConfig::default()
        }
    }

    #[test]
    fn test_uncorrected_full_intensity_is_passthrough() {
        let mut output = SmartLedsOutput::configure(CaptureWriter::default(), &plain_config());
        let colors = [RED, WHITE, Rgb::new(1, 2, 3)];

        output.write(&colors, 255);

        assert!(!output.correction().is_active());
        assert_eq!(output.writer().frames, vec![colors.to_vec()]);
    }

    #[test]
    fn test_zero_intensity_blacks_out() {
        let mut output = SmartLedsOutput::configure(CaptureWriter::default(), &plain_config());

        output.write(&[WHITE; 4], 0);

        assert_eq!(output.writer().frames[0], vec![BLACK; 4]);
    }

    #[test]
    fn test_channels_follow_color_order() {
        let config = OutputConfig {
            color_order: ColorOrder::Bgr,
            ..plain_config()
        };
        let mut output = SmartLedsOutput::configure(CaptureWriter::default(), &config);

        output.write(&[Rgb::new(10, 20, 30)], 255);

        assert_eq!(output.writer().frames[0], vec![Rgb::new(30, 20, 10)]);
        assert_eq!(ColorOrder::Grb.apply(Rgb::new(1, 2, 3)), Rgb::new(2, 1, 3));
        assert_eq!(ColorOrder::Gbr.apply(Rgb::new(1, 2, 3)), Rgb::new(2, 3, 1));
    }

    #[test]
    fn test_default_config_corrects_and_reorders() {
        let mut output =
            SmartLedsOutput::configure(CaptureWriter::default(), &OutputConfig::default());

        output.write(&[WHITE], 255);

        // White through 0xFFB0F0 correction, then blue-green-red on the wire
        assert_eq!(output.correction().factors(), TYPICAL_LED_STRIP);
        assert_eq!(output.writer().frames[0], vec![Rgb::new(240, 176, 255)]);
    }

    #[test]
    fn test_correction_combines_with_temperature() {
        let config = OutputConfig {
            correction: Some(UNCORRECTED),
            temperature: Some(CANDLE),
            ..plain_config()
        };
        let output = SmartLedsOutput::configure(CaptureWriter::default(), &config);

        assert_eq!(output.correction().factors(), CANDLE);
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let writer = CaptureWriter {
            fail: true,
            ..CaptureWriter::default()
        };
        let mut output = SmartLedsOutput::configure(writer, &plain_config());

        output.write(&[RED; 3], 255);

        assert!(output.into_inner().frames.is_empty());
    }
}
