mod tests {
    use myrtio_light_scenes::math8::{mix8, ramp8, scale8};

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_mix8_truncates_with_256_denominator() {
        assert_eq!(mix8(255, 0, 128), 126);
        assert_eq!(mix8(255, 0, 0), 254);
        assert_eq!(mix8(0, 255, 255), 254);
        assert_eq!(mix8(0, 0, 77), 0);
        assert_eq!(mix8(100, 200, 128), 149);
    }

    #[test]
    fn test_ramp8() {
        assert_eq!(ramp8(0, 100), 0);
        assert_eq!(ramp8(50, 100), 127);
        assert_eq!(ramp8(99, 100), 252);
        assert_eq!(ramp8(100, 100), 255);
        assert_eq!(ramp8(150, 100), 255);
        assert_eq!(ramp8(3, 0), 255);
    }
}
