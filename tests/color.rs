mod common;

mod tests {
    use myrtio_light_scenes::color::{
        BLACK, DISCO_PALETTE, Hsv, RED, Rgb, WHITE, fade_to_black_by, fill_rainbow, hsv2rgb,
        kelvin_to_rgb, mix_colors, random_color, rgb_from_u32,
    };

    use crate::common;

    #[test]
    fn test_mix_colors_to_black() {
        assert_eq!(mix_colors(RED, BLACK, 128), Rgb { r: 126, g: 0, b: 0 });
        assert_eq!(mix_colors(RED, BLACK, 0), Rgb { r: 254, g: 0, b: 0 });
        assert_eq!(mix_colors(WHITE, BLACK, 255), BLACK);
    }

    #[test]
    fn test_fade_to_black_by() {
        let mut leds = [WHITE; 3];
        fade_to_black_by(&mut leds, 0);
        assert_eq!(leds, [WHITE; 3]);

        fade_to_black_by(&mut leds, 128);
        assert_eq!(leds, [Rgb::new(127, 127, 127); 3]);

        let mut leds = [RED; 2];
        fade_to_black_by(&mut leds, 255);
        assert_eq!(leds, [BLACK; 2]);
    }

    #[test]
    fn test_fill_rainbow() {
        let mut leds = [BLACK; 4];
        fill_rainbow(&mut leds, 250, 3);

        for (i, led) in leds.iter().enumerate() {
            let hue = 250u8.wrapping_add(3 * i as u8);
            assert_eq!(*led, hsv2rgb(Hsv { hue, sat: 240, val: 255 }));
        }
    }

    #[test]
    fn test_rgb_from_u32() {
        assert_eq!(rgb_from_u32(0x12_3456), Rgb::new(0x12, 0x34, 0x56));
    }

    #[test]
    fn test_random_color_stays_in_palette() {
        let mut rng = common::rng();
        for _ in 0..100 {
            assert!(DISCO_PALETTE.contains(&random_color(&DISCO_PALETTE, &mut rng)));
        }
        assert_eq!(random_color(&[], &mut rng), BLACK);
    }

    #[test]
    fn test_kelvin_to_rgb() {
        assert_eq!(kelvin_to_rgb(1000), Rgb::new(255, 67, 0));
        assert_eq!(kelvin_to_rgb(6600), Rgb::new(255, 255, 255));
        assert_eq!(kelvin_to_rgb(40000), Rgb::new(151, 185, 255));
    }
}
