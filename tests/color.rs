mod tests {
    use ledloom::color::{
        BLACK, Palette, PaletteId, Rgb, blend_colors, rgb_from_u32, scale_channels, scale_color,
        sum_colors, unit_to_byte,
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    #[test]
    fn test_blend_colors() {
        assert_eq!(blend_colors(RED, BLUE, 0), RED);
        assert_eq!(blend_colors(RED, BLUE, 255), BLUE);
        assert_eq!(
            blend_colors(RED, BLUE, 128),
            Rgb {
                r: 127,
                g: 0,
                b: 128
            }
        );
        assert_eq!(blend_colors(WHITE, BLACK, 255), BLACK);
        assert_eq!(blend_colors(WHITE, BLACK, 0), WHITE);
    }

    #[test]
    fn test_scale_color() {
        assert_eq!(scale_color(WHITE, 255), WHITE);
        assert_eq!(scale_color(WHITE, 0), BLACK);
        assert_eq!(
            scale_color(WHITE, 128),
            Rgb {
                r: 128,
                g: 128,
                b: 128
            }
        );
        assert_eq!(scale_color(BLACK, 255), BLACK);
    }

    #[test]
    fn test_scale_channels() {
        let c = Rgb {
            r: 200,
            g: 100,
            b: 50,
        };
        assert_eq!(scale_channels(c, WHITE), c);
        assert_eq!(scale_channels(c, BLACK), BLACK);
        assert_eq!(
            scale_channels(
                c,
                Rgb {
                    r: 255,
                    g: 128,
                    b: 0
                }
            ),
            Rgb { r: 200, g: 50, b: 0 }
        );
    }

    #[test]
    fn test_sum_colors_saturates() {
        assert_eq!(sum_colors(RED, GREEN), Rgb { r: 255, g: 255, b: 0 });
        assert_eq!(sum_colors(WHITE, WHITE), WHITE);
        assert_eq!(
            sum_colors(
                Rgb {
                    r: 200,
                    g: 10,
                    b: 0
                },
                Rgb {
                    r: 100,
                    g: 10,
                    b: 0
                }
            ),
            Rgb { r: 255, g: 20, b: 0 }
        );
    }

    #[test]
    fn test_rgb_from_u32() {
        assert_eq!(rgb_from_u32(0xFF8800), Rgb { r: 255, g: 136, b: 0 });
        assert_eq!(rgb_from_u32(0), BLACK);
        assert_eq!(rgb_from_u32(0xFFFFFF), WHITE);
    }

    #[test]
    fn test_unit_to_byte_clamps() {
        assert_eq!(unit_to_byte(0.0), 0);
        assert_eq!(unit_to_byte(1.0), 255);
        assert_eq!(unit_to_byte(0.5), 128);
        assert_eq!(unit_to_byte(-3.0), 0);
        assert_eq!(unit_to_byte(7.0), 255);
    }

    #[test]
    fn test_palette_color_wraps() {
        let palette = Palette::Preset(PaletteId::Rgb);
        assert_eq!(palette.color_count(), 3);
        assert_eq!(palette.color(0), RED);
        assert_eq!(palette.color(2), BLUE);
        assert_eq!(palette.color(3), RED);
        assert_eq!(palette.color(7), GREEN);
    }

    #[test]
    fn test_palette_sample_blends_and_wraps() {
        let palette = Palette::Preset(PaletteId::Rgb);
        assert_eq!(palette.sample(0.0), RED);
        assert_eq!(palette.sample(0.5), blend_colors(RED, GREEN, 128));
        // the fraction past the last color blends back to the first
        assert_eq!(palette.sample(2.5), blend_colors(BLUE, RED, 128));
        assert_eq!(palette.sample(-4.0), RED);
    }

    #[test]
    fn test_single_color_palette_sampling() {
        assert_eq!(Palette::Preset(PaletteId::White).sample(123.456), WHITE);
        let solid = Palette::Solid(Rgb {
            r: 1,
            g: 2,
            b: 3,
        });
        assert_eq!(solid.color_count(), 1);
        assert_eq!(solid.sample(0.9), Rgb { r: 1, g: 2, b: 3 });
        assert_eq!(solid.color(5), Rgb { r: 1, g: 2, b: 3 });
    }
}
