mod tests {
    use embassy_time::Instant;
    use ledloom::color::{BLACK, Palette, Rgb};
    use ledloom::protocol::wire::{SEGMENT_END, SEGMENT_REVERSE, SegmentWord, StripMask};
    use ledloom::{
        Animation, ChannelKind, EffectId, Engine, EngineConfig, Layout, OutputDriver,
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    #[derive(Default)]
    struct Capture {
        frames: Vec<(u8, Vec<Rgb>)>,
    }

    impl OutputDriver for Capture {
        fn push(&mut self, channel: u8, _kind: ChannelKind, pixels: &[Rgb]) {
            self.frames.push((channel, pixels.to_vec()));
        }
    }

    fn engine() -> Engine<32> {
        Engine::new(EngineConfig {
            layout: Layout::EMPTY,
            refresh_hz: 50,
            brightness: WHITE,
            rng_seed: 1,
        })
    }

    fn segment(channel: u8, start: u16, len: u16, flags: u8) -> SegmentWord {
        SegmentWord {
            flags,
            channel,
            start,
            len,
        }
    }

    fn solid(effect: EffectId, color: Rgb) -> Animation {
        Animation {
            effect,
            speed: 1000,
            direction: false,
            option: 0,
            palette: Palette::Solid(color),
        }
    }

    fn only(strip: usize) -> StripMask {
        let mut mask = StripMask([0; 4]);
        mask.0[strip / 32] = 1 << (strip % 32);
        mask
    }

    #[test]
    fn test_segments_concatenate_across_channels() {
        let mut engine = engine();
        engine.set_channel(0, ChannelKind::PixelStrip, 8).unwrap();
        engine.set_channel(1, ChannelKind::PixelStrip, 8).unwrap();
        engine
            .set_virtual_strip(
                0,
                &[segment(0, 0, 4, 0), segment(1, 2, 3, SEGMENT_END)],
            )
            .unwrap();
        assert_eq!(engine.strip(0).unwrap().len(), 7);

        engine.animate(solid(EffectId::On, RED), only(0), Instant::from_millis(0));
        let mut out = Capture::default();
        engine.step(Instant::from_millis(20), &mut out);

        let chan0 = engine.channel(0).unwrap().pixels();
        let chan1 = engine.channel(1).unwrap().pixels();
        assert!(chan0[..4].iter().all(|&c| c == RED));
        assert!(chan0[4..].iter().all(|&c| c == BLACK));
        assert!(chan1[..2].iter().all(|&c| c == BLACK));
        assert!(chan1[2..5].iter().all(|&c| c == RED));
        assert!(chan1[5..].iter().all(|&c| c == BLACK));
        // both registered channels were flushed
        assert_eq!(out.frames.len(), 2);
    }

    #[test]
    fn test_reversed_segment_mirrors() {
        let mut engine = engine();
        engine.set_channel(0, ChannelKind::PixelStrip, 6).unwrap();
        engine
            .set_virtual_strip(0, &[segment(0, 0, 6, SEGMENT_REVERSE | SEGMENT_END)])
            .unwrap();

        let mut animation = solid(EffectId::OnePixel, RED);
        animation.option = 1;
        engine.animate(animation, only(0), Instant::from_millis(0));
        let mut out = Capture::default();
        engine.step(Instant::from_millis(20), &mut out);

        // logical pixel 1 lands on physical pixel 4
        let pixels = engine.channel(0).unwrap().pixels();
        for (x, &c) in pixels.iter().enumerate() {
            assert_eq!(c, if x == 4 { RED } else { BLACK });
        }
        assert_eq!(engine.strip(0).unwrap().pixels()[1], RED);
    }

    #[test]
    fn test_direction_bit_reverses_composition_only() {
        let mut forward = engine();
        let mut backward = engine();
        for engine in [&mut forward, &mut backward] {
            engine.set_channel(0, ChannelKind::PixelStrip, 6).unwrap();
            engine
                .set_virtual_strip(0, &[segment(0, 0, 6, SEGMENT_END)])
                .unwrap();
        }

        let mut animation = solid(EffectId::OnePixel, RED);
        animation.option = 1;
        forward.animate(animation, only(0), Instant::from_millis(0));
        animation.direction = true;
        backward.animate(animation, only(0), Instant::from_millis(0));

        let mut out = Capture::default();
        forward.step(Instant::from_millis(20), &mut out);
        backward.step(Instant::from_millis(20), &mut out);

        // identical logical buffers, mirrored physical output
        assert_eq!(
            forward.strip(0).unwrap().pixels(),
            backward.strip(0).unwrap().pixels()
        );
        let fwd: Vec<Rgb> = forward.channel(0).unwrap().pixels().to_vec();
        let mut mirrored: Vec<Rgb> = backward.channel(0).unwrap().pixels().to_vec();
        mirrored.reverse();
        assert_eq!(fwd, mirrored);
    }

    #[test]
    fn test_overlap_newest_configuration_wins() {
        let mut engine = engine();
        engine.set_channel(0, ChannelKind::PixelStrip, 4).unwrap();
        engine
            .set_virtual_strip(0, &[segment(0, 0, 4, SEGMENT_END)])
            .unwrap();
        engine
            .set_virtual_strip(1, &[segment(0, 0, 4, SEGMENT_END)])
            .unwrap();

        engine.animate(solid(EffectId::On, RED), only(0), Instant::from_millis(0));
        engine.animate(solid(EffectId::On, BLUE), only(1), Instant::from_millis(5));
        let mut out = Capture::default();
        engine.step(Instant::from_millis(20), &mut out);
        assert!(engine.channel(0).unwrap().pixels().iter().all(|&c| c == BLUE));

        // reanimating the first strip puts it back on top
        engine.animate(solid(EffectId::On, RED), only(0), Instant::from_millis(30));
        engine.step(Instant::from_millis(40), &mut out);
        assert!(engine.channel(0).unwrap().pixels().iter().all(|&c| c == RED));
    }

    #[test]
    fn test_shrunken_channel_drops_writes() {
        let mut engine = engine();
        engine.set_channel(0, ChannelKind::PixelStrip, 8).unwrap();
        engine
            .set_virtual_strip(0, &[segment(0, 0, 8, SEGMENT_END)])
            .unwrap();
        engine.animate(solid(EffectId::On, RED), only(0), Instant::from_millis(0));
        let mut out = Capture::default();
        engine.step(Instant::from_millis(20), &mut out);

        // re-register smaller; the strip still claims eight pixels
        engine.set_channel(0, ChannelKind::PixelStrip, 4).unwrap();
        engine.animate(solid(EffectId::On, RED), only(0), Instant::from_millis(30));
        engine.step(Instant::from_millis(50), &mut out);

        let pixels = engine.channel(0).unwrap().pixels();
        assert_eq!(pixels.len(), 4);
        assert!(pixels.iter().all(|&c| c == RED));
    }

    #[test]
    fn test_brightness_ceiling_scales_composition() {
        let mut engine = engine();
        engine.set_channel(0, ChannelKind::PixelStrip, 4).unwrap();
        engine
            .set_virtual_strip(0, &[segment(0, 0, 4, SEGMENT_END)])
            .unwrap();
        engine.set_brightness(Rgb {
            r: 128,
            g: 255,
            b: 0,
        });

        engine.animate(solid(EffectId::On, WHITE), only(0), Instant::from_millis(0));
        let mut out = Capture::default();
        engine.step(Instant::from_millis(20), &mut out);

        let expected = Rgb {
            r: 128,
            g: 255,
            b: 0,
        };
        assert!(engine.channel(0).unwrap().pixels().iter().all(|&c| c == expected));
        // the logical buffer itself stays unscaled
        assert!(engine.strip(0).unwrap().pixels().iter().all(|&c| c == WHITE));
    }

    #[test]
    fn test_uncovered_pixels_stay_black() {
        let mut engine = engine();
        engine.set_channel(0, ChannelKind::PixelStrip, 8).unwrap();
        engine
            .set_virtual_strip(0, &[segment(0, 2, 3, SEGMENT_END)])
            .unwrap();
        engine.animate(solid(EffectId::On, RED), only(0), Instant::from_millis(0));
        let mut out = Capture::default();
        engine.step(Instant::from_millis(20), &mut out);

        let pixels = engine.channel(0).unwrap().pixels();
        for (x, &c) in pixels.iter().enumerate() {
            let covered = (2..5).contains(&x);
            assert_eq!(c, if covered { RED } else { BLACK });
        }
    }

    #[test]
    fn test_zero_length_claims_rest_of_channel() {
        let mut engine = engine();
        engine.set_channel(0, ChannelKind::PixelStrip, 10).unwrap();
        engine
            .set_virtual_strip(0, &[segment(0, 4, 0, SEGMENT_END)])
            .unwrap();
        assert_eq!(engine.strip(0).unwrap().len(), 6);
    }

    #[test]
    fn test_end_flag_stops_table_walk() {
        let mut engine = engine();
        engine.set_channel(0, ChannelKind::PixelStrip, 8).unwrap();
        // the entry after the end flag would be invalid, but is never read
        engine
            .set_virtual_strip(
                0,
                &[segment(0, 0, 2, SEGMENT_END), segment(9, 100, 50, 0)],
            )
            .unwrap();
        assert_eq!(engine.strip(0).unwrap().len(), 2);
        assert_eq!(engine.strip(0).unwrap().segments().len(), 1);
    }
}
